mod common;

use cipherforge::error::CipherError;
use cipherforge::transform::{transform_str, transform_stream, Cipher, Mode};
use cipherforge::vigenere::{self, Keyword};
use common::ENGLISH_SAMPLE;
use std::fs::{self, File};
use std::io::{self, Cursor, Read, Write};
use tempfile::tempdir;

struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::Other, "unreadable"))
    }
}

#[test]
fn test_file_roundtrip() {
    let dir = tempdir().unwrap();
    let plain = dir.path().join("plain.txt");
    let cipher = dir.path().join("cipher.txt");
    let restored = dir.path().join("restored.txt");
    fs::write(&plain, ENGLISH_SAMPLE).unwrap();

    let key = Cipher::Vigenere(Keyword::new("rainbow").unwrap());
    let stats = transform_stream(
        File::open(&plain).unwrap(),
        File::create(&cipher).unwrap(),
        &key,
        Mode::Encrypt,
    )
    .unwrap();
    assert_eq!(stats.chars, ENGLISH_SAMPLE.chars().count() as u64);
    assert_eq!(
        stats.letters,
        ENGLISH_SAMPLE.chars().filter(|c| c.is_ascii_alphabetic()).count() as u64
    );

    transform_stream(
        File::open(&cipher).unwrap(),
        File::create(&restored).unwrap(),
        &key,
        Mode::Decrypt,
    )
    .unwrap();

    let back = fs::read_to_string(&restored).unwrap();
    assert_eq!(back, ENGLISH_SAMPLE.to_lowercase());
}

#[test]
fn test_key_position_carries_across_lines() {
    let key = Keyword::new("lemon").unwrap();
    let text = "attack\nat\n\ndawn\n";
    let mut out = Vec::new();
    transform_stream(
        Cursor::new(text),
        &mut out,
        &Cipher::Vigenere(key.clone()),
        Mode::Encrypt,
    )
    .unwrap();

    let streamed = String::from_utf8(out).unwrap();
    assert_eq!(streamed, "lxfopv\nef\n\nrnhr\n");
    assert_eq!(streamed, vigenere::encrypt(text, &key));
}

#[test]
fn test_stream_matches_in_memory() {
    let cipher = Cipher::Caesar(29);
    let mut out = Vec::new();
    transform_stream(Cursor::new(ENGLISH_SAMPLE), &mut out, &cipher, Mode::Encrypt).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        transform_str(ENGLISH_SAMPLE, &cipher, Mode::Encrypt)
    );
}

#[test]
fn test_sink_failure() {
    let err = transform_stream(
        Cursor::new("hello"),
        BrokenPipe,
        &Cipher::Caesar(3),
        Mode::Encrypt,
    )
    .unwrap_err();
    assert!(matches!(err, CipherError::SinkWrite(_)));
}

#[test]
fn test_source_failure() {
    let err = transform_stream(FailingReader, Vec::new(), &Cipher::Caesar(3), Mode::Encrypt)
        .unwrap_err();
    assert!(matches!(err, CipherError::SourceRead(_)));
}

#[test]
fn test_latin1_bytes_pass_through_as_replacement() {
    let mut out = Vec::new();
    let stats = transform_stream(
        Cursor::new(&b"caf\xe9 attack at dawn"[..]),
        &mut out,
        &Cipher::Caesar(3),
        Mode::Encrypt,
    )
    .unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "fdi\u{FFFD} dwwdfn dw gdzq");
    assert_eq!(stats.letters, 15);
}

#[test]
fn test_undecodable_bytes_do_not_advance_key() {
    let key = Keyword::new("lemon").unwrap();
    let mut out = Vec::new();
    transform_stream(
        Cursor::new(&b"att\xffack\nat dawn\n"[..]),
        &mut out,
        &Cipher::Vigenere(key),
        Mode::Encrypt,
    )
    .unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "lxf\u{FFFD}opv\nef rnhr\n"
    );
}

#[test]
fn test_mode_names() {
    assert_eq!(Mode::Encrypt.to_string(), "encrypt");
    assert_eq!("decrypt".parse::<Mode>().unwrap(), Mode::Decrypt);
}

#[test]
fn test_empty_input() {
    let mut out = Vec::new();
    let stats =
        transform_stream(Cursor::new(""), &mut out, &Cipher::Caesar(3), Mode::Decrypt).unwrap();
    assert!(out.is_empty());
    assert_eq!(stats.chars, 0);
}
