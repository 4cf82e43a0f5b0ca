//! Streaming encryption and decryption between a reader and a writer.

use crate::caesar;
use crate::error::{CfResult, CipherError};
use crate::vigenere::{self, Keyword};
use clap::ValueEnum;
use serde::Serialize;
use std::io::{BufRead, BufReader, Read, Write};
use strum_macros::{Display, EnumString};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, ValueEnum, Serialize)]
#[strum(serialize_all = "snake_case")]
pub enum Mode {
    Encrypt,
    Decrypt,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cipher {
    Caesar(usize),
    Vigenere(Keyword),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformStats {
    pub chars: u64,
    pub letters: u64,
}

/// Reads `reader` line by line, transforms every character and writes the
/// result to `writer`.
///
/// Bytes that are not valid UTF-8 are replaced by U+FFFD and passed through.
///
/// The Vigenère key position carries across lines. A read or write failure
/// aborts immediately; whatever was already written stays written.
pub fn transform_stream<R: Read, W: Write>(
    reader: R,
    mut writer: W,
    cipher: &Cipher,
    mode: Mode,
) -> CfResult<TransformStats> {
    let mut reader = BufReader::new(reader);
    let mut buf = Vec::new();
    let mut out = String::new();
    let mut stats = TransformStats::default();
    let mut key_pos = 0usize;

    loop {
        buf.clear();
        let n = reader
            .read_until(b'\n', &mut buf)
            .map_err(CipherError::SourceRead)?;
        if n == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);

        out.clear();
        match cipher {
            Cipher::Caesar(shift) => out.extend(caesar::transform(line.chars(), *shift, mode)),
            Cipher::Vigenere(key) => {
                let mut stream = vigenere::transform_from(line.chars(), key, mode, key_pos);
                out.extend(stream.by_ref());
                key_pos = stream.position();
            }
        }

        stats.chars += line.chars().count() as u64;
        stats.letters += out.chars().filter(|c| c.is_ascii_lowercase()).count() as u64;

        writer
            .write_all(out.as_bytes())
            .map_err(CipherError::SinkWrite)?;
    }

    writer.flush().map_err(CipherError::SinkWrite)?;
    debug!(
        "{} finished: {} chars, {} letters",
        mode, stats.chars, stats.letters
    );
    Ok(stats)
}

/// In-memory convenience over [`transform_stream`] semantics.
pub fn transform_str(text: &str, cipher: &Cipher, mode: Mode) -> String {
    match cipher {
        Cipher::Caesar(shift) => caesar::transform(text.chars(), *shift, mode).collect(),
        Cipher::Vigenere(key) => vigenere::transform(text.chars(), key, mode).collect(),
    }
}
