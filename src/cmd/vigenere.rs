use super::{create_output, open_input};
use cipherforge::error::CfResult;
use cipherforge::transform::{transform_stream, Cipher, Mode};
use cipherforge::vigenere::Keyword;
use clap::{Args, Subcommand};
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct VigenereArgs {
    #[command(subcommand)]
    pub action: VigenereAction,
}

#[derive(Subcommand, Debug, Clone)]
pub enum VigenereAction {
    Encrypt(KeyArgs),
    Decrypt(KeyArgs),
    /// Generate a random lowercase keyword
    Keygen(KeygenArgs),
}

#[derive(Args, Debug, Clone)]
pub struct KeyArgs {
    /// Keyword made of letters only
    #[arg(short, long)]
    pub key: Keyword,
    pub input: String,
    pub output: String,
}

#[derive(Args, Debug, Clone)]
pub struct KeygenArgs {
    #[arg(short, long, default_value_t = 8)]
    pub length: usize,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,
}

pub fn run(args: VigenereArgs) -> CfResult<()> {
    match args.action {
        VigenereAction::Encrypt(a) => apply(a, Mode::Encrypt),
        VigenereAction::Decrypt(a) => apply(a, Mode::Decrypt),
        VigenereAction::Keygen(a) => keygen(a),
    }
}

fn apply(args: KeyArgs, mode: Mode) -> CfResult<()> {
    info!("Opening \"{}\" to {}...", args.input, mode);
    let stats = transform_stream(
        open_input(&args.input)?,
        create_output(&args.output)?,
        &Cipher::Vigenere(args.key),
        mode,
    )?;
    info!(
        "Finished: {} letters. Output stored at \"{}\"",
        stats.letters, args.output
    );
    Ok(())
}

fn keygen(args: KeygenArgs) -> CfResult<()> {
    let mut rng = match args.seed {
        Some(s) => fastrand::Rng::with_seed(s),
        None => fastrand::Rng::new(),
    };
    let key = Keyword::random(&mut rng, args.length)?;
    println!("{}", key);
    Ok(())
}
