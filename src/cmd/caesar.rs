use super::{create_output, open_input, Context};
use crate::reports;
use cipherforge::caesar;
use cipherforge::error::CfResult;
use cipherforge::profile::LetterProfile;
use cipherforge::transform::{transform_stream, Cipher, Mode};
use clap::{Args, Subcommand};
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct CaesarArgs {
    #[command(subcommand)]
    pub action: CaesarAction,
}

#[derive(Subcommand, Debug, Clone)]
pub enum CaesarAction {
    Encrypt(ShiftArgs),
    Decrypt(ShiftArgs),
    /// Recover the shift by frequency analysis
    Break(BreakArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ShiftArgs {
    #[arg(short, long)]
    pub shift: usize,
    pub input: String,
    pub output: String,
}

#[derive(Args, Debug, Clone)]
pub struct BreakArgs {
    pub cipher: String,

    /// Decrypt the ciphertext with the recovered shift into this file
    #[arg(short, long)]
    pub decrypt_to: Option<String>,
}

pub fn run(args: CaesarArgs, ctx: &Context) -> CfResult<()> {
    match args.action {
        CaesarAction::Encrypt(a) => apply(a, Mode::Encrypt),
        CaesarAction::Decrypt(a) => apply(a, Mode::Decrypt),
        CaesarAction::Break(a) => crack(a, ctx),
    }
}

fn apply(args: ShiftArgs, mode: Mode) -> CfResult<()> {
    info!("Opening \"{}\" to {}...", args.input, mode);
    let stats = transform_stream(
        open_input(&args.input)?,
        create_output(&args.output)?,
        &Cipher::Caesar(args.shift),
        mode,
    )?;
    info!(
        "Finished: {} letters. Output stored at \"{}\"",
        stats.letters, args.output
    );
    Ok(())
}

fn crack(args: BreakArgs, ctx: &Context) -> CfResult<()> {
    let cipher = LetterProfile::from_reader(open_input(&args.cipher)?)?;
    let analysis = caesar::crypt_analyse(&ctx.reference, &cipher);

    if ctx.json {
        reports::print_json(&analysis)?;
    } else {
        reports::print_frequency_table(&args.cipher, &cipher, Default::default());
        reports::print_caesar_report(&analysis);
    }

    if let Some(out) = args.decrypt_to {
        apply(
            ShiftArgs {
                shift: analysis.best_shift,
                input: args.cipher,
                output: out,
            },
            Mode::Decrypt,
        )?;
    }
    Ok(())
}
