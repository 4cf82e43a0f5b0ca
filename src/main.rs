use cipherforge::error::{CfResult, CipherError};
use cipherforge::profile::LetterProfile;
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use std::fs::File;
use std::process;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Large plaintext sample used as the letter frequency reference
    #[arg(global = true, short, long)]
    reference: Option<String>,

    /// Monogram count table (letter<TAB>count) used as the reference
    #[arg(global = true, long, conflicts_with = "reference")]
    reference_counts: Option<String>,

    /// JSON file with analysis parameters; explicit flags override it
    #[arg(global = true, long)]
    config: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    json: bool,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Letter frequency analysis of a text file
    Profile(cmd::profile::ProfileArgs),
    Caesar(cmd::caesar::CaesarArgs),
    Vigenere(cmd::vigenere::VigenereArgs),
    /// Estimate the key length from repeated fragments
    Kasiski(cmd::kasiski::KasiskiArgs),
    /// Estimate the key length from indices of coincidence
    Friedman(cmd::friedman::FriedmanArgs),
    /// Recover the keyword of a Vigenère ciphertext
    Crack(cmd::crack::CrackArgs),
}

fn load_reference(cli: &Cli) -> CfResult<LetterProfile> {
    if let Some(path) = &cli.reference_counts {
        info!("📂 Loading Reference Counts: {}", path);
        let file = File::open(path).map_err(CipherError::SourceRead)?;
        return LetterProfile::from_counts_reader(file);
    }
    if let Some(path) = &cli.reference {
        info!("📂 Loading Reference Sample: {}", path);
        let file = File::open(path).map_err(CipherError::SourceRead)?;
        return LetterProfile::from_reader(file);
    }
    Ok(LetterProfile::english())
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let filter = if cli.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let reference = load_reference(&cli).unwrap_or_else(|e| {
        error!("❌ Could not load reference profile: {}", e);
        process::exit(1);
    });
    if reference.total() == 0 {
        warn!("⚠️  Reference profile contains no letters. Every analysis will degenerate.");
    }

    let ctx = cmd::Context {
        reference,
        config_path: cli.config.clone(),
        json: cli.json,
    };

    // Subcommands are required, so clap always records one.
    let Some((_, sub_matches)) = matches.subcommand() else {
        unreachable!("clap enforces a subcommand");
    };

    let result = match cli.command {
        Commands::Profile(args) => cmd::profile::run(args, &ctx),
        Commands::Caesar(args) => cmd::caesar::run(args, &ctx),
        Commands::Vigenere(args) => cmd::vigenere::run(args),
        Commands::Kasiski(args) => cmd::kasiski::run(args, &ctx, sub_matches),
        Commands::Friedman(args) => cmd::friedman::run(args, &ctx, sub_matches),
        Commands::Crack(args) => cmd::crack::run(args, &ctx, sub_matches),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
