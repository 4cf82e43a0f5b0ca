use super::{create_output, load_cipher_letters, open_input, Context};
use crate::reports;
use cipherforge::config::Config;
use cipherforge::cracker::{self, CrackEvent, CrackObserver, KeyLengthMethod};
use cipherforge::error::CfResult;
use cipherforge::transform::{transform_stream, Cipher, Mode};
use clap::{ArgMatches, Args};
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct CrackArgs {
    pub cipher: String,

    #[arg(short, long, value_enum, default_value_t = KeyLengthMethod::Friedman)]
    pub method: KeyLengthMethod,

    /// Decrypt the ciphertext with the recovered keyword into this file
    #[arg(short, long)]
    pub decrypt_to: Option<String>,

    #[command(flatten)]
    pub config: Config,
}

struct LogObserver;

impl CrackObserver for LogObserver {
    fn on_event(&self, event: &CrackEvent<'_>) {
        match event {
            CrackEvent::KeyLengthEstimated { method, key_length } => {
                info!("[{}] The most congruent key length: {}", method, key_length)
            }
            CrackEvent::ColumnsBuilt { columns } => {
                info!("Broke ciphertext down into {} streams", columns.len())
            }
            CrackEvent::KeywordRecovered { keyword } => info!("The key is: {}", keyword),
        }
    }
}

pub fn run(args: CrackArgs, ctx: &Context, matches: &ArgMatches) -> CfResult<()> {
    let config = ctx.resolve_config(&args.config, matches)?;
    let corpus = load_cipher_letters(&args.cipher)?;
    info!("Index of coincidence: {:.6}", corpus.profile.index_of_coincidence());

    let report = cracker::crack(
        &corpus.letters,
        &ctx.reference,
        args.method,
        &config,
        &LogObserver,
    )?;

    if ctx.json {
        reports::print_json(&report)?;
    } else {
        reports::print_crack_report(&report);
    }

    if let Some(out) = args.decrypt_to {
        info!("Opening \"{}\" for decryption...", args.cipher);
        transform_stream(
            open_input(&args.cipher)?,
            create_output(&out)?,
            &Cipher::Vigenere(report.keyword().clone()),
            Mode::Decrypt,
        )?;
        info!("Decrypted version stored at: \"{}\"", out);
    }
    Ok(())
}
