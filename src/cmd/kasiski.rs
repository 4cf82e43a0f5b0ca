use super::{load_cipher_letters, Context};
use crate::reports;
use cipherforge::config::Config;
use cipherforge::error::CfResult;
use cipherforge::kasiski;
use clap::{ArgMatches, Args};

#[derive(Args, Debug, Clone)]
pub struct KasiskiArgs {
    pub cipher: String,

    #[command(flatten)]
    pub config: Config,
}

pub fn run(args: KasiskiArgs, ctx: &Context, matches: &ArgMatches) -> CfResult<()> {
    let config = ctx.resolve_config(&args.config, matches)?;
    let corpus = load_cipher_letters(&args.cipher)?;
    let report = kasiski::examine(&corpus.letters, &config.kasiski)?;

    if ctx.json {
        reports::print_json(&report)
    } else {
        reports::print_kasiski_report(&report);
        Ok(())
    }
}
