use super::{load_cipher_letters, Context};
use crate::reports;
use cipherforge::config::Config;
use cipherforge::error::CfResult;
use cipherforge::friedman;
use clap::{ArgMatches, Args};

#[derive(Args, Debug, Clone)]
pub struct FriedmanArgs {
    pub cipher: String,

    #[command(flatten)]
    pub config: Config,
}

pub fn run(args: FriedmanArgs, ctx: &Context, matches: &ArgMatches) -> CfResult<()> {
    let config = ctx.resolve_config(&args.config, matches)?;
    let corpus = load_cipher_letters(&args.cipher)?;
    let report = friedman::examine(
        &corpus.letters,
        ctx.reference.index_of_coincidence(),
        &config.friedman,
    )?;

    if ctx.json {
        reports::print_json(&report)
    } else {
        reports::print_friedman_report(&report);
        Ok(())
    }
}
