use super::{open_input, Context};
use crate::reports;
use cipherforge::error::CfResult;
use cipherforge::profile::{AnalysisOrder, FrequencyEntry, LetterProfile};
use clap::Args;
use serde::Serialize;

#[derive(Args, Debug, Clone)]
pub struct ProfileArgs {
    /// Text file to analyse
    pub file: String,

    #[arg(short, long, value_enum, default_value_t = AnalysisOrder::ByFrequency)]
    pub order: AnalysisOrder,
}

#[derive(Serialize)]
struct ProfileOutput<'a> {
    file: &'a str,
    order: AnalysisOrder,
    total: u64,
    index_of_coincidence: f64,
    entries: Vec<FrequencyEntry>,
}

pub fn run(args: ProfileArgs, ctx: &Context) -> CfResult<()> {
    let profile = LetterProfile::from_reader(open_input(&args.file)?)?;

    if ctx.json {
        return reports::print_json(&ProfileOutput {
            file: &args.file,
            order: args.order,
            total: profile.total(),
            index_of_coincidence: profile.index_of_coincidence(),
            entries: profile.entries(args.order),
        });
    }

    reports::print_frequency_table(&args.file, &profile, args.order);
    Ok(())
}
