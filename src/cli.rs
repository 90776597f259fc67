use crate::message::Lang;
use crate::types::Package;
use crate::utils::parse_package;
use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[command(
    name = "fitcalc",
    about = "Compute distance, mean speed and calories for RUN / WLK / SWM sensor packages"
)]
pub struct Cli {
    /// Packages as `TAG:VALUES`, e.g. `RUN:15000,1,75`.
    ///
    /// RUN: action,duration_h,weight_kg
    /// WLK: action,duration_h,weight_kg,height_cm
    /// SWM: action,duration_h,weight_kg,pool_length_m,pool_laps
    ///
    /// Without packages the built-in demo batch is processed.
    #[arg(value_name = "PACKAGE", value_parser = parse_package_arg)]
    pub packages: Vec<Package>,

    /// Language of the text summary
    #[arg(long, value_enum, default_value_t = Lang::En)]
    pub lang: Lang,

    /// Print one JSON object per workout instead of text
    #[arg(long)]
    pub json: bool,

    /// Report a bad package and continue with the next one (still exits non-zero)
    #[arg(long)]
    pub keep_going: bool,

    /// Increase log verbosity (-v, -vv). Defaults to INFO.
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Decrease log verbosity (-q, -qq). Defaults to INFO.
    #[arg(short = 'q', long, action = ArgAction::Count, global = true)]
    pub quiet: u8,
}

fn parse_package_arg(s: &str) -> Result<Package, String> {
    parse_package(s).map_err(|e| format!("{e:#}"))
}
