#![deny(
    warnings,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo
)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::{Context, Result};
use clap::Parser;
use fitcalc::{cli, dispatch, types::Package, utils};

#[macro_use]
extern crate fitcalc;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    utils::init_logging(cli.verbose, cli.quiet);

    let packages = if cli.packages.is_empty() {
        dlog!("no packages given, using demo batch");
        utils::demo_packages()
    } else {
        cli.packages
    };

    let mut failed = 0usize;
    for (i, package) in packages.iter().enumerate() {
        match report(package, cli.lang, cli.json)
            .with_context(|| format!("package #{} ({})", i + 1, package.tag))
        {
            Ok(line) => println!("{line}"),
            Err(e) if cli.keep_going => {
                tracing::error!("{e:#}");
                failed += 1;
            }
            Err(e) => return Err(e),
        }
    }

    tracing::info!(total = packages.len(), failed, "workouts processed");

    if failed > 0 {
        anyhow::bail!("{failed} of {} packages failed", packages.len());
    }
    Ok(())
}

fn report(package: &Package, lang: fitcalc::message::Lang, json: bool) -> Result<String> {
    let workout = dispatch::read(package)?;
    let info = workout.show_training_info()?;
    dlog!(
        "tag={} distance={} speed={} calories={}",
        package.tag,
        info.distance,
        info.speed,
        info.calories
    );

    if json {
        info.to_json_line()
    } else {
        Ok(info.get_message(lang))
    }
}
