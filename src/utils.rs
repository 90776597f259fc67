use crate::types::Package;
use anyhow::{Context, Result, bail};
use std::io::IsTerminal;
use tracing_subscriber::{EnvFilter, fmt};

#[macro_export]
macro_rules! dlog {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*);
    };
}

/// Initialize colorful logging on stderr.
///
/// Default level is INFO.
/// - `-v` => DEBUG
/// - `-vv` => TRACE
/// - `-q` => WARN
/// - `-qq` => ERROR
///
/// `RUST_LOG` overrides everything (e.g. `RUST_LOG=trace`).
pub fn init_logging(verbose: u8, quiet: u8) {
    let net = i16::from(verbose) - i16::from(quiet);
    let level = match net {
        i16::MIN..=-2 => "error",
        -1 => "warn",
        0 => "info",
        1 => "debug",
        2..=i16::MAX => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,fitcalc={level}")));

    let show_src = matches!(level, "debug" | "trace");

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339())
        .with_target(true)
        .with_level(true)
        .with_file(show_src)
        .with_line_number(show_src)
        .compact()
        .init();
}

/// The packages the tracker processes when none are given.
pub fn demo_packages() -> Vec<Package> {
    [
        ("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        ("RUN", vec![15000.0, 1.0, 75.0]),
        ("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
    .into_iter()
    .map(|(tag, args)| Package {
        tag: tag.to_string(),
        args,
    })
    .collect()
}

/// Parses `TAG:a,b,c`. The tag itself is only checked by the dispatcher.
pub fn parse_package(s: &str) -> Result<Package> {
    let Some((tag, rest)) = s.split_once(':') else {
        bail!("expected TAG:VALUES, e.g. RUN:15000,1,75 (got {s:?})");
    };

    let tag = tag.trim();
    if tag.is_empty() {
        bail!("missing workout tag in {s:?}");
    }

    let args = rest
        .split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(|v| {
            v.parse::<f64>()
                .with_context(|| format!("not a number: {v:?} in {s:?}"))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Package {
        tag: tag.to_string(),
        args,
    })
}
