#![deny(
    warnings,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo
)]
#![allow(
    clippy::multiple_crate_versions,
    clippy::missing_errors_doc,
    clippy::must_use_candidate
)]

pub mod cli;
pub mod dispatch;
pub mod errors;
pub mod message;
pub mod training;
pub mod types;
pub mod utils;
