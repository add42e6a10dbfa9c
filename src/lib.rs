pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::LambdaConfig;

#[cfg(feature = "lambda")]
pub use adapters::sns::SnsNotifier;

pub use crate::core::{
    engine::NotifyEngine,
    pipeline::RosterPipeline,
    roster::{fetch_roster_text, RosterFetcher},
};
pub use utils::error::{NotifyError, Result};
