#[cfg(feature = "cli")]
pub mod cli;
pub mod lambda;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use lambda::LambdaConfig;
