pub mod error;
pub mod logger;
pub mod redacted;
pub mod validation;
