pub mod chunk;
pub mod engine;
pub mod pipeline;
pub mod profile;
pub mod publisher;
pub mod roster;

pub use crate::domain::model::{FieldValue, HandlerResponse, PayloadSource, PlayerRecord};
pub use crate::domain::ports::{ConfigProvider, Notifier, Pipeline, RosterSource};
pub use crate::utils::error::Result;
