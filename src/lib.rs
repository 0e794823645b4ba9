pub mod config;
pub mod context;
mod error;

pub use config::{ConfigError, Fallback, Session};
pub use context::{AppContext, FromSession};
pub use error::Error;
