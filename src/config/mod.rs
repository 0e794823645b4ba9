//! Environment configuration sessions.

mod builder;
mod core_config;
mod env;
mod error;
mod exit;
mod fs;
mod optional;
mod property;
mod resolve;
mod session;
mod source;
pub mod validators;

pub use builder::SessionBuilder;
pub use core_config::{CoreConfig, DeploymentEnvironment, LogLevel, UnknownVariant};
pub use env::{MapEnv, ProcessEnv};
pub use error::ConfigError;
pub use exit::{PanicTerminator, ProcessTerminator, Terminator};
pub use fs::{AbsentFileSystem, FileSystem, StdFileSystem};
pub use optional::{DeploymentContext, OptionalityRule};
pub use property::{Case, Property};
pub use resolve::{interpolate, Interpolated};
pub use session::{Fallback, Session, ValidationErrors, ValidationReport};
pub use source::EnvSource;
pub use validators::Validator;
