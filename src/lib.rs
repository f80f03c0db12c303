pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod generator;
pub mod io;
pub mod report;

pub use config::{Config, GeneratorConfig};
pub use error::GenerateError;
pub use generator::{GenerationSummary, Generator};
