pub mod config;
pub mod error;
pub mod state;

pub use config::Tuning;
pub use error::LoadError;
