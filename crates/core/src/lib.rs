pub mod config;
pub mod error;
pub mod flight;

pub use config::Config;
pub use error::*;
pub use flight::*;
