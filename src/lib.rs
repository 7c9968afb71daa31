pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::console::{ConsoleNotifier, ConsoleScreen};
pub use adapters::http_provider::HttpHealthProvider;
pub use config::CliConfig;
pub use core::flow::{read_recent_sleep, SleepReadFlow};
pub use utils::error::{HealthError, Result};
