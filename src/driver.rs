mod config;
mod driver;
mod error;

pub use config::Config;
pub use driver::{report_usage, Driver};
pub use error::{DriverError, UsageError, USAGE};
