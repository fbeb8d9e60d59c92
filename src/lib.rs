pub mod driver;
pub mod emit;
pub mod params;

pub use driver::{Config, Driver, DriverError, UsageError};
pub use emit::Mode;
pub use params::{BaseParams, PlatformParams};
