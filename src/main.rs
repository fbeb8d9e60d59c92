use clap::Parser;

use cfggen::driver::{report_usage, UsageError};
use cfggen::{Config, Driver};

fn main() {
    let config = match Config::try_parse() {
        Ok(config) => config,
        Err(e) => {
            report_usage(&UsageError::from(e), &mut std::io::stderr());
            std::process::exit(-1);
        }
    };

    env_logger::Builder::new()
        .filter_level(config.log_level())
        .parse_default_env()
        .init();

    let driver = Driver::new(config);

    std::process::exit(driver.run());
}
