use std::io::Write;

use log::info;

use super::config::Config;
use super::error::{DriverError, UsageError, USAGE};
use crate::emit::write_declarations;
use crate::params::PlatformParams;

pub struct Driver {
    config: Config,
}

impl Driver {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Emits to stdout, reports failures on stderr, and returns the
    /// process exit status.
    pub fn run(&self) -> i32 {
        let stdout = std::io::stdout();
        let stderr = std::io::stderr();
        let mut out = stdout.lock();
        let mut err = stderr.lock();

        match self.run_with(&mut out, &mut err) {
            Ok(()) => 0,
            Err(e) => {
                if let DriverError::Io(_) = e {
                    let _ = writeln!(err, "cfggen: {}", e);
                }

                e.exit_code()
            }
        }
    }

    pub fn run_with<O: Write, E: Write>(&self, out: &mut O, err: &mut E) -> Result<(), DriverError> {
        let mode = match self.config.mode() {
            Ok(mode) => mode,
            Err(usage_err) => {
                report_usage(&usage_err, err);
                return Err(usage_err.into());
            }
        };

        info!("emitting declarations in {} mode", mode);

        let params = PlatformParams::populate();
        write_declarations(&params, mode, out)?;

        Ok(())
    }
}

pub fn report_usage<E: Write>(usage_err: &UsageError, err: &mut E) {
    info!("{}", usage_err);

    // nothing else to tell the caller if stderr itself is gone
    let _ = writeln!(err, "{}", USAGE);
}
