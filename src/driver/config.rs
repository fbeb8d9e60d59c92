use clap::{ArgAction, Parser};
use log::LevelFilter;

use super::error::UsageError;
use crate::emit::Mode;

#[derive(Parser, Debug, Clone)]
#[command(name = "cfggen", disable_help_flag = true, disable_version_flag = true)]
pub struct Config {
    /// Declaration style: `hw-cpp` for the hardware build, `cpp` for the runtime
    pub mode: Option<String>,

    /// Log more to stderr (repeat for more detail)
    #[clap(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Config {
    pub fn mode(&self) -> Result<Mode, UsageError> {
        match self.mode {
            Some(ref token) => Ok(token.parse::<Mode>()?),
            None => Err(UsageError::MissingMode),
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

impl TryFrom<Vec<&str>> for Config {
    type Error = UsageError;
    fn try_from(args: Vec<&str>) -> Result<Self, Self::Error> {
        Ok(Config::try_parse_from(args)?)
    }
}
