use std::io;

use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Process CPU-time clock unavailable: {0}")]
    Clock(#[source] io::Error),

    #[error("Output error: {0}")]
    Output(#[from] io::Error),

    #[error("Logging setup error: {0}")]
    LoggingSetup(String),
}
