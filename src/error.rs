use std::io;

use nix::errno::Errno;
use thiserror::Error;

use crate::executor::ExecError;
use crate::parser::ParseError;

/// Anything that can abort a single command line.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("xsh: {0}")]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Exec(#[from] ExecError),
}

/// Short system error text in the style of `perror`, e.g. "No such file or directory".
pub fn describe(err: &io::Error) -> String {
    match err.raw_os_error() {
        Some(code) => Errno::from_raw(code).desc().to_string(),
        None => err.to_string(),
    }
}
