use std::io;

use nix::errno::Errno;
use thiserror::Error;

use crate::environment::Environment;
use crate::error::describe;
use crate::parser::ParsedCommand;

pub type ExecStatus = Result<i32, ExecError>;

#[derive(Debug, Error)]
pub enum ExecError {
    #[error("{0}: missing operand")]
    MissingOperand(&'static str),
    #[error("{0}: too many arguments")]
    TooManyArguments(&'static str),
    /// A failed system call reported through errno (`cd`, `pwd`).
    #[error("{context}: {}", .errno.desc())]
    Sys { context: &'static str, errno: Errno },
    /// A failed I/O operation (`open`, `execvp`, `wait`, writes).
    #[error("{context}: {}", describe(.source))]
    Io {
        context: &'static str,
        #[source]
        source: io::Error,
    },
}

impl ExecError {
    pub fn io(context: &'static str) -> impl FnOnce(io::Error) -> ExecError {
        move |source| ExecError::Io { context, source }
    }

    pub fn sys(context: &'static str) -> impl FnOnce(Errno) -> ExecError {
        move |errno| ExecError::Sys { context, errno }
    }
}

pub trait Executor {
    fn exec(&mut self, cmd: &ParsedCommand, env: &mut Environment) -> ExecStatus;

    /// Collects finished background work. Called once per prompt.
    fn reap(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestExecutor {
        pub log: Vec<String>,
    }

    impl Executor for TestExecutor {
        fn exec(&mut self, cmd: &ParsedCommand, _env: &mut Environment) -> ExecStatus {
            self.log.push(format!("command: {:?}", cmd.args));
            Ok(0)
        }
    }

    #[test]
    fn test_default_reap_is_noop() {
        let mut exec = TestExecutor { log: vec![] };
        exec.reap();
        let cmd = ParsedCommand {
            args: vec!["ls".to_string()],
            ..ParsedCommand::default()
        };
        let mut env = Environment::default();
        assert!(matches!(exec.exec(&cmd, &mut env), Ok(0)));
        assert_eq!(exec.log, vec!["command: [\"ls\"]"]);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ExecError::MissingOperand("set").to_string(), "set: missing operand");
        assert_eq!(ExecError::TooManyArguments("cd").to_string(), "cd: too many arguments");
        assert_eq!(
            ExecError::sys("cd")(Errno::ENOENT).to_string(),
            "cd: No such file or directory"
        );
        let err = io::Error::from_raw_os_error(Errno::EACCES as i32);
        assert_eq!(ExecError::io("open")(err).to_string(), "open: Permission denied");
    }
}
