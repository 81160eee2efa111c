use std::io;

use crate::config::Config;
use crate::environment::Environment;
use crate::parser::ParsedCommand;
use super::builtins::BuiltinManager;
use super::executor::{ExecStatus, Executor};
use super::launcher::Launcher;

/// Routes built-ins to the [`BuiltinManager`] and everything else to the [`Launcher`].
pub struct DefaultExecutor {
    builtins: BuiltinManager,
    launcher: Launcher,
}

impl DefaultExecutor {
    pub fn new(config: &Config) -> Self {
        DefaultExecutor {
            builtins: BuiltinManager::new(),
            launcher: Launcher::new(config.max_jobs),
        }
    }

    #[cfg(test)]
    pub fn launcher(&self) -> &Launcher {
        &self.launcher
    }
}

impl Executor for DefaultExecutor {
    fn exec(&mut self, cmd: &ParsedCommand, env: &mut Environment) -> ExecStatus {
        let Some(name) = cmd.name() else {
            return Ok(0);
        };

        if self.builtins.is_builtin(name) {
            if cmd.stdin.is_some() || cmd.stdout.is_some() || cmd.background {
                log::debug!("ignoring redirection and '&' for built-in {}", name);
            }
            let mut stdout = io::stdout().lock();
            if let Some(status) = self.builtins.execute(name, cmd.operands(), env, &mut stdout) {
                return status;
            }
        }

        self.launcher.launch(cmd)
    }

    fn reap(&mut self) {
        let reaped = self.launcher.jobs_mut().reap();
        if reaped > 0 {
            log::trace!("reaped {} background jobs", reaped);
        }
    }
}
