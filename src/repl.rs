use std::io::{self, BufRead, Write};

use crate::config::Config;
use crate::environment::Environment;
use crate::error::ShellError;
use crate::executor::{DefaultExecutor, Executor};
use crate::expander;
use crate::parser;
use crate::prompt::ShellPrompt;

/// Owns the session state and drives `expand -> parse -> exec` for each line.
pub struct Repl<E = DefaultExecutor> {
    config: Config,
    env: Environment,
    executor: E,
}

impl Repl<DefaultExecutor> {
    pub fn new(config: Config) -> Self {
        let executor = DefaultExecutor::new(&config);
        Repl::with_executor(config, executor)
    }
}

impl<E: Executor> Repl<E> {
    pub fn with_executor(config: Config, executor: E) -> Self {
        let env = Environment::new(&config);
        Repl {
            config,
            env,
            executor,
        }
    }

    #[cfg(test)]
    pub fn env(&self) -> &Environment {
        &self.env
    }

    #[cfg(test)]
    pub fn env_mut(&mut self) -> &mut Environment {
        &mut self.env
    }

    #[cfg(test)]
    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Processes one raw line and returns the command's exit status.
    pub fn run_line(&mut self, line: &str) -> Result<i32, ShellError> {
        let expanded = expander::expand(line, &self.env);
        log::trace!("expanded {:?} to {:?}", line, expanded);
        let cmd = parser::parse_line(&expanded, self.config.max_args)?;
        Ok(self.executor.exec(&cmd, &mut self.env)?)
    }

    /// Like [`Repl::run_line`], but reports failures on stderr and maps them to status 1.
    pub fn execute(&mut self, line: &str) -> i32 {
        match self.run_line(line) {
            Ok(code) => code,
            Err(e) => {
                eprintln!("{}", e);
                1
            }
        }
    }

    /// Reads lines until end of input or an `exit`/`quit` line.
    pub fn run<R: BufRead, W: Write>(&mut self, prompt: &mut ShellPrompt<R, W>) -> io::Result<()> {
        loop {
            self.executor.reap();
            prompt.show_prompt()?;

            let Some(line) = prompt.read_line()? else {
                break;
            };
            let line = self.bound(line);

            if line == "exit" || line == "quit" {
                break;
            }
            self.execute(&line);
        }
        self.executor.reap();
        Ok(())
    }

    fn bound(&self, mut line: String) -> String {
        let max = self.config.max_line_len.saturating_sub(1);
        if line.len() > max {
            let mut cut = max;
            while !line.is_char_boundary(cut) {
                cut -= 1;
            }
            log::warn!("input line longer than {} bytes, truncating", max);
            line.truncate(cut);
        }
        line
    }
}
