use std::collections::HashMap;
use std::io::Write;

use nix::unistd::{chdir, getcwd};

use crate::environment::Environment;
use super::executor::{ExecError, ExecStatus};

pub trait BuiltinCommand {
    fn name(&self) -> &'static str;
    /// `args` holds the operands only, without the command name.
    fn run(&self, args: &[String], env: &mut Environment, out: &mut dyn Write) -> ExecStatus;
}

pub struct BuiltinManager {
    commands: HashMap<String, Box<dyn BuiltinCommand>>,
}

impl BuiltinManager {
    pub fn new() -> Self {
        let mut mgr = BuiltinManager {
            commands: HashMap::new(),
        };
        mgr.register(Box::new(CdCommand {}));
        mgr.register(Box::new(PwdCommand {}));
        mgr.register(Box::new(SetCommand {}));
        mgr.register(Box::new(UnsetCommand {}));
        mgr
    }

    pub fn register(&mut self, cmd: Box<dyn BuiltinCommand>) {
        self.commands.insert(cmd.name().to_string(), cmd);
    }

    pub fn is_builtin(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Runs `name` if it is registered; `None` means it is not a built-in.
    pub fn execute(
        &self,
        name: &str,
        args: &[String],
        env: &mut Environment,
        out: &mut dyn Write,
    ) -> Option<ExecStatus> {
        self.commands.get(name).map(|cmd| cmd.run(args, env, out))
    }
}

/// Checks that exactly `N` operands were given.
fn operands<'a, const N: usize>(
    name: &'static str,
    args: &'a [String],
) -> Result<&'a [String; N], ExecError> {
    if args.len() < N {
        return Err(ExecError::MissingOperand(name));
    }
    args.try_into().map_err(|_| ExecError::TooManyArguments(name))
}

pub struct CdCommand;

impl BuiltinCommand for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }
    fn run(&self, args: &[String], _env: &mut Environment, _out: &mut dyn Write) -> ExecStatus {
        let [target] = operands::<1>(self.name(), args)?;
        chdir(target.as_str()).map_err(ExecError::sys("cd"))?;
        log::debug!("changed directory to {}", target);
        Ok(0)
    }
}

pub struct PwdCommand;

impl BuiltinCommand for PwdCommand {
    fn name(&self) -> &'static str {
        "pwd"
    }
    fn run(&self, args: &[String], _env: &mut Environment, out: &mut dyn Write) -> ExecStatus {
        operands::<0>(self.name(), args)?;
        let cwd = getcwd().map_err(ExecError::sys("pwd"))?;
        writeln!(out, "{}", cwd.display()).map_err(ExecError::io("pwd"))?;
        out.flush().map_err(ExecError::io("pwd"))?;
        Ok(0)
    }
}

pub struct SetCommand;

impl BuiltinCommand for SetCommand {
    fn name(&self) -> &'static str {
        "set"
    }
    fn run(&self, args: &[String], env: &mut Environment, _out: &mut dyn Write) -> ExecStatus {
        let [name, value] = operands::<2>(self.name(), args)?;
        env.set(name, value);
        Ok(0)
    }
}

pub struct UnsetCommand;

impl BuiltinCommand for UnsetCommand {
    fn name(&self) -> &'static str {
        "unset"
    }
    fn run(&self, args: &[String], env: &mut Environment, _out: &mut dyn Write) -> ExecStatus {
        let [name] = operands::<1>(self.name(), args)?;
        env.unset(name);
        Ok(0)
    }
}
