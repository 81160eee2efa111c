use std::fs::{File, OpenOptions};
use std::os::unix::fs::OpenOptionsExt;
use std::os::unix::process::ExitStatusExt;
use std::process::{Command, ExitStatus, Stdio};

use crate::parser::ParsedCommand;
use super::executor::{ExecError, ExecStatus};
use super::jobs::JobTable;

/// Starts external programs with their redirections applied to the child only.
pub struct Launcher {
    jobs: JobTable,
}

impl Launcher {
    pub fn new(max_jobs: usize) -> Self {
        Launcher {
            jobs: JobTable::new(max_jobs),
        }
    }

    #[cfg(test)]
    pub fn jobs(&self) -> &JobTable {
        &self.jobs
    }

    pub fn jobs_mut(&mut self) -> &mut JobTable {
        &mut self.jobs
    }

    /// Opens the redirection files, spawns the program and either waits for it
    /// or hands it to the job table.
    ///
    /// Both files are opened before anything is spawned, input first, so a bad
    /// input path leaves no output file behind.
    pub fn launch(&mut self, cmd: &ParsedCommand) -> ExecStatus {
        let Some((program, args)) = cmd.args.split_first() else {
            return Ok(0);
        };

        let stdin = cmd.stdin.as_deref().map(open_input).transpose()?;
        let stdout = cmd.stdout.as_deref().map(open_output).transpose()?;

        let mut command = Command::new(program);
        command.args(args);
        if let Some(f) = stdin {
            command.stdin(Stdio::from(f));
        }
        if let Some(f) = stdout {
            command.stdout(Stdio::from(f));
        }

        let spawned = command.spawn();
        // Release our copies of the redirection files.
        drop(command);
        let mut child = spawned.map_err(ExecError::io("execvp"))?;
        log::debug!("spawned {} as pid {}", program, child.id());

        if cmd.background {
            self.jobs.add(child);
            return Ok(0);
        }

        let status = child.wait().map_err(ExecError::io("wait"))?;
        log::debug!("{} exited: {}", program, status);
        Ok(exit_code(status))
    }
}

fn open_input(path: &str) -> Result<File, ExecError> {
    File::open(path).map_err(ExecError::io("open"))
}

fn open_output(path: &str) -> Result<File, ExecError> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o644)
        .open(path)
        .map_err(ExecError::io("open"))
}

fn exit_code(status: ExitStatus) -> i32 {
    match status.code() {
        Some(code) => code,
        None => status.signal().map_or(1, |sig| 128 + sig),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::{Duration, Instant};

    fn command(args: &[&str]) -> ParsedCommand {
        ParsedCommand {
            args: args.iter().map(|s| s.to_string()).collect(),
            ..ParsedCommand::default()
        }
    }

    #[test]
    fn test_exit_status_is_returned() {
        let mut launcher = Launcher::new(4);
        assert!(matches!(launcher.launch(&command(&["true"])), Ok(0)));
        assert!(matches!(launcher.launch(&command(&["false"])), Ok(1)));
    }

    #[test]
    fn test_output_redirect() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.txt");
        fs::write(&out, "stale contents that should be truncated\n").unwrap();

        let mut cmd = command(&["echo", "hello"]);
        cmd.stdout = Some(out.to_string_lossy().into_owned());
        let mut launcher = Launcher::new(4);
        assert!(matches!(launcher.launch(&cmd), Ok(0)));
        assert_eq!(fs::read_to_string(&out).unwrap(), "hello\n");
    }

    #[test]
    fn test_input_and_output_redirect() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.txt");
        let out = dir.path().join("out.txt");
        fs::write(&input, "b\na\nc\n").unwrap();

        let mut cmd = command(&["sort"]);
        cmd.stdin = Some(input.to_string_lossy().into_owned());
        cmd.stdout = Some(out.to_string_lossy().into_owned());
        let mut launcher = Launcher::new(4);
        assert!(matches!(launcher.launch(&cmd), Ok(0)));
        assert_eq!(fs::read_to_string(&out).unwrap(), "a\nb\nc\n");
    }

    #[test]
    fn test_bad_input_prevents_launch() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.txt");

        let mut cmd = command(&["cat"]);
        cmd.stdin = Some(dir.path().join("missing.txt").to_string_lossy().into_owned());
        cmd.stdout = Some(out.to_string_lossy().into_owned());
        let mut launcher = Launcher::new(4);
        let err = launcher.launch(&cmd).unwrap_err();
        assert_eq!(err.to_string(), "open: No such file or directory");
        assert!(!out.exists());
    }

    #[test]
    fn test_bad_output_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let mut cmd = command(&["echo", "hi"]);
        cmd.stdout = Some(dir.path().join("no/such/dir/out.txt").to_string_lossy().into_owned());
        let mut launcher = Launcher::new(4);
        let err = launcher.launch(&cmd).unwrap_err();
        assert!(err.to_string().starts_with("open: "));
    }

    #[test]
    fn test_unknown_program() {
        let mut launcher = Launcher::new(4);
        let err = launcher
            .launch(&command(&["xsh-no-such-program-here"]))
            .unwrap_err();
        assert_eq!(err.to_string(), "execvp: No such file or directory");
    }

    #[test]
    fn test_foreground_waits() {
        let mut launcher = Launcher::new(4);
        let start = Instant::now();
        assert!(matches!(launcher.launch(&command(&["sleep", "0.3"])), Ok(0)));
        assert!(start.elapsed() >= Duration::from_millis(300));
    }

    #[test]
    fn test_background_returns_immediately() {
        let mut launcher = Launcher::new(4);
        let mut cmd = command(&["sleep", "2"]);
        cmd.background = true;
        let start = Instant::now();
        assert!(matches!(launcher.launch(&cmd), Ok(0)));
        assert!(start.elapsed() < Duration::from_secs(1));
        assert_eq!(launcher.jobs().len(), 1);
    }

    #[test]
    fn test_empty_command_is_noop() {
        let mut launcher = Launcher::new(4);
        assert!(matches!(launcher.launch(&ParsedCommand::default()), Ok(0)));
        assert!(launcher.jobs().is_empty());
    }
}
