use std::io;

use anyhow::Context;
use argh::FromArgs;

use xsh::config::Config;
use xsh::prompt::ShellPrompt;
use xsh::repl::Repl;

#[derive(FromArgs)]
/// A small interactive command interpreter.
struct Args {
    /// prompt printed before each line
    #[argh(option)]
    prompt: Option<String>,

    /// maximum number of variables held by `set`
    #[argh(option)]
    max_vars: Option<usize>,

    /// maximum number of background jobs tracked at once
    #[argh(option)]
    max_jobs: Option<usize>,

    /// run a single command line and exit with its status
    #[argh(option, short = 'c')]
    command: Option<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("XSH_LOG", "warn")).init();
    let args: Args = argh::from_env();

    let mut config = Config::default();
    if let Some(prompt) = args.prompt {
        config = config.with_prompt(prompt);
    }
    if let Some(max_vars) = args.max_vars {
        config = config.with_max_vars(max_vars);
    }
    if let Some(max_jobs) = args.max_jobs {
        config = config.with_max_jobs(max_jobs);
    }
    log::debug!("starting with {:?}", config);

    let mut repl = Repl::new(config.clone());

    if let Some(line) = args.command {
        let code = repl.execute(&line);
        std::process::exit(code);
    }

    let stdin = io::stdin();
    let mut prompt = ShellPrompt::new(config.prompt, stdin.lock(), io::stdout());
    repl.run(&mut prompt).context("failed to read input")?;
    Ok(())
}
