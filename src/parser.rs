use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("syntax error: expected a file name after '{0}'")]
    MissingRedirectTarget(&'static str),
    #[error("too many arguments (limit is {0})")]
    TooManyArguments(usize),
}

/// One command line split into arguments, redirections and the background flag.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedCommand {
    /// Program or built-in name followed by its arguments.
    pub args: Vec<String>,
    pub stdin: Option<String>,
    pub stdout: Option<String>,
    pub background: bool,
}

impl ParsedCommand {
    pub fn name(&self) -> Option<&str> {
        self.args.first().map(|s| s.as_str())
    }

    pub fn operands(&self) -> &[String] {
        self.args.get(1..).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }
}

/// Splits an expanded line and pulls out `>`, `<` and `&`.
///
/// Redirection tokens may appear anywhere; the token after `>`/`<` is the
/// file name and never reaches the argument list. A repeated redirection
/// keeps the last file named.
pub fn parse_line(line: &str, max_args: usize) -> Result<ParsedCommand, ParseError> {
    let mut parts = line.split_whitespace();
    let mut cmd = ParsedCommand::default();

    while let Some(token) = parts.next() {
        match token {
            ">" => {
                let file = parts.next().ok_or(ParseError::MissingRedirectTarget(">"))?;
                cmd.stdout = Some(file.to_string());
            }
            "<" => {
                let file = parts.next().ok_or(ParseError::MissingRedirectTarget("<"))?;
                cmd.stdin = Some(file.to_string());
            }
            "&" => cmd.background = true,
            _ => {
                if cmd.args.len() >= max_args {
                    return Err(ParseError::TooManyArguments(max_args));
                }
                cmd.args.push(token.to_string());
            }
        }
    }

    log::trace!("parsed {:?}", cmd);
    Ok(cmd)
}
