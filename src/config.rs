/// Limits and presentation settings for one interpreter session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub prompt: String,
    /// Longest raw line accepted from the reader, in bytes.
    pub max_line_len: usize,
    /// Upper bound on program name plus arguments.
    pub max_args: usize,
    pub max_vars: usize,
    pub max_name_len: usize,
    pub max_value_len: usize,
    /// Background children tracked at once.
    pub max_jobs: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prompt: "xsh# ".to_string(),
            max_line_len: 1024,
            max_args: 100,
            max_vars: 100,
            max_name_len: 49,
            max_value_len: 199,
            max_jobs: 64,
        }
    }
}

impl Config {
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn with_max_vars(mut self, max_vars: usize) -> Self {
        self.max_vars = max_vars;
        self
    }

    pub fn with_max_jobs(mut self, max_jobs: usize) -> Self {
        self.max_jobs = max_jobs;
        self
    }
}
