pub mod config;
pub mod environment;
pub mod error;
pub mod executor;
pub mod expander;
pub mod parser;
pub mod prompt;
pub mod repl;
