mod builtins;
mod default_executor;
mod executor;
mod jobs;
mod launcher;

pub use builtins::{BuiltinCommand, BuiltinManager};
pub use default_executor::DefaultExecutor;
pub use executor::{ExecError, ExecStatus, Executor};
pub use jobs::JobTable;
pub use launcher::Launcher;
