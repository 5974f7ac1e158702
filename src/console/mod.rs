mod app;
mod command;
mod input;
mod painter;
mod probe;
mod scan;
mod session;

pub use app::run_interactive;
pub use command::Command;
pub use input::{KeySource, TerminalKeys};
pub use painter::Painter;
pub use probe::{ProbeAction, describe_key};
pub use scan::build_index;
pub use session::{QueryOutcome, QuerySession};
