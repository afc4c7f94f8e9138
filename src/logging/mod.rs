//! Console logging: a [`tracing`] subscriber in the generator's output style
//! and a [`Logger`] facade that also collects per-file results.

mod logger;
mod subscriber;
mod types;

pub use logger::Logger;
pub use subscriber::init_subscriber;
pub use types::{FileEntry, FileStatus};
