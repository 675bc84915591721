//! Terminal discovery
//!
//! - [`registry`] - which terminals exist per platform, in preference order
//! - [`resolver`] - first-fit selection against the search path
//! - [`dialect`] - native to Git Bash path translation
//! - [`quoting`] - literal builders for the shells commands pass through

pub mod dialect;
pub mod quoting;
pub mod registry;
pub mod resolver;

pub use dialect::{shell_path_for, to_posix_shell_path};
pub use registry::{Registry, TerminalCandidate, TerminalKind};
pub use resolver::Resolver;
