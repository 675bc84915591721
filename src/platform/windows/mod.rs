//! Windows-specific platform implementations

mod paths;
mod process;

pub use paths::WindowsPaths;
pub(crate) use process::detach;
