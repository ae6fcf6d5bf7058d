//! The configuration model
//!
//! Declares the client libraries known to the file based library manager, see
//! [`crate::manifest::ManifestLibraryManager`].

mod models;
mod source;

pub use models::*;
pub use source::*;

#[cfg(test)]
mod test;

use anyhow::{Context, Result, bail};
use std::path::PathBuf;

/// Locate and load the configuration, given an optional file or directory. Falling back to the
/// current directory.
pub fn load(path: Option<PathBuf>) -> Result<Configuration> {
    match path {
        // if we have a file, load it
        Some(path) if path.is_file() => Source(path).load(),
        // if we have a directory, try finding a file and load it
        Some(path) if path.is_dir() => Source::find(&path)?.load(),
        // if we have something else, we can't deal with it
        Some(path) => bail!("{} is neither a file nor a directory", path.display()),
        // if we have nothing, try to find a file in the current directory and load it
        None => {
            let cwd = std::env::current_dir().context("unable to get current directory")?;
            Source::find(&cwd)?.load()
        }
    }
}
