use super::Configuration;
use anyhow::{Context, bail};
use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

/// A configuration source
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Source(pub PathBuf);

const CANDIDATES: &[&str] = &[
    "Clientlib.toml",
    ".clientlib.toml",
    "Clientlib.yaml",
    ".clientlib.yaml",
    "Clientlib.json",
    ".clientlib.json",
];

impl Source {
    /// Find a first config source candidate in a directory
    pub fn find(path: &Path) -> anyhow::Result<Source> {
        if let Some(file) = CANDIDATES
            .iter()
            .map(|name| path.join(name))
            .find(|file| file.is_file())
        {
            return Ok(Source(file));
        }

        bail!(
            "Unable to find any clientlib configuration in '{}'",
            path.display()
        );
    }

    /// Load the configuration from the source.
    pub fn load(self) -> anyhow::Result<Configuration> {
        tracing::debug!(file = %self.0.display(), "loading configuration");
        load_from(&self.0)
            .with_context(|| format!("unable to load configuration '{}'", self.0.display()))
    }
}

/// Load configuration from a file
///
/// Currently supported formats are:
///
/// * TOML
/// * YAML
/// * JSON
fn load_from(file: &Path) -> anyhow::Result<Configuration> {
    match file.extension().map(|s| s.to_string_lossy()).as_deref() {
        Some("toml") => Ok(toml::from_str(&std::fs::read_to_string(file)?)?),
        Some("yaml") => Ok(serde_yaml::from_reader(BufReader::new(File::open(file)?))?),
        Some("json") => Ok(serde_json::from_reader(BufReader::new(File::open(file)?))?),

        Some(n) => {
            bail!("Unsupported configuration file type: {n}");
        }
        None => {
            bail!("Missing configuration file extension");
        }
    }
}

