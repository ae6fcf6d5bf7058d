use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use clientlib::{
    AttrEncoder, Bindings, CategoryInput, HtmlAttrEncoder, LibraryManager, TagBuilder, config,
    manifest::ManifestLibraryManager,
};

/// Render the tags for a set of categories.
#[derive(Clone, Debug, Args)]
#[command(name = "include")]
#[command(next_help_heading = "Include")]
pub struct Include {
    /// A comma-separated list of categories
    #[arg(long)]
    pub categories: Option<String>,

    /// A single category, may be given multiple times
    #[arg(long, conflicts_with = "categories")]
    pub category: Vec<String>,

    /// A JSON file with the template bindings, overridden by the other options
    #[arg(long)]
    pub bindings: Option<PathBuf>,

    /// Render only `css` or `js` libraries, both if unset
    #[arg(long)]
    pub mode: Option<String>,

    /// The loading attribute of script elements, `async` or `defer`
    #[arg(long)]
    pub loading: Option<String>,

    /// Script to run once a script element has loaded
    #[arg(long)]
    pub onload: Option<String>,
}

impl Include {
    #[tracing::instrument(level = "trace", skip(self, config))]
    pub fn run(self, config: Option<PathBuf>) -> Result<()> {
        let cfg = config::load(config)?;
        let manager: Arc<dyn LibraryManager> = Arc::new(ManifestLibraryManager::new(cfg));
        let encoder: Arc<dyn AttrEncoder> = Arc::new(HtmlAttrEncoder);

        let bindings = self.bindings()?;
        let html = TagBuilder::new(Some(manager), Some(encoder)).include(&bindings);
        println!("{html}");
        Ok(())
    }

    fn bindings(self) -> Result<Bindings> {
        let mut bindings: Bindings = match &self.bindings {
            Some(file) => serde_json::from_reader(BufReader::new(
                File::open(file)
                    .with_context(|| format!("error opening bindings '{}'", file.display()))?,
            ))
            .with_context(|| format!("error parsing bindings '{}'", file.display()))?,
            None => Bindings::default(),
        };

        if let Some(categories) = self.categories {
            bindings.categories = Some(CategoryInput::Csv(categories));
        } else if !self.category.is_empty() {
            bindings.categories = Some(self.category.into());
        }
        if self.mode.is_some() {
            bindings.mode = self.mode;
        }
        if self.loading.is_some() {
            bindings.loading = self.loading;
        }
        if self.onload.is_some() {
            bindings.onload = self.onload;
        }

        Ok(bindings)
    }
}
