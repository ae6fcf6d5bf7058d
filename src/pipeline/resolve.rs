//! Adapter to the service resolving categories into client libraries.

use crate::error::{Collaborator, IncludeError};
use crate::types::LibraryKind;

/// Flags passed on every library lookup.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct LookupOptions {
    /// Include libraries which are only visible in preview
    pub preview: bool,
    /// Request unbundled debug variants
    pub debug: bool,
}

/// A client library as known to the library manager.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientLibrary {
    /// The path of the library, without extension, e.g. `/etc.clientlibs/site`
    path: String,
}

impl ClientLibrary {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    #[cfg(test)]
    pub(crate) fn path(&self) -> &str {
        &self.path
    }

    /// The path to reference the library's output of the given kind with.
    pub fn include_path(&self, kind: LibraryKind, minify: bool) -> String {
        let ext = kind.extension();
        if minify {
            format!("{}.min.{ext}", self.path)
        } else {
            format!("{}.{ext}", self.path)
        }
    }
}

/// Resolves categories into the client libraries to include, in include order.
pub trait LibraryManager: Send + Sync {
    /// Look up the libraries of the given kind for the categories.
    fn libraries(
        &self,
        categories: &[String],
        kind: LibraryKind,
        options: LookupOptions,
    ) -> anyhow::Result<Vec<ClientLibrary>>;

    /// Whether minified variants should be referenced.
    fn is_minify_enabled(&self) -> bool;
}

/// An asset to reference from the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedAsset {
    pub include_path: String,
    pub kind: LibraryKind,
}

/// Resolves categories through an optional [`LibraryManager`].
#[derive(Clone, Copy)]
pub struct LibraryResolver<'a> {
    manager: Option<&'a dyn LibraryManager>,
}

impl<'a> LibraryResolver<'a> {
    /// Lookups are never done in preview or debug mode.
    const OPTIONS: LookupOptions = LookupOptions {
        preview: false,
        debug: false,
    };

    pub fn new(manager: Option<&'a dyn LibraryManager>) -> Self {
        Self { manager }
    }

    /// Resolve the assets of a kind, or nothing if the manager is missing or fails.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn resolve(&self, categories: &[String], kind: LibraryKind) -> Vec<ResolvedAsset> {
        match self.try_resolve(categories, kind) {
            Ok(assets) => {
                tracing::debug!(%kind, count = assets.len(), "resolved client libraries");
                assets
            }
            Err(err @ IncludeError::Unavailable(_)) => {
                tracing::warn!("{err}, skipping {kind} libraries");
                vec![]
            }
            Err(err) => {
                tracing::error!("{:#}", anyhow::Error::from(err));
                vec![]
            }
        }
    }

    pub fn try_resolve(
        &self,
        categories: &[String],
        kind: LibraryKind,
    ) -> Result<Vec<ResolvedAsset>, IncludeError> {
        let manager = self
            .manager
            .ok_or(IncludeError::Unavailable(Collaborator::LibraryManager))?;

        let libraries = manager
            .libraries(categories, kind, Self::OPTIONS)
            .map_err(|source| IncludeError::Resolve { kind, source })?;
        let minify = manager.is_minify_enabled();

        Ok(libraries
            .iter()
            .map(|lib| ResolvedAsset {
                include_path: lib.include_path(kind, minify),
                kind,
            })
            .collect())
    }
}
