//! The include pipeline: normalize the bindings, resolve the libraries of each kind and emit
//! their tags.

mod emit;
mod normalize;
mod resolve;

pub use emit::*;
pub use normalize::*;
pub use resolve::*;

use crate::bindings::Bindings;
use crate::encode::AttrEncoder;
use crate::error::{Collaborator, IncludeError};
use crate::types::LibraryKind;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// Renders `<link>` and `<script>` tags for client library categories.
///
/// A builder holds no per-request state, one instance can serve any number of includes.
#[derive(Clone, Default)]
pub struct TagBuilder {
    manager: Option<Arc<dyn LibraryManager>>,
    encoder: Option<Arc<dyn AttrEncoder>>,
}

impl Debug for TagBuilder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TagBuilder")
            .field("manager", &self.manager.is_some())
            .field("encoder", &self.encoder.is_some())
            .finish()
    }
}

impl TagBuilder {
    /// Create a new builder.
    ///
    /// Either service may be missing, in which case the markup depending on it is left out.
    pub fn new(
        manager: Option<Arc<dyn LibraryManager>>,
        encoder: Option<Arc<dyn AttrEncoder>>,
    ) -> Self {
        Self { manager, encoder }
    }

    /// Render the tags for the bindings of an include.
    ///
    /// This never fails. Problems are logged and the affected markup is left out, so the result
    /// may be empty.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn include(&self, bindings: &Bindings) -> String {
        match Normalized::from_bindings(bindings) {
            Ok(normalized) => self.render(&normalized),
            Err(err) => {
                tracing::error!("{err}");
                String::new()
            }
        }
    }

    /// Render the tags for already normalized input.
    pub fn render(&self, normalized: &Normalized) -> String {
        normalized
            .mode
            .kinds()
            .iter()
            .map(|kind| self.include_libraries(normalized, *kind))
            .collect()
    }

    fn include_libraries(&self, normalized: &Normalized, kind: LibraryKind) -> String {
        let Some(encoder) = self.encoder.as_deref() else {
            tracing::warn!(
                "{}, skipping {kind} libraries",
                IncludeError::Unavailable(Collaborator::AttrEncoder)
            );
            return String::new();
        };

        let assets = LibraryResolver::new(self.manager.as_deref())
            .resolve(&normalized.categories, kind);

        Emitter::new(encoder).emit(
            &assets,
            kind,
            normalized.attribute,
            normalized.onload.as_deref(),
        )
    }
}
