use crate::types::LibraryKind;
use std::fmt::{Display, Formatter};

/// An external service the include pipeline depends on.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Collaborator {
    /// Resolves categories into client libraries
    LibraryManager,
    /// Encodes values for use inside HTML attributes
    AttrEncoder,
}

impl Display for Collaborator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LibraryManager => write!(f, "library manager"),
            Self::AttrEncoder => write!(f, "HTML attribute encoder"),
        }
    }
}

/// Conditions which stop (part of) an include from producing markup.
///
/// None of these reach the caller of [`crate::TagBuilder::include`], they are reported through
/// `tracing` and the affected markup is left out.
#[derive(Debug, thiserror::Error)]
pub enum IncludeError {
    #[error(
        "'categories' option might be missing from the invocation of the clientlib template. \
         Please provide a CSV list or an array of categories to include."
    )]
    NoCategories,

    #[error("{0} is not available")]
    Unavailable(Collaborator),

    #[error("failed to resolve {kind} libraries")]
    Resolve {
        kind: LibraryKind,
        #[source]
        source: anyhow::Error,
    },
}
