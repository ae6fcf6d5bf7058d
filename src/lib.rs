//! Render client library categories into `<link>` and `<script>` markup.
//!
//! ```
//! use clientlib::{Bindings, ClientLibrary, HtmlAttrEncoder, LibraryKind, LibraryManager, LookupOptions, TagBuilder};
//! use std::sync::Arc;
//!
//! struct Site;
//!
//! impl LibraryManager for Site {
//!     fn libraries(&self, _: &[String], _: LibraryKind, _: LookupOptions) -> anyhow::Result<Vec<ClientLibrary>> {
//!         Ok(vec![ClientLibrary::new("/etc.clientlibs/site")])
//!     }
//!
//!     fn is_minify_enabled(&self) -> bool {
//!         true
//!     }
//! }
//!
//! let builder = TagBuilder::new(Some(Arc::new(Site)), Some(Arc::new(HtmlAttrEncoder)));
//! let html = builder.include(&Bindings::new("site").with_mode("js").with_loading("defer"));
//! assert_eq!(html, r#"<script src="/etc.clientlibs/site.min.js" defer></script>"#);
//! ```
#![deny(clippy::unwrap_used)]

pub mod bindings;
pub mod config;
pub mod encode;
pub mod error;
pub mod manifest;
pub mod pipeline;
pub mod types;

pub use bindings::{Bindings, CategoryInput};
pub use encode::{AttrEncoder, HtmlAttrEncoder};
pub use error::{Collaborator, IncludeError};
pub use pipeline::{ClientLibrary, LibraryManager, LookupOptions, ResolvedAsset, TagBuilder};
pub use types::{LibraryKind, LoadingAttribute, Mode};
