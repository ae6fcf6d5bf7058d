use crate::types::LibraryKind;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The persisted clientlib configuration model
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct Configuration {
    /// Reference the minified variants of all libraries
    #[serde(default)]
    pub minify: bool,

    /// The known client libraries, by category
    #[serde(default)]
    pub libraries: BTreeMap<String, Library>,
}

/// A client library providing a category.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub struct Library {
    /// The public path of the library, without extension, e.g. `/etc.clientlibs/site`
    pub path: String,

    /// The kinds of output the library has
    #[serde(default = "default_kinds")]
    pub kinds: Vec<LibraryKind>,

    /// Categories to include before this one
    #[serde(default)]
    pub dependencies: Vec<String>,
}

fn default_kinds() -> Vec<LibraryKind> {
    LibraryKind::ALL.to_vec()
}
