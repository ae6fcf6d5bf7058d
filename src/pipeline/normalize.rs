//! Turns raw bindings into the normalized input of an include.

use crate::bindings::{Bindings, CategoryInput};
use crate::error::IncludeError;
use crate::types::{LoadingAttribute, Mode};
use serde_json::Value;

/// The validated input of one include.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Normalized {
    /// Trimmed, non-empty category names, in the order given
    pub categories: Vec<String>,
    pub mode: Mode,
    pub attribute: Option<LoadingAttribute>,
    /// The raw `onload` script, not yet encoded
    pub onload: Option<String>,
}

impl Normalized {
    /// Normalize the bindings of an include.
    ///
    /// Fails with [`IncludeError::NoCategories`] when no usable category is left.
    pub fn from_bindings(bindings: &Bindings) -> Result<Self, IncludeError> {
        let categories = parse_categories(bindings.categories.as_ref());
        if categories.is_empty() {
            return Err(IncludeError::NoCategories);
        }

        Ok(Self {
            categories,
            mode: Mode::from_raw(bindings.mode.as_deref()),
            attribute: LoadingAttribute::from_raw(bindings.loading.as_deref()),
            onload: bindings.onload.clone(),
        })
    }
}

/// Extract the category names, trimmed.
///
/// Names are trimmed of ASCII control characters and spaces, other whitespace such as a
/// no-break space is part of the name. Lists keep their string elements only. Empty names are
/// dropped for both forms, so `"a,,b"` yields `["a", "b"]`. Duplicates are kept.
pub fn parse_categories(input: Option<&CategoryInput>) -> Vec<String> {
    let names: Vec<&str> = match input {
        None => return vec![],
        Some(CategoryInput::Csv(csv)) => csv.split(',').collect(),
        Some(CategoryInput::List(list)) => list.iter().filter_map(Value::as_str).collect(),
    };

    names
        .into_iter()
        .map(|name| name.trim_matches(|c: char| c <= ' '))
        .filter(|name| !name.is_empty())
        .map(ToString::to_string)
        .collect()
}
