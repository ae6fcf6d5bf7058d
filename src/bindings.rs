//! Raw template bindings of an include.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// The categories as handed over by the template.
#[derive(Clone, Debug, PartialEq)]
pub enum CategoryInput {
    /// A comma-separated list, e.g. `"site.base, site.theme"`
    Csv(String),
    /// An array, which may contain values other than strings
    List(Vec<Value>),
}

impl From<&str> for CategoryInput {
    fn from(value: &str) -> Self {
        Self::Csv(value.to_string())
    }
}

impl From<String> for CategoryInput {
    fn from(value: String) -> Self {
        Self::Csv(value)
    }
}

impl From<Vec<String>> for CategoryInput {
    fn from(value: Vec<String>) -> Self {
        Self::List(value.into_iter().map(Value::String).collect())
    }
}

impl From<Vec<Value>> for CategoryInput {
    fn from(value: Vec<Value>) -> Self {
        Self::List(value)
    }
}

/// The bindings of one include invocation.
///
/// Values of the wrong type are treated as if they were missing, rather than failing the
/// deserialization.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Bindings {
    #[serde(default, deserialize_with = "deserialize_categories")]
    pub categories: Option<CategoryInput>,
    #[serde(default, deserialize_with = "deserialize_string")]
    pub mode: Option<String>,
    /// The script loading attribute, `async` or `defer`
    #[serde(default, deserialize_with = "deserialize_string")]
    pub loading: Option<String>,
    /// Script for the `onload` attribute of script elements
    #[serde(default, deserialize_with = "deserialize_string")]
    pub onload: Option<String>,
}

impl Bindings {
    pub fn new(categories: impl Into<CategoryInput>) -> Self {
        Self {
            categories: Some(categories.into()),
            ..Default::default()
        }
    }

    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = Some(mode.into());
        self
    }

    pub fn with_loading(mut self, loading: impl Into<String>) -> Self {
        self.loading = Some(loading.into());
        self
    }

    pub fn with_onload(mut self, onload: impl Into<String>) -> Self {
        self.onload = Some(onload.into());
        self
    }
}

fn deserialize_categories<'de, D>(data: D) -> Result<Option<CategoryInput>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(data)? {
        Value::String(csv) => Some(CategoryInput::Csv(csv)),
        Value::Array(list) => Some(CategoryInput::List(list)),
        _ => None,
    })
}

fn deserialize_string<'de, D>(data: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(data)? {
        Value::String(value) => Some(value),
        _ => None,
    })
}
