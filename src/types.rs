//! Types shared by the include pipeline.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// The kind of a client library asset.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum LibraryKind {
    /// Stylesheets, emitted as `<link rel="stylesheet">`
    Css,
    /// Scripts, emitted as `<script src>`
    Js,
}

impl LibraryKind {
    /// All kinds, in emission order.
    pub const ALL: [LibraryKind; 2] = [LibraryKind::Css, LibraryKind::Js];

    /// The file extension of assets of this kind.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Js => "js",
        }
    }
}

impl Display for LibraryKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

/// Which kinds of libraries an include renders.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    CssOnly,
    JsOnly,
    /// Stylesheets first, then scripts
    #[default]
    Both,
}

impl Mode {
    /// Resolve the mode from its raw binding value.
    ///
    /// Matching is case-insensitive. Anything other than `js` or `css`, including no value at
    /// all, selects [`Mode::Both`].
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            Some(mode) if mode.eq_ignore_ascii_case("js") => Self::JsOnly,
            Some(mode) if mode.eq_ignore_ascii_case("css") => Self::CssOnly,
            _ => Self::Both,
        }
    }

    /// The library kinds to render, in output order.
    pub fn kinds(&self) -> &'static [LibraryKind] {
        match self {
            Self::CssOnly => &[LibraryKind::Css],
            Self::JsOnly => &[LibraryKind::Js],
            Self::Both => &LibraryKind::ALL,
        }
    }
}

/// A void attribute controlling how a script element is loaded.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, strum::EnumString, strum::Display, strum::AsRefStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LoadingAttribute {
    Async,
    Defer,
}

impl LoadingAttribute {
    /// Parse the raw binding value, dropping anything outside the allow-list.
    pub fn from_raw(raw: Option<&str>) -> Option<Self> {
        raw.and_then(|value| value.parse().ok())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, Mode::Both)]
    #[case(Some("js"), Mode::JsOnly)]
    #[case(Some("JS"), Mode::JsOnly)]
    #[case(Some("css"), Mode::CssOnly)]
    #[case(Some("Css"), Mode::CssOnly)]
    #[case(Some(""), Mode::Both)]
    #[case(Some("both"), Mode::Both)]
    #[case(Some(" js"), Mode::Both)]
    fn mode_from_raw(#[case] raw: Option<&str>, #[case] expected: Mode) {
        assert_eq!(Mode::from_raw(raw), expected);
    }

    #[test]
    fn both_renders_css_first() {
        assert_eq!(Mode::Both.kinds(), &[LibraryKind::Css, LibraryKind::Js]);
        assert_eq!(Mode::CssOnly.kinds(), &[LibraryKind::Css]);
        assert_eq!(Mode::JsOnly.kinds(), &[LibraryKind::Js]);
    }

    #[rstest]
    #[case(Some("async"), Some(LoadingAttribute::Async))]
    #[case(Some("defer"), Some(LoadingAttribute::Defer))]
    #[case(Some("DEFER"), Some(LoadingAttribute::Defer))]
    #[case(Some("aSyNc"), Some(LoadingAttribute::Async))]
    #[case(Some("foo"), None)]
    #[case(Some(""), None)]
    #[case(Some(" defer"), None)]
    #[case(None, None)]
    fn loading_attribute_from_raw(
        #[case] raw: Option<&str>,
        #[case] expected: Option<LoadingAttribute>,
    ) {
        assert_eq!(LoadingAttribute::from_raw(raw), expected);
    }

    #[test]
    fn loading_attribute_renders_lowercase() {
        assert_eq!(LoadingAttribute::Defer.to_string(), "defer");
        assert_eq!(LoadingAttribute::Async.as_ref(), "async");
    }
}
