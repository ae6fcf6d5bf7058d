//! Markup for resolved assets.

use super::resolve::ResolvedAsset;
use crate::encode::AttrEncoder;
use crate::types::{LibraryKind, LoadingAttribute};
use std::fmt::{Display, Formatter};

/// The extra attributes of script elements, including the leading space.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScriptAttrs(String);

impl ScriptAttrs {
    pub fn new(
        attribute: Option<LoadingAttribute>,
        onload: Option<&str>,
        encoder: &dyn AttrEncoder,
    ) -> Self {
        let mut attrs = String::new();

        if let Some(attribute) = attribute {
            attrs.push(' ');
            attrs.push_str(attribute.as_ref());
        }

        if let Some(onload) = onload.filter(|onload| !onload.trim().is_empty()) {
            let onload = encoder.encode_for_html_attr(onload);
            if !onload.trim().is_empty() {
                attrs.push_str(&format!(r#" onload="{onload}""#));
            }
        }

        Self(attrs)
    }
}

impl Display for ScriptAttrs {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Writes the tags of resolved assets.
#[derive(Clone, Copy)]
pub struct Emitter<'a> {
    encoder: &'a dyn AttrEncoder,
}

impl<'a> Emitter<'a> {
    pub fn new(encoder: &'a dyn AttrEncoder) -> Self {
        Self { encoder }
    }

    /// Render one tag per asset, in order.
    ///
    /// Stylesheets are plain `<link>` elements. Scripts all share the same loading and `onload`
    /// attributes.
    pub fn emit(
        &self,
        assets: &[ResolvedAsset],
        kind: LibraryKind,
        attribute: Option<LoadingAttribute>,
        onload: Option<&str>,
    ) -> String {
        match kind {
            LibraryKind::Css => assets
                .iter()
                .map(|asset| {
                    format!(
                        r#"<link rel="stylesheet" href="{path}">"#,
                        path = asset.include_path
                    )
                })
                .collect(),
            LibraryKind::Js => {
                let attrs = ScriptAttrs::new(attribute, onload, self.encoder);
                assets
                    .iter()
                    .map(|asset| {
                        format!(
                            r#"<script src="{path}"{attrs}></script>"#,
                            path = asset.include_path
                        )
                    })
                    .collect()
            }
        }
    }
}
