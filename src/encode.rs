//! Encoding of untrusted values for HTML attributes.

/// Encodes a value so it can be placed inside a double quoted HTML attribute.
pub trait AttrEncoder: Send + Sync {
    fn encode_for_html_attr(&self, value: &str) -> String;
}

/// Encodes `&`, `<`, `>`, `"` and `'` as character references, leaving everything else as is.
#[derive(Copy, Clone, Debug, Default)]
pub struct HtmlAttrEncoder;

impl AttrEncoder for HtmlAttrEncoder {
    fn encode_for_html_attr(&self, value: &str) -> String {
        htmlescape::encode_minimal(value)
    }
}
