use std::fmt;

/// Constant label shown in place of the raw URI.
pub const LINK_LABEL: &str = "Click here to listen to the podcast";

/// Wraps a URI in the clickable-label markdown template.
///
/// Total and pure: the URI is embedded as-is, whatever it contains.
pub fn to_display_link(uri: &str) -> String {
    format!("[{LINK_LABEL}]({uri})")
}

/// A podcast link as it appears in the derived views.
///
/// Keeps the raw URI so the dashboard can open it, while its textual form
/// (`Display`, exports) is the display markup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayLink {
    uri: String,
}

impl DisplayLink {
    pub fn new(uri: impl Into<String>) -> Self {
        Self { uri: uri.into() }
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn label(&self) -> &'static str {
        LINK_LABEL
    }

    pub fn markup(&self) -> String {
        to_display_link(&self.uri)
    }
}

impl fmt::Display for DisplayLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.markup())
    }
}
