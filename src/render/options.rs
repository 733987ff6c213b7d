//! Rendering options and configuration.

/// Default `<title>` of a standalone HTML document.
pub const DEFAULT_TITLE: &str = "PDF to HTML";

/// Default `lang` attribute of a standalone HTML document.
pub const DEFAULT_LANG: &str = "ja";

/// Options for rendering paragraphs.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Escape `<`, `>` and `&` in paragraph text (off: text passes through raw)
    pub escape_html: bool,

    /// Title of the standalone HTML document
    pub title: String,

    /// Language of the standalone HTML document
    pub lang: String,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable HTML escaping of paragraph text.
    pub fn with_escape(mut self, escape: bool) -> Self {
        self.escape_html = escape;
        self
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the document language.
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            escape_html: false,
            title: DEFAULT_TITLE.to_string(),
            lang: DEFAULT_LANG.to_string(),
        }
    }
}
