//! HTML rendering of paragraphs.

use std::borrow::Cow;

use crate::error::Result;
use crate::model::Paragraph;

use super::RenderOptions;

const STYLE: &str = "\
.page { margin-bottom: 20px; padding: 10px; border: 1px solid #000; }
.nblock { margin: 10px 0; padding: 5px; border: 1px solid #555; }
p { margin: 5px 0; }
span { border: 1px solid #ccc; }
";

/// Render paragraphs as `<p>` elements, one per line.
///
/// Text is written as-is unless [`RenderOptions::escape_html`] is set.
pub fn to_html(paragraphs: &[Paragraph], options: &RenderOptions) -> Result<String> {
    Ok(paragraph_elements(paragraphs, options))
}

pub(crate) fn paragraph_elements(paragraphs: &[Paragraph], options: &RenderOptions) -> String {
    paragraphs
        .iter()
        .map(|p| format!("<p>{}</p>", paragraph_text(p, options)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render paragraphs inside a minimal standalone HTML document.
pub fn to_html_document(paragraphs: &[Paragraph], options: &RenderOptions) -> Result<String> {
    let body = paragraph_elements(paragraphs, options);

    let mut output = String::with_capacity(body.len() + 512);
    output.push_str("<!DOCTYPE html>\n");
    output.push_str(&format!(
        "<html lang=\"{}\">\n",
        html_escape::encode_double_quoted_attribute(&options.lang)
    ));
    output.push_str("<head>\n<meta charset=\"UTF-8\">\n");
    output.push_str(&format!(
        "<title>{}</title>\n",
        html_escape::encode_text(&options.title)
    ));
    output.push_str("<style>\n");
    output.push_str(STYLE);
    output.push_str("</style>\n</head>\n<body>\n");
    output.push_str(&body);
    output.push_str("\n</body>\n</html>\n");

    Ok(output)
}

fn paragraph_text<'a>(paragraph: &'a Paragraph, options: &RenderOptions) -> Cow<'a, str> {
    if options.escape_html {
        html_escape::encode_text(&paragraph.text)
    } else {
        Cow::Borrowed(&paragraph.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paragraphs(texts: &[&str]) -> Vec<Paragraph> {
        texts.iter().map(|t| Paragraph::with_text(*t)).collect()
    }

    #[test]
    fn test_single_paragraph() {
        let html = to_html(&paragraphs(&["Hi"]), &RenderOptions::default()).unwrap();
        assert_eq!(html, "<p>Hi</p>");
    }

    #[test]
    fn test_paragraphs_joined_by_newline() {
        let html = to_html(&paragraphs(&["One.", "Two"]), &RenderOptions::default()).unwrap();
        assert_eq!(html, "<p>One.</p>\n<p>Two</p>");
    }

    #[test]
    fn test_no_paragraphs() {
        assert_eq!(to_html(&[], &RenderOptions::default()).unwrap(), "");
    }

    #[test]
    fn test_raw_passthrough_by_default() {
        let html = to_html(&paragraphs(&["a < b & <i>c</i>"]), &RenderOptions::default()).unwrap();
        assert_eq!(html, "<p>a < b & <i>c</i></p>");
    }

    #[test]
    fn test_escaping() {
        let options = RenderOptions::new().with_escape(true);
        let html = to_html(&paragraphs(&["a < b & <i>c</i>"]), &options).unwrap();
        assert_eq!(html, "<p>a &lt; b &amp; &lt;i&gt;c&lt;/i&gt;</p>");
    }

    #[test]
    fn test_document_wrapper() {
        let doc = to_html_document(&paragraphs(&["Hi"]), &RenderOptions::default()).unwrap();
        assert!(doc.starts_with("<!DOCTYPE html>\n<html lang=\"ja\">\n"));
        assert!(doc.contains("<meta charset=\"UTF-8\">"));
        assert!(doc.contains("<title>PDF to HTML</title>"));
        assert!(doc.contains("p { margin: 5px 0; }"));
        assert!(doc.contains("<body>\n<p>Hi</p>\n</body>"));
        assert!(doc.ends_with("</html>\n"));
    }

    #[test]
    fn test_document_title_is_escaped() {
        let options = RenderOptions::new().with_title("A & B").with_lang("en");
        let doc = to_html_document(&[], &options).unwrap();
        assert!(doc.contains("<title>A &amp; B</title>"));
        assert!(doc.contains("<html lang=\"en\">"));
    }
}
