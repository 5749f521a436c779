//! HTML page output

use std::borrow::Cow;
use std::io::Write;

use super::ReportFormatter;
use crate::config::defaults;
use crate::error::{Error, Result};

/// HTML formatter - a page with a heading and a bordered two-column table
pub struct HtmlFormatter<W: Write> {
    writer: W,
    title: String,
}

impl<W: Write> HtmlFormatter<W> {
    /// Create a new HTML formatter with the default page title
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            title: defaults::TITLE.to_string(),
        }
    }

    /// Replace the `<title>` text
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Give back the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ReportFormatter for HtmlFormatter<W> {
    fn write_header(&mut self, label: &str) -> Result<()> {
        write!(
            self.writer,
            "<!DOCTYPE html>\n\
             <html>\n\
             <head>\n\
             <title>{title}</title>\n\
             </head>\n\
             <body>\n\
             <h2>Words Counted in {label}</h2>\n\
             <hr />\n\
             <table border=\"1\">\n\
             <tr>\n\
             <th>Words</th>\n\
             <th>Counts</th>\n\
             </tr>\n",
            title = escape(&self.title),
            label = escape(label),
        )
        .map_err(Error::SinkUnwritable)
    }

    fn write_row(&mut self, word: &str, count: u64) -> Result<()> {
        writeln!(
            self.writer,
            "<tr><td>{}</td><td>{}</td></tr>",
            escape(word),
            count
        )
        .map_err(Error::SinkUnwritable)
    }

    fn write_footer(&mut self) -> Result<()> {
        self.writer
            .write_all(b"</table>\n<hr />\n</body>\n</html>\n")
            .and_then(|()| self.writer.flush())
            .map_err(Error::SinkUnwritable)
    }
}

/// Escape the characters HTML treats as markup
fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    Cow::Owned(escaped)
}
