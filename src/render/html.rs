//! Markup construction helpers that enforce escaping. Record fields are
//! untrusted text and must never reach the output unescaped; fixed markup
//! goes through [`Fragment::raw`] and is author-controlled only.

use std::fmt::Write as _;

use crate::data::catalog::StatEntry;

/// Replace the HTML metacharacters with entity references.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Accumulates one generated fragment. Text arguments are escaped on entry,
/// so a record field can only land in the output as character data.
#[derive(Debug, Default)]
pub struct Fragment {
    markup: String,
}

impl Fragment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixed, author-controlled markup: headings, wrappers, separators.
    /// Never route record data through here.
    pub fn raw(&mut self, markup: &str) -> &mut Self {
        self.markup.push_str(markup);
        self
    }

    /// Escaped character data.
    pub fn text(&mut self, text: &str) -> &mut Self {
        self.markup.push_str(&escape(text));
        self
    }

    pub fn heading(&mut self, level: u8, text: &str) -> &mut Self {
        let _ = write!(self.markup, "<h{level}>{}</h{level}>\n", escape(text));
        self
    }

    pub fn paragraph(&mut self, text: &str) -> &mut Self {
        let _ = write!(self.markup, "<p>{}</p>\n", escape(text));
        self
    }

    pub fn list(&mut self, entries: &[String]) -> &mut Self {
        self.markup.push_str("<ul>");
        for entry in entries {
            let _ = write!(self.markup, "<li>{}</li>", escape(entry));
        }
        self.markup.push_str("</ul>\n");
        self
    }

    /// Two-column table, one `<th>`/`<td>` row per entry.
    pub fn label_value_table(&mut self, rows: &[StatEntry]) -> &mut Self {
        self.markup.push_str("<table>");
        for row in rows {
            let _ = write!(
                self.markup,
                "<tr><th>{}</th><td>{}</td></tr>",
                escape(&row.label),
                escape(&row.value)
            );
        }
        self.markup.push_str("</table>\n");
        self
    }

    pub fn image(&mut self, src: &str, alt: &str) -> &mut Self {
        let _ = write!(
            self.markup,
            "<img src=\"{}\" alt=\"{}\">",
            escape(src),
            escape(alt)
        );
        self
    }

    pub fn into_markup(self) -> String {
        self.markup
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_covers_metacharacters() {
        assert_eq!(
            escape(r#"<a href="x">&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn fragment_escapes_text_but_not_raw() {
        let mut frag = Fragment::new();
        frag.raw("<h2>fixed</h2>").text("<b>field</b>");
        assert_eq!(frag.into_markup(), "<h2>fixed</h2>&lt;b&gt;field&lt;/b&gt;");
    }

    #[test]
    fn label_value_table_emits_one_row_per_entry() {
        let rows = vec![
            StatEntry {
                label: "HP".to_string(),
                value: "1000".to_string(),
            },
            StatEntry {
                label: "MP".to_string(),
                value: "50".to_string(),
            },
        ];
        let mut frag = Fragment::new();
        frag.label_value_table(&rows);
        let markup = frag.into_markup();
        assert!(markup.contains("<tr><th>HP</th><td>1000</td></tr>"));
        assert!(markup.contains("<tr><th>MP</th><td>50</td></tr>"));
    }
}
