/// Table of contents support.
///
/// A TOC is implemented as a complex field with switches controlling which
/// heading levels are collected and how entries behave; the consuming word
/// processor populates it on open/refresh.
use std::fmt::Write as FmtWrite;

/// A table of contents (TOC) field definition.
///
/// The defaults produce the instruction `TOC \o "1-3" \h \z \u`: heading
/// levels 1-3, hyperlinked entries, hidden page numbers in web layout, and
/// outline levels included.
#[derive(Debug, Clone)]
pub struct TableOfContents {
    /// Starting heading level (default: 1)
    start_level: u32,
    /// Ending heading level (default: 3)
    end_level: u32,
    /// Hyperlink the entries (default: true)
    hyperlinks: bool,
    /// Hide tab leader and page numbers in web layout view (default: true)
    hide_in_web_layout: bool,
    /// Also collect paragraphs with outline levels (default: true)
    use_outline_levels: bool,
}

impl TableOfContents {
    /// Create a new table of contents with default settings.
    pub fn new() -> Self {
        Self {
            start_level: 1,
            end_level: 3,
            hyperlinks: true,
            hide_in_web_layout: true,
            use_outline_levels: true,
        }
    }

    /// Set the heading levels to include.
    pub fn heading_levels(mut self, start: u32, end: u32) -> Self {
        self.start_level = start.clamp(1, 9);
        self.end_level = end.clamp(self.start_level, 9);
        self
    }

    /// Set whether entries are hyperlinked (default: true).
    pub fn hyperlinks(mut self, enabled: bool) -> Self {
        self.hyperlinks = enabled;
        self
    }

    /// Set whether tab leader and page numbers are hidden in web layout
    /// view (default: true).
    pub fn hide_in_web_layout(mut self, enabled: bool) -> Self {
        self.hide_in_web_layout = enabled;
        self
    }

    /// Set whether paragraphs with outline levels are collected in
    /// addition to styled headings (default: true).
    pub fn use_outline_levels(mut self, enabled: bool) -> Self {
        self.use_outline_levels = enabled;
        self
    }

    /// Build the TOC field instruction string.
    ///
    /// Format: TOC \o "1-3" \h \z \u
    /// - \o "1-3" = collect heading levels 1 through 3
    /// - \h = hyperlink the entries
    /// - \z = hide tab leader and page numbers in web layout view
    /// - \u = also collect paragraphs with outline levels
    pub fn field_instruction(&self) -> String {
        let mut instruction = String::from("TOC");

        write!(
            &mut instruction,
            r#" \o "{}-{}""#,
            self.start_level, self.end_level
        )
        .unwrap();

        if self.hyperlinks {
            instruction.push_str(" \\h");
        }

        if self.hide_in_web_layout {
            instruction.push_str(" \\z");
        }

        if self.use_outline_levels {
            instruction.push_str(" \\u");
        }

        instruction
    }

    /// Get the starting heading level.
    pub fn start_level(&self) -> u32 {
        self.start_level
    }

    /// Get the ending heading level.
    pub fn end_level(&self) -> u32 {
        self.end_level
    }
}

impl Default for TableOfContents {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_instruction() {
        let toc = TableOfContents::new();
        assert_eq!(toc.field_instruction(), r#"TOC \o "1-3" \h \z \u"#);
    }

    #[test]
    fn test_heading_levels_clamped() {
        let toc = TableOfContents::new().heading_levels(0, 12);
        assert_eq!(toc.start_level(), 1);
        assert_eq!(toc.end_level(), 9);
    }

    #[test]
    fn test_custom_levels() {
        let toc = TableOfContents::new().heading_levels(2, 5);
        assert!(toc.field_instruction().contains(r#"\o "2-5""#));
    }

    #[test]
    fn test_switches_can_be_disabled() {
        let toc = TableOfContents::new()
            .hyperlinks(false)
            .hide_in_web_layout(false)
            .use_outline_levels(false);
        assert_eq!(toc.field_instruction(), r#"TOC \o "1-3""#);
    }
}
