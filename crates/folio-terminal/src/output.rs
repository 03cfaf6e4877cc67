//! Renderable output tree.
//!
//! Command output crosses into a presentation layer (a terminal frontend,
//! a web page) as a closed tagged-variant tree: text runs with an abstract
//! display tone, hyperlinks, inline line groups, and vertical blocks. The
//! presentation layer maps tones to concrete colors; the core stays
//! renderer-agnostic.

/// Display tone for a text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    /// Ordinary body text.
    Plain,
    /// Section heading.
    Heading,
    /// Highlighted name or marker.
    Accent,
    /// De-emphasized hint or secondary text.
    Muted,
    /// Error notice.
    Error,
}

/// A renderable output value produced by a command.
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    /// A run of text with a display tone.
    Text { text: String, tone: Tone },
    /// A hyperlink with a display label.
    Link { label: String, url: String },
    /// Inline sequence rendered on a single line.
    Line(Vec<Fragment>),
    /// Vertical group; each child starts a new line.
    Block(Vec<Fragment>),
}

/// A flattened inline run, ready for styling by a renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub text: String,
    pub tone: Tone,
    /// Present when the run is a hyperlink label.
    pub url: Option<String>,
}

impl Fragment {
    /// Text run with [`Tone::Plain`].
    pub fn plain(text: impl Into<String>) -> Self {
        Fragment::Text {
            text: text.into(),
            tone: Tone::Plain,
        }
    }

    /// Text run with [`Tone::Heading`].
    pub fn heading(text: impl Into<String>) -> Self {
        Fragment::Text {
            text: text.into(),
            tone: Tone::Heading,
        }
    }

    /// Text run with [`Tone::Accent`].
    pub fn accent(text: impl Into<String>) -> Self {
        Fragment::Text {
            text: text.into(),
            tone: Tone::Accent,
        }
    }

    /// Text run with [`Tone::Muted`].
    pub fn muted(text: impl Into<String>) -> Self {
        Fragment::Text {
            text: text.into(),
            tone: Tone::Muted,
        }
    }

    /// Text run with [`Tone::Error`].
    pub fn error(text: impl Into<String>) -> Self {
        Fragment::Text {
            text: text.into(),
            tone: Tone::Error,
        }
    }

    /// Hyperlink with a display label.
    pub fn link(label: impl Into<String>, url: impl Into<String>) -> Self {
        Fragment::Link {
            label: label.into(),
            url: url.into(),
        }
    }

    /// Inline sequence rendered on a single line.
    pub fn line(children: Vec<Fragment>) -> Self {
        Fragment::Line(children)
    }

    /// Vertical group; each child starts a new line.
    pub fn block(children: Vec<Fragment>) -> Self {
        Fragment::Block(children)
    }

    /// Flatten the tree into display lines of styled spans.
    ///
    /// Top-level text runs and links become one line each; `Line` children
    /// are joined inline; `Block` children each start a new line.
    pub fn to_lines(&self) -> Vec<Vec<Span>> {
        let mut lines = Vec::new();
        let mut cur = Vec::new();
        self.collect(&mut lines, &mut cur);
        if !cur.is_empty() {
            lines.push(cur);
        }
        lines
    }

    /// Concatenated text content of every run, lines joined with `\n`.
    ///
    /// Lossy (tones and URLs dropped); intended for logging and tests.
    pub fn to_text(&self) -> String {
        self.to_lines()
            .iter()
            .map(|line| {
                line.iter()
                    .map(|span| span.text.as_str())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn collect(&self, lines: &mut Vec<Vec<Span>>, cur: &mut Vec<Span>) {
        match self {
            Fragment::Text { .. } | Fragment::Link { .. } => self.collect_inline(cur),
            Fragment::Line(children) => {
                if !cur.is_empty() {
                    lines.push(std::mem::take(cur));
                }
                for child in children {
                    child.collect_inline(cur);
                }
                lines.push(std::mem::take(cur));
            },
            Fragment::Block(children) => {
                if !cur.is_empty() {
                    lines.push(std::mem::take(cur));
                }
                for child in children {
                    child.collect(lines, cur);
                    if !cur.is_empty() {
                        lines.push(std::mem::take(cur));
                    }
                }
            },
        }
    }

    fn collect_inline(&self, cur: &mut Vec<Span>) {
        match self {
            Fragment::Text { text, tone } => cur.push(Span {
                text: text.clone(),
                tone: *tone,
                url: None,
            }),
            Fragment::Link { label, url } => cur.push(Span {
                text: label.clone(),
                tone: Tone::Accent,
                url: Some(url.clone()),
            }),
            Fragment::Line(children) | Fragment::Block(children) => {
                for child in children {
                    child.collect_inline(cur);
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_constructor() {
        let f = Fragment::plain("hello");
        assert_eq!(
            f,
            Fragment::Text {
                text: "hello".into(),
                tone: Tone::Plain
            }
        );
    }

    #[test]
    fn tone_constructors() {
        assert!(matches!(
            Fragment::heading("h"),
            Fragment::Text {
                tone: Tone::Heading,
                ..
            }
        ));
        assert!(matches!(
            Fragment::accent("a"),
            Fragment::Text {
                tone: Tone::Accent,
                ..
            }
        ));
        assert!(matches!(
            Fragment::muted("m"),
            Fragment::Text {
                tone: Tone::Muted,
                ..
            }
        ));
        assert!(matches!(
            Fragment::error("e"),
            Fragment::Text {
                tone: Tone::Error,
                ..
            }
        ));
    }

    #[test]
    fn single_text_is_one_line() {
        let lines = Fragment::plain("hello").to_lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].len(), 1);
        assert_eq!(lines[0][0].text, "hello");
        assert_eq!(lines[0][0].tone, Tone::Plain);
        assert!(lines[0][0].url.is_none());
    }

    #[test]
    fn link_span_carries_url() {
        let lines = Fragment::link("Profile", "https://example.com/p").to_lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0][0].text, "Profile");
        assert_eq!(lines[0][0].url.as_deref(), Some("https://example.com/p"));
    }

    #[test]
    fn line_joins_children_inline() {
        let f = Fragment::line(vec![
            Fragment::plain("GitHub: "),
            Fragment::link("@me", "https://github.com/me"),
        ]);
        let lines = f.to_lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].len(), 2);
        assert_eq!(lines[0][0].text, "GitHub: ");
        assert_eq!(lines[0][1].text, "@me");
    }

    #[test]
    fn block_children_start_new_lines() {
        let f = Fragment::block(vec![
            Fragment::heading("Title"),
            Fragment::plain("body one"),
            Fragment::plain("body two"),
        ]);
        let lines = f.to_lines();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0][0].text, "Title");
        assert_eq!(lines[2][0].text, "body two");
    }

    #[test]
    fn nested_block_flattens_vertically() {
        let f = Fragment::block(vec![
            Fragment::plain("a"),
            Fragment::block(vec![Fragment::plain("b"), Fragment::plain("c")]),
        ]);
        let lines = f.to_lines();
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn line_inside_block() {
        let f = Fragment::block(vec![
            Fragment::heading("Contact"),
            Fragment::line(vec![Fragment::plain("x"), Fragment::plain("y")]),
        ]);
        let lines = f.to_lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].len(), 2);
    }

    #[test]
    fn empty_text_run_renders_blank_line() {
        let f = Fragment::block(vec![Fragment::plain("a"), Fragment::plain(""), Fragment::plain("b")]);
        let lines = f.to_lines();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1][0].text, "");
    }

    #[test]
    fn to_text_joins_lines() {
        let f = Fragment::block(vec![Fragment::plain("a"), Fragment::plain("b")]);
        assert_eq!(f.to_text(), "a\nb");
    }

    #[test]
    fn to_text_inline_concatenates() {
        let f = Fragment::line(vec![Fragment::plain("hello "), Fragment::plain("world")]);
        assert_eq!(f.to_text(), "hello world");
    }

    #[test]
    fn empty_block_has_no_lines() {
        assert!(Fragment::block(Vec::new()).to_lines().is_empty());
    }

    #[test]
    fn fragment_clone_eq() {
        let f = Fragment::line(vec![Fragment::accent("x")]);
        assert_eq!(f.clone(), f);
    }
}
