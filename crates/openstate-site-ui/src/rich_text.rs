//! Restricted rich text.
//!
//! Headlines, subtitles and card labels may carry a little inline formatting.
//! Instead of injecting raw markup, the text is parsed into [`RichText`] which
//! only knows line breaks, emphasis and strong runs. Any other markup is kept
//! as literal text and escaped when rendered.

use serde::{Deserialize, Serialize};

use crate::node::escape_text;

/// One run of rich text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Span {
    Text(String),
    LineBreak,
    Emphasis(Vec<Span>),
    Strong(Vec<Span>),
}

/// Formatted text with a closed set of inline styles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RichText {
    spans: Vec<Span>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Style {
    Emphasis,
    Strong,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tag {
    Break,
    Open(Style),
    Close(Style),
}

impl Tag {
    /// Recognize an allowed tag at the start of `input`, returning its byte length.
    fn recognize(input: &str) -> Option<(Self, usize)> {
        let end = input.find('>')?;
        let inner: String = input[1..end]
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_ascii_lowercase();

        let tag = match inner.as_str() {
            "br" | "br/" | "/br" => Self::Break,
            "em" | "i" => Self::Open(Style::Emphasis),
            "/em" | "/i" => Self::Close(Style::Emphasis),
            "strong" | "b" => Self::Open(Style::Strong),
            "/strong" | "/b" => Self::Close(Style::Strong),
            _ => return None,
        };
        Some((tag, end + 1))
    }
}

fn styled(style: Style, spans: Vec<Span>) -> Span {
    match style {
        Style::Emphasis => Span::Emphasis(spans),
        Style::Strong => Span::Strong(spans),
    }
}

fn flush(text: &mut String, spans: &mut Vec<Span>) {
    if !text.is_empty() {
        spans.push(Span::Text(std::mem::take(text)));
    }
}

impl RichText {
    /// Unformatted text.
    pub fn plain(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.is_empty() {
            return Self::default();
        }
        Self {
            spans: vec![Span::Text(text)],
        }
    }

    /// Parse inline markup.
    ///
    /// Recognizes `<br>` (also `<br/>`, `<br />` and the stray `</br>`),
    /// `<em>`/`<i>` and `<strong>`/`<b>`. Unclosed styles end at the end of
    /// input; a closing tag that does not match the innermost open style is
    /// kept as text.
    #[must_use]
    pub fn parse(markup: &str) -> Self {
        let mut stack: Vec<(Style, Vec<Span>)> = Vec::new();
        let mut current: Vec<Span> = Vec::new();
        let mut text = String::new();
        let mut rest = markup;

        while let Some(pos) = rest.find('<') {
            text.push_str(&rest[..pos]);
            let tail = &rest[pos..];

            let Some((tag, len)) = Tag::recognize(tail) else {
                text.push('<');
                rest = &tail[1..];
                continue;
            };

            match tag {
                Tag::Break => {
                    flush(&mut text, &mut current);
                    current.push(Span::LineBreak);
                }
                Tag::Open(style) => {
                    flush(&mut text, &mut current);
                    stack.push((style, std::mem::take(&mut current)));
                }
                Tag::Close(style) => match stack.last() {
                    Some((open, _)) if *open == style => {
                        flush(&mut text, &mut current);
                        if let Some((open, parent)) = stack.pop() {
                            let inner = std::mem::replace(&mut current, parent);
                            current.push(styled(open, inner));
                        }
                    }
                    _ => text.push_str(&tail[..len]),
                },
            }
            rest = &tail[len..];
        }

        text.push_str(rest);
        flush(&mut text, &mut current);

        while let Some((open, parent)) = stack.pop() {
            let inner = std::mem::replace(&mut current, parent);
            current.push(styled(open, inner));
        }

        Self { spans: current }
    }

    #[must_use]
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Text without formatting; line breaks become spaces.
    #[must_use]
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        write_plain(&self.spans, &mut out);
        out
    }

    /// Append the HTML form to `out`.
    pub fn write_html(&self, out: &mut String) {
        write_spans(&self.spans, out);
    }

    /// The HTML form.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }
}

impl From<&str> for RichText {
    fn from(markup: &str) -> Self {
        Self::parse(markup)
    }
}

fn write_plain(spans: &[Span], out: &mut String) {
    for span in spans {
        match span {
            Span::Text(text) => out.push_str(text),
            Span::LineBreak => out.push(' '),
            Span::Emphasis(inner) | Span::Strong(inner) => write_plain(inner, out),
        }
    }
}

fn write_spans(spans: &[Span], out: &mut String) {
    for span in spans {
        match span {
            Span::Text(text) => out.push_str(&escape_text(text)),
            Span::LineBreak => out.push_str("<br>"),
            Span::Emphasis(inner) => {
                out.push_str("<em>");
                write_spans(inner, out);
                out.push_str("</em>");
            }
            Span::Strong(inner) => {
                out.push_str("<strong>");
                write_spans(inner, out);
                out.push_str("</strong>");
            }
        }
    }
}
