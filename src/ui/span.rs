use crate::ui::style::Style;

/// One styled run of text. Spans never contain line breaks; a row of output
/// is a `SpanLine` and multi-line content is a `Vec<SpanLine>`. Wrapping is
/// not modelled: the backend clips every row to the terminal width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: Style,
}

impl Span {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: Style::default(),
        }
    }

    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

pub type SpanLine = Vec<Span>;

/// Concatenated text of a span line, styling discarded.
pub fn line_text(line: &SpanLine) -> String {
    line.iter().map(|span| span.text.as_str()).collect()
}
