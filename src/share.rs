use crate::ui::span::Span;
use crate::ui::style::{Color, Style};
use crate::widgets::traits::DrawOutput;

/// Share facility seam. The presenter hands over the raw result text and
/// otherwise treats the facility as opaque: it renders its own UI and
/// nothing flows back.
pub trait ShareFacility: Send {
    /// Seed the facility with the text to share. Called on every render
    /// request so the facility always holds the current result.
    fn present(&mut self, text: &str);

    /// Toggle the facility's own UI.
    fn activate(&mut self);

    /// The facility's self-contained panel; empty while closed.
    fn draw(&self) -> DrawOutput;
}

/// Minimal built-in share panel: an expandable drawer listing the share
/// targets and a preview of what would be sent.
pub struct SharePanel {
    text: String,
    open: bool,
    targets: Vec<String>,
}

impl SharePanel {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            open: false,
            targets: vec!["Copy link".to_string(), "Export file".to_string()],
        }
    }

    pub fn with_targets(mut self, targets: Vec<String>) -> Self {
        self.targets = targets;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Default for SharePanel {
    fn default() -> Self {
        Self::new()
    }
}

impl ShareFacility for SharePanel {
    fn present(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn activate(&mut self) {
        self.open = !self.open;
    }

    fn draw(&self) -> DrawOutput {
        if !self.open {
            return DrawOutput::default();
        }

        let frame_style = Style::new().fg(Color::DarkGrey);
        let mut lines = Vec::new();
        let preview = self.text.lines().next().unwrap_or("");
        lines.push(vec![
            Span::styled("┌ ", frame_style),
            Span::new(format!("{} ({} chars)", preview, self.text.chars().count())),
        ]);
        for target in &self.targets {
            lines.push(vec![
                Span::styled("│ ", frame_style),
                Span::new(target.clone()),
            ]);
        }
        lines.push(vec![Span::styled("└", frame_style)]);
        DrawOutput { lines }
    }
}

#[cfg(test)]
mod tests {
    use super::{ShareFacility, SharePanel};

    #[test]
    fn panel_is_empty_until_activated() {
        let mut panel = SharePanel::new();
        panel.present("Hello\nWorld");
        assert!(panel.draw().texts().is_empty());

        panel.activate();
        let texts = panel.draw().texts();
        assert!(texts[0].contains("Hello"));
        assert!(texts[0].contains("11 chars"));

        panel.activate();
        assert!(panel.draw().texts().is_empty());
    }

    #[test]
    fn present_replaces_the_seeded_text() {
        let mut panel = SharePanel::new();
        panel.present("one");
        panel.present("two");
        assert_eq!(panel.text(), "two");
    }
}
