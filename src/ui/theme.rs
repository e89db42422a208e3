use crate::ui::style::{Color, Style};

#[derive(Debug, Clone)]
pub struct Theme {
    pub title: Style,
    pub body: Style,
    pub hint: Style,
    pub action: Style,
    pub action_focused: Style,
    pub confirmed: Style,
    pub favorite_active: Style,
    pub toast: Style,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            title: Style::new().fg(Color::Cyan).bold(),
            body: Style::new(),
            hint: Style::new().fg(Color::DarkGrey),
            action: Style::new().fg(Color::DarkGrey),
            action_focused: Style::new().fg(Color::White).bg(Color::Blue).bold(),
            confirmed: Style::new().fg(Color::Green),
            favorite_active: Style::new().fg(Color::Yellow),
            toast: Style::new().fg(Color::Black).bg(Color::Yellow),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}
