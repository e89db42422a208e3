use crate::ui::span::Span;
use crate::ui::theme::Theme;
use crate::widgets::traits::DrawOutput;
use std::time::Duration;

/// Notification provider seam. Fire-and-forget: no outcome flows back to
/// the caller.
pub trait Notifier: Send {
    fn notify(&mut self, message: &str, duration: Duration);
}

/// The single transient message currently on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub duration: Duration,
}

/// Holds at most one toast. Expiry is driven by the runtime scheduler on its
/// own timer, independent of any component state that happens to share the
/// same duration.
#[derive(Debug, Default)]
pub struct ToastHost {
    current: Option<Toast>,
}

impl ToastHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    pub fn draw(&self, theme: &Theme) -> DrawOutput {
        let Some(toast) = &self.current else {
            return DrawOutput::default();
        };
        DrawOutput {
            lines: vec![vec![
                Span::styled(format!(" {} ", toast.message), theme.toast),
            ]],
        }
    }
}

impl Notifier for ToastHost {
    fn notify(&mut self, message: &str, duration: Duration) {
        self.current = Some(Toast {
            message: message.to_string(),
            duration,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::{Notifier, ToastHost};
    use crate::ui::theme::Theme;
    use std::time::Duration;

    #[test]
    fn latest_toast_replaces_the_previous_one() {
        let mut host = ToastHost::new();
        host.notify("first", Duration::from_millis(2000));
        host.notify("second", Duration::from_millis(2000));
        assert_eq!(host.current().map(|t| t.message.as_str()), Some("second"));
    }

    #[test]
    fn dismiss_clears_the_drawn_line() {
        let theme = Theme::default_theme();
        let mut host = ToastHost::new();
        host.notify("saved", Duration::from_millis(2000));
        assert_eq!(host.draw(&theme).texts(), vec![" saved ".to_string()]);
        host.dismiss();
        assert!(host.draw(&theme).texts().is_empty());
    }
}
