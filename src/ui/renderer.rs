use crate::notify::ToastHost;
use crate::presenter::ResultPresenter;
use crate::terminal::TerminalSize;
use crate::ui::span::SpanLine;
use crate::ui::theme::Theme;
use crate::widgets::traits::{Drawable, RenderContext};

#[derive(Debug, Default, Clone)]
pub struct RenderFrame {
    pub lines: Vec<SpanLine>,
}

#[derive(Default)]
pub struct Renderer {
    theme: Theme,
}

impl Renderer {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn render(
        &self,
        presenter: &ResultPresenter,
        toast: &ToastHost,
        terminal_size: TerminalSize,
    ) -> RenderFrame {
        let ctx = RenderContext::focused(presenter.id(), terminal_size);
        let mut lines = presenter.draw(&ctx).lines;

        let toast_out = toast.draw(&self.theme);
        if !toast_out.lines.is_empty() {
            lines.push(Vec::new());
            lines.extend(toast_out.lines);
        }

        RenderFrame { lines }
    }
}
