use crate::runtime::effect::Effect;
use crate::runtime::event::SystemEvent;
use crate::terminal::{KeyEvent, TerminalSize};
use crate::ui::span::SpanLine;

#[derive(Debug, Clone)]
pub struct RenderContext {
    pub focused_id: Option<String>,
    pub terminal_size: TerminalSize,
}

impl RenderContext {
    pub fn focused(id: impl Into<String>, terminal_size: TerminalSize) -> Self {
        Self {
            focused_id: Some(id.into()),
            terminal_size,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DrawOutput {
    pub lines: Vec<SpanLine>,
}

impl DrawOutput {
    /// Plain text of the drawn lines, one string per row.
    pub fn texts(&self) -> Vec<String> {
        self.lines.iter().map(crate::ui::span::line_text).collect()
    }
}

#[derive(Debug, Clone, Default)]
pub struct InteractionResult {
    pub handled: bool,
    pub request_render: bool,
    pub effects: Vec<Effect>,
}

impl InteractionResult {
    pub fn ignored() -> Self {
        Self::default()
    }

    pub fn handled() -> Self {
        Self {
            handled: true,
            request_render: true,
            effects: Vec::new(),
        }
    }

    pub fn with_effect(effect: Effect) -> Self {
        Self {
            handled: true,
            request_render: true,
            effects: vec![effect],
        }
    }

    pub fn push(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}

pub trait Drawable: Send {
    fn id(&self) -> &str;
    fn draw(&self, ctx: &RenderContext) -> DrawOutput;
}

pub trait Interactive: Send {
    fn on_key(&mut self, key: KeyEvent) -> InteractionResult;

    fn on_system_event(&mut self, _event: &SystemEvent) -> InteractionResult {
        InteractionResult::ignored()
    }

    /// Called when the owning scope discards the component. Implementations
    /// must invalidate any timers they scheduled so a late fire cannot reach
    /// a destroyed instance.
    fn detach(&mut self) -> Vec<Effect> {
        Vec::new()
    }
}
