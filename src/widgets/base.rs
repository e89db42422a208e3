use crate::widgets::traits::RenderContext;

/// Identity shared by every component: a stable id that focus resolution
/// and scheduler timer keys hang off.
#[derive(Debug, Clone)]
pub struct ComponentBase {
    id: String,
}

impl ComponentBase {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_focused(&self, ctx: &RenderContext) -> bool {
        ctx.focused_id.as_deref() == Some(self.id.as_str())
    }
}
