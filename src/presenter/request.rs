/// Whether the host offers regeneration. A capability variant instead of an
/// optional callback: activation surfaces as a `PresenterAction` and the
/// host decides what regenerating means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegenerateCapability {
    #[default]
    Disabled,
    Enabled,
}

/// Whether the host offers a favorite toggle. The flag inside `Enabled` is
/// host-owned state: the presenter reflects it but never flips it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FavoriteCapability {
    #[default]
    Disabled,
    Enabled { is_favorite: bool },
}

/// Immutable per render. The host re-supplies a fresh request whenever any
/// of its own state (result text, favorite flag) changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentationRequest {
    pub result_text: String,
    pub regenerate: RegenerateCapability,
    pub favorite: FavoriteCapability,
}

impl PresentationRequest {
    pub fn new(result_text: impl Into<String>) -> Self {
        Self {
            result_text: result_text.into(),
            regenerate: RegenerateCapability::default(),
            favorite: FavoriteCapability::default(),
        }
    }

    pub fn with_regenerate(mut self) -> Self {
        self.regenerate = RegenerateCapability::Enabled;
        self
    }

    pub fn with_favorite(mut self, is_favorite: bool) -> Self {
        self.favorite = FavoriteCapability::Enabled { is_favorite };
        self
    }

    pub fn can_regenerate(&self) -> bool {
        self.regenerate == RegenerateCapability::Enabled
    }

    /// `None` when the capability is disabled.
    pub fn favorite(&self) -> Option<bool> {
        match self.favorite {
            FavoriteCapability::Disabled => None,
            FavoriteCapability::Enabled { is_favorite } => Some(is_favorite),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PresentationRequest;

    #[test]
    fn defaults_disable_both_capabilities() {
        let request = PresentationRequest::new("text");
        assert!(!request.can_regenerate());
        assert_eq!(request.favorite(), None);
    }

    #[test]
    fn favorite_defaults_to_false_when_enabled() {
        let request = PresentationRequest::new("text").with_favorite(false);
        assert_eq!(request.favorite(), Some(false));
    }
}
