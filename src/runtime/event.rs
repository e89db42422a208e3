use crate::terminal::TerminalEvent;

/// Actions emitted by the presenter toward its host.
/// These flow upward; the presenter changes none of its own state for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterAction {
    RegenerateRequested,
    FavoriteToggleRequested,
}

/// Events dispatched by the runtime back into components, typically after a
/// scheduled delay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SystemEvent {
    /// Clears the transient copy confirmation of the named presenter.
    CopyConfirmCleared { target: String },
    /// Dismisses the currently shown toast.
    ToastExpired,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    Terminal(TerminalEvent),
    System(SystemEvent),
}
