pub mod clipboard;
pub mod i18n;
pub mod notify;
pub mod presenter;
pub mod runtime;
pub mod share;
pub mod terminal;
pub mod ui;
pub mod widgets;

pub use clipboard::{Clipboard, ClipboardError, NullClipboard, SystemClipboard};
pub use i18n::{Catalog, CatalogError, Translations};
pub use notify::{Notifier, Toast, ToastHost};
pub use presenter::{
    Control, CopyConfirmation, FavoriteCapability, PresentationRequest, RegenerateCapability,
    ResultPresenter, CONFIRMATION_RESET, COPIED_TOAST,
};
pub use runtime::{
    AppEvent, Effect, Host, HostResponse, PresenterAction, Runner, Scheduler, SchedulerCommand,
    SystemEvent,
};
pub use share::{ShareFacility, SharePanel};
