pub mod request;

pub use request::{FavoriteCapability, PresentationRequest, RegenerateCapability};

use crate::clipboard::{Clipboard, SystemClipboard};
use crate::i18n::{Catalog, Translations};
use crate::runtime::effect::Effect;
use crate::runtime::event::{AppEvent, PresenterAction, SystemEvent};
use crate::runtime::scheduler::SchedulerCommand;
use crate::share::{ShareFacility, SharePanel};
use crate::terminal::{KeyCode, KeyEvent};
use crate::ui::span::Span;
use crate::ui::theme::Theme;
use crate::widgets::base::ComponentBase;
use crate::widgets::traits::{
    DrawOutput, Drawable, InteractionResult, Interactive, RenderContext,
};
use std::sync::Arc;
use std::time::Duration;

/// How long the copy affordance stays in `Confirmed`.
pub const CONFIRMATION_RESET: Duration = Duration::from_millis(2000);

/// How long the copied toast stays visible. Same length as the confirmation
/// reset, but carried by an independent timer.
pub const COPIED_TOAST: Duration = Duration::from_millis(2000);

/// Transient state of the copy affordance. Owned exclusively by the
/// presenter instance; nothing outside can force a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyConfirmation {
    #[default]
    Idle,
    Confirmed,
}

/// The interactive controls a presenter can expose. Which of these exist
/// depends on the request's capabilities; copy and share are always present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Regenerate,
    Copy,
    Share,
    Favorite,
}

/// Renders a generated result and exposes copy, share and the optional
/// regenerate/favorite actions. Owns nothing but the transient copy
/// confirmation; favorite state belongs to the host and regeneration is a
/// request flowing upward.
pub struct ResultPresenter {
    base: ComponentBase,
    request: PresentationRequest,
    confirmation: CopyConfirmation,
    focused: Control,
    translations: Arc<dyn Translations>,
    clipboard: Box<dyn Clipboard>,
    share: Box<dyn ShareFacility>,
    theme: Theme,
}

impl ResultPresenter {
    pub fn new(id: impl Into<String>, request: PresentationRequest) -> Self {
        let mut presenter = Self {
            base: ComponentBase::new(id),
            request,
            confirmation: CopyConfirmation::Idle,
            focused: Control::Copy,
            translations: Arc::new(Catalog::builtin()),
            clipboard: Box::new(SystemClipboard::new()),
            share: Box::new(SharePanel::new()),
            theme: Theme::default_theme(),
        };
        presenter.share.present(&presenter.request.result_text);
        presenter
    }

    pub fn with_translations(mut self, translations: Arc<dyn Translations>) -> Self {
        self.translations = translations;
        self
    }

    pub fn with_clipboard(mut self, clipboard: Box<dyn Clipboard>) -> Self {
        self.clipboard = clipboard;
        self
    }

    pub fn with_share(mut self, mut share: Box<dyn ShareFacility>) -> Self {
        share.present(&self.request.result_text);
        self.share = share;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn id(&self) -> &str {
        self.base.id()
    }

    pub fn request(&self) -> &PresentationRequest {
        &self.request
    }

    pub fn confirmation(&self) -> CopyConfirmation {
        self.confirmation
    }

    /// Replace the request for the next render. Host-owned state (result
    /// text, favorite flag) only changes through here.
    pub fn update(&mut self, request: PresentationRequest) {
        self.request = request;
        self.share.present(&self.request.result_text);
        if !self.controls().contains(&self.focused) {
            self.focused = Control::Copy;
        }
    }

    /// Present controls in focus order. Favorite renders in the header but
    /// cycles after share.
    pub fn controls(&self) -> Vec<Control> {
        let mut controls = Vec::with_capacity(4);
        if self.request.can_regenerate() {
            controls.push(Control::Regenerate);
        }
        controls.push(Control::Copy);
        controls.push(Control::Share);
        if self.request.favorite().is_some() {
            controls.push(Control::Favorite);
        }
        controls
    }

    pub fn focused_control(&self) -> Control {
        self.focused
    }

    /// Copy operation: delegate the write, confirm optimistically, raise the
    /// toast and schedule the reset. The write's outcome is deliberately not
    /// observed; a failed write still confirms (see DESIGN.md).
    pub fn copy_to_clipboard(&mut self) -> InteractionResult {
        let _ = self.clipboard.write_text(&self.request.result_text);
        self.confirmation = CopyConfirmation::Confirmed;
        InteractionResult::handled()
            .push(Effect::Notify {
                message: self.translate("result.copied"),
                duration: COPIED_TOAST,
            })
            .push(Effect::Schedule(SchedulerCommand::Supersede {
                key: self.reset_key(),
                delay: CONFIRMATION_RESET,
                event: AppEvent::System(SystemEvent::CopyConfirmCleared {
                    target: self.base.id().to_string(),
                }),
            }))
    }

    fn reset_key(&self) -> String {
        format!("{}::copy-reset", self.base.id())
    }

    fn translate(&self, key: &str) -> String {
        self.translations.translate(key)
    }

    fn focus_step(&mut self, forward: bool) -> InteractionResult {
        let controls = self.controls();
        let len = controls.len();
        let current = controls
            .iter()
            .position(|c| *c == self.focused)
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };
        self.focused = controls[next];
        InteractionResult::handled()
    }

    fn activate(&mut self, control: Control) -> InteractionResult {
        if !self.controls().contains(&control) {
            return InteractionResult::ignored();
        }
        match control {
            Control::Copy => self.copy_to_clipboard(),
            Control::Regenerate => {
                InteractionResult::with_effect(Effect::Action(PresenterAction::RegenerateRequested))
            }
            Control::Favorite => InteractionResult::with_effect(Effect::Action(
                PresenterAction::FavoriteToggleRequested,
            )),
            Control::Share => {
                self.share.activate();
                InteractionResult::handled()
            }
        }
    }

    fn favorite_icon(&self, is_favorite: bool) -> Span {
        let icon = if is_favorite { "★" } else { "☆" };
        let style = if self.focused == Control::Favorite {
            self.theme.action_focused
        } else if is_favorite {
            self.theme.favorite_active
        } else {
            self.theme.action
        };
        Span::styled(icon, style)
    }

    fn control_span(&self, control: Control, focused_component: bool) -> Span {
        let label = match control {
            Control::Regenerate => format!("↻ {}", self.translate("result.regenerate")),
            Control::Copy => match self.confirmation {
                CopyConfirmation::Idle => format!("⧉ {}", self.translate("result.copy")),
                CopyConfirmation::Confirmed => format!("✓ {}", self.translate("result.copied")),
            },
            Control::Share => self.translate("result.share"),
            Control::Favorite => unreachable!("favorite renders in the header"),
        };
        let style = if focused_component && self.focused == control {
            self.theme.action_focused
        } else if control == Control::Copy && self.confirmation == CopyConfirmation::Confirmed {
            self.theme.confirmed
        } else {
            self.theme.action
        };
        Span::styled(format!("[ {} ]", label), style)
    }

    fn hint_text(&self) -> String {
        match self.focused {
            Control::Favorite => match self.request.favorite() {
                Some(true) => self.translate("favorites.remove"),
                _ => self.translate("favorites.add"),
            },
            Control::Copy => self.translate("result.copy"),
            Control::Regenerate => self.translate("result.regenerate"),
            Control::Share => self.translate("result.share"),
        }
    }
}

impl Drawable for ResultPresenter {
    fn id(&self) -> &str {
        self.base.id()
    }

    fn draw(&self, ctx: &RenderContext) -> DrawOutput {
        let focused_component = self.base.is_focused(ctx);
        let mut lines = Vec::new();

        let mut header = vec![Span::styled(self.translate("result.title"), self.theme.title)];
        if let Some(is_favorite) = self.request.favorite() {
            header.push(Span::new("  "));
            header.push(self.favorite_icon(is_favorite));
        }
        lines.push(header);

        // Verbatim body: every line of the result text, whitespace and line
        // breaks preserved, no truncation.
        for line in self.request.result_text.split('\n') {
            lines.push(vec![Span::styled(line, self.theme.body)]);
        }

        let mut footer = Vec::new();
        for control in [Control::Regenerate, Control::Copy, Control::Share] {
            if !self.controls().contains(&control) {
                continue;
            }
            if !footer.is_empty() {
                footer.push(Span::new(" "));
            }
            footer.push(self.control_span(control, focused_component));
        }
        lines.push(footer);

        lines.extend(self.share.draw().lines);

        if focused_component {
            lines.push(vec![Span::styled(self.hint_text(), self.theme.hint)]);
        }

        DrawOutput { lines }
    }
}

impl Interactive for ResultPresenter {
    fn on_key(&mut self, key: KeyEvent) -> InteractionResult {
        match key.code {
            KeyCode::Tab | KeyCode::Right => self.focus_step(true),
            KeyCode::BackTab | KeyCode::Left => self.focus_step(false),
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(self.focused),
            KeyCode::Char('c') => self.activate(Control::Copy),
            KeyCode::Char('r') => self.activate(Control::Regenerate),
            KeyCode::Char('f') => self.activate(Control::Favorite),
            KeyCode::Char('s') => self.activate(Control::Share),
            _ => InteractionResult::ignored(),
        }
    }

    fn on_system_event(&mut self, event: &SystemEvent) -> InteractionResult {
        match event {
            SystemEvent::CopyConfirmCleared { target } if target == self.base.id() => {
                self.confirmation = CopyConfirmation::Idle;
                InteractionResult::handled()
            }
            _ => InteractionResult::ignored(),
        }
    }

    fn detach(&mut self) -> Vec<Effect> {
        vec![Effect::Schedule(SchedulerCommand::Cancel {
            key: self.reset_key(),
        })]
    }
}

#[cfg(test)]
mod tests {
    use super::{
        Control, CopyConfirmation, PresentationRequest, ResultPresenter, CONFIRMATION_RESET,
    };
    use crate::clipboard::{Clipboard, ClipboardError};
    use crate::i18n::Catalog;
    use crate::runtime::effect::Effect;
    use crate::runtime::event::{AppEvent, PresenterAction, SystemEvent};
    use crate::runtime::scheduler::{Scheduler, SchedulerCommand};
    use crate::terminal::{KeyCode, KeyEvent, TerminalSize};
    use crate::widgets::traits::{Drawable, Interactive, RenderContext};
    use std::sync::{Arc, Mutex};
    use std::time::{Duration, Instant};

    #[derive(Default)]
    struct RecordingClipboard {
        writes: Arc<Mutex<Vec<String>>>,
    }

    impl RecordingClipboard {
        fn new() -> (Self, Arc<Mutex<Vec<String>>>) {
            let writes = Arc::new(Mutex::new(Vec::new()));
            (
                Self {
                    writes: Arc::clone(&writes),
                },
                writes,
            )
        }
    }

    impl Clipboard for RecordingClipboard {
        fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            self.writes.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    struct FailingClipboard;

    impl Clipboard for FailingClipboard {
        fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError::Unavailable("denied".into()))
        }
    }

    fn ctx() -> RenderContext {
        RenderContext::focused(
            "res",
            TerminalSize {
                width: 80,
                height: 24,
            },
        )
    }

    fn presenter(request: PresentationRequest) -> ResultPresenter {
        let (clipboard, _) = RecordingClipboard::new();
        ResultPresenter::new("res", request).with_clipboard(Box::new(clipboard))
    }

    fn press(p: &mut ResultPresenter, code: KeyCode) -> crate::widgets::traits::InteractionResult {
        p.on_key(KeyEvent::plain(code))
    }

    #[test]
    fn body_renders_result_text_verbatim() {
        let p = presenter(PresentationRequest::new("Hello\nWorld"));
        let texts = p.draw(&ctx()).texts();
        assert_eq!(
            texts[1..3].to_vec(),
            vec!["Hello".to_string(), "World".to_string()]
        );
    }

    #[test]
    fn markup_like_text_is_not_escaped() {
        let text = "<b>&\"quoted\"</b>  trailing  ";
        let p = presenter(PresentationRequest::new(text));
        assert_eq!(p.draw(&ctx()).texts()[1], text);
    }

    #[test]
    fn empty_text_renders_one_empty_body_row() {
        let p = presenter(PresentationRequest::new(""));
        assert_eq!(p.draw(&ctx()).texts()[1], "");
    }

    #[test]
    fn bare_request_renders_copy_but_no_optional_controls() {
        let p = presenter(PresentationRequest::new("Hello\nWorld"));
        let texts = p.draw(&ctx()).texts();
        let footer = &texts[3];
        assert!(footer.contains("Copy"));
        assert!(!footer.contains("Regenerate"));
        assert!(!texts[0].contains('★') && !texts[0].contains('☆'));
    }

    #[test]
    fn capability_combinations_expose_exact_control_sets() {
        let cases = [
            (
                PresentationRequest::new("t"),
                vec![Control::Copy, Control::Share],
            ),
            (
                PresentationRequest::new("t").with_regenerate(),
                vec![Control::Regenerate, Control::Copy, Control::Share],
            ),
            (
                PresentationRequest::new("t").with_favorite(false),
                vec![Control::Copy, Control::Share, Control::Favorite],
            ),
            (
                PresentationRequest::new("t").with_regenerate().with_favorite(true),
                vec![
                    Control::Regenerate,
                    Control::Copy,
                    Control::Share,
                    Control::Favorite,
                ],
            ),
        ];
        for (request, expected) in cases {
            assert_eq!(presenter(request).controls(), expected);
        }
    }

    #[test]
    fn copy_confirms_synchronously_and_schedules_reset() {
        let mut p = presenter(PresentationRequest::new("text"));
        let result = press(&mut p, KeyCode::Char('c'));

        assert_eq!(p.confirmation(), CopyConfirmation::Confirmed);
        assert!(result.effects.iter().any(|e| matches!(
            e,
            Effect::Notify { message, duration }
                if message == "Copied!" && *duration == Duration::from_millis(2000)
        )));
        assert!(result.effects.iter().any(|e| matches!(
            e,
            Effect::Schedule(SchedulerCommand::Supersede { delay, event, .. })
                if *delay == CONFIRMATION_RESET
                    && *event == AppEvent::System(SystemEvent::CopyConfirmCleared {
                        target: "res".to_string()
                    })
        )));
    }

    #[test]
    fn copy_writes_the_exact_result_text() {
        let (clipboard, writes) = RecordingClipboard::new();
        let mut p = ResultPresenter::new("res", PresentationRequest::new("Hello\nWorld"))
            .with_clipboard(Box::new(clipboard));
        press(&mut p, KeyCode::Char('c'));
        assert_eq!(*writes.lock().unwrap(), vec!["Hello\nWorld".to_string()]);
    }

    #[test]
    fn confirmation_resets_when_the_timer_fires() {
        let mut p = presenter(PresentationRequest::new("text"));
        let mut scheduler = Scheduler::new();
        let t0 = Instant::now();

        for effect in press(&mut p, KeyCode::Char('c')).effects {
            if let Effect::Schedule(command) = effect {
                scheduler.schedule(command, t0);
            }
        }

        assert!(scheduler.drain_ready(t0 + Duration::from_millis(1999)).is_empty());
        let due = scheduler.drain_ready(t0 + Duration::from_millis(2000));
        assert_eq!(due.len(), 1);
        let AppEvent::System(event) = &due[0] else {
            panic!("expected system event");
        };
        assert!(p.on_system_event(event).handled);
        assert_eq!(p.confirmation(), CopyConfirmation::Idle);

        let texts = p.draw(&ctx()).texts();
        assert!(texts[2].contains("Copy"));
        assert!(!texts[2].contains("Copied!"));
    }

    #[test]
    fn recopy_while_confirmed_supersedes_the_pending_reset() {
        let mut p = presenter(PresentationRequest::new("text"));
        let mut scheduler = Scheduler::new();
        let t0 = Instant::now();

        for effect in press(&mut p, KeyCode::Char('c')).effects {
            if let Effect::Schedule(command) = effect {
                scheduler.schedule(command, t0);
            }
        }
        for effect in press(&mut p, KeyCode::Char('c')).effects {
            if let Effect::Schedule(command) = effect {
                scheduler.schedule(command, t0 + Duration::from_millis(1500));
            }
        }

        // The first reset comes due but was superseded.
        assert!(scheduler.drain_ready(t0 + Duration::from_millis(2000)).is_empty());
        assert_eq!(scheduler.drain_ready(t0 + Duration::from_millis(3500)).len(), 1);
    }

    #[test]
    fn detach_cancels_the_pending_reset() {
        let mut p = presenter(PresentationRequest::new("text"));
        let mut scheduler = Scheduler::new();
        let t0 = Instant::now();

        for effect in press(&mut p, KeyCode::Char('c')).effects {
            if let Effect::Schedule(command) = effect {
                scheduler.schedule(command, t0);
            }
        }
        for effect in p.detach() {
            if let Effect::Schedule(command) = effect {
                scheduler.schedule(command, t0 + Duration::from_millis(100));
            }
        }

        assert!(scheduler.drain_ready(t0 + Duration::from_millis(3000)).is_empty());
    }

    #[test]
    fn failed_clipboard_write_still_confirms() {
        // Pins the documented gap: the confirmation is optimistic and does
        // not distinguish a failed write from success.
        let mut p = ResultPresenter::new("res", PresentationRequest::new("text"))
            .with_clipboard(Box::new(FailingClipboard));
        let result = press(&mut p, KeyCode::Char('c'));

        assert_eq!(p.confirmation(), CopyConfirmation::Confirmed);
        assert!(result
            .effects
            .iter()
            .any(|e| matches!(e, Effect::Notify { .. })));
    }

    #[test]
    fn regenerate_emits_one_action_and_changes_no_state() {
        let mut p = presenter(PresentationRequest::new("text").with_regenerate());
        let result = press(&mut p, KeyCode::Char('r'));
        assert_eq!(
            result.effects,
            vec![Effect::Action(PresenterAction::RegenerateRequested)]
        );
        assert_eq!(p.confirmation(), CopyConfirmation::Idle);
    }

    #[test]
    fn regenerate_key_is_ignored_without_the_capability() {
        let mut p = presenter(PresentationRequest::new("text"));
        let result = press(&mut p, KeyCode::Char('r'));
        assert!(!result.handled);
        assert!(result.effects.is_empty());
    }

    #[test]
    fn favorite_icon_strictly_tracks_caller_state() {
        let mut p = presenter(PresentationRequest::new("text").with_favorite(false));
        assert!(p.draw(&ctx()).texts()[0].contains('☆'));

        let result = press(&mut p, KeyCode::Char('f'));
        assert_eq!(
            result.effects,
            vec![Effect::Action(PresenterAction::FavoriteToggleRequested)]
        );
        // The presenter never flips the flag itself.
        assert!(p.draw(&ctx()).texts()[0].contains('☆'));

        p.update(PresentationRequest::new("text").with_favorite(true));
        assert!(p.draw(&ctx()).texts()[0].contains('★'));

        p.update(PresentationRequest::new("text").with_favorite(false));
        assert!(p.draw(&ctx()).texts()[0].contains('☆'));
    }

    #[test]
    fn favorite_enabled_true_renders_active_icon() {
        let p = presenter(PresentationRequest::new("text").with_favorite(true));
        assert!(p.draw(&ctx()).texts()[0].contains('★'));
    }

    #[test]
    fn focus_cycles_only_present_controls() {
        let mut p = presenter(PresentationRequest::new("text"));
        assert_eq!(p.focused_control(), Control::Copy);
        press(&mut p, KeyCode::Tab);
        assert_eq!(p.focused_control(), Control::Share);
        press(&mut p, KeyCode::Tab);
        assert_eq!(p.focused_control(), Control::Copy);
        press(&mut p, KeyCode::BackTab);
        assert_eq!(p.focused_control(), Control::Share);
    }

    #[test]
    fn update_moves_focus_off_a_removed_control() {
        let mut p = presenter(PresentationRequest::new("text").with_favorite(false));
        press(&mut p, KeyCode::BackTab);
        assert_eq!(p.focused_control(), Control::Favorite);
        p.update(PresentationRequest::new("text"));
        assert_eq!(p.focused_control(), Control::Copy);
    }

    #[test]
    fn share_is_seeded_with_the_raw_result_text() {
        let mut p = presenter(PresentationRequest::new("Hello\nWorld"));
        press(&mut p, KeyCode::Char('s'));
        let texts = p.draw(&ctx()).texts();
        assert!(texts.iter().any(|t| t.contains("11 chars")));

        p.update(PresentationRequest::new("xy"));
        let texts = p.draw(&ctx()).texts();
        assert!(texts.iter().any(|t| t.contains("2 chars")));
    }

    #[test]
    fn share_label_follows_supplied_translations() {
        let mut catalog = Catalog::builtin();
        catalog.insert("result.share", "Teilen");
        let (clipboard, _) = RecordingClipboard::new();
        let p = ResultPresenter::new("res", PresentationRequest::new("text"))
            .with_clipboard(Box::new(clipboard))
            .with_translations(Arc::new(catalog));

        let texts = p.draw(&ctx()).texts();
        assert!(texts[2].contains("[ Teilen ]"));
        assert!(!texts[2].contains("[ Share ]"));
    }

    #[test]
    fn confirm_clear_for_another_presenter_is_ignored() {
        let mut p = presenter(PresentationRequest::new("text"));
        press(&mut p, KeyCode::Char('c'));
        let result = p.on_system_event(&SystemEvent::CopyConfirmCleared {
            target: "other".to_string(),
        });
        assert!(!result.handled);
        assert_eq!(p.confirmation(), CopyConfirmation::Confirmed);
    }

    #[test]
    fn hint_reflects_favorite_state_when_focused() {
        let mut p = presenter(PresentationRequest::new("text").with_favorite(true));
        press(&mut p, KeyCode::BackTab);
        let texts = p.draw(&ctx()).texts();
        assert_eq!(texts.last().unwrap(), "Remove from favorites");
    }
}
