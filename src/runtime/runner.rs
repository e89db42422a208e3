use crate::notify::{Notifier, ToastHost};
use crate::presenter::{PresentationRequest, ResultPresenter};
use crate::runtime::effect::Effect;
use crate::runtime::event::{AppEvent, PresenterAction, SystemEvent};
use crate::runtime::scheduler::{Scheduler, SchedulerCommand};
use crate::terminal::{KeyCode, KeyModifiers, Terminal, TerminalEvent};
use crate::ui::renderer::Renderer;
use crate::widgets::traits::{InteractionResult, Interactive};
use std::io;
use std::time::{Duration, Instant};

const TOAST_TIMER_KEY: &str = "toast";

/// How the host reacts to a presenter action. `Update` re-supplies the
/// request, which is the only way host-owned state reaches the presenter.
pub enum HostResponse {
    Continue,
    Update(PresentationRequest),
    Exit,
}

pub trait Host {
    fn on_action(&mut self, action: PresenterAction) -> HostResponse;
}

/// Single-threaded event loop: terminal input and due timers are drained in
/// turn, reduced into effects and applied. All state mutation happens here,
/// in response to discrete events.
pub struct Runner<H: Host> {
    terminal: Terminal,
    presenter: ResultPresenter,
    toast: ToastHost,
    scheduler: Scheduler,
    renderer: Renderer,
    host: H,
    exit: bool,
}

impl<H: Host> Runner<H> {
    pub fn new(terminal: Terminal, presenter: ResultPresenter, host: H) -> Self {
        Self {
            terminal,
            presenter,
            toast: ToastHost::new(),
            scheduler: Scheduler::new(),
            renderer: Renderer::default(),
            host,
            exit: false,
        }
    }

    pub fn run(&mut self) -> io::Result<()> {
        self.terminal.enter()?;

        let run_result = (|| -> io::Result<()> {
            self.render()?;

            while !self.exit {
                for event in self.scheduler.drain_ready(Instant::now()) {
                    self.dispatch(event)?;
                }

                let timeout = self
                    .scheduler
                    .poll_timeout(Instant::now(), Duration::from_millis(120));
                let event = self.terminal.poll_event(timeout)?;
                self.dispatch(AppEvent::Terminal(event))?;
            }

            // Teardown: invalidate the presenter's pending timers before the
            // loop ends so nothing fires into a discarded component.
            let effects = self.presenter.detach();
            self.apply_effects(effects)
        })();

        let exit_result = self.terminal.exit();
        run_result.and(exit_result)
    }

    fn dispatch(&mut self, event: AppEvent) -> io::Result<()> {
        match event {
            AppEvent::Terminal(TerminalEvent::Key(key)) => {
                if key.code == KeyCode::Esc
                    || (key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL))
                {
                    self.exit = true;
                    return Ok(());
                }
                let result = self.presenter.on_key(key);
                self.finish(result)
            }
            AppEvent::Terminal(TerminalEvent::Resize(size)) => {
                self.terminal.set_size(size);
                self.render()
            }
            AppEvent::Terminal(TerminalEvent::Tick) => Ok(()),
            AppEvent::System(SystemEvent::ToastExpired) => {
                self.toast.dismiss();
                self.render()
            }
            AppEvent::System(event) => {
                let result = self.presenter.on_system_event(&event);
                self.finish(result)
            }
        }
    }

    fn finish(&mut self, result: InteractionResult) -> io::Result<()> {
        let request_render = result.request_render;
        self.apply_effects(result.effects)?;
        if request_render {
            self.render()?;
        }
        Ok(())
    }

    fn apply_effects(&mut self, effects: Vec<Effect>) -> io::Result<()> {
        for effect in effects {
            match effect {
                Effect::Action(action) => match self.host.on_action(action) {
                    HostResponse::Continue => {}
                    HostResponse::Update(request) => {
                        self.presenter.update(request);
                        self.render()?;
                    }
                    HostResponse::Exit => self.exit = true,
                },
                Effect::Notify { message, duration } => {
                    self.toast.notify(&message, duration);
                    // The toast expiry runs on its own timer; sharing a
                    // duration with the copy confirmation does not couple
                    // their lifecycles.
                    self.scheduler.schedule(
                        SchedulerCommand::Supersede {
                            key: TOAST_TIMER_KEY.to_string(),
                            delay: duration,
                            event: AppEvent::System(SystemEvent::ToastExpired),
                        },
                        Instant::now(),
                    );
                }
                Effect::Schedule(command) => {
                    self.scheduler.schedule(command, Instant::now());
                }
                Effect::RequestRender => self.render()?,
            }
        }
        Ok(())
    }

    fn render(&mut self) -> io::Result<()> {
        let frame = self
            .renderer
            .render(&self.presenter, &self.toast, self.terminal.size());
        self.terminal.render(&frame.lines)
    }
}
