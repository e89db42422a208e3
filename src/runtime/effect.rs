use crate::runtime::event::PresenterAction;
use crate::runtime::scheduler::SchedulerCommand;
use std::time::Duration;

/// Side effects requested by a component in response to an interaction.
/// The runtime owns the collaborators that carry them out.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Action(PresenterAction),
    Notify { message: String, duration: Duration },
    Schedule(SchedulerCommand),
    RequestRender,
}
