pub mod effect;
pub mod event;
pub mod runner;
pub mod scheduler;

pub use effect::Effect;
pub use event::{AppEvent, PresenterAction, SystemEvent};
pub use runner::{Host, HostResponse, Runner};
pub use scheduler::{Scheduler, SchedulerCommand};
