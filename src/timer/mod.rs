pub mod task;

pub use task::{schedule_repeating, ScheduledTask};
