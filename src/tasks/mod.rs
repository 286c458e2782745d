//! Task list manager.
//!
//! An insertion-ordered collection of to-do entries addressed by stable id,
//! driven from a menu-based console front end. Completion is a boolean on
//! the task; the visible `[Completed]` marker is derived at render time.

pub mod console;
pub mod list;
pub mod task;

pub use console::Console;
pub use list::TaskError;
pub use list::TaskList;
pub use task::Task;
pub use task::TaskId;
