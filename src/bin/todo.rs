//! To-Do List Binary
//!
//! Menu-driven task list: add, edit, delete, and complete entries from the
//! console. The list is lost on exit.

use deskmate::tasks::Console;

fn main() -> anyhow::Result<()> {
    deskmate::log();
    Console::new().run()
}
