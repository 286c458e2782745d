//! Menu-driven console front end for the task list.
use super::list::TaskError;
use super::list::TaskList;
use super::task::TaskId;
use anyhow::Result;
use colored::Colorize;
use dialoguer::Confirm;
use dialoguer::Input;
use dialoguer::Select;

const ADD: &str = "Add task";
const UPDATE: &str = "Update task";
const EDIT: &str = "Edit task";
const DELETE: &str = "Delete task";
const COMPLETE: &str = "Mark as complete";
const QUIT: &str = "Quit";

/// What the next committed line of text will do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Idle,
    Editing(TaskId),
}

/// Interactive front end over a [`TaskList`].
///
/// The listing is rebuilt top-to-bottom after every action, and operations
/// address tasks by stable id, resolved from the selected row at the moment
/// of selection. While an edit is pending the first menu entry reads
/// "Update task" instead of "Add task"; the pending target is carried as
/// explicit [`Mode`] state rather than rebound behavior.
pub struct Console {
    list: TaskList,
    mode: Mode,
}

impl Console {
    pub fn new() -> Self {
        Self {
            list: TaskList::new(),
            mode: Mode::Idle,
        }
    }

    /// Drives the menu loop until Quit is chosen.
    pub fn run(&mut self) -> Result<()> {
        println!("{}", "To-Do List".bold());
        loop {
            self.render();
            match self.select()? {
                ADD => self.add()?,
                UPDATE => self.update()?,
                EDIT => self.edit()?,
                DELETE => self.delete()?,
                COMPLETE => self.complete()?,
                _ => break,
            }
        }
        log::info!("exiting with {} tasks on the list", self.list.len());
        Ok(())
    }

    /// Full re-render of the current list, one numbered row per task.
    fn render(&self) {
        println!();
        for (row, task) in self.list.iter().enumerate() {
            println!("{:>2}. {}", row + 1, task);
        }
        if self.list.is_empty() {
            println!("{}", "(no tasks yet)".dimmed());
        }
    }

    fn select(&self) -> Result<&'static str> {
        let labels = match self.mode {
            Mode::Idle => [ADD, EDIT, DELETE, COMPLETE, QUIT],
            Mode::Editing(_) => [UPDATE, EDIT, DELETE, COMPLETE, QUIT],
        };
        let action = Select::new()
            .with_prompt("Action")
            .report(false)
            .items(&labels)
            .default(0)
            .interact()?;
        Ok(labels[action])
    }

    fn add(&mut self) -> Result<()> {
        let text: String = Input::new()
            .with_prompt("Task")
            .allow_empty(true)
            .report(false)
            .interact()?;
        match self.list.add(&text) {
            Ok(id) => log::info!("task {} added", id),
            Err(e) => self.modal(&e)?,
        }
        Ok(())
    }

    fn update(&mut self) -> Result<()> {
        let id = match self.mode {
            Mode::Editing(id) => id,
            Mode::Idle => return Ok(()),
        };
        let initial = self
            .list
            .get(id)
            .map(|task| task.text().to_string())
            .unwrap_or_default();
        let text: String = Input::new()
            .with_prompt("Task")
            .with_initial_text(initial)
            .allow_empty(true)
            .report(false)
            .interact()?;
        match self.list.update(id, &text) {
            Ok(()) => {
                log::info!("task {} updated", id);
                self.mode = Mode::Idle;
            }
            // blank commit: stay in editing so the rewrite can be retried
            Err(e @ TaskError::EmptyText) => self.modal(&e)?,
            Err(e) => {
                self.modal(&e)?;
                self.mode = Mode::Idle;
            }
        }
        Ok(())
    }

    fn edit(&mut self) -> Result<()> {
        match self.choose() {
            Ok(id) => self.mode = Mode::Editing(id),
            Err(e) => self.modal(&e)?,
        }
        Ok(())
    }

    fn delete(&mut self) -> Result<()> {
        match self.choose().and_then(|id| self.list.delete(id).map(|()| id)) {
            Ok(id) => {
                log::info!("task {} deleted", id);
                if self.mode == Mode::Editing(id) {
                    self.mode = Mode::Idle;
                }
            }
            Err(e) => self.modal(&e)?,
        }
        Ok(())
    }

    fn complete(&mut self) -> Result<()> {
        match self.choose().and_then(|id| self.list.complete(id).map(|()| id)) {
            Ok(id) => log::info!("task {} completed", id),
            Err(e) => self.modal(&e)?,
        }
        Ok(())
    }

    /// Resolves the selected row to a task id.
    /// Any failure to produce a selection collapses to `NoSelection`.
    fn choose(&self) -> Result<TaskId, TaskError> {
        let rows = self.list.iter().map(|t| t.to_string()).collect::<Vec<_>>();
        if rows.is_empty() {
            return Err(TaskError::NoSelection);
        }
        Select::new()
            .with_prompt("Which task")
            .report(false)
            .items(&rows)
            .default(0)
            .interact_opt()
            .ok()
            .flatten()
            .and_then(|row| self.list.iter().nth(row))
            .map(|task| task.id())
            .ok_or(TaskError::NoSelection)
    }

    /// Blocking acknowledgment of a validation failure, modal-dialog style.
    /// The loop does not proceed until the prompt is dismissed.
    fn modal(&self, error: &TaskError) -> Result<()> {
        log::warn!("rejected: {:?}", error);
        Confirm::new()
            .with_prompt(format!("{}", error.to_string().yellow()))
            .default(true)
            .show_default(false)
            .report(false)
            .interact()?;
        Ok(())
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}
