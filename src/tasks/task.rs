use crate::DONE_MARKER;

/// Stable handle to a task within a list.
///
/// Ids are issued monotonically by the owning list and never reused within a
/// process, so a handle stays valid across deletions of other tasks and can
/// never silently redirect to a neighbor the way a row index would.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct TaskId(u64);

/// u64 isomorphism
impl From<u64> for TaskId {
    fn from(n: u64) -> Self {
        Self(n)
    }
}
impl From<TaskId> for u64 {
    fn from(id: TaskId) -> u64 {
        id.0
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single to-do entry.
///
/// Completion is stored as a boolean, decoupled from presentation. The
/// rendered line is derived by the `Display` impl, which prepends the
/// completed marker at most once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    text: String,
    done: bool,
}

impl Task {
    pub(crate) fn new(id: TaskId, text: String) -> Self {
        Self {
            id,
            text,
            done: false,
        }
    }
    pub fn id(&self) -> TaskId {
        self.id
    }
    pub fn text(&self) -> &str {
        &self.text
    }
    pub fn is_done(&self) -> bool {
        self.done
    }
    /// Replaces the text. Editing always returns the task to pending.
    pub(crate) fn rewrite(&mut self, text: String) {
        self.text = text;
        self.done = false;
    }
    /// One-way transition; there is no way back to pending except `rewrite`.
    pub(crate) fn finish(&mut self) {
        self.done = true;
    }
}

impl std::fmt::Display for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.done {
            true => write!(f, "{}{}", DONE_MARKER, self.text),
            false => write!(f, "{}", self.text),
        }
    }
}
