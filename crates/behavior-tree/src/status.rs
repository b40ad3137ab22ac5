//! Status returned by behavior nodes.

/// The result of evaluating a behavior node for one tick.
///
/// # Tick Semantics
///
/// Evaluation is synchronous: a node either finishes within the current tick
/// or reports that it needs more ticks.
/// - Conditions evaluate immediately (e.g., "Is an enemy visible?")
/// - Actions may span ticks (e.g., "Walk to the goal") by returning `Running`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The behavior completed successfully.
    ///
    /// For conditions: The condition was met.
    /// For actions: The action finished this tick.
    Success,

    /// The behavior failed.
    ///
    /// For conditions: The condition was not met.
    /// For actions: The action could not be performed (e.g., no goal set).
    /// Failure is ordinary control flow, never an error.
    Failure,

    /// The behavior has not finished and must be re-entered next tick.
    ///
    /// `Running` is a logical-suspension marker consumed entirely within the
    /// synchronous evaluation call; it never blocks or yields a thread.
    Running,
}

impl Status {
    /// Returns `true` if this status is `Success`.
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    /// Returns `true` if this status is `Failure`.
    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }

    /// Returns `true` if this status is `Running`.
    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, Status::Running)
    }

    /// Inverts the terminal statuses: Success becomes Failure and vice versa.
    ///
    /// `Running` is not a terminal outcome and inverts to itself.
    #[inline]
    pub fn invert(self) -> Self {
        match self {
            Status::Success => Status::Failure,
            Status::Failure => Status::Success,
            Status::Running => Status::Running,
        }
    }
}
