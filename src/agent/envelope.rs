//! Result envelope builder.
//!
//! Backends assemble their output through [`EnvelopeBuilder`]; the
//! orchestrator calls [`EnvelopeBuilder::build`], which refuses to produce an
//! envelope with a missing field.

use crate::types::{ResultEnvelope, Task, TaskStatus};

/// Errors produced when a backend's output is incomplete.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnvelopeError {
    /// The response text is empty or whitespace.
    #[error("backend produced an empty response")]
    EmptyResponse,
    /// No task was reported.
    #[error("backend reported no tasks")]
    NoTasks,
    /// The execution trace is empty or whitespace.
    #[error("backend produced an empty execution trace")]
    EmptyExecution,
}

/// Incrementally builds a [`ResultEnvelope`].
///
/// Task ids are `task-<n>` where `n` is a millisecond timestamp captured when
/// the builder is created plus the task's ordinal, so ids are distinct within
/// one envelope even when every task is created in the same instant.
#[derive(Debug, Clone)]
pub struct EnvelopeBuilder {
    id_base: i64,
    response: String,
    tasks: Vec<Task>,
    execution: String,
}

impl Default for EnvelopeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvelopeBuilder {
    /// Create a builder whose task ids start at the current time in milliseconds.
    pub fn new() -> Self {
        Self::with_id_base(chrono::Utc::now().timestamp_millis())
    }

    /// Create a builder with a fixed task id base.
    pub fn with_id_base(id_base: i64) -> Self {
        Self {
            id_base,
            response: String::new(),
            tasks: Vec::new(),
            execution: String::new(),
        }
    }

    /// Set the human-readable response.
    pub fn response(mut self, text: impl Into<String>) -> Self {
        self.response = text.into();
        self
    }

    /// Set the execution narrative.
    pub fn execution(mut self, text: impl Into<String>) -> Self {
        self.execution = text.into();
        self
    }

    /// Append a task with an explicit status and optional result.
    pub fn task(
        mut self,
        description: impl Into<String>,
        status: TaskStatus,
        result: Option<String>,
    ) -> Self {
        let ordinal = i64::try_from(self.tasks.len()).unwrap_or(i64::MAX);
        let id = format!("task-{}", self.id_base.saturating_add(ordinal));
        self.tasks.push(Task {
            id,
            description: description.into(),
            status,
            result,
        });
        self
    }

    /// Append a completed task carrying a result.
    pub fn completed(self, description: impl Into<String>, result: impl Into<String>) -> Self {
        self.task(description, TaskStatus::Completed, Some(result.into()))
    }

    /// Number of tasks appended so far.
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Finish the envelope.
    ///
    /// # Errors
    ///
    /// Returns [`EnvelopeError`] when the response, the task list or the
    /// execution trace is empty.
    pub fn build(self) -> Result<ResultEnvelope, EnvelopeError> {
        if self.response.trim().is_empty() {
            return Err(EnvelopeError::EmptyResponse);
        }
        if self.tasks.is_empty() {
            return Err(EnvelopeError::NoTasks);
        }
        if self.execution.trim().is_empty() {
            return Err(EnvelopeError::EmptyExecution);
        }
        Ok(ResultEnvelope {
            response: self.response,
            tasks: self.tasks,
            execution: self.execution,
        })
    }
}
