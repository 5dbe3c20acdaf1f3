use thiserror::Error;

/// Errors raised by the sketching core.
///
/// Every variant signals caller misuse (broken event wiring upstream or a
/// missing collaborator), never an environmental failure, so none of them
/// are retryable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SketchError {
    /// A lifecycle operation was called in the wrong phase, e.g. `start`
    /// while a sketch is already active or `finish` while idle.
    #[error("cannot {operation} in this state (sketch active: {active})")]
    InvalidState {
        operation: &'static str,
        active: bool,
    },

    /// The session or shape lacks something the requested operation needs.
    #[error("missing capability: {0}")]
    MissingCapability(&'static str),
}
