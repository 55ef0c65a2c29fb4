use std::backtrace::Backtrace;
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors raised by instance construction and the planners.
///
/// An unsolvable instance is not an error: planners report it as `Ok(None)`,
/// since exhausting a finite state space is an expected outcome the caller
/// must handle by choosing different instance parameters.
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    /// Malformed instance parameters, detected at construction time. This
    /// indicates a bug in the caller or generator and fails fast.
    #[error("invalid instance: {0}")]
    InvalidInstance(String),

    /// A state produced during planning failed its family's structural
    /// invariant (counts out of range, disk stack unsorted). Internal logic
    /// error; never expected from correct adapters.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Inner: {inner}\n{backtrace}")]
    Inner {
        inner: Box<PlanError>,
        backtrace: Box<Backtrace>,
    },
}

impl From<PlanError> for Error {
    fn from(inner: PlanError) -> Self {
        Error::Inner {
            inner: Box::new(inner),
            backtrace: Box::new(std::backtrace::Backtrace::capture()),
        }
    }
}

impl Error {
    /// The underlying planning error, without the captured backtrace.
    pub fn inner(&self) -> &PlanError {
        match self {
            Error::Inner { inner, .. } => inner,
        }
    }
}
