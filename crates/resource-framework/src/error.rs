//! # Framework Errors
//!
//! Errors shared by every actor and client: channel failures, missing ids, and
//! boxed resource errors. Storage failures have their own type in
//! [`storage`](crate::storage).

/// Errors that can occur within the resource framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Returns the typed resource error if this is an `EntityError` holding an `E`.
    ///
    /// Domain clients use this to hand their own error variants back to callers
    /// instead of a stringified message.
    pub fn entity_error<E: std::error::Error + 'static>(&self) -> Option<&E> {
        match self {
            FrameworkError::EntityError(inner) => inner.downcast_ref::<E>(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error, PartialEq)]
    #[error("locked")]
    struct Locked;

    #[test]
    fn entity_error_downcasts_to_the_boxed_type() {
        let err = FrameworkError::EntityError(Box::new(Locked));
        assert_eq!(err.entity_error::<Locked>(), Some(&Locked));
        assert!(err.entity_error::<std::io::Error>().is_none());
        assert!(FrameworkError::ActorClosed.entity_error::<Locked>().is_none());
    }
}
