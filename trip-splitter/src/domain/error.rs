//! Domain error types.
//!
//! These errors represent data inconsistencies in domain values built from
//! feed or configuration input. They are distinct from IO/parse errors.

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DomainError {
    /// Two stop visits of the same trip share a sequence number
    #[error("trip {trip_id} has more than one stop at sequence {sequence}")]
    DuplicateSequence { trip_id: String, sequence: u32 },

    /// A trip without an id cannot be reported
    #[error("trip id must not be empty")]
    EmptyTripId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DomainError::DuplicateSequence {
            trip_id: "123".into(),
            sequence: 4,
        };
        assert_eq!(err.to_string(), "trip 123 has more than one stop at sequence 4");

        let err = DomainError::EmptyTripId;
        assert_eq!(err.to_string(), "trip id must not be empty");
    }
}
