//! Service objects: clean the inputs, then run the logic.

use thiserror::Error;
use tracing::debug;

use crate::errors::{ErrorKind, InvalidInputsError, ServiceError};

/// Failure of a whole service execution
#[derive(Debug, Error)]
pub enum ExecuteError {
    /// Input cleaning rejected the inputs
    #[error(transparent)]
    InvalidInputs(#[from] InvalidInputsError),

    /// Service logic failed after the inputs were accepted
    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl ExecuteError {
    /// HTTP status the response layer should use
    pub fn response_status(&self) -> u16 {
        match self {
            Self::InvalidInputs(_) => ErrorKind::Validation.default_status(),
            Self::Service(err) => err.response_status(),
        }
    }
}

/// A unit of business logic that validates all of its inputs up front.
///
/// `clean` should report every problem it finds, not only the first one;
/// [`InputErrors`](crate::errors::InputErrors) helps with that.
pub trait Service {
    type Input;
    type Cleaned;
    type Output;

    fn clean(&self, input: Self::Input) -> Result<Self::Cleaned, InvalidInputsError>;

    fn process(&self, cleaned: Self::Cleaned) -> Result<Self::Output, ServiceError>;

    fn execute(&self, input: Self::Input) -> Result<Self::Output, ExecuteError> {
        let service = std::any::type_name::<Self>();

        let cleaned = self.clean(input).inspect_err(|err| {
            debug!(
                service,
                fields = err.errors().len(),
                non_field_errors = err.non_field_errors().len(),
                "Service inputs rejected"
            );
        })?;

        let output = self.process(cleaned).inspect_err(|err| {
            debug!(
                service,
                kind = %err.kind(),
                status = err.response_status(),
                "Service logic failed"
            );
        })?;

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{FieldError, InputErrors};
    use crate::test_support::capture_logs;

    struct Transfer {
        balance: u64,
    }

    struct TransferInput {
        recipient: String,
        amount: i64,
    }

    impl Service for Transfer {
        type Input = TransferInput;
        type Cleaned = (String, u64);
        type Output = u64;

        fn clean(&self, input: TransferInput) -> Result<(String, u64), InvalidInputsError> {
            let mut errors = InputErrors::new();
            if input.recipient.trim().is_empty() {
                errors.add_field_error(
                    "recipient",
                    FieldError::new("required", "Recipient is required"),
                );
            }
            if input.amount <= 0 {
                errors.add_field_error(
                    "amount",
                    FieldError::new("not_positive", "Amount must be positive"),
                );
            }
            errors.finish()?;
            Ok((input.recipient, input.amount as u64))
        }

        fn process(&self, (_, amount): (String, u64)) -> Result<u64, ServiceError> {
            self.balance.checked_sub(amount).ok_or_else(|| {
                ServiceError::service_object_logic()
                    .with_translation_key("insufficient_funds")
                    .with_message("Not enough funds")
            })
        }
    }

    fn input(recipient: &str, amount: i64) -> TransferInput {
        TransferInput {
            recipient: recipient.to_string(),
            amount,
        }
    }

    #[test]
    fn test_execute_success() {
        let service = Transfer { balance: 100 };
        let remaining = service.execute(input("bob", 40)).unwrap();
        assert_eq!(remaining, 60);
    }

    #[test]
    fn test_execute_reports_all_invalid_inputs() {
        let service = Transfer { balance: 100 };
        let err = service.execute(input(" ", -5)).unwrap_err();

        assert_eq!(err.response_status(), 400);
        match err {
            ExecuteError::InvalidInputs(inner) => {
                assert!(inner.errors().contains_key("recipient"));
                assert!(inner.errors().contains_key("amount"));
                assert!(inner.non_field_errors().is_empty());
            }
            other => panic!("expected invalid inputs, got {other:?}"),
        }
    }

    #[test]
    fn test_execute_surfaces_logic_error() {
        let service = Transfer { balance: 10 };
        let err = service.execute(input("bob", 40)).unwrap_err();

        assert_eq!(err.response_status(), 400);
        assert_eq!(err.to_string(), "Not enough funds");
        match err {
            ExecuteError::Service(inner) => {
                assert_eq!(inner.kind(), ErrorKind::ServiceObjectLogic);
                assert_eq!(inner.translation_key(), "insufficient_funds");
            }
            other => panic!("expected service error, got {other:?}"),
        }
    }

    #[test]
    fn test_execute_logs_rejected_inputs() {
        let service = Transfer { balance: 100 };
        let logs = capture_logs(|| {
            let _ = service.execute(input(" ", -5));
        });

        assert!(logs.contains("DEBUG"), "{logs}");
        assert!(logs.contains("Service inputs rejected"), "{logs}");
        assert!(logs.contains("fields=2"), "{logs}");
        assert!(logs.contains("non_field_errors=0"), "{logs}");
        assert!(!logs.contains("Service logic failed"), "{logs}");
    }

    #[test]
    fn test_execute_logs_logic_failure() {
        let service = Transfer { balance: 10 };
        let logs = capture_logs(|| {
            let _ = service.execute(input("bob", 40));
        });

        assert!(logs.contains("DEBUG"), "{logs}");
        assert!(logs.contains("Service logic failed"), "{logs}");
        assert!(logs.contains("kind=service_object_logic"), "{logs}");
        assert!(logs.contains("status=400"), "{logs}");
        assert!(!logs.contains("Service inputs rejected"), "{logs}");
    }

    #[test]
    fn test_execute_success_logs_nothing() {
        let service = Transfer { balance: 100 };
        let logs = capture_logs(|| {
            let _ = service.execute(input("bob", 40));
        });

        assert!(logs.is_empty(), "{logs}");
    }
}
