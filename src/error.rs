//! Errors surfaced by the record access layer.
//!
//! Every SDK failure is classified into one of four kinds.

use aws_sdk_dynamodb::error::{ProvideErrorMetadata, SdkError};
use aws_sdk_dynamodb::operation::delete_item::DeleteItemError;
use aws_sdk_dynamodb::operation::get_item::GetItemError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use thiserror::Error;

/// Boxed source of a storage failure.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// DynamoDB error code for requests the service rejects as malformed.
const VALIDATION_EXCEPTION: &str = "ValidationException";

/// Errors that can occur during record operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed input, such as an empty partition key. Not worth retrying.
    #[error("validation failed: {0}")]
    Validation(String),
    /// A conditional write found a stored value other than the expected one.
    ///
    /// The stored item is unchanged. Reload and decide again rather than retrying.
    #[error("precondition failed: expected value of {} did not match", .attributes.join(", "))]
    PreconditionFailed {
        /// The attributes whose expected values were checked.
        attributes: Vec<String>,
    },
    /// The table could not be reached or refused to serve the request.
    ///
    /// Load, save and delete may be retried with backoff. A conditional update
    /// must re-derive its expected value first.
    #[error("storage unavailable during {operation}")]
    StorageUnavailable {
        /// The table operation that failed.
        operation: &'static str,
        /// The underlying SDK failure.
        #[source]
        source: BoxError,
    },
    /// A stored item could not be decoded into the record type.
    #[error("cannot map stored item: {0}")]
    Mapping(String),
}

/// Result type for record operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_dynamo::Error> for Error {
    fn from(err: serde_dynamo::Error) -> Self {
        Self::Validation(format!("value cannot be stored as an attribute: {err}"))
    }
}

impl Error {
    pub(crate) fn storage_unavailable(
        operation: &'static str,
        source: impl Into<BoxError>,
    ) -> Self {
        Self::StorageUnavailable {
            operation,
            source: source.into(),
        }
    }
}

/// Split an SDK error into its modeled service error, or classify it right away
/// when the request never got a service answer.
fn into_service_error<E>(
    err: SdkError<E>,
    operation: &'static str,
) -> std::result::Result<E, Error>
where
    E: std::error::Error + Send + Sync + 'static,
{
    match err {
        SdkError::ServiceError(context) => Ok(context.into_err()),
        other => Err(Error::storage_unavailable(operation, other)),
    }
}

fn classify_unmodeled<E>(err: E, operation: &'static str) -> Error
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
{
    if err.code() == Some(VALIDATION_EXCEPTION) {
        let message = err.message().unwrap_or("request rejected by the table").to_string();
        Error::Validation(message)
    } else {
        Error::storage_unavailable(operation, err)
    }
}

pub(crate) fn from_get_item_error(err: SdkError<GetItemError>) -> Error {
    match into_service_error(err, "GetItem") {
        Ok(err) => classify_unmodeled(err, "GetItem"),
        Err(err) => err,
    }
}

pub(crate) fn from_delete_item_error(err: SdkError<DeleteItemError>) -> Error {
    match into_service_error(err, "DeleteItem") {
        Ok(err) => classify_unmodeled(err, "DeleteItem"),
        Err(err) => err,
    }
}

pub(crate) fn from_put_item_error(err: SdkError<PutItemError>, attributes: Vec<String>) -> Error {
    match into_service_error(err, "PutItem") {
        Ok(err) => from_put_item_service_error(err, attributes),
        Err(err) => err,
    }
}

fn from_put_item_service_error(err: PutItemError, attributes: Vec<String>) -> Error {
    if err.is_conditional_check_failed_exception() {
        Error::PreconditionFailed { attributes }
    } else {
        classify_unmodeled(err, "PutItem")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use aws_sdk_dynamodb::error::{BuildError, ErrorMetadata};
    use aws_sdk_dynamodb::types::error::{
        ConditionalCheckFailedException, InternalServerError, ResourceNotFoundException,
    };
    use rstest::rstest;

    #[test]
    fn test_conditional_check_failure_is_precondition_failed() {
        let err = PutItemError::ConditionalCheckFailedException(
            ConditionalCheckFailedException::builder()
                .message("The conditional request failed")
                .build(),
        );
        let actual = from_put_item_service_error(err, vec!["Note".to_string()]);
        assert!(matches!(
            actual,
            Error::PreconditionFailed { ref attributes } if attributes == &["Note".to_string()]
        ));
        assert_eq!(
            actual.to_string(),
            "precondition failed: expected value of Note did not match"
        );
    }

    #[test]
    fn test_validation_exception_is_validation() {
        let err = PutItemError::generic(
            ErrorMetadata::builder()
                .code(VALIDATION_EXCEPTION)
                .message("One or more parameter values were invalid")
                .build(),
        );
        let actual = from_put_item_service_error(err, Vec::new());
        assert!(matches!(actual, Error::Validation(ref message) if message.contains("invalid")));
    }

    #[rstest]
    #[case::internal_server_error(
        PutItemError::InternalServerError(InternalServerError::builder().build())
    )]
    #[case::missing_table(
        PutItemError::ResourceNotFoundException(ResourceNotFoundException::builder().build())
    )]
    #[case::throttled(
        PutItemError::generic(ErrorMetadata::builder().code("ThrottlingException").build())
    )]
    fn test_service_failures_are_storage_unavailable(#[case] err: PutItemError) {
        let actual = from_put_item_service_error(err, Vec::new());
        assert!(matches!(
            actual,
            Error::StorageUnavailable {
                operation: "PutItem",
                ..
            }
        ));
    }

    #[test]
    fn test_construction_failure_is_storage_unavailable() {
        let err: SdkError<GetItemError> =
            SdkError::construction_failure(BuildError::other("no endpoint"));
        let actual = from_get_item_error(err);
        assert!(matches!(
            actual,
            Error::StorageUnavailable {
                operation: "GetItem",
                ..
            }
        ));
        assert_eq!(actual.to_string(), "storage unavailable during GetItem");
    }

    #[test]
    fn test_delete_validation_exception() {
        let err = DeleteItemError::generic(
            ErrorMetadata::builder()
                .code(VALIDATION_EXCEPTION)
                .build(),
        );
        let actual = classify_unmodeled(err, "DeleteItem");
        assert!(matches!(actual, Error::Validation(_)));
    }
}
