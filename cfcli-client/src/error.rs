//! Unified error type for all Cloudflare client operations.

use thiserror::Error;

/// The underlying reason an operation failed.
///
/// Every fallible operation on the client wraps one of these into its own
/// operation-specific [`ClientError`] variant, so callers can match on a
/// small, stable vocabulary without parsing status codes themselves.
#[derive(Debug, Error)]
pub enum FailureCause {
    /// The API answered HTTP 403. Checked before any error-body handling
    /// so the caller gets an actionable message instead of a raw status.
    #[error("UNAUTHORIZED. You might need to check your API key")]
    Unauthorized,

    /// Any other non-success status, together with whatever body the API
    /// sent back.
    #[error("unexpected status code: {code} - {body}")]
    Status {
        /// HTTP status code of the response.
        code: u16,
        /// Response body as text (may be empty).
        body: String,
    },

    /// Network-level failure: connect error, timeout, cancelled in-flight
    /// request, failure while reading the response body.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The response body did not decode as the expected JSON shape.
    #[error(transparent)]
    Decode(#[from] serde_json::Error),
}

/// Error type returned by every [`CloudflareApi`](crate::CloudflareApi)
/// operation.
///
/// Not-found conditions get their own entity-specific variants; everything
/// else is classified per operation and carries its [`FailureCause`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// No zone matches the requested domain, or the zone vanished between
    /// resolution and a scoped call.
    #[error("zone not found")]
    ZoneNotFound,

    /// The record to delete does not exist.
    #[error("record not found")]
    RecordNotFound,

    /// Resolving a zone by domain failed.
    #[error("zone list failed: {0}")]
    ZoneListFailed(FailureCause),

    /// Listing the records of a zone failed.
    #[error("zone records failed: {0}")]
    ZoneRecordsFailed(FailureCause),

    /// Creating a record failed.
    #[error("record add failed: {0}")]
    RecordAddFailed(FailureCause),

    /// Deleting a record failed.
    #[error("record delete failed: {0}")]
    RecordDeleteFailed(FailureCause),

    /// The requested record type is not one of the eight supported values.
    #[error("invalid zone type: {0}")]
    InvalidZoneType(String),
}

impl ClientError {
    /// The wrapped [`FailureCause`], if this variant carries one.
    #[must_use]
    pub fn cause(&self) -> Option<&FailureCause> {
        match self {
            Self::ZoneListFailed(cause)
            | Self::ZoneRecordsFailed(cause)
            | Self::RecordAddFailed(cause)
            | Self::RecordDeleteFailed(cause) => Some(cause),
            _ => None,
        }
    }

    /// Whether the failure was an HTTP 403 on any operation.
    #[must_use]
    pub fn is_auth_failure(&self) -> bool {
        matches!(self.cause(), Some(FailureCause::Unauthorized))
    }

    /// 是否为预期行为（用户输入、资源不存在等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::ZoneNotFound | Self::RecordNotFound | Self::InvalidZoneType(_)
        )
    }
}

/// Convenience type alias for `Result<T, ClientError>`.
pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_zone_not_found() {
        assert_eq!(ClientError::ZoneNotFound.to_string(), "zone not found");
    }

    #[test]
    fn display_record_not_found() {
        assert_eq!(ClientError::RecordNotFound.to_string(), "record not found");
    }

    #[test]
    fn display_unauthorized_mentions_api_key() {
        let e = ClientError::ZoneListFailed(FailureCause::Unauthorized);
        assert_eq!(
            e.to_string(),
            "zone list failed: UNAUTHORIZED. You might need to check your API key"
        );
    }

    #[test]
    fn display_status_includes_code_and_body() {
        let e = ClientError::RecordAddFailed(FailureCause::Status {
            code: 500,
            body: "oops".to_string(),
        });
        assert_eq!(
            e.to_string(),
            "record add failed: unexpected status code: 500 - oops"
        );
    }

    #[test]
    fn display_invalid_zone_type() {
        let e = ClientError::InvalidZoneType("BOGUS".to_string());
        assert_eq!(e.to_string(), "invalid zone type: BOGUS");
    }

    #[test]
    fn auth_failure_detected_on_every_operation_kind() {
        let wrapped = [
            ClientError::ZoneListFailed(FailureCause::Unauthorized),
            ClientError::ZoneRecordsFailed(FailureCause::Unauthorized),
            ClientError::RecordAddFailed(FailureCause::Unauthorized),
            ClientError::RecordDeleteFailed(FailureCause::Unauthorized),
        ];
        for e in &wrapped {
            assert!(e.is_auth_failure(), "expected auth failure: {e}");
        }
    }

    #[test]
    fn auth_failure_negative_cases() {
        assert!(!ClientError::ZoneNotFound.is_auth_failure());
        assert!(!ClientError::ZoneListFailed(FailureCause::Status {
            code: 500,
            body: String::new(),
        })
        .is_auth_failure());
    }

    #[test]
    fn cause_accessor() {
        let e = ClientError::ZoneRecordsFailed(FailureCause::Status {
            code: 502,
            body: "bad gateway".to_string(),
        });
        assert!(matches!(
            e.cause(),
            Some(FailureCause::Status { code: 502, .. })
        ));
        assert!(ClientError::ZoneNotFound.cause().is_none());
    }

    #[test]
    fn expected_variants() {
        assert!(ClientError::ZoneNotFound.is_expected());
        assert!(ClientError::RecordNotFound.is_expected());
        assert!(ClientError::InvalidZoneType("X".into()).is_expected());
        assert!(!ClientError::ZoneListFailed(FailureCause::Unauthorized).is_expected());
    }
}
