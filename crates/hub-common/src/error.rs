// SPDX-License-Identifier: Apache-2.0

use crate::filters::FilterType;
use serde::{Deserialize, Serialize};
use std::fmt;

pub type Result<T> = std::result::Result<T, HubError>;

/// Machine-facing description of a failed remote call, preserved verbatim
/// from the service response so callers can branch on `status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RemoteServerError {
    pub status: u16,
    pub url: String,
    pub message: String,
}

impl RemoteServerError {
    #[must_use]
    pub fn new(message: impl Into<String>, url: impl Into<String>, status: u16) -> Self {
        Self {
            status,
            url: url.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for RemoteServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) at {}", self.message, self.status, self.url)
    }
}

#[derive(Debug)]
#[non_exhaustive]
pub enum HubError {
    InvalidInput(String),
    InvalidDate {
        value: String,
        reason: &'static str,
    },
    FilterTypeMismatch {
        expected: FilterType,
        found: FilterType,
    },
    RemoteServer(RemoteServerError),
    SerdeJson(serde_json::Error),
}

impl HubError {
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    #[must_use]
    pub fn invalid_date(value: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidDate {
            value: value.into(),
            reason,
        }
    }
}

impl fmt::Display for HubError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(message) => write!(f, "invalid input: {message}"),
            Self::InvalidDate { value, reason } => {
                write!(f, "invalid date `{value}`: {reason}")
            }
            Self::FilterTypeMismatch { expected, found } => write!(
                f,
                "cannot merge a `{found}` filter into a `{expected}` merge",
            ),
            Self::RemoteServer(err) => write!(f, "remote server error: {err}"),
            Self::SerdeJson(err) => write!(f, "serde json error: {err}"),
        }
    }
}

impl std::error::Error for HubError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::SerdeJson(err) => Some(err),
            Self::InvalidInput(_)
            | Self::InvalidDate { .. }
            | Self::FilterTypeMismatch { .. }
            | Self::RemoteServer(_) => None,
        }
    }
}

impl From<serde_json::Error> for HubError {
    fn from(value: serde_json::Error) -> Self {
        Self::SerdeJson(value)
    }
}

impl From<RemoteServerError> for HubError {
    fn from(value: RemoteServerError) -> Self {
        Self::RemoteServer(value)
    }
}

const _: fn() = || {
    fn assert_traits<T: Send + Sync + std::error::Error>() {}
    assert_traits::<HubError>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_the_offending_value() {
        let err = HubError::invalid_date("2019-13-40", "expected YYYY-MM-DD");
        assert_eq!(
            err.to_string(),
            "invalid date `2019-13-40`: expected YYYY-MM-DD"
        );
    }

    #[test]
    fn remote_server_error_round_trips() {
        let err = RemoteServerError::new("not found", "https://example.com/api", 404);
        let json = serde_json::to_string(&err).expect("encode");
        let decoded: RemoteServerError = serde_json::from_str(&json).expect("decode");
        assert_eq!(decoded, err);
        assert_eq!(decoded.status, 404);
    }

    #[test]
    fn mismatch_display_names_both_types() {
        let err = HubError::FilterTypeMismatch {
            expected: FilterType::Content,
            found: FilterType::User,
        };
        assert_eq!(
            err.to_string(),
            "cannot merge a `user` filter into a `content` merge"
        );
    }
}
