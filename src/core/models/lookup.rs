//! Outcome of a single per-repository lookup
//!
//! The host distinguishes a confirmed absence (HTTP 404) from a lookup that
//! could not be answered (other status codes, transport errors, unreadable
//! bodies). The validator treats both as "absent"; the failure detail is kept
//! so that reports can show which answers were not trustworthy.

use serde::Serialize;

/// Result of one lookup against the repository host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    /// The resource exists (HTTP 200)
    Found(T),
    /// The host reported the resource as missing (HTTP 404)
    Absent,
    /// The lookup did not produce a usable answer
    Failed(LookupFailure),
}

impl<T> Lookup<T> {
    /// The found value, treating `Absent` and `Failed` alike
    #[must_use]
    pub fn found(self) -> Option<T> {
        match self {
            Self::Found(value) => Some(value),
            Self::Absent | Self::Failed(_) => None,
        }
    }

    /// Continue with the found value; `Absent` and `Failed` pass through
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Lookup<U>) -> Lookup<U> {
        match self {
            Self::Found(value) => f(value),
            Self::Absent => Lookup::Absent,
            Self::Failed(failure) => Lookup::Failed(failure),
        }
    }

    /// Whether the resource was found
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// The failure, if the lookup did not produce an answer
    #[must_use]
    pub const fn failure(&self) -> Option<&LookupFailure> {
        match self {
            Self::Failed(failure) => Some(failure),
            Self::Found(_) | Self::Absent => None,
        }
    }
}

/// Why a lookup could not be answered
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LookupFailure {
    /// The host answered with a status other than 200 or 404
    Status {
        /// Resource path relative to the repository, e.g. `contents/LICENSE`
        resource: String,
        /// HTTP status code
        status: u16,
    },
    /// The request never got an HTTP answer
    Transport {
        /// Resource path relative to the repository
        resource: String,
        /// Error description from the HTTP client
        message: String,
    },
    /// The host answered 200 but the body had an unexpected shape
    Decode {
        /// Resource path relative to the repository
        resource: String,
        /// What was wrong with the body
        message: String,
    },
}

impl LookupFailure {
    /// The resource the failed lookup was for
    #[must_use]
    pub fn resource(&self) -> &str {
        match self {
            Self::Status { resource, .. }
            | Self::Transport { resource, .. }
            | Self::Decode { resource, .. } => resource,
        }
    }
}

impl std::fmt::Display for LookupFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Status { status, .. } => write!(f, "HTTP {status}"),
            Self::Transport { message, .. } => f.write_str(message),
            Self::Decode { message, .. } => write!(f, "unexpected response body ({message})"),
        }
    }
}
