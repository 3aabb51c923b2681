//! User-facing failure notices.
//!
//! Raw transport errors never reach the transcript. A failed query is mapped
//! to one of four canned notices, checked in priority order: server-side
//! status, the widget's own deadline, offline client, then a generic retry.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

use crate::net::types::QueryError;

/// Opening sentence shared by every notice.
pub const APOLOGY_PREFIX: &str = "I'm sorry, I'm having trouble connecting right now. ";

/// Which canned notice a failure maps to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureNotice {
    ServerError,
    TimedOut,
    Offline,
    Generic,
}

impl FailureNotice {
    /// Pick the notice for a failed query.
    ///
    /// `online` is the client's connectivity at the time of failure.
    pub fn classify(error: &QueryError, online: bool) -> Self {
        if error.is_server_error() {
            Self::ServerError
        } else if matches!(error, QueryError::Timeout) {
            Self::TimedOut
        } else if !online {
            Self::Offline
        } else {
            Self::Generic
        }
    }

    fn detail(self) -> &'static str {
        match self {
            Self::ServerError => "The server encountered an error. Please try again in a moment.",
            Self::TimedOut => {
                "The request timed out. This might happen on the first request as I wake up. Please try again."
            }
            Self::Offline => "Please check your internet connection.",
            Self::Generic => "Please try again later.",
        }
    }

    /// Full text shown as the bot turn.
    pub fn message(self) -> String {
        format!("{APOLOGY_PREFIX}{}", self.detail())
    }
}
