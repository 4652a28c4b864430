//! StatusCode - 既知のステータスコード
//!
//! `(code, message)` の固定テーブル。セットはコンパイル時に閉じている。

use std::fmt;

use crate::error::EnvelopeError;

/// Well-known status codes carried by a [`ResultEnvelope`].
///
/// The envelope stores the plain numeric code, so any other integer is still
/// a valid failure category there.
///
/// [`ResultEnvelope`]: super::ResultEnvelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCode {
    Success,
    Error,
}

impl StatusCode {
    pub const ALL: [StatusCode; 2] = [StatusCode::Success, StatusCode::Error];

    pub const fn code(self) -> i32 {
        match self {
            StatusCode::Success => 0,
            StatusCode::Error => -1,
        }
    }

    pub const fn message(self) -> &'static str {
        match self {
            StatusCode::Success => "success",
            StatusCode::Error => "error",
        }
    }

    /// Reverse lookup. Returns `None` for codes outside the table.
    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.code() == code)
    }
}

impl TryFrom<i32> for StatusCode {
    type Error = EnvelopeError;

    fn try_from(code: i32) -> Result<Self, EnvelopeError> {
        Self::from_code(code).ok_or(EnvelopeError::UnknownStatusCode(code))
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
