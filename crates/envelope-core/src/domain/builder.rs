//! Builder and parameter struct for [`ResultEnvelope`].

use super::envelope::ResultEnvelope;
use super::status::StatusCode;
use crate::ports::{Clock, SystemClock};

/// Chained setters terminated by [`build`](Self::build).
///
/// No validation: every combination is built as-is. An untouched builder
/// yields `code = 0`, an empty message, no data, `time = 0` and no trace id.
#[derive(Debug, Clone)]
pub struct ResultEnvelopeBuilder<T> {
    code: i32,
    message: String,
    data: Option<T>,
    time: i64,
    trace_id: Option<String>,
}

impl<T> Default for ResultEnvelopeBuilder<T> {
    fn default() -> Self {
        Self {
            code: 0,
            message: String::new(),
            data: None,
            time: 0,
            trace_id: None,
        }
    }
}

impl<T> ResultEnvelopeBuilder<T> {
    /// 新しい Builder を作成
    pub fn new() -> Self {
        Self::default()
    }

    /// Status code; `0` means success.
    pub fn code(mut self, code: i32) -> Self {
        self.code = code;
        self
    }

    /// Set both `code` and `message` from a well-known status.
    pub fn status(self, status: StatusCode) -> Self {
        self.code(status.code()).message(status.message())
    }

    /// Human-readable message, independent of `code`.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Attach a payload.
    pub fn data(mut self, data: T) -> Self {
        self.data = Some(data);
        self
    }

    /// Like [`data`](Self::data) but accepts an absent payload.
    pub fn maybe_data(mut self, data: Option<T>) -> Self {
        self.data = data;
        self
    }

    /// Creation time in epoch milliseconds. Left at `0` when unset.
    pub fn time(mut self, time: i64) -> Self {
        self.time = time;
        self
    }

    /// Stamp `time` from the given clock.
    pub fn time_from(self, clock: &impl Clock) -> Self {
        self.time(clock.now_millis())
    }

    /// Correlation id carried into the built envelope.
    pub fn trace_id(mut self, trace_id: impl Into<String>) -> Self {
        self.trace_id = Some(trace_id.into());
        self
    }

    /// Assemble the envelope as-is; never fails.
    pub fn build(self) -> ResultEnvelope<T> {
        tracing::trace!(
            code = self.code,
            has_data = self.data.is_some(),
            time = self.time,
            "built result envelope"
        );
        ResultEnvelope::from_parts(self.code, self.message, self.data, self.time, self.trace_id)
    }
}

/// Single-constructor form: every field is optional.
///
/// Missing `code`/`message` fall back to [`StatusCode::Success`], a missing
/// `time` is stamped from the clock.
#[derive(Debug, Clone)]
pub struct EnvelopeParams<T> {
    pub code: Option<i32>,
    pub message: Option<String>,
    pub data: Option<T>,
    pub time: Option<i64>,
    pub trace_id: Option<String>,
}

impl<T> Default for EnvelopeParams<T> {
    fn default() -> Self {
        Self {
            code: None,
            message: None,
            data: None,
            time: None,
            trace_id: None,
        }
    }
}

impl<T> EnvelopeParams<T> {
    /// Build, stamping a missing `time` with wall-clock time.
    pub fn build(self) -> ResultEnvelope<T> {
        self.build_with_clock(&SystemClock)
    }

    /// Like [`build`](Self::build) but stamps a missing `time` from `clock`.
    pub fn build_with_clock(self, clock: &impl Clock) -> ResultEnvelope<T> {
        let status = StatusCode::Success;
        let mut builder = ResultEnvelopeBuilder::new()
            .code(self.code.unwrap_or(status.code()))
            .message(self.message.unwrap_or_else(|| status.message().to_string()))
            .maybe_data(self.data)
            .time(self.time.unwrap_or_else(|| clock.now_millis()));
        if let Some(trace_id) = self.trace_id {
            builder = builder.trace_id(trace_id);
        }
        builder.build()
    }
}
