//! ResultEnvelope - API レスポンスの共通形式
//!
//! `code` / `message` / `data` / `time` / `traceId` を運ぶだけの入れ物。
//! 成功・失敗の判定は `code` から導出し、保存しない。

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use super::builder::{EnvelopeParams, ResultEnvelopeBuilder};
use super::status::StatusCode;
use crate::error::EnvelopeError;
use crate::ports::{Clock, SystemClock, TraceIdGenerator};

/// A response envelope.
///
/// Wire shape (JSON): `{"code":0,"message":"success","data":..,"time":..,"traceId":..}`.
/// `is_success` / `is_error` are derived and never serialized.
///
/// Fields stay mutable through the `set_*` methods for callers that patch an
/// envelope in place; prefer [`with_trace_id`](Self::with_trace_id) and
/// friends when building a new value is enough.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultEnvelope<T> {
    #[serde(default)]
    code: i32,
    #[serde(default, deserialize_with = "null_as_empty")]
    message: String,
    data: Option<T>,
    #[serde(default)]
    time: i64,
    #[serde(default)]
    trace_id: Option<String>,
}

/// `"message": null` decodes to an empty message, same as an unset builder.
fn null_as_empty<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(d)?.unwrap_or_default())
}

impl<T> ResultEnvelope<T> {
    pub(crate) fn from_parts(
        code: i32,
        message: String,
        data: Option<T>,
        time: i64,
        trace_id: Option<String>,
    ) -> Self {
        Self {
            code,
            message,
            data,
            time,
            trace_id,
        }
    }

    /// 空の Builder を作成（全フィールドはゼロ値）
    pub fn builder() -> ResultEnvelopeBuilder<T> {
        ResultEnvelopeBuilder::new()
    }

    /// Build from optional named fields; see [`EnvelopeParams`] for defaults.
    pub fn from_params(params: EnvelopeParams<T>) -> Self {
        params.build()
    }

    // ========================================
    // Generic factories
    // ========================================

    /// No payload, stamped now.
    pub fn of(code: i32, message: impl Into<String>) -> Self {
        Self::of_with_clock(code, message, None, &SystemClock)
    }

    /// With payload, stamped now.
    pub fn of_data(code: i32, message: impl Into<String>, data: T) -> Self {
        Self::of_with_clock(code, message, Some(data), &SystemClock)
    }

    /// Fully explicit; `time` is stored exactly as given.
    pub fn of_at(code: i32, message: impl Into<String>, data: Option<T>, time: i64) -> Self {
        Self::builder()
            .code(code)
            .message(message)
            .maybe_data(data)
            .time(time)
            .build()
    }

    /// Stamped from the given clock instead of wall-clock time.
    pub fn of_with_clock(
        code: i32,
        message: impl Into<String>,
        data: Option<T>,
        clock: &impl Clock,
    ) -> Self {
        Self::of_at(code, message, data, clock.now_millis())
    }

    // ========================================
    // Success
    // ========================================

    /// `code = 0`, `message = "success"`, no payload, stamped now.
    pub fn success_empty() -> Self {
        Self::of(StatusCode::Success.code(), StatusCode::Success.message())
    }

    /// Success status with a payload, stamped now.
    pub fn success(data: T) -> Self {
        Self::of_data(StatusCode::Success.code(), StatusCode::Success.message(), data)
    }

    /// Success code with a custom message, stamped now.
    pub fn success_with(message: impl Into<String>, data: T) -> Self {
        Self::of_data(StatusCode::Success.code(), message, data)
    }

    /// Success code with a custom message and an explicit `time`.
    pub fn success_at(message: impl Into<String>, data: T, time: i64) -> Self {
        Self::of_at(StatusCode::Success.code(), message, Some(data), time)
    }

    // ========================================
    // Failure
    // ========================================

    /// `code = -1`, `message = "error"`, no payload, stamped now.
    pub fn failure() -> Self {
        Self::of(StatusCode::Error.code(), StatusCode::Error.message())
    }

    /// Arbitrary failure code and message, no payload, stamped now.
    pub fn failure_with(code: i32, message: impl Into<String>) -> Self {
        Self::of(code, message)
    }

    /// Failure with a payload (e.g. validation details), stamped now.
    pub fn failure_data(code: i32, message: impl Into<String>, data: T) -> Self {
        Self::of_data(code, message, data)
    }

    /// Fully explicit failure; `time` is stored exactly as given.
    pub fn failure_at(code: i32, message: impl Into<String>, data: Option<T>, time: i64) -> Self {
        Self::of_at(code, message, data, time)
    }

    // ========================================
    // Queries
    // ========================================

    /// `code == 0`. 保存せず毎回導出する。
    pub fn is_success(&self) -> bool {
        self.code == StatusCode::Success.code()
    }

    /// Negation of [`is_success`](Self::is_success).
    pub fn is_error(&self) -> bool {
        !self.is_success()
    }

    /// The well-known status for `code`, if it is one.
    pub fn status(&self) -> Option<StatusCode> {
        StatusCode::from_code(self.code)
    }

    pub fn code(&self) -> i32 {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn into_data(self) -> Option<T> {
        self.data
    }

    pub fn time(&self) -> i64 {
        self.time
    }

    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    // ========================================
    // In-place mutation
    // ========================================

    pub fn set_code(&mut self, code: i32) {
        self.code = code;
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    pub fn set_data(&mut self, data: Option<T>) {
        self.data = data;
    }

    pub fn set_time(&mut self, time: i64) {
        self.time = time;
    }

    pub fn set_trace_id(&mut self, trace_id: Option<String>) {
        self.trace_id = trace_id;
    }

    // ========================================
    // Value-producing updates
    // ========================================

    pub fn with_trace_id(mut self, trace_id: impl Into<String>) -> Self {
        self.trace_id = Some(trace_id.into());
        self
    }

    pub fn with_generated_trace_id(self, id_gen: &impl TraceIdGenerator) -> Self {
        self.with_trace_id(id_gen.generate_trace_id())
    }

    /// Transform the payload, keeping every other field.
    pub fn map_data<U>(self, f: impl FnOnce(T) -> U) -> ResultEnvelope<U> {
        ResultEnvelope {
            code: self.code,
            message: self.message,
            data: self.data.map(f),
            time: self.time,
            trace_id: self.trace_id,
        }
    }

    /// Success → `Ok(data)`, anything else → [`EnvelopeError::Failure`].
    pub fn into_result(self) -> Result<Option<T>, EnvelopeError> {
        if self.is_success() {
            Ok(self.data)
        } else {
            Err(EnvelopeError::Failure {
                code: self.code,
                message: self.message,
            })
        }
    }
}

impl<T: Serialize> ResultEnvelope<T> {
    pub fn to_json(&self) -> Result<String, EnvelopeError> {
        serde_json::to_string(self).map_err(EnvelopeError::Encode)
    }

    pub fn to_json_pretty(&self) -> Result<String, EnvelopeError> {
        serde_json::to_string_pretty(self).map_err(EnvelopeError::Encode)
    }
}

impl<T: DeserializeOwned> ResultEnvelope<T> {
    pub fn from_json(s: &str) -> Result<Self, EnvelopeError> {
        serde_json::from_str(s).map_err(|e| {
            tracing::debug!(error = %e, "failed to decode result envelope");
            EnvelopeError::Decode(e)
        })
    }
}

impl<T, E: fmt::Display> From<Result<T, E>> for ResultEnvelope<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Self::success(data),
            Err(e) => Self::failure_with(StatusCode::Error.code(), e.to_string()),
        }
    }
}

impl<T: fmt::Debug> fmt::Display for ResultEnvelope<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ResultEnvelope{{code={}, message='{}', data=", self.code, self.message)?;
        match &self.data {
            Some(data) => write!(f, "{data:?}")?,
            None => f.write_str("null")?,
        }
        write!(f, ", time={}}}", self.time)
    }
}
