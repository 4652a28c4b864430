//! envelope-core
//!
//! API レスポンスを標準化するための汎用エンベロープ。
//!
//! # モジュール構成
//! - **domain**: StatusCode, ResultEnvelope, ResultEnvelopeBuilder, EnvelopeParams
//! - **ports**: 抽象化レイヤー（Clock, TraceIdGenerator）
//! - **error**: エラー型（EnvelopeError）
//!
//! ```
//! use envelope_core::ResultEnvelope;
//!
//! let ok = ResultEnvelope::success_with("ok", 42);
//! assert!(ok.is_success());
//!
//! let missing: ResultEnvelope<()> = ResultEnvelope::failure_with(404, "not found");
//! assert!(missing.is_error());
//! ```

pub mod domain;
pub mod error;
pub mod ports;

pub use domain::{EnvelopeParams, ResultEnvelope, ResultEnvelopeBuilder, StatusCode};
pub use error::EnvelopeError;
