//! Ports - 抽象化レイヤー
//!
//! 時刻とトレース ID の生成を trait の裏に隠し、テストで差し替えられるようにする。

pub mod clock;
pub mod id_generator;

pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::id_generator::{TraceIdGenerator, UlidTraceIdGenerator, parse_trace_id};
