//! TraceIdGenerator port - トレース ID 生成の抽象化
//!
//! 封筒の `traceId` に付けるための相関 ID を生成します。
//! テスト容易性のために、trait として抽象化しています。
//!
//! # 実装
//! - **UlidTraceIdGenerator**: ULID ベース（本番用）

use crate::ports::Clock;
use ulid::Ulid;

/// Display prefix of generated trace ids.
pub const TRACE_ID_PREFIX: &str = "trace-";

/// TraceIdGenerator は相関用のトレース ID を生成
///
/// # Thread Safety
/// - `Send + Sync` を要求（複数スレッドから使える）
pub trait TraceIdGenerator: Send + Sync {
    fn generate_trace_id(&self) -> String;
}

/// UlidTraceIdGenerator は ULID ベースのトレース ID 生成器
///
/// Clock を使って現在時刻ベースの ULID を生成します。
/// 形式: `trace-<ULID>`（時刻でソート可能）
pub struct UlidTraceIdGenerator<C> {
    clock: C,
}

impl<C: Clock> UlidTraceIdGenerator<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }
}

impl<C: Clock> TraceIdGenerator for UlidTraceIdGenerator<C> {
    fn generate_trace_id(&self) -> String {
        let timestamp_ms = self.clock.now_millis().max(0) as u64;
        let ulid = Ulid::from_parts(timestamp_ms, rand::random());
        format!("{TRACE_ID_PREFIX}{ulid}")
    }
}

/// Parses the ULID part back out of a generated trace id.
pub fn parse_trace_id(trace_id: &str) -> Option<Ulid> {
    let raw = trace_id.strip_prefix(TRACE_ID_PREFIX)?;
    Ulid::from_string(raw).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{FixedClock, SystemClock};
    use chrono::{TimeZone, Utc};

    #[test]
    fn generates_unique_ids() {
        let id_gen = UlidTraceIdGenerator::new(SystemClock);

        let id1 = id_gen.generate_trace_id();
        let id2 = id_gen.generate_trace_id();
        let id3 = id_gen.generate_trace_id();

        assert_ne!(id1, id2);
        assert_ne!(id2, id3);
        assert_ne!(id1, id3);
        assert!(id1.starts_with(TRACE_ID_PREFIX));
    }

    #[test]
    fn fixed_clock_pins_timestamp_part() {
        let fixed_time = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let id_gen = UlidTraceIdGenerator::new(FixedClock::new(fixed_time));

        let id1 = id_gen.generate_trace_id();
        let id2 = id_gen.generate_trace_id();

        // ランダム部分があるので ID は異なる
        assert_ne!(id1, id2);

        let ulid1 = parse_trace_id(&id1).expect("ulid");
        let ulid2 = parse_trace_id(&id2).expect("ulid");
        assert_eq!(ulid1.timestamp_ms(), ulid2.timestamp_ms());
        assert_eq!(ulid1.timestamp_ms(), fixed_time.timestamp_millis() as u64);
    }

    #[test]
    fn parse_rejects_foreign_ids() {
        assert!(parse_trace_id("abc").is_none());
        assert!(parse_trace_id("trace-not-a-ulid").is_none());
    }
}
