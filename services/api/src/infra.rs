use chrono::{DateTime, Utc};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_instant(raw: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(raw.trim())
        .map(|instant| instant.with_timezone(&Utc))
        .map_err(|err| format!("failed to parse '{raw}' as an RFC 3339 timestamp ({err})"))
}

/// Resolves the reference instant, falling back to the wall clock.
pub(crate) fn reference_millis(now: Option<DateTime<Utc>>) -> i64 {
    now.unwrap_or_else(Utc::now).timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rfc3339_with_offset() {
        let instant = parse_instant("2024-11-15T00:13:20+02:00").expect("valid timestamp");
        assert_eq!(instant.timestamp_millis(), 1_731_622_400_000);
    }

    #[test]
    fn rejects_plain_dates() {
        let err = parse_instant("2024-11-14").expect_err("date only rejected");
        assert!(err.contains("RFC 3339"));
    }

    #[test]
    fn explicit_reference_instant_wins() {
        let instant = parse_instant("2024-11-14T22:13:20Z").expect("valid timestamp");
        assert_eq!(reference_millis(Some(instant)), 1_731_622_400_000);
    }
}
