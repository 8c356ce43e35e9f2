//! Field derivations that never fail: missing data yields a default.

use crate::CompletionStatus;

/// Call duration in milliseconds.
///
/// Both timestamps win over `duration_ms`; with neither the result is `0`.
/// Inputs may be fractional milliseconds; the result is rounded to the
/// nearest whole millisecond. Out-of-order timestamps produce a negative
/// value, which the caller decides how to store.
pub fn resolve_duration(
    start_timestamp: Option<f64>,
    end_timestamp: Option<f64>,
    duration_ms: Option<f64>,
) -> i64 {
    let millis = match (start_timestamp, end_timestamp) {
        (Some(start), Some(end)) => end - start,
        _ => duration_ms.unwrap_or(0.0),
    };
    // Float-to-int `as` saturates at the i64 bounds.
    millis.round() as i64
}

/// `completed` when the analysis says so, else the disconnection reason,
/// else `ended`.
pub fn resolve_completion_status(
    call_successful: Option<bool>,
    disconnection_reason: Option<&str>,
) -> CompletionStatus {
    if call_successful == Some(true) {
        return CompletionStatus::Completed;
    }
    match disconnection_reason.map(str::trim).filter(|r| !r.is_empty()) {
        Some(reason) => CompletionStatus::from(reason),
        None => CompletionStatus::Ended,
    }
}
