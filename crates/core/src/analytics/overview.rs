use serde::Serialize;

use crate::Interview;

/// Headline numbers for the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardOverview {
    pub total_interviews: usize,
    /// Mean call length, rounded to whole seconds.
    pub average_duration_secs: u64,
    /// Share of interviews with status `completed`, rounded percent.
    pub completion_rate: u32,
}

#[must_use]
pub fn overview(interviews: &[Interview]) -> DashboardOverview {
    let total = interviews.len();
    if total == 0 {
        return DashboardOverview::default();
    }
    let total_ms: u128 = interviews.iter().map(|i| u128::from(i.duration)).sum();
    let completed = interviews.iter().filter(|i| i.completion_status.is_completed()).count();

    let divisor = (total as u128) * 1000;
    let average_duration_secs = (total_ms + divisor / 2) / divisor;
    let completion_rate = (completed * 100 + total / 2) / total;

    DashboardOverview {
        total_interviews: total,
        average_duration_secs: u64::try_from(average_duration_secs).unwrap_or(u64::MAX),
        completion_rate: u32::try_from(completion_rate).unwrap_or(100),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CompletionStatus, InterviewUpdate};
    use chrono::Utc;

    fn interview(call_id: &str, duration: u64, status: &str) -> Interview {
        Interview::from_update(
            format!("id-{call_id}"),
            call_id.to_owned(),
            None,
            InterviewUpdate {
                transcript: Vec::new(),
                duration,
                completion_status: CompletionStatus::from(status),
                extracted_variables: None,
            },
            Utc::now(),
        )
    }

    #[test]
    fn test_empty_overview_is_zero() {
        assert_eq!(overview(&[]), DashboardOverview::default());
    }

    #[test]
    fn test_overview_rounds_duration_and_rate() {
        let interviews = [
            interview("a", 61_000, "completed"),
            interview("b", 30_000, "user_hangup"),
            interview("c", 0, "ended"),
        ];
        let result = overview(&interviews);
        assert_eq!(result.total_interviews, 3);
        // 91s / 3 = 30.33s
        assert_eq!(result.average_duration_secs, 30);
        // 1 of 3 = 33.3%
        assert_eq!(result.completion_rate, 33);
    }

    #[test]
    fn test_overview_rounds_half_up() {
        let interviews = [interview("a", 1_500, "completed"), interview("b", 1_500, "ended")];
        let result = overview(&interviews);
        assert_eq!(result.average_duration_secs, 2);
        assert_eq!(result.completion_rate, 50);
    }
}
