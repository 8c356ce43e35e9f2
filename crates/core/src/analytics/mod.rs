//! Read-path analytics over the full set of interviews.
//!
//! Everything here is a pure function of a snapshot; nothing is cached.

mod overview;
mod questions;
mod variables;

pub use overview::{DashboardOverview, overview};
pub use questions::{QuestionResponse, QuestionSummary, extract_questions};
pub use variables::{CategoryBreakdown, VariableQuery, VariableSummary, aggregate_variables};

use serde::Serialize;

use crate::Interview;

/// Everything the dashboard shows, computed from one snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub overview: DashboardOverview,
    pub questions: Vec<QuestionSummary>,
    pub variables: VariableSummary,
}

/// Builds the dashboard for `interviews` using the default variable query.
#[must_use]
pub fn build_dashboard(interviews: &[Interview]) -> Dashboard {
    Dashboard {
        overview: overview(interviews),
        questions: extract_questions(interviews.iter().map(|i| i.transcript.as_slice())),
        variables: aggregate_variables(
            interviews.iter().map(|i| i.extracted_variables.as_ref()),
            &VariableQuery::default(),
        ),
    }
}
