use std::sync::Arc;

use anyhow::Result;
use interview_ingest_service::AnalyticsService;
use interview_ingest_storage::InterviewStore;

use crate::connect_postgres;

pub(crate) async fn run_interviews() -> Result<()> {
    let storage = connect_postgres().await?;
    let interviews = storage.get_all_interviews().await?;
    println!("{}", serde_json::to_string_pretty(&interviews)?);
    Ok(())
}

pub(crate) async fn run_interview(call_id: &str) -> Result<()> {
    let storage = connect_postgres().await?;
    match storage.get_interview_by_call_id(call_id).await? {
        Some(interview) => println!("{}", serde_json::to_string_pretty(&interview)?),
        None => anyhow::bail!("Interview not found: {call_id}"),
    }
    Ok(())
}

pub(crate) async fn run_dashboard() -> Result<()> {
    let analytics = AnalyticsService::new(Arc::new(connect_postgres().await?));
    let dashboard = analytics.dashboard().await?;
    println!("{}", serde_json::to_string_pretty(&dashboard)?);
    Ok(())
}
