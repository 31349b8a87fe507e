use std::io::Write;
use std::path::Path;

use anyhow::{anyhow, Result};
use serde_json::Value;
use tokio::fs;
use tracing::info;

use risk_application::commands::score_commands::score_all;
use risk_application::AppState;

/// Scores a JSON array of requests and writes one JSON result per line.
/// A malformed item is reported on its own line; returns the number rejected.
pub async fn score_file<W: Write>(state: &AppState, input: &Path, out: &mut W) -> Result<usize> {
    let content = fs::read_to_string(input)
        .await
        .map_err(|err| anyhow!("failed to read {}: {}", input.display(), err))?;
    let requests: Vec<Value> = serde_json::from_str(&content)
        .map_err(|err| anyhow!("{} is not a JSON array of transactions: {}", input.display(), err))?;

    let registries = state.registries_snapshot().await;
    let scorer = state.scorer;
    let results =
        tokio::task::spawn_blocking(move || score_all(&scorer, &registries, requests)).await?;

    let mut rejected = 0;
    for item in &results {
        match &item.result {
            Some(response) => state.metrics.record_assessment(response.assessment.risk_level),
            None => {
                rejected += 1;
                state.metrics.record_invalid_input();
            }
        }
        serde_json::to_writer(&mut *out, item)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    info!(
        "scored {} transactions from {}, {} rejected",
        results.len() - rejected,
        input.display(),
        rejected
    );
    Ok(rejected)
}
