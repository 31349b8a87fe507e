use risk_bootstrap::{score_file, AppContext};
use risk_infrastructure::AppConfig;
use serde_json::Value;

async fn context_in(dir: &std::path::Path) -> AppContext {
    std::fs::write(
        dir.join("registries.yaml"),
        "merchants:\n  known: [Java House]\n  high_risk: [Suspicious Entity]\nlocations:\n  known: [Nairobi]\n  high_risk: [Offshore]\n",
    )
    .expect("registries");
    std::fs::write(dir.join("config.toml"), "registry_path = \"registries.yaml\"\n")
        .expect("config");
    let config = AppConfig::load_from(dir.join("config.toml"))
        .await
        .expect("config");
    AppContext::new(&config).await.expect("context")
}

#[tokio::test]
async fn context_loads_registries_next_to_config() {
    let dir = tempfile::tempdir().expect("tempdir");
    let context = context_in(dir.path()).await;
    let registries = context.state.registries_snapshot().await;
    assert_eq!(registries.merchants.len(), 2);
    assert_eq!(registries.locations.len(), 2);
}

#[tokio::test]
async fn broken_registry_file_fails_startup() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("registries.yaml"), "merchants: [oops").expect("write");
    let config = AppConfig {
        registry_path: dir.path().join("registries.yaml").to_string_lossy().to_string(),
        ..AppConfig::default()
    };
    assert!(AppContext::new(&config).await.is_err());
}

#[tokio::test]
async fn score_file_writes_one_line_per_transaction_and_isolates_bad_items() {
    let dir = tempfile::tempdir().expect("tempdir");
    let context = context_in(dir.path()).await;
    let input = dir.path().join("transactions.json");
    std::fs::write(
        &input,
        r#"[
            {"transaction_id": "T1", "amount": 15000000, "merchant_name": "Suspicious Entity",
             "location": "Offshore", "channel": "online", "timestamp": "2024-05-10T03:00:00Z"},
            {"transaction_id": "T2", "amount": "oops"},
            {"transaction_id": "T3", "amount": 250, "merchant_name": "Java House",
             "location": "Nairobi", "timestamp": "2024-05-10T12:00:00Z"},
            {"transaction_id": "T4", "amount": 250, "location": ["Nairobi"]}
        ]"#,
    )
    .expect("input");

    let mut out = Vec::new();
    let rejected = score_file(&context.state, &input, &mut out)
        .await
        .expect("scored");
    assert_eq!(rejected, 2);

    let lines: Vec<Value> = String::from_utf8(out)
        .expect("utf8")
        .lines()
        .map(|line| serde_json::from_str(line).expect("json line"))
        .collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0]["result"]["assessment"]["risk_level"], "HIGH");
    assert_eq!(lines[0]["result"]["assessment"]["score"], 1.0);
    assert!(lines[1]["error"].is_string());
    assert_eq!(lines[2]["result"]["routing"]["status"], "APPROVED");
    assert_eq!(lines[3]["transaction_id"], "T4");
    assert!(lines[3]["error"]
        .as_str()
        .unwrap_or_default()
        .contains("location"));
}

#[tokio::test]
async fn score_file_rejects_non_array_input() {
    let dir = tempfile::tempdir().expect("tempdir");
    let context = context_in(dir.path()).await;
    let input = dir.path().join("transactions.json");
    std::fs::write(&input, r#"{"transaction_id": "T1"}"#).expect("input");
    let mut out = Vec::new();
    assert!(score_file(&context.state, &input, &mut out).await.is_err());
}
