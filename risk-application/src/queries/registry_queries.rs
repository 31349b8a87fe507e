use crate::{AppError, AppState};
use risk_domain::{normalize_name, RegistryEntry, RegistryKind, RegistryQuery, Reputation};

/// High-risk names come first. A name on both lists is reported once, as high-risk.
pub async fn list_registry(
    state: &AppState,
    kind: RegistryKind,
    query: RegistryQuery,
) -> Result<Vec<RegistryEntry>, AppError> {
    let limit = query.limit.unwrap_or(100).clamp(1, 500);
    let query_text = normalize_name(&query.query.unwrap_or_default());
    let registries = state.registries_snapshot().await;
    let registry = registries.get(kind);

    let entries = registry
        .high_risk()
        .map(|name| (name, Reputation::HighRisk))
        .chain(
            registry
                .known()
                .filter(|name| registry.reputation(name) != Reputation::HighRisk)
                .map(|name| (name, Reputation::Known)),
        )
        .filter(|(name, _)| query_text.is_empty() || name.contains(&query_text))
        .take(limit)
        .map(|(name, reputation)| RegistryEntry {
            name: name.to_string(),
            reputation,
        })
        .collect();
    Ok(entries)
}
