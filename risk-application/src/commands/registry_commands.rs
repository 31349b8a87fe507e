use std::sync::Arc;

use tracing::{error, info};

use crate::{AppError, AppState};
use risk_domain::{RegistryKind, RegistryPayload, RegistryUpdateQuery, RiskRegistry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UpdateMode {
    Replace,
    Append,
}

fn parse_mode(mode: Option<&str>) -> Result<UpdateMode, AppError> {
    match mode.map(|m| m.trim().to_lowercase()).as_deref() {
        None | Some("") | Some("replace") => Ok(UpdateMode::Replace),
        Some("append") => Ok(UpdateMode::Append),
        Some(other) => Err(AppError::BadRequest(format!(
            "invalid mode '{}', expected replace or append",
            other
        ))),
    }
}

/// Persists the new registry first and only then swaps it in, so a failed
/// write leaves the running registries untouched.
pub async fn update_registry(
    state: &AppState,
    kind: RegistryKind,
    query: RegistryUpdateQuery,
    payload: RegistryPayload,
) -> Result<(), AppError> {
    let mode = parse_mode(query.mode.as_deref())?;
    let incoming = RiskRegistry::new(payload.known, payload.high_risk)?;

    let mut guard = state.registries.write().await;
    let mut next = guard.as_ref().clone();
    match mode {
        UpdateMode::Replace => *next.get_mut(kind) = incoming,
        UpdateMode::Append => next.get_mut(kind).merge(incoming),
    }

    state
        .registry_repo
        .save_registries(&state.config.registry_path, &next)
        .await
        .map_err(|err| {
            error!("failed to save registries: {}", err);
            AppError::Internal(err)
        })?;

    info!("{} registry updated: {} entries", kind, next.get(kind).len());
    *guard = Arc::new(next);
    state.metrics.record_registry_update();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_defaults_to_replace() {
        assert_eq!(parse_mode(None).expect("mode"), UpdateMode::Replace);
        assert_eq!(parse_mode(Some(" Append ")).expect("mode"), UpdateMode::Append);
        assert!(matches!(parse_mode(Some("merge")), Err(AppError::BadRequest(_))));
    }
}
