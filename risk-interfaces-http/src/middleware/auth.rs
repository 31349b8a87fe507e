use std::io::Read;

use anyhow::{bail, Result};
use axum::http::HeaderMap;
use flate2::read::GzDecoder;
use serde::de::DeserializeOwned;

use risk_domain::RuntimeConfig;

pub fn authorize(config: &RuntimeConfig, headers: &HeaderMap) -> bool {
    if let Some(api_token) = &config.api_token {
        return extract_bearer(headers)
            .map(|v| v == *api_token)
            .unwrap_or(false);
    }
    true
}

/// Decodes a JSON request body, gunzipping it first when `Content-Encoding: gzip` is set.
/// The inflated body is held to the same `limit` as the wire body.
pub fn parse_json<T: DeserializeOwned>(headers: &HeaderMap, body: &[u8], limit: usize) -> Result<T> {
    let content = maybe_gunzip(headers, body, limit)?;
    Ok(serde_json::from_str(&content)?)
}

fn maybe_gunzip(headers: &HeaderMap, body: &[u8], limit: usize) -> Result<String> {
    if let Some(encoding) = headers.get("Content-Encoding") {
        if encoding.to_str().unwrap_or("").trim().eq_ignore_ascii_case("gzip") {
            let cap = u64::try_from(limit).unwrap_or(u64::MAX).saturating_add(1);
            let mut decoder = GzDecoder::new(body).take(cap);
            let mut out = Vec::new();
            decoder.read_to_end(&mut out)?;
            if out.len() > limit {
                bail!("body exceeds {} bytes after decompression", limit);
            }
            return Ok(String::from_utf8(out)?);
        }
    }
    Ok(String::from_utf8(body.to_vec())?)
}

/// Body limit from config, as a buffer size.
pub fn body_limit(config: &RuntimeConfig) -> usize {
    usize::try_from(config.max_body_bytes).unwrap_or(usize::MAX)
}

fn extract_bearer(headers: &HeaderMap) -> Option<String> {
    let value = headers.get("Authorization")?.to_str().ok()?.trim();
    let token = value.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        return None;
    }
    Some(token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    #[test]
    fn bearer_token_must_match() {
        let config = RuntimeConfig {
            api_token: Some("secret".to_string()),
            ..RuntimeConfig::default()
        };
        let mut headers = HeaderMap::new();
        assert!(!authorize(&config, &headers));
        headers.insert("Authorization", HeaderValue::from_static("Bearer nope"));
        assert!(!authorize(&config, &headers));
        headers.insert("Authorization", HeaderValue::from_static("Bearer secret"));
        assert!(authorize(&config, &headers));
        assert!(authorize(&RuntimeConfig::default(), &HeaderMap::new()));
    }

    #[test]
    fn gzip_bodies_are_inflated() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(br#"{"value": 7}"#).expect("write");
        let body = encoder.finish().expect("finish");

        let mut headers = HeaderMap::new();
        headers.insert("Content-Encoding", HeaderValue::from_static("gzip"));
        let parsed: serde_json::Value = parse_json(&headers, &body, 64).expect("json");
        assert_eq!(parsed["value"], 7);
    }

    #[test]
    fn gzip_bodies_are_capped_after_inflation() {
        let payload = format!(r#"{{"padding": "{}"}}"#, "a".repeat(10_000));
        let mut encoder = GzEncoder::new(Vec::new(), Compression::best());
        encoder.write_all(payload.as_bytes()).expect("write");
        let body = encoder.finish().expect("finish");
        assert!(body.len() < 1_024);

        let mut headers = HeaderMap::new();
        headers.insert("Content-Encoding", HeaderValue::from_static("gzip"));
        let err = parse_json::<serde_json::Value>(&headers, &body, 1_024).expect_err("too large");
        assert!(err.to_string().contains("after decompression"));

        let exact: serde_json::Value =
            parse_json(&headers, &body, payload.len()).expect("fits exactly");
        assert!(exact["padding"].is_string());
    }
}
