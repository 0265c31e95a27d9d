use std::time::Duration;

use tracing::debug;

use crate::settings::ServiceSettings;

/// A word-level phonetic transliteration backend.
///
/// Implementations return zero or more candidate renderings of `text` in the
/// script of `language`. An empty list is a miss, not an error; transport and
/// protocol failures are reported as [`ServiceError`] and are not retried.
pub trait PhoneticService: Send + Sync {
    fn candidates(&self, text: &str, language: &str) -> Result<Vec<String>, ServiceError>;
}

impl<F> PhoneticService for F
where
    F: Fn(&str, &str) -> Result<Vec<String>, ServiceError> + Send + Sync,
{
    fn candidates(&self, text: &str, language: &str) -> Result<Vec<String>, ServiceError> {
        self(text, language)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("HTTP error: {0}")]
    Http(String),
    #[error("malformed response: {0}")]
    Protocol(String),
    #[error("request rejected with status {0}")]
    Rejected(String),
}

/// Service that never has a candidate, forcing the table fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineService;

impl PhoneticService for OfflineService {
    fn candidates(&self, _text: &str, _language: &str) -> Result<Vec<String>, ServiceError> {
        Ok(Vec::new())
    }
}

/// Client for the Google Input Tools transliteration endpoint.
///
/// Each lookup is a single GET bounded by the configured global timeout.
pub struct InputToolsClient {
    agent: ureq::Agent,
    endpoint: String,
    max_suggestions: usize,
}

impl InputToolsClient {
    pub fn new(endpoint: impl Into<String>, max_suggestions: usize, timeout: Duration) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .build()
            .into();
        Self {
            agent,
            endpoint: endpoint.into(),
            max_suggestions,
        }
    }

    pub fn from_settings(s: &ServiceSettings) -> Self {
        Self::new(
            s.endpoint.clone(),
            s.max_suggestions,
            Duration::from_millis(s.timeout_ms),
        )
    }
}

impl PhoneticService for InputToolsClient {
    fn candidates(&self, text: &str, language: &str) -> Result<Vec<String>, ServiceError> {
        let body = self
            .agent
            .get(&self.endpoint)
            .query("text", text)
            .query("itc", format!("{language}-t-i0-und"))
            .query("num", self.max_suggestions.to_string())
            .query("cp", "0")
            .query("cs", "1")
            .query("ie", "utf-8")
            .query("oe", "utf-8")
            .query("app", "demopage")
            .call()
            .map_err(|e| ServiceError::Http(format!("{}: {e}", self.endpoint)))?
            .into_body()
            .read_to_string()
            .map_err(|e| ServiceError::Http(format!("{}: {e}", self.endpoint)))?;
        let candidates = parse_response(&body)?;
        debug!(candidate_count = candidates.len(), "input tools response");
        Ok(candidates)
    }
}

/// Parse an Input Tools response of the form
/// `["SUCCESS", [[input, [candidate, ...], ...]]]`.
fn parse_response(json: &str) -> Result<Vec<String>, ServiceError> {
    let value: serde_json::Value = serde_json::from_str(json)
        .map_err(|e| ServiceError::Protocol(format!("response JSON: {e}")))?;

    let Some(status) = value[0].as_str() else {
        return Err(ServiceError::Protocol("missing status".to_string()));
    };
    if status != "SUCCESS" {
        return Err(ServiceError::Rejected(status.to_string()));
    }

    let Some(results) = value[1].as_array() else {
        return Err(ServiceError::Protocol("missing result list".to_string()));
    };
    let Some(first) = results.first() else {
        return Ok(Vec::new());
    };
    let Some(candidates) = first[1].as_array() else {
        return Err(ServiceError::Protocol("missing candidate list".to_string()));
    };
    Ok(candidates
        .iter()
        .filter_map(|c| c.as_str())
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_success() {
        let json = r#"["SUCCESS",[["selam",["ሰላም","ሴላም"],[],{"candidate_type":[0,0]}]]]"#;
        assert_eq!(parse_response(json).unwrap(), vec!["ሰላም", "ሴላም"]);
    }

    #[test]
    fn parse_success_without_candidates() {
        let json = r#"["SUCCESS",[["xyz",[],[],{}]]]"#;
        assert!(parse_response(json).unwrap().is_empty());
        assert!(parse_response(r#"["SUCCESS",[]]"#).unwrap().is_empty());
    }

    #[test]
    fn parse_rejected_status() {
        let err = parse_response(r#"["FAILED_TO_PROCESS",[]]"#).unwrap_err();
        assert!(matches!(err, ServiceError::Rejected(ref s) if s == "FAILED_TO_PROCESS"));
    }

    #[test]
    fn parse_malformed() {
        assert!(matches!(
            parse_response("<html>").unwrap_err(),
            ServiceError::Protocol(_)
        ));
        assert!(matches!(
            parse_response(r#"{"status":"SUCCESS"}"#).unwrap_err(),
            ServiceError::Protocol(_)
        ));
        assert!(matches!(
            parse_response(r#"["SUCCESS",[["a"]]]"#).unwrap_err(),
            ServiceError::Protocol(_)
        ));
    }

    #[test]
    fn offline_has_no_candidates() {
        assert!(OfflineService.candidates("echo", "am").unwrap().is_empty());
    }

    #[test]
    fn closure_as_service() {
        let svc = |text: &str, lang: &str| Ok::<_, ServiceError>(vec![format!("{lang}:{text}")]);
        assert_eq!(svc.candidates("hi", "am").unwrap(), vec!["am:hi"]);
    }
}
