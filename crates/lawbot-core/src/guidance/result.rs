//! Normalized guidance view model.

use super::links::LawyerSearchLinks;
use super::resource::resolve_resource_url;
use super::response::GuidanceResponse;
use crate::error::{LawbotError, Result};
use serde::Serialize;

/// Guidance for one submission, ready to render.
///
/// `response` is always present; every other section is rendered only when
/// its field is `Some`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuidanceResult {
    /// Narrative legal guidance.
    pub response: String,
    pub lawyer_suggestions: Option<String>,
    /// Names of the retrieved reference cases.
    pub retrieved_cases: Option<Vec<String>>,
    pub search_key: Option<String>,
    /// Absolute URL of the spoken summary.
    pub audio_url: Option<String>,
    /// Absolute URL of the downloadable report.
    pub pdf_url: Option<String>,
    /// Location hint the query was sent with, used for lawyer links.
    pub location: String,
}

impl GuidanceResult {
    /// Whether anything besides the narrative should be rendered.
    pub fn has_optional_sections(&self) -> bool {
        self.lawyer_suggestions.is_some()
            || self.retrieved_cases.is_some()
            || self.search_key.is_some()
            || self.audio_url.is_some()
            || self.pdf_url.is_some()
    }

    /// Web search and maps links for finding a lawyer, when a search key exists.
    pub fn lawyer_links(&self) -> Option<LawyerSearchLinks> {
        self.search_key
            .as_deref()
            .and_then(|key| LawyerSearchLinks::build(key, &self.location))
    }
}

/// Normalizes either endpoint's response into a [`GuidanceResult`].
///
/// Absent, `null` and blank fields all become `None`. A response without a
/// narrative is not renderable and is reported as a rejection carrying the
/// backend's `error` field, if any.
pub fn normalize_response(
    raw: GuidanceResponse,
    base_origin: &str,
    location: &str,
) -> Result<GuidanceResult> {
    let Some(response) = non_blank(raw.response) else {
        return Err(LawbotError::rejected(200, non_blank(raw.error)));
    };

    let retrieved_cases = raw
        .retrieved_cases
        .map(|cases| {
            cases
                .into_iter()
                .flatten()
                .map(|case| case.trim().to_string())
                .filter(|case| !case.is_empty())
                .collect::<Vec<_>>()
        })
        .filter(|cases| !cases.is_empty());

    Ok(GuidanceResult {
        response,
        lawyer_suggestions: non_blank(raw.lawyer_suggestions),
        retrieved_cases,
        search_key: non_blank(raw.search_key),
        audio_url: raw
            .audio_url
            .as_deref()
            .and_then(|url| resolve_resource_url(base_origin, url)),
        pdf_url: raw
            .pdf_url
            .as_deref()
            .and_then(|url| resolve_resource_url(base_origin, url)),
        location: location.to_string(),
    })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://localhost:5000";

    fn parse(json: &str) -> GuidanceResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_narrative_only() {
        let result =
            normalize_response(parse(r#"{"response": "Send a legal notice."}"#), BASE, "Goa")
                .unwrap();

        assert_eq!(result.response, "Send a legal notice.");
        assert!(!result.has_optional_sections());
        assert!(result.lawyer_links().is_none());
    }

    #[test]
    fn test_full_upload_response() {
        let raw = parse(
            r#"{
                "response": "The clause is unenforceable.",
                "lawyer_suggestions": "Contract lawyers in Pune",
                "search_key": "contract lawyer",
                "pdf_url": "/static/pdfs/report.pdf",
                "audio_url": "/static/audio/a1.mp3"
            }"#,
        );
        let result = normalize_response(raw, BASE, "Maharashtra").unwrap();

        assert_eq!(
            result.pdf_url.as_deref(),
            Some("http://localhost:5000/static/pdfs/report.pdf")
        );
        assert_eq!(
            result.audio_url.as_deref(),
            Some("http://localhost:5000/static/audio/a1.mp3")
        );
        assert!(result.retrieved_cases.is_none());
        assert_eq!(
            result.lawyer_links().unwrap().query,
            "contract lawyer in Maharashtra"
        );
    }

    #[test]
    fn test_absolute_urls_are_not_prefixed_again() {
        let raw = parse(
            r#"{"response": "ok", "pdf_url": "http://localhost:5000/static/out.pdf"}"#,
        );
        let result = normalize_response(raw, BASE, "India").unwrap();
        assert_eq!(
            result.pdf_url.as_deref(),
            Some("http://localhost:5000/static/out.pdf")
        );
    }

    #[test]
    fn test_cases_are_cleaned() {
        let raw = parse(r#"{"response": "ok", "retrieved_cases": [null, " ", "K v. State"]}"#);
        let result = normalize_response(raw, BASE, "India").unwrap();
        assert_eq!(result.retrieved_cases, Some(vec!["K v. State".to_string()]));

        let raw = parse(r#"{"response": "ok", "retrieved_cases": [null]}"#);
        let result = normalize_response(raw, BASE, "India").unwrap();
        assert!(result.retrieved_cases.is_none());
    }

    #[test]
    fn test_blank_optional_fields_are_absent() {
        let raw = parse(
            r#"{"response": "ok", "lawyer_suggestions": "", "search_key": " ", "audio_url": ""}"#,
        );
        let result = normalize_response(raw, BASE, "India").unwrap();
        assert!(!result.has_optional_sections());
    }

    #[test]
    fn test_missing_narrative_is_not_renderable() {
        let err = normalize_response(parse(r#"{"error": "Question is required"}"#), BASE, "India")
            .unwrap_err();
        assert_eq!(
            err,
            LawbotError::rejected(200, Some("Question is required".into()))
        );

        let err = normalize_response(parse(r#"{"response": "  "}"#), BASE, "India").unwrap_err();
        assert_eq!(err, LawbotError::rejected(200, None));
    }
}
