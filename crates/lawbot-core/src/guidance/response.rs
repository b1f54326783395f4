//! Raw response of the query endpoints.

use serde::Deserialize;

/// Body returned by both `/api/query` and `/api/upload_and_analyze`.
///
/// Which fields appear depends on the endpoint and on what the backend
/// managed to produce, so every field is optional and `null` equals absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GuidanceResponse {
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub lawyer_suggestions: Option<String>,
    #[serde(default)]
    pub retrieved_cases: Option<Vec<Option<String>>>,
    #[serde(default)]
    pub search_key: Option<String>,
    #[serde(default)]
    pub pdf_url: Option<String>,
    #[serde(default)]
    pub audio_url: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_shape() {
        let json = r#"{
            "response": "You may file a complaint.",
            "lawyer_suggestions": "Labour lawyers in Chennai",
            "search_key": "labour lawyer",
            "pdf_url": "/static/pdfs/report_1.pdf",
            "retrieved_cases": ["State v. Rao", null],
            "audio_url": null
        }"#;
        let raw: GuidanceResponse = serde_json::from_str(json).unwrap();
        assert_eq!(raw.response.as_deref(), Some("You may file a complaint."));
        assert_eq!(
            raw.retrieved_cases,
            Some(vec![Some("State v. Rao".to_string()), None])
        );
        assert!(raw.audio_url.is_none());
    }

    #[test]
    fn test_unknown_fields_and_empty_object() {
        let raw: GuidanceResponse =
            serde_json::from_str(r#"{"analysis_id": 12, "extra": {"a": 1}}"#).unwrap();
        assert_eq!(raw, GuidanceResponse::default());
    }
}
