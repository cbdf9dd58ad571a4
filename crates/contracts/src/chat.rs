//! DTOs for the two chat endpoints: `POST /upload` and `POST /query`.

use serde::{Deserialize, Serialize};

/// Opaque identifier issued by the backend on a successful upload.
///
/// Correlates a document's processed state with subsequent queries. The
/// frontend never inspects it, only echoes it back.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub String);

impl SessionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Success body of `POST /upload` (multipart form, field `file`).
///
/// The backend also echoes the uploaded filename; the frontend keeps its own
/// copy from the file picker, so the field is optional here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub session_id: SessionId,
    #[serde(default)]
    pub filename: Option<String>,
    pub summary: String,
}

/// Request body of `POST /query`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest {
    pub session_id: SessionId,
    pub query: String,
}

/// Success body of `POST /query`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResponse {
    pub answer: String,
}

/// Error body both endpoints return with a non-2xx status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_response_parses_backend_shape() {
        let body = r#"{"session_id":"s1","filename":"doc.pdf","summary":"A short summary"}"#;
        let resp: UploadResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.session_id.as_str(), "s1");
        assert_eq!(resp.filename.as_deref(), Some("doc.pdf"));
        assert_eq!(resp.summary, "A short summary");
    }

    #[test]
    fn upload_response_tolerates_missing_filename() {
        let body = r#"{"session_id":"s1","summary":"A short summary"}"#;
        let resp: UploadResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.filename, None);
    }

    #[test]
    fn query_request_serializes_flat_session_id() {
        let req = QueryRequest {
            session_id: SessionId("s1".to_string()),
            query: "What is the total?".to_string(),
        };
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, r#"{"session_id":"s1","query":"What is the total?"}"#);
    }

    #[test]
    fn query_response_parses() {
        let resp: QueryResponse = serde_json::from_str(r#"{"answer":"$42"}"#).unwrap();
        assert_eq!(resp.answer, "$42");
    }

    #[test]
    fn api_error_parses_detail() {
        let err: ApiError = serde_json::from_str(r#"{"detail":"unsupported file"}"#).unwrap();
        assert_eq!(err.detail, "unsupported file");
    }
}
