//! PDF chat - Model (API functions)

use contracts::chat::{ApiError, QueryRequest, QueryResponse, SessionId, UploadResponse};

use crate::shared::api_utils::api_url;

/// Upload a PDF and start a new backend session.
///
/// Multipart form with the single field `file`, matching the backend's
/// `POST /upload` contract.
pub async fn upload_document(file: web_sys::File) -> Result<UploadResponse, String> {
    use wasm_bindgen::JsCast;
    use web_sys::{FormData, Request, RequestInit, RequestMode, Response};

    let form_data = FormData::new().map_err(|e| format!("{e:?}"))?;
    form_data
        .append_with_blob("file", &file)
        .map_err(|e| format!("{e:?}"))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form_data);

    let request =
        Request::new_with_str_and_init(&api_url("/upload"), &opts).map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;

    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    let text: String = text.as_string().ok_or_else(|| "bad text".to_string())?;

    if !resp.ok() {
        return Err(error_detail(resp.status(), &text, "File upload failed"));
    }

    serde_json::from_str::<UploadResponse>(&text).map_err(|e| format!("{e}"))
}

/// Ask a question against an uploaded document's session.
pub async fn submit_query(session_id: &SessionId, query: &str) -> Result<QueryResponse, String> {
    let request = QueryRequest {
        session_id: session_id.clone(),
        query: query.to_string(),
    };

    let response = gloo_net::http::Request::post(&api_url("/query"))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(error_detail(response.status(), &body, "Query failed"));
    }

    response
        .json::<QueryResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Message for a non-2xx response: the backend's `detail` field when the
/// body carries one, otherwise a generic message with the HTTP status.
pub fn error_detail(status: u16, body: &str, fallback: &str) -> String {
    match serde_json::from_str::<ApiError>(body) {
        Ok(err) => err.detail,
        Err(_) => format!("{} (HTTP {})", fallback, status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_detail_prefers_backend_detail() {
        let msg = error_detail(400, r#"{"detail":"unsupported file"}"#, "File upload failed");
        assert_eq!(msg, "unsupported file");
    }

    #[test]
    fn error_detail_falls_back_on_unparseable_body() {
        let msg = error_detail(502, "<html>Bad Gateway</html>", "Query failed");
        assert_eq!(msg, "Query failed (HTTP 502)");
    }

    #[test]
    fn error_detail_falls_back_on_empty_body() {
        let msg = error_detail(500, "", "Query failed");
        assert_eq!(msg, "Query failed (HTTP 500)");
    }
}
