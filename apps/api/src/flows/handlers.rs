//! Axum route handlers for the generation flows.

use axum::{
    extract::{
        multipart::MultipartRejection,
        rejection::JsonRejection,
        Multipart, Path, State,
    },
    http::StatusCode,
    Json,
};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::flows::resume_analysis::{ResumeAnalysis, ResumeAnalysisRequest, ResumeAnalysisResponse};
use crate::flows::{catalog, generate_by_name, run, FlowDescriptor, FlowName};
use crate::gateway::data_uri::{DataUri, PDF_MEDIA_TYPE};
use crate::state::AppState;

/// Multipart field carrying the resume file.
const RESUME_FIELD: &str = "resume";
const PDF_MAGIC: &[u8] = b"%PDF-";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeUploadResponse {
    pub file_name: Option<String>,
    #[serde(flatten)]
    pub analysis: ResumeAnalysisResponse,
}

/// GET /api/v1/flows
///
/// Lists every flow with its declared output shape.
pub async fn handle_list_flows() -> Json<Vec<FlowDescriptor>> {
    Json(catalog())
}

/// POST /api/v1/flows/:flow
///
/// Generic `generate(flowName, requestPayload)`: the body is the flow's request
/// payload, the response is the flow's declared output shape.
pub async fn handle_generate(
    State(state): State<AppState>,
    Path(flow): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let name: FlowName = flow.parse()?;
    let Json(payload) = payload?;
    let response = generate_by_name(&state.gateway, name, payload).await?;
    Ok(Json(response))
}

/// POST /api/v1/resumes/analyze
///
/// Accepts a PDF upload in the `resume` multipart field, builds the data URI the
/// resume-analysis flow expects, and runs it.
pub async fn handle_analyze_resume_upload(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ResumeUploadResponse>, AppError> {
    let mut multipart =
        multipart.map_err(|e| AppError::Validation(format!("Malformed upload: {}", e.body_text())))?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| match e.status() {
            StatusCode::PAYLOAD_TOO_LARGE => AppError::PayloadTooLarge(e.body_text()),
            _ => AppError::Validation(format!("Malformed upload: {e}")),
        })?
    {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }

        let file_name = field.file_name().map(str::to_owned);
        let media_type = field
            .content_type()
            .unwrap_or(PDF_MEDIA_TYPE)
            .to_owned();
        let bytes = field.bytes().await.map_err(|e| match e.status() {
            StatusCode::PAYLOAD_TOO_LARGE => AppError::PayloadTooLarge(e.body_text()),
            _ => AppError::Validation(format!("Failed to read upload: {e}")),
        })?;

        if bytes.len() > state.config.max_upload_bytes {
            return Err(AppError::PayloadTooLarge(format!(
                "Resume exceeds {} bytes",
                state.config.max_upload_bytes
            )));
        }

        if !bytes.starts_with(PDF_MAGIC) {
            return Err(AppError::Validation(
                "Uploaded resume is not a PDF file".to_string(),
            ));
        }

        let uri = DataUri::from_bytes(&media_type, &bytes)
            .map_err(|e| AppError::Validation(e.to_string()))?;

        info!(
            "Resume upload received: {} bytes ({:?})",
            bytes.len(),
            file_name
        );

        let request = ResumeAnalysisRequest {
            resume_data_uri: uri.to_string(),
        };
        let analysis = run::<ResumeAnalysis>(&state.gateway, &request).await?;

        return Ok(Json(ResumeUploadResponse {
            file_name,
            analysis,
        }));
    }

    Err(AppError::Validation(format!(
        "Multipart field '{RESUME_FIELD}' is required"
    )))
}
