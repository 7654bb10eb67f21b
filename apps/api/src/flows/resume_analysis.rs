//! Resume analysis: tailored job recommendations from an attached PDF resume.
//!
//! The resume travels as a `data:application/pdf;base64,...` reference and is
//! handed to the oracle as a document block. Anything that is not a base64 PDF
//! is rejected before the oracle is contacted.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::warn;

use crate::flows::prompts::{RESUME_ANALYSIS_PROMPT, RESUME_ANALYSIS_SYSTEM};
use crate::gateway::data_uri::{DataUri, PDF_MEDIA_TYPE};
use crate::gateway::{render_template, Flow};
use crate::llm_client::Document;

pub const RESUME_RECOMMENDATION_TARGET: usize = 5;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeAnalysisRequest {
    /// Expected format: `data:application/pdf;base64,<encoded_data>`.
    pub resume_data_uri: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeJobRecommendation {
    pub title: String,
    pub company: String,
    pub description: String,
    pub match_reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeAnalysisResponse {
    pub job_recommendations: Vec<ResumeJobRecommendation>,
}

pub struct ResumeAnalysis;

impl Flow for ResumeAnalysis {
    const NAME: &'static str = "resume-analysis";
    const DESCRIPTION: &'static str =
        "Analyzes a PDF resume and recommends jobs in India with a reason for each match.";
    const SYSTEM: &'static str = RESUME_ANALYSIS_SYSTEM;

    type Request = ResumeAnalysisRequest;
    type Response = ResumeAnalysisResponse;

    fn render(_request: &ResumeAnalysisRequest) -> String {
        let target = RESUME_RECOMMENDATION_TARGET.to_string();
        render_template(RESUME_ANALYSIS_PROMPT, &[("targetCount", target.as_str())])
    }

    fn output_shape() -> Value {
        json!({
            "jobRecommendations": [
                {
                    "title": "string: the job title",
                    "company": "string: the name of the hiring company",
                    "description": "string: a brief, compelling description of the job role",
                    "matchReason": "string: a short explanation of why this job is a good match for the user"
                }
            ]
        })
    }

    fn required_fields(request: &ResumeAnalysisRequest) -> Vec<(&'static str, &str)> {
        vec![("resumeDataUri", request.resume_data_uri.as_str())]
    }

    fn attachment(request: &ResumeAnalysisRequest) -> Result<Option<Document>, String> {
        let uri = DataUri::parse(&request.resume_data_uri).map_err(|e| e.to_string())?;
        if !uri.is_pdf() {
            return Err(format!(
                "resume must be a PDF ({PDF_MEDIA_TYPE}), got '{}'",
                uri.media_type()
            ));
        }
        Ok(Some(uri.into_document()))
    }

    fn inspect(response: &ResumeAnalysisResponse) {
        let count = response.job_recommendations.len();
        if count != RESUME_RECOMMENDATION_TARGET {
            warn!(
                "Resume analysis returned {} recommendations (asked for {})",
                count, RESUME_RECOMMENDATION_TARGET
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::gateway::testing::CannedOracle;
    use crate::gateway::{build_instruction, parse_reply, Gateway, GatewayError};

    const PDF_URI: &str = "data:application/pdf;base64,JVBERi0xLjQKJcfs";

    fn request(uri: &str) -> ResumeAnalysisRequest {
        ResumeAnalysisRequest {
            resume_data_uri: uri.to_string(),
        }
    }

    #[test]
    fn test_pdf_is_attached_not_interpolated() {
        let instruction = build_instruction::<ResumeAnalysis>(&request(PDF_URI)).unwrap();

        let document = instruction.document.expect("resume must be attached");
        assert_eq!(document.media_type, "application/pdf");
        assert_eq!(document.data, "JVBERi0xLjQKJcfs");
        assert!(!instruction.prompt.contains("JVBERi0xLjQKJcfs"));
        assert!(instruction.prompt.contains("list of 5 highly relevant job recommendations"));
    }

    #[test]
    fn test_non_pdf_media_type_is_a_precondition_failure() {
        let err = build_instruction::<ResumeAnalysis>(&request("data:image/png;base64,iVBORw0KGgo="))
            .unwrap_err();
        match err {
            GatewayError::Precondition { flow, reason } => {
                assert_eq!(flow, "resume-analysis");
                assert!(reason.contains("image/png"));
            }
            other => panic!("expected precondition failure, got {other:?}"),
        }
    }

    #[test]
    fn test_plain_url_is_a_precondition_failure() {
        let err = build_instruction::<ResumeAnalysis>(&request("https://example.com/cv.pdf"))
            .unwrap_err();
        assert!(matches!(err, GatewayError::Precondition { .. }));
    }

    #[tokio::test]
    async fn test_non_pdf_never_reaches_oracle() {
        let oracle = Arc::new(CannedOracle::replying(r#"{"jobRecommendations": []}"#));
        let gateway = Gateway::new(oracle.clone());

        let result = gateway
            .generate::<ResumeAnalysis>(&request("data:text/plain;base64,aGVsbG8="))
            .await;

        assert!(matches!(result, Err(GatewayError::Precondition { .. })));
        assert_eq!(oracle.calls(), 0);
    }

    #[tokio::test]
    async fn test_oracle_receives_document() {
        let oracle = Arc::new(CannedOracle::replying(r#"{"jobRecommendations": []}"#));
        let gateway = Gateway::new(oracle.clone());

        gateway
            .generate::<ResumeAnalysis>(&request(PDF_URI))
            .await
            .unwrap();

        let sent = oracle.last_instruction().unwrap();
        assert_eq!(sent.document.unwrap().media_type, "application/pdf");
    }

    #[test]
    fn test_parse_full_recommendation() {
        let reply = r#"{"jobRecommendations": [{
            "title": "Senior Data Engineer",
            "company": "Flipkart",
            "description": "Own batch and streaming pipelines.",
            "matchReason": "Five years of Spark and Airflow."
        }]}"#;
        let response = parse_reply::<ResumeAnalysis>(reply).unwrap();
        assert_eq!(response.job_recommendations[0].company, "Flipkart");
        assert_eq!(
            response.job_recommendations[0].match_reason,
            "Five years of Spark and Airflow."
        );
    }

    #[test]
    fn test_recommendation_missing_match_reason_is_rejected() {
        let reply = r#"{"jobRecommendations": [{
            "title": "Senior Data Engineer",
            "company": "Flipkart",
            "description": "Own batch and streaming pipelines."
        }]}"#;
        assert!(parse_reply::<ResumeAnalysis>(reply).is_err());
    }
}
