//! Talent matching: how well a candidate profile fits a company's requirements.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::flows::prompts::{TALENT_MATCHING_PROMPT, TALENT_MATCHING_SYSTEM};
use crate::gateway::{render_template, Flow};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TalentMatchingRequest {
    /// Skills, experience, and career goals.
    pub user_profile: String,
    /// Required skills, experience, and company culture.
    pub company_requirements: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TalentMatchingResponse {
    pub match_summary: String,
    pub job_recommendations: Vec<String>,
}

pub struct TalentMatching;

impl Flow for TalentMatching {
    const NAME: &'static str = "talent-matching";
    const DESCRIPTION: &'static str =
        "Summarizes how well a candidate matches company requirements and recommends jobs.";
    const SYSTEM: &'static str = TALENT_MATCHING_SYSTEM;

    type Request = TalentMatchingRequest;
    type Response = TalentMatchingResponse;

    fn render(request: &TalentMatchingRequest) -> String {
        render_template(
            TALENT_MATCHING_PROMPT,
            &[
                ("userProfile", request.user_profile.as_str()),
                ("companyRequirements", request.company_requirements.as_str()),
            ],
        )
    }

    fn output_shape() -> Value {
        json!({
            "matchSummary": "string: a summary of how well the candidate matches the company requirements",
            "jobRecommendations": [
                "string: a job recommendation based on the user profile and company requirements"
            ]
        })
    }

    fn required_fields(request: &TalentMatchingRequest) -> Vec<(&'static str, &str)> {
        vec![
            ("userProfile", request.user_profile.as_str()),
            ("companyRequirements", request.company_requirements.as_str()),
        ]
    }
}
