//! Job recommendations from a profile and a self-described roadmap.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::flows::prompts::{JOB_RECOMMENDATIONS_PROMPT, JOB_RECOMMENDATIONS_SYSTEM};
use crate::gateway::{render_template, Flow};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecommendationsRequest {
    pub user_profile: String,
    /// Target roles and desired skills, in the user's words.
    pub career_roadmap: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecommendationsResponse {
    pub job_recommendations: Vec<String>,
}

pub struct JobRecommendations;

impl Flow for JobRecommendations {
    const NAME: &'static str = "job-recommendations";
    const DESCRIPTION: &'static str =
        "Recommends jobs based on a user profile and career roadmap.";
    const SYSTEM: &'static str = JOB_RECOMMENDATIONS_SYSTEM;

    type Request = JobRecommendationsRequest;
    type Response = JobRecommendationsResponse;

    fn render(request: &JobRecommendationsRequest) -> String {
        render_template(
            JOB_RECOMMENDATIONS_PROMPT,
            &[
                ("userProfile", request.user_profile.as_str()),
                ("careerRoadmap", request.career_roadmap.as_str()),
            ],
        )
    }

    fn output_shape() -> Value {
        json!({
            "jobRecommendations": [
                "string: a job recommendation based on the user profile and career roadmap"
            ]
        })
    }

    fn required_fields(request: &JobRecommendationsRequest) -> Vec<(&'static str, &str)> {
        vec![
            ("userProfile", request.user_profile.as_str()),
            ("careerRoadmap", request.career_roadmap.as_str()),
        ]
    }
}
