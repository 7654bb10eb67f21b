//! Job listings: plausible open roles for a named company.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::warn;

use crate::flows::prompts::{JOB_LISTINGS_PROMPT, JOB_LISTINGS_SYSTEM};
use crate::gateway::{render_template, Flow};

/// Number of titles the oracle is asked for. Not enforced on the reply.
pub const JOB_LISTINGS_TARGET: usize = 5;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobListingsRequest {
    pub company_name: String,
    pub company_description: String,
}

/// A bare list of job titles. Callers must cope with fewer than the target, including none.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobListingsResponse(pub Vec<String>);

pub struct JobListings;

impl Flow for JobListings {
    const NAME: &'static str = "job-listings";
    const DESCRIPTION: &'static str =
        "Generates a list of plausible job openings for a company from its name and description.";
    const SYSTEM: &'static str = JOB_LISTINGS_SYSTEM;

    type Request = JobListingsRequest;
    type Response = JobListingsResponse;

    fn render(request: &JobListingsRequest) -> String {
        let target = JOB_LISTINGS_TARGET.to_string();
        render_template(
            JOB_LISTINGS_PROMPT,
            &[
                ("targetCount", target.as_str()),
                ("companyName", request.company_name.as_str()),
                ("companyDescription", request.company_description.as_str()),
            ],
        )
    }

    fn output_shape() -> Value {
        json!(["string: a job title"])
    }

    fn required_fields(request: &JobListingsRequest) -> Vec<(&'static str, &str)> {
        vec![
            ("companyName", request.company_name.as_str()),
            ("companyDescription", request.company_description.as_str()),
        ]
    }

    fn inspect(response: &JobListingsResponse) {
        if response.0.len() != JOB_LISTINGS_TARGET {
            warn!(
                "Job listings returned {} titles (asked for {})",
                response.0.len(),
                JOB_LISTINGS_TARGET
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::parse_reply;

    #[test]
    fn test_render_asks_for_target_count() {
        let prompt = JobListings::render(&JobListingsRequest {
            company_name: "Infosys".to_string(),
            company_description: "Digital services and consulting.".to_string(),
        });
        assert!(prompt.contains("a list of 5 plausible job openings"));
        assert!(prompt.contains("Company Name: Infosys"));
        assert!(prompt.contains("Company Description: Digital services and consulting."));
    }

    #[test]
    fn test_parse_bare_array() {
        let reply = r#"["SDE I", "SDE II", "QA Engineer", "Product Analyst", "Consultant"]"#;
        let response = parse_reply::<JobListings>(reply).unwrap();
        assert_eq!(response.0.len(), JOB_LISTINGS_TARGET);
    }

    #[test]
    fn test_fewer_titles_are_accepted() {
        let response = parse_reply::<JobListings>(r#"["SDE I", "SDE II"]"#).unwrap();
        assert_eq!(response.0.len(), 2);
        let response = parse_reply::<JobListings>("[]").unwrap();
        assert!(response.0.is_empty());
    }

    #[test]
    fn test_line_separated_text_is_rejected() {
        assert!(parse_reply::<JobListings>("SDE I\nSDE II\nQA Engineer").is_err());
    }

    #[test]
    fn test_wrapped_object_is_rejected() {
        assert!(parse_reply::<JobListings>(r#"{"jobs": ["SDE I"]}"#).is_err());
    }

    #[test]
    fn test_response_serializes_as_bare_array() {
        let response = JobListingsResponse(vec!["SDE I".to_string()]);
        assert_eq!(serde_json::to_value(&response).unwrap(), json!(["SDE I"]));
    }
}
