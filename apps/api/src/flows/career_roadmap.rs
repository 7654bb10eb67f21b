//! Career roadmap: candidate roles and the skills needed to reach each one.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::flows::prompts::{CAREER_ROADMAP_PROMPT, CAREER_ROADMAP_SYSTEM};
use crate::gateway::{render_template, Flow};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerRoadmapRequest {
    /// Comma-separated list of current skills.
    pub skills: String,
    /// Comma-separated list of interests.
    pub interests: String,
    /// Free-text description of prior work experience.
    pub experience: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapStep {
    pub role: String,
    /// Comma-separated list of skills to acquire for the role.
    pub skills_to_acquire: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerRoadmapResponse {
    pub roadmap: Vec<RoadmapStep>,
}

pub struct CareerRoadmap;

impl Flow for CareerRoadmap {
    const NAME: &'static str = "career-roadmap";
    const DESCRIPTION: &'static str =
        "Suggests potential roles and the skills to acquire for each, from skills, interests and experience.";
    const SYSTEM: &'static str = CAREER_ROADMAP_SYSTEM;

    type Request = CareerRoadmapRequest;
    type Response = CareerRoadmapResponse;

    fn render(request: &CareerRoadmapRequest) -> String {
        render_template(
            CAREER_ROADMAP_PROMPT,
            &[
                ("skills", request.skills.as_str()),
                ("interests", request.interests.as_str()),
                ("experience", request.experience.as_str()),
            ],
        )
    }

    fn output_shape() -> Value {
        json!({
            "roadmap": [
                {
                    "role": "string: the potential job role",
                    "skillsToAcquire": "string: comma-separated list of skills to acquire for the role"
                }
            ]
        })
    }

    fn required_fields(request: &CareerRoadmapRequest) -> Vec<(&'static str, &str)> {
        vec![
            ("skills", request.skills.as_str()),
            ("interests", request.interests.as_str()),
            ("experience", request.experience.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::parse_reply;

    #[test]
    fn test_render_interpolates_all_fields() {
        let prompt = CareerRoadmap::render(&CareerRoadmapRequest {
            skills: "Excel, SQL".to_string(),
            interests: "finance, data".to_string(),
            experience: "2 years as an accounts executive".to_string(),
        });
        assert!(prompt.contains("Skills: Excel, SQL"));
        assert!(prompt.contains("Interests: finance, data"));
        assert!(prompt.contains("Experience: 2 years as an accounts executive"));
    }

    #[test]
    fn test_parse_nested_roadmap() {
        let reply = r#"{"roadmap": [
            {"role": "Data Analyst", "skillsToAcquire": "Python, Tableau"},
            {"role": "Financial Analyst", "skillsToAcquire": "Valuation, Modelling"}
        ]}"#;
        let response = parse_reply::<CareerRoadmap>(reply).unwrap();
        assert_eq!(response.roadmap.len(), 2);
        assert_eq!(response.roadmap[0].role, "Data Analyst");
        assert_eq!(response.roadmap[1].skills_to_acquire, "Valuation, Modelling");
    }

    #[test]
    fn test_step_missing_skills_is_rejected() {
        let reply = r#"{"roadmap": [{"role": "Data Analyst"}]}"#;
        assert!(parse_reply::<CareerRoadmap>(reply).is_err());
    }

    #[test]
    fn test_bare_array_is_rejected() {
        // The declared shape wraps the list in an object.
        let reply = r#"[{"role": "Data Analyst", "skillsToAcquire": "Python"}]"#;
        assert!(parse_reply::<CareerRoadmap>(reply).is_err());
    }

    #[test]
    fn test_response_serializes_camel_case() {
        let response = CareerRoadmapResponse {
            roadmap: vec![RoadmapStep {
                role: "UX Designer".to_string(),
                skills_to_acquire: "Figma".to_string(),
            }],
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["roadmap"][0]["skillsToAcquire"], "Figma");
    }
}
