// Generation flows: seven static configurations of the structured-generation gateway.
// All oracle calls go through gateway::Gateway; no flow talks to llm_client directly.

pub mod career_roadmap;
pub mod college_suggestion;
pub mod handlers;
pub mod job_listings;
pub mod job_recommendations;
pub mod prompts;
pub mod resume_analysis;
pub mod skill_assessment;
pub mod talent_matching;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::gateway::{Flow, Gateway, GatewayError};

use career_roadmap::CareerRoadmap;
use college_suggestion::CollegeSuggestion;
use job_listings::JobListings;
use job_recommendations::JobRecommendations;
use resume_analysis::ResumeAnalysis;
use skill_assessment::SkillAssessment;
use talent_matching::TalentMatching;

#[derive(Debug, Error)]
pub enum FlowError {
    #[error("Unknown flow '{0}'")]
    UnknownFlow(String),

    #[error("Invalid request for {flow}: {reason}")]
    InvalidRequest { flow: &'static str, reason: String },

    #[error("Missing required field(s) for {flow}: {}", .fields.join(", "))]
    MissingFields {
        flow: &'static str,
        fields: Vec<&'static str>,
    },

    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error("Failed to serialize response: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Identifies a flow on the wire (`/api/v1/flows/:flow`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlowName {
    TalentMatching,
    CareerRoadmap,
    JobListings,
    JobRecommendations,
    SkillAssessment,
    ResumeAnalysis,
    CollegeSuggestion,
}

impl FlowName {
    pub const ALL: [FlowName; 7] = [
        FlowName::TalentMatching,
        FlowName::CareerRoadmap,
        FlowName::JobListings,
        FlowName::JobRecommendations,
        FlowName::SkillAssessment,
        FlowName::ResumeAnalysis,
        FlowName::CollegeSuggestion,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FlowName::TalentMatching => TalentMatching::NAME,
            FlowName::CareerRoadmap => CareerRoadmap::NAME,
            FlowName::JobListings => JobListings::NAME,
            FlowName::JobRecommendations => JobRecommendations::NAME,
            FlowName::SkillAssessment => SkillAssessment::NAME,
            FlowName::ResumeAnalysis => ResumeAnalysis::NAME,
            FlowName::CollegeSuggestion => CollegeSuggestion::NAME,
        }
    }
}

impl fmt::Display for FlowName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FlowName {
    type Err = FlowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FlowName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| FlowError::UnknownFlow(s.to_string()))
    }
}

/// Catalog entry describing one flow and its declared output shape.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub output_shape: Value,
}

fn descriptor<F: Flow>() -> FlowDescriptor {
    FlowDescriptor {
        name: F::NAME,
        description: F::DESCRIPTION,
        output_shape: F::output_shape(),
    }
}

pub fn catalog() -> Vec<FlowDescriptor> {
    FlowName::ALL
        .into_iter()
        .map(|name| match name {
            FlowName::TalentMatching => descriptor::<TalentMatching>(),
            FlowName::CareerRoadmap => descriptor::<CareerRoadmap>(),
            FlowName::JobListings => descriptor::<JobListings>(),
            FlowName::JobRecommendations => descriptor::<JobRecommendations>(),
            FlowName::SkillAssessment => descriptor::<SkillAssessment>(),
            FlowName::ResumeAnalysis => descriptor::<ResumeAnalysis>(),
            FlowName::CollegeSuggestion => descriptor::<CollegeSuggestion>(),
        })
        .collect()
}

/// Rejects requests whose required text fields are empty or whitespace.
pub fn check_required<F: Flow>(request: &F::Request) -> Result<(), FlowError> {
    let missing: Vec<&'static str> = F::required_fields(request)
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(FlowError::MissingFields {
            flow: F::NAME,
            fields: missing,
        })
    }
}

/// Caller-side entry point for a typed request: field checks, then the gateway.
pub async fn run<F: Flow>(gateway: &Gateway, request: &F::Request) -> Result<F::Response, FlowError> {
    check_required::<F>(request)?;
    Ok(gateway.generate::<F>(request).await?)
}

async fn run_value<F: Flow>(gateway: &Gateway, payload: Value) -> Result<Value, FlowError> {
    let request: F::Request =
        serde_json::from_value(payload).map_err(|e| FlowError::InvalidRequest {
            flow: F::NAME,
            reason: e.to_string(),
        })?;
    let response = run::<F>(gateway, &request).await?;
    serde_json::to_value(&response).map_err(FlowError::Serialize)
}

/// `generate(flowName, requestPayload)` over untyped JSON.
pub async fn generate_by_name(
    gateway: &Gateway,
    name: FlowName,
    payload: Value,
) -> Result<Value, FlowError> {
    match name {
        FlowName::TalentMatching => run_value::<TalentMatching>(gateway, payload).await,
        FlowName::CareerRoadmap => run_value::<CareerRoadmap>(gateway, payload).await,
        FlowName::JobListings => run_value::<JobListings>(gateway, payload).await,
        FlowName::JobRecommendations => run_value::<JobRecommendations>(gateway, payload).await,
        FlowName::SkillAssessment => run_value::<SkillAssessment>(gateway, payload).await,
        FlowName::ResumeAnalysis => run_value::<ResumeAnalysis>(gateway, payload).await,
        FlowName::CollegeSuggestion => run_value::<CollegeSuggestion>(gateway, payload).await,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::*;
    use crate::gateway::testing::CannedOracle;

    struct Fixture {
        name: FlowName,
        request: Value,
        valid_reply: &'static str,
        missing_field_reply: &'static str,
    }

    fn fixtures() -> Vec<Fixture> {
        vec![
            Fixture {
                name: FlowName::TalentMatching,
                request: json!({"userProfile": "Go developer", "companyRequirements": "Payments team"}),
                valid_reply: r#"{"matchSummary": "Good fit", "jobRecommendations": ["Backend Engineer"]}"#,
                missing_field_reply: r#"{"jobRecommendations": ["Backend Engineer"]}"#,
            },
            Fixture {
                name: FlowName::CareerRoadmap,
                request: json!({"skills": "SQL", "interests": "data", "experience": "1 year analyst"}),
                valid_reply: r#"{"roadmap": [{"role": "Data Engineer", "skillsToAcquire": "Spark, Airflow"}]}"#,
                missing_field_reply: r#"{"roadmap": [{"role": "Data Engineer"}]}"#,
            },
            Fixture {
                name: FlowName::JobListings,
                request: json!({"companyName": "Wipro", "companyDescription": "IT services"}),
                valid_reply: r#"["Project Engineer", "Test Engineer", "Consultant", "Architect", "Analyst"]"#,
                missing_field_reply: r#"{"jobs": ["Project Engineer"]}"#,
            },
            Fixture {
                name: FlowName::JobRecommendations,
                request: json!({"userProfile": "Designer", "careerRoadmap": "Lead a design team"}),
                valid_reply: r#"{"jobRecommendations": ["Design Lead", "UX Manager"]}"#,
                missing_field_reply: r#"{}"#,
            },
            Fixture {
                name: FlowName::SkillAssessment,
                request: json!({"userAnswers": "Solving complex logical puzzles"}),
                valid_reply: r#"{"suitableRole": "Software Engineer", "reasoning": "You like logic."}"#,
                missing_field_reply: r#"{"suitableRole": "Software Engineer"}"#,
            },
            Fixture {
                name: FlowName::ResumeAnalysis,
                request: json!({"resumeDataUri": "data:application/pdf;base64,JVBERi0xLjQ="}),
                valid_reply: r#"{"jobRecommendations": [{"title": "SRE", "company": "HDFC Bank", "description": "Keep payments up.", "matchReason": "On-call experience."}]}"#,
                missing_field_reply: r#"{"jobRecommendations": [{"title": "SRE", "company": "HDFC Bank"}]}"#,
            },
            Fixture {
                name: FlowName::CollegeSuggestion,
                request: json!({"stream": "Arts", "interests": "history, writing"}),
                valid_reply: r#"{"colleges": [{"name": "St. Stephen's College", "location": "Delhi", "suggestedCourses": "BA History", "reason": "Strong history department.", "ranking": 3}]}"#,
                missing_field_reply: r#"{"colleges": [{"name": "St. Stephen's College"}]}"#,
            },
        ]
    }

    /// True when `value` has exactly the structure of a declared shape:
    /// strings where the shape has strings, arrays of conforming items, and
    /// objects with exactly the declared keys.
    fn conforms(value: &Value, shape: &Value) -> bool {
        match shape {
            Value::String(_) => value.is_string(),
            Value::Array(items) => match (value.as_array(), items.first()) {
                (Some(values), Some(item)) => values.iter().all(|v| conforms(v, item)),
                _ => false,
            },
            Value::Object(fields) => match value.as_object() {
                Some(obj) => {
                    obj.len() == fields.len()
                        && fields
                            .iter()
                            .all(|(k, s)| obj.get(k).is_some_and(|v| conforms(v, s)))
                }
                None => false,
            },
            _ => false,
        }
    }

    fn shape_of(name: FlowName) -> Value {
        catalog()
            .into_iter()
            .find(|d| d.name == name.as_str())
            .map(|d| d.output_shape)
            .unwrap()
    }

    #[test]
    fn test_flow_names_round_trip_through_str() {
        for name in FlowName::ALL {
            assert_eq!(name.as_str().parse::<FlowName>().unwrap(), name);
            let wire = serde_json::to_value(name).unwrap();
            assert_eq!(wire, json!(name.as_str()));
        }
    }

    #[test]
    fn test_unknown_flow_name() {
        let err = "horoscope".parse::<FlowName>().unwrap_err();
        assert!(matches!(err, FlowError::UnknownFlow(name) if name == "horoscope"));
    }

    #[test]
    fn test_catalog_lists_every_flow_once() {
        let catalog = catalog();
        assert_eq!(catalog.len(), FlowName::ALL.len());
        for name in FlowName::ALL {
            assert_eq!(catalog.iter().filter(|d| d.name == name.as_str()).count(), 1);
        }
    }

    #[tokio::test]
    async fn test_every_flow_returns_declared_shape() {
        for fixture in fixtures() {
            let oracle = Arc::new(CannedOracle::replying(fixture.valid_reply));
            let gateway = Gateway::new(oracle.clone());

            let response = generate_by_name(&gateway, fixture.name, fixture.request)
                .await
                .unwrap_or_else(|e| panic!("{} failed: {e}", fixture.name));

            assert!(
                conforms(&response, &shape_of(fixture.name)),
                "{} response does not match its declared shape: {response}",
                fixture.name
            );
            assert_eq!(oracle.calls(), 1);
        }
    }

    #[tokio::test]
    async fn test_repeated_calls_conform_without_equal_values() {
        let gateway = Gateway::new(Arc::new(CannedOracle::replying(
            r#"{"suitableRole": "Data Analyst", "reasoning": "You enjoy surveys."}"#,
        )));
        let request = json!({"userAnswers": "Conducting a survey and analyzing results"});
        let shape = shape_of(FlowName::SkillAssessment);

        for _ in 0..3 {
            let response = generate_by_name(&gateway, FlowName::SkillAssessment, request.clone())
                .await
                .unwrap();
            assert!(conforms(&response, &shape));
        }
    }

    #[tokio::test]
    async fn test_every_flow_rejects_missing_reply_field() {
        for fixture in fixtures() {
            let gateway = Gateway::new(Arc::new(CannedOracle::replying(fixture.missing_field_reply)));

            let err = generate_by_name(&gateway, fixture.name, fixture.request)
                .await
                .unwrap_err();

            assert!(
                matches!(err, FlowError::Gateway(GatewayError::Validation { .. })),
                "{} should fail validation, got {err:?}",
                fixture.name
            );
        }
    }

    #[tokio::test]
    async fn test_every_flow_surfaces_transport_failure_once() {
        for fixture in fixtures() {
            let oracle = Arc::new(CannedOracle::unreachable());
            let gateway = Gateway::new(oracle.clone());

            let err = generate_by_name(&gateway, fixture.name, fixture.request)
                .await
                .unwrap_err();

            assert!(
                matches!(err, FlowError::Gateway(GatewayError::Transport { .. })),
                "{} should surface transport failure, got {err:?}",
                fixture.name
            );
            assert_eq!(oracle.calls(), 1, "{} must not retry", fixture.name);
        }
    }

    #[tokio::test]
    async fn test_extra_reply_fields_are_dropped() {
        let gateway = Gateway::new(Arc::new(CannedOracle::replying(
            r#"{"suitableRole": "Digital Marketer", "reasoning": "Social.", "confidence": 0.9}"#,
        )));

        let response = generate_by_name(
            &gateway,
            FlowName::SkillAssessment,
            json!({"userAnswers": "Talk with friends and socialize"}),
        )
        .await
        .unwrap();

        assert!(response.get("confidence").is_none());
    }

    #[tokio::test]
    async fn test_blank_required_field_is_rejected_before_oracle() {
        let oracle = Arc::new(CannedOracle::replying("{}"));
        let gateway = Gateway::new(oracle.clone());

        let err = generate_by_name(
            &gateway,
            FlowName::TalentMatching,
            json!({"userProfile": "   ", "companyRequirements": "Payments team"}),
        )
        .await
        .unwrap_err();

        match err {
            FlowError::MissingFields { flow, fields } => {
                assert_eq!(flow, "talent-matching");
                assert_eq!(fields, vec!["userProfile"]);
            }
            other => panic!("expected missing fields, got {other:?}"),
        }
        assert_eq!(oracle.calls(), 0);
    }

    #[tokio::test]
    async fn test_malformed_payload_is_invalid_request() {
        let oracle = Arc::new(CannedOracle::replying("{}"));
        let gateway = Gateway::new(oracle.clone());

        let err = generate_by_name(
            &gateway,
            FlowName::CollegeSuggestion,
            json!({"stream": "Medicine", "interests": "biology"}),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, FlowError::InvalidRequest { flow: "college-suggestion", .. }));
        assert_eq!(oracle.calls(), 0);
    }
}
