//! Skill assessment: one suitable role (or academic stream) from quiz answers.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::flows::prompts::{SKILL_ASSESSMENT_PROMPT, SKILL_ASSESSMENT_SYSTEM};
use crate::gateway::{render_template, Flow};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillAssessmentRequest {
    pub user_answers: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillAssessmentResponse {
    pub suitable_role: String,
    pub reasoning: String,
}

pub struct SkillAssessment;

impl Flow for SkillAssessment {
    const NAME: &'static str = "skill-assessment";
    const DESCRIPTION: &'static str =
        "Suggests a single suitable role or academic stream from quiz answers, with reasoning.";
    const SYSTEM: &'static str = SKILL_ASSESSMENT_SYSTEM;

    type Request = SkillAssessmentRequest;
    type Response = SkillAssessmentResponse;

    fn render(request: &SkillAssessmentRequest) -> String {
        render_template(
            SKILL_ASSESSMENT_PROMPT,
            &[("userAnswers", request.user_answers.as_str())],
        )
    }

    fn output_shape() -> Value {
        json!({
            "suitableRole": "string: the job role most suitable for the user based on their answers",
            "reasoning": "string: a detailed, step-by-step explanation of why the suggested role is a good fit, linking back to their specific answers"
        })
    }

    fn required_fields(request: &SkillAssessmentRequest) -> Vec<(&'static str, &str)> {
        vec![("userAnswers", request.user_answers.as_str())]
    }
}
