//! College suggestion: up to five Indian colleges for a student's stream and interests.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::warn;

use crate::flows::prompts::{COLLEGE_SUGGESTION_PROMPT, COLLEGE_SUGGESTION_SYSTEM};
use crate::gateway::{render_template, Flow};

pub const MAX_COLLEGES: usize = 5;

/// Academic stream chosen for grades 11 and 12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stream {
    Science,
    Commerce,
    Arts,
}

impl Stream {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stream::Science => "Science",
            Stream::Commerce => "Commerce",
            Stream::Arts => "Arts",
        }
    }
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollegeSuggestionRequest {
    pub stream: Stream,
    /// Comma-separated list of the student's interests.
    pub interests: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct College {
    pub name: String,
    /// City and state.
    pub location: String,
    /// Comma-separated list of suggested courses at this college.
    pub suggested_courses: String,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollegeSuggestionResponse {
    pub colleges: Vec<College>,
}

pub struct CollegeSuggestion;

impl Flow for CollegeSuggestion {
    const NAME: &'static str = "college-suggestion";
    const DESCRIPTION: &'static str =
        "Recommends up to five colleges in India and courses for a student's stream and interests.";
    const SYSTEM: &'static str = COLLEGE_SUGGESTION_SYSTEM;

    type Request = CollegeSuggestionRequest;
    type Response = CollegeSuggestionResponse;

    fn render(request: &CollegeSuggestionRequest) -> String {
        let max = MAX_COLLEGES.to_string();
        render_template(
            COLLEGE_SUGGESTION_PROMPT,
            &[
                ("maxCount", max.as_str()),
                ("stream", request.stream.as_str()),
                ("interests", request.interests.as_str()),
            ],
        )
    }

    fn output_shape() -> Value {
        json!({
            "colleges": [
                {
                    "name": "string: the name of the college",
                    "location": "string: the city and state where the college is located",
                    "suggestedCourses": "string: a comma-separated list of suggested courses at this college",
                    "reason": "string: a detailed reason why this college and these courses are a good fit for the student, referencing their specific interests"
                }
            ]
        })
    }

    fn required_fields(request: &CollegeSuggestionRequest) -> Vec<(&'static str, &str)> {
        vec![("interests", request.interests.as_str())]
    }

    fn inspect(response: &CollegeSuggestionResponse) {
        if response.colleges.len() > MAX_COLLEGES {
            warn!(
                "College suggestion returned {} colleges (asked for up to {})",
                response.colleges.len(),
                MAX_COLLEGES
            );
        }
    }
}
