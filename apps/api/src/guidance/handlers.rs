//! Axum route handlers for quizzes and the employer directory.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::flows::job_listings::{JobListings, JobListingsRequest};
use crate::flows::run;
use crate::flows::skill_assessment::{SkillAssessment, SkillAssessmentRequest, SkillAssessmentResponse};
use crate::guidance::employers::{find_employer, Employer, EMPLOYERS};
use crate::guidance::quiz::{compose_answers, quiz, Audience, Quiz};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AssessRequest {
    /// One chosen option per question, in question order.
    pub answers: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessResponse {
    pub audience: Audience,
    pub user_answers: String,
    pub assessment: SkillAssessmentResponse,
}

#[derive(Debug, Serialize)]
pub struct EmployerJobsResponse {
    pub employer: &'static Employer,
    pub jobs: Vec<String>,
}

/// GET /api/v1/quizzes/:audience
pub async fn handle_get_quiz(Path(audience): Path<String>) -> Result<Json<Quiz>, AppError> {
    let audience: Audience = audience.parse()?;
    Ok(Json(quiz(audience)))
}

/// POST /api/v1/quizzes/:audience/assess
///
/// Validates the chosen options, composes them into free text and runs the
/// skill assessment.
pub async fn handle_assess_quiz(
    State(state): State<AppState>,
    Path(audience): Path<String>,
    request: Result<Json<AssessRequest>, JsonRejection>,
) -> Result<Json<AssessResponse>, AppError> {
    let audience: Audience = audience.parse()?;
    let Json(request) = request?;
    let user_answers = compose_answers(audience, &request.answers)?;

    let assessment = run::<SkillAssessment>(
        &state.gateway,
        &SkillAssessmentRequest {
            user_answers: user_answers.clone(),
        },
    )
    .await?;

    Ok(Json(AssessResponse {
        audience,
        user_answers,
        assessment,
    }))
}

/// GET /api/v1/employers
pub async fn handle_list_employers() -> Json<&'static [Employer]> {
    Json(EMPLOYERS)
}

/// GET /api/v1/employers/:name/jobs
///
/// Runs the job-listings flow for a directory employer.
pub async fn handle_employer_jobs(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<EmployerJobsResponse>, AppError> {
    let employer = find_employer(&name)
        .ok_or_else(|| AppError::NotFound(format!("Employer '{name}' is not in the directory")))?;

    let listings = run::<JobListings>(
        &state.gateway,
        &JobListingsRequest {
            company_name: employer.name.to_string(),
            company_description: employer.description.to_string(),
        },
    )
    .await?;

    Ok(Json(EmployerJobsResponse {
        employer,
        jobs: listings.0,
    }))
}
