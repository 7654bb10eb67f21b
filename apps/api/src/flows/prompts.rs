// All prompt templates for the generation flows.
// Placeholders use the request's wire field names, e.g. `{userProfile}`.
// The declared output shape is appended by the gateway; templates must not repeat it.

pub const TALENT_MATCHING_SYSTEM: &str = "You are an expert talent matching agent.";

pub const TALENT_MATCHING_PROMPT: &str = r#"You will use the user profile and company requirements to determine how well the candidate matches the company requirements and provide job recommendations.

User Profile: {userProfile}
Company Requirements: {companyRequirements}

Based on the user profile and company requirements, provide a match summary and a list of job recommendations."#;

pub const CAREER_ROADMAP_SYSTEM: &str = "You are an expert career advisor.";

pub const CAREER_ROADMAP_PROMPT: &str = r#"Given a user's skills, interests, and experience, generate a personalized career roadmap, suggesting relevant roles and necessary skills to acquire.

Your suggestions should cover a wide range of fields including tech, business, design, and marketing. Be inclusive and provide diverse career paths.

Skills: {skills}
Interests: {interests}
Experience: {experience}

Generate a list of potential job roles and the skills the user needs to acquire for each role. Format the skills as a comma separated list."#;

pub const JOB_LISTINGS_SYSTEM: &str =
    "You are a job market expert familiar with current hiring trends in India.";

pub const JOB_LISTINGS_PROMPT: &str = r#"Based on the following company information, generate a list of {targetCount} plausible job openings that the company might have right now.
Return ONLY the job titles, as a JSON array of strings with one title per element.

Company Name: {companyName}
Company Description: {companyDescription}"#;

pub const JOB_RECOMMENDATIONS_SYSTEM: &str = "You are an expert career advisor.";

pub const JOB_RECOMMENDATIONS_PROMPT: &str = r#"Based on the user's profile and career roadmap, provide a list of relevant job recommendations.

User Profile: {userProfile}
Career Roadmap: {careerRoadmap}"#;

pub const SKILL_ASSESSMENT_SYSTEM: &str = "You are an expert career advisor.";

pub const SKILL_ASSESSMENT_PROMPT: &str = r#"Based on the user's answers to a personality and interest quiz, suggest a single, specific job role or academic stream that would be a good fit for them. Also provide a detailed, step-by-step reasoning for your suggestion, explaining how their answers point to this conclusion.

Here are the user's answers:
{userAnswers}

Analyze these answers to determine a suitable job role or stream and provide a comprehensive explanation for your reasoning.
If suggesting an academic stream (Science, Commerce, Arts), explain which subjects within that stream align with their answers.
If suggesting a job role, cover a wide range of roles common in the tech, business, design, and marketing sectors in India.
Example roles: Software Engineer, Product Manager, UX/UI Designer, Data Analyst, Business Development Manager, Content Strategist, Digital Marketer, etc."#;

pub const RESUME_ANALYSIS_SYSTEM: &str = "You are an expert career consultant and headhunter \
    with deep knowledge of the job market in India.";

/// The resume itself is attached as a document block, not interpolated.
pub const RESUME_ANALYSIS_PROMPT: &str = r#"Your task is to analyze the attached resume and generate a list of {targetCount} highly relevant job recommendations.

Instructions:
1. Carefully parse the resume to understand the user's skills, experience, and career trajectory.
2. Based on this analysis, identify {targetCount} plausible, currently available job roles in India that would be an excellent fit.
3. For each recommendation, provide a job title, a plausible company name (can be a real or realistic fictional company), a short job description, and a brief "matchReason" explaining why the user is a strong candidate.
4. The companies and job descriptions should be realistic for the Indian job market."#;

pub const COLLEGE_SUGGESTION_SYSTEM: &str =
    "You are an expert career counselor for high school students in India.";

pub const COLLEGE_SUGGESTION_PROMPT: &str = r#"Your task is to recommend up to {maxCount} suitable colleges and courses based on the student's academic stream and interests.

Student's Stream: {stream}
Student's Interests: {interests}

Instructions:
1. Analyze the stream and interests to identify relevant fields of study.
2. Suggest up to {maxCount} real, well-regarded colleges in India (e.g., IITs, NITs, Delhi University colleges, etc.) that are strong in those fields.
3. For each college, provide its location and a few relevant courses the student could pursue.
4. Crucially, provide a detailed and encouraging reason why the college and courses are a great choice for them. Your reason must explicitly reference their stated interests and explain how the suggested path aligns with them."#;
