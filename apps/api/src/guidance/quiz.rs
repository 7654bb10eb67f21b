//! Quiz catalog: the questionnaires shown to each audience, and how a set of
//! chosen options is composed into the free-text answers the skill assessment reads.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    #[error("Unknown quiz '{0}'")]
    UnknownAudience(String),

    #[error("Expected {expected} answers, got {got}")]
    WrongAnswerCount { expected: usize, got: usize },

    #[error("Answer to question {question} is not one of its options: '{answer}'")]
    UnknownOption { question: usize, answer: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    School,
    College,
    Professional,
    /// Stream selection for students in grade 10 or below.
    Stream,
}

impl Audience {
    pub fn as_str(&self) -> &'static str {
        match self {
            Audience::School => "school",
            Audience::College => "college",
            Audience::Professional => "professional",
            Audience::Stream => "stream",
        }
    }
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Audience {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "school" => Ok(Audience::School),
            "college" => Ok(Audience::College),
            "professional" => Ok(Audience::Professional),
            "stream" => Ok(Audience::Stream),
            other => Err(QuizError::UnknownAudience(other.to_string())),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Question {
    pub question: &'static str,
    pub options: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct Quiz {
    pub audience: Audience,
    pub questions: &'static [Question],
}

const SCHOOL_QUESTIONS: &[Question] = &[
    Question {
        question: "Which subject do you enjoy most in school?",
        options: &["Maths and Science", "Arts and Humanities", "Social Studies", "Languages"],
    },
    Question {
        question: "What kind of activity would you prefer for a school project?",
        options: &[
            "Building a model or a robot",
            "Writing a story or a play",
            "Conducting a survey and analyzing results",
            "Organizing a school event",
        ],
    },
    Question {
        question: "When you have free time, you prefer to:",
        options: &[
            "Play video games or solve puzzles",
            "Draw, paint, or play music",
            "Read non-fiction books or watch documentaries",
            "Talk with friends and socialize",
        ],
    },
    Question {
        question: "What sounds like a fun future job?",
        options: &[
            "Inventing something new",
            "Designing a cool product",
            "Becoming a leader in a field",
            "Helping people in your community",
        ],
    },
    Question {
        question: "How do you like to learn new things?",
        options: &[
            "By experimenting and doing",
            "By watching and observing",
            "By reading and researching",
            "By listening and discussing",
        ],
    },
];

const COLLEGE_QUESTIONS: &[Question] = &[
    Question {
        question: "Which of these activities do you enjoy the most?",
        options: &[
            "Solving complex logical puzzles",
            "Creating a visually appealing design",
            "Organizing a detailed project plan",
            "Helping others and communicating ideas",
        ],
    },
    Question {
        question: "How do you prefer to work?",
        options: &[
            "Independently, focusing on a single task",
            "Collaboratively in a team",
            "In a leadership role, guiding others",
            "In a structured environment with clear guidelines",
        ],
    },
    Question {
        question: "What are you most interested in learning?",
        options: &[
            "The latest programming languages and technologies",
            "Principles of art and design",
            "Business management and strategy",
            "Psychology and human behavior",
        ],
    },
    Question {
        question: "What kind of impact do you want to make in your career?",
        options: &[
            "Build innovative products that change the world",
            "Create beautiful and meaningful experiences",
            "Lead successful teams and companies",
            "Make a positive difference in people's lives",
        ],
    },
    Question {
        question: "When faced with a difficult problem, what is your first instinct?",
        options: &[
            "Break it down into smaller, logical steps",
            "Brainstorm creative and unconventional solutions",
            "Consult with others to get different perspectives",
            "Research best practices and established methods",
        ],
    },
];

const PROFESSIONAL_QUESTIONS: &[Question] = &[
    Question {
        question: "What aspect of your current or previous job did you find most rewarding?",
        options: &[
            "Achieving a challenging technical goal",
            "Mentoring junior team members",
            "Improving a process to make it more efficient",
            "Closing a major deal or partnership",
        ],
    },
    Question {
        question: "What is your primary motivation for a career change or advancement?",
        options: &[
            "Higher salary and better benefits",
            "More meaningful and impactful work",
            "Better work-life balance",
            "Leadership and management opportunities",
        ],
    },
    Question {
        question: "How do you approach learning new skills for your career?",
        options: &[
            "Through structured online courses and certifications",
            "By working on side projects",
            "Through on-the-job training and mentorship",
            "By attending conferences and networking",
        ],
    },
    Question {
        question: "What kind of work environment do you thrive in?",
        options: &[
            "A fast-paced, innovative startup",
            "A large, stable corporation with clear structures",
            "A collaborative, mission-driven non-profit",
            "A flexible remote-first company",
        ],
    },
    Question {
        question: "Looking five years ahead, what do you want to have accomplished?",
        options: &[
            "Become a recognized expert in my field",
            "Lead a high-performing team",
            "Start my own business",
            "Transitioned to a completely new industry",
        ],
    },
];

/// The stream quiz asks the first three school questions.
const STREAM_QUESTION_COUNT: usize = 3;

pub fn quiz(audience: Audience) -> Quiz {
    let questions = match audience {
        Audience::School => SCHOOL_QUESTIONS,
        Audience::College => COLLEGE_QUESTIONS,
        Audience::Professional => PROFESSIONAL_QUESTIONS,
        Audience::Stream => &SCHOOL_QUESTIONS[..STREAM_QUESTION_COUNT],
    };
    Quiz {
        audience,
        questions,
    }
}

/// Validates one chosen option per question (in order) and composes the
/// free-text `userAnswers` for the skill assessment.
pub fn compose_answers(audience: Audience, answers: &[String]) -> Result<String, QuizError> {
    let questions = quiz(audience).questions;
    if answers.len() != questions.len() {
        return Err(QuizError::WrongAnswerCount {
            expected: questions.len(),
            got: answers.len(),
        });
    }

    let chosen = questions
        .iter()
        .zip(answers)
        .enumerate()
        .map(|(i, (question, answer))| {
            let answer = answer.trim();
            question
                .options
                .iter()
                .copied()
                .find(|option| *option == answer)
                .ok_or_else(|| QuizError::UnknownOption {
                    question: i + 1,
                    answer: answer.to_string(),
                })
        })
        .collect::<Result<Vec<&'static str>, QuizError>>()?;

    Ok(match audience {
        Audience::Stream => format!(
            "My favorite subjects and activities are: {}. Based on this, suggest a suitable \
             academic stream (Science, Commerce, or Arts) for my 11th and 12th grade in India.",
            chosen.join(", ")
        ),
        _ => chosen.join(". "),
    })
}
