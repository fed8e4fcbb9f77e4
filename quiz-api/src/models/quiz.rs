use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A single catalog entry. Field names follow the question bank file format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "question")]
    pub text: String,
    pub options: Vec<String>,
    #[serde(rename = "correct")]
    pub correct_index: usize,
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizSession {
    pub id: String,
    pub game_type: GameType,
    pub player_name: String,
    pub questions: Vec<Question>,
    pub current_index: usize,
    pub score: i32,
    pub correct_count: u32,
    pub started_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameType {
    Quiz,
}

impl QuizSession {
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn is_complete(&self) -> bool {
        self.current_index >= self.questions.len()
    }

    /// Fraction of answered-correct over total, as a percentage. Zero-total
    /// sessions cannot be created, but divide defensively anyway.
    pub fn percentage(&self) -> f64 {
        if self.questions.is_empty() {
            0.0
        } else {
            f64::from(self.correct_count) / self.questions.len() as f64 * 100.0
        }
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct StartQuizRequest {
    #[serde(default)]
    #[validate(length(max = 100, message = "player_name must be at most 100 characters"))]
    pub player_name: Option<String>,
    #[serde(default)]
    pub num_questions: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct StartQuizResponse {
    pub success: bool,
    pub session_id: String,
    pub total_questions: usize,
    pub message: String,
}

/// Current-question view. The correct index is deliberately absent: it is
/// only revealed by the answer submission response.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum CurrentQuestionResponse {
    Completed {
        success: bool,
        completed: bool,
        message: String,
    },
    InProgress {
        success: bool,
        completed: bool,
        question_number: usize,
        total_questions: usize,
        question: String,
        options: Vec<String>,
        category: String,
        score: i32,
    },
}

#[derive(Debug, Deserialize)]
pub struct SubmitAnswerRequest {
    pub session_id: String,
    pub selected_option: i64,
}

#[derive(Debug, Serialize)]
pub struct SubmitAnswerResponse {
    pub success: bool,
    pub is_correct: bool,
    pub correct_answer: usize,
    pub explanation: String,
    pub current_score: i32,
    pub quiz_complete: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_score: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_answers: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_questions: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct QuizStatsResponse {
    pub success: bool,
    pub score: i32,
    pub correct_answers: u32,
    pub total_questions: usize,
    pub current_question: usize,
    pub percentage: f64,
}
