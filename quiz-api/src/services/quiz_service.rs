use std::sync::Arc;

use chrono::Utc;
use validator::Validate;

use crate::error::ApiError;
use crate::metrics::{ANSWERS_SUBMITTED_TOTAL, QUIZZES_COMPLETED_TOTAL, QUIZ_SESSIONS_STARTED_TOTAL};
use crate::models::{
    CurrentQuestionResponse, GameType, QuizSession, QuizStatsResponse, StartQuizRequest,
    StartQuizResponse, SubmitAnswerRequest, SubmitAnswerResponse,
};

use super::question_bank::QuestionBank;
use super::session_store::SessionStore;

const DEFAULT_NUM_QUESTIONS: i64 = 10;
const SCORE_PER_CORRECT: i32 = 10;

/// Session engine: creates sessions, serves the current question, grades
/// answers and derives stats. All persistence goes through the injected
/// `SessionStore`.
pub struct QuizService {
    bank: Arc<QuestionBank>,
    store: SessionStore,
}

impl QuizService {
    pub fn new(bank: Arc<QuestionBank>, store: SessionStore) -> Self {
        Self { bank, store }
    }

    pub async fn start_quiz(&self, req: &StartQuizRequest) -> Result<StartQuizResponse, ApiError> {
        req.validate()
            .map_err(|e| ApiError::Validation(e.to_string()))?;

        let player_name = req
            .player_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or("Anonymous")
            .to_string();

        // Non-positive counts clamp to 1; oversized counts clamp to the
        // catalog size inside `sample`.
        let requested = req.num_questions.unwrap_or(DEFAULT_NUM_QUESTIONS).max(1) as usize;
        let questions = self.bank.sample(requested);
        let total_questions = questions.len();

        let session = QuizSession {
            id: SessionStore::new_session_id(),
            game_type: GameType::Quiz,
            player_name: player_name.clone(),
            questions,
            current_index: 0,
            score: 0,
            correct_count: 0,
            started_at: Utc::now(),
        };
        let session_id = session.id.clone();
        self.store.insert(session).await;

        QUIZ_SESSIONS_STARTED_TOTAL.inc();
        tracing::info!(
            "Started quiz session {} for player '{}' with {} questions",
            session_id,
            player_name,
            total_questions
        );

        Ok(StartQuizResponse {
            success: true,
            session_id,
            total_questions,
            message: "Quiz started successfully".to_string(),
        })
    }

    pub async fn current_question(
        &self,
        session_id: &str,
    ) -> Result<CurrentQuestionResponse, ApiError> {
        let session = self
            .store
            .get(session_id)
            .await
            .ok_or_else(|| ApiError::NotFound("Invalid session".to_string()))?;

        if session.is_complete() {
            return Ok(CurrentQuestionResponse::Completed {
                success: true,
                completed: true,
                message: "Quiz completed".to_string(),
            });
        }

        let question = &session.questions[session.current_index];
        Ok(CurrentQuestionResponse::InProgress {
            success: true,
            completed: false,
            question_number: session.current_index + 1,
            total_questions: session.total_questions(),
            question: question.text.clone(),
            options: question.options.clone(),
            category: question.category.clone(),
            score: session.score,
        })
    }

    pub async fn submit_answer(
        &self,
        req: &SubmitAnswerRequest,
    ) -> Result<SubmitAnswerResponse, ApiError> {
        let selected = req.selected_option;

        // Grade and advance under the store's write lock so concurrent
        // submissions to one session cannot double-count a question.
        let result = self
            .store
            .update(&req.session_id, |session| {
                if session.is_complete() {
                    return Err(ApiError::InvalidState("No more questions".to_string()));
                }

                let question = &session.questions[session.current_index];
                let correct_answer = question.correct_index;
                let explanation = question.options[correct_answer].clone();

                // Out-of-range selections are not rejected; they simply
                // compare unequal and grade as incorrect.
                let is_correct = selected == correct_answer as i64;
                if is_correct {
                    session.score += SCORE_PER_CORRECT;
                    session.correct_count += 1;
                }
                session.current_index += 1;

                let quiz_complete = session.is_complete();
                let mut response = SubmitAnswerResponse {
                    success: true,
                    is_correct,
                    correct_answer,
                    explanation,
                    current_score: session.score,
                    quiz_complete,
                    final_score: None,
                    correct_answers: None,
                    total_questions: None,
                    percentage: None,
                };
                if quiz_complete {
                    response.final_score = Some(session.score);
                    response.correct_answers = Some(session.correct_count);
                    response.total_questions = Some(session.total_questions());
                    response.percentage = Some(session.percentage());
                }
                Ok(response)
            })
            .await
            .ok_or_else(|| ApiError::NotFound("Invalid session".to_string()))??;

        ANSWERS_SUBMITTED_TOTAL
            .with_label_values(&[if result.is_correct { "true" } else { "false" }])
            .inc();
        if result.quiz_complete {
            QUIZZES_COMPLETED_TOTAL.inc();
            tracing::info!(
                "Quiz session {} completed with score {}",
                req.session_id,
                result.current_score
            );
        }

        Ok(result)
    }

    pub async fn stats(&self, session_id: &str) -> Result<QuizStatsResponse, ApiError> {
        let session = self
            .store
            .get(session_id)
            .await
            .ok_or_else(|| ApiError::NotFound("Invalid session".to_string()))?;

        Ok(QuizStatsResponse {
            success: true,
            score: session.score,
            correct_answers: session.correct_count,
            total_questions: session.total_questions(),
            current_question: session.current_index,
            percentage: session.percentage(),
        })
    }
}
