pub mod quiz;

pub use quiz::{
    CurrentQuestionResponse, GameType, Question, QuizSession, QuizStatsResponse,
    StartQuizRequest, StartQuizResponse, SubmitAnswerRequest, SubmitAnswerResponse,
};
