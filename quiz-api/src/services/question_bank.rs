use anyhow::{Context, Result};
use rand::seq::index;

use crate::models::Question;

/// The default catalog shipped with the binary.
const DEFAULT_BANK: &str = include_str!("../../data/questions.json");

/// Immutable question catalog, loaded once at startup and shared read-only.
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Result<Self> {
        for (i, q) in questions.iter().enumerate() {
            if q.options.len() != 4 {
                anyhow::bail!(
                    "Question {} has {} options, expected 4",
                    i,
                    q.options.len()
                );
            }
            if q.correct_index >= q.options.len() {
                anyhow::bail!(
                    "Question {} has correct index {} out of range",
                    i,
                    q.correct_index
                );
            }
        }
        Ok(Self { questions })
    }

    /// Loads the catalog from `path` when configured, otherwise falls back
    /// to the embedded default bank.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let questions: Vec<Question> = match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read question bank file: {}", path))?;
                serde_json::from_str(&raw)
                    .with_context(|| format!("Failed to parse question bank file: {}", path))?
            }
            None => serde_json::from_str(DEFAULT_BANK)
                .context("Failed to parse embedded question bank")?,
        };
        Self::new(questions)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Draws `min(n, len)` distinct questions uniformly without replacement.
    /// Never panics: oversized requests are clamped to the catalog size.
    pub fn sample(&self, n: usize) -> Vec<Question> {
        let amount = n.min(self.questions.len());
        if amount == 0 {
            return Vec::new();
        }
        let mut rng = rand::rng();
        index::sample(&mut rng, self.questions.len(), amount)
            .iter()
            .map(|i| self.questions[i].clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(text: &str, correct: usize) -> Question {
        Question {
            text: text.to_string(),
            options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            correct_index: correct,
            category: "Test".to_string(),
        }
    }

    #[test]
    fn embedded_bank_loads_and_is_valid() {
        let bank = QuestionBank::load(None).unwrap();
        assert!(!bank.is_empty());
        assert_eq!(bank.len(), 15);
    }

    #[test]
    fn rejects_out_of_range_correct_index() {
        let result = QuestionBank::new(vec![question("q", 4)]);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_wrong_option_count() {
        let bad = Question {
            text: "q".into(),
            options: vec!["a".into(), "b".into()],
            correct_index: 0,
            category: "Test".into(),
        };
        assert!(QuestionBank::new(vec![bad]).is_err());
    }

    #[test]
    fn sample_clamps_to_bank_size() {
        let bank =
            QuestionBank::new((0..5).map(|i| question(&format!("q{}", i), 0)).collect()).unwrap();
        assert_eq!(bank.sample(100).len(), 5);
        assert_eq!(bank.sample(0).len(), 0);
        assert_eq!(bank.sample(3).len(), 3);
    }

    #[test]
    fn sample_returns_distinct_questions() {
        let bank =
            QuestionBank::new((0..10).map(|i| question(&format!("q{}", i), 0)).collect()).unwrap();
        let drawn = bank.sample(10);
        let mut texts: Vec<_> = drawn.iter().map(|q| q.text.clone()).collect();
        texts.sort();
        texts.dedup();
        assert_eq!(texts.len(), 10);
    }
}
