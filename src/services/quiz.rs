//! Quiz engine — a fixed question list walked by a two-state machine.
//!
//! `Answering(question, score)` scores each submitted option by exact string
//! equality with the configured correct answer, then advances; after the
//! last question the run is `Completed(final_score)`. "Try Again" resets to
//! the start. No backward navigation, no partial credit, no timeouts.

use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
pub struct Question {
    pub prompt: &'static str,
    pub options: &'static [&'static str],
    pub correct_answer: &'static str,
}

#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    #[error("no quiz configured for course {0}")]
    NoQuizForCourse(String),
    #[error("quiz run already completed")]
    AlreadyCompleted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum QuizState {
    Answering { question: usize, score: u32 },
    Completed { score: u32 },
}

/// One in-progress attempt at a course quiz.
#[derive(Debug, Clone, Serialize)]
pub struct QuizRun {
    pub id: Uuid,
    pub course_id: String,
    pub state: QuizState,
}

impl QuizRun {
    #[must_use]
    pub fn new(course_id: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            course_id: course_id.to_owned(),
            state: QuizState::Answering { question: 0, score: 0 },
        }
    }

    /// Score the selected option for the current question and advance.
    ///
    /// Returns whether the selection was correct.
    ///
    /// # Errors
    ///
    /// `AlreadyCompleted` if the run has no current question.
    pub fn answer(&mut self, questions: &[Question], selection: &str) -> Result<bool, QuizError> {
        let QuizState::Answering { question, score } = self.state else {
            return Err(QuizError::AlreadyCompleted);
        };

        let correct = questions
            .get(question)
            .is_some_and(|q| q.correct_answer == selection);
        let score = if correct { score + 1 } else { score };

        let next = question + 1;
        self.state = if next < questions.len() {
            QuizState::Answering { question: next, score }
        } else {
            QuizState::Completed { score }
        };

        Ok(correct)
    }

    /// "Try Again" — back to the first question with a zero score.
    pub fn reset(&mut self) {
        self.state = QuizState::Answering { question: 0, score: 0 };
    }
}

/// Fixed question set for a course, if one is configured.
#[must_use]
pub fn questions_for_course(course_id: &str) -> Option<&'static [Question]> {
    match course_id {
        "course1" => Some(COURSE1_QUESTIONS),
        _ => None,
    }
}

const COURSE1_QUESTIONS: &[Question] = &[
    Question {
        prompt: "How many surahs are in the Quran?",
        options: &["99", "114", "120", "130"],
        correct_answer: "114",
    },
    Question {
        prompt: "How many letters does the Arabic alphabet have?",
        options: &["26", "28", "29", "32"],
        correct_answer: "28",
    },
    Question {
        prompt: "In which direction is Arabic written?",
        options: &["Left to right", "Right to left", "Top to bottom"],
        correct_answer: "Right to left",
    },
    Question {
        prompt: "Which vowel mark makes the 'i' sound?",
        options: &["Fatha", "Kasra", "Damma", "Sukoon"],
        correct_answer: "Kasra",
    },
    Question {
        prompt: "What does sukoon indicate?",
        options: &["A long vowel", "A doubled letter", "The absence of a vowel"],
        correct_answer: "The absence of a vowel",
    },
];

#[cfg(test)]
#[path = "quiz_test.rs"]
mod tests;
