// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lectern-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lectern and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Generated topic quizzes and answer grading.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::ids::TopicId;

/// Answer key as sent by the quiz generator: a single index or a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CorrectAnswer {
    Single(usize),
    Multiple(Vec<usize>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    SingleChoice,
    MultipleChoice,
    /// `variants[i]` pairs with `match_with[key[i]]`.
    Matching,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub title: String,
    pub variants: Vec<String>,
    #[serde(rename = "correctVariantIndex")]
    pub correct: CorrectAnswer,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_with: Option<Vec<String>>,
}

impl QuizQuestion {
    pub fn kind(&self) -> QuestionKind {
        if self.match_with.is_some() {
            return QuestionKind::Matching;
        }
        match self.correct {
            CorrectAnswer::Single(_) => QuestionKind::SingleChoice,
            CorrectAnswer::Multiple(_) => QuestionKind::MultipleChoice,
        }
    }

    /// Whether the answer key only points at existing variants / match targets.
    pub fn is_gradeable(&self) -> bool {
        let bound = match (&self.match_with, self.kind()) {
            (Some(targets), QuestionKind::Matching) => targets.len(),
            _ => self.variants.len(),
        };
        let indices: &[usize] = match &self.correct {
            CorrectAnswer::Single(index) => std::slice::from_ref(index),
            CorrectAnswer::Multiple(indices) => indices,
        };
        if self.kind() == QuestionKind::Matching && indices.len() != self.variants.len() {
            return false;
        }
        !indices.is_empty() && indices.iter().all(|index| *index < bound)
    }

    pub fn is_correct(&self, answer: &Answer) -> bool {
        if !self.is_gradeable() {
            return false;
        }
        match (&self.correct, self.kind(), answer) {
            (CorrectAnswer::Single(expected), QuestionKind::SingleChoice, Answer::Single(got)) => {
                expected == got
            }
            (CorrectAnswer::Multiple(expected), QuestionKind::MultipleChoice, Answer::Multiple(got)) => {
                expected.iter().copied().collect::<BTreeSet<_>>() == *got
            }
            (CorrectAnswer::Multiple(expected), QuestionKind::Matching, Answer::Matching(got)) => {
                expected == got
            }
            (CorrectAnswer::Single(expected), QuestionKind::Matching, Answer::Matching(got)) => {
                got.as_slice() == [*expected]
            }
            _ => false,
        }
    }
}

/// A learner's response to one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Single(usize),
    Multiple(BTreeSet<usize>),
    /// For each variant (in order), the chosen match target index.
    Matching(Vec<usize>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    pub topic_id: TopicId,
    pub questions: Vec<QuizQuestion>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizScore {
    pub correct: usize,
    pub total: usize,
    pub per_question: Vec<bool>,
}

impl QuizScore {
    pub fn passed(&self, threshold_percent: u8) -> bool {
        if self.total == 0 {
            return false;
        }
        self.correct * 100 >= self.total * usize::from(threshold_percent)
    }
}

/// Grades `answers` positionally against `quiz`. Missing answers count as wrong.
pub fn grade(quiz: &Quiz, answers: &[Option<Answer>]) -> QuizScore {
    let per_question = quiz
        .questions
        .iter()
        .enumerate()
        .map(|(idx, question)| match answers.get(idx) {
            Some(Some(answer)) => question.is_correct(answer),
            _ => false,
        })
        .collect::<Vec<_>>();

    QuizScore {
        correct: per_question.iter().filter(|ok| **ok).count(),
        total: quiz.questions.len(),
        per_question,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::{grade, Answer, CorrectAnswer, QuestionKind, Quiz, QuizQuestion};
    use crate::model::TopicId;

    fn sample_quiz() -> Quiz {
        let questions: Vec<QuizQuestion> = serde_json::from_str(
            r#"[
                {
                    "title": "What is the primary focus of the lecture?",
                    "variants": ["Data Structures", "Dynamic Connectivity", "Sorting", "Graphs"],
                    "correctVariantIndex": 1
                },
                {
                    "title": "Which methods connect two objects?",
                    "variants": ["connect()", "union()", "link()", "merge()", "join()"],
                    "correctVariantIndex": [1, 2]
                },
                {
                    "title": "Match the terms",
                    "variants": ["Quick-Union", "Quick-Find"],
                    "correctVariantIndex": [0, 1],
                    "matchWith": ["trees", "arrays"]
                }
            ]"#,
        )
        .expect("decode questions");
        Quiz {
            topic_id: TopicId::new("7").expect("topic id"),
            questions,
        }
    }

    #[test]
    fn question_kinds_follow_answer_key_shape() {
        let quiz = sample_quiz();
        let kinds = quiz.questions.iter().map(QuizQuestion::kind).collect::<Vec<_>>();
        assert_eq!(
            kinds,
            [QuestionKind::SingleChoice, QuestionKind::MultipleChoice, QuestionKind::Matching]
        );
    }

    #[test]
    fn grading_checks_each_question_kind() {
        let quiz = sample_quiz();
        let answers = vec![
            Some(Answer::Single(1)),
            Some(Answer::Multiple(BTreeSet::from([2, 1]))),
            Some(Answer::Matching(vec![1, 0])),
        ];
        let score = grade(&quiz, &answers);
        assert_eq!(score.per_question, [true, true, false]);
        assert_eq!(score.correct, 2);
        assert_eq!(score.total, 3);
        assert!(score.passed(60));
        assert!(!score.passed(80));
    }

    #[test]
    fn missing_and_mismatched_answers_are_wrong() {
        let quiz = sample_quiz();
        let answers = vec![None, Some(Answer::Single(1))];
        let score = grade(&quiz, &answers);
        assert_eq!(score.per_question, [false, false, false]);
    }

    #[test]
    fn out_of_range_answer_key_is_ungradeable() {
        let question = QuizQuestion {
            title: "Broken".to_owned(),
            variants: vec!["a".to_owned()],
            correct: CorrectAnswer::Single(3),
            match_with: None,
        };
        assert!(!question.is_gradeable());
        assert!(!question.is_correct(&Answer::Single(3)));
    }

    #[test]
    fn empty_quiz_never_passes() {
        let quiz = Quiz {
            topic_id: TopicId::new("1").expect("topic id"),
            questions: Vec::new(),
        };
        assert!(!grade(&quiz, &[]).passed(0));
    }
}
