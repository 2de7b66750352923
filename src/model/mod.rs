// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lectern-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lectern and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! Topics carry an immutable content tree; course modules, profiles and quizzes mirror the
//! platform API payloads.

pub mod course;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod ids;
pub mod node;
pub mod quiz;
pub mod topic;

pub use course::{AuthTokens, CourseModule, Difficulty, NewModule, UserProfile};
pub use ids::{Id, IdError, ModuleId, NodeId, TopicId};
pub use node::{ContentNode, NodeKind, NodeLink, NodeTag, ParseNodeTagError, StackAxis};
pub use quiz::{grade, Answer, CorrectAnswer, QuestionKind, Quiz, QuizQuestion, QuizScore};
pub use topic::TopicDocument;
