//! # Quiz Hub
//!
//! 測驗科目樹查詢與編輯狀態追蹤

pub use quiz_core::{Class, NumberEquality, Question, Quiz, QuizConfig, QuizError, Subject, Topic};
pub use quiz_search::{
    DuplicateDetector, HierarchyIndex, QuizLocation, SearchWarning, WarningSeverity,
};
pub use quiz_state::{structurally_equal, DirtyTracker};
