//! # Quiz Search
//!
//! 科目樹查詢：依ID或依參照找出測驗及其完整上層鏈

pub mod diagnostics;
pub mod hierarchy;

// Re-export 主要類型
pub use diagnostics::DuplicateDetector;
pub use hierarchy::HierarchyIndex;

use quiz_core::{Class, Quiz, Subject, Topic};
use serde::Serialize;

/// 查詢結果：測驗與其所在的科目／班級／主題
///
/// 所有欄位都借用自被查詢的樹。
#[derive(Debug, Clone, Copy)]
pub struct QuizLocation<'a> {
    pub quiz: &'a Quiz,
    pub subject: &'a Subject,
    pub class: &'a Class,
    pub topic: &'a Topic,
}

impl<'a> QuizLocation<'a> {
    pub fn new(subject: &'a Subject, class: &'a Class, topic: &'a Topic, quiz: &'a Quiz) -> Self {
        Self {
            quiz,
            subject,
            class,
            topic,
        }
    }

    /// `科目/班級/主題/測驗` 形式的路徑
    pub fn path(&self) -> String {
        format!("{}/{}", self.topic_path(), self.quiz.id)
    }

    /// `科目/班級/主題` 形式的路徑
    pub fn topic_path(&self) -> String {
        format!("{}/{}/{}", self.subject.id, self.class.id, self.topic.id)
    }

    /// 是否指向同一個測驗實體
    pub fn is_same_quiz(&self, other: &QuizLocation<'_>) -> bool {
        std::ptr::eq(self.quiz, other.quiz)
    }
}

/// 查詢警告
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchWarning {
    pub quiz_id: String,
    pub message: String,
    pub severity: WarningSeverity,
}

impl SearchWarning {
    pub fn new(quiz_id: String, message: String, severity: WarningSeverity) -> Self {
        Self {
            quiz_id,
            message,
            severity,
        }
    }

    pub fn warning(quiz_id: String, message: String) -> Self {
        Self::new(quiz_id, message, WarningSeverity::Warning)
    }

    pub fn error(quiz_id: String, message: String) -> Self {
        Self::new(quiz_id, message, WarningSeverity::Error)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WarningSeverity {
    /// 跨主題重複，依ID查詢有歧義
    Warning,
    /// 同一主題內重複，資料本身有誤
    Error,
}
