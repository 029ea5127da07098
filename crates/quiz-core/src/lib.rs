//! # Quiz Core
//!
//! 核心資料模型與類型定義（科目 → 班級 → 主題 → 測驗）

pub mod class;
pub mod config;
pub mod quiz;
pub mod serde_util;
pub mod subject;
pub mod topic;

// Re-export 主要類型
pub use class::Class;
pub use config::{NumberEquality, QuizConfig};
pub use quiz::{Question, Quiz};
pub use subject::Subject;
pub use topic::Topic;

/// 測驗模組錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    #[error("序列化錯誤: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, QuizError>;
