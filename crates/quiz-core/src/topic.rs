//! 主題模型

use serde::{Deserialize, Serialize};

use crate::Quiz;

/// 主題（班級下的分組）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    /// 主題ID
    pub id: String,

    /// 名稱
    #[serde(default)]
    pub name: String,

    /// 測驗（有序）
    ///
    /// 文件缺少此欄位或為 `null` 時視為空序列。
    #[serde(default, deserialize_with = "crate::serde_util::null_as_empty")]
    pub quizzes: Vec<Quiz>,
}

impl Topic {
    /// 創建新的主題
    pub fn new(id: String, name: String) -> Self {
        Self {
            id,
            name,
            quizzes: Vec::new(),
        }
    }

    /// 建構器模式：添加測驗
    pub fn with_quiz(mut self, quiz: Quiz) -> Self {
        self.quizzes.push(quiz);
        self
    }

    /// 測驗數量
    pub fn quiz_count(&self) -> usize {
        self.quizzes.len()
    }
}
