//! 測驗模型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 測驗題目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// 題幹
    pub prompt: String,

    /// 選項
    #[serde(default)]
    pub options: Vec<String>,

    /// 正確選項索引
    pub correct_option: usize,
}

impl Question {
    /// 創建新的題目
    pub fn new(prompt: String, options: Vec<String>, correct_option: usize) -> Self {
        Self {
            prompt,
            options,
            correct_option,
        }
    }

    /// 正確選項索引是否落在選項範圍內
    pub fn is_well_formed(&self) -> bool {
        self.correct_option < self.options.len()
    }
}

/// 測驗（樹的葉節點）
///
/// `id` 只保證在所屬主題內唯一，整棵樹中可能重複。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quiz {
    /// 測驗ID
    pub id: String,

    /// 標題
    #[serde(default)]
    pub title: String,

    /// 說明
    #[serde(default)]
    pub description: Option<String>,

    /// 題目
    #[serde(default)]
    pub questions: Vec<Question>,

    /// 作答時限（秒）
    #[serde(default)]
    pub time_limit_secs: Option<u32>,

    /// 最後修改時間
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Quiz {
    /// 創建新的測驗
    pub fn new(id: String, title: String) -> Self {
        Self {
            id,
            title,
            description: None,
            questions: Vec::new(),
            time_limit_secs: None,
            updated_at: None,
        }
    }

    /// 以隨機 UUID 作為ID創建測驗
    pub fn with_generated_id(title: String) -> Self {
        Self::new(Uuid::new_v4().to_string(), title)
    }

    /// 建構器模式：設置說明
    pub fn with_description(mut self, description: String) -> Self {
        self.description = Some(description);
        self
    }

    /// 建構器模式：添加題目
    pub fn with_question(mut self, question: Question) -> Self {
        self.questions.push(question);
        self
    }

    /// 建構器模式：設置作答時限
    pub fn with_time_limit(mut self, secs: u32) -> Self {
        self.time_limit_secs = Some(secs);
        self
    }

    /// 更新最後修改時間為現在
    pub fn touch(&mut self) {
        self.updated_at = Some(Utc::now());
    }

    /// 題目數量
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// 所有題目是否都有效
    pub fn is_playable(&self) -> bool {
        !self.questions.is_empty() && self.questions.iter().all(Question::is_well_formed)
    }
}
