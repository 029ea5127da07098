//! 班級模型

use serde::{Deserialize, Serialize};

use crate::Topic;

/// 班級（科目下的分組）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Class {
    /// 班級ID
    pub id: String,

    /// 名稱
    #[serde(default)]
    pub name: String,

    /// 主題（有序）
    #[serde(default, deserialize_with = "crate::serde_util::null_as_empty")]
    pub topics: Vec<Topic>,
}

impl Class {
    /// 創建新的班級
    pub fn new(id: String, name: String) -> Self {
        Self {
            id,
            name,
            topics: Vec::new(),
        }
    }

    /// 建構器模式：添加主題
    pub fn with_topic(mut self, topic: Topic) -> Self {
        self.topics.push(topic);
        self
    }

    /// 班級下所有主題的測驗總數
    pub fn quiz_count(&self) -> usize {
        self.topics.iter().map(Topic::quiz_count).sum()
    }
}
