//! 科目模型

use serde::{Deserialize, Serialize};

use crate::Class;

/// 科目（樹的根層）
///
/// `id` 在根集合中唯一。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    /// 科目ID
    pub id: String,

    /// 名稱
    #[serde(default)]
    pub name: String,

    /// 班級（有序）
    #[serde(default, deserialize_with = "crate::serde_util::null_as_empty")]
    pub classes: Vec<Class>,
}

impl Subject {
    /// 創建新的科目
    pub fn new(id: String, name: String) -> Self {
        Self {
            id,
            name,
            classes: Vec::new(),
        }
    }

    /// 建構器模式：添加班級
    pub fn with_class(mut self, class: Class) -> Self {
        self.classes.push(class);
        self
    }

    /// 科目下所有測驗總數
    pub fn quiz_count(&self) -> usize {
        self.classes.iter().map(Class::quiz_count).sum()
    }
}
