//! 查詢與變更追蹤配置

use serde::{Deserialize, Serialize};

use crate::Result;

/// 數值比較方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberEquality {
    /// 轉為 f64 比較（`1` 與 `1.0` 相等），與文件資料庫的數值語義一致
    #[default]
    Numeric,

    /// 依表示法比較（整數與浮點數不相等）
    Exact,
}

/// 測驗模組配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    /// 依ID查詢時是否檢查重複ID並記錄警告
    ///
    /// 開啟後每次查詢都會多掃描一次整棵樹。
    pub detect_duplicate_ids: bool,

    /// 結構比較時的數值比較方式
    pub number_equality: NumberEquality,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            detect_duplicate_ids: false,
            number_equality: NumberEquality::Numeric,
        }
    }
}

impl QuizConfig {
    /// 創建預設配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 從 JSON 字串載入配置，缺少的欄位使用預設值
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// 建構器模式：設置是否檢查重複ID
    pub fn with_duplicate_detection(mut self, enabled: bool) -> Self {
        self.detect_duplicate_ids = enabled;
        self
    }

    /// 建構器模式：設置數值比較方式
    pub fn with_number_equality(mut self, mode: NumberEquality) -> Self {
        self.number_equality = mode;
        self
    }
}
