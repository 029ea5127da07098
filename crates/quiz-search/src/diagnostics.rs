//! 重複ID檢查

use quiz_core::Subject;
use std::collections::HashMap;

use crate::{HierarchyIndex, SearchWarning};

/// 重複ID檢查器
///
/// 測驗ID只保證在主題內唯一。跨主題重複時依ID查詢只會拿到第一個，
/// 這裡把這類情況列出來讓呼叫端決定是否改用參照查詢。
pub struct DuplicateDetector;

impl DuplicateDetector {
    /// 列出重複的測驗ID，依第一次出現的順序
    ///
    /// 跨主題重複為 `Warning`；同一主題內重複違反資料約束，為 `Error`。
    pub fn duplicate_quiz_ids(subjects: &[Subject]) -> Vec<SearchWarning> {
        let mut order: Vec<&str> = Vec::new();
        let mut paths: HashMap<&str, Vec<String>> = HashMap::new();

        for loc in HierarchyIndex::locations(subjects) {
            let id = loc.quiz.id.as_str();
            let entry = paths.entry(id).or_insert_with(|| {
                order.push(id);
                Vec::new()
            });
            entry.push(loc.topic_path());
        }

        let warnings: Vec<SearchWarning> = order
            .into_iter()
            .filter_map(|id| {
                let topic_paths = paths.get(id)?;
                if topic_paths.len() < 2 {
                    return None;
                }
                let message = format!("測驗ID重複出現於: {}", topic_paths.join(", "));
                let within_topic = topic_paths
                    .iter()
                    .enumerate()
                    .any(|(i, path)| topic_paths[..i].contains(path));
                if within_topic {
                    Some(SearchWarning::error(id.to_string(), message))
                } else {
                    Some(SearchWarning::warning(id.to_string(), message))
                }
            })
            .collect();

        if !warnings.is_empty() {
            tracing::debug!("重複的測驗ID數量: {}", warnings.len());
        }

        warnings
    }

    /// 樹中ID等於 `quiz_id` 的測驗數量
    pub fn count_matches(subjects: &[Subject], quiz_id: &str) -> usize {
        HierarchyIndex::locations(subjects)
            .filter(|loc| loc.quiz.id == quiz_id)
            .count()
    }

    /// 樹中是否沒有任何重複ID
    pub fn is_unique(subjects: &[Subject]) -> bool {
        Self::duplicate_quiz_ids(subjects).is_empty()
    }
}
