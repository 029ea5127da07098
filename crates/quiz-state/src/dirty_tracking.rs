//! 髒標記追蹤

use quiz_core::{NumberEquality, QuizConfig, Result};
use serde::Serialize;

use crate::structural::structurally_equal_with;

/// 髒標記追蹤器
///
/// 保存最後一次儲存的基準值與目前編輯中的值，每次設值都立即重新比較。
/// 基準值只會被 [`DirtyTracker::mark_as_saved`] 或 [`DirtyTracker::reset`] 改變。
#[derive(Debug, Clone)]
pub struct DirtyTracker<T> {
    baseline: T,
    current: T,
    dirty: bool,
    number_equality: NumberEquality,
}

impl<T: Serialize + Clone> DirtyTracker<T> {
    /// 創建新的追蹤器，基準值與目前值都是 `initial`
    pub fn new(initial: T) -> Self {
        Self::with_number_equality(initial, NumberEquality::default())
    }

    /// 依配置創建追蹤器
    pub fn with_config(initial: T, config: &QuizConfig) -> Self {
        Self::with_number_equality(initial, config.number_equality)
    }

    fn with_number_equality(initial: T, number_equality: NumberEquality) -> Self {
        Self {
            baseline: initial.clone(),
            current: initial,
            dirty: false,
            number_equality,
        }
    }

    /// 目前值
    pub fn value(&self) -> &T {
        &self.current
    }

    /// 最後一次儲存的基準值
    pub fn baseline(&self) -> &T {
        &self.baseline
    }

    /// 目前值是否與基準值不同
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// 設置目前值並重新比較
    ///
    /// 無法序列化時視為有變更。
    pub fn set_value(&mut self, value: T) {
        self.current = value;
        self.dirty = match self.compare() {
            Ok(dirty) => dirty,
            Err(e) => {
                tracing::warn!("結構比較失敗，視為有變更: {}", e);
                true
            }
        };
    }

    /// 設置目前值並重新比較，比較失敗時返回錯誤
    ///
    /// 失敗時目前值已更新，髒標記設為 `true`。
    pub fn try_set_value(&mut self, value: T) -> Result<bool> {
        self.current = value;
        match self.compare() {
            Ok(dirty) => {
                self.dirty = dirty;
                Ok(dirty)
            }
            Err(e) => {
                self.dirty = true;
                Err(e)
            }
        }
    }

    /// 就地修改目前值後重新比較
    pub fn update<F>(&mut self, edit: F)
    where
        F: FnOnce(&mut T),
    {
        let mut next = self.current.clone();
        edit(&mut next);
        self.set_value(next);
    }

    /// 放棄變更，目前值還原為基準值
    pub fn reset(&mut self) {
        self.current = self.baseline.clone();
        self.dirty = false;
    }

    /// 以目前值作為新的基準值
    ///
    /// 只能在外部儲存確認成功後呼叫，否則儲存失敗的資料也會被標為已儲存。
    /// 需要把儲存結果和提交綁在一起時使用 [`DirtyTracker::commit_with`]。
    pub fn mark_as_saved(&mut self) {
        self.baseline = self.current.clone();
        self.dirty = false;
    }

    /// 執行儲存，成功才提交基準值
    ///
    /// 儲存失敗時基準值與髒標記都不變，錯誤原樣返回。
    pub fn commit_with<F, E>(&mut self, save: F) -> std::result::Result<(), E>
    where
        F: FnOnce(&T) -> std::result::Result<(), E>,
    {
        save(&self.current)?;
        self.mark_as_saved();
        tracing::debug!("變更已儲存並提交");
        Ok(())
    }

    fn compare(&self) -> Result<bool> {
        let equal = structurally_equal_with(&self.current, &self.baseline, self.number_equality)?;
        Ok(!equal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::{Question, Quiz};
    use rstest::{fixture, rstest};
    use std::collections::{BTreeMap, HashMap};

    #[fixture]
    fn quiz() -> Quiz {
        Quiz::new("Q-001".to_string(), "加法".to_string()).with_question(Question::new(
            "1 + 1 = ?".to_string(),
            vec!["1".to_string(), "2".to_string()],
            1,
        ))
    }

    #[rstest]
    fn test_new_tracker_is_clean(quiz: Quiz) {
        let tracker = DirtyTracker::new(quiz.clone());

        assert!(!tracker.is_dirty());
        assert_eq!(tracker.value(), &quiz);
        assert_eq!(tracker.baseline(), &quiz);
    }

    #[rstest]
    fn test_set_value_marks_dirty(quiz: Quiz) {
        let mut tracker = DirtyTracker::new(quiz.clone());

        let mut edited = quiz;
        edited.title = "加法（修訂）".to_string();
        tracker.set_value(edited);

        assert!(tracker.is_dirty());
    }

    #[rstest]
    fn test_set_equal_value_stays_clean(quiz: Quiz) {
        let mut tracker = DirtyTracker::new(quiz.clone());

        tracker.set_value(quiz.clone());
        assert!(!tracker.is_dirty());

        // 改了又改回來
        let mut edited = quiz.clone();
        edited.time_limit_secs = Some(30);
        tracker.set_value(edited);
        assert!(tracker.is_dirty());
        tracker.set_value(quiz);
        assert!(!tracker.is_dirty());
    }

    #[rstest]
    fn test_reset_restores_baseline(quiz: Quiz) {
        let mut tracker = DirtyTracker::new(quiz.clone());

        tracker.update(|q| q.questions.clear());
        assert!(tracker.is_dirty());

        tracker.reset();
        assert!(!tracker.is_dirty());
        assert_eq!(tracker.value(), &quiz);
    }

    #[rstest]
    fn test_mark_as_saved_moves_baseline(quiz: Quiz) {
        let mut tracker = DirtyTracker::new(quiz.clone());

        tracker.update(|q| q.description = Some("新說明".to_string()));
        let saved = tracker.value().clone();
        tracker.mark_as_saved();
        assert!(!tracker.is_dirty());
        assert_eq!(tracker.baseline(), &saved);

        tracker.update(|q| q.title = "再改".to_string());
        tracker.reset();
        assert_eq!(tracker.value(), &saved);
        assert_ne!(tracker.value(), &quiz);
    }

    #[rstest]
    fn test_commit_with_success(quiz: Quiz) {
        let mut tracker = DirtyTracker::new(quiz);
        tracker.update(|q| q.title = "已儲存".to_string());

        let mut stored = None;
        let result: std::result::Result<(), String> = tracker.commit_with(|q| {
            stored = Some(q.title.clone());
            Ok(())
        });

        assert!(result.is_ok());
        assert_eq!(stored, Some("已儲存".to_string()));
        assert!(!tracker.is_dirty());
        assert_eq!(tracker.baseline().title, "已儲存");
    }

    #[rstest]
    fn test_commit_with_failure_keeps_dirty(quiz: Quiz) {
        let mut tracker = DirtyTracker::new(quiz.clone());
        tracker.update(|q| q.title = "未儲存".to_string());

        let result = tracker.commit_with(|_| Err("網路錯誤"));

        assert_eq!(result, Err("網路錯誤"));
        assert!(tracker.is_dirty());
        assert_eq!(tracker.baseline(), &quiz);
        assert_eq!(tracker.value().title, "未儲存");
    }

    #[test]
    fn test_sequence_order_matters() {
        let mut tracker = DirtyTracker::new(vec![1, 2]);

        tracker.set_value(vec![2, 1]);
        assert!(tracker.is_dirty());
    }

    #[test]
    fn test_map_order_does_not_matter() {
        let mut initial = HashMap::new();
        initial.insert("a".to_string(), 1);
        initial.insert("b".to_string(), 2);
        let mut tracker = DirtyTracker::new(initial);

        let mut next = HashMap::new();
        next.insert("b".to_string(), 2);
        next.insert("a".to_string(), 1);
        tracker.set_value(next);

        assert!(!tracker.is_dirty());
    }

    #[rstest]
    #[case(NumberEquality::Numeric, false)]
    #[case(NumberEquality::Exact, true)]
    fn test_number_equality_from_config(#[case] mode: NumberEquality, #[case] expected: bool) {
        let config = QuizConfig::new().with_number_equality(mode);
        let mut tracker = DirtyTracker::with_config(serde_json::json!({"score": 1}), &config);

        tracker.set_value(serde_json::json!({"score": 1.0}));
        assert_eq!(tracker.is_dirty(), expected);
    }

    #[test]
    fn test_unserializable_value_reports_dirty() {
        let mut initial: BTreeMap<(u8, u8), u8> = BTreeMap::new();
        initial.insert((0, 0), 1);
        let mut tracker = DirtyTracker::new(initial.clone());

        tracker.set_value(initial.clone());
        assert!(tracker.is_dirty());

        assert!(tracker.try_set_value(initial).is_err());
        assert!(tracker.is_dirty());

        tracker.reset();
        assert!(!tracker.is_dirty());
    }

    #[test]
    fn test_try_set_value() {
        let mut tracker = DirtyTracker::new("草稿".to_string());

        assert!(tracker.try_set_value("定稿".to_string()).unwrap());
        assert!(!tracker.try_set_value("草稿".to_string()).unwrap());
    }
}
