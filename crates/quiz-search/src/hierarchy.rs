//! 階層查詢
//!
//! 依序走訪 科目 → 班級 → 主題 → 測驗，找到第一個符合的測驗即返回。
//! 線性掃描，不建立索引也不快取。

use quiz_core::{Quiz, QuizConfig, Subject};

use crate::{DuplicateDetector, QuizLocation};

/// 階層查詢器
pub struct HierarchyIndex;

impl HierarchyIndex {
    /// 依走訪順序列出樹中所有測驗的位置
    pub fn locations(subjects: &[Subject]) -> impl Iterator<Item = QuizLocation<'_>> {
        subjects.iter().flat_map(|subject| {
            subject.classes.iter().flat_map(move |class| {
                class.topics.iter().flat_map(move |topic| {
                    topic
                        .quizzes
                        .iter()
                        .map(move |quiz| QuizLocation::new(subject, class, topic, quiz))
                })
            })
        })
    }

    /// 依ID查詢測驗
    ///
    /// ID 在整棵樹中可能重複，返回走訪順序中的第一個。空字串也是合法的查詢鍵。
    pub fn find_by_id<'a>(subjects: &'a [Subject], quiz_id: &str) -> Option<QuizLocation<'a>> {
        let found = Self::locations(subjects).find(|loc| loc.quiz.id == quiz_id);

        match &found {
            Some(loc) => tracing::debug!("找到測驗 {}: {}", quiz_id, loc.path()),
            None => tracing::debug!("找不到測驗: {}", quiz_id),
        }

        found
    }

    /// 依參照查詢測驗
    ///
    /// `target` 必須是借用自 `subjects` 的實體，比較的是位址而非ID，
    /// 因此即使ID重複也會返回該實體自己的上層鏈。
    pub fn find_by_reference<'a>(
        subjects: &'a [Subject],
        target: &Quiz,
    ) -> Option<QuizLocation<'a>> {
        let found = Self::locations(subjects).find(|loc| std::ptr::eq(loc.quiz, target));

        if found.is_none() {
            tracing::debug!("測驗實體不在此樹中: {}", target.id);
        }

        found
    }

    /// 依ID查詢，只返回測驗本身
    pub fn find_quiz_only<'a>(subjects: &'a [Subject], quiz_id: &str) -> Option<&'a Quiz> {
        Self::find_by_id(subjects, quiz_id).map(|loc| loc.quiz)
    }

    /// 依ID列出所有符合的測驗位置（走訪順序）
    pub fn find_all_by_id<'a>(subjects: &'a [Subject], quiz_id: &str) -> Vec<QuizLocation<'a>> {
        Self::locations(subjects)
            .filter(|loc| loc.quiz.id == quiz_id)
            .collect()
    }

    /// 依ID查詢，依配置檢查重複ID
    ///
    /// 返回值與 [`HierarchyIndex::find_by_id`] 相同。
    pub fn find_by_id_with_config<'a>(
        subjects: &'a [Subject],
        quiz_id: &str,
        config: &QuizConfig,
    ) -> Option<QuizLocation<'a>> {
        let found = Self::find_by_id(subjects, quiz_id)?;

        if config.detect_duplicate_ids {
            let matches = DuplicateDetector::count_matches(subjects, quiz_id);
            if matches > 1 {
                tracing::warn!(
                    "測驗ID {} 出現 {} 次，使用第一個: {}",
                    quiz_id,
                    matches,
                    found.path()
                );
            }
        }

        Some(found)
    }
}
