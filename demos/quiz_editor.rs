//! 測驗編輯範例
//!
//! 展示髒標記追蹤：編輯、放棄、儲存失敗與儲存成功

use quiz_hub::*;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("===== Quiz Editor Example =====\n");

    let quiz = Quiz::with_generated_id("Weekly Challenge".to_string()).with_time_limit(600);
    let mut tracker = DirtyTracker::new(quiz);
    println!("[1] Open quiz {} (dirty: {})", tracker.value().id, tracker.is_dirty());

    tracker.update(|q| q.title = "Weekly Challenge #2".to_string());
    println!("[2] Rename (dirty: {})", tracker.is_dirty());

    tracker.reset();
    println!("[3] Discard -> '{}' (dirty: {})", tracker.value().title, tracker.is_dirty());

    tracker.update(|q| {
        q.questions.push(Question::new(
            "Largest planet?".to_string(),
            vec!["Mars".to_string(), "Jupiter".to_string()],
            1,
        ));
        q.touch();
    });
    println!("[4] Add question (dirty: {})", tracker.is_dirty());

    if !tracker.value().is_playable() {
        let malformed = tracker
            .value()
            .questions
            .iter()
            .filter(|q| !q.is_well_formed())
            .count();
        println!("    Not playable ({} malformed questions), keep editing", malformed);
        return Ok(());
    }

    let failed: Result<(), String> = tracker.commit_with(|_| Err("offline".to_string()));
    println!("[5] Save failed: {:?} (dirty: {})", failed.err(), tracker.is_dirty());

    tracker.commit_with(|q| {
        let json = serde_json::to_string_pretty(q)?;
        println!("{}", json);
        Ok::<(), serde_json::Error>(())
    })?;
    if let Some(updated_at) = tracker.baseline().updated_at {
        println!("[6] Saved at {} (dirty: {})", updated_at.format("%Y-%m-%d %H:%M:%S"), tracker.is_dirty());
    }

    Ok(())
}
