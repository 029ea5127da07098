//! 科目樹查詢範例
//!
//! 展示依ID查詢、依參照查詢與重複ID檢查

use quiz_hub::*;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("===== Quiz Lookup Example =====\n");

    // 步驟 1: 建立科目樹
    println!("[1] Build Subject Tree");
    let subjects = create_subjects();
    for subject in &subjects {
        println!("    {}: {} quizzes", subject.id, subject.quiz_count());
    }
    println!();

    // 步驟 2: 依ID查詢
    println!("[2] Find By ID");
    for quiz_id in ["fractions", "intro", "missing"] {
        match HierarchyIndex::find_by_id(&subjects, quiz_id) {
            Some(loc) => println!("    {} -> {} ({})", quiz_id, loc.path(), loc.quiz.title),
            None => println!("    {} -> not found", quiz_id),
        }
    }
    println!();

    // 步驟 3: 依參照查詢（ID 重複時取得正確的上層鏈）
    println!("[3] Find By Reference");
    let selected = &subjects[1].classes[0].topics[0].quizzes[0];
    if let Some(loc) = HierarchyIndex::find_by_reference(&subjects, selected) {
        println!("    selected '{}' -> {}", selected.title, loc.path());
    }
    println!();

    // 步驟 4: 重複ID檢查
    println!("[4] Duplicate IDs");
    for warning in DuplicateDetector::duplicate_quiz_ids(&subjects) {
        let label = match warning.severity {
            WarningSeverity::Warning => "WARN",
            WarningSeverity::Error => "ERROR",
        };
        println!("    [{}] {}: {}", label, warning.quiz_id, warning.message);
    }

    let config = QuizConfig::new().with_duplicate_detection(true);
    if let Some(loc) = HierarchyIndex::find_by_id_with_config(&subjects, "intro", &config) {
        println!("    intro (checked) -> {} ({})", loc.path(), loc.quiz.title);
    }

    Ok(())
}

fn create_subjects() -> Vec<Subject> {
    let math = Subject::new("math".to_string(), "數學".to_string()).with_class(
        Class::new("g3".to_string(), "三年級".to_string())
            .with_topic(
                Topic::new("basics".to_string(), "基礎".to_string())
                    .with_quiz(Quiz::new("intro".to_string(), "數學入門".to_string())),
            )
            .with_topic(
                Topic::new("fractions".to_string(), "分數".to_string()).with_quiz(
                    Quiz::new("fractions".to_string(), "分數練習".to_string())
                        .with_time_limit(300)
                        .with_question(Question::new(
                            "1/2 + 1/4 = ?".to_string(),
                            vec!["2/6".to_string(), "3/4".to_string()],
                            1,
                        )),
                ),
            ),
    );

    let science = Subject::new("science".to_string(), "自然".to_string()).with_class(
        Class::new("g3".to_string(), "三年級".to_string()).with_topic(
            Topic::new("plants".to_string(), "植物".to_string())
                .with_quiz(Quiz::new("intro".to_string(), "植物入門".to_string())),
        ),
    );

    vec![math, science]
}
