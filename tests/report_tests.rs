use clashgraph::models::ClashRecord;
use clashgraph::report::{colored_courses, exam_slots, to_dot, ExamSlot, ScheduleSummary};
use clashgraph::schedule_exams;

fn sample() -> Vec<ClashRecord> {
    vec![
        ClashRecord::named(("A", "Álgebra"), ("B", "Bases"), "5"),
        ClashRecord::named(("B", "Bases"), ("C", "Cálculo"), "3"),
        ClashRecord::named(("D", "Dibujo"), ("B", "Bases"), "1"),
    ]
}

#[test]
fn test_colored_courses_in_vertex_order() {
    let (cg, coloring) = schedule_exams(sample()).unwrap();
    let rows = colored_courses(&cg, &coloring);
    let ids: Vec<&str> = rows.iter().map(|r| r.course_id.as_str()).collect();
    assert_eq!(ids, vec!["A", "B", "C", "D"]);
    // B es el de mayor grado: abre el color 0; el resto comparte el 1
    assert_eq!(rows.iter().map(|r| r.color).collect::<Vec<_>>(), vec![1, 0, 1, 1]);
    assert_eq!(rows[2].course_name, "Cálculo");
}

#[test]
fn test_exam_slots_group_courses() {
    let (cg, coloring) = schedule_exams(sample()).unwrap();
    let slots = exam_slots(&cg, &coloring);
    assert_eq!(
        slots,
        vec![
            ExamSlot { slot: 0, courses: vec!["B".to_string()] },
            ExamSlot { slot: 1, courses: vec!["A".to_string(), "C".to_string(), "D".to_string()] },
        ]
    );
}

#[test]
fn test_summary_text_and_json() {
    let (cg, coloring) = schedule_exams(sample()).unwrap();
    let summary = ScheduleSummary::new(&cg, &coloring);
    assert_eq!(summary.course_count, 4);
    assert_eq!(summary.clash_count, 3);
    assert_eq!(summary.max_degree, 3);
    assert_eq!(summary.colors_used, 2);

    let text = summary.to_text();
    assert_eq!(text.lines().next(), Some("A Álgebra, 1"));

    let json: serde_json::Value = serde_json::from_str(&summary.to_json().unwrap()).unwrap();
    assert_eq!(json["colors_used"], 2);
    assert_eq!(json["courses"][1]["course_id"], "B");
    assert!(json["generated_at"].is_string());
}

#[test]
fn test_dot_export_mentions_courses() {
    let (cg, coloring) = schedule_exams(sample()).unwrap();
    let dot = to_dot(&cg, &coloring);
    assert!(dot.starts_with("graph {"));
    assert!(dot.contains("\"Álgebra\"") || dot.contains("\"A\""));
    assert!(dot.contains("--"));
    assert!(dot.contains("fillcolor=1"));
}
