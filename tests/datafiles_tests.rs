use std::env;
use std::fs;

use clashgraph::algorithm::dedup_clashes;
use clashgraph::datafiles::{read_clash_records, write_clash_csv, write_clash_csv_file, CLASH_HEADERS};
use clashgraph::models::ClashRecord;
use clashgraph::ClashError;

// Encabezado tal como viene en la base original ("Main course Name" en minúscula)
const CLASHDB: &str = "\
Academic Year,Department Name,Main Course No,Main course Name,Detail Course No,Detail Course Name,Total Students
2017,IT,ITBS2203,Data Structures,ITBS1101,\"Programming, I\",12
2017,IT,ITBS1101,\"Programming, I\",ITBS2203,Data Structures,12
2017,IT,ITBS2203,Data Structures,MATH1101,Calculus,4
";

#[test]
fn test_read_clash_csv_with_original_header() {
    let path = env::temp_dir().join("clashgraph_read_test.csv");
    fs::write(&path, CLASHDB).expect("write tmp csv");

    let records = read_clash_records(&path, None).expect("read clash csv");
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].main_course_name, "Data Structures");
    assert_eq!(records[0].detail_course_name, "Programming, I");
    assert_eq!(records[2].total_students, "4");
}

#[test]
fn test_prune_roundtrip_through_file() {
    let input = env::temp_dir().join("clashgraph_prune_in.csv");
    let output = env::temp_dir().join("clashgraph_prune_out.csv");
    fs::write(&input, CLASHDB).expect("write tmp csv");

    let pruned = dedup_clashes(read_clash_records(&input, None).unwrap());
    write_clash_csv_file(&output, &pruned).unwrap();

    let text = fs::read_to_string(&output).unwrap();
    let first_line = text.lines().next().unwrap();
    assert_eq!(first_line, CLASH_HEADERS.join(","));
    assert_eq!(text.lines().count(), 3);

    let reread = read_clash_records(&output, None).unwrap();
    assert_eq!(reread, pruned);
}

#[test]
fn test_write_quotes_commas() {
    let mut buf: Vec<u8> = Vec::new();
    let rec = ClashRecord::named(("A1", "Intro, Parte 1"), ("B2", "Física"), "3");
    write_clash_csv(&mut buf, &[rec]).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert!(text.contains("\"Intro, Parte 1\""));
}

#[test]
fn test_missing_required_column() {
    let path = env::temp_dir().join("clashgraph_missing_col.csv");
    fs::write(&path, "Main Course No,Detail Course No\nA,B\n").expect("write tmp csv");
    assert!(matches!(read_clash_records(&path, None), Err(ClashError::MissingColumn(_))));
}

#[test]
fn test_missing_file_fails() {
    let path = env::temp_dir().join("clashgraph_no_such_file.csv");
    let _ = fs::remove_file(&path);
    assert!(read_clash_records(&path, None).is_err());
}
