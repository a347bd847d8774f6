// Lectura y escritura de la tabla de choques (clashdb).
use std::collections::HashMap;
use std::io::Write;
use std::path::Path;
use csv::WriterBuilder;
use log::info;
use crate::datafiles::io::{normalize_header, read_rows};
use crate::error::{ClashError, ClashResult};
use crate::models::ClashRecord;

/// Encabezados en el orden en que se escribe la tabla podada.
pub const CLASH_HEADERS: [&str; 7] = [
    "Academic Year",
    "Department Name",
    "Main Course No",
    "Main Course Name",
    "Detail Course No",
    "Detail Course Name",
    "Total Students",
];

const REQUIRED: [&str; 3] = ["Main Course No", "Detail Course No", "Total Students"];

/// Convierte filas crudas (la primera es el encabezado) en `ClashRecord`s.
///
/// Las columnas se buscan por nombre normalizado, así "Main course Name" y
/// "Main Course Name" son la misma. Las filas totalmente vacías se saltan.
pub fn records_from_rows(rows: Vec<Vec<String>>) -> ClashResult<Vec<ClashRecord>> {
    let mut iter = rows.into_iter();
    let header = match iter.next() {
        Some(h) => h,
        None => return Ok(Vec::new()),
    };

    let positions: HashMap<String, usize> = header
        .iter()
        .enumerate()
        .map(|(i, h)| (normalize_header(h), i))
        .collect();
    for name in REQUIRED {
        if !positions.contains_key(&normalize_header(name)) {
            return Err(ClashError::MissingColumn(name.to_string()));
        }
    }
    let column = |name: &str| positions.get(&normalize_header(name)).copied();
    let cols: Vec<Option<usize>> = CLASH_HEADERS.iter().map(|h| column(*h)).collect();

    let mut records = Vec::new();
    for row in iter {
        if row.iter().all(|c| c.trim().is_empty()) {
            continue;
        }
        let field = |k: usize| -> String {
            cols[k].and_then(|i| row.get(i)).map(|s| s.trim().to_string()).unwrap_or_default()
        };
        records.push(ClashRecord {
            academic_year: field(0),
            department_name: field(1),
            main_course_no: field(2),
            main_course_name: field(3),
            detail_course_no: field(4),
            detail_course_name: field(5),
            total_students: field(6),
        });
    }
    Ok(records)
}

/// Lee registros de choque desde un CSV o una hoja de cálculo.
pub fn read_clash_records<P: AsRef<Path>>(path: P, sheet: Option<&str>) -> ClashResult<Vec<ClashRecord>> {
    let rows = read_rows(path.as_ref(), sheet)?;
    let records = records_from_rows(rows)?;
    info!("📖 [datafiles] {} registros leídos desde {}", records.len(), path.as_ref().display());
    Ok(records)
}

/// Escribe los registros como CSV con el encabezado de `CLASH_HEADERS`.
pub fn write_clash_csv<W: Write>(out: W, records: &[ClashRecord]) -> ClashResult<()> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(out);
    writer.write_record(CLASH_HEADERS)?;
    for r in records {
        writer.write_record([
            &r.academic_year,
            &r.department_name,
            &r.main_course_no,
            &r.main_course_name,
            &r.detail_course_no,
            &r.detail_course_name,
            &r.total_students,
        ])?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_clash_csv_file<P: AsRef<Path>>(path: P, records: &[ClashRecord]) -> ClashResult<()> {
    let file = std::fs::File::create(path.as_ref())?;
    write_clash_csv(file, records)?;
    info!("💾 [datafiles] {} registros escritos en {}", records.len(), path.as_ref().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_records_from_rows_by_header() {
        let rows = vec![
            row(&["Total Students", "Main Course No", "Main course Name", "Detail Course No"]),
            row(&["5", "A", "Álgebra", "B"]),
            row(&["", "", "", ""]),
        ];
        let records = records_from_rows(rows).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].main_course_no, "A");
        assert_eq!(records[0].main_course_name, "Álgebra");
        assert_eq!(records[0].detail_course_no, "B");
        assert_eq!(records[0].detail_course_name, "");
        assert_eq!(records[0].total_students, "5");
    }

    #[test]
    fn test_records_from_rows_missing_column() {
        let rows = vec![row(&["Main Course No", "Detail Course No"])];
        assert!(matches!(records_from_rows(rows), Err(ClashError::MissingColumn(c)) if c == "Total Students"));
    }

    #[test]
    fn test_records_from_rows_empty() {
        assert!(records_from_rows(Vec::new()).unwrap().is_empty());
    }
}
