use calamine::{open_workbook_auto, Data, Reader};
use csv::ReaderBuilder;
use std::path::Path;
use log::debug;
use crate::error::{ClashError, ClashResult};

/// Convierte una celda de calamine a String.
/// Los flotantes enteros se escriben sin ".0" (p.ej. 12.0 -> "12").
pub fn cell_to_string(c: &Data) -> String {
    match c {
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) => {
            if (f.floor() - f).abs() < f64::EPSILON {
                format!("{}", *f as i64)
            } else {
                format!("{}", f)
            }
        }
        Data::Int(i) => format!("{}", i),
        Data::Bool(b) => format!("{}", b),
        Data::Empty => String::new(),
        Data::Error(_) => String::new(),
        Data::DateTime(s) => s.to_string(),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
    }
}

/// Normaliza encabezados eliminando espacios y pasando a minúsculas.
pub fn normalize_header(s: &str) -> String {
    s.to_lowercase().chars().filter(|c| !c.is_whitespace()).collect()
}

/// Lee una hoja de cálculo (xlsx, xls, ods) como Vec<Vec<String>>.
/// Usa la hoja `sheet` si existe; si no, la primera.
pub fn read_spreadsheet_rows<P: AsRef<Path>>(path: P, sheet: Option<&str>) -> ClashResult<Vec<Vec<String>>> {
    let mut workbook = open_workbook_auto(path.as_ref()).map_err(|e| ClashError::Spreadsheet(e.to_string()))?;

    let names = workbook.sheet_names().to_owned();
    let sheet_to_use = match sheet {
        Some(wanted) if names.iter().any(|s| s == wanted) => wanted.to_string(),
        _ => match names.first() {
            Some(first) => first.clone(),
            None => return Ok(Vec::new()),
        },
    };
    debug!("[datafiles] leyendo hoja '{}' de {}", sheet_to_use, path.as_ref().display());

    let range = workbook
        .worksheet_range(&sheet_to_use)
        .map_err(|e| ClashError::Spreadsheet(e.to_string()))?;
    Ok(range.rows().map(|r| r.iter().map(cell_to_string).collect()).collect())
}

/// Lee un CSV (RFC 4180) como Vec<Vec<String>>, encabezado incluido.
pub fn read_csv_rows<P: AsRef<Path>>(path: P) -> ClashResult<Vec<Vec<String>>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path.as_ref())?;
    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(|f| f.to_string()).collect());
    }
    Ok(rows)
}

/// Elige el lector según la extensión: `.csv` (o sin extensión) vía csv, el resto vía calamine.
pub fn read_rows<P: AsRef<Path>>(path: P, sheet: Option<&str>) -> ClashResult<Vec<Vec<String>>> {
    let ext = path
        .as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => read_spreadsheet_rows(path, sheet),
        _ => read_csv_rows(path),
    }
}
