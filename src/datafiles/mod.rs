//! Módulo `datafiles`: lectura de la tabla de choques desde CSV u hojas de
//! cálculo, y escritura de la tabla podada.
//!
//! Submódulos:
//! - `io`: helpers de bajo nivel (celdas de calamine, filas de CSV, encabezados)
//! - `clashdb`: mapeo de filas a `ClashRecord` por nombre de columna

/// Helpers de IO y utilidades de parseo
pub mod io;

/// Tabla de choques: `read_clash_records`, `write_clash_csv`
pub mod clashdb;

pub use io::normalize_header;
pub use clashdb::{read_clash_records, records_from_rows, write_clash_csv, write_clash_csv_file, CLASH_HEADERS};
