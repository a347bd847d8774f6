//! Tipos de error del crate.
//!
//! Todas las operaciones falibles devuelven `ClashResult<T>`.

use thiserror::Error;

/// Error unificado para la construcción del grafo de choques y su coloreo.
#[derive(Debug, Error)]
pub enum ClashError {
    /// Un registro tiene un campo vacío o un peso que no es un número no negativo.
    #[error("formato inválido en el registro {row}: {message}")]
    Format { row: usize, message: String },

    /// Consulta de color para un vértice fuera de [0, V).
    #[error("vértice {vertex} fuera de rango (el grafo tiene {count} vértices)")]
    VertexOutOfRange { vertex: usize, count: usize },

    /// Curso que no aparece en el grafo.
    #[error("curso '{course}' no encontrado{}", suggestion_hint(.suggestion))]
    UnknownCourse {
        course: String,
        suggestion: Option<String>,
    },

    /// Falta una columna obligatoria en el archivo de datos.
    #[error("columna obligatoria '{0}' no encontrada en el encabezado")]
    MissingColumn(String),

    #[error("error de E/S: {0}")]
    Io(#[from] std::io::Error),

    #[error("error CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Fallos de calamine al abrir o leer una hoja de cálculo.
    #[error("error de hoja de cálculo: {0}")]
    Spreadsheet(String),

    #[error("error JSON: {0}")]
    Json(#[from] serde_json::Error),
}

fn suggestion_hint(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!(" (¿quiso decir '{}'?)", s),
        None => String::new(),
    }
}

impl ClashError {
    pub(crate) fn format(row: usize, message: impl Into<String>) -> Self {
        ClashError::Format {
            row,
            message: message.into(),
        }
    }
}

/// Alias de conveniencia para `Result<T, ClashError>`.
pub type ClashResult<T> = Result<T, ClashError>;
