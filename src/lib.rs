// Biblioteca raíz del crate `clashgraph`.
// Convierte la tabla de choques de exámenes en un grafo de conflictos y lo
// colorea con Welsh-Powell: cursos con el mismo color pueden rendir en la
// misma franja. `schedule_exams` orquesta el flujo principal.
pub mod error;
pub mod models;
pub mod algorithm;
pub mod datafiles;
pub mod report;
pub mod config;

pub use error::{ClashError, ClashResult};
pub use algorithm::schedule_exams;
