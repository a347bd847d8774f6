//! Construcción del grafo de choques en dos pasadas.
//!
//! 1. `CourseIndex::discover`: asigna índices densos 0..V a los cursos en el
//!    orden en que aparecen y guarda el primer nombre visto de cada uno.
//! 2. `build_clash_graph`: reserva un `ConflictGraph` de exactamente V vértices
//!    y vuelve a recorrer los registros para insertar las aristas con su peso.
//!
//! Si algún registro es inválido no se devuelve grafo parcial.

use std::collections::HashMap;
use log::{debug, info, warn};
use crate::algorithm::graph::ConflictGraph;
use crate::error::{ClashError, ClashResult};
use crate::models::ClashRecord;

/// Biyección curso <-> vértice, inmutable una vez construida.
#[derive(Debug, Clone, Default)]
pub struct CourseIndex {
    forward: HashMap<String, usize>,
    reverse: Vec<String>,
    names: HashMap<String, String>,
}

fn check_course_id(row: usize, field: &str, value: &str) -> ClashResult<()> {
    if value.trim().is_empty() {
        return Err(ClashError::format(row, format!("el campo '{}' está vacío", field)));
    }
    Ok(())
}

fn parse_weight(row: usize, raw: &str) -> ClashResult<f64> {
    let w = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| ClashError::format(row, format!("'Total Students' no es numérico: '{}'", raw)))?;
    if !w.is_finite() || w < 0.0 {
        return Err(ClashError::format(row, format!("'Total Students' debe ser un número no negativo: '{}'", raw)));
    }
    Ok(w)
}

impl CourseIndex {
    /// Primera pasada: descubre los vértices.
    pub fn discover(records: &[ClashRecord]) -> ClashResult<CourseIndex> {
        let mut index = CourseIndex::default();
        for (i, record) in records.iter().enumerate() {
            let row = i + 1;
            check_course_id(row, "Main Course No", &record.main_course_no)?;
            check_course_id(row, "Detail Course No", &record.detail_course_no)?;
            for course in record.courses() {
                if !index.forward.contains_key(&course.id) {
                    let v = index.reverse.len();
                    index.forward.insert(course.id.clone(), v);
                    index.reverse.push(course.id.clone());
                }
                index.names.entry(course.id).or_insert(course.name);
            }
        }
        info!("📖 [builder] pasada 1: {} cursos distintos en {} registros", index.len(), records.len());
        Ok(index)
    }

    pub fn len(&self) -> usize {
        self.reverse.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reverse.is_empty()
    }

    pub fn vertex_of(&self, course_id: &str) -> Option<usize> {
        self.forward.get(course_id).copied()
    }

    pub fn course_of(&self, vertex: usize) -> Option<&str> {
        self.reverse.get(vertex).map(|s| s.as_str())
    }

    /// Nombre visible del curso (el primero que se vio en los registros).
    pub fn name_of(&self, course_id: &str) -> Option<&str> {
        self.names.get(course_id).map(|s| s.as_str())
    }

    /// Identificadores en orden de vértice.
    pub fn course_ids(&self) -> &[String] {
        &self.reverse
    }

    /// Curso más parecido a `course_id` (distancia de Levenshtein <= 3).
    pub fn suggest(&self, course_id: &str) -> Option<&str> {
        let needle = course_id.to_uppercase();
        self.reverse
            .iter()
            .map(|id| (strsim::levenshtein(&needle, &id.to_uppercase()), id))
            .filter(|(d, _)| *d <= 3)
            .min_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(b.1)))
            .map(|(_, id)| id.as_str())
    }
}

/// Grafo de choques congelado junto con su índice de cursos.
#[derive(Debug, Clone)]
pub struct ClashGraph {
    pub index: CourseIndex,
    pub graph: ConflictGraph,
}

impl ClashGraph {
    /// Cursos que chocan con `course_id` y cuántos alumnos comparten,
    /// de mayor a menor cantidad (empates por identificador).
    pub fn clashes_of(&self, course_id: &str) -> ClashResult<Vec<(String, f64)>> {
        let v = self.index.vertex_of(course_id).ok_or_else(|| ClashError::UnknownCourse {
            course: course_id.to_string(),
            suggestion: self.index.suggest(course_id).map(|s| s.to_string()),
        })?;
        let mut out: Vec<(String, f64)> = self
            .graph
            .weighted_neighbors(v)
            .filter_map(|(w, weight)| self.index.course_of(w).map(|id| (id.to_string(), weight)))
            .collect();
        out.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        Ok(out)
    }
}

/// Construye el grafo a partir de registros (normalmente ya deduplicados).
pub fn build_clash_graph(records: &[ClashRecord]) -> ClashResult<ClashGraph> {
    let index = CourseIndex::discover(records)?;

    // Validar todos los pesos antes de tocar el grafo
    let mut weights: Vec<f64> = Vec::with_capacity(records.len());
    for (i, record) in records.iter().enumerate() {
        weights.push(parse_weight(i + 1, &record.total_students)?);
    }

    let mut graph = ConflictGraph::with_vertices(index.len());
    for (i, (record, weight)) in records.iter().zip(weights).enumerate() {
        let row = i + 1;
        let (u, v) = match (index.vertex_of(&record.main_course_no), index.vertex_of(&record.detail_course_no)) {
            (Some(u), Some(v)) => (u, v),
            _ => return Err(ClashError::format(row, "curso no registrado en la primera pasada")),
        };
        if u == v {
            warn!("⚠️  [builder] registro {}: el curso '{}' choca consigo mismo, se ignora la arista", row, record.main_course_no);
            continue;
        }
        if !graph.add_edge(u, v, weight)? {
            debug!("[builder] registro {}: par {}-{} repetido, se conserva el primero", row, record.main_course_no, record.detail_course_no);
        }
    }

    info!("📖 [builder] pasada 2: {} vértices, {} aristas", graph.vertex_count(), graph.edge_count());
    Ok(ClashGraph { index, graph })
}
