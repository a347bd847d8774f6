//! Reporte del coloreo: une los colores con los mapas id <-> nombre.
//!
//! Un color equivale a una franja de examen. Este módulo sólo arma las
//! estructuras y sus representaciones (texto, JSON, DOT); escribirlas en
//! disco o consola le corresponde a quien llama.

use chrono::{DateTime, Utc};
use petgraph::dot::Dot;
use petgraph::graph::{NodeIndex, UnGraph};
use serde::Serialize;
use crate::algorithm::{ClashGraph, Coloring};
use crate::error::ClashResult;
use crate::models::ColoredCourse;

/// Cursos que comparten una franja (color).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExamSlot {
    pub slot: usize,
    pub courses: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScheduleSummary {
    pub generated_at: DateTime<Utc>,
    pub course_count: usize,
    pub clash_count: usize,
    pub max_degree: usize,
    pub colors_used: usize,
    pub slots: Vec<ExamSlot>,
    pub courses: Vec<ColoredCourse>,
}

/// Una fila por curso, en orden de vértice.
pub fn colored_courses(clash_graph: &ClashGraph, coloring: &Coloring) -> Vec<ColoredCourse> {
    clash_graph
        .index
        .course_ids()
        .iter()
        .zip(coloring.colors())
        .enumerate()
        .map(|(v, (id, &color))| ColoredCourse {
            vertex: v,
            course_id: id.clone(),
            course_name: clash_graph.index.name_of(id).unwrap_or_default().to_string(),
            color,
        })
        .collect()
}

/// Agrupa los cursos por color; franja = color.
pub fn exam_slots(clash_graph: &ClashGraph, coloring: &Coloring) -> Vec<ExamSlot> {
    coloring
        .classes()
        .into_iter()
        .enumerate()
        .map(|(slot, vertices)| ExamSlot {
            slot,
            courses: vertices
                .iter()
                .filter_map(|&v| clash_graph.index.course_of(v).map(|s| s.to_string()))
                .collect(),
        })
        .collect()
}

impl ScheduleSummary {
    pub fn new(clash_graph: &ClashGraph, coloring: &Coloring) -> Self {
        ScheduleSummary {
            generated_at: Utc::now(),
            course_count: clash_graph.graph.vertex_count(),
            clash_count: clash_graph.graph.edge_count(),
            max_degree: clash_graph.graph.max_degree(),
            colors_used: coloring.color_count(),
            slots: exam_slots(clash_graph, coloring),
            courses: colored_courses(clash_graph, coloring),
        }
    }

    /// Una línea por curso: "<id> <nombre>, <color>".
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for c in &self.courses {
            out.push_str(&format!("{} {}, {}\n", c.course_id, c.course_name, c.color));
        }
        out
    }

    pub fn to_json(&self) -> ClashResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Grafo de choques en formato Graphviz DOT, con el color de cada curso
/// como relleno del nodo y la cantidad de alumnos como etiqueta de arista.
pub fn to_dot(clash_graph: &ClashGraph, coloring: &Coloring) -> String {
    let mut g: UnGraph<String, f64> = UnGraph::with_capacity(clash_graph.graph.vertex_count(), clash_graph.graph.edge_count());
    for id in clash_graph.index.course_ids() {
        g.add_node(id.clone());
    }
    for (u, v, w) in clash_graph.graph.edges() {
        g.add_edge(NodeIndex::new(u), NodeIndex::new(v), w);
    }

    let colors = coloring.colors();
    let node_attrs = |_: &UnGraph<String, f64>, (ix, _): (NodeIndex, &String)| -> String {
        let c = colors.get(ix.index()).copied().unwrap_or(0);
        // set312 tiene 12 colores, indexados desde 1
        format!("colorscheme=set312 style=filled fillcolor={} tooltip=\"franja {}\"", c % 12 + 1, c)
    };
    let edge_attrs = |_: &UnGraph<String, f64>, e: petgraph::graph::EdgeReference<'_, f64>| -> String {
        format!("penwidth={:.1}", 1.0 + e.weight().ln_1p())
    };
    format!(
        "{}",
        Dot::with_attr_getters(&g, &[], &edge_attrs, &node_attrs)
    )
}
