// Núcleo: poda de duplicados, construcción del grafo y coloreo.
pub mod dedup;
pub mod graph;
pub mod builder;
pub mod welsh_powell;

pub use dedup::dedup_clashes;
pub use graph::ConflictGraph;
pub use builder::{build_clash_graph, ClashGraph, CourseIndex};
pub use welsh_powell::{degree_order, welsh_powell, Coloring};

use crate::error::ClashResult;
use crate::models::ClashRecord;

/// Flujo completo sobre registros ya leídos: poda, grafo y coloreo.
pub fn schedule_exams(records: Vec<ClashRecord>) -> ClashResult<(ClashGraph, Coloring)> {
    let pruned = dedup_clashes(records);
    let clash_graph = build_clash_graph(&pruned)?;
    let coloring = welsh_powell(&clash_graph.graph);
    Ok((clash_graph, coloring))
}
