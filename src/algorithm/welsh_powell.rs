//! Coloreo de vértices con la heurística de Welsh-Powell.
//!
//! Dos cursos con el mismo color pueden rendir examen en la misma franja sin
//! que ningún alumno tenga choque. El resultado es un coloreo propio, pero no
//! necesariamente con el mínimo de colores (número cromático).

use log::{debug, info};
use crate::algorithm::graph::ConflictGraph;
use crate::error::{ClashError, ClashResult};

/// Resultado del coloreo: un color por cada vértice en [0, V).
///
/// Sólo se obtiene a través de `welsh_powell`, por lo que nunca existe un
/// coloreo incompleto.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coloring {
    colors: Vec<usize>,
    order: Vec<usize>,
    color_count: usize,
}

impl Coloring {
    /// Color asignado a `vertex`.
    pub fn color_of(&self, vertex: usize) -> ClashResult<usize> {
        self.colors
            .get(vertex)
            .copied()
            .ok_or_else(|| ClashError::VertexOutOfRange { vertex, count: self.colors.len() })
    }

    /// Cantidad de colores usados (0 para un grafo vacío).
    pub fn color_count(&self) -> usize {
        self.color_count
    }

    pub fn vertex_count(&self) -> usize {
        self.colors.len()
    }

    /// Colores indexados por vértice.
    pub fn colors(&self) -> &[usize] {
        &self.colors
    }

    /// Orden de visita usado: grado descendente, índice ascendente en empates.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Vértices agrupados por color; cada grupo en orden ascendente.
    pub fn classes(&self) -> Vec<Vec<usize>> {
        let mut classes: Vec<Vec<usize>> = vec![Vec::new(); self.color_count];
        for (v, &c) in self.colors.iter().enumerate() {
            classes[c].push(v);
        }
        classes
    }

    /// True si ninguna arista une dos vértices del mismo color.
    pub fn is_proper(&self, graph: &ConflictGraph) -> bool {
        graph.vertex_count() == self.colors.len()
            && graph.edges().iter().all(|&(u, v, _)| self.colors[u] != self.colors[v])
    }
}

/// Orden de Welsh-Powell: grado descendente; empates por índice original ascendente.
///
/// El desempate se compara explícitamente, no depende de la estabilidad del sort.
pub fn degree_order(graph: &ConflictGraph) -> Vec<usize> {
    let degrees: Vec<usize> = (0..graph.vertex_count()).map(|v| graph.degree(v)).collect();
    let mut order: Vec<usize> = (0..graph.vertex_count()).collect();
    order.sort_by(|&a, &b| degrees[b].cmp(&degrees[a]).then(a.cmp(&b)));
    order
}

// O(grado(v)) por consulta: recorre los vecinos de `v`.
fn neighbour_has_color(graph: &ConflictGraph, colors: &[Option<usize>], v: usize, color: usize) -> bool {
    graph.neighbors(v).iter().any(|&w| colors[w] == Some(color))
}

/// Colorea `graph` con Welsh-Powell.
///
/// Recorre los vértices en `degree_order`. Cada vértice aún sin color abre un
/// color nuevo, y ese mismo color se asigna, en orden, a cada vértice posterior
/// sin color que no tenga un vecino ya pintado con él. El bucle es secuencial:
/// la elegibilidad de cada vértice depende de los colores asignados antes.
///
/// Complejidad: O(V log V) para ordenar más O(V * (V + E)) en el peor caso.
pub fn welsh_powell(graph: &ConflictGraph) -> Coloring {
    let order = degree_order(graph);
    let mut colors: Vec<Option<usize>> = vec![None; graph.vertex_count()];
    let mut color_count = 0usize;

    for (i, &vi) in order.iter().enumerate() {
        if colors[vi].is_some() {
            continue;
        }
        let c = color_count;
        color_count += 1;
        colors[vi] = Some(c);
        debug!("[welsh_powell] color {} abierto por el vértice {}", c, vi);

        for &vj in &order[i + 1..] {
            if colors[vj].is_none() && !neighbour_has_color(graph, &colors, vj, c) {
                colors[vj] = Some(c);
                debug!("[welsh_powell] vértice {} pintado con {}", vj, c);
            }
        }
    }

    // Todo vértice del orden fue visitado por el bucle exterior, así que todos tienen color
    let colors: Vec<usize> = colors.into_iter().map(|c| c.unwrap_or(0)).collect();
    info!("🎨 [welsh_powell] {} vértices coloreados con {} colores", colors.len(), color_count);
    Coloring { colors, order, color_count }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_from(n: usize, edges: &[(usize, usize)]) -> ConflictGraph {
        let mut g = ConflictGraph::with_vertices(n);
        for &(u, v) in edges {
            g.add_edge(u, v, 1.0).unwrap();
        }
        g
    }

    #[test]
    fn test_degree_order_tie_break_by_index() {
        // grados: 0->1, 1->2, 2->1, 3->0
        let g = graph_from(4, &[(0, 1), (1, 2)]);
        assert_eq!(degree_order(&g), vec![1, 0, 2, 3]);
    }

    #[test]
    fn test_path_uses_two_colors() {
        let g = graph_from(3, &[(0, 1), (1, 2)]);
        let c = welsh_powell(&g);
        assert_eq!(c.colors(), &[1, 0, 1]);
        assert_eq!(c.color_count(), 2);
        assert!(c.is_proper(&g));
    }

    #[test]
    fn test_color_of_out_of_range() {
        let g = graph_from(2, &[(0, 1)]);
        let c = welsh_powell(&g);
        assert!(matches!(c.color_of(2), Err(ClashError::VertexOutOfRange { vertex: 2, count: 2 })));
    }

    #[test]
    fn test_classes_group_by_color() {
        let g = graph_from(4, &[(0, 1), (2, 3)]);
        let c = welsh_powell(&g);
        assert_eq!(c.classes(), vec![vec![0, 2], vec![1, 3]]);
    }
}
