//! Grafo de choques no dirigido con número de vértices fijo.
//!
//! Una sola estructura de adyacencia indexada por vértice denso sirve como
//! grafo "sin pesos" (entrada del coloreo) y, con la tabla lateral de pesos,
//! como grafo "con pesos" (cantidad de alumnos por choque).

use std::collections::HashMap;
use crate::error::{ClashError, ClashResult};

#[derive(Debug, Clone, Default)]
pub struct ConflictGraph {
    adjacency: Vec<Vec<usize>>,
    // clave (min, max) -> peso
    weights: HashMap<(usize, usize), f64>,
}

fn edge_key(u: usize, v: usize) -> (usize, usize) {
    if u < v { (u, v) } else { (v, u) }
}

impl ConflictGraph {
    /// Reserva exactamente `n` vértices sin aristas. No se pueden agregar vértices después.
    pub fn with_vertices(n: usize) -> Self {
        ConflictGraph {
            adjacency: vec![Vec::new(); n],
            weights: HashMap::new(),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.weights.len()
    }

    fn check_vertex(&self, v: usize) -> ClashResult<()> {
        if v >= self.vertex_count() {
            return Err(ClashError::VertexOutOfRange { vertex: v, count: self.vertex_count() });
        }
        Ok(())
    }

    /// Inserta la arista no dirigida {u, v} con su peso.
    ///
    /// Devuelve `Ok(false)` sin modificar nada si la arista ya existe o si
    /// `u == v`: el grafo se mantiene simple y el primer peso gana.
    pub fn add_edge(&mut self, u: usize, v: usize, weight: f64) -> ClashResult<bool> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        if u == v {
            return Ok(false);
        }
        let key = edge_key(u, v);
        if self.weights.contains_key(&key) {
            return Ok(false);
        }
        self.weights.insert(key, weight);
        self.adjacency[u].push(v);
        self.adjacency[v].push(u);
        Ok(true)
    }

    /// Vecinos de `v` en orden de inserción. Vacío si `v` no existe.
    pub fn neighbors(&self, v: usize) -> &[usize] {
        self.adjacency.get(v).map(|n| n.as_slice()).unwrap_or(&[])
    }

    /// Cantidad de vecinos distintos (el grafo no admite aristas repetidas).
    pub fn degree(&self, v: usize) -> usize {
        self.neighbors(v).len()
    }

    pub fn max_degree(&self) -> usize {
        self.adjacency.iter().map(|n| n.len()).max().unwrap_or(0)
    }

    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.weights.contains_key(&edge_key(u, v))
    }

    /// Peso (alumnos en común) de la arista {u, v}, si existe.
    pub fn weight(&self, u: usize, v: usize) -> Option<f64> {
        self.weights.get(&edge_key(u, v)).copied()
    }

    /// Vecinos de `v` junto con el peso de cada arista.
    pub fn weighted_neighbors(&self, v: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.neighbors(v)
            .iter()
            .map(move |&w| (w, self.weights.get(&edge_key(v, w)).copied().unwrap_or(0.0)))
    }

    /// Cada arista una vez, como (u, v, peso) con u < v, en orden ascendente.
    pub fn edges(&self) -> Vec<(usize, usize, f64)> {
        let mut out: Vec<(usize, usize, f64)> = self.weights.iter().map(|(&(u, v), &w)| (u, v, w)).collect();
        out.sort_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_edge_is_undirected_and_simple() {
        let mut g = ConflictGraph::with_vertices(3);
        assert!(g.add_edge(0, 1, 5.0).unwrap());
        assert!(!g.add_edge(1, 0, 9.0).unwrap());
        assert!(!g.add_edge(2, 2, 1.0).unwrap());
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.degree(0), 1);
        assert_eq!(g.degree(1), 1);
        assert_eq!(g.degree(2), 0);
        assert_eq!(g.weight(1, 0), Some(5.0));
    }

    #[test]
    fn test_add_edge_out_of_range() {
        let mut g = ConflictGraph::with_vertices(2);
        match g.add_edge(0, 2, 1.0) {
            Err(ClashError::VertexOutOfRange { vertex, count }) => {
                assert_eq!(vertex, 2);
                assert_eq!(count, 2);
            }
            other => panic!("se esperaba VertexOutOfRange, se obtuvo {:?}", other),
        }
    }

    #[test]
    fn test_edges_sorted_once() {
        let mut g = ConflictGraph::with_vertices(4);
        g.add_edge(3, 1, 2.0).unwrap();
        g.add_edge(0, 2, 1.0).unwrap();
        g.add_edge(1, 0, 4.0).unwrap();
        assert_eq!(g.edges(), vec![(0, 1, 4.0), (0, 2, 1.0), (1, 3, 2.0)]);
        assert_eq!(g.max_degree(), 2);
    }
}
