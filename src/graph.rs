//! Simple undirected instance graph stored as an adjacency BitVec per row,
//! with neighbour lists derived from the rows for O(deg) iteration.
//! Supports the plain-text `n m` edge-list format (1-based pairs).

use bitvec::prelude::*;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// Errors raised while reading an instance file.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("cannot read instance: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed header: expected two integers `n m`")]
    BadHeader,
    #[error("malformed edge #{index}: expected two integers `a b`")]
    BadEdge { index: usize },
    #[error("edge #{index} ({a}, {b}) out of range for n={n}")]
    OutOfRange { index: usize, a: usize, b: usize, n: usize },
    #[error("edge #{index} is a self-loop on vertex {v}")]
    SelfLoop { index: usize, v: usize },
}

/// Immutable problem instance: the graph to be equitably colored.
#[derive(Clone, Debug)]
pub struct Instance {
    /// Row-major adjacency; `adj[i][j]` is 1 ⇔ edge (i,j) exists, j≠i.
    adj: Vec<BitVec>,
    /// Neighbour lists derived from the bit rows (ascending order).
    neighbours: Vec<Vec<usize>>,
    max_degree: usize,
    m: usize,
}

impl Instance {
    /*────────── constructors ──────────*/

    /// Build from an explicit edge list (0-based indices, undirected).
    /// Duplicate edges collapse into the bit rows.
    pub fn from_edge_list(n: usize, edges: &[(usize, usize)]) -> Self {
        let mut rows = Vec::with_capacity(n);
        for _ in 0..n {
            rows.push(bitvec![0; n]);
        }
        for &(a, b) in edges {
            assert!(a < n && b < n && a != b);
            rows[a].set(b, true);
            rows[b].set(a, true);
        }

        let neighbours: Vec<Vec<usize>> =
            rows.iter().map(|row| row.iter_ones().collect()).collect();
        let max_degree = neighbours.iter().map(Vec::len).max().unwrap_or(0);
        let m = neighbours.iter().map(Vec::len).sum::<usize>() / 2;

        Self { adj: rows, neighbours, max_degree, m }
    }

    /// Parse the plain-text format: `n m` followed by m pairs `a b`,
    /// 1 ≤ a,b ≤ n, a ≠ b. Any whitespace separates tokens.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, InputError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        let mut tokens = text.split_whitespace();

        let mut next_int = |err: InputError| -> Result<usize, InputError> {
            match tokens.next() {
                Some(t) => t.parse::<usize>().map_err(|_| err),
                None => Err(err),
            }
        };

        let n = next_int(InputError::BadHeader)?;
        let m = next_int(InputError::BadHeader)?;

        let mut edges = Vec::with_capacity(m);
        for index in 1..=m {
            let a = next_int(InputError::BadEdge { index })?;
            let b = next_int(InputError::BadEdge { index })?;
            if a < 1 || a > n || b < 1 || b > n {
                return Err(InputError::OutOfRange { index, a, b, n });
            }
            if a == b {
                return Err(InputError::SelfLoop { index, v: a });
            }
            edges.push((a - 1, b - 1));
        }
        Ok(Self::from_edge_list(n, &edges))
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, InputError> {
        Self::from_reader(std::fs::File::open(path)?)
    }

    /*────────── getters ──────────*/

    #[inline]
    pub fn n(&self) -> usize {
        self.adj.len()
    }

    /// Number of edges (each counted once, duplicates collapsed).
    #[inline]
    pub fn m(&self) -> usize {
        self.m
    }

    #[inline]
    pub fn degree(&self, v: usize) -> usize {
        self.neighbours[v].len()
    }

    #[inline]
    pub fn max_degree(&self) -> usize {
        self.max_degree
    }

    /// Neighbours of v, ascending.
    #[inline]
    pub fn neighbours(&self, v: usize) -> &[usize] {
        &self.neighbours[v]
    }

    #[inline]
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.adj[u][v]
    }

    /// All edges as (u,v) with u < v.
    pub fn edge_list(&self) -> Vec<(usize, usize)> {
        let mut edges = Vec::with_capacity(self.m);
        for u in 0..self.n() {
            for &v in &self.neighbours[u] {
                if v > u {
                    edges.push((u, v));
                }
            }
        }
        edges
    }
}

/*────────────────── tests ──────────────────*/
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn tiny_triangle() {
        let g = Instance::from_edge_list(3, &[(0, 1), (0, 2), (1, 2)]);
        assert_eq!(g.n(), 3);
        assert_eq!(g.m(), 3);
        assert_eq!(g.max_degree(), 2);
        assert_eq!(g.edge_list(), vec![(0, 1), (0, 2), (1, 2)]);
    }

    #[test]
    fn parse_text_format() {
        let text = b"4 3\n1 2\n2 3\n  3   4\n";
        let g = Instance::from_reader(Cursor::new(&text[..])).unwrap();
        assert_eq!(g.n(), 4);
        assert_eq!(g.m(), 3);
        assert_eq!(g.neighbours(1), &[0, 2]);
        assert_eq!(g.degree(0), 1);
        assert!(g.has_edge(2, 3));
    }

    #[test]
    fn duplicate_edges_collapse() {
        let text = b"3 3\n1 2\n2 1\n1 2\n";
        let g = Instance::from_reader(Cursor::new(&text[..])).unwrap();
        assert_eq!(g.m(), 1);
        assert_eq!(g.degree(0), 1);
        assert_eq!(g.degree(2), 0);
    }

    #[test]
    fn rejects_self_loop_and_range() {
        assert!(matches!(
            Instance::from_reader(Cursor::new(&b"3 1\n2 2\n"[..])),
            Err(InputError::SelfLoop { v: 2, .. })
        ));
        assert!(matches!(
            Instance::from_reader(Cursor::new(&b"3 1\n1 4\n"[..])),
            Err(InputError::OutOfRange { b: 4, .. })
        ));
        assert!(matches!(
            Instance::from_reader(Cursor::new(&b"nope"[..])),
            Err(InputError::BadHeader)
        ));
        assert!(matches!(
            Instance::from_reader(Cursor::new(&b"3 2\n1 2\n"[..])),
            Err(InputError::BadEdge { index: 2 })
        ));
    }
}
