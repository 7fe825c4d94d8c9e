pub mod bfs;
pub mod dfs;
pub mod a_star;
mod path;

pub use path::reconstruct_path;

use crate::collections::FxIndexMap;

/// Type alias for the node map used in the search algorithms
/// N: Node - space on a graph
/// C: Cost of reaching the node from the start (hop depth for BFS/DFS)
/// The tuple contains (parent_index, cost) where:
/// - parent_index is the index of the parent node in the map, NO_PARENT for the start
/// - cost is the total cost to reach this node from the start
pub type GraphNodeMap<N, C> = FxIndexMap<N, (usize, C)>;

/// Parent index of the start node
pub const NO_PARENT: usize = usize::MAX;


/// Outcome of a single search
#[derive(Clone, Debug, PartialEq)]
pub enum Route<N> {
    /// Nodes from start to goal inclusive
    Found(Vec<N>),
    /// The goal was never reached from the start
    Unreachable,
}

impl<N> Route<N> {

    pub fn path(&self) -> Option<&[N]> {
        match self {
            Route::Found(path) => Some(path.as_slice()),
            Route::Unreachable => None,
        }
    }

    /// Number of edges walked, None when unreachable
    pub fn hops(&self) -> Option<usize> {
        self.path().map(|p| p.len().saturating_sub(1))
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Route::Found(_))
    }
}


/// Sort neighbor names so expansion order doesn't depend on map order
pub(crate) fn sorted_neighbors<N, IT>(neighbors: IT, descending: bool) -> Vec<N>
where
    N: Ord,
    IT: IntoIterator<Item = N>,
{
    let mut nodes: Vec<N> = neighbors.into_iter().collect();
    if descending {
        nodes.sort_by(|a, b| b.cmp(a));
    } else {
        nodes.sort();
    }
    nodes
}
