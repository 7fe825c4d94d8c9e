use crate::errors::SearchError;
use super::{reconstruct_path, sorted_neighbors, GraphNodeMap, Route, NO_PARENT};

use std::{fmt::Debug, hash::Hash};
use indexmap::map::Entry::Vacant;
use tracing::debug;


/// Depth-First Search
/// https://en.wikipedia.org/wiki/Depth-first_search
/// Returns some path from start to goal, no guarantee on length or cost
/// Neighbors are pushed in descending order so the smallest name is popped first
pub fn dfs<N, IT, NN>(start: N, goal: &N, neighbors: NN) -> Result<Route<N>, SearchError>
where
    N: Eq + Hash + Clone + Ord + Debug,
    NN: Fn(&N) -> IT, // returns iterator of neighbors
    IT: IntoIterator<Item = N>,
{
    let node_map = build_dfs_tree(start, goal, neighbors);
    reconstruct_path(&node_map, goal)
}


/// Explores one branch fully before backtracking
/// Returns the visited nodes with (parent_index, tree depth)
fn build_dfs_tree<N, IT, NN>(start: N, goal: &N, neighbors: NN) -> GraphNodeMap<N, usize>
where
    N: Eq + Hash + Clone + Ord + Debug,
    NN: Fn(&N) -> IT,
    IT: IntoIterator<Item = N>,
{
    let mut visited: GraphNodeMap<N, usize> = GraphNodeMap::default();
    let start_index = visited.insert_full(start, (NO_PARENT, 0)).0;

    let mut stack: Vec<usize> = Vec::new();
    if visited.get_index_of(goal) != Some(start_index) {
        stack.push(start_index);
    }

    'search: while let Some(index) = stack.pop() {
        let Some((node, &(_, depth))) = visited.get_index(index) else {
            break;
        };

        for neighbor in sorted_neighbors(neighbors(node), true) {
            let reached_goal = &neighbor == goal;

            if let Vacant(e) = visited.entry(neighbor) {
                stack.push(e.index());
                e.insert((index, depth + 1));
            }

            if reached_goal {
                break 'search;
            }
        }
    }

    debug!(visited = visited.len(), ?goal, "dfs finished");
    visited
}
