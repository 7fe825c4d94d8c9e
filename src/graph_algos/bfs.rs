use crate::errors::SearchError;
use super::{reconstruct_path, sorted_neighbors, GraphNodeMap, Route, NO_PARENT};

use std::{collections::VecDeque, fmt::Debug, hash::Hash};
use indexmap::map::Entry::Vacant;
use tracing::debug;


/// Breadth-First Search
/// https://en.wikipedia.org/wiki/Breadth-first_search
/// Finds the path with the fewest hops from start to goal, edge costs are ignored
/// Neighbors are expanded in ascending order so ties resolve to the smallest name
pub fn bfs<N, IT, NN>(start: N, goal: &N, neighbors: NN) -> Result<Route<N>, SearchError>
where
    N: Eq + Hash + Clone + Ord + Debug,
    NN: Fn(&N) -> IT, // returns iterator of neighbors
    IT: IntoIterator<Item = N>,
{
    let node_map = build_bfs_tree(start, goal, neighbors);
    reconstruct_path(&node_map, goal)
}


/// Traverses the graph level by level until the goal is discovered
/// Returns the visited nodes with (parent_index, hop depth)
/// A node is recorded the moment it's enqueued so each node enters the queue once
fn build_bfs_tree<N, IT, NN>(start: N, goal: &N, neighbors: NN) -> GraphNodeMap<N, usize>
where
    N: Eq + Hash + Clone + Ord + Debug,
    NN: Fn(&N) -> IT,
    IT: IntoIterator<Item = N>,
{
    let mut visited: GraphNodeMap<N, usize> = GraphNodeMap::default();
    let start_index = visited.insert_full(start, (NO_PARENT, 0)).0;

    let mut queue: VecDeque<usize> = VecDeque::new();
    if visited.get_index_of(goal) != Some(start_index) {
        queue.push_back(start_index);
    }

    'search: while let Some(index) = queue.pop_front() {
        let Some((node, &(_, depth))) = visited.get_index(index) else {
            break;
        };

        for neighbor in sorted_neighbors(neighbors(node), false) {
            let reached_goal = &neighbor == goal;

            if let Vacant(e) = visited.entry(neighbor) {
                queue.push_back(e.index());
                e.insert((index, depth + 1));
            }

            // stop as soon as the goal shows up, even mid neighbor list
            if reached_goal {
                break 'search;
            }
        }
    }

    debug!(visited = visited.len(), ?goal, "bfs finished");
    visited
}
