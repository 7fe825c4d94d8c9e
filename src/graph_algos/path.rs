use crate::errors::SearchError;
use super::{GraphNodeMap, Route, NO_PARENT};

use std::hash::Hash;

/// Construct the path from the goal node back to the start node
/// Returns the ordered path as a vector of nodes from start to goal
/// node_map: GraphNodeMap<N, C> - map of nodes with their parent index and cost
/// goal: N - goal node, Route::Unreachable if the search never recorded it
pub fn reconstruct_path<N, C>(node_map: &GraphNodeMap<N, C>, goal: &N) -> Result<Route<N>, SearchError>
where
    N: Eq + Hash + Clone,
{
    let Some(goal_index) = node_map.get_index_of(goal) else {
        return Ok(Route::Unreachable);
    };

    let mut path = Vec::new();
    let mut current_index = goal_index;

    // Trace back from goal to start
    while current_index != NO_PARENT {
        // parent chains can't be longer than the map unless they loop
        if path.len() > node_map.len() {
            return Err(SearchError::BrokenParentChain(current_index));
        }
        match node_map.get_index(current_index) {
            Some((node, &(parent_index, _))) => {
                path.push(node.clone());
                current_index = parent_index;
            }
            None => return Err(SearchError::BrokenParentChain(current_index)),
        }
    }

    // The path is in reverse order, so reverse it
    path.reverse();

    Ok(Route::Found(path))
}
