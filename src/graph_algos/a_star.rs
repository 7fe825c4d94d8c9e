use crate::errors::SearchError;
use super::{reconstruct_path, GraphNodeMap, Route, NO_PARENT};

use std::{
    collections::BinaryHeap,
    hash::Hash,
    fmt::Debug,
    cmp::Ordering
};
use num_traits::Zero;
use indexmap::map::Entry::{Occupied, Vacant};
use tracing::{debug, trace};



/// Entry on the A* frontier
/// The same node may sit on the frontier several times with different costs
#[derive(Debug)]
struct FrontierEntry<T> {
    index: usize, // index in the closed_list - maps to the Id of the node
    cost: T, // Cost to reach this node when the entry was pushed
    f_cost: T, // Total cost = cost + h(n) aka estimated cost
}

// BinaryHeap is a max heap, reverse so the smallest f_cost pops first
impl<T: Ord> Ord for FrontierEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.f_cost.cmp(&self.f_cost)
    }
}
impl<T: Ord> PartialOrd for FrontierEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<T: PartialEq> PartialEq for FrontierEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.f_cost == other.f_cost
    }
}
impl<T: PartialEq> Eq for FrontierEntry<T> {}


/// A* Algorithm
/// https://en.wikipedia.org/wiki/A*_search_algorithm
/// From start Node, traverse through graph until the goal is popped off the frontier
/// The returned path has minimal total cost as long as the heuristic is admissible
/// (never overestimates the true cost to reach the goal)
pub fn a_star<N, C, IT, NN, H>(start: N, goal: &N, neighbors: NN, heuristic_fn: H) -> Result<Route<N>, SearchError>
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT, // returns iterator of neighbors + costs
    H: Fn(&N) -> C, // heuristic function
    IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
    C: Zero + Ord + Copy + Debug,
{
    let tree = build_graph(start, goal, neighbors, heuristic_fn)?;
    debug!(
        expanded = tree.expanded,
        stale = tree.stale,
        seen = tree.node_map.len(),
        found = tree.goal_index.is_some(),
        ?goal,
        "a* finished"
    );

    match tree.goal_index {
        Some(_) => reconstruct_path(&tree.node_map, goal),
        None => Ok(Route::Unreachable),
    }
}


/// Everything A* learned before it stopped
struct SearchTree<N, C> {
    node_map: GraphNodeMap<N, C>, // best cost and parent per seen node
    goal_index: Option<usize>,
    expanded: usize, // nodes whose neighbors were walked
    stale: usize, // frontier entries skipped because a cheaper path was already known
}


/// Traverses the graph using A* algorithm
/// Returns a map of nodes with their smallest costs along with the index of the goal node
fn build_graph<N, C, IT, NN, H>(start: N, goal: &N, neighbors: NN, heuristic_fn: H) -> Result<SearchTree<N, C>, SearchError>
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT,
    IT: IntoIterator<Item = (N, C)>,
    C: Zero + Ord + Copy + Debug,
    H: Fn(&N) -> C,
{
    // Open List
    // Nodes that need to be evaluated, implemented as priority queue
    // Sorting is done by f_cost (cost + heuristic)
    let mut open_list: BinaryHeap<FrontierEntry<C>> = BinaryHeap::new();

    // Best known cost for every node seen so far, plus its parent
    // The tuple contains (parent_index, cost) where parent_index is the index of the parent node in the closed_list
    let mut closed_list: GraphNodeMap<N, C> = GraphNodeMap::default();

    let start_h = heuristic_fn(&start);
    let start_index = closed_list.insert_full(start, (NO_PARENT, Zero::zero())).0;
    open_list.push(FrontierEntry {
        index: start_index,
        cost: Zero::zero(),
        f_cost: start_h,
    });

    let mut expanded = 0usize;
    let mut stale = 0usize;

    while let Some(FrontierEntry { index, cost, .. }) = open_list.pop() {

        // fetch current best cost for node
        let Some((node, &(_, c))) = closed_list.get_index(index) else {
            return Err(SearchError::BrokenParentChain(index));
        };

        // If cost of the entry is higher than the best cost, it's stale
        // This implies we've already found a better path to this node
        if cost > c {
            trace!(?node, "skipping stale frontier entry");
            stale += 1;
            continue;
        }

        // Check if we've reached the goal
        if node == goal {
            return Ok(SearchTree { node_map: closed_list, goal_index: Some(index), expanded, stale });
        }
        expanded += 1;

        // loop over neighbors
        for (neighbor, edge_cost) in neighbors(node) {

            // new cost to reach this node = edge cost + node cost
            // This is confirmed cost, not heuristic
            let new_cost = edge_cost + c;

            let h_cost: C = heuristic_fn(&neighbor);

            let neighbor_index = match closed_list.entry(neighbor) {
                Vacant(e) => {
                    // This is the first time we're seeing this neighbor
                    let i = e.index();
                    e.insert((index, new_cost));
                    i
                }
                Occupied(mut e) => {
                    if e.get().1 > new_cost {
                        // We've found a better path to this neighbor
                        e.insert((index, new_cost));
                        e.index()
                    } else {
                        // The existing path is better, do nothing
                        continue;
                    }
                }
            };

            // Only add to the queue if we've found a better path
            open_list.push(FrontierEntry {
                index: neighbor_index,
                cost: new_cost,
                f_cost: new_cost + h_cost,
            });
        }
    }

    Ok(SearchTree { node_map: closed_list, goal_index: None, expanded, stale })
}



#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Coordinate;
    use ordered_float::OrderedFloat;
    use std::collections::HashMap;

    type Cost = OrderedFloat<f64>;

    /// Cities on a flat map, edges weighted by scaled coordinate distance
    struct Map {
        coords: HashMap<&'static str, Coordinate>,
        edges: HashMap<&'static str, Vec<&'static str>>,
    }

    impl Map {
        fn new(cities: &[(&'static str, f64, f64)], roads: &[(&'static str, &'static str)]) -> Self {
            let coords = cities.iter()
                .map(|&(name, lat, lon)| (name, Coordinate::new(lat, lon)))
                .collect();
            let mut edges: HashMap<&str, Vec<&str>> = HashMap::new();
            for &(a, b) in roads {
                edges.entry(a).or_default().push(b);
                edges.entry(b).or_default().push(a);
            }
            Self { coords, edges }
        }

        fn distance(&self, a: &str, b: &str) -> Cost {
            OrderedFloat(self.coords[a].scaled_distance(&self.coords[b]))
        }

        fn neighbor_fn(&self) -> impl Fn(&&'static str) -> Vec<(&'static str, Cost)> + '_ {
            move |node: &&'static str| {
                self.edges.get(node).into_iter()
                    .flatten()
                    .map(|&next| (next, self.distance(node, next)))
                    .collect()
            }
        }

        fn heuristic_fn(&self, goal: &'static str) -> impl Fn(&&'static str) -> Cost + '_ {
            move |node: &&'static str| self.distance(node, goal)
        }

        fn route_cost(&self, path: &[&'static str]) -> f64 {
            path.windows(2).map(|pair| self.distance(pair[0], pair[1]).0).sum()
        }
    }

    fn no_heuristic(_: &&'static str) -> Cost {
        OrderedFloat(0.0)
    }

    /// Straight road east from S to G, a dead end road west of S of the same length
    fn two_roads() -> Map {
        Map::new(
            &[
                ("S", 0.0, 0.0),
                ("E1", 0.0, 1.0), ("E2", 0.0, 2.0), ("G", 0.0, 3.0),
                ("W1", 0.0, -1.0), ("W2", 0.0, -2.0), ("W3", 0.0, -3.0),
            ],
            &[("S", "E1"), ("E1", "E2"), ("E2", "G"), ("S", "W1"), ("W1", "W2"), ("W2", "W3")],
        )
    }

    #[test]
    fn test_a_star_takes_cheaper_detour() {
        // Direct hop over the ridge R is long, going around through L1 and L2 is shorter
        let map = Map::new(
            &[("A", 0.0, 0.0), ("R", 5.0, 2.0), ("L1", 0.0, 1.0), ("L2", 0.0, 2.0), ("G", 0.0, 4.0)],
            &[("A", "R"), ("R", "G"), ("A", "L1"), ("L1", "L2"), ("L2", "G")],
        );

        let route = a_star("A", &"G", map.neighbor_fn(), map.heuristic_fn("G")).unwrap();
        let path = route.path().unwrap();

        assert_eq!(path, ["A", "L1", "L2", "G"]);
        assert!((map.route_cost(path) - 400.0).abs() < 1e-9);
    }

    #[test]
    fn test_a_star_records_float_costs() {
        let map = two_roads();
        let tree = build_graph("S", &"G", map.neighbor_fn(), map.heuristic_fn("G")).unwrap();

        let cost = |name: &str| tree.node_map[name].1.0;
        assert_eq!(cost("S"), 0.0);
        assert!((cost("E1") - 100.0).abs() < 1e-9);
        assert!((cost("E2") - 200.0).abs() < 1e-9);
        assert!((cost("G") - 300.0).abs() < 1e-9);
        assert_eq!(tree.goal_index, tree.node_map.get_index_of("G"));
    }

    #[test]
    fn test_heuristic_prunes_expansion() {
        let map = two_roads();

        let guided = build_graph("S", &"G", map.neighbor_fn(), map.heuristic_fn("G")).unwrap();
        let blind = build_graph("S", &"G", map.neighbor_fn(), no_heuristic).unwrap();

        // guided search walks straight east: S, E1, E2
        assert_eq!(guided.expanded, 3);
        assert!(!guided.node_map.contains_key("W2"));
        // without a heuristic the west road is explored as deep as the east one
        assert!(blind.expanded > guided.expanded);
        assert!(blind.node_map.contains_key("W2"));

        let guided_route = reconstruct_path(&guided.node_map, &"G").unwrap();
        let blind_route = reconstruct_path(&blind.node_map, &"G").unwrap();
        assert_eq!(guided_route, blind_route);
    }

    #[test]
    fn test_superseded_entry_is_skipped() {
        // S reaches B directly over a long road, and cheaper through A
        // B is queued twice, the expensive entry pops after the cheap one and is ignored
        let map = Map::new(
            &[("S", 0.0, 0.0), ("A", 0.0, 1.0), ("B", 0.0, 2.0), ("G", 0.0, 12.0)],
            &[("A", "B"), ("B", "G"), ("S", "A")],
        );
        let neighbors = |node: &&'static str| -> Vec<(&'static str, Cost)> {
            let mut next = map.neighbor_fn()(node);
            if *node == "S" {
                next.push(("B", OrderedFloat(500.0)));
            }
            next
        };

        let tree = build_graph("S", &"G", neighbors, no_heuristic).unwrap();

        assert_eq!(tree.stale, 1);
        assert_eq!(tree.expanded, 3); // S, A, B once each
        let route = reconstruct_path(&tree.node_map, &"G").unwrap();
        assert_eq!(route, Route::Found(vec!["S", "A", "B", "G"]));
    }

    #[test]
    fn test_a_star_unreachable_goal() {
        let map = Map::new(
            &[("A", 0.0, 0.0), ("B", 0.0, 1.0), ("X", 9.0, 9.0), ("Y", 9.0, 8.0)],
            &[("A", "B"), ("X", "Y")],
        );

        let route = a_star("A", &"Y", map.neighbor_fn(), map.heuristic_fn("Y")).unwrap();
        assert_eq!(route, Route::Unreachable);
    }

    #[test]
    fn test_a_star_start_is_goal() {
        let map = two_roads();
        let tree = build_graph("E1", &"E1", map.neighbor_fn(), map.heuristic_fn("E1")).unwrap();

        assert_eq!(tree.expanded, 0);
        let route = reconstruct_path(&tree.node_map, &"E1").unwrap();
        assert_eq!(route, Route::Found(vec!["E1"]));
    }
}
