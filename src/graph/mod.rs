mod loader;

pub use loader::{load_graph, parse_cities, parse_edges};

use crate::collections::FxIndexMap;
use crate::errors::GraphError;
use crate::geometry::Coordinate;

use indexmap::map::Entry::{Occupied, Vacant};


/// Named location on the map
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub name: String,
    pub region: String, // informational only, never used by the searches
    pub coordinate: Coordinate,
}

impl Node {

    pub fn new(name: impl Into<String>, region: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            region: region.into(),
            coordinate: Coordinate::new(latitude, longitude),
        }
    }
}


/// Neighbor name -> edge weight
pub type Neighbors = FxIndexMap<String, f64>;


/// Undirected weighted graph of named nodes
/// Built once and read only afterwards, every search borrows it
#[derive(Clone, Debug, Default)]
pub struct Graph {
    nodes: FxIndexMap<String, Node>,
    adjacency: FxIndexMap<String, Neighbors>,
}

impl Graph {

    /// Build the node table and the weighted adjacency
    /// Edge weights are derived from node coordinates, never supplied
    /// Every edge is stored in both directions with the same weight
    pub fn new<I, E, A, B>(nodes: I, edges: E) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = Node>,
        E: IntoIterator<Item = (A, B)>,
        A: AsRef<str>,
        B: AsRef<str>,
    {
        let mut graph = Graph::default();

        for node in nodes {
            match graph.nodes.entry(node.name.clone()) {
                Occupied(e) => return Err(GraphError::DuplicateNode(e.key().clone())),
                Vacant(e) => {
                    graph.adjacency.insert(node.name.clone(), Neighbors::default());
                    e.insert(node);
                }
            }
        }

        for (a, b) in edges {
            graph.connect(a.as_ref(), b.as_ref())?;
        }

        Ok(graph)
    }

    fn connect(&mut self, a: &str, b: &str) -> Result<(), GraphError> {
        let from = self.nodes.get(a).ok_or_else(|| GraphError::UnknownNode(a.to_string()))?;
        let to = self.nodes.get(b).ok_or_else(|| GraphError::UnknownNode(b.to_string()))?;
        let weight = from.coordinate.scaled_distance(&to.coordinate);

        // adjacency has an entry for every declared node
        if let Some(neighbors) = self.adjacency.get_mut(a) {
            neighbors.insert(b.to_string(), weight);
        }
        if let Some(neighbors) = self.adjacency.get_mut(b) {
            neighbors.insert(a.to_string(), weight);
        }
        Ok(())
    }

    /// Node lookup by name
    pub fn node(&self, name: &str) -> Option<&Node> {
        self.nodes.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    /// All neighbors of a node with their edge weights
    pub fn neighbors(&self, name: &str) -> Option<&Neighbors> {
        self.adjacency.get(name)
    }

    /// Weight of the edge a - b, if it exists
    pub fn edge_weight(&self, a: &str, b: &str) -> Option<f64> {
        self.adjacency.get(a)?.get(b).copied()
    }

    /// Nodes in declaration order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        let directed: usize = self.adjacency.iter()
            .map(|(name, neighbors)| {
                // self loops are stored once
                neighbors.len() + usize::from(neighbors.contains_key(name))
            })
            .sum();
        directed / 2
    }
}
