//! Runs the generic searches against a loaded [`Graph`]

use ordered_float::OrderedFloat;
use tracing::{debug, info_span};

use crate::errors::SearchError;
use crate::graph::Graph;
use crate::graph_algos::{a_star::a_star, bfs::bfs, dfs::dfs, Route};
use crate::report::build_report;


/// Search strategy
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Algorithm {
    #[value(name = "bfs")]
    BreadthFirst,
    #[value(name = "dfs")]
    DepthFirst,
    #[value(name = "astar")]
    AStar,
}

impl Algorithm {

    /// Report order
    pub const ALL: [Algorithm; 3] = [Algorithm::BreadthFirst, Algorithm::DepthFirst, Algorithm::AStar];

    /// Heading used in the report
    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::BreadthFirst => "Breadth-First",
            Algorithm::DepthFirst => "Depth-First",
            Algorithm::AStar => "A*",
        }
    }
}


impl Graph {

    /// Both endpoints must be declared nodes
    pub fn check_endpoints(&self, start: &str, destination: &str) -> Result<(), SearchError> {
        for name in [start, destination] {
            if !self.contains(name) {
                return Err(SearchError::UnknownNode(name.to_string()));
            }
        }
        Ok(())
    }

    /// Run one search between two named nodes
    pub fn find_route(&self, algorithm: Algorithm, start: &str, destination: &str) -> Result<Route<String>, SearchError> {
        self.check_endpoints(start, destination)?;

        let _span = info_span!("search", algorithm = algorithm.label(), start, destination).entered();
        let route = match algorithm {
            Algorithm::BreadthFirst => bfs(start.to_string(), &destination.to_string(), |n: &String| self.neighbor_names(n)),
            Algorithm::DepthFirst => dfs(start.to_string(), &destination.to_string(), |n: &String| self.neighbor_names(n)),
            Algorithm::AStar => self.a_star_route(start, destination),
        }?;

        debug!(hops = ?route.hops(), "search done");
        Ok(route)
    }

    fn a_star_route(&self, start: &str, destination: &str) -> Result<Route<String>, SearchError> {
        let goal = self.node(destination)
            .ok_or_else(|| SearchError::UnknownNode(destination.to_string()))?
            .coordinate;

        // straight line distance in edge weight units, never more than any real route
        let heuristic = |n: &String| {
            OrderedFloat(self.node(n).map_or(0.0, |node| node.coordinate.scaled_distance(&goal)))
        };
        let neighbors = |n: &String| {
            self.neighbors(n)
                .into_iter()
                .flatten()
                .map(|(name, weight)| (name.clone(), OrderedFloat(*weight)))
                .collect::<Vec<_>>()
        };

        a_star(start.to_string(), &destination.to_string(), neighbors, heuristic)
    }

    fn neighbor_names(&self, name: &str) -> Vec<String> {
        self.neighbors(name)
            .map(|neighbors| neighbors.keys().cloned().collect())
            .unwrap_or_default()
    }
}


/// Run every algorithm in `algorithms` and join their reports
/// Endpoints are validated once, before any search runs
pub fn search_report(graph: &Graph, algorithms: &[Algorithm], start: &str, destination: &str) -> Result<String, SearchError> {
    graph.check_endpoints(start, destination)?;

    let reports = algorithms.iter()
        .map(|&algorithm| {
            let route = graph.find_route(algorithm, start, destination)?;
            build_report(algorithm.label(), &route, start, destination, graph)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(reports.join("\n"))
}
