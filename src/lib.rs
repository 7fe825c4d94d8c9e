//! Route finding between named cities
//!
//! A [`graph::Graph`] is built once from city coordinates and adjacency pairs,
//! then searched with breadth-first, depth-first and A* strategies.

pub mod collections;
pub mod errors;
pub mod geometry;
pub mod graph;
pub mod graph_algos;
pub mod io;
pub mod logging;
pub mod report;
pub mod search;

pub use errors::{GraphError, LoadError, RouteError, SearchError};
pub use graph::{Graph, Node};
pub use graph_algos::Route;
pub use search::{search_report, Algorithm};
