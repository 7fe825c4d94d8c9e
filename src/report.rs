use crate::errors::SearchError;
use crate::graph::Graph;
use crate::graph_algos::Route;


/// Sum of edge weights along a path
pub fn route_distance(graph: &Graph, path: &[String]) -> Result<f64, SearchError> {
    path.windows(2)
        .map(|pair| {
            graph.edge_weight(&pair[0], &pair[1])
                .ok_or_else(|| SearchError::MissingEdge(pair[0].clone(), pair[1].clone()))
        })
        .sum()
}

/// Render one search result
///
/// ```text
///
/// A* Search Results:
/// Rochester
/// Syracuse
/// That took 1 hops to find.
/// Total distance = 146 miles.
/// ```
///
/// An unreachable destination gets a single "No path found" line instead of
/// the node list and metrics.
pub fn build_report(label: &str, route: &Route<String>, start: &str, destination: &str, graph: &Graph) -> Result<String, SearchError> {
    let mut report = format!("\n{label} Search Results: \n");

    match (route.path(), route.hops()) {
        (Some(path), Some(hops)) => {
            for node in path {
                report.push_str(node);
                report.push('\n');
            }
            let distance = route_distance(graph, path)?;
            report.push_str(&format!("That took {hops} hops to find.\n"));
            report.push_str(&format!("Total distance = {} miles.\n", distance.round() as i64));
        }
        _ => {
            report.push_str(&format!("No path found from {start} to {destination}.\n"));
        }
    }

    Ok(report)
}
