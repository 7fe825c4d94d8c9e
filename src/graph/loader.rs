//! Line oriented dataset reader
//!
//! City file: `name region latitude longitude` per line
//! Edge file: `name name` per line
//! Fields are whitespace separated, blank lines and `#` comments are skipped

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info};

use super::{Graph, Node};
use crate::errors::LoadError;


/// Read both dataset files and build the graph
pub fn load_graph(cities: &Path, edges: &Path) -> Result<Graph, LoadError> {
    let nodes = parse_cities(open(cities)?, cities)?;
    let pairs = parse_edges(open(edges)?, edges)?;

    let graph = Graph::new(nodes, pairs)?;
    info!(nodes = graph.len(), edges = graph.edge_count(), "graph loaded");
    Ok(graph)
}

fn open(path: &Path) -> Result<BufReader<File>, LoadError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| LoadError::io(path, e))
}

/// Parse city declarations
/// `origin` is only used to label errors
pub fn parse_cities<R: BufRead>(reader: R, origin: &Path) -> Result<Vec<Node>, LoadError> {
    let mut nodes = Vec::new();

    for (line_no, fields) in records(reader, origin)? {
        let [name, region, latitude, longitude] = fields.as_slice() else {
            return Err(malformed(origin, line_no, format!("expected 4 fields, found {}", fields.len())));
        };

        let latitude = parse_coordinate(latitude, origin, line_no)?;
        let longitude = parse_coordinate(longitude, origin, line_no)?;
        nodes.push(Node::new(name, region, latitude, longitude));
    }

    debug!(count = nodes.len(), path = %origin.display(), "parsed cities");
    Ok(nodes)
}

/// Parse adjacency declarations
pub fn parse_edges<R: BufRead>(reader: R, origin: &Path) -> Result<Vec<(String, String)>, LoadError> {
    let mut pairs = Vec::new();

    for (line_no, fields) in records(reader, origin)? {
        let [a, b] = fields.as_slice() else {
            return Err(malformed(origin, line_no, format!("expected 2 fields, found {}", fields.len())));
        };
        pairs.push((a.clone(), b.clone()));
    }

    debug!(count = pairs.len(), path = %origin.display(), "parsed edges");
    Ok(pairs)
}

/// Meaningful lines split into fields, paired with their 1-based line number
fn records<R: BufRead>(reader: R, origin: &Path) -> Result<Vec<(usize, Vec<String>)>, LoadError> {
    let mut records = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| LoadError::io(origin, e))?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        records.push((i + 1, line.split_whitespace().map(String::from).collect()));
    }

    Ok(records)
}

/// Coordinates must be finite, NaN or inf would poison every edge weight they touch
fn parse_coordinate(field: &str, origin: &Path, line_no: usize) -> Result<f64, LoadError> {
    match field.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(malformed(origin, line_no, format!("invalid coordinate ({field})"))),
    }
}

fn malformed(path: &Path, line: usize, reason: String) -> LoadError {
    LoadError::Malformed { path: path.to_path_buf(), line, reason }
}
