//! CLI command implementations.

use std::io::Write;
use std::path::Path;

use log::warn;

use crate::engine::GraphQueries;
use crate::format::GraphReader;
use crate::graph::VertexGraph;
use crate::types::{GraphResult, VertexId};

/// Which document shape a file holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Vertex,
    Flights,
    Adjacency,
}

impl DocumentKind {
    /// Parse a document kind from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "vertex" | "vertices" => Some(Self::Vertex),
            "flights" | "airports" => Some(Self::Flights),
            "adjacency" | "adj" => Some(Self::Adjacency),
            _ => None,
        }
    }

    /// Return a human-readable name for this kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Vertex => "vertex",
            Self::Flights => "flights",
            Self::Adjacency => "adjacency",
        }
    }
}

/// Map a `--start` index onto the graph; out-of-range means absent.
fn resolve_start<T>(graph: &VertexGraph<T>, start: Option<usize>) -> Option<VertexId> {
    let index = start?;
    let id = graph.id_at(index);
    if id.is_none() {
        warn!(
            "start index {} out of range ({} vertices), treating as absent",
            index,
            graph.vertex_count()
        );
    }
    id
}

fn write_json<W: Write>(out: &mut W, value: &serde_json::Value) -> GraphResult<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
    Ok(())
}

/// Print reachable words shorter than `k`.
pub fn cmd_short_words<W: Write>(
    path: &Path,
    k: i64,
    start: Option<usize>,
    json: bool,
    out: &mut W,
) -> GraphResult<()> {
    let graph = GraphReader::read_vertex_graph(path)?;
    let engine = GraphQueries::new();
    let start = resolve_start(&graph, start);

    if json {
        let words = engine.short_words(&graph, start, k);
        write_json(out, &serde_json::json!({ "k": k, "words": words }))
    } else {
        engine.print_short_words(&graph, start, k, out)
    }
}

/// Print the longest reachable word.
pub fn cmd_longest_word<W: Write>(
    path: &Path,
    start: Option<usize>,
    json: bool,
    out: &mut W,
) -> GraphResult<()> {
    let graph = GraphReader::read_vertex_graph(path)?;
    let engine = GraphQueries::new();
    let longest = engine.longest_word(&graph, resolve_start(&graph, start));

    if json {
        write_json(out, &serde_json::json!({ "longest": longest }))
    } else {
        writeln!(out, "{}", longest)?;
        Ok(())
    }
}

/// Print reachable vertices that are their own neighbor.
pub fn cmd_self_loopers<W: Write>(
    path: &Path,
    start: Option<usize>,
    json: bool,
    out: &mut W,
) -> GraphResult<()> {
    let graph = GraphReader::read_vertex_graph(path)?;
    let engine = GraphQueries::new();
    let start = resolve_start(&graph, start);

    if json {
        let loopers = engine.self_loopers(&graph, start);
        write_json(out, &serde_json::json!({ "self_loopers": loopers }))
    } else {
        engine.print_self_loopers(&graph, start, out)
    }
}

/// Report whether `to` can be reached from `from` by flights.
pub fn cmd_can_reach<W: Write>(
    path: &Path,
    from: &str,
    to: &str,
    json: bool,
    out: &mut W,
) -> GraphResult<()> {
    let network = GraphReader::read_flight_network(path)?;
    let engine = GraphQueries::new();

    let lookup = |code: &str| {
        let id = network.lookup(code);
        if id.is_none() {
            warn!("unknown airport code {}, treating as absent", code);
        }
        id
    };
    let reachable = engine.can_reach(&network, lookup(from), lookup(to));

    if json {
        write_json(
            out,
            &serde_json::json!({ "from": from, "to": to, "reachable": reachable }),
        )
    } else {
        writeln!(out, "{}", reachable)?;
        Ok(())
    }
}

/// Print adjacency keys unreachable from `start`, sorted.
pub fn cmd_unreachable<W: Write>(
    path: &Path,
    start: &str,
    json: bool,
    out: &mut W,
) -> GraphResult<()> {
    let adjacency = GraphReader::read_adjacency(path)?;
    let engine = GraphQueries::new();

    let mut unreachable: Vec<String> = engine
        .unreachable(&adjacency, &start.to_string())
        .into_iter()
        .collect();
    unreachable.sort();

    if json {
        write_json(
            out,
            &serde_json::json!({ "start": start, "unreachable": unreachable }),
        )
    } else {
        for key in &unreachable {
            writeln!(out, "{}", key)?;
        }
        Ok(())
    }
}

/// Print vertex and edge counts of a document.
pub fn cmd_stats<W: Write>(
    path: &Path,
    kind: DocumentKind,
    json: bool,
    out: &mut W,
) -> GraphResult<()> {
    let (vertices, edges) = match kind {
        DocumentKind::Vertex => {
            let graph = GraphReader::read_vertex_graph(path)?;
            (graph.vertex_count(), graph.edge_count())
        }
        DocumentKind::Flights => {
            let network = GraphReader::read_flight_network(path)?;
            (network.airport_count(), network.flight_count())
        }
        DocumentKind::Adjacency => {
            let adjacency = GraphReader::read_adjacency(path)?;
            (adjacency.len(), adjacency.values().map(Vec::len).sum())
        }
    };

    if json {
        write_json(
            out,
            &serde_json::json!({
                "file": path.display().to_string(),
                "kind": kind.name(),
                "vertices": vertices,
                "edges": edges,
            }),
        )
    } else {
        writeln!(out, "File: {}", path.display())?;
        writeln!(out, "Kind: {}", kind.name())?;
        writeln!(out, "Vertices: {}", vertices)?;
        writeln!(out, "Edges: {}", edges)?;
        Ok(())
    }
}
