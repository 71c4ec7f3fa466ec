use crate::graph::DirectedGraph;
use crate::{Error, Result};
use log::debug;
use std::fmt::Debug;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

/// Reads a graph in DIMACS shortest-path format from any buffered reader.
///
/// A line `p sp <n> <m>` declares the vertex and edge counts and must appear
/// before the first edge line. A line `a <from> <to> <weight>` declares one
/// directed edge with 1-based vertex ids in `[1, n]`. All other lines
/// (comments included) are ignored.
///
/// The returned graph has `n + 1` vertex slots so that the 1-based ids from
/// the file index it directly; slot 0 is unused.
pub fn read_graph<W, R>(reader: R) -> Result<DirectedGraph<W>>
where
    W: Copy + Ord + Debug + FromStr,
    R: BufRead,
{
    let mut graph: Option<DirectedGraph<W>> = None;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        let mut fields = line.split_whitespace();

        match fields.next() {
            Some("p") => {
                if fields.next() != Some("sp") {
                    return Err(Error::MalformedLine(line_no, line.clone()));
                }
                let n: usize = parse_field(fields.next(), line_no, &line)?;
                let m: usize = parse_field(fields.next(), line_no, &line)?;
                debug!("graph header: {} vertices, {} edges", n, m);
                // Slot 0 is unused so 1-based ids need no translation.
                graph = Some(DirectedGraph::with_capacity(n + 1));
            }
            Some("a") => {
                let graph = graph.as_mut().ok_or(Error::MissingHeader)?;
                let from: usize = parse_field(fields.next(), line_no, &line)?;
                let to: usize = parse_field(fields.next(), line_no, &line)?;
                let weight: W = parse_field(fields.next(), line_no, &line)?;
                graph.add_edge(from, to, weight)?;
            }
            _ => {}
        }
    }

    graph.ok_or(Error::MissingHeader)
}

/// Opens a file and reads it with [`read_graph`]
pub fn load_graph<W, P>(path: P) -> Result<DirectedGraph<W>>
where
    W: Copy + Ord + Debug + FromStr,
    P: AsRef<Path>,
{
    let file = File::open(path)?;
    read_graph(BufReader::new(file))
}

fn parse_field<T: FromStr>(field: Option<&str>, line_no: usize, line: &str) -> Result<T> {
    field
        .and_then(|f| f.parse().ok())
        .ok_or_else(|| Error::MalformedLine(line_no, line.to_string()))
}
