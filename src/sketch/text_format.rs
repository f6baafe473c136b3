//! The line-oriented text format sketches are saved in.
//!
//! ```text
//! A 0 0
//! B 100 0
//!
//! NONE 0 1
//! ```
//!
//! Each vertex line holds the vertex element and its coordinates, in
//! insertion order.  A single blank line separates the vertices from the edge
//! lines, which hold the edge element and the 0-based indices of its origin
//! and destination among the vertex lines.

use std::{
    collections::HashMap,
    fs::{self, File},
    io::{self, BufRead, BufReader, Write},
    path::Path,
};

use tracing::{debug, info_span};

use super::{GraphSketch, Point};
use crate::{error::GraphError, graph::Graph};

#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// A line could not be understood.  Lines are numbered from 1.
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
    /// An element that would not read back as a single field.
    #[error("cannot write element {0:?}: elements must be non-empty and free of whitespace")]
    InvalidElement(String),
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Writes `sketch` in the text format.
pub fn write_sketch<W: Write>(sketch: &GraphSketch, writer: &mut W) -> Result<(), FormatError> {
    let graph = sketch.graph();
    let vertices = graph.vertices();
    let indices: HashMap<_, _> = vertices.iter().enumerate().map(|(i, &v)| (v, i)).collect();

    for &vertex in &vertices {
        let element = checked_element(graph.vertex_data(vertex)?)?;
        let Point { x, y } = sketch.position(vertex)?;
        writeln!(writer, "{element} {x} {y}")?;
    }
    writeln!(writer)?;
    for edge in graph.edges() {
        let element = checked_element(graph.edge_data(edge)?)?;
        let (origin, destination) = graph.end_vertices(edge)?;
        writeln!(writer, "{element} {} {}", indices[&origin], indices[&destination])?;
    }
    Ok(())
}

/// Reads a sketch written by [`write_sketch`].
///
/// Edges go through [`GraphSketch::add_edge`], so a self-loop or a repeated
/// pair in the input is dropped.
pub fn read_sketch<R: BufRead>(reader: R) -> Result<GraphSketch, FormatError> {
    let mut sketch = GraphSketch::new();
    let mut vertices = Vec::new();
    let mut in_edges = false;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let number = index + 1;
        let parse_error = |message: String| FormatError::Parse {
            line: number,
            message,
        };

        if line.is_empty() {
            if in_edges {
                return Err(parse_error("unexpected second blank line".to_string()));
            }
            in_edges = true;
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        let [element, first, second] = fields[..] else {
            return Err(parse_error(format!(
                "expected 3 fields, found {}",
                fields.len()
            )));
        };

        if in_edges {
            let vertex = |field: &str| {
                parse_index(field)
                    .and_then(|i| vertices.get(i).copied())
                    .ok_or_else(|| {
                        parse_error(format!(
                            "`{field}` is not the index of one of the {} vertices",
                            vertices.len()
                        ))
                    })
            };
            let (origin, destination) = (vertex(first)?, vertex(second)?);
            sketch.add_edge(origin, destination, element)?;
        } else {
            let coordinate = |field: &str| {
                field
                    .parse::<f64>()
                    .map_err(|err| parse_error(format!("bad coordinate `{field}`: {err}")))
            };
            let position = Point::new(coordinate(first)?, coordinate(second)?);
            vertices.push(sketch.add_vertex(element, position));
        }
    }

    Ok(sketch)
}

/// Parses a vertex index.  Integral floating-point spellings such as `1.0`
/// are accepted as well.
fn parse_index(field: &str) -> Option<usize> {
    if let Ok(index) = field.parse::<usize>() {
        return Some(index);
    }
    let value = field.parse::<f64>().ok()?;
    (value.is_finite() && value >= 0.0 && value.fract() == 0.0).then_some(value as usize)
}

fn checked_element(element: &str) -> Result<&str, FormatError> {
    if element.is_empty() || element.contains(char::is_whitespace) {
        return Err(FormatError::InvalidElement(element.to_string()));
    }
    Ok(element)
}

impl GraphSketch {
    pub fn to_text(&self) -> Result<String, FormatError> {
        let mut buffer = Vec::new();
        write_sketch(self, &mut buffer)?;
        // Everything written above is UTF-8.
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    pub fn from_text(text: &str) -> Result<Self, FormatError> {
        read_sketch(text.as_bytes())
    }

    /// Writes the sketch to the file at `path`, replacing its contents.  The
    /// file is left untouched if the sketch cannot be written out.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), FormatError> {
        let path = path.as_ref();
        let _span = info_span!("save_sketch", path = %path.display()).entered();
        let text = self.to_text()?;
        fs::write(path, text)?;
        debug!(
            vertices = self.graph().num_vertices(),
            edges = self.graph().num_edges(),
            "saved sketch"
        );
        Ok(())
    }

    /// Reads a sketch from the file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FormatError> {
        let path = path.as_ref();
        let _span = info_span!("load_sketch", path = %path.display()).entered();
        let sketch = read_sketch(BufReader::new(File::open(path)?))?;
        debug!(
            vertices = sketch.graph().num_vertices(),
            edges = sketch.graph().num_edges(),
            "loaded sketch"
        );
        Ok(sketch)
    }
}
