use std::{
    collections::HashMap,
    fmt::{Debug, Formatter},
};

use crate::{
    graph::Graph,
    util::{FormatDebugAs, FormatDebugWith},
};

/// Formats a graph for debug output with automatic vertex numbering.
///
/// Vertices are labeled with their index in insertion order and edges with
/// the labels of their ends, `0 -- 1`.  Edges are listed sorted by those
/// labels.  When the vertex or edge element type is zero-sized the elements
/// are omitted and a plain list of labels is printed instead of a map.
pub fn format_debug<G>(graph: &G, fmt: &mut Formatter<'_>, name: &str) -> std::fmt::Result
where
    G: Graph,
    G::VertexData: Debug,
    G::EdgeData: Debug,
{
    let vertices = graph.vertices();
    let vertex_tags: HashMap<_, _> = vertices
        .iter()
        .enumerate()
        .map(|(i, &vid)| (vid, i))
        .collect();

    let mut edges: Vec<_> = graph
        .edges()
        .into_iter()
        .filter_map(|eid| {
            let (from, to) = graph.end_vertices(eid).ok()?;
            let data = graph.edge_data(eid).ok()?;
            Some(((vertex_tags[&from], vertex_tags[&to]), data))
        })
        .collect();
    edges.sort_by_key(|&(tags, _)| tags);

    let separator = if graph.is_directed() { "->" } else { "--" };
    let edge_tag = |&(from, to): &(usize, usize)| FormatDebugAs(format!("{from} {separator} {to}"));

    fmt.debug_struct(name)
        .field(
            "vertices",
            &FormatDebugWith(|f: &mut Formatter<'_>| {
                if std::mem::size_of::<G::VertexData>() == 0 {
                    f.debug_list()
                        .entries((0..vertices.len()).map(|i| FormatDebugAs(i.to_string())))
                        .finish()
                } else {
                    f.debug_map()
                        .entries(vertices.iter().enumerate().filter_map(|(i, &vid)| {
                            Some((FormatDebugAs(i.to_string()), graph.vertex_data(vid).ok()?))
                        }))
                        .finish()
                }
            }),
        )
        .field(
            "edges",
            &FormatDebugWith(|f: &mut Formatter<'_>| {
                if std::mem::size_of::<G::EdgeData>() == 0 {
                    f.debug_list()
                        .entries(edges.iter().map(|(tags, _)| edge_tag(tags)))
                        .finish()
                } else {
                    f.debug_map()
                        .entries(edges.iter().map(|(tags, data)| (edge_tag(tags), data)))
                        .finish()
                }
            }),
        )
        .finish()
}
