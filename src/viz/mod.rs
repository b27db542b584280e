//! Visualization generation module
//!
//! Layout and drawing are left to external tools: the graph is written as Graphviz
//! DOT and GraphML with a fill colour per node, next to an HTML summary.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use anyhow::Result;

use crate::analysis::{CommunityReport, SocialReport};
use crate::graph::CompressedGraph;

/// Matplotlib's `tab10` cycle, so community i gets colour `Ci`
pub const PALETTE: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// Colour for nodes outside every community
pub const UNASSIGNED: &str = "#d3d3d3";

/// Colour of the highlighted influencer node
pub const HIGHLIGHT: &str = "#d62728";

/// One colour per community, cycling through the palette
pub fn community_colors(count: usize) -> Vec<&'static str> {
    (0..count).map(|i| PALETTE[i % PALETTE.len()]).collect()
}

/// Fill colour per node; a node in several communities takes the last one's colour
pub fn node_colors(graph: &CompressedGraph, communities: &[Vec<u32>]) -> Vec<&'static str> {
    let mut colors = vec![UNASSIGNED; graph.node_count];
    for (members, color) in communities.iter().zip(community_colors(communities.len())) {
        for &node in members {
            colors[node as usize] = color;
        }
    }
    colors
}

/// Write DOT, GraphML and HTML views of a community detection run
pub fn render_communities(report: &CommunityReport, output_dir: &Path) -> Result<()> {
    let groups: Vec<Vec<u32>> = report
        .communities
        .iter()
        .flatten()
        .map(|c| c.members.clone())
        .collect();
    log::info!("Generating visualizations for {} communities", groups.len());

    let viz_dir = output_dir.join("visualizations");
    fs::create_dir_all(&viz_dir)?;

    let colors = node_colors(&report.graph, &groups);
    write_dot(&report.graph, &colors, &viz_dir.join("graph.dot"))?;
    write_graphml(&report.graph, &colors, &viz_dir.join("graph.graphml"))?;

    let mut body = Vec::new();
    match &report.communities {
        Some(communities) if !communities.is_empty() => {
            body.push("<h2>Detected Communities</h2>".to_string());
            body.push("<ul>".to_string());
            for (community, color) in communities.iter().zip(community_colors(communities.len())) {
                body.push(format!(
                    "  <li><span class=\"swatch\" style=\"background:{}\"></span><b>Community {}:</b> {:?} (density {:.3})</li>",
                    color, community.id, community.members, community.density
                ));
            }
            body.push("</ul>".to_string());
        }
        Some(_) => body.push("<p>No community is dense enough to report.</p>".to_string()),
        None => body.push("<p>No partition with few enough communities was found.</p>".to_string()),
    }

    let title = format!("Community Detection ({})", report.method);
    write_html(&title, &report.graph, report.seed, &body, &viz_dir.join("index.html"))?;

    log::info!("Visualizations generated successfully");
    Ok(())
}

/// Write DOT, GraphML and HTML views of a social network analysis
pub fn render_social(report: &SocialReport, output_dir: &Path) -> Result<()> {
    log::info!("Generating social network visualizations");

    let viz_dir = output_dir.join("visualizations");
    fs::create_dir_all(&viz_dir)?;

    let mut colors = vec![PALETTE[0]; report.graph.node_count];
    if let Some(node) = report.influencer {
        colors[node as usize] = HIGHLIGHT;
    }
    write_dot(&report.graph, &colors, &viz_dir.join("graph.dot"))?;
    write_graphml(&report.graph, &colors, &viz_dir.join("graph.graphml"))?;

    let mut body = Vec::new();
    match report.influencer {
        Some(node) => body.push(format!("<p>Influencer Node: <b>{}</b></p>", node)),
        None => body.push("<p>The network has no nodes.</p>".to_string()),
    }
    body.push("<table>".to_string());
    body.push("  <tr><th>Node</th><th>Degree</th><th>Closeness</th><th>Betweenness</th></tr>".to_string());
    for node in report.graph.nodes() {
        let score = |map: &crate::centrality::CentralityMap| map.get(&node).copied().unwrap_or(0.0);
        body.push(format!(
            "  <tr><td>{}</td><td>{:.4}</td><td>{:.4}</td><td>{:.4}</td></tr>",
            node,
            score(&report.measures.degree),
            score(&report.measures.closeness),
            score(&report.measures.betweenness)
        ));
    }
    body.push("</table>".to_string());

    write_html("Social Network Analysis", &report.graph, report.seed, &body, &viz_dir.join("index.html"))?;

    log::info!("Visualizations generated successfully");
    Ok(())
}

/// Undirected Graphviz graph with filled, labelled nodes
fn write_dot(graph: &CompressedGraph, colors: &[&str], path: &Path) -> Result<()> {
    let mut file = File::create(path)?;

    writeln!(file, "graph G {{")?;
    writeln!(file, "  layout=neato;")?;
    writeln!(file, "  node [shape=circle, style=filled];")?;
    for node in graph.nodes() {
        writeln!(file, "  {} [label=\"{}\", fillcolor=\"{}\"];", node, node, colors[node as usize])?;
    }
    for (u, v) in graph.edges() {
        writeln!(file, "  {} -- {};", u, v)?;
    }
    writeln!(file, "}}")?;

    Ok(())
}

fn write_graphml(graph: &CompressedGraph, colors: &[&str], path: &Path) -> Result<()> {
    let mut file = File::create(path)?;

    writeln!(file, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>")?;
    writeln!(file, "<graphml xmlns=\"http://graphml.graphdrawing.org/xmlns\">")?;
    writeln!(file, "  <key id=\"label\" for=\"node\" attr.name=\"label\" attr.type=\"string\"/>")?;
    writeln!(file, "  <key id=\"color\" for=\"node\" attr.name=\"color\" attr.type=\"string\"/>")?;
    writeln!(file, "  <graph id=\"G\" edgedefault=\"undirected\">")?;

    for node in graph.nodes() {
        writeln!(
            file,
            "    <node id=\"n{}\">\n      <data key=\"label\">{}</data>\n      <data key=\"color\">{}</data>\n    </node>",
            node, node, colors[node as usize]
        )?;
    }

    for (edge_id, (u, v)) in graph.edges().enumerate() {
        writeln!(file, "    <edge id=\"e{}\" source=\"n{}\" target=\"n{}\"/>", edge_id, u, v)?;
    }

    writeln!(file, "  </graph>")?;
    writeln!(file, "</graphml>")?;

    Ok(())
}

fn write_html(
    title: &str,
    graph: &CompressedGraph,
    seed: u64,
    body: &[String],
    path: &Path,
) -> Result<()> {
    let mut file = File::create(path)?;

    writeln!(file, "<!DOCTYPE html>")?;
    writeln!(file, "<html lang=\"en\">")?;
    writeln!(file, "<head>")?;
    writeln!(file, "  <meta charset=\"UTF-8\">")?;
    writeln!(file, "  <title>{}</title>", title)?;
    writeln!(file, "  <style>")?;
    writeln!(file, "    body {{ font-family: Arial, sans-serif; margin: 20px; }}")?;
    writeln!(file, "    h1, h2 {{ color: #333; }}")?;
    writeln!(file, "    .stats {{ background-color: #f9f9f9; padding: 15px; border-radius: 5px; }}")?;
    writeln!(file, "    .swatch {{ display: inline-block; width: 12px; height: 12px; margin-right: 6px; }}")?;
    writeln!(file, "    td, th {{ padding: 2px 10px; text-align: right; }}")?;
    writeln!(file, "  </style>")?;
    writeln!(file, "</head>")?;
    writeln!(file, "<body>")?;
    writeln!(file, "  <h1>{}</h1>", title)?;

    writeln!(file, "  <div class=\"stats\">")?;
    writeln!(file, "    <p>Nodes: {}</p>", graph.node_count)?;
    writeln!(file, "    <p>Edges: {}</p>", graph.edge_count())?;
    writeln!(file, "    <p>Seed: {}</p>", seed)?;
    writeln!(file, "    <p>Render <code>graph.dot</code> with Graphviz to see the network.</p>")?;
    writeln!(file, "  </div>")?;

    for line in body {
        writeln!(file, "  {}", line)?;
    }

    writeln!(file, "</body>")?;
    writeln!(file, "</html>")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::community::{Community, Method};

    #[test]
    fn palette_cycles() {
        let colors = community_colors(12);
        assert_eq!(colors[0], PALETTE[0]);
        assert_eq!(colors[10], PALETTE[0]);
        assert_eq!(colors[11], PALETTE[1]);
    }

    #[test]
    fn unassigned_nodes_are_grey_and_overlaps_take_the_last_colour() {
        let graph = CompressedGraph::from_edges(5, [(0, 1), (1, 2), (2, 3)]);
        let colors = node_colors(&graph, &[vec![0, 1, 2], vec![1, 2, 3]]);
        assert_eq!(colors, vec![PALETTE[0], PALETTE[1], PALETTE[1], PALETTE[1], UNASSIGNED]);
    }

    #[test]
    fn community_views_are_written() {
        let dir = tempfile::tempdir().unwrap();
        let graph = CompressedGraph::from_edges(6, [(1, 2), (2, 3), (1, 3), (4, 5)]);
        let report = CommunityReport {
            method: Method::BruteForce,
            seed: 1,
            communities: Some(vec![Community {
                id: 1,
                members: vec![1, 2, 3],
                size: 3,
                density: 1.0,
            }]),
            graph,
        };

        render_communities(&report, dir.path()).unwrap();

        let viz = dir.path().join("visualizations");
        let dot = fs::read_to_string(viz.join("graph.dot")).unwrap();
        assert!(dot.contains("4 -- 5;"));
        assert!(dot.contains(&format!("1 [label=\"1\", fillcolor=\"{}\"]", PALETTE[0])));
        let html = fs::read_to_string(viz.join("index.html")).unwrap();
        assert!(html.contains("<b>Community 1:</b> [1, 2, 3]"));
        assert!(viz.join("graph.graphml").exists());
    }
}
