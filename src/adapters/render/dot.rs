use crate::domain::ports::SceneRenderer;
use crate::domain::scene::{GraphScene, NodeRole};
use anyhow::Result;
use std::fmt::Write as _;

/// Fill color per node role
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RolePalette {
    pub none: String,
    pub impacted: String,
    pub altered: String,
}

impl Default for RolePalette {
    fn default() -> Self {
        Self::full_graph()
    }
}

impl RolePalette {
    /// Colors for the whole graph view.
    pub fn full_graph() -> Self {
        Self {
            none: "#7678e8".into(),
            impacted: "red".into(),
            altered: "green".into(),
        }
    }

    /// Colors for the impacted-subgraph view.
    pub fn subgraph() -> Self {
        Self {
            none: "#7678e8".into(),
            impacted: "lightcoral".into(),
            altered: "gray".into(),
        }
    }

    pub fn color(&self, role: NodeRole) -> &str {
        match role {
            NodeRole::None => &self.none,
            NodeRole::Impacted => &self.impacted,
            NodeRole::Altered => &self.altered,
        }
    }
}

/// Graphviz DOT renderer. One statement per node and one per parallel edge.
#[derive(Debug, Default)]
pub struct DotSceneRenderer {
    palette: RolePalette,
}

impl DotSceneRenderer {
    pub fn new(palette: RolePalette) -> Self {
        Self { palette }
    }
}

impl SceneRenderer for DotSceneRenderer {
    fn render(&self, scene: &GraphScene) -> Result<String> {
        let mut out = String::from("digraph resources {\n");
        out.push_str("    node [style=filled];\n");

        for node in &scene.nodes {
            writeln!(
                out,
                "    \"{}\" [fillcolor=\"{}\", tooltip=\"{}\"];",
                escape(&node.id),
                escape(self.palette.color(node.role)),
                escape(&node.metadata)
            )?;
        }

        for edge in &scene.edges {
            writeln!(
                out,
                "    \"{}\" -> \"{}\" [label=\"{}\", tooltip=\"{}\"];",
                escape(&edge.source),
                escape(&edge.target),
                escape(&edge.integration_type),
                escape(&edge.metadata)
            )?;
        }

        out.push_str("}\n");
        Ok(out)
    }
}

/// Escape for a double-quoted DOT string.
fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => {}
            _ => escaped.push(c),
        }
    }
    escaped
}
