use crate::app::dto::{ImpactRequest, PolicyKind, RenderFormat, SceneRequest};
use crate::app::engine::ImpactEngine;
use anyhow::{Context as _, Result};
use std::path::Path;
use tracing::info;

pub fn display_summary(engine: &ImpactEngine) -> Result<()> {
    let health = engine.health()?;
    let graph = engine.graph()?;

    println!("Graph Summary ({}):", health.source_path);
    println!("  Resources:    {}", health.node_count);
    println!("  Integrations: {}", health.edge_count);
    println!("{}", "=".repeat(60));

    for edge in graph.edges() {
        println!(
            "  {} -> {} [{}] {}",
            edge.source, edge.target, edge.integration_type, edge.metadata
        );
    }

    Ok(())
}

pub fn display_impact(engine: &ImpactEngine, resource: &str, policy: PolicyKind) -> Result<()> {
    let result = engine.impact(ImpactRequest {
        resource: resource.to_string(),
        policy,
    })?;

    let label = match policy {
        PolicyKind::FirstLevel => "first-level",
        PolicyKind::Transitive => "transitive",
    };
    println!("Resources impacted ({}) by a change to {}:", label, resource);
    if !result.known {
        println!("  (resource not present in graph)");
    }
    println!("{}", "=".repeat(60));
    for (i, id) in result.impacted.iter().enumerate() {
        let marker = if id == resource { " (altered)" } else { "" };
        println!("{:>4}. {}{}", i + 1, id, marker);
    }
    println!("\n  Total: {}", result.impacted_count);

    Ok(())
}

pub fn display_neighbors(engine: &ImpactEngine, resource: &str) -> Result<()> {
    let result = engine.neighbors(resource)?;

    println!("Neighbors of {}:", resource);
    println!("  Upstream ({}):", result.predecessors.len());
    for id in &result.predecessors {
        println!("    {}", id);
    }
    println!("  Downstream ({}):", result.successors.len());
    for id in &result.successors {
        println!("    {}", id);
    }

    Ok(())
}

/// Render a scene to `output`, or to stdout when no path is given.
pub fn render_scene(
    engine: &ImpactEngine,
    req: SceneRequest,
    format: RenderFormat,
    output: Option<&Path>,
) -> Result<()> {
    let rendered = engine.render(req, format)?;

    match output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("Failed to write rendered graph: {}", path.display()))?;
            info!(path = %path.display(), ?format, "rendered graph written");
        }
        None => print!("{}", rendered),
    }

    Ok(())
}
