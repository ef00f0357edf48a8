use crate::domain::ports::SceneRenderer;
use crate::domain::scene::GraphScene;
use anyhow::{Context, Result};

/// Pretty-printed JSON scene, for consumption by an external layout/rendering tool.
#[derive(Debug, Default)]
pub struct JsonSceneRenderer;

impl JsonSceneRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl SceneRenderer for JsonSceneRenderer {
    fn render(&self, scene: &GraphScene) -> Result<String> {
        serde_json::to_string_pretty(scene).context("Failed to serialize graph scene")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scene::{NodeRole, SceneEdge, SceneNode};

    #[test]
    fn test_json_scene_shape() {
        let scene = GraphScene {
            nodes: vec![SceneNode {
                id: "a".into(),
                metadata: "m".into(),
                role: NodeRole::Altered,
            }],
            edges: vec![SceneEdge {
                source: "a".into(),
                target: "a".into(),
                integration_type: "cron".into(),
                metadata: "tick".into(),
            }],
        };
        let out = JsonSceneRenderer::new().render(&scene).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["nodes"][0]["role"], "altered");
        assert_eq!(value["edges"][0]["integration_type"], "cron");
    }
}
