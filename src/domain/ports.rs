use crate::domain::record::EdgeRecord;
use crate::domain::scene::GraphScene;
use anyhow::Result;

/// Edge record source port (implemented by Infrastructure)
pub trait EdgeRecordSource {
    /// Records in input order; rows with empty identifiers must be rejected here.
    fn load(&self) -> Result<Vec<EdgeRecord>>;
}

/// Scene renderer port
pub trait SceneRenderer: Send + Sync {
    fn render(&self, scene: &GraphScene) -> Result<String>;
}
