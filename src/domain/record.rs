use serde::{Deserialize, Serialize};

/// One input row: a directed integration between two resources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub resource_id_from: String,
    pub resource_id_to: String,
    pub integration_type: String,
    #[serde(default)]
    pub metadata: String,
}

impl EdgeRecord {
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        integration_type: impl Into<String>,
        metadata: impl Into<String>,
    ) -> Self {
        Self {
            resource_id_from: from.into(),
            resource_id_to: to.into(),
            integration_type: integration_type.into(),
            metadata: metadata.into(),
        }
    }
}
