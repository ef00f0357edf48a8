/// Resource identifier (unique within one graph)
pub type ResourceId = String;

/// Resource node - one infrastructure or application component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceNode {
    pub id: ResourceId,
    /// Opaque payload; overwritten by every edge that references this node.
    pub metadata: String,
}

impl ResourceNode {
    pub fn new(id: impl Into<ResourceId>, metadata: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            metadata: metadata.into(),
        }
    }
}
