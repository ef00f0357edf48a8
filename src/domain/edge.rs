/// Integration edge payload - a directed dependency or call relationship.
///
/// Direction reads "source depends on / calls into target".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegrationEdge {
    /// Protocol or call-style label, e.g. `http`, `queue`
    pub integration_type: String,
    /// Descriptive text
    pub metadata: String,
}

impl IntegrationEdge {
    pub fn new(integration_type: impl Into<String>, metadata: impl Into<String>) -> Self {
        Self {
            integration_type: integration_type.into(),
            metadata: metadata.into(),
        }
    }
}

/// Borrowed view of one edge, endpoints resolved to resource identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeView<'a> {
    pub source: &'a str,
    pub target: &'a str,
    pub integration_type: &'a str,
    pub metadata: &'a str,
}
