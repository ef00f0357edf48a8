use thiserror::Error;

/// Which end of an integration edge a problem refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Source,
    Target,
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Endpoint::Source => f.write_str("source"),
            Endpoint::Target => f.write_str("target"),
        }
    }
}

/// Errors raised while constructing a resource graph.
///
/// Queries never fail: an unknown resource yields a degenerate result instead.
#[derive(Debug, Error)]
pub enum GraphError {
    /// An edge endpoint identifier was empty.
    #[error("invalid input: {endpoint} resource identifier is empty")]
    InvalidInput { endpoint: Endpoint },

    /// A record in a build sequence was rejected; the build was aborted.
    #[error("edge record #{index} rejected")]
    InvalidRecord {
        index: usize,
        #[source]
        source: Box<GraphError>,
    },
}
