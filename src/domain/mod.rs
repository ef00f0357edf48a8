pub mod node;
pub mod edge;
pub mod error;
pub mod graph;
pub mod record;
pub mod builder;
pub mod impact;
pub mod scene;
pub mod ports;
