//! Edge record fixtures and CSV helpers.
#![allow(dead_code)]

use std::io::Write;
use std::path::{Path, PathBuf};

use resource_impact::domain::builder::GraphBuilder;
use resource_impact::domain::graph::ResourceGraph;
use resource_impact::domain::record::EdgeRecord;

pub const CSV_HEADER: &str = "resource_id_from,resource_id_to,integration_type,metadata";

/// A→B (http, call), B→C (queue, async), D→B (http, call2).
pub fn scenario_records() -> Vec<EdgeRecord> {
    vec![
        EdgeRecord::new("A", "B", "http", "call"),
        EdgeRecord::new("B", "C", "queue", "async"),
        EdgeRecord::new("D", "B", "http", "call2"),
    ]
}

/// A small bookstore deployment with fan-out, a parallel integration and a cycle.
///
/// ```text
/// api-gateway -> book-ecs-fargate (http)
/// book-ecs-fargate -> book-dynamodb (sdk) x2 (read, write)
/// book-ecs-fargate -> book-sns (sdk)
/// book-sns -> book-sqs (subscription)
/// book-sqs -> book-lambda (trigger)
/// book-lambda -> book-ecs-fargate (http)        (closes a cycle)
/// book-lambda -> book-s3 (sdk)
/// secrets-manager -> book-ecs-fargate (config)
/// mainframe -> api-gateway (batch)
/// ```
pub fn bookstore_records() -> Vec<EdgeRecord> {
    vec![
        EdgeRecord::new("api-gateway", "book-ecs-fargate", "http", "rest"),
        EdgeRecord::new("book-ecs-fargate", "book-dynamodb", "sdk", "read"),
        EdgeRecord::new("book-ecs-fargate", "book-dynamodb", "sdk", "write"),
        EdgeRecord::new("book-ecs-fargate", "book-sns", "sdk", "publish"),
        EdgeRecord::new("book-sns", "book-sqs", "subscription", "fan-out"),
        EdgeRecord::new("book-sqs", "book-lambda", "trigger", "poll"),
        EdgeRecord::new("book-lambda", "book-ecs-fargate", "http", "callback"),
        EdgeRecord::new("book-lambda", "book-s3", "sdk", "archive"),
        EdgeRecord::new("secrets-manager", "book-ecs-fargate", "config", "credentials"),
        EdgeRecord::new("mainframe", "api-gateway", "batch", "nightly"),
    ]
}

pub fn build(records: Vec<EdgeRecord>) -> ResourceGraph {
    GraphBuilder::new().build(records).expect("build graph")
}

pub fn csv_content(records: &[EdgeRecord]) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');
    for r in records {
        out.push_str(&format!(
            "{},{},{},{}\n",
            r.resource_id_from, r.resource_id_to, r.integration_type, r.metadata
        ));
    }
    out
}

/// Write `records` as `edges.csv` inside `dir`.
pub fn write_csv(dir: &Path, records: &[EdgeRecord]) -> PathBuf {
    write_raw_csv(dir, &csv_content(records))
}

pub fn write_raw_csv(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("edges.csv");
    let mut file = std::fs::File::create(&path).expect("create csv");
    file.write_all(content.as_bytes()).expect("write csv");
    path
}
