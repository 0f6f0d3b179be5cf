//! Tests for `src/agent/envelope.rs`: envelope assembly and its wire shape.

use serde_json::json;

use autoagent::agent::envelope::{EnvelopeBuilder, EnvelopeError};
use autoagent::types::TaskStatus;

#[test]
fn envelope_serializes_to_wire_shape() {
    let envelope = EnvelopeBuilder::with_id_base(1_700_000_000_000)
        .task("Initialize web scraper", TaskStatus::Completed, None)
        .completed("Extract data from target", "156 items extracted")
        .execution("1. Target: target website")
        .response("done")
        .build()
        .expect("should build");

    let value = serde_json::to_value(&envelope).expect("should serialize");
    assert_eq!(
        value,
        json!({
            "response": "done",
            "tasks": [
                {
                    "id": "task-1700000000000",
                    "description": "Initialize web scraper",
                    "status": "completed"
                },
                {
                    "id": "task-1700000000001",
                    "description": "Extract data from target",
                    "status": "completed",
                    "result": "156 items extracted"
                }
            ],
            "execution": "1. Target: target website"
        })
    );
}

#[test]
fn whitespace_response_counts_as_missing() {
    let result = EnvelopeBuilder::new()
        .response(" \n ")
        .completed("a", "b")
        .execution("x")
        .build();
    assert_eq!(result.expect_err("should fail"), EnvelopeError::EmptyResponse);
}

#[test]
fn builder_ids_are_distinct_within_one_envelope() {
    let mut builder = EnvelopeBuilder::new();
    for n in 0..50 {
        builder = builder.completed(format!("step {n}"), "ok");
    }
    let envelope = builder
        .response("r")
        .execution("x")
        .build()
        .expect("should build");

    let mut ids: Vec<&str> = envelope.tasks.iter().map(|t| t.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 50);
}

#[test]
fn error_messages_are_descriptive() {
    assert_eq!(
        EnvelopeError::NoTasks.to_string(),
        "backend reported no tasks"
    );
}
