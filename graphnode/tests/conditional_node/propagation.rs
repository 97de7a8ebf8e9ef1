//! Successor errors pass through unchanged; nested conditionals; state ownership.

use std::sync::Arc;

use graphnode::{ConditionalNode, Node, NodeError, State};
use serde_json::json;

use crate::common::{result_of, FailingNode, MockNode, TrailNode};

/// The chosen successor fails: the dispatcher returns that exact error.
#[tokio::test]
async fn successor_error_propagates_unchanged() {
    let mut node = ConditionalNode::new("k");
    node.add_successor(Arc::new(FailingNode::new()));
    node.add_successor(Arc::new(MockNode::new("false_node", "False Node Executed")));

    let err = node
        .execute(State::new().with("k", "v"))
        .await
        .unwrap_err();
    match err {
        NodeError::ExecutionFailed(msg) => assert_eq!(msg, "always fails"),
        other => panic!("expected ExecutionFailed, got {:?}", other),
    }
}

/// The failing successor is on the branch not taken: execution succeeds.
#[tokio::test]
async fn failing_branch_not_taken_is_not_run() {
    let mut node = ConditionalNode::new("k");
    node.add_successor(Arc::new(FailingNode::new()));
    node.add_successor(Arc::new(MockNode::new("false_node", "False Node Executed")));

    let state = node.execute(State::new()).await.unwrap();
    assert_eq!(result_of(&state), Some("False Node Executed"));
}

/// Successor mutations come back to the caller; the dispatcher adds none of its own.
#[tokio::test]
async fn returns_successor_state() {
    let mut node = ConditionalNode::new("doc");
    node.add_successor(Arc::new(TrailNode::new("parse")));
    node.add_successor(Arc::new(TrailNode::new("fetch")));

    let state = node
        .execute(State::new().with("doc", "<p>hi</p>"))
        .await
        .unwrap();
    assert_eq!(state.get("trail"), Some(&json!(["parse"])));
    assert_eq!(state.get("doc"), Some(&json!("<p>hi</p>")));
    assert_eq!(state.len(), 2);
}

/// A conditional node used as a successor of another conditional node.
#[tokio::test]
async fn nested_conditionals_route_through_both() {
    let mut inner = ConditionalNode::new("chunks").with_name("check_chunks");
    inner.add_successor(Arc::new(TrailNode::new("merge")));
    inner.add_successor(Arc::new(TrailNode::new("generate")));

    let mut outer = ConditionalNode::new("doc").with_name("check_doc");
    outer.add_successor(Arc::new(inner));
    outer.add_successor(Arc::new(TrailNode::new("fetch")));

    let state = outer
        .execute(State::new().with("doc", "x").with("chunks", json!([1, 2])))
        .await
        .unwrap();
    assert_eq!(state.get("trail"), Some(&json!(["merge"])));

    let state = outer
        .execute(State::new().with("doc", "x").with("chunks", json!([])))
        .await
        .unwrap();
    assert_eq!(state.get("trail"), Some(&json!(["generate"])));

    let state = outer.execute(State::new()).await.unwrap();
    assert_eq!(state.get("trail"), Some(&json!(["fetch"])));
}

/// A misbuilt inner conditional surfaces its structural error through the outer one.
#[tokio::test]
async fn nested_structural_error_propagates() {
    let inner = ConditionalNode::new("chunks").with_name("check_chunks");

    let mut outer = ConditionalNode::new("doc");
    outer.add_successor(Arc::new(inner));
    outer.add_successor(Arc::new(TrailNode::new("fetch")));

    let err = outer
        .execute(State::new().with("doc", "x"))
        .await
        .unwrap_err();
    match err {
        NodeError::Structural { node, found, .. } => {
            assert_eq!(node, "check_chunks");
            assert_eq!(found, 0);
        }
        other => panic!("expected Structural, got {:?}", other),
    }
}

/// Independent traversals sharing one dispatcher, each with its own state.
#[tokio::test]
async fn concurrent_traversals_with_own_state() {
    let mut node = ConditionalNode::new("k");
    node.add_successor(Arc::new(TrailNode::new("yes")));
    node.add_successor(Arc::new(TrailNode::new("no")));
    let node = Arc::new(node);

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let node = node.clone();
            tokio::spawn(async move {
                let state = State::new().with("k", i % 2 == 0);
                node.execute(state).await
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let state = handle.await.unwrap().unwrap();
        let expected = if i % 2 == 0 { "yes" } else { "no" };
        assert_eq!(state.get("trail"), Some(&json!([expected])));
    }
}
