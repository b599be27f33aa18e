//! End-to-end tests for the suggestion pipeline.

use befriend_core::{
    EdgePolicy, NodeId, SocialGraph, SuggesterBuilder, SuggestionReport, Verdict, parse_graph_str,
};
use befriend_test_support::tracing::RecordingLayer;
use rstest::rstest;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;

fn run(text: &str, policy: EdgePolicy) -> SuggestionReport {
    let graph = parse_graph_str(text).expect("fixture input is well-formed");
    SuggesterBuilder::new()
        .with_edge_policy(policy)
        .build()
        .run(&graph)
}

#[rstest]
#[case::friend_of_friend("4 2 0\n1 2\n2 3\n", &[1, 0, 1, 0])]
#[case::block_outside_component("3 1 1\n1 2\n1 3\n", &[0, 0, 0])]
#[case::single_node("1 0 0\n", &[0])]
#[case::empty_graph("0 0 0\n", &[])]
fn well_formed_inputs_agree_under_both_policies(#[case] text: &str, #[case] expected: &[i64]) {
    for policy in [EdgePolicy::Verbatim, EdgePolicy::Distinct] {
        assert_eq!(run(text, policy).counts(), expected, "policy {policy}");
    }
}

#[rstest]
#[case::verbatim(EdgePolicy::Verbatim, &[-1, -1])]
#[case::distinct(EdgePolicy::Distinct, &[0, 0])]
fn duplicate_friend_edge_follows_policy(#[case] policy: EdgePolicy, #[case] expected: &[i64]) {
    let report = run("2 2 0\n1 2\n1 2\n", policy);
    assert_eq!(report.counts(), expected);
}

#[rstest]
fn larger_graph_with_blocks() {
    // Components {1,2,3,4,5} and {6,7}; 1 blocks 5 and 6.
    let text = "7 5 2\n1 2\n2 3\n3 4\n4 5\n6 7\n1 5\n1 6\n";
    let report = run(text, EdgePolicy::Verbatim);
    assert_eq!(report.counts(), &[2, 2, 2, 2, 2, 0, 0]);
    assert_eq!(report.component_count(), 2);
    assert_eq!(report.largest_component(), 5);
    let five = NodeId::new(5).expect("non-zero");
    assert_eq!(report.get(five), Some(2));
}

#[rstest]
fn compare_flags_first_difference() {
    let report = run("4 2 0\n1 2\n2 3\n", EdgePolicy::Verbatim);
    assert_eq!(report.compare(&[1, 0, 1, 0]), Verdict::Accepted);
    assert!(matches!(
        report.compare(&[1, 1, 1, 0]),
        Verdict::WrongAnswer { node, expected: 1, actual: 0 } if node.get() == 2
    ));
}

#[rstest]
fn run_emits_span_and_summary_event() {
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    let graph = SocialGraph::from_edges(3, &[(1, 2), (1, 2)], &[(2, 3)]).expect("valid edges");

    tracing::subscriber::with_default(subscriber, || {
        SuggesterBuilder::new().build().run(&graph);
    });

    let span = layer.span_named("suggester.run").expect("run span recorded");
    assert_eq!(span.fields.get("nodes").map(String::as_str), Some("3"));
    assert_eq!(span.fields.get("friend_edges").map(String::as_str), Some("2"));
    assert_eq!(span.fields.get("block_edges").map(String::as_str), Some("1"));
    assert_eq!(span.fields.get("policy").map(String::as_str), Some("verbatim"));

    let summary = layer
        .events_at(Level::INFO)
        .into_iter()
        .find(|event| event.message() == "computed suggestion counts")
        .expect("summary event recorded");
    assert_eq!(summary.fields.get("components").map(String::as_str), Some("2"));
    assert_eq!(
        summary.fields.get("negative_counts").map(String::as_str),
        Some("2")
    );
    assert_eq!(layer.events_at(Level::WARN).len(), 1);
}

#[rstest]
fn distinct_policy_emits_no_warning() {
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    let graph = SocialGraph::from_edges(2, &[(1, 2), (1, 2)], &[]).expect("valid edges");

    tracing::subscriber::with_default(subscriber, || {
        SuggesterBuilder::new()
            .with_edge_policy(EdgePolicy::Distinct)
            .build()
            .run(&graph);
    });

    assert!(layer.events_at(Level::WARN).is_empty());
}
