use packvet::{DiagnosticBundle, Entry, StateError, TypeRegistry};
use serde_json::Value;

fn rendered(bundle: &DiagnosticBundle) -> Value {
    serde_json::from_str(&bundle.render_json().expect("render_json")).expect("valid JSON")
}

#[test]
fn json_output_counts_type_and_tier() {
    let mut bundle = DiagnosticBundle::new();
    bundle.set_type(4);
    bundle.set_tier(4);
    bundle.set_tier(3);

    bundle.error(Entry::new(&[], "error").with_description("description"));
    bundle.warning(Entry::new(&[], "warning").with_description("description"));
    bundle.notice(Entry::new(&[], "notice").with_description("description"));

    let results = rendered(&bundle);
    assert_eq!(results["messages"].as_array().map(Vec::len), Some(3));
    assert_eq!(results["detected_type"], "langpack");
    assert_eq!(results["success"], false);
    assert_eq!(results["ending_tier"], 4);
}

#[test]
fn ending_tier_is_highest_ever_not_last_set() {
    let mut bundle = DiagnosticBundle::new();
    bundle.set_tier(4);
    bundle.set_tier(3);
    assert_eq!(bundle.ending_tier(), 4);
    assert_eq!(bundle.tier(), 3);
}

#[test]
fn detected_type_round_trips_unknown_codes() {
    let mut bundle = DiagnosticBundle::new();
    bundle.set_type(5);
    assert_eq!(bundle.detected_type(), Some(5));

    // Outside the default table: the code is kept, the name is absent.
    bundle.set_type(99);
    assert_eq!(bundle.detected_type(), Some(99));
    assert_eq!(bundle.detected_type_name(), None);
    assert_eq!(rendered(&bundle)["detected_type"], Value::Null);
}

#[test]
fn detected_type_last_call_wins() {
    let mut bundle = DiagnosticBundle::new();
    bundle.set_type(1);
    bundle.set_type(4);
    assert_eq!(bundle.detected_type_name(), Some("langpack"));
}

#[test]
fn injected_type_table_is_used() {
    let mut bundle =
        DiagnosticBundle::new().with_types(TypeRegistry::new().with_type(7, "sideload"));
    bundle.set_type(7);
    assert_eq!(rendered(&bundle)["detected_type"], "sideload");
}

#[test]
fn messages_keep_recording_order() {
    let mut bundle = DiagnosticBundle::new();
    bundle.error(Entry::new(&[], "first"));
    bundle.notice(Entry::new(&[], "second"));
    bundle.warning(Entry::new(&[], "third"));
    bundle.error(Entry::new(&[], "fourth"));

    let results = rendered(&bundle);
    let messages = results["messages"].as_array().expect("messages array");
    let texts: Vec<&str> = messages
        .iter()
        .map(|message| message["message"].as_str().expect("message text"))
        .collect();
    assert_eq!(texts, ["first", "second", "third", "fourth"]);
}

#[test]
fn file_structure_under_nested_states() {
    let mut bundle = DiagnosticBundle::new();

    bundle.error(Entry::new(&[], "error").with_file("file1").with_line(123));
    bundle.error(Entry::new(&[], "error").with_file("file2"));
    bundle.error(Entry::new(&[], "error"));

    bundle.push_state(Some("foo"));
    bundle.warning(Entry::new(&[], "warning").with_file("file4").with_line(123));
    bundle.warning(Entry::new(&[], "warning").with_file("file5"));
    bundle.warning(Entry::new(&[], "warning"));
    bundle.pop_state().expect("balanced pop");

    let results = rendered(&bundle);
    let messages = results["messages"].as_array().expect("messages array");
    assert_eq!(messages.len(), 6);

    let mut expected = vec![
        serde_json::json!("file1"),
        serde_json::json!("file2"),
        serde_json::json!(""),
        serde_json::json!(["foo", "file4"]),
        serde_json::json!(["foo", "file5"]),
        serde_json::json!(["foo", ""]),
    ];
    for message in messages {
        let position = expected
            .iter()
            .position(|file| file == &message["file"])
            .unwrap_or_else(|| panic!("unexpected file field: {}", message["file"]));
        expected.remove(position);
    }
    assert!(expected.is_empty());
}

#[test]
fn pops_do_not_rewrite_recorded_messages() {
    let mut bundle = DiagnosticBundle::new();
    bundle.push_state(Some("foo"));
    bundle.error(Entry::new(&[], "inner").with_file("inner.js"));
    bundle.pop_state().expect("balanced pop");
    bundle.error(Entry::new(&[], "outer").with_file("outer.js"));

    let results = rendered(&bundle);
    let messages = results["messages"].as_array().expect("messages array");
    assert_eq!(messages[0]["file"], serde_json::json!(["foo", "inner.js"]));
    assert_eq!(messages[1]["file"], "outer.js");
}

#[test]
fn notices_never_fail_the_bundle() {
    let mut bundle = DiagnosticBundle::new();
    bundle.notice(Entry::new(&[], ""));

    let results = rendered(&bundle);
    let messages = results["messages"].as_array().expect("messages array");
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0]["type"], "notice");

    assert!(!bundle.failed(false));
    assert!(!bundle.failed(true));
}

#[test]
fn failed_gate_by_severity() {
    let mut warnings_only = DiagnosticBundle::new();
    warnings_only.warning(Entry::new(&[], "warning"));
    assert!(!warnings_only.failed(false));
    assert!(warnings_only.failed(true));

    let mut with_error = DiagnosticBundle::new();
    with_error.error(Entry::new(&[], "error"));
    assert!(with_error.failed(false));
    assert!(with_error.failed(true));
}

#[test]
fn construction_flags_seed_resources() {
    let bundle = DiagnosticBundle::new();
    assert!(bundle.determined());
    assert_eq!(bundle.get_resource("listed"), Some(&Value::Bool(true)));

    let bundle = DiagnosticBundle::new().with_determined(false);
    assert!(!bundle.determined());
    assert_eq!(bundle.get_resource("determined"), Some(&Value::Bool(false)));
    assert_eq!(bundle.get_resource("listed"), Some(&Value::Bool(true)));

    let bundle = DiagnosticBundle::new().with_listed(false);
    assert!(bundle.determined());
    assert_eq!(bundle.get_resource("listed"), Some(&Value::Bool(false)));
}

#[test]
fn pop_state_underflow_is_a_state_error() {
    let mut bundle = DiagnosticBundle::new();
    assert_eq!(bundle.pop_state(), Err(StateError::ScopeUnderflow));
}

#[test]
fn scoped_pops_on_early_return() {
    let mut bundle = DiagnosticBundle::new();
    let result: Result<(), StateError> = bundle.scoped(Some("inner.jar"), |bundle| {
        bundle.error(Entry::new(&[], "bad entry").with_file("f.js"));
        bundle.pop_state()?; // unbalances on purpose; scoped surfaces it
        Ok(())
    });
    assert_eq!(result, Err(StateError::ScopeUnderflow));

    let mut bundle = DiagnosticBundle::new();
    let result: Result<u32, StateError> = bundle.scoped(Some("inner.jar"), |bundle| {
        bundle.notice(Entry::new(&[], "fine"));
        Ok(7)
    });
    assert_eq!(result, Ok(7));
    assert_eq!(bundle.depth(), 0);
}

#[test]
fn render_is_idempotent_mid_run() {
    let mut bundle = DiagnosticBundle::new();
    bundle.warning(Entry::new(&[], "early"));
    let first = bundle.render_json().expect("render_json");
    let second = bundle.render_json().expect("render_json");
    assert_eq!(first, second);

    bundle.error(Entry::new(&[], "late"));
    let third = rendered(&bundle);
    assert_eq!(third["messages"].as_array().map(Vec::len), Some(2));
}
