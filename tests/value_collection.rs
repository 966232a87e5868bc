use drillbox::collect::{
    flatten_groups, ValueCollector, COMMA_PROMPT, FIRST_VALUE_PROMPT, SECOND_VALUE_PROMPT,
};
use drillbox::concat::{concat_values, ConcatOptions};
use drillbox::ScriptedLines;
use std::fs;
use tempfile::tempdir;

fn group(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|t| t.to_string()).collect()
}

#[test]
fn groups_then_file_then_join() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("values.txt");
    fs::write(&path, "Mundo\n  spaced  \r\n").unwrap();

    let values = ValueCollector::new(vec![group(&["Olá"]), group(&["a,b", "c"])])
        .with_file(Some(path))
        .collect(&mut ScriptedLines::empty())
        .unwrap();

    assert_eq!(values, vec!["Olá", "a", "b", "c", "Mundo", "  spaced  "]);

    let options = ConcatOptions {
        separator: "|".to_string(),
        trim_each_value: true,
        ..Default::default()
    };
    assert_eq!(concat_values(&values, &options), "Olá|a|b|c|Mundo|spaced");
}

#[test]
fn file_alone_is_enough_to_skip_prompts() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("values.txt");
    fs::write(&path, "x\ny\n").unwrap();

    let mut lines = ScriptedLines::new(["never read"]);
    let values = ValueCollector::new(Vec::new())
        .with_file(Some(path))
        .collect(&mut lines)
        .unwrap();

    assert_eq!(values, vec!["x", "y"]);
    assert!(lines.prompts().is_empty());
}

#[test]
fn empty_file_falls_back_to_prompts() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.txt");
    fs::write(&path, "").unwrap();

    let mut lines = ScriptedLines::new(["p, q"]);
    let values = ValueCollector::new(Vec::new())
        .with_file(Some(path))
        .collect(&mut lines)
        .unwrap();

    assert_eq!(values, vec!["p", "q"]);
}

#[test]
fn missing_file_wins_over_prompts() {
    let dir = tempdir().unwrap();
    let mut lines = ScriptedLines::new(["a,b"]);

    let err = ValueCollector::new(Vec::new())
        .with_file(Some(dir.path().join("nope.txt")))
        .collect(&mut lines)
        .unwrap_err();

    assert_eq!(err.code.as_str(), "input.file_not_found");
    assert!(lines.prompts().is_empty());
}

#[test]
fn full_fallback_dialogue() {
    let mut lines = ScriptedLines::new(["", "first", "second"]);
    let values = ValueCollector::new(Vec::new())
        .collect(&mut lines)
        .unwrap();

    assert_eq!(values, vec!["first", "second"]);
    assert_eq!(
        lines.prompts(),
        [COMMA_PROMPT, FIRST_VALUE_PROMPT, SECOND_VALUE_PROMPT]
    );
    assert_eq!(concat_values(&values, &ConcatOptions::default()), "firstsecond");
}

#[test]
fn flattening_preserves_encounter_order() {
    let groups = vec![group(&["3", "1,2"]), group(&[",", "0"]), group(&["", "9"])];
    assert_eq!(flatten_groups(&groups), vec!["3", "1", "2", "0", "", "9"]);
}

#[test]
fn comma_separator_round_trips_collected_values() {
    let values = flatten_groups(&[group(&["alpha", "beta"]), group(&["gamma"])]);
    let joined = concat_values(
        &values,
        &ConcatOptions {
            separator: ",".to_string(),
            ..Default::default()
        },
    );
    let split: Vec<String> = joined.split(',').map(String::from).collect();
    assert_eq!(split, values);
}
