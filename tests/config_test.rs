use forge::config::{find_generator, GeneratorDefinition, PathMapping, PromptField};
use forge::error::Error;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

const SAMPLE: &str = r#"
name: sample
prompts:
  - name: title
    message: "Title?"
  - name: kind
mappings:
  - input: t.tmpl
    output: "out/{{ title }}.go"
"#;

#[test]
fn test_find_generator() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "other.yaml", "name: other\n");
    write(temp_dir.path(), "sample.yml", SAMPLE);

    let definition = find_generator(temp_dir.path(), "sample").unwrap();
    assert_eq!(
        definition,
        GeneratorDefinition {
            name: "sample".to_string(),
            prompts: vec![
                PromptField { name: "title".to_string(), message: "Title?".to_string() },
                PromptField { name: "kind".to_string(), message: String::new() },
            ],
            mappings: vec![PathMapping {
                input: "t.tmpl".to_string(),
                output: "out/{{ title }}.go".to_string(),
            }],
        }
    );
}

#[test]
fn test_find_generator_nested_and_json() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "a/b/deep.yaml", "name: deep\n");
    write(
        temp_dir.path(),
        "c/gen.json",
        r#"{"name": "json-gen", "prompts": [], "mappings": [{"input": "x", "output": "y"}]}"#,
    );

    assert_eq!(find_generator(temp_dir.path(), "deep").unwrap().name, "deep");
    let json = find_generator(temp_dir.path(), "json-gen").unwrap();
    assert_eq!(json.mappings.len(), 1);
}

#[test]
fn test_find_generator_not_found() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "sample.yaml", SAMPLE);

    match find_generator(temp_dir.path(), "missing") {
        Err(Error::NotFound { name }) => assert_eq!(name, "missing"),
        other => panic!("Expected NotFound, got {other:?}"),
    }
}

#[test]
fn test_find_generator_empty_name_never_matches() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "nameless.yaml", "prompts: []\n");

    assert!(matches!(find_generator(temp_dir.path(), ""), Err(Error::NotFound { .. })));
}

#[test]
fn test_find_generator_ignores_other_extensions() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "notes.txt", "name: [not yaml");
    write(temp_dir.path(), "t.tmpl", "{{ title }}");
    write(temp_dir.path(), "sample.yaml", SAMPLE);

    assert!(find_generator(temp_dir.path(), "sample").is_ok());
}

#[test]
fn test_malformed_definition_before_match_aborts() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "a_broken.yaml", "name: [unclosed\n");
    write(temp_dir.path(), "b_sample.yaml", SAMPLE);

    match find_generator(temp_dir.path(), "sample") {
        Err(Error::ParseError { path, .. }) => assert!(path.ends_with("a_broken.yaml")),
        other => panic!("Expected ParseError, got {other:?}"),
    }
}

#[test]
fn test_malformed_definition_after_match_is_not_read() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "a_sample.yaml", SAMPLE);
    write(temp_dir.path(), "b_broken.yaml", "prompts: 5\n");

    assert_eq!(find_generator(temp_dir.path(), "sample").unwrap().name, "sample");
}

#[test]
fn test_duplicate_names_first_in_order_wins() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "a.yaml", "name: dup\nmappings:\n  - input: first\n    output: one\n");
    write(temp_dir.path(), "b.yaml", "name: dup\nmappings:\n  - input: second\n    output: two\n");

    let definition = find_generator(temp_dir.path(), "dup").unwrap();
    assert_eq!(definition.mappings[0].input, "first");
}

#[test]
fn test_missing_root_dir() {
    let temp_dir = TempDir::new().unwrap();
    let result = find_generator(temp_dir.path().join("absent"), "sample");
    assert!(matches!(result, Err(Error::WalkError(_))));
}

#[test]
fn test_non_utf8_definition_is_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("binary.yaml"), [0xff, 0xfe, 0x00]).unwrap();

    match find_generator(temp_dir.path(), "sample") {
        Err(Error::ParseError { path, .. }) => assert!(path.ends_with("binary.yaml")),
        other => panic!("Expected ParseError, got {other:?}"),
    }
}
