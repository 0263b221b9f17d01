use forge::config::find_generator;
use forge::generator::Generator;
use forge::init::{init_root, sample_definition, SAMPLE_FILE};
use forge::prompt::{CollectedData, ReaderPrompter};
use std::fs;
use std::io::Cursor;
use tempfile::TempDir;

fn prompter(input: &str) -> ReaderPrompter<Cursor<Vec<u8>>, Vec<u8>> {
    ReaderPrompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

#[test]
fn test_init_writes_loadable_sample() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join(".forge");

    let written = init_root(&prompter(""), &root, false).unwrap();
    assert_eq!(written, Some(root.join(SAMPLE_FILE)));

    let definition = find_generator(&root, "sample").unwrap();
    assert_eq!(definition, sample_definition());
}

#[test]
fn test_sample_generates() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join(".forge");
    let output = temp_dir.path().join("out");
    init_root(&prompter(""), &root, false).unwrap();

    let values: CollectedData = [("prompt_1", "one"), ("prompt_2", "two")]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    let prompt = prompter("");
    let files =
        Generator::new(&prompt, &root).with_output_dir(&output).run("sample", &values).unwrap();

    assert_eq!(files.len(), 2);
    assert_eq!(fs::read_to_string(output.join("output-1.txt")).unwrap(), "prompt_1: one\n");
    assert_eq!(fs::read_to_string(output.join("output-2.txt")).unwrap(), "prompt_2: two\n");
}

#[test]
fn test_init_keeps_existing_when_declined() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(root.join(SAMPLE_FILE), "name: mine\n").unwrap();

    let written = init_root(&prompter("n\n"), root, false).unwrap();
    assert_eq!(written, None);
    assert_eq!(fs::read_to_string(root.join(SAMPLE_FILE)).unwrap(), "name: mine\n");
}
