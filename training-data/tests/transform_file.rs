use path_context::PathContextExtractor;
use serde_json::{Value, json};
use std::fs;
use training_data::{CodeId, Error, TrainingExample, transform_file};

fn write_dataset(dir: &tempfile::TempDir, value: &Value) -> std::path::PathBuf {
    let path = dir.path().join("data.json");
    fs::write(&path, serde_json::to_string(value).unwrap()).unwrap();
    path
}

#[test]
fn dataset_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_dataset(
        &dir,
        &json!([
            { "code_id": 1, "code": "x = 1", "label": "assign" },
            { "code_id": "bs-2", "code": "def f(a, b):\n    return a + b\n", "label": "add" },
            { "code_id": 3, "code": "pass", "label": "noop" }
        ]),
    );
    let output = dir.path().join("training_data.json");

    let summary = transform_file(&PathContextExtractor::default(), &input, &output, Some(1)).unwrap();
    assert_eq!(summary.examples, 3);

    let text = fs::read_to_string(&output).unwrap();
    assert!(text.contains("\n    {"), "four-space indentation expected");

    let examples: Vec<TrainingExample> = serde_json::from_str(&text).unwrap();
    assert_eq!(examples.len(), 3);
    assert_eq!(
        summary.contexts,
        examples.iter().map(|e| e.contexts.len()).sum::<usize>()
    );

    let by_id = |id: CodeId| examples.iter().find(|e| e.code_id == id).unwrap();

    let assign = by_id(CodeId::Int(1));
    assert_eq!(assign.label, "assign");
    assert_eq!(assign.contexts.len(), 1);
    assert_eq!(assign.contexts[0].path, "(identifier)^(assignment)_(integer)");

    assert!(!by_id(CodeId::Text("bs-2".into())).contexts.is_empty());
    assert!(by_id(CodeId::Int(3)).contexts.is_empty());
}

#[test]
fn record_fields_are_named() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_dataset(
        &dir,
        &json!([{ "code_id": 7, "code": "y = 2", "label": "assign" }]),
    );
    let output = dir.path().join("out.json");
    transform_file(&PathContextExtractor::default(), &input, &output, None).unwrap();

    let value: Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(
        value,
        json!([{
            "code_id": 7,
            "contexts": [{
                "start_token": "y",
                "path": "(identifier)^(assignment)_(integer)",
                "end_token": "2"
            }],
            "label": "assign"
        }])
    );
}

#[test]
fn bad_sample_aborts_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_dataset(
        &dir,
        &json!([
            { "code_id": 1, "code": "x = 1", "label": "ok" },
            { "code_id": 2, "code": "foo(", "label": "broken" }
        ]),
    );
    let output = dir.path().join("out.json");

    let err = transform_file(&PathContextExtractor::default(), &input, &output, None).unwrap_err();
    assert!(matches!(err, Error::Extract { code_id: CodeId::Int(2), .. }));
    assert!(!output.exists());
}

#[test]
fn missing_input_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = transform_file(
        &PathContextExtractor::default(),
        dir.path().join("absent.json"),
        dir.path().join("out.json"),
        None,
    )
    .unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
