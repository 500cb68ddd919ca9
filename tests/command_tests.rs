use std::fs::File;
use stackfold::commands::{execute_render, summarize_pprof, validate_args, RenderArgs};
use stackfold::output::{read_pprof, Format};

const AGGREGATION_JSON: &str = r#"{
    "hz": 100,
    "stacks": {
        "main;foo": {
            "count": 3,
            "frames": [
                {"file": "main.go", "line": 12, "start_line": 10},
                {"file": "foo.go", "line": 4, "start_line": 2}
            ]
        },
        "main;bar": {
            "count": 2,
            "frames": [
                {"file": "main.go", "line": 13, "start_line": 10},
                {"file": "bar.go", "line": 8, "start_line": 7}
            ]
        }
    }
}"#;

fn write_input(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("stacks.json");
    std::fs::write(&path, AGGREGATION_JSON).unwrap();
    path
}

#[test]
fn test_render_folded_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out/stacks.folded");
    let args = RenderArgs {
        input: write_input(&dir),
        format: Format::Folded,
        output: Some(output.clone()),
        ..Default::default()
    };

    validate_args(&args).unwrap();
    execute_render(&args).unwrap();

    let content = std::fs::read_to_string(output).unwrap();
    assert_eq!(content, "main;bar 2\nmain;foo 3\n");
}

#[test]
fn test_render_pprof_uses_input_hz() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("cpu.pprof");
    let args = RenderArgs {
        input: write_input(&dir),
        format: Format::Pprof,
        output: Some(output.clone()),
        ..Default::default()
    };

    execute_render(&args).unwrap();

    let profile = read_pprof(File::open(output).unwrap()).unwrap();
    let summary = summarize_pprof(&profile);
    assert_eq!(
        summary.sample_types,
        vec![
            ("samples".to_string(), "count".to_string()),
            ("time".to_string(), "nanoseconds".to_string()),
        ]
    );
    assert_eq!(summary.functions, 4);
    assert_eq!(summary.locations, 4);
    assert_eq!(summary.samples, 2);
    assert_eq!(summary.totals, vec![5, 5 * 10_000_000]);
}

#[test]
fn test_render_pprof_hz_override() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("cpu.pprof");
    let args = RenderArgs {
        input: write_input(&dir),
        format: Format::Pprof,
        hz: Some(1000),
        output: Some(output.clone()),
        ..Default::default()
    };

    execute_render(&args).unwrap();

    let profile = read_pprof(File::open(output).unwrap()).unwrap();
    assert_eq!(summarize_pprof(&profile).totals, vec![5, 5 * 1_000_000]);
}

#[test]
fn test_render_missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let args = RenderArgs {
        input: dir.path().join("missing.json"),
        output: Some(dir.path().join("out.folded")),
        ..Default::default()
    };

    assert!(execute_render(&args).is_err());
}

#[test]
fn test_render_pprof_without_frames_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("counts.json");
    std::fs::write(&input, r#"{"main;foo": 3}"#).unwrap();
    let args = RenderArgs {
        input,
        format: Format::Pprof,
        output: Some(dir.path().join("cpu.pprof")),
        ..Default::default()
    };

    let err = execute_render(&args).unwrap_err();
    assert!(format!("{:#}", err).contains("frame records"));
}

#[test]
fn test_validate_args_rejects_zero_hz() {
    let args = RenderArgs {
        hz: Some(0),
        ..Default::default()
    };

    assert!(validate_args(&args).is_err());
}
