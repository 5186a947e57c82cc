use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::tempdir;

use cellviz_cli::{Args, run};

/// Collects all .svg files from a directory
fn collect_svg_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("svg")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

/// Fixtures are at workspace root, relative to workspace not the crate
fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("fixtures")
}

fn args(input: &Path, output: &Path, clicks: &[&str]) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        output: output.to_string_lossy().to_string(),
        config: None,
        clicks: clicks.iter().map(|id| id.to_string()).collect(),
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_valid_fixtures() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let valid_fixtures = collect_svg_files(fixtures_path());
    assert!(
        !valid_fixtures.is_empty(),
        "No valid fixtures found in fixtures/"
    );

    let mut failed_fixtures = Vec::new();

    for fixture_path in &valid_fixtures {
        let output_path = temp_dir
            .path()
            .join(fixture_path.file_name().unwrap());

        if let Err(e) = run(&args(fixture_path, &output_path, &[])) {
            failed_fixtures.push((fixture_path.clone(), e));
            continue;
        }

        let output = fs::read_to_string(&output_path).expect("Output should be written");
        assert!(output.contains("<svg"), "{}", fixture_path.display());
        assert!(!output.contains("remove_me_url"), "{}", fixture_path.display());
        assert!(!output.contains("<title"), "{}", fixture_path.display());
        assert!(output.contains("hover-path"), "{}", fixture_path.display());
        assert!(output.contains("edge-from"), "{}", fixture_path.display());
    }

    if !failed_fixtures.is_empty() {
        eprintln!("\nValid fixtures that failed:");
        for (path, err) in &failed_fixtures {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!(
            "{} valid fixture(s) failed unexpectedly",
            failed_fixtures.len()
        );
    }

    println!("✅ All {} valid fixtures passed", valid_fixtures.len());
}

#[test]
fn e2e_smoke_test_error_fixtures() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let error_fixtures = collect_svg_files(fixtures_path().join("errors"));
    assert!(
        !error_fixtures.is_empty(),
        "No error fixtures found in fixtures/errors/"
    );

    let mut unexpectedly_succeeded = Vec::new();

    for fixture_path in &error_fixtures {
        let output_path = temp_dir.path().join(format!(
            "error_{}",
            fixture_path.file_name().unwrap().to_string_lossy()
        ));

        if run(&args(fixture_path, &output_path, &[])).is_ok() {
            unexpectedly_succeeded.push(fixture_path.clone());
        }
        assert!(!output_path.exists(), "{}", fixture_path.display());
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError fixtures that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error fixture(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }

    println!(
        "✅ All {} error fixtures failed as expected",
        error_fixtures.len()
    );
}

#[test]
fn e2e_replayed_clicks_are_rendered() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = fixtures_path().join("callgraph.svg");
    let output_path = temp_dir.path().join("clicked.svg");

    // The edge is toggled off again, leaving the cell selection
    run(&args(
        &input,
        &output_path,
        &["1:1 -> 2:1", "1:1 -> 2:1", "1:1"],
    ))
    .expect("Run should succeed");

    let output = fs::read_to_string(&output_path).unwrap();
    let diagram = cellviz::DiagramBuilder::default()
        .parse(&output)
        .expect("Output should parse");
    let document = diagram.document();

    let cell = document
        .element(document.find_by_id("1:1").unwrap())
        .unwrap();
    assert!(cell.has_class("selected"));

    let edge = document
        .element(document.find_by_id("1:1 -> 2:1").unwrap())
        .unwrap();
    assert!(edge.has_class("incoming"));
    assert!(!edge.has_class("selected"));

    let unrelated = document
        .element(document.find_by_id("1:2 -> 2:2").unwrap())
        .unwrap();
    assert!(unrelated.has_class("fade"));
}

#[test]
fn e2e_explicit_config() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[highlight]\nselected = \"picked\"\n").unwrap();

    let input = fixtures_path().join("packages.svg");
    let output_path = temp_dir.path().join("configured.svg");
    let mut args = args(&input, &output_path, &["11"]);
    args.config = Some(config_path.to_string_lossy().to_string());

    run(&args).expect("Run should succeed");

    let output = fs::read_to_string(&output_path).unwrap();
    assert!(output.contains("picked"));
    assert!(!output.contains("selected"));
}

#[test]
fn e2e_missing_input() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("never.svg");

    let err = run(&args(
        &temp_dir.path().join("missing.svg"),
        &output_path,
        &[],
    ))
    .unwrap_err();
    assert!(matches!(err, cellviz::CellvizError::Io(_)));
}
