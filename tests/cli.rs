use pretty_assertions::assert_eq;
use std::process::{Command, Output};

fn vkassets(dir: &std::path::Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_vkassets"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run vkassets")
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_missing_assets_dir_exits_non_zero() {
    let temp = tempfile::tempdir().unwrap();

    let output = vkassets(temp.path(), &[]);

    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(err.starts_with("Error:"), "stderr was: {err}");
    assert!(err.contains("Output directory does not exist"));
    assert!(!temp.path().join("assets").exists());
}

#[test]
fn test_quiet_without_subcommand_runs_fetch() {
    let temp = tempfile::tempdir().unwrap();

    let cases: [&[&str]; 3] = [&["--quiet"], &["-q"], &["fetch", "--quiet"]];
    for args in cases {
        let output = vkassets(temp.path(), args);

        // Reaches the fetch path instead of a usage error (exit 2).
        assert_eq!(output.status.code(), Some(1), "args: {args:?}");
        assert!(stderr(&output).contains("Output directory does not exist"));
    }
}

#[test]
fn test_list_json() {
    let temp = tempfile::tempdir().unwrap();

    let output = vkassets(temp.path(), &["--variant", "upstream", "list", "--format", "json"]);

    assert!(output.status.success());
    let assets: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let names: Vec<&str> = assets
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["file_name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["texture.jpg", "chalet.jpg", "chalet.obj.zip"]);
}

#[test]
fn test_list_rejects_unknown_format() {
    let temp = tempfile::tempdir().unwrap();

    let output = vkassets(temp.path(), &["list", "--format", "yaml"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("yaml"));
}
