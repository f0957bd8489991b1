//! Runs the `gendersort` binary against files in a temporary directory.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn gendersort(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_gendersort"))
        .args(args)
        .current_dir(dir)
        .env_remove("GENDERSORT_TABLE_PATH")
        .env_remove("GENDERSORT_NORMALIZER_VARIANT")
        .env_remove("GENDERSORT_EVIDENCE_LOG_FILE")
        .env_remove("GENDERSORT_LOG")
        .env("HOME", dir)
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn workspace() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("NamesOut.txt"), "ALI\tM\nROBERTA\tF\nFRANCOIS\tM\n").unwrap();
    dir
}

#[test]
fn test_assign_prints_labels() {
    let dir = workspace();
    let out = gendersort(dir.path(), &["assign", "Ali (Roberta) Smith", "François", "J.R."]);
    assert!(out.status.success());
    assert_eq!(
        stdout(&out),
        "Ali (Roberta) Smith\tM\nFrançois\tM\nJ.R.\tINI\n"
    );
}

#[test]
fn test_assign_json() {
    let dir = workspace();
    let out = gendersort(dir.path(), &["assign", "--json", "Zed Roberta"]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.contains("\"label\":\"F\""));
    assert!(text.contains("\"unmatched\":[\"Zed\"]"));
}

#[test]
fn test_verbose_shows_log_targets() {
    let dir = workspace();
    let quiet = gendersort(dir.path(), &["assign", "Ali"]);
    let loud = gendersort(dir.path(), &["-v", "assign", "Ali"]);
    assert_eq!(stdout(&quiet), "Ali\tM\n");
    assert_eq!(stdout(&loud), "Ali\tM\n");
    assert!(!String::from_utf8(quiet.stderr).unwrap().contains("gendersort_storage"));
    assert!(String::from_utf8(loud.stderr).unwrap().contains("gendersort_storage"));
}

#[test]
fn test_missing_table_fails() {
    let dir = TempDir::new().unwrap();
    let out = gendersort(dir.path(), &["assign", "Ali"]);
    assert!(!out.status.success());
    let err = String::from_utf8(out.stderr).unwrap();
    assert!(err.contains("NamesOut.txt"));
}

#[test]
fn test_normalize_with_variant() {
    let dir = workspace();
    let out = gendersort(dir.path(), &["--variant", "bibliographic", "normalize", "Jean-Paul"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "Jean-Paul\tJean Paul\n");
}

#[test]
fn test_file_command() {
    let dir = workspace();
    fs::write(dir.path().join("authors.txt"), "Ali\nQuux\n").unwrap();
    let out = gendersort(dir.path(), &["file", "authors.txt", "--threads", "2"]);
    assert!(out.status.success());
    assert_eq!(
        fs::read_to_string(dir.path().join("authors_output.txt")).unwrap(),
        "Ali\tM\nQuux\tUNK\n"
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("authors_unknown.txt")).unwrap(),
        "Quux\n"
    );
}

#[test]
fn test_evidence_pending_and_dataset() {
    let dir = workspace();
    fs::write(dir.path().join("Names.txt"), "Bea\nAli\nCy\n").unwrap();
    fs::write(
        dir.path().join("NamesLog.txt"),
        "Ali\n2020-01-01 00:00:00\nAli = M\n\nBea\n2020-01-01 00:00:00\nBea = F",
    )
    .unwrap();

    let out = gendersort(dir.path(), &["evidence", "pending"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "Cy\n");

    let out = gendersort(dir.path(), &["evidence", "dataset", "Names.txt", "NamesLog.txt", "data.tsv"]);
    assert!(out.status.success());
    assert_eq!(
        fs::read_to_string(dir.path().join("data.tsv")).unwrap(),
        "Bea\tF\nAli\tM\n"
    );
}
