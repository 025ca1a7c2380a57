use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

const THESAURUS: &str = "\
# code\tname\tparent
R0\tLANGUAL THESAURUS ROOT\t
B1213\tNUT PRODUCING PLANT\tR0
B1062\tTEMPERATE-ZONE NUT PRODUCING PLANT\tB1213
B1272\tALMOND\tB1062
B1503\tALMOND, SWEET\tB1272
B1064\tTROPICAL NUT PRODUCING PLANT\tB1213
B2001\tJAVA-ALMOND\tB1064
B2002\tJAVA-ALMOND\tB1064
";

fn setup() -> (TempDir, PathBuf) {
    let temp = tempdir().unwrap();
    let path = temp.path().join("langual.tsv");
    fs::write(&path, THESAURUS).unwrap();
    (temp, path)
}

#[allow(deprecated)]
fn langual(data: Option<&Path>) -> Command {
    let mut cmd = Command::cargo_bin("langual").expect("binary");
    cmd.env_remove("LANGUAL_DATA").env_remove("LANGUAL_CONFIG");
    if let Some(data) = data {
        cmd.arg("--data").arg(data);
    }
    cmd
}

#[test]
fn no_arguments_prints_help_and_fails() {
    langual(None)
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn bare_code_prints_path_from_root() {
    let (_temp, data) = setup();
    langual(Some(&data))
        .arg("B1272")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "+-R0, LANGUAL THESAURUS ROOT\n      +-B1213, NUT PRODUCING PLANT\n",
        ))
        .stdout(predicate::str::contains("                  +-B1272, ALMOND\n\n--------\n"));
}

#[test]
fn ambiguous_name_without_tree_lists_every_match() {
    let (_temp, data) = setup();
    langual(Some(&data))
        .args(["search", "java-almond", "--no-tree"])
        .assert()
        .success()
        .stdout("B2001, JAVA-ALMOND\n\n--------\n\nB2002, JAVA-ALMOND\n\n--------\n\n");
}

#[test]
fn unknown_term_is_reported_not_failed() {
    let (_temp, data) = setup();
    langual(Some(&data))
        .arg("ALMND")
        .assert()
        .success()
        .stdout("can't find anything containing: ALMND\n\n");

    langual(Some(&data))
        .arg("B9999")
        .assert()
        .success()
        .stdout("can't find: B9999\n\n");
}

#[test]
fn partial_name_falls_back_to_substring() {
    let (_temp, data) = setup();
    langual(Some(&data))
        .args(["--no-tree", "ALMON"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "can't find an exact match for: ALMON\n\nB1272, ALMOND\n",
        ))
        .stdout(predicate::str::contains("B2002, JAVA-ALMOND"));
}

#[test]
fn json_output_carries_path() {
    let (_temp, data) = setup();
    let output = langual(Some(&data))
        .args(["--json", "search", "B1503"])
        .output()
        .expect("command run");
    assert!(output.status.success());

    let body: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(body["kind"], "code");
    assert_eq!(body["matches"][0]["name"], "ALMOND, SWEET");
    assert_eq!(
        body["matches"][0]["path"],
        serde_json::json!(["R0", "B1213", "B1062", "B1272", "B1503"])
    );
}

#[test]
fn descendants_and_children() {
    let (_temp, data) = setup();
    langual(Some(&data))
        .args(["children", "B1213"])
        .assert()
        .success()
        .stdout("B1062, TEMPERATE-ZONE NUT PRODUCING PLANT\nB1064, TROPICAL NUT PRODUCING PLANT\n");

    langual(Some(&data))
        .args(["descendants", "B1062"])
        .assert()
        .success()
        .stdout("B1062, TEMPERATE-ZONE NUT PRODUCING PLANT\nB1272, ALMOND\nB1503, ALMOND, SWEET\n");
}

#[test]
fn is_descendant_checks_ancestry() {
    let (_temp, data) = setup();
    langual(Some(&data))
        .args(["is-descendant", "B1503", "B1062"])
        .assert()
        .success()
        .stdout("true\n");

    langual(Some(&data))
        .args(["is-descendant", "B1503", "B1064"])
        .assert()
        .success()
        .stdout("false\n");
}

#[test]
fn data_path_from_environment_and_config() {
    let (temp, data) = setup();
    langual(None)
        .env("LANGUAL_DATA", &data)
        .arg("B1272")
        .assert()
        .success()
        .stdout(predicate::str::contains("+-B1272, ALMOND"));

    let config = temp.path().join("langual.toml");
    fs::write(&config, "data_path = \"langual.tsv\"\nwith_tree = false\n").unwrap();
    langual(None)
        .arg("--config")
        .arg(&config)
        .arg("B1272")
        .assert()
        .success()
        .stdout("B1272, ALMOND\n\n--------\n\n");
}

#[test]
fn missing_data_path_is_an_error() {
    langual(None)
        .arg("ALMOND")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No thesaurus file given"));
}

#[test]
fn dangling_parent_aborts_load() {
    let temp = tempdir().unwrap();
    let data = temp.path().join("broken.tsv");
    fs::write(&data, "R0\tLANGUAL THESAURUS ROOT\t\nB1272\tALMOND\tB1062\n").unwrap();

    langual(Some(&data))
        .arg("ALMOND")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load thesaurus"))
        .stderr(predicate::str::contains("unknown parent B1062"));
}

#[test]
#[allow(deprecated)]
fn closed_stdout_is_not_a_crash() {
    use assert_cmd::cargo::CommandCargoExt;
    use std::fmt::Write as _;
    use std::process::Stdio;

    let temp = tempdir().unwrap();
    let data = temp.path().join("large.tsv");
    let mut text = String::from("R0\tLANGUAL THESAURUS ROOT\t\n");
    for i in 1..=6000 {
        writeln!(text, "X{i:04}\tSNACK FOOD VARIETY NUMBER {i}\tR0").unwrap();
    }
    fs::write(&data, text).unwrap();

    let mut child = std::process::Command::cargo_bin("langual")
        .unwrap()
        .env_remove("LANGUAL_DATA")
        .env_remove("LANGUAL_CONFIG")
        .arg("--data")
        .arg(&data)
        .args(["contains", "SNACK"])
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    // Reader goes away before the output (well over a pipe buffer) is drained.
    drop(child.stdout.take());
    let output = child.wait_with_output().unwrap();

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success(), "status {:?}, stderr: {stderr}", output.status);
    assert!(!stderr.contains("panicked"), "stderr: {stderr}");
}

#[test]
fn search_subcommand_reaches_names_shadowed_by_commands() {
    let temp = tempdir().unwrap();
    let data = temp.path().join("langual.tsv");
    fs::write(&data, "R0\tLANGUAL THESAURUS ROOT\t\nZ0001\tSTATS\tR0\n").unwrap();

    langual(Some(&data))
        .args(["search", "stats", "--no-tree"])
        .assert()
        .success()
        .stdout("Z0001, STATS\n\n--------\n\n");

    langual(Some(&data))
        .arg("stats")
        .assert()
        .success()
        .stdout("records: 2\nedges: 1\nleaves: 1\n");
}
