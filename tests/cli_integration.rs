//! Binary-level tests: drive the `cn` executable end to end with an
//! isolated `--data-dir`.

use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

fn cn(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cn").expect("binary builds");
    cmd.arg("--data-dir").arg(data_dir.path());
    cmd.arg("--no-interactive");
    cmd
}

#[test]
fn project_path_before_any_project_reports_no_session() {
    let data = TempDir::new().unwrap();
    cn(&data)
        .arg("project-path")
        .assert()
        .success()
        .stdout(predicate::str::contains("No active icp session"));
}

#[test]
fn new_project_then_project_path_round_trips() {
    let data = TempDir::new().unwrap();
    let project_dir = data.path().join("projects").join("glyphs");

    cn(&data)
        .args(["new-project", "glyphs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created icp project"));

    data.child("icp_session.txt")
        .assert(predicate::path::exists());

    cn(&data)
        .arg("project-path")
        .assert()
        .success()
        .stdout(predicate::str::contains(project_dir.display().to_string()));
}

#[test]
fn init_deploy_scaffolds_manifests() {
    let data = TempDir::new().unwrap();

    cn(&data).args(["new-project", "glyphs"]).assert().success();
    cn(&data).args(["init-deploy", "dragon"]).assert().success();

    let project = data.child("projects/glyphs/dragon");
    project
        .child("contract/dfx.json")
        .assert(predicate::str::contains("dragon_nft_container"));
    project
        .child("assets/dfx.json")
        .assert(predicate::str::contains("dragon_assets"));
    project
        .child("contract/src/Main.mo")
        .assert(predicate::path::exists());
    project
        .child("assets/src")
        .assert(predicate::path::is_dir());
}

#[test]
fn init_deploy_twice_needs_force() {
    let data = TempDir::new().unwrap();

    cn(&data).args(["new-project", "glyphs"]).assert().success();
    cn(&data).args(["init-deploy", "dragon"]).assert().success();

    cn(&data)
        .args(["init-deploy", "dragon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    cn(&data)
        .args(["init-deploy", "dragon", "--force"])
        .assert()
        .success();
}

#[test]
fn init_deploy_without_session_fails_with_guidance() {
    let data = TempDir::new().unwrap();
    cn(&data)
        .args(["init-deploy", "dragon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no active icp session"));
}

#[test]
fn material_data_emits_json_without_unset_optionals() {
    let data = TempDir::new().unwrap();
    let output = cn(&data)
        .args(["material-data", "basic", "--color", "#fff"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let obj = value.as_object().unwrap();
    assert_eq!(obj["type"], "basic");
    assert_eq!(obj["color"], "#fff");
    assert!(!obj.contains_key("emissive"));
}

#[test]
fn widget_data_mesh_set_validates_selection() {
    let data = TempDir::new().unwrap();

    cn(&data)
        .args([
            "widget-data", "mesh-set", "--mesh", "body", "--mesh", "armor:hidden", "--selected",
            "1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("mesh_set"));

    cn(&data)
        .args(["widget-data", "mesh-set", "--mesh", "body", "--selected", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn debug_model_requires_the_model_file() {
    let data = TempDir::new().unwrap();

    cn(&data).args(["new-project", "glyphs"]).assert().success();
    cn(&data).args(["init-deploy", "dragon"]).assert().success();

    cn(&data)
        .args(["debug-model", "phantom.glb", "--project", "dragon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("phantom.glb"));

    let assets_src = data.child("projects/glyphs/dragon/assets/src");
    assets_src.child("dragon.glb").write_binary(b"glb").unwrap();

    cn(&data)
        .args(["debug-model", "dragon.glb", "--project", "dragon"])
        .assert()
        .success()
        .stdout(predicate::str::contains("index.html"));
    assets_src
        .child("index.js")
        .assert(predicate::str::contains("dragon.glb"));
}

#[test]
fn unknown_config_key_is_rejected() {
    let data = TempDir::new().unwrap();
    cn(&data)
        .args(["config", "get", "no-such-key"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown configuration key"));
}

#[test]
fn completion_prints_a_script() {
    let data = TempDir::new().unwrap();
    cn(&data)
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cn"));
}
