use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const CROP_COUNT: usize = 94;

fn crop_stages_cmd(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("crop-stages").unwrap();
    cmd.current_dir(temp_dir.path());
    cmd
}

fn html_files(dir: &std::path::Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .filter(|n| n.ends_with(".html"))
        .collect();
    names.sort();
    names
}

#[test]
fn test_no_arguments_generates_into_crops_dir() {
    let temp_dir = TempDir::new().unwrap();

    crop_stages_cmd(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Generated {} crop table pages in crops/",
            CROP_COUNT
        )));

    let crops_dir = temp_dir.path().join("crops");
    assert_eq!(html_files(&crops_dir).len(), CROP_COUNT);

    let tomato = fs::read_to_string(crops_dir.join("tomato.html")).unwrap();
    assert!(tomato.contains("<title>Tomato Growth Stages (BBCH) | Crop Stages</title>"));
    assert!(tomato.contains(r#"alt="Tomato Stage 1 — Seed""#));
    assert!(tomato.contains("assets/images/crops/tomato/tomato_stage_1.png"));
}

#[test]
fn test_rerun_produces_identical_files() {
    let temp_dir = TempDir::new().unwrap();
    let crops_dir = temp_dir.path().join("crops");

    crop_stages_cmd(&temp_dir).assert().success();
    let first_names = html_files(&crops_dir);
    let first_wheat = fs::read(crops_dir.join("wheat.html")).unwrap();
    let first_strawberry = fs::read(crops_dir.join("strawberry.html")).unwrap();

    crop_stages_cmd(&temp_dir).assert().success();
    assert_eq!(html_files(&crops_dir), first_names);
    assert_eq!(fs::read(crops_dir.join("wheat.html")).unwrap(), first_wheat);
    assert_eq!(fs::read(crops_dir.join("strawberry.html")).unwrap(), first_strawberry);
}

#[test]
fn test_generate_with_output_and_prune() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("site").join("pages");
    fs::create_dir_all(&out).unwrap();
    fs::write(out.join("old-crop.html"), "stale").unwrap();

    crop_stages_cmd(&temp_dir)
        .args(["generate", "--output", "site/pages"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed").not());
    assert!(out.join("old-crop.html").exists());

    crop_stages_cmd(&temp_dir)
        .args(["generate", "-o", "site/pages", "--prune"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed"))
        .stdout(predicate::str::contains("old-crop.html"));
    assert!(!out.join("old-crop.html").exists());
    assert_eq!(html_files(&out).len(), CROP_COUNT);
}

#[test]
fn test_unwritable_output_fails() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("blocker"), "file").unwrap();

    crop_stages_cmd(&temp_dir)
        .args(["generate", "--output", "blocker/crops"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to create output directory"));
}

#[test]
fn test_list_json() {
    let temp_dir = TempDir::new().unwrap();

    let output = crop_stages_cmd(&temp_dir)
        .args(["list", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let crops: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(crops.len(), CROP_COUNT);
    assert_eq!(crops[0]["slug"], "alfalfa");
    let tomato = crops.iter().find(|c| c["slug"] == "tomato").unwrap();
    assert_eq!(tomato["latin_name"], "Solanum lycopersicum");
    assert_eq!(tomato["crop_type"], "solanaceae");
}

#[test]
fn test_list_plain() {
    let temp_dir = TempDir::new().unwrap();

    crop_stages_cmd(&temp_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("strawberry"))
        .stdout(predicate::str::contains("Fragaria × ananassa"))
        .stdout(predicate::str::contains(format!("{} crops", CROP_COUNT)));
}

#[test]
fn test_show_crop() {
    let temp_dir = TempDir::new().unwrap();

    crop_stages_cmd(&temp_dir)
        .args(["show", "grape-2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Grape (Vitis vinifera)"))
        .stdout(predicate::str::contains("stage table: vine"))
        .stdout(predicate::str::contains("Dormancy"));

    crop_stages_cmd(&temp_dir)
        .args(["show", "mango"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown crop 'mango'"));
}
