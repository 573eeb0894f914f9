// CLI behavior guard rails for gallery-catalog and gallery-stats.
mod support;

use anyhow::{Context, Result};
use serde_json::Value;
use std::process::Command;
use support::{TempSite, run_command};

fn catalog_cmd(site: &TempSite) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_gallery-catalog"));
    cmd.arg("--root")
        .arg(site.root())
        .env_remove("GALLERY_CATEGORIES")
        .env("RUST_LOG", "gallery_catalog=debug");
    cmd
}

fn stats_cmd(site: &TempSite) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_gallery-stats"));
    cmd.arg("--root")
        .arg(site.root())
        .env_remove("GALLERY_CATEGORIES");
    cmd
}

fn stdout_json(output: &std::process::Output) -> Result<Value> {
    serde_json::from_slice(&output.stdout).context("stdout should be a single JSON document")
}

// The JSON shape is the contract the page layer reads.
#[test]
fn load_prints_camel_case_catalog() -> Result<()> {
    let site = TempSite::new()?;
    site.add_files(
        "morning",
        &["02_珈琲とクロワッサン_朝食.jpg", "01_朝の読書_読書.jpg", "skip.txt"],
    )?;

    let mut cmd = catalog_cmd(&site);
    cmd.args(["load", "morning"]);
    let value = stdout_json(&run_command(cmd)?)?;

    assert_eq!(value["themeColor"], "sunrise-orange");
    assert_eq!(value["themeIcon"], "📚");
    assert_eq!(value["filters"], serde_json::json!(["読書", "朝食"]));
    let images = value["images"].as_array().context("images array")?;
    assert_eq!(images.len(), 2);
    assert_eq!(images[0]["fileName"], "01_朝の読書_読書.jpg");
    assert_eq!(
        images[0]["filePath"],
        "/images/gallery/morning/01_朝の読書_読書.jpg"
    );
    assert_eq!(images[1]["title"], "珈琲とクロワッサン");
    assert_eq!(
        images[1]["description"],
        "珈琲とクロワッサンの風景をお楽しみください。"
    );
    Ok(())
}

#[test]
fn load_unknown_category_fails_with_message() -> Result<()> {
    let site = TempSite::new()?;
    let mut cmd = catalog_cmd(&site);
    cmd.args(["load", "brunch"]);
    let output = cmd.output().context("running gallery-catalog")?;

    assert!(!output.status.success());
    assert!(output.stdout.is_empty(), "no catalog should be printed");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("unknown category: brunch"),
        "stderr was: {stderr}"
    );
    Ok(())
}

#[test]
fn all_lists_every_category_even_without_folders() -> Result<()> {
    let site = TempSite::new()?;
    site.add_files("night", &["01_星空_創作.png"])?;

    let mut cmd = catalog_cmd(&site);
    cmd.arg("all");
    let value = stdout_json(&run_command(cmd)?)?;
    let entries = value.as_array().context("array of catalogs")?;

    let keys: Vec<&str> = entries
        .iter()
        .filter_map(|entry| entry["key"].as_str())
        .collect();
    assert_eq!(keys, vec!["morning", "work", "afternoon", "night"]);
    assert_eq!(entries[3]["catalog"]["filters"], serde_json::json!(["創作"]));
    assert_eq!(entries[0]["catalog"]["images"], serde_json::json!([]));
    Ok(())
}

#[test]
fn sample_generates_placeholders() -> Result<()> {
    let site = TempSite::new()?;
    let mut cmd = catalog_cmd(&site);
    cmd.args(["sample", "night", "--count", "3"]);
    let value = stdout_json(&run_command(cmd)?)?;
    let samples = value.as_array().context("array of samples")?;

    assert_eq!(samples.len(), 3);
    assert_eq!(samples[0]["id"], "night_sample_1");
    assert_eq!(samples[1]["category"], "創作");
    assert_eq!(samples[2]["title"], "夜の風景 3");
    Ok(())
}

#[test]
fn custom_table_is_honored() -> Result<()> {
    let site = TempSite::new()?;
    let table = site.write_table(
        r#"{"schema_version": "gallery_categories_v1",
            "categories": [{"key": "brunch", "theme_color": "sage", "theme_icon": "🥐", "filters": ["パン"]}]}"#,
    )?;
    site.add_files("brunch", &["01_トースト_パン.jpg"])?;

    let mut cmd = catalog_cmd(&site);
    cmd.arg("--config").arg(&table).args(["load", "brunch"]);
    let value = stdout_json(&run_command(cmd)?)?;
    assert_eq!(value["themeColor"], "sage");
    assert_eq!(value["filters"], serde_json::json!(["パン"]));
    Ok(())
}

#[test]
fn stats_default_to_site_totals() -> Result<()> {
    let site = TempSite::new()?;
    site.add_files("work", &["01_a_会議.jpg", "02_b_会議.jpg"])?;
    site.add_files("night", &["loose.gif"])?;

    let value = stdout_json(&run_command(stats_cmd(&site))?)?;
    assert_eq!(value["total"], 3);
    assert_eq!(value["byTimeSlot"]["work"], 2);
    assert_eq!(value["byTimeSlot"]["morning"], 0);
    Ok(())
}

#[test]
fn stats_for_one_category() -> Result<()> {
    let site = TempSite::new()?;
    site.add_files("work", &["01_a_会議.jpg", "02_b_会議.jpg", "03_c_雑談.jpg"])?;

    let mut cmd = stats_cmd(&site);
    cmd.args(["--category", "work"]);
    let value = stdout_json(&run_command(cmd)?)?;
    assert_eq!(value["total"], 3);
    assert_eq!(value["categories"], 1);
    assert_eq!(value["byCategory"]["会議"], 2);
    assert_eq!(value["byCategory"]["雑談"], 1);
    Ok(())
}

#[test]
fn stats_reject_unknown_category() -> Result<()> {
    let site = TempSite::new()?;
    let mut cmd = stats_cmd(&site);
    cmd.args(["--category", "morning,brunch"]);
    let output = cmd.output().context("running gallery-stats")?;
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("brunch"));
    Ok(())
}
