use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

const CSV: &str = "\
AB,A,B,Surface,Termination,Reaction_Energy,Activation_Energy,Reference,Url
N2,N*,N*,Ru,1,-0.5,1.1,Honkala et al. 2005,https://doi.org/10.1126/science.1106435
N2,N*,N*,Pt,111,-0.2,1.6,Honkala et al. 2005,
N2,N*,N*,Fe,110,0.1,2.0,Honkala et al. 2005,
CO,C*,O*,Ru,0001,0.4,1.9,Studt et al. 2008,
CO,C*,O*,Pt,111,1.3,,Studt et al. 2008,
";

fn catapp(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_catapp"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("spawn catapp")
}

fn stdout(output: &Output) -> String {
    assert!(
        output.status.success(),
        "catapp failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone()).expect("utf8")
}

fn ingested(dir: &TempDir) -> PathBuf {
    let csv = dir.path().join("records.csv");
    fs::write(&csv, CSV).unwrap();
    let db = dir.path().join("store/catapp.db");
    let out = stdout(&catapp(&[
        "ingest",
        "--csv",
        path(&csv),
        "--db",
        path(&db),
    ]));
    assert_eq!(out.trim(), "5");
    db
}

fn path(p: &Path) -> &str {
    p.to_str().unwrap()
}

#[test]
fn plot_prints_payload_with_fit() {
    let dir = TempDir::new().unwrap();
    let db = ingested(&dir);
    let out = stdout(&catapp(&[
        "plot",
        "--x",
        "N2|N*|N*",
        "--y",
        "N2|N*|N*",
        "--out-x",
        "Reaction_Energy",
        "--out-y",
        "Reaction_Energy",
        "--db",
        path(&db),
    ]));
    let payload: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(payload["fitLabel"], "Y = 1.00 X + 0.00");
    assert_eq!(payload["xLabel"], payload["yLabel"]);
    let xs: Vec<f64> = serde_json::from_str(payload["xData"].as_str().unwrap()).unwrap();
    assert_eq!(xs.len(), 3);
}

#[test]
fn cross_reaction_plot_pairs_legacy_termination() {
    let dir = TempDir::new().unwrap();
    let db = ingested(&dir);
    let out = stdout(&catapp(&[
        "plot",
        "--x",
        "N2|N*|N*",
        "--y",
        "CO|C*|O*",
        "--out-x",
        "Reaction_Energy",
        "--out-y",
        "Activation_Energy",
        "--db",
        path(&db),
    ]));
    let payload: Value = serde_json::from_str(&out).unwrap();
    let labels: Vec<String> = serde_json::from_str(payload["dataLabels"].as_str().unwrap()).unwrap();
    assert_eq!(labels.len(), 1);
    assert!(labels[0].starts_with("Ru(0001)"));
    assert_eq!(payload["fitLabel"], "");
}

#[test]
fn reactions_lists_sorted_keys() {
    let dir = TempDir::new().unwrap();
    let db = ingested(&dir);
    let out = stdout(&catapp(&["reactions", "--db", path(&db)]));
    let keys: Vec<&str> = out.lines().collect();
    assert_eq!(keys, vec!["CO|C*|O*", "N2|N*|N*"]);
}

#[test]
fn search_returns_matching_records() {
    let dir = TempDir::new().unwrap();
    let db = ingested(&dir);
    let out = stdout(&catapp(&["search", "--query", "Pt", "--db", path(&db)]));
    let records: Vec<Value> = serde_json::from_str(&out).unwrap();
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|record| record["Surface"] == "Pt"));
}

#[test]
fn config_file_supplies_defaults() {
    let dir = TempDir::new().unwrap();
    let db = ingested(&dir);
    let config = dir.path().join("catapp.yaml");
    fs::write(
        &config,
        format!(
            "plot_db: {}\ndefault_plot:\n  out_type_y: Reaction_Energy\n",
            db.display()
        ),
    )
    .unwrap();
    let out = stdout(&catapp(&["--config", path(&config), "plot"]));
    let payload: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(payload["fitLabel"], "Y = 1.00 X + 0.00");
}

#[test]
fn failures_exit_non_zero() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.db");
    assert!(!catapp(&["reactions", "--db", path(&missing)]).status.success());
    assert!(!missing.exists());

    let db = ingested(&dir);
    let output = catapp(&["plot", "--x", "N2|N*", "--db", path(&db)]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("descriptor"));
}
