use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

fn search_binary() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("airport-search");
    path
}

fn setup_snapshot(json: &str) -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("airports.json"), json).unwrap();
    tmp
}

fn run_search(cwd: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = search_binary();
    let output = Command::new(&binary)
        .args(args)
        .current_dir(cwd)
        .output()
        .unwrap_or_else(|e| panic!("Failed to run airport-search at {:?}: {}", binary, e));

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.success())
}

const HANEDA_SNAPSHOT: &str = r#"[
  {
    "iata_code": "HND",
    "name": "Tokyo Haneda International Airport",
    "municipality": "Tokyo",
    "iso_country": "JP",
    "country_jp": "日本",
    "state_jp": "東京都",
    "city_jp": "東京"
  },
  {
    "iata_code": "XYZ",
    "name": "Example Field",
    "municipality": "Nowhere",
    "iso_country": "US",
    "country_jp": "",
    "state_jp": "",
    "city_jp": ""
  }
]"#;

#[test]
fn test_search_by_name() {
    let tmp = setup_snapshot(HANEDA_SNAPSHOT);
    let (stdout, _, ok) = run_search(tmp.path(), &["haneda"]);
    assert!(ok);

    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let items = value["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["uid"], "HND");
    assert_eq!(items[0]["title"], "Tokyo Haneda International Airport (HND)");
    assert_eq!(items[0]["subtitle"], "東京 - 東京都 - 日本");
    assert_eq!(items[0]["arg"], "HND");
    assert_eq!(items[0]["icon"]["path"], "flags/JP.png");
}

#[test]
fn test_search_by_japanese_locality() {
    let tmp = setup_snapshot(HANEDA_SNAPSHOT);
    let (stdout, _, ok) = run_search(tmp.path(), &["東京"]);
    assert!(ok);

    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let items = value["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["uid"], "HND");
}

#[test]
fn test_search_fallback_subtitle() {
    let tmp = setup_snapshot(HANEDA_SNAPSHOT);
    let (stdout, _, ok) = run_search(tmp.path(), &["example"]);
    assert!(ok);

    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let items = value["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["subtitle"], "Nowhere, US");
}

#[test]
fn test_search_empty_query_matches_all() {
    let tmp = setup_snapshot(HANEDA_SNAPSHOT);
    let (stdout, _, ok) = run_search(tmp.path(), &[""]);
    assert!(ok);

    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["items"].as_array().unwrap().len(), 2);
}

#[test]
fn test_search_no_match_prints_empty_envelope() {
    let tmp = setup_snapshot(HANEDA_SNAPSHOT);
    let (stdout, _, ok) = run_search(tmp.path(), &["zzzznothing"]);
    assert!(ok);

    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(value["items"].as_array().unwrap().is_empty());
}

#[test]
fn test_search_caps_results_at_fifty() {
    let records: Vec<serde_json::Value> = (0..120)
        .map(|i| {
            serde_json::json!({
                "iata_code": format!("A{:02}", i),
                "name": format!("International Airport {}", i),
                "municipality": "",
                "iso_country": "US",
                "country_jp": "",
                "state_jp": "",
                "city_jp": ""
            })
        })
        .collect();
    let snapshot = serde_json::to_string(&records).unwrap();
    let tmp = setup_snapshot(&snapshot);

    let (stdout, _, ok) = run_search(tmp.path(), &["international"]);
    assert!(ok);

    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let items = value["items"].as_array().unwrap();
    assert_eq!(items.len(), 50);
    assert_eq!(items[0]["uid"], "A00");
    assert_eq!(items[49]["uid"], "A49");
}

#[test]
fn test_search_missing_snapshot_fails_without_stdout() {
    let tmp = TempDir::new().unwrap();
    let (stdout, stderr, ok) = run_search(tmp.path(), &["haneda"]);
    assert!(!ok);
    assert!(stdout.is_empty(), "stdout must stay empty on failure");
    assert!(stderr.contains("airports.json"));
}

#[test]
fn test_search_malformed_snapshot_fails_without_stdout() {
    let tmp = setup_snapshot("this is not json");
    let (stdout, _, ok) = run_search(tmp.path(), &["haneda"]);
    assert!(!ok);
    assert!(stdout.is_empty());
}

#[test]
fn test_search_snapshot_flag_overrides_default_path() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("elsewhere.json");
    fs::write(&path, HANEDA_SNAPSHOT).unwrap();

    let (stdout, _, ok) = run_search(
        tmp.path(),
        &["haneda", "--snapshot", path.to_str().unwrap()],
    );
    assert!(ok);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["items"][0]["uid"], "HND");
}
