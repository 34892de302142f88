use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

fn update_binary() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("airport-update");
    path
}

#[test]
fn test_update_fetch_failure_leaves_snapshot_untouched() {
    let tmp = TempDir::new().unwrap();
    let snapshot = tmp.path().join("airports.json");
    let original = r#"[
  {
    "iata_code": "NRT",
    "name": "Narita International Airport",
    "municipality": "Narita",
    "iso_country": "JP",
    "country_jp": "日本",
    "state_jp": "千葉県",
    "city_jp": "成田"
  }
]"#;
    fs::write(&snapshot, original).unwrap();

    // Nothing listens on the discard port; the fetch fails immediately.
    let output = Command::new(update_binary())
        .args([
            "--url",
            "http://127.0.0.1:9/airports.csv",
            "--snapshot",
            snapshot.to_str().unwrap(),
        ])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert_eq!(fs::read_to_string(&snapshot).unwrap(), original);
}
