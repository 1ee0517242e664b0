//! Live API tests. Run with: `BMX_TOKEN=... cargo test --features online -- --nocapture`
#![cfg(feature = "online")]

use sie_rs::{Client, Language, PctChange, SieResponse};

fn token() -> Option<String> {
    std::env::var("BMX_TOKEN").ok()
}

#[test]
fn fetch_metadata_live() {
    let Some(token) = token() else {
        eprintln!("BMX_TOKEN not set; skipping live test");
        return;
    };
    let client = Client::new(token, ["SF43718"], Language::En);
    let body = client.fetch_metadata().unwrap();
    let typed: SieResponse = serde_json::from_value(body).unwrap();
    assert_eq!(typed.bmx.series.len(), 1);
    assert_eq!(typed.bmx.series[0].id_serie, "SF43718");
    assert!(typed.bmx.series[0].fecha_inicio.is_some());
}

#[test]
fn fetch_small_range_live() {
    let Some(token) = token() else {
        eprintln!("BMX_TOKEN not set; skipping live test");
        return;
    };
    let client = Client::new(token, ["SF43718"], Language::En);
    let body = client
        .fetch_time_series_range("2020-01-02", "2020-01-10", None)
        .unwrap();
    let typed: SieResponse = serde_json::from_value(body).unwrap();
    let rows = typed.data_points();
    assert!(!rows.is_empty());
    assert!(rows.iter().all(|r| r.series_id == "SF43718"));
}

#[test]
fn fetch_latest_pct_change_live() {
    let Some(token) = token() else {
        eprintln!("BMX_TOKEN not set; skipping live test");
        return;
    };
    let client = Client::new(token, ["SP74625"], Language::Es);
    let body = client.fetch_latest(Some(PctChange::Annual)).unwrap();
    let typed: SieResponse = serde_json::from_value(body).unwrap();
    assert_eq!(typed.bmx.series[0].id_serie, "SP74625");
}
