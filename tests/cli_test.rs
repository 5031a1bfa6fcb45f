//! CLI Interface Tests
//!
//! Drives the rusty-rates binary against a local stub archive.

#![cfg(feature = "cli")]

use std::io::{Read, Write};
use std::net::TcpListener;
use std::process::{Command, Output};
use std::thread::{self, JoinHandle};

const ARCHIVE_BODY: &str = r#"{"date": "01.01.2024", "bank": "PB", "exchangeRate": [
  {"baseCurrency": "UAH", "currency": "EUR", "saleRateNB": 42.2, "purchaseRateNB": 42.2, "saleRate": 40.1, "purchaseRate": 39.5},
  {"baseCurrency": "UAH", "currency": "CHF", "saleRateNB": 43.0, "purchaseRateNB": 43.0}
]}"#;

fn rusty_rates(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rusty-rates"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("failed to launch rusty-rates")
}

/// Answer `requests` connections with the archive body; returns request lines
fn stub_archive(requests: usize) -> (String, JoinHandle<Vec<String>>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}/p24api/exchange_rates", listener.local_addr().unwrap());

    let handle = thread::spawn(move || {
        let mut lines = Vec::new();
        for _ in 0..requests {
            let (mut socket, _) = listener.accept().unwrap();

            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }

            let response = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                ARCHIVE_BODY.len(),
                ARCHIVE_BODY
            );
            socket.write_all(response.as_bytes()).unwrap();

            let text = String::from_utf8_lossy(&request);
            lines.push(text.lines().next().unwrap_or_default().to_string());
        }
        lines
    });

    (base_url, handle)
}

#[test]
fn test_cli_help() {
    let output = rusty_rates(&["--help"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("DAYS"));
}

#[test]
fn test_non_integer_days_warns_without_json() {
    let output = rusty_rates(&["abc", "--base-url", "http://127.0.0.1:1/"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Warning:"));
    assert!(stderr.contains("not a valid integer"));
}

#[test]
fn test_out_of_range_days_warns_without_json() {
    for days in ["0", "11", "-1"] {
        let output = rusty_rates(&[days, "--base-url", "http://127.0.0.1:1/"]);

        assert_eq!(output.status.code(), Some(0), "{}", days);
        assert!(output.stdout.is_empty(), "{}", days);
        assert!(String::from_utf8_lossy(&output.stderr).contains("out of allowed range"));
    }
}

#[test]
fn test_default_days_prints_pretty_json() {
    let (base_url, server) = stub_archive(2);

    let output = rusty_rates(&["--base-url", &base_url]);
    let request_lines = server.join().unwrap();

    assert!(output.status.success());
    assert_eq!(request_lines.len(), 2);
    assert!(request_lines
        .iter()
        .all(|line| line.starts_with("GET /p24api/exchange_rates?date=")));

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("[\n  [\n    {\n      \"01.01.2024\": {\n        \"EUR\": {"));

    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(
        value,
        serde_json::json!([
            [{"01.01.2024": {"EUR": {"sale": 40.1, "purchase": 39.5}}}],
            [{"01.01.2024": {"EUR": {"sale": 40.1, "purchase": 39.5}}}]
        ])
    );
}

#[test]
fn test_unreachable_archive_fills_error_slots() {
    let output = rusty_rates(&["3", "--base-url", "http://127.0.0.1:1/rates", "--timeout", "2"]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let days = value.as_array().unwrap();
    assert_eq!(days.len(), 3);
    for day in days {
        assert_eq!(day["error"]["kind"], "transport");
    }
}
