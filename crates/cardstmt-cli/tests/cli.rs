use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../cardstmt-core/tests/fixtures")
        .join(name)
}

/// A command isolated from any user configuration.
fn cardstmt(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cardstmt").unwrap();
    cmd.env("XDG_CONFIG_HOME", home.path()).env("HOME", home.path());
    cmd
}

#[test]
fn test_banks_lists_supported_keys() {
    let home = TempDir::new().unwrap();

    cardstmt(&home)
        .args(["banks", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"["axis","bob","kotak","sbi"]"#));

    cardstmt(&home)
        .arg("banks")
        .assert()
        .success()
        .stdout(predicate::str::contains("Kotak Mahindra Bank"));
}

#[test]
fn test_parse_text_fixture() {
    let home = TempDir::new().unwrap();

    cardstmt(&home)
        .arg("parse")
        .arg(fixture("axis.txt"))
        .args(["--bank", "axis", "--text"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""total_due":"12345.67""#))
        .stdout(predicate::str::contains(r#""card_last4":"1234""#));
}

#[test]
fn test_parse_text_from_stdin() {
    let home = TempDir::new().unwrap();
    let text = fs::read_to_string(fixture("sbi.txt")).unwrap();

    cardstmt(&home)
        .args(["parse", "-", "--bank", "sbi", "--text"])
        .write_stdin(text)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""total_due":"23456.78""#));
}

#[test]
fn test_parse_csv_output() {
    let home = TempDir::new().unwrap();

    cardstmt(&home)
        .arg("parse")
        .arg(fixture("axis.txt"))
        .args(["--bank", "axis", "--text", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("date,description,amount,type"))
        .stdout(predicate::str::contains(
            "2024-09-25,PAYMENT RECEIVED - THANK YOU,-10000.00,credit",
        ));
}

#[test]
fn test_parse_text_summary_uses_indian_grouping() {
    let home = TempDir::new().unwrap();

    cardstmt(&home)
        .arg("parse")
        .arg(fixture("kotak.txt"))
        .args(["--bank", "kotak", "--text", "--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kotak Mahindra Bank"))
        .stdout(predicate::str::contains("3,00,000.00"));
}

#[test]
fn test_parse_writes_output_file() {
    let home = TempDir::new().unwrap();
    let output = home.path().join("bob.json");

    cardstmt(&home)
        .arg("parse")
        .arg(fixture("bob.txt"))
        .args(["--bank", "bob", "--text", "--pretty", "--output"])
        .arg(&output)
        .assert()
        .success();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(json["bank"], "bob");
    assert_eq!(json["transactions"].as_array().unwrap().len(), 4);
}

#[test]
fn test_unsupported_bank_exits_with_client_error() {
    let home = TempDir::new().unwrap();

    cardstmt(&home)
        .args(["parse", "missing.pdf", "--bank", "hdfc"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains(r#""kind":"unsupported_bank""#))
        .stderr(predicate::str::contains("unsupported bank: hdfc"));
}

#[test]
fn test_unreadable_document_exits_with_failure() {
    let home = TempDir::new().unwrap();
    let input = home.path().join("garbage.pdf");
    fs::write(&input, b"not a pdf at all").unwrap();

    cardstmt(&home)
        .arg("parse")
        .arg(&input)
        .args(["--bank", "axis"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(r#""kind":"unreadable_document""#));
}

#[test]
fn test_batch_summary_records_failures() {
    let home = TempDir::new().unwrap();
    let input_dir = home.path().join("in");
    let output_dir = home.path().join("out");
    fs::create_dir_all(&input_dir).unwrap();
    fs::write(input_dir.join("one.pdf"), b"broken").unwrap();
    fs::write(input_dir.join("two.pdf"), b"also broken").unwrap();

    let pattern = format!("{}/*.pdf", input_dir.display());

    cardstmt(&home)
        .args(["batch", &pattern, "--bank", "sbi", "--summary", "--continue-on-error"])
        .arg("--output-dir")
        .arg(&output_dir)
        .assert()
        .success();

    let summary = fs::read_to_string(output_dir.join("summary.csv")).unwrap();
    assert!(summary.starts_with("filename,status,bank"));
    assert!(summary.contains("one.pdf,error"));
    assert!(summary.contains("two.pdf,error"));
}

#[test]
fn test_batch_stops_on_first_error() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join("bad.pdf"), b"broken").unwrap();
    let pattern = format!("{}/*.pdf", home.path().display());

    cardstmt(&home)
        .args(["batch", &pattern, "--bank", "sbi"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Parsing failed"));
}

#[test]
fn test_batch_starts_no_file_after_a_failure() {
    let home = TempDir::new().unwrap();
    let inputs = home.path().join("in");
    let out = home.path().join("out");
    fs::create_dir_all(&inputs).unwrap();
    for name in ["a.pdf", "b.pdf", "c.pdf"] {
        fs::write(inputs.join(name), b"broken").unwrap();
    }
    let pattern = format!("{}/*.pdf", inputs.display());

    cardstmt(&home)
        .args(["batch", &pattern, "--bank", "sbi", "-j", "1", "--summary"])
        .arg("--output-dir")
        .arg(&out)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("a.pdf"))
        .stderr(predicate::str::contains("b.pdf").not())
        .stderr(predicate::str::contains("c.pdf").not());

    assert!(!out.join("summary.csv").exists());
}

#[test]
fn test_config_init_get_set() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("config.json");
    let config = config.to_str().unwrap();

    cardstmt(&home)
        .args(["--config", config, "config", "init"])
        .assert()
        .success();

    cardstmt(&home)
        .args(["--config", config, "config", "get", "extraction.currency"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""INR""#));

    cardstmt(&home)
        .args(["--config", config, "config", "set", "pdf.max_pages", "5"])
        .assert()
        .success();

    cardstmt(&home)
        .args(["--config", config, "config", "get", "pdf.max_pages"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5"));

    cardstmt(&home)
        .args(["--config", config, "config", "set", "pdf.unknown", "1"])
        .assert()
        .failure();

    cardstmt(&home)
        .args(["--config", config, "config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}
