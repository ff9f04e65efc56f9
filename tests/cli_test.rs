use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

fn request(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{json}").unwrap();
    file
}

const PERSONAL: &str = r#"["fullName", "Ana Souza"],
    ["email", "ana@example.com"],
    ["password", "secret1"],
    ["confirmPassword", "secret1"]"#;

#[test]
fn test_card_checkout_end_to_end() {
    let file = request(&format!(
        r#"{{
            "plan": "premium",
            "paymentMethod": "card",
            "fields": [{PERSONAL},
                ["cardNumber", "4111111111111111"],
                ["cardName", "ANA SOUZA"],
                ["expiryDate", "1230"],
                ["cvv", "123"]]
        }}"#
    ));

    let mut cmd = Command::new(cargo_bin!("glowai-checkout"));
    cmd.arg(file.path()).args(["--payment-delay-ms", "0"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(r#""state": "idle""#))
        .stdout(predicate::str::contains(r#""subscription_plan": "premium""#))
        .stdout(predicate::str::contains(r#""total_today": "38.42""#))
        .stdout(predicate::str::contains(r#""subscription_status": "active""#));
}

#[test]
fn test_pix_checkout_waits_for_confirmation() {
    let file = request(&format!(
        r#"{{ "plan": "pro", "paymentMethod": "pix", "fields": [{PERSONAL}] }}"#
    ));

    let mut cmd = Command::new(cargo_bin!("glowai-checkout"));
    cmd.arg(file.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(r#""state": "pix_awaiting_confirmation""#))
        .stdout(predicate::str::contains("BR.GOV.BCB.PIX"))
        .stdout(predicate::str::contains("79.90"))
        .stdout(predicate::str::contains(r#""amount": "R$ 79,90""#))
        .stdout(predicate::str::contains(r#""account_id": null"#));
}

#[test]
fn test_pix_checkout_confirmed() {
    let file = request(&format!(
        r#"{{ "paymentMethod": "pix", "fields": [{PERSONAL}] }}"#
    ));

    let mut cmd = Command::new(cargo_bin!("glowai-checkout"));
    cmd.arg(file.path()).arg("--confirm-pix");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(r#""plan": "basic""#))
        .stdout(predicate::str::contains(r#""subscription_status": "active""#));
}

#[test]
fn test_validation_error_is_reported() {
    let file = request(r#"{ "fields": [["fullName", "Ana"]] }"#);

    let mut cmd = Command::new(cargo_bin!("glowai-checkout"));
    cmd.arg(file.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(r#""detail": "missing required fields""#));
}

#[test]
fn test_malformed_request_fails() {
    let file = request("not json");

    let mut cmd = Command::new(cargo_bin!("glowai-checkout"));
    cmd.arg(file.path());

    cmd.assert().failure();
}
