/*
[INPUT]:  Built gemini-cli binary and the bundled sandbox profile
[OUTPUT]: Process-level checks of dry-run and configuration errors
[POS]:    Integration test layer - binary invocation
[UPDATE]: When CLI flags or dry-run output change
*/

use std::process::Command;

fn sandbox_config() -> String {
    format!("{}/config/sandbox.yaml", env!("CARGO_MANIFEST_DIR"))
}

fn gemini_cli() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_gemini-cli"));
    command
        .env("RUST_LOG", "error")
        .env_remove("GEMINI_API_KEY")
        .env_remove("GEMINI_API_SECRET")
        .env_remove("GEMINI_ENVIRONMENT");
    command
}

#[test]
fn cli_mode_with_config_and_dry_run_works() {
    let output = gemini_cli()
        .arg("--config")
        .arg(sandbox_config())
        .arg("--dry-run")
        .args(["book", "btcusd", "--limit-bids", "5"])
        .output()
        .expect("Failed to start gemini-cli binary");

    assert!(
        output.status.success(),
        "Process exited with non-zero status: {}\nStdout: {}\nStderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );

    let plan: serde_json::Value = serde_json::from_slice(&output.stdout).expect("JSON plan on stdout");
    assert_eq!(plan["access"], "public");
    assert_eq!(plan["path"], "/v1/book/btcusd");
    assert_eq!(plan["params"]["limit_bids"], "5");
    assert_eq!(plan["url"], "https://api.sandbox.gemini.com/v1/book/btcusd?limit_bids=5");
}

#[test]
fn dry_run_private_command_shows_params_without_nonce() {
    let output = gemini_cli()
        .arg("--config")
        .arg(sandbox_config())
        .arg("--dry-run")
        .args(["place-order", "btcusd", "buy", "0.01", "1000", "--maker-only"])
        .output()
        .expect("Failed to start gemini-cli binary");

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let plan: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(plan["access"], "private");
    assert_eq!(plan["params"]["type"], "exchange limit");
    assert_eq!(plan["params"]["amount"], "0.01");
    assert!(plan["params"]["client_order_id"].is_string());
    assert!(plan["params"].get("nonce").is_none());
}

#[test]
fn private_command_without_credentials_fails() {
    let output = gemini_cli()
        .arg("--dry-run")
        .arg("balances")
        .output()
        .expect("Failed to start gemini-cli binary");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("credentials"));
}
