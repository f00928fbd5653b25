#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use runmetrics_core::UpdateOutcome;
use runmetrics_server::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
server:
  listn: "127.0.0.1:8080" # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.outcome().as_str(), UpdateOutcome::BadRequest.as_str());
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.server.listen, "127.0.0.1:8080");
}

#[test]
fn custom_listen() {
    let ok = r#"
version: 1
server:
  listen: "0.0.0.0:9090"
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.server.listen_addr().unwrap().port(), 9090);
}

#[test]
fn rejects_bad_listen_and_version() {
    let bad_listen = r#"
version: 1
server:
  listen: "localhost"
"#;
    assert!(config::load_from_str(bad_listen).is_err());
    assert!(config::load_from_str("version: 2\n").is_err());
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let cfg = config::load_or_default("does/not/exist/runmetrics.yaml").expect("defaults");
    assert_eq!(cfg.server.listen, "127.0.0.1:8080");
    assert!(config::load_from_file("does/not/exist/runmetrics.yaml").is_err());
}
