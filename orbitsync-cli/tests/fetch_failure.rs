mod common;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use common::serve_once;

fn orbitsync() -> Command {
    Command::cargo_bin("orbitsync").expect("orbitsync binary")
}

#[test]
fn http_500_exits_nonzero_and_touches_no_files() {
    let root = TempDir::new().unwrap();
    let url = serve_once("500 Internal Server Error", "{}");

    orbitsync()
        .arg("sync")
        .arg("--root")
        .arg(root.path())
        .arg("--url")
        .arg(&url)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("HTTP 500"));

    assert!(!root.path().join("cache").exists());
    assert!(!root.path().join("src").exists());
}

#[test]
fn unreachable_feed_exits_nonzero() {
    let root = TempDir::new().unwrap();
    // Bind then drop to get a port with no listener.
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };

    orbitsync()
        .arg("sync")
        .arg("--root")
        .arg(root.path())
        .arg("--url")
        .arg(format!("http://{addr}/feed"))
        .assert()
        .failure()
        .code(1);

    assert!(!root.path().join("cache").exists());
}

#[test]
fn non_json_body_exits_nonzero_and_preserves_prior_state() {
    let root = TempDir::new().unwrap();

    // Healthy first sync.
    let url = serve_once("200 OK", common::FEED_BODY);
    orbitsync()
        .arg("sync")
        .arg("--root")
        .arg(root.path())
        .arg("--url")
        .arg(&url)
        .assert()
        .success();
    let snapshot_path = root.path().join("cache").join("orbit-feed.json");
    let before = std::fs::read_to_string(&snapshot_path).unwrap();

    // Broken feed: run fails, both artifacts keep their pre-run state.
    let url = serve_once("200 OK", "<html>maintenance</html>");
    orbitsync()
        .arg("sync")
        .arg("--root")
        .arg(root.path())
        .arg("--url")
        .arg(&url)
        .assert()
        .failure()
        .code(1);

    let after = std::fs::read_to_string(&snapshot_path).unwrap();
    assert_eq!(before, after, "failed run must not modify the snapshot");
}
