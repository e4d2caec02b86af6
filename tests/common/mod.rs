use assert_cmd::Command;
use std::path::PathBuf;

pub fn cmd() -> Command {
    Command::cargo_bin("validator").unwrap()
}

pub fn fixture(name: &str) -> Vec<u8> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    std::fs::read(&path).unwrap_or_else(|e| panic!("read fixture {}: {e}", path.display()))
}

/// Runs `validator x509 <specs...>` with the given PEM fixture on stdin and
/// returns the process exit code.
pub fn validate(fixture_name: &str, specs: &[&str]) -> i32 {
    cmd()
        .arg("x509")
        .args(specs)
        .write_stdin(fixture(fixture_name))
        .assert()
        .get_output()
        .status
        .code()
        .expect("exit code")
}
