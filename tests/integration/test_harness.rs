//! Integration tests for the script test runner

use crate::fixtures::test_cases;
use duk_bindgen::harness::{run_test, TestCase, TestCaseFormat};
use duk_bindgen::Logger;
use std::fs;
use tempfile::TempDir;

fn write_case(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_parse_fixtures() {
    let dir = TempDir::new().unwrap();
    let coffee = TestCase::parse(write_case(&dir, "hello.coffee", test_cases::HELLO_COFFEE)).unwrap();
    let js = TestCase::parse(write_case(&dir, "hello.js", test_cases::HELLO_JS)).unwrap();

    assert_eq!(coffee.format, TestCaseFormat::Coffee);
    assert_eq!(coffee.expected_text(), "hello\nworld\n");
    assert_eq!(js.format, TestCaseFormat::JavaScript);
    assert_eq!(js.expected_text(), "hello\n");
    assert_eq!(coffee.digest.len(), 64);
}

#[test]
fn test_unsupported_extension_is_named_failure() {
    let dir = TempDir::new().unwrap();
    let source = write_case(&dir, "hello.lua", "print('hello')\n");
    let result = run_test(&source, &["true".to_string()], &Logger::new(false, false));

    match result {
        Err(duk_bindgen::Error::UnsupportedTestCase(ext)) => assert_eq!(ext, ".lua"),
        other => panic!("Expected UnsupportedTestCase, got {:?}", other),
    }
}

#[cfg(unix)]
#[test]
fn test_pass_and_fail_reports() {
    let dir = TempDir::new().unwrap();
    let source = write_case(&dir, "hello.coffee", test_cases::HELLO_COFFEE);
    let logger = Logger::new(false, false);
    let sh = |script: &str| vec!["sh".to_string(), "-c".to_string(), script.to_string()];

    let pass = run_test(&source, &sh("echo hello; echo world"), &logger).unwrap();
    assert_eq!(pass.render(), "*** PASS : hello.coffee\n");

    let fail = run_test(&source, &sh("echo hello; echo world 1>&2; echo extra"), &logger).unwrap();
    let rendered = fail.render();
    assert!(rendered.starts_with("*** FAIL : hello.coffee\n"));
    assert!(rendered.contains("+extra\n"));
    assert_eq!(fail.exit_code, Some(0));
}
