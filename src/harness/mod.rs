//! Companion test runner for scripts executed through the generated bindings.
//!
//! A test case is a script whose expected output is embedded in a marker
//! comment. The runner executes a command, captures stdout and stderr as one
//! stream and compares digests of both texts.

use crate::interface::output::Logger;
use sha2::{Digest, Sha256};
use similar::TextDiff;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Marker convention of a test case source, picked by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestCaseFormat {
    /// `### @test` ... `###` block comments
    Coffee,
    /// `/*===` ... `===*/` block comments
    JavaScript,
}

impl TestCaseFormat {
    pub fn from_path(path: &Path) -> crate::Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("coffee") => Ok(TestCaseFormat::Coffee),
            Some("js") => Ok(TestCaseFormat::JavaScript),
            Some(ext) => Err(crate::Error::UnsupportedTestCase(format!(".{}", ext))),
            None => Err(crate::Error::UnsupportedTestCase(String::new())),
        }
    }

    fn opens_block(&self, line: &[u8]) -> bool {
        match self {
            TestCaseFormat::Coffee => line.starts_with(b"### @test"),
            TestCaseFormat::JavaScript => line.starts_with(b"/*==="),
        }
    }

    fn closes_block(&self, line: &[u8]) -> bool {
        let line = line
            .strip_suffix(b"\n")
            .map(|rest| rest.strip_suffix(b"\r").unwrap_or(rest))
            .unwrap_or(line);
        match self {
            TestCaseFormat::Coffee => line == b"###",
            TestCaseFormat::JavaScript => line == b"===*/",
        }
    }
}

/// Expected output extracted from a test case source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub path: PathBuf,
    pub basename: String,
    pub format: TestCaseFormat,
    /// Recorded lines, terminators included, decoded lossily
    pub expected: Vec<String>,
    pub digest: String,
}

impl TestCase {
    pub fn parse<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        let format = TestCaseFormat::from_path(path)?;
        let bytes = fs::read(path)?;
        Ok(Self::parse_bytes(path, format, &bytes))
    }

    pub fn parse_str(path: &Path, format: TestCaseFormat, text: &str) -> Self {
        Self::parse_bytes(path, format, text.as_bytes())
    }

    /// Collect every line between an opening and a closing marker. Several
    /// blocks in one file are concatenated. The digest covers the raw bytes,
    /// `expected` is only a lossy rendering for diffs.
    pub fn parse_bytes(path: &Path, format: TestCaseFormat, bytes: &[u8]) -> Self {
        let mut recorded = Vec::new();
        let mut expected = Vec::new();
        let mut recording = false;
        for line in bytes.split_inclusive(|&b| b == b'\n') {
            if !recording && format.opens_block(line) {
                recording = true;
            } else if recording && format.closes_block(line) {
                recording = false;
            } else if recording {
                recorded.extend_from_slice(line);
                expected.push(String::from_utf8_lossy(line).into_owned());
            }
        }

        let basename = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();
        let digest = digest_hex(&recorded);

        Self {
            path: path.to_path_buf(),
            basename,
            format,
            expected,
            digest,
        }
    }

    pub fn expected_text(&self) -> String {
        self.expected.concat()
    }
}

/// Combined stdout and stderr of a finished command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    pub lines: Vec<String>,
    pub digest: String,
    pub exit_code: Option<i32>,
}

impl ProcessOutput {
    /// Run `cmd` with both output streams on one pipe. The pipe is drained to
    /// the end before the child is waited on.
    pub fn capture(cmd: &[String]) -> crate::Result<Self> {
        let (program, args) = cmd.split_first().ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "no test command given")
        })?;

        let (mut reader, writer) = io::pipe()?;
        let mut command = Command::new(program);
        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(writer.try_clone()?)
            .stderr(writer);
        let mut child = command.spawn()?;
        // the parent's copies of the write end must be closed to see EOF
        drop(command);

        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        let status = child.wait()?;

        Ok(Self::from_bytes(&bytes, status.code()))
    }

    pub fn from_bytes(bytes: &[u8], exit_code: Option<i32>) -> Self {
        let text = String::from_utf8_lossy(bytes);
        Self {
            lines: text.split_inclusive('\n').map(str::to_string).collect(),
            digest: digest_hex(bytes),
            exit_code,
        }
    }

    pub fn text(&self) -> String {
        self.lines.concat()
    }
}

/// Outcome of one test case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestReport {
    pub basename: String,
    pub passed: bool,
    /// Unified diff from expected to actual output, empty on success
    pub diff: String,
    pub exit_code: Option<i32>,
}

impl TestReport {
    pub fn compare(case: &TestCase, output: &ProcessOutput) -> Self {
        let passed = case.digest == output.digest;
        let diff = if passed {
            String::new()
        } else {
            let expected = case.expected_text();
            let actual = output.text();
            TextDiff::from_lines(&expected, &actual)
                .unified_diff()
                .header(&case.basename, "output")
                .to_string()
        };

        Self {
            basename: case.basename.clone(),
            passed,
            diff,
            exit_code: output.exit_code,
        }
    }

    /// `*** PASS : name`, or `*** FAIL : name` followed by the diff
    pub fn render(&self) -> String {
        if self.passed {
            format!("*** PASS : {}\n", self.basename)
        } else {
            format!("*** FAIL : {}\n{}", self.basename, self.diff)
        }
    }
}

/// Parse `source`, run `cmd` and compare the outputs.
pub fn run_test(source: &Path, cmd: &[String], logger: &Logger) -> crate::Result<TestReport> {
    let case = TestCase::parse(source)?;
    logger.debug(&format!(
        "{}: {} expected lines, sha256 {}",
        case.basename,
        case.expected.len(),
        case.digest
    ));

    let output = ProcessOutput::capture(cmd)?;
    logger.debug(&format!(
        "{}: {} output lines, sha256 {}, exit code {:?}",
        cmd.join(" "),
        output.lines.len(),
        output.digest,
        output.exit_code
    ));

    Ok(TestReport::compare(&case, &output))
}

fn digest_hex(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}
