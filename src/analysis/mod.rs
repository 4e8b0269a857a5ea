pub mod matcher;
pub mod model_builder;
pub mod naming;

use crate::models::{Dialect, HeaderModel};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use matcher::DeclarationMatcher;
use model_builder::{BuildOptions, ModelBuilder};

/// Extraction phase: streams header text through the matcher into the
/// model builder.
pub struct HeaderAnalyzer {
    dialect: Dialect,
    matcher: DeclarationMatcher,
    options: BuildOptions,
}

impl HeaderAnalyzer {
    pub fn new(dialect: Dialect, options: BuildOptions) -> crate::Result<Self> {
        Ok(Self {
            dialect,
            matcher: DeclarationMatcher::for_dialect(dialect)?,
            options,
        })
    }

    /// Use a custom pattern table instead of the dialect's.
    pub fn with_matcher(
        dialect: Dialect,
        matcher: DeclarationMatcher,
        options: BuildOptions,
    ) -> Self {
        Self {
            dialect,
            matcher,
            options,
        }
    }

    /// Extract the model from a header file. Fails only if the file cannot be
    /// opened or read.
    pub fn analyze_file<P: AsRef<Path>>(&self, path: P) -> crate::Result<HeaderModel> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let source_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        self.analyze_reader(BufReader::new(file), &source_name)
    }

    /// Extract the model from in-memory header text.
    pub fn analyze_str(&self, text: &str, source_name: &str) -> HeaderModel {
        let mut builder = self.builder(source_name);
        for line in text.lines() {
            self.scan_line(&mut builder, line);
        }
        builder.finish()
    }

    /// Extract the model line by line from any buffered reader. Bytes that
    /// are not valid UTF-8 are replaced, identifiers are ASCII anyway.
    pub fn analyze_reader<R: BufRead>(
        &self,
        mut reader: R,
        source_name: &str,
    ) -> crate::Result<HeaderModel> {
        let mut builder = self.builder(source_name);
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            self.scan_line(&mut builder, &line);
        }
        Ok(builder.finish())
    }

    fn builder(&self, source_name: &str) -> ModelBuilder {
        ModelBuilder::new(self.dialect, source_name, self.options.clone())
    }

    fn scan_line(&self, builder: &mut ModelBuilder, line: &str) {
        match self.matcher.match_line(line) {
            Some(declaration) => {
                builder.record_line(true);
                builder.add(declaration);
            }
            None => builder.record_line(false),
        }
    }
}
