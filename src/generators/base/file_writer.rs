use std::fs;
use std::path::{Path, PathBuf};

/// Writes the generated skeleton into its output directory
pub struct FileWriter {
    output_dir: PathBuf,
}

impl FileWriter {
    pub fn new<P: AsRef<Path>>(output_dir: P) -> crate::Result<Self> {
        let output_dir = output_dir.as_ref().to_path_buf();
        if !output_dir.as_os_str().is_empty() {
            fs::create_dir_all(&output_dir)?;
        }
        Ok(Self { output_dir })
    }

    /// Create a writer for the directory containing `output_file`
    pub fn for_output_file<P: AsRef<Path>>(output_file: P) -> crate::Result<Self> {
        let dir = output_file
            .as_ref()
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        Self::new(dir)
    }

    /// Write a generated file as raw bytes, replacing any previous content
    pub fn write_generated_file(&self, filename: &str, content: &str) -> crate::Result<PathBuf> {
        let file_path = self.output_dir.join(filename);
        fs::write(&file_path, content.as_bytes())?;
        Ok(file_path)
    }
}
