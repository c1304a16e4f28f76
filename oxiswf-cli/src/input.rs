//! Memory-mapped input files.

use memmap2::Mmap;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

/// A read-only view of an input file.
#[derive(Debug)]
pub struct InputFile {
    path: PathBuf,
    map: Option<Mmap>,
}

impl InputFile {
    /// Map `path` into memory. Empty files are not mapped.
    pub fn open(path: &Path) -> io::Result<Self> {
        let file = File::open(path)?;
        let map = if file.metadata()?.len() == 0 {
            None
        } else {
            // SAFETY: Read-only mapping, caller responsible for file stability
            Some(unsafe { Mmap::map(&file)? })
        };

        Ok(Self {
            path: path.to_path_buf(),
            map,
        })
    }

    /// File contents.
    pub fn bytes(&self) -> &[u8] {
        self.map.as_deref().unwrap_or(&[])
    }

    /// Path the file was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn create_temp_file(name: &str, contents: &[u8]) -> PathBuf {
        let path = std::env::temp_dir().join(format!("oxiswf_input_test_{}", name));
        let mut file = File::create(&path).expect("Failed to create temp file");
        file.write_all(contents).expect("Failed to write temp file");
        file.sync_all().expect("Failed to sync temp file");
        path
    }

    #[test]
    fn test_open_maps_contents() {
        let path = create_temp_file("contents", &[0x00, 0x40]);
        let input = InputFile::open(&path).expect("open failed");
        assert_eq!(input.bytes(), &[0x00, 0x40]);
        assert_eq!(input.path(), path.as_path());
        drop(input);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_open_empty_file() {
        let path = create_temp_file("empty", &[]);
        let input = InputFile::open(&path).expect("open failed");
        assert!(input.bytes().is_empty());
        drop(input);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_open_missing_file() {
        let path = std::env::temp_dir().join("oxiswf_input_test_missing_file");
        assert!(InputFile::open(&path).is_err());
    }
}
