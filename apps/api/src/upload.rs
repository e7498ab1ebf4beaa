//! Upload validation and scratch storage.
//!
//! Every upload lands in a uniquely named temporary file inside the upload
//! directory and is removed when the handle drops, on both the success and
//! the error path. Two concurrent uploads named `resume.pdf` therefore never
//! touch the same path.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

/// Extensions the analyzer accepts. Filename-suffix check only; no MIME
/// sniffing.
const ALLOWED_EXTENSIONS: &[&str] = &["pdf", "docx"];

/// True iff `filename` contains a `.` and the lowercase suffix after the
/// last `.` is an allowed extension.
pub fn allowed_file(filename: &str) -> bool {
    match filename.rsplit_once('.') {
        Some((_, ext)) => ALLOWED_EXTENSIONS.contains(&ext.to_lowercase().as_str()),
        None => false,
    }
}

/// Lowercased extension of `filename`, if it has one.
fn extension_of(filename: &str) -> Option<String> {
    filename.rsplit_once('.').map(|(_, ext)| ext.to_lowercase())
}

/// An uploaded file persisted to scratch storage for the duration of one
/// request. Deleting is automatic on drop.
pub struct ScratchUpload {
    file: NamedTempFile,
}

impl ScratchUpload {
    /// Writes `bytes` to a uniquely named file in `dir`, preserving the
    /// original extension so the extractor's suffix dispatch works.
    pub fn write(dir: &Path, original_name: &str, bytes: &[u8]) -> std::io::Result<Self> {
        let suffix = extension_of(original_name)
            .map(|ext| format!(".{ext}"))
            .unwrap_or_default();
        let mut file = tempfile::Builder::new()
            .prefix("resume-")
            .suffix(&suffix)
            .tempfile_in(dir)?;
        file.write_all(bytes)?;
        file.flush()?;
        Ok(Self { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// The scratch path as an owned value, for callers that outlive a borrow.
    pub fn path_buf(&self) -> PathBuf {
        self.file.path().to_path_buf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allowed_file_truth_table() {
        assert!(!allowed_file("resume"));
        assert!(allowed_file("resume.pdf"));
        assert!(allowed_file("resume.PDF"));
        assert!(allowed_file("resume.docx"));
        assert!(allowed_file("resume.DocX"));
        assert!(!allowed_file("resume.pdf.exe"));
        assert!(!allowed_file("resume.txt"));
        assert!(!allowed_file(""));
    }

    #[test]
    fn scratch_upload_preserves_extension_and_content() {
        let dir = tempfile::tempdir().unwrap();
        let upload = ScratchUpload::write(dir.path(), "My Resume.PDF", b"%PDF-").unwrap();
        assert_eq!(
            upload.path().extension().and_then(|e| e.to_str()),
            Some("pdf")
        );
        assert_eq!(std::fs::read(upload.path()).unwrap(), b"%PDF-");
    }

    #[test]
    fn scratch_upload_removed_on_drop() {
        let dir = tempfile::tempdir().unwrap();
        let upload = ScratchUpload::write(dir.path(), "resume.docx", b"PK").unwrap();
        let path = upload.path_buf();
        assert!(path.exists());
        drop(upload);
        assert!(!path.exists());
    }

    #[test]
    fn same_original_name_gets_distinct_paths() {
        // Regression for the original design's upload-filename collision race:
        // both uploads keep their own bytes under their own path.
        let dir = tempfile::tempdir().unwrap();
        let a = ScratchUpload::write(dir.path(), "resume.pdf", b"first upload").unwrap();
        let b = ScratchUpload::write(dir.path(), "resume.pdf", b"second upload").unwrap();
        assert_ne!(a.path(), b.path());
        assert_eq!(std::fs::read(a.path()).unwrap(), b"first upload");
        assert_eq!(std::fs::read(b.path()).unwrap(), b"second upload");
    }
}
