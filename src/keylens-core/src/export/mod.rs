//! Static document exporters and their file/viewer plumbing.
//!
//! Both exporters render from the same built grid and ledger; nothing is
//! recomputed at export time. The HTML path writes to a temp file that is
//! fully flushed before the platform viewer is invoked; the file is left in
//! place for the viewer.

pub mod html;
pub mod markdown;

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to create export file")]
    Create(#[source] std::io::Error),
    #[error("failed to write export file {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to launch document viewer for {path}")]
    Viewer {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Writes `contents` to a fresh temp file and returns its path. The file is
/// flushed before the path is handed out.
pub fn write_temp_document(
    contents: &str,
    prefix: &str,
    suffix: &str,
) -> Result<PathBuf, ExportError> {
    let mut file = tempfile::Builder::new()
        .prefix(prefix)
        .suffix(suffix)
        .tempfile()
        .map_err(ExportError::Create)?;
    let path = file.path().to_path_buf();
    file.as_file_mut()
        .write_all(contents.as_bytes())
        .and_then(|()| file.as_file_mut().flush())
        .map_err(|source| ExportError::Write {
            path: path.clone(),
            source,
        })?;
    // Keep the file on disk for the viewer.
    let (_, path) = file.keep().map_err(|err| ExportError::Write {
        path,
        source: err.error,
    })?;
    info!(path = %path.display(), "wrote export document");
    Ok(path)
}

/// Opens `path` with the platform's default document viewer.
pub fn open_in_viewer(path: &Path) -> Result<(), ExportError> {
    let viewer_error = |source| ExportError::Viewer {
        path: path.to_path_buf(),
        source,
    };

    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open")
            .arg("--")
            .arg(path)
            .stdout(std::process::Stdio::null())
            .stderr(std::process::Stdio::null())
            .spawn()
            .map_err(viewer_error)?;
    }

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open")
            .arg(path)
            .stdout(std::process::Stdio::null())
            .stderr(std::process::Stdio::null())
            .spawn()
            .map_err(viewer_error)?;
    }

    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .arg("/C")
            .arg("start")
            .arg("")
            .arg(path)
            .stdout(std::process::Stdio::null())
            .stderr(std::process::Stdio::null())
            .spawn()
            .map_err(viewer_error)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_temp_document_persists_contents() {
        let path = write_temp_document("hello", "keylens-test-", ".txt").unwrap();
        let read_back = std::fs::read_to_string(&path).unwrap();
        assert_eq!(read_back, "hello");
        let _ = std::fs::remove_file(path);
    }
}
