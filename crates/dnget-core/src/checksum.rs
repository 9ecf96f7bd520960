//! SHA-512 verification of downloaded archives.
//!
//! The release catalog publishes a lowercase hex SHA-512 per file; the digest
//! is computed after the download completes by re-reading the file.

use sha2::{Digest, Sha512};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{InstallError, Result};

const BUF_SIZE: usize = 64 * 1024;

/// Compute SHA-512 of a file and return the digest as lowercase hex.
/// Reads in chunks to keep memory use bounded; suitable for large files.
pub fn sha512_path(path: &Path) -> Result<String> {
    let mut f = File::open(path).map_err(|e| InstallError::io(path, e))?;
    let mut hasher = Sha512::new();
    let mut buf = vec![0u8; BUF_SIZE];
    loop {
        let n = f.read(&mut buf).map_err(|e| InstallError::io(path, e))?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(hex::encode(hasher.finalize()))
}

/// Hash `path` and compare with `expected`. Any difference is an
/// `IntegrityMismatch`; the file is left where it is.
pub fn verify_sha512(path: &Path, expected: &str) -> Result<()> {
    let actual = sha512_path(path)?;
    if actual != expected {
        return Err(InstallError::IntegrityMismatch {
            path: path.to_path_buf(),
            expected: expected.to_string(),
            actual,
        });
    }
    tracing::debug!(path = %path.display(), "sha512 verified");
    Ok(())
}
