//! The source file: reading it, and checking it is the file we expect.
//!
//! Parsed messages are only meaningful against a known revision of
//! `compiler.properties`, so callers pin the file by its SHA-256 digest and
//! verify it before parsing.

use std::{fs::File, io::Read, path::Path};

use sha2::{Digest, Sha256};

use crate::error::Error;

/// Where a pinned `compiler.properties` comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceInfo {
    pub jdk_version: &'static str,
    /// Lowercase hex SHA-256 of the file bytes.
    pub sha256: &'static str,
    pub commit_sha: &'static str,
    pub permalink: &'static str,
}

impl SourceInfo {
    /// `compiler.properties` as shipped with JDK 18+37.
    pub const fn jdk_18() -> Self {
        SourceInfo {
            jdk_version: "18+37",
            sha256: "afe2fe79779178c70dc8e68a67cb0748fbd5a7b3adb47567c1c6d26d764a67ef",
            commit_sha: "0f2113cee79b9645105b4753c7d7eacb83b872c2",
            permalink: "https://github.com/openjdk/jdk/blob/0f2113cee79b9645105b4753c7d7eacb83b872c2/src/jdk.compiler/share/classes/com/sun/tools/javac/resources/compiler.properties",
        }
    }
}

/// Lowercase hex SHA-256 of `bytes`.
pub fn sha256_hex(bytes: &[u8]) -> String {
    format!("{:x}", Sha256::digest(bytes))
}

/// Hashes the file at `path` and compares it with `expected` (case-insensitive).
///
/// Returns the computed digest on success.
pub fn verify_checksum<P: AsRef<Path>>(path: P, expected: &str) -> Result<String, Error> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    let mut buf = vec![0u8; 64 * 1024];
    loop {
        let n = file.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    let actual = format!("{:x}", hasher.finalize());

    if actual.eq_ignore_ascii_case(expected.trim()) {
        Ok(actual)
    } else {
        Err(Error::checksum_mismatch(expected.trim(), actual))
    }
}

/// Reads the file at `path` as text, dropping a leading byte order mark.
pub fn read_source_text<P: AsRef<Path>>(path: P) -> Result<String, Error> {
    let file = File::open(path)?;
    let mut decoder = encoding_rs_io::DecodeReaderBytesBuilder::new()
        .bom_override(true)
        .strip_bom(true)
        .build(file);

    let mut decoded = String::new();
    decoder.read_to_string(&mut decoded)?;
    Ok(decoded)
}
