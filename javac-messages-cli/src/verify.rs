use javac_messages::{SourceInfo, verify_checksum};

use crate::validation::{validate_file_path, validate_sha256};

/// Check `input` against `expected`, or against the pinned JDK 18 file.
pub fn verify_source(input: &str, expected: Option<&str>) -> Result<(), String> {
    validate_file_path(input)?;

    let pinned = SourceInfo::jdk_18();
    let expected = match expected {
        Some(digest) => {
            validate_sha256(digest)?;
            digest
        }
        None => pinned.sha256,
    };

    let digest = verify_checksum(input, expected).map_err(|e| e.to_string())?;
    println!("✅ {}: sha256 {}", input, digest);
    if digest == pinned.sha256 {
        println!("Matches compiler.properties from JDK {}", pinned.jdk_version);
        println!("Source: {}", pinned.permalink);
    }
    Ok(())
}
