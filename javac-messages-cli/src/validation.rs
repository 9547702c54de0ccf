use std::path::Path;

/// Validate file path exists and is readable
pub fn validate_file_path(path: &str) -> Result<(), String> {
    let path_obj = Path::new(path);

    if !path_obj.exists() {
        return Err(format!("File does not exist: {}", path));
    }

    if !path_obj.is_file() {
        return Err(format!("Path is not a file: {}", path));
    }

    Ok(())
}

/// Validate output directory exists or can be created
pub fn validate_output_path(path: &str) -> Result<(), String> {
    let path_obj = Path::new(path);

    if path_obj.is_dir() {
        return Err(format!("Output path is a directory: {}", path));
    }

    if let Some(parent) = path_obj.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                return Err(format!("Cannot create output directory: {}", e));
            }
        }
    }

    Ok(())
}

/// Validate a hex SHA-256 digest (64 hex digits, any case)
pub fn validate_sha256(digest: &str) -> Result<(), String> {
    let digest = digest.trim();
    if digest.len() != 64 || !digest.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!(
            "Invalid SHA-256 digest: {}. Expected 64 hexadecimal digits",
            digest
        ));
    }
    Ok(())
}

/// Validate a message level such as `err`, `warn` or `misc`
pub fn validate_level(level: &str) -> Result<(), String> {
    if level.is_empty() {
        return Err("Level cannot be empty".to_string());
    }
    if level.contains('.') || level.chars().any(char::is_whitespace) {
        return Err(format!(
            "Invalid level: {}. Expected a single name segment like `err` or `warn`",
            level
        ));
    }
    Ok(())
}
