use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size of a single content file (16 MB)
pub const MAX_CONTENT_FILE_SIZE: u64 = 16 * 1024 * 1024;

/// Maximum length of a rule identifier used as a file name component
const MAX_RULE_ID_LENGTH: usize = 255;

/// Reads a content file after checking that it is a regular,
/// non-symlinked file within the size limit.
///
/// # Arguments
/// * `path` - The file to read
/// * `file_description` - Description of the file for error messages (e.g. "rules")
pub fn read_content_file(path: &Path, file_description: &str) -> Result<String> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e)
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    if metadata.len() > MAX_CONTENT_FILE_SIZE {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            metadata.len(),
            MAX_CONTENT_FILE_SIZE
        );
    }

    fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file_description, e))
}

/// Validates a rule identifier before it is used as a file name component.
///
/// Rule ids look like `plugin_name|ERROR_KEY`; anything that could escape the
/// data directory is rejected.
pub fn validate_rule_id(rule_id: &str) -> Result<()> {
    if rule_id.is_empty() {
        anyhow::bail!("Rule id cannot be empty");
    }

    if rule_id.len() > MAX_RULE_ID_LENGTH {
        anyhow::bail!(
            "Rule id is too long ({} bytes). Maximum allowed: {} bytes",
            rule_id.len(),
            MAX_RULE_ID_LENGTH
        );
    }

    if rule_id.contains('/') || rule_id.contains('\\') {
        anyhow::bail!("Security: rule id contains path separators which are not allowed");
    }

    if rule_id.contains("..") {
        anyhow::bail!("Security: rule id contains '..' which is not allowed");
    }

    if rule_id.chars().any(char::is_control) {
        anyhow::bail!("Security: rule id contains control characters");
    }

    Ok(())
}
