use unicode_normalization::UnicodeNormalization;

const WINDOWS_DEVICE_FILES: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// Reduce an uploaded filename to a flat ASCII name that is safe to join onto
/// an upload directory.
///
/// Accents are decomposed and dropped, path separators and whitespace runs
/// become `_`, anything outside `[A-Za-z0-9_.-]` is removed and leading or
/// trailing dots/underscores are stripped. On Windows hosts a reserved device
/// name gets a `_` prefix. The result may be empty.
pub fn secure_filename(filename: &str) -> String {
    let ascii: String = filename
        .nfkd()
        .filter(char::is_ascii)
        .map(|c| if c == '/' || c == '\\' { ' ' } else { c })
        .collect();

    let joined = ascii.split_whitespace().collect::<Vec<_>>().join("_");

    let cleaned: String = joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        .collect();

    let cleaned = cleaned.trim_matches(|c| c == '.' || c == '_');

    let stem = cleaned.split('.').next().unwrap_or_default();
    if cfg!(windows)
        && !cleaned.is_empty()
        && WINDOWS_DEVICE_FILES.contains(&stem.to_ascii_uppercase().as_str()) {
        return format!("_{}", cleaned);
    }

    cleaned.to_string()
}
