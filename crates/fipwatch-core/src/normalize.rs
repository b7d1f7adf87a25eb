//! Status text normalization.

/// Collapse a raw status cell into its canonical form.
///
/// Any status mentioning "Superseded" collapses to the single literal
/// "Superseded"; the upstream table writes variants like
/// "Superseded by FIP-0015" and those all describe the same lifecycle
/// state. Every other status is kept verbatim, trimmed.
pub fn normalize_status(raw: &str) -> String {
    if raw.contains("Superseded") {
        "Superseded".to_string()
    } else {
        raw.trim().to_string()
    }
}
