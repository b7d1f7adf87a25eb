//! Status badge styling.

/// CSS badge class for a lifecycle status.
///
/// Keyword match over the lowercased status; order matters for statuses
/// that mention several keywords. Unknown statuses style as draft.
pub fn status_css_class(status: &str) -> &'static str {
    let status = status.to_lowercase();
    if status.contains("final") {
        "status-final"
    } else if status.contains("draft") {
        "status-draft"
    } else if status.contains("accepted") {
        "status-accepted"
    } else if status.contains("deferred") {
        "status-deferred"
    } else if status.contains("rejected") {
        "status-rejected"
    } else if status.contains("withdrawn") {
        "status-withdrawn"
    } else if status.contains("active") {
        "status-active"
    } else if status.contains("last call") {
        "status-last-call"
    } else if status.contains("superseded") {
        "status-superseded"
    } else {
        "status-draft"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_statuses_map_to_their_class() {
        assert_eq!(status_css_class("Final"), "status-final");
        assert_eq!(status_css_class("Last Call"), "status-last-call");
        assert_eq!(status_css_class("Superseded"), "status-superseded");
        assert_eq!(status_css_class("Withdrawn"), "status-withdrawn");
    }

    #[test]
    fn test_match_is_case_insensitive() {
        assert_eq!(status_css_class("FINAL"), "status-final");
        assert_eq!(status_css_class("last call"), "status-last-call");
    }

    #[test]
    fn test_unknown_status_styles_as_draft() {
        assert_eq!(status_css_class("Harmonizing"), "status-draft");
        assert_eq!(status_css_class(""), "status-draft");
    }

    #[test]
    fn test_keyword_order_is_stable() {
        // "Draft, awaiting final edits" mentions both keywords; the final
        // keyword wins because it is checked first.
        assert_eq!(status_css_class("Draft, awaiting final edits"), "status-final");
    }
}
