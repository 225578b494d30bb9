//! Legal-value tables for enum-constrained query parameters.
//!
//! The client treats these as opaque string sets consulted for membership
//! checks only; it attaches no semantics to individual states.

/// States a YARN application can report.
pub const APPLICATION_STATES: &[&str] = &[
    "NEW",
    "NEW_SAVING",
    "SUBMITTED",
    "ACCEPTED",
    "RUNNING",
    "FINISHED",
    "FAILED",
    "KILLED",
];

/// Final statuses an application reports about itself.
pub const FINAL_APPLICATION_STATUSES: &[&str] = &["UNDEFINED", "SUCCEEDED", "FAILED", "KILLED"];

/// Accepted values for the node-health filter.
pub const NODE_HEALTHY_VALUES: &[&str] = &["true", "false"];

pub fn is_legal_application_state(state: &str) -> bool {
    APPLICATION_STATES.contains(&state)
}

pub fn is_legal_final_status(status: &str) -> bool {
    FINAL_APPLICATION_STATUSES.contains(&status)
}

pub fn is_legal_healthy_filter(value: &str) -> bool {
    NODE_HEALTHY_VALUES.contains(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_states_are_legal() {
        assert!(is_legal_application_state("RUNNING"));
        assert!(is_legal_application_state("NEW_SAVING"));
        assert!(!is_legal_application_state("BOGUS"));
        assert!(!is_legal_application_state("running"));
    }

    #[test]
    fn final_statuses() {
        assert!(is_legal_final_status("SUCCEEDED"));
        assert!(!is_legal_final_status("SUCCESS"));
    }

    #[test]
    fn healthy_filter_is_lowercase_booleans_only() {
        assert!(is_legal_healthy_filter("true"));
        assert!(is_legal_healthy_filter("false"));
        assert!(!is_legal_healthy_filter("TRUE"));
        assert!(!is_legal_healthy_filter("yes"));
    }
}
