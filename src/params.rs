//! Query-parameter construction.

/// Filter `(name, value)` pairs down to the entries that carry a value,
/// preserving order. Values are not validated or transformed here; the
/// request executor percent-encodes them when building the query string.
pub fn construct_parameters(pairs: &[(&str, Option<&str>)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .filter_map(|(name, value)| value.map(|v| (name.to_string(), v.to_string())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_absent_values_keeps_present_ones() {
        let params = construct_parameters(&[
            ("state", Some("RUNNING")),
            ("finalStatus", None),
            ("user", Some("alice")),
            ("limit", None),
        ]);
        assert_eq!(
            params,
            vec![
                ("state".to_string(), "RUNNING".to_string()),
                ("user".to_string(), "alice".to_string()),
            ]
        );
    }

    #[test]
    fn all_absent_yields_empty() {
        let params = construct_parameters(&[("state", None), ("healthy", None)]);
        assert!(params.is_empty());
    }

    #[test]
    fn preserves_order() {
        let params = construct_parameters(&[
            ("b", Some("2")),
            ("a", Some("1")),
            ("c", Some("3")),
        ]);
        let names: Vec<_> = params.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["b", "a", "c"]);
    }
}
