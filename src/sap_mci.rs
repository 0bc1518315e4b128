//! Collapses the SAP MCI triple-redundant street address encoding.
//!
//! SAP MCI sends the same street address three times joined by `&`:
//! combined form, street-only and number-only, e.g.
//! `Muster Weg 1&Muster Weg&1`. Only that exact shape is collapsed to the
//! combined form; anything else passes through so that ordinary addresses
//! containing `&` are left alone.

/// Returns the combined street address for a SAP MCI triple, or the input
/// unchanged.
pub fn collapse(input: &str) -> &str {
    if input.contains('&') {
        let parts: Vec<&str> = input.split('&').collect();
        if parts.len() == 3 && parts[0] == format!("{} {}", parts[1], parts[2]) {
            return parts[0];
        }
    }

    input
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_sap_mci_triple() {
        assert_eq!(collapse("Muster Weg 1&Muster Weg&1"), "Muster Weg 1");
        assert_eq!(collapse("Teststraße 42&Teststraße&42"), "Teststraße 42");
    }

    #[test]
    fn test_passthrough_without_ampersand() {
        let plain = vec!["", "Teststraße", "Muster Weg 1", "100 Morgen Weg 16A"];

        for adr in plain {
            assert_eq!(collapse(adr), adr, "Changed: {}", adr);
        }
    }

    #[test]
    fn test_passthrough_mismatched_triple() {
        // Three parts, but the first is not street and number rejoined.
        let mismatched = vec![
            "Muster Weg 1&Muster Weg&2",
            "Muster Weg&Muster&Weg 1",
            "A&B&C",
        ];

        for adr in mismatched {
            assert_eq!(collapse(adr), adr, "Changed: {}", adr);
        }
    }

    #[test]
    fn test_passthrough_wrong_part_count() {
        let wrong_count = vec![
            "Foo & Bar 5",
            "Muster Weg 1&Muster Weg&1&extra",
        ];

        for adr in wrong_count {
            assert_eq!(collapse(adr), adr, "Changed: {}", adr);
        }
    }
}
