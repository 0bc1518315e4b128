//! Carves a raw `^`-delimited XAD field string into an [`Address`].

use crate::models::Address;

/// Splits one XAD patient address field into its subfields.
///
/// Only the first six components are used; trailing components such as the
/// address-type code are ignored, missing ones default to `""`. The caller
/// is trusted to have decoded the field text per the message's protocol
/// version.
pub fn split(field: &str) -> Address {
    let mut parts = field.split('^');

    Address::builder()
        .street_address(parts.next().unwrap_or(""))
        .other_designation(parts.next().unwrap_or(""))
        .city(parts.next().unwrap_or(""))
        .state(parts.next().unwrap_or(""))
        .postal_code(parts.next().unwrap_or(""))
        .country(parts.next().unwrap_or(""))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_whole_xad_field() {
        let adr = split("100 Morgen Weg 16A^^Arnstein^^06456^DE");

        assert_eq!(adr.street_address(), "100 Morgen Weg 16A");
        assert_eq!(adr.other_designation(), "");
        assert_eq!(adr.city(), "Arnstein");
        assert_eq!(adr.state(), "");
        assert_eq!(adr.postal_code(), "06456");
        assert_eq!(adr.country(), "DE");
        assert_eq!(adr.street_name(), "100 Morgen Weg");
        assert_eq!(adr.house_number(), "16A");
    }

    #[test]
    fn test_split_sap_mci_field_with_address_type() {
        let adr = split("Muster Weg 1&Muster Weg&1^^Musterhausen^^12345^DE^C");

        assert_eq!(adr.street_address(), "Muster Weg 1");
        assert_eq!(adr.other_designation(), "");
        assert_eq!(adr.city(), "Musterhausen");
        assert_eq!(adr.state(), "");
        assert_eq!(adr.postal_code(), "12345");
        assert_eq!(adr.country(), "DE");
        assert_eq!(adr.street_name(), "Muster Weg");
        assert_eq!(adr.house_number(), "1");
    }

    #[test]
    fn test_split_short_field_defaults_to_empty() {
        let adr = split("Teststraße 42");

        assert_eq!(adr.street_address(), "Teststraße 42");
        assert_eq!(adr.city(), "");
        assert_eq!(adr.country(), "");
        assert_eq!(adr.street_name(), "Teststraße");
        assert_eq!(adr.house_number(), "42");
    }
}
