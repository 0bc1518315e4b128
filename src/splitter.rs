//! Splits a street address string into street name and house number.
//!
//! See: https://hl7.eu/refactored/dtXAD.html

use crate::sap_mci;
use regex::Regex;

lazy_static! {
    /// A regex matching a street name followed by a trailing house number.
    static ref RE_STREET_HOUSE: Regex = Regex::new(r"(?x)
        (?P<street>[^,]+)    # Street name: one or more characters up to the separator
        [,\s]+               # Separator: comma and/or whitespace
        (?P<house>           # House number: may be empty
            (?:
                [0-9]+           # One or more digits
                [A-Za-z\s\-/]*   # Optional suffix: letters, whitespace, hyphen, slash
            )*
        )
        $                    # Anchored at the end of the string
    ").unwrap();
}

/// Returns the street name part of a street address.
///
/// The input is collapsed from the SAP MCI format first. Without a separator
/// before a terminal numeric token the original input is returned whole; the
/// matched street name is not trimmed further.
pub fn street_name(street_address: &str) -> &str {
    match RE_STREET_HOUSE.captures(sap_mci::collapse(street_address)) {
        Some(caps) => caps.name("street").map_or(street_address, |m| m.as_str()),
        None => street_address,
    }
}

/// Returns the house number part of a street address, `""` when the address
/// has no trailing numeric token.
///
/// Letters directly after digits ("16A") and hyphen or slash forms ("12-14",
/// "3/5") belong to the house number.
pub fn house_number(street_address: &str) -> &str {
    match RE_STREET_HOUSE.captures(sap_mci::collapse(street_address)) {
        Some(caps) => caps.name("house").map_or("", |m| m.as_str()),
        None => "",
    }
}
