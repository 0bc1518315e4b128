use crate::sap_mci;
use crate::splitter;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An HL7 extended address, one value per XAD subfield.
///
/// The street name and house number are not stored; they are derived on read
/// by splitting the street-address subfield.
///
/// See: https://hl7.eu/refactored/dtXAD.html
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Address {
    street_address: String,
    other_designation: String,
    city: String,
    state: String,
    postal_code: String,
    country: String,
}

impl Address {
    pub fn builder() -> AddressBuilder {
        AddressBuilder::default()
    }

    /// The street-address subfield, collapsed from the SAP MCI format.
    pub fn street_address(&self) -> &str {
        sap_mci::collapse(&self.street_address)
    }

    pub fn other_designation(&self) -> &str {
        &self.other_designation
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    /// The street name part of the street-address subfield.
    pub fn street_name(&self) -> &str {
        splitter::street_name(&self.street_address)
    }

    /// The house number part of the street-address subfield, `""` when the
    /// subfield has none.
    pub fn house_number(&self) -> &str {
        splitter::house_number(&self.street_address)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}^{}^{}^{}^{}^{}",
            self.street_address,
            self.other_designation,
            self.city,
            self.state,
            self.postal_code,
            self.country
        )
    }
}

/// Single-use builder for [`Address`]. All subfields default to `""`.
///
/// `build` consumes the builder, so a built address cannot be touched again.
#[derive(Debug, Default)]
pub struct AddressBuilder {
    instance: Address,
}

impl AddressBuilder {
    pub fn build(self) -> Address {
        self.instance
    }

    pub fn street_address(mut self, street_address: impl Into<String>) -> Self {
        self.instance.street_address = street_address.into();
        self
    }

    pub fn other_designation(mut self, other_designation: impl Into<String>) -> Self {
        self.instance.other_designation = other_designation.into();
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.instance.city = city.into();
        self
    }

    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.instance.state = state.into();
        self
    }

    pub fn postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.instance.postal_code = postal_code.into();
        self
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.instance.country = country.into();
        self
    }
}
