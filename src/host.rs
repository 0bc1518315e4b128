//! Capabilities and record types supplied by the embedding application.
//!
//! Message decoding, patient lookup and persistence stay with the host; this
//! crate performs at most one read and, conditionally, one write per
//! invocation and never awaits confirmation of a save.

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// An inbound address-bearing message event.
///
/// Carries the raw message text plus the protocol-version tag the host needs
/// to decode the patient-address field, and the id of the patient the
/// message refers to.
#[derive(Debug, Default, Serialize, Deserialize, Clone)]
pub struct AddressEvent {
    pub patient_id: String,
    pub hl7_version: String,
    pub message: String,
}

/// A patient's stored address, owned by the host patient record.
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PatientAddress {
    pub street: Option<String>,
    pub house_number: Option<String>,
    pub zip_code: String,
    pub city: String,
}

/// A host patient record.
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Patient {
    pub id: u32,
    pub patient_id: String,
    pub given_name: String,
    pub family_name: String,
    pub address: Option<PatientAddress>,
}

/// Host interface consumed by the update policies.
pub trait HostApi {
    /// Extracts the patient-address field strings from an inbound event, one
    /// per field repetition, decoded per the event's protocol version.
    fn parse_address_field(&self, event: &AddressEvent) -> Result<Vec<String>>;

    /// Looks up the patient record for the given patient id.
    fn patient(&self, patient_id: &str) -> Result<Option<Patient>>;

    /// Persists a full patient record. Fire-and-forget: no retry happens on
    /// the caller side.
    fn save_patient(&self, patient: &Patient) -> Result<()>;
}
