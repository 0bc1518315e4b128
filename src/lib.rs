//! Splitting of HL7 "Extended Address" (XAD) patient address fields.
//!
//! The street-address subfield of an XAD field packs street name and house
//! number into a single string. This crate splits that string into its two
//! parts, collapses the SAP MCI triple-redundant encoding beforehand, and
//! decides whether a patient's stored address should be updated with the
//! split result. Message decoding and patient persistence stay with the
//! embedding application, reached through the [`host::HostApi`] trait.

#[macro_use]
extern crate lazy_static;

pub mod host;
pub mod inbound;
pub mod models;
pub mod reorg;
pub mod sap_mci;
pub mod splitter;
pub mod xad;

pub use host::{AddressEvent, HostApi, Patient, PatientAddress};
pub use models::{Address, AddressBuilder};
