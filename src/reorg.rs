//! Reconciliation pass over already-stored addresses.
//!
//! Corrects patient addresses that were saved before splitting existed and
//! still carry the house number inside the street string. Unlike the
//! message-driven policy this never compares against the old house number:
//! once a trailing house number is found in the street, both components are
//! overwritten.

use crate::host::{HostApi, Patient};
use crate::splitter;
use anyhow::Result;
use tracing::warn;

/// Splits the patient's stored street string in place and saves. Returns
/// whether a save happened.
pub fn reorg_address(host: &impl HostApi, patient: &mut Patient) -> Result<bool> {
    let street = match patient.address.as_ref().and_then(|adr| adr.street.clone()) {
        Some(street) => street,
        None => {
            warn!(patient_id = %patient.patient_id, "no complete address for patient");
            return Ok(false);
        }
    };
    let street = street.trim();

    // Nothing to do when the street carries no trailing house number.
    if splitter::house_number(street).trim().is_empty() {
        return Ok(false);
    }

    if let Some(adr) = patient.address.as_mut() {
        adr.street = Some(splitter::street_name(street).to_string());
        adr.house_number = Some(splitter::house_number(street).to_string());
    }
    host.save_patient(patient)?;

    Ok(true)
}

/// Looks the patient up through the host and applies [`reorg_address`].
pub fn reorg_patient(host: &impl HostApi, patient_id: &str) -> Result<bool> {
    let Some(mut patient) = host.patient(patient_id)? else {
        warn!(patient_id, "no patient record to reorganize");
        return Ok(false);
    };

    reorg_address(host, &mut patient)
}
