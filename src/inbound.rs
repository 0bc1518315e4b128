//! Message-driven address updates.
//!
//! Applies the street/house-number split derived from an inbound
//! address-bearing event to the patient's stored address. The stored address
//! counts as already split when either its street or its house number equals
//! the freshly derived component, and is then left alone.

use crate::host::{AddressEvent, HostApi, Patient};
use crate::models::Address;
use crate::xad;
use anyhow::Result;
use tracing::{debug, warn};

/// Processes one inbound event: one candidate per address field repetition.
pub fn apply_event(host: &impl HostApi, event: &AddressEvent) -> Result<()> {
    let Some(mut patient) = host.patient(&event.patient_id)? else {
        warn!(patient_id = %event.patient_id, "no patient record for event");
        return Ok(());
    };

    for field in host.parse_address_field(event)? {
        apply_candidate(host, &mut patient, &xad::split(&field))?;
    }

    Ok(())
}

/// Overwrites the stored street and house number with the candidate's derived
/// values and saves, unless the stored address is absent, incomplete or
/// already split. Returns whether a save happened.
pub fn apply_candidate(
    host: &impl HostApi,
    patient: &mut Patient,
    candidate: &Address,
) -> Result<bool> {
    let street_name = candidate.street_name().to_string();
    let house_number = candidate.house_number().to_string();

    let already_split = match patient.address.as_ref() {
        None => {
            warn!(patient_id = %patient.patient_id, "patient has no stored address");
            return Ok(false);
        }
        Some(adr) => match (adr.street.as_deref(), adr.house_number.as_deref()) {
            // Either component matching counts as already split.
            (Some(street), Some(house)) => street == street_name || house == house_number,
            _ => {
                debug!(patient_id = %patient.patient_id, "stored address is incomplete");
                return Ok(false);
            }
        },
    };

    if already_split {
        return Ok(false);
    }

    if let Some(adr) = patient.address.as_mut() {
        adr.street = Some(street_name);
        adr.house_number = Some(house_number);
    }
    host.save_patient(patient)?;

    Ok(true)
}
