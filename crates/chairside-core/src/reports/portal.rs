//! Patient-facing views over the active session.
//!
//! These are the only reads that depend on a session; a missing or
//! non-patient session is a signaled error rather than an empty result.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::auth::AuthStore;
use crate::clinic::ClinicStore;
use crate::models::{Incident, Patient};

/// Portal errors.
#[derive(Error, Debug, PartialEq)]
pub enum PortalError {
    #[error("no active session")]
    NoSession,

    #[error("session has no linked patient record")]
    NotAPatient,

    #[error("linked patient record not found: {0}")]
    PatientMissing(String),
}

/// Profile card data for the logged-in patient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientProfile {
    pub patient: Patient,
    /// Login email from the session
    pub email: String,
    /// Whole years of age at the time of the call
    pub age: u32,
}

/// The logged-in patient's appointments, split around `now`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientAppointments {
    /// Scheduled and in the future, soonest first
    pub upcoming: Vec<Incident>,
    /// Everything else, most recent first
    pub history: Vec<Incident>,
}

/// The session's patient record with login email and computed age.
pub fn patient_profile(
    auth: &AuthStore,
    clinic: &ClinicStore,
    now: DateTime<Utc>,
) -> Result<PatientProfile, PortalError> {
    let (patient, email) = linked_patient(auth, clinic)?;
    Ok(PatientProfile {
        age: patient.age_on(now.date_naive()),
        patient: patient.clone(),
        email,
    })
}

/// The session's incidents split into upcoming and history.
pub fn patient_appointments(
    auth: &AuthStore,
    clinic: &ClinicStore,
    now: DateTime<Utc>,
) -> Result<PatientAppointments, PortalError> {
    let (patient, _) = linked_patient(auth, clinic)?;
    let incidents = clinic.list_incidents_for_patient(&patient.id);

    let mut upcoming: Vec<Incident> = incidents
        .iter()
        .filter(|i| i.is_upcoming(now))
        .map(|i| (*i).clone())
        .collect();
    upcoming.sort_by_key(|i| i.appointment_date);

    let mut history: Vec<Incident> = incidents
        .iter()
        .filter(|i| !i.is_upcoming(now))
        .map(|i| (*i).clone())
        .collect();
    history.sort_by(|a, b| b.appointment_date.cmp(&a.appointment_date));

    Ok(PatientAppointments { upcoming, history })
}

fn linked_patient<'a>(
    auth: &AuthStore,
    clinic: &'a ClinicStore,
) -> Result<(&'a Patient, String), PortalError> {
    let session = auth.current_session().ok_or(PortalError::NoSession)?;
    let patient_id = session
        .patient_id
        .as_deref()
        .ok_or(PortalError::NotAPatient)?;
    let patient = clinic
        .get_patient(patient_id)
        .ok_or_else(|| PortalError::PatientMissing(patient_id.to_string()))?;
    Ok((patient, session.email.clone()))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::store::KvStore;

    fn setup() -> (AuthStore, ClinicStore) {
        let kv = Arc::new(KvStore::open_in_memory().unwrap());
        let mut auth = AuthStore::new(kv.clone());
        auth.initialize();
        let mut clinic = ClinicStore::new(kv);
        clinic.initialize();
        (auth, clinic)
    }

    #[test]
    fn test_no_session_is_an_error() {
        let (auth, clinic) = setup();
        let err = patient_profile(&auth, &clinic, Utc::now()).unwrap_err();
        assert_eq!(err, PortalError::NoSession);
    }

    #[test]
    fn test_admin_session_is_not_a_patient() {
        let (mut auth, clinic) = setup();
        assert!(auth.login("admin@entnt.in", "admin123"));

        let err = patient_appointments(&auth, &clinic, Utc::now()).unwrap_err();
        assert_eq!(err, PortalError::NotAPatient);
    }

    #[test]
    fn test_profile_for_patient_session() {
        let (mut auth, clinic) = setup();
        assert!(auth.login("john@entnt.in", "patient123"));

        let profile = patient_profile(&auth, &clinic, Utc::now()).unwrap();
        assert_eq!(profile.patient.id, "p1");
        assert_eq!(profile.email, "john@entnt.in");
        assert!(profile.age >= 34); // born 1990-05-10
    }

    #[test]
    fn test_appointments_split_and_sorted() {
        let (mut auth, clinic) = setup();
        assert!(auth.login("john@entnt.in", "patient123"));

        // Seed for p1: i1 scheduled +5d, i2 completed (2024), i7 completed -1d.
        let split = patient_appointments(&auth, &clinic, Utc::now()).unwrap();
        let upcoming: Vec<&str> = split.upcoming.iter().map(|i| i.id.as_str()).collect();
        let history: Vec<&str> = split.history.iter().map(|i| i.id.as_str()).collect();

        assert_eq!(upcoming, vec!["i1"]);
        assert_eq!(history, vec!["i7", "i2"]);
    }

    #[test]
    fn test_deleted_patient_link_is_an_error() {
        let (mut auth, mut clinic) = setup();
        assert!(auth.login("john@entnt.in", "patient123"));
        clinic.delete_patient("p1");

        let err = patient_profile(&auth, &clinic, Utc::now()).unwrap_err();
        assert_eq!(err, PortalError::PatientMissing("p1".into()));
    }
}
