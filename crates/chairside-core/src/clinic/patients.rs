//! Patient operations.

use super::ClinicStore;
use crate::models::{NewPatient, Patient};

impl ClinicStore {
    /// Look up a patient by id.
    pub fn get_patient(&self, id: &str) -> Option<&Patient> {
        self.patients.iter().find(|p| p.id == id)
    }

    /// Create a patient with a store-assigned id, append, persist.
    /// Returns the stored record.
    pub fn add_patient(&mut self, data: NewPatient) -> Patient {
        let patient = Patient::from_new(Self::next_id(), data);
        self.patients.push(patient.clone());
        self.persist_patients();
        patient
    }

    /// Replace the patient with the matching id in place. A missing id is
    /// a silent no-op.
    pub fn update_patient(&mut self, patient: Patient) {
        if let Some(slot) = self.patients.iter_mut().find(|p| p.id == patient.id) {
            *slot = patient;
            self.persist_patients();
        }
    }

    /// Delete a patient and cascade to every incident referencing it.
    ///
    /// The incident sweep runs whether or not a patient row matched, so
    /// incidents orphaned under the id are collected too. A fully missing
    /// id is a silent no-op.
    pub fn delete_patient(&mut self, id: &str) {
        let patients_before = self.patients.len();
        self.patients.retain(|p| p.id != id);
        if self.patients.len() != patients_before {
            self.persist_patients();
        }

        let incidents_before = self.incidents.len();
        self.incidents.retain(|i| i.patient_id != id);
        if self.incidents.len() != incidents_before {
            self.persist_incidents();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::NaiveDate;

    use super::*;
    use crate::store::{keys, KvStore};

    fn setup() -> ClinicStore {
        let kv = Arc::new(KvStore::open_in_memory().unwrap());
        let mut clinic = ClinicStore::new(kv);
        clinic.initialize();
        clinic
    }

    fn new_patient(name: &str) -> NewPatient {
        NewPatient {
            name: name.into(),
            dob: NaiveDate::from_ymd_opt(1992, 3, 4).unwrap(),
            contact: "5550001111".into(),
            health_info: "None".into(),
        }
    }

    #[test]
    fn test_add_and_get_patient() {
        let mut clinic = setup();

        let added = clinic.add_patient(new_patient("Ada Lovelace"));
        let found = clinic.get_patient(&added.id).unwrap();
        assert_eq!(found, &added);
        assert_eq!(found.name, "Ada Lovelace");
    }

    #[test]
    fn test_add_assigns_distinct_ids() {
        let mut clinic = setup();

        let a = clinic.add_patient(new_patient("A"));
        let b = clinic.add_patient(new_patient("B"));
        assert_ne!(a.id, b.id);
        assert_eq!(a.id.len(), 36); // UUID format
        assert!(clinic.get_patient(&b.id).is_some());
    }

    #[test]
    fn test_update_patient_replaces_in_place() {
        let mut clinic = setup();

        let mut patient = clinic.get_patient("p1").unwrap().clone();
        patient.contact = "9990001111".into();
        clinic.update_patient(patient);

        assert_eq!(clinic.get_patient("p1").unwrap().contact, "9990001111");
        assert_eq!(clinic.patients()[0].id, "p1"); // position unchanged
    }

    #[test]
    fn test_update_missing_patient_is_noop() {
        let mut clinic = setup();
        let before = clinic.patients().to_vec();

        let mut ghost = before[0].clone();
        ghost.id = "no-such-id".into();
        clinic.update_patient(ghost);

        assert_eq!(clinic.patients(), before.as_slice());
    }

    #[test]
    fn test_delete_patient_cascades_to_incidents() {
        let mut clinic = setup();
        // Seed: p1 owns i1, i2, i7; p2 owns i3, i5.
        clinic.delete_patient("p1");

        assert!(clinic.get_patient("p1").is_none());
        assert!(clinic.incidents().iter().all(|i| i.patient_id != "p1"));
        assert_eq!(clinic.list_incidents_for_patient("p2").len(), 2);
        assert_eq!(clinic.incidents().len(), 4);
    }

    #[test]
    fn test_delete_missing_patient_is_noop() {
        let mut clinic = setup();
        let patients = clinic.patients().to_vec();
        let incidents = clinic.incidents().to_vec();

        clinic.delete_patient("no-such-id");

        assert_eq!(clinic.patients(), patients.as_slice());
        assert_eq!(clinic.incidents(), incidents.as_slice());
    }

    #[test]
    fn test_delete_persists_both_collections() {
        let kv = Arc::new(KvStore::open_in_memory().unwrap());
        let mut clinic = ClinicStore::new(kv.clone());
        clinic.initialize();

        clinic.delete_patient("p1");

        let patients: Vec<Patient> = kv.get(keys::PATIENTS).unwrap();
        let incidents: Vec<crate::models::Incident> = kv.get(keys::INCIDENTS).unwrap();
        assert_eq!(patients.as_slice(), clinic.patients());
        assert_eq!(incidents.as_slice(), clinic.incidents());
    }
}
