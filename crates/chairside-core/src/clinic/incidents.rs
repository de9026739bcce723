//! Incident operations.

use super::ClinicStore;
use crate::models::{Incident, NewIncident};

impl ClinicStore {
    /// Look up an incident by id.
    pub fn get_incident(&self, id: &str) -> Option<&Incident> {
        self.incidents.iter().find(|i| i.id == id)
    }

    /// Incidents for a patient, in collection insertion order. Sorting is
    /// a consumer concern.
    pub fn list_incidents_for_patient(&self, patient_id: &str) -> Vec<&Incident> {
        self.incidents
            .iter()
            .filter(|i| i.patient_id == patient_id)
            .collect()
    }

    /// Create an incident with a store-assigned id, append, persist.
    /// Returns the stored record.
    ///
    /// `patient_id` is not checked against the patient collection; callers
    /// own referential correctness at creation time.
    pub fn add_incident(&mut self, data: NewIncident) -> Incident {
        let incident = Incident::from_new(Self::next_id(), data);
        self.incidents.push(incident.clone());
        self.persist_incidents();
        incident
    }

    /// Replace the incident with the matching id in place. A missing id is
    /// a silent no-op.
    pub fn update_incident(&mut self, incident: Incident) {
        if let Some(slot) = self.incidents.iter_mut().find(|i| i.id == incident.id) {
            *slot = incident;
            self.persist_incidents();
        }
    }

    /// Delete an incident. A missing id is a silent no-op; no cascade.
    pub fn delete_incident(&mut self, id: &str) {
        let before = self.incidents.len();
        self.incidents.retain(|i| i.id != id);
        if self.incidents.len() != before {
            self.persist_incidents();
        }
    }
}
