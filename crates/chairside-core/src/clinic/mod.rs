//! Clinical data store: patients and treatment incidents.

mod incidents;
mod patients;

use std::sync::Arc;

use crate::models::{Incident, Patient};
use crate::seed;
use crate::store::{keys, KvStore};

/// Owns the patient and incident collections.
///
/// Every mutation rewrites the persisted record and leaves the in-memory
/// collections as the snapshot visible to readers. A persistence failure
/// is logged and the next successful mutation rewrites the full state.
pub struct ClinicStore {
    kv: Arc<KvStore>,
    patients: Vec<Patient>,
    incidents: Vec<Incident>,
}

impl ClinicStore {
    /// Create a store over the shared persistence handle. Call
    /// [`initialize`](Self::initialize) before first use.
    pub fn new(kv: Arc<KvStore>) -> Self {
        Self {
            kv,
            patients: Vec::new(),
            incidents: Vec::new(),
        }
    }

    /// Load each collection from the store, falling back to (and
    /// persisting) the seed dataset on first run. The two collections are
    /// handled independently. Idempotent.
    pub fn initialize(&mut self) {
        self.patients = match self.kv.get(keys::PATIENTS) {
            Some(patients) => patients,
            None => {
                let patients = seed::seed_patients();
                persist(&self.kv, keys::PATIENTS, &patients);
                patients
            }
        };
        self.incidents = match self.kv.get(keys::INCIDENTS) {
            Some(incidents) => incidents,
            None => {
                let incidents = seed::seed_incidents();
                persist(&self.kv, keys::INCIDENTS, &incidents);
                incidents
            }
        };
    }

    /// Patients in collection insertion order.
    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    /// Incidents in collection insertion order.
    pub fn incidents(&self) -> &[Incident] {
        &self.incidents
    }

    /// A fresh collision-resistant id. Never reuses an id within the
    /// process lifetime, including ids of deleted records.
    pub(crate) fn next_id() -> String {
        uuid::Uuid::new_v4().to_string()
    }

    pub(crate) fn persist_patients(&self) {
        persist(&self.kv, keys::PATIENTS, &self.patients);
    }

    pub(crate) fn persist_incidents(&self) {
        persist(&self.kv, keys::INCIDENTS, &self.incidents);
    }
}

fn persist<T: serde::Serialize>(kv: &KvStore, key: &str, value: &T) {
    if let Err(e) = kv.set(key, value) {
        tracing::warn!("failed to persist {}: {}", key, e);
    }
}
