//! Treatment incident models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of an incident.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum IncidentStatus {
    Scheduled,
    Completed,
    Cancelled,
    Pending,
}

/// A file attached to an incident, payload inlined as a data URI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FileAttachment {
    /// Display name
    pub name: String,
    /// `data:<mime>;base64,...` payload
    pub url: String,
    /// MIME type string
    pub mime_type: String,
}

/// A single treatment/appointment record tied to one patient, carrying
/// scheduling, status, and post-visit outcome data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Incident {
    /// Unique id, assigned by the store at creation
    pub id: String,
    /// Owning patient. Not validated against the patient collection at
    /// creation time; see the clinic store.
    pub patient_id: String,
    pub title: String,
    pub description: String,
    pub comments: String,
    pub appointment_date: DateTime<Utc>,
    pub status: IncidentStatus,
    /// Treatment cost, meaningful only when status is Completed
    pub cost: Option<f64>,
    /// Post-visit treatment notes
    pub treatment: Option<String>,
    pub next_appointment_date: Option<DateTime<Utc>>,
    /// Attachments in insertion order
    pub files: Vec<FileAttachment>,
}

/// Creation payload: an incident without an id. The store assigns one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewIncident {
    pub patient_id: String,
    pub title: String,
    pub description: String,
    pub comments: String,
    pub appointment_date: DateTime<Utc>,
    pub status: IncidentStatus,
    pub cost: Option<f64>,
    pub treatment: Option<String>,
    pub next_appointment_date: Option<DateTime<Utc>>,
    pub files: Vec<FileAttachment>,
}

impl Incident {
    pub(crate) fn from_new(id: String, data: NewIncident) -> Self {
        Self {
            id,
            patient_id: data.patient_id,
            title: data.title,
            description: data.description,
            comments: data.comments,
            appointment_date: data.appointment_date,
            status: data.status,
            cost: data.cost,
            treatment: data.treatment,
            next_appointment_date: data.next_appointment_date,
            files: data.files,
        }
    }

    /// True for a scheduled appointment strictly in the future.
    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.status == IncidentStatus::Scheduled && self.appointment_date > now
    }
}
