//! Chairside Core Library
//!
//! Client-side clinic management core: patients, treatment incidents, and
//! the authenticated session, persisted to a local key-value store.
//!
//! # Architecture
//!
//! ```text
//!        ┌─────────────┐        ┌──────────────┐
//!        │  AuthStore  │        │  ClinicStore │
//!        │ login/logout│        │ CRUD+cascade │
//!        └──────┬──────┘        └──────┬───────┘
//!               │                      │
//!               └───────┬──────────────┘
//!                       ▼
//!               ┌──────────────┐
//!               │   KvStore    │  typed get/set/remove (SQLite)
//!               └──────────────┘
//!
//!        reports::{dashboard, calendar, portal}
//!        pure derived views over store snapshots
//! ```
//!
//! Stores are explicit instances over a shared [`store::KvStore`] handle:
//! construct, call `initialize()` (load-or-seed from persistence), then
//! use. Every mutation synchronously rewrites the persisted snapshot, so
//! a reload observes the latest state. All core operations are
//! single-threaded and synchronous; the one async operation is
//! [`attachments::ingest_files`].
//!
//! # Modules
//!
//! - [`store`]: SQLite-backed key-value persistence adapter
//! - [`models`]: domain types (User, Session, Patient, Incident)
//! - [`auth`]: credential directory and active session
//! - [`clinic`]: patient/incident collections with cascade delete
//! - [`reports`]: dashboard, calendar, and patient-portal aggregations
//! - [`attachments`]: async file-to-data-URI ingestion
//! - [`seed`]: first-run dataset

pub mod attachments;
pub mod auth;
pub mod clinic;
pub mod models;
pub mod reports;
pub mod seed;
pub mod store;

// Re-export commonly used types
pub use auth::AuthStore;
pub use clinic::ClinicStore;
pub use models::{
    FileAttachment, Incident, IncidentStatus, NewIncident, NewPatient, Patient, Session, User,
    UserRole,
};
pub use reports::{
    DashboardKpis, MonthlyRevenue, PatientAppointments, PatientProfile, PatientVisits, PortalError,
};
pub use store::{KvStore, StoreError};
