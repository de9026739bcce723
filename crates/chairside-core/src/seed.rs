//! First-run seed dataset.
//!
//! The stores fall back to this data (and persist it) the first time they
//! initialize against an empty key-value store. Ids here are the fixed
//! seed ids; store-assigned ids are UUIDs.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};

use crate::models::{Incident, IncidentStatus, Patient, User, UserRole};

/// The seeded credential directory.
pub fn seed_users() -> Vec<User> {
    vec![
        User {
            id: "1".into(),
            role: UserRole::Admin,
            email: "admin@entnt.in".into(),
            password: "admin123".into(),
            patient_id: None,
        },
        User {
            id: "2".into(),
            role: UserRole::Patient,
            email: "john@entnt.in".into(),
            password: "patient123".into(),
            patient_id: Some("p1".into()),
        },
        User {
            id: "3".into(),
            role: UserRole::Patient,
            email: "jane@entnt.in".into(),
            password: "patient123".into(),
            patient_id: Some("p2".into()),
        },
    ]
}

/// The seeded patient registry.
pub fn seed_patients() -> Vec<Patient> {
    vec![
        Patient {
            id: "p1".into(),
            name: "John Doe".into(),
            dob: day(1990, 5, 10),
            contact: "1234567890".into(),
            health_info: "No known allergies. Prefers morning appointments.".into(),
        },
        Patient {
            id: "p2".into(),
            name: "Jane Smith".into(),
            dob: day(1985, 11, 22),
            contact: "0987654321".into(),
            health_info: "Allergic to penicillin.".into(),
        },
        Patient {
            id: "p3".into(),
            name: "Mike Williams".into(),
            dob: day(2001, 2, 15),
            contact: "5551234567".into(),
            health_info: "History of dental anxiety.".into(),
        },
    ]
}

/// The seeded incident collection. Appointment dates are relative to the
/// moment of seeding so the dashboard has upcoming and past entries.
pub fn seed_incidents() -> Vec<Incident> {
    let now = Utc::now();

    let checkup = incident(
        "i1",
        "p1",
        "Annual Check-up & Cleaning",
        "Routine examination and professional cleaning.",
        "Patient reports no issues.",
        now + Duration::days(5),
        IncidentStatus::Scheduled,
    );

    let mut toothache = incident(
        "i2",
        "p1",
        "Toothache Investigation",
        "Pain in upper right molar.",
        "Sensitive to cold fluids.",
        at(2024, 5, 15, 14, 0),
        IncidentStatus::Completed,
    );
    toothache.cost = Some(120.0);
    toothache.treatment = Some("X-ray taken, filling required.".into());
    toothache.next_appointment_date = Some(now + Duration::days(20));

    let wisdom = incident(
        "i3",
        "p2",
        "Wisdom Tooth Consultation",
        "Discomfort from lower wisdom tooth.",
        "Area is swollen.",
        now + Duration::days(12),
        IncidentStatus::Scheduled,
    );

    let mut filling = incident(
        "i4",
        "p3",
        "Broken Filling Repair",
        "Filling on lower left premolar broke off.",
        "Patient is not in pain but has sharp edge.",
        now - Duration::days(2),
        IncidentStatus::Completed,
    );
    filling.cost = Some(250.0);
    filling.treatment = Some("Replaced composite filling.".into());

    let mut whitening = incident(
        "i5",
        "p2",
        "Teeth Whitening",
        "In-office whitening procedure.",
        "Patient happy with results.",
        now - Duration::days(30),
        IncidentStatus::Completed,
    );
    whitening.cost = Some(450.0);
    whitening.treatment = Some("Completed whitening treatment.".into());

    let crown = incident(
        "i6",
        "p3",
        "Crown Fitting Prep",
        "Preparation for a new crown on upper premolar.",
        "Awaiting lab work.",
        now - Duration::days(7),
        IncidentStatus::Pending,
    );

    let mut followup = incident(
        "i7",
        "p1",
        "Follow-up on Filling",
        "Checking sensitivity after new filling.",
        "Patient reports improvement.",
        now - Duration::days(1),
        IncidentStatus::Completed,
    );
    followup.cost = Some(50.0);
    followup.treatment = Some("Minor adjustment to filling.".into());

    vec![checkup, toothache, wisdom, filling, whitening, crown, followup]
}

fn incident(
    id: &str,
    patient_id: &str,
    title: &str,
    description: &str,
    comments: &str,
    appointment_date: DateTime<Utc>,
    status: IncidentStatus,
) -> Incident {
    Incident {
        id: id.into(),
        patient_id: patient_id.into(),
        title: title.into(),
        description: description.into(),
        comments: comments.into(),
        appointment_date,
        status,
        cost: None,
        treatment: None,
        next_appointment_date: None,
        files: Vec::new(),
    }
}

fn day(year: i32, month: u32, dom: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, dom).expect("valid seed date")
}

fn at(year: i32, month: u32, dom: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, dom, hour, minute, 0)
        .single()
        .expect("valid seed timestamp")
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_seed_ids_unique() {
        let users = seed_users();
        let patients = seed_patients();
        let incidents = seed_incidents();

        assert_eq!(users.len(), 3);
        assert_eq!(patients.len(), 3);
        assert_eq!(incidents.len(), 7);

        let patient_ids: HashSet<_> = patients.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(patient_ids.len(), patients.len());

        let incident_ids: HashSet<_> = incidents.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(incident_ids.len(), incidents.len());
    }

    #[test]
    fn test_seed_incidents_reference_seed_patients() {
        let patients = seed_patients();
        for incident in seed_incidents() {
            assert!(patients.iter().any(|p| p.id == incident.patient_id));
        }
    }

    #[test]
    fn test_patient_users_link_to_seed_patients() {
        let patients = seed_patients();
        for user in seed_users() {
            match user.role {
                UserRole::Patient => {
                    let linked = user.patient_id.as_deref().unwrap();
                    assert!(patients.iter().any(|p| p.id == linked));
                }
                UserRole::Admin => assert!(user.patient_id.is_none()),
            }
        }
    }
}
