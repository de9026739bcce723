//! Admin dashboard aggregations.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Incident, IncidentStatus, Patient};

/// Headline numbers for the admin dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardKpis {
    pub total_patients: usize,
    /// Scheduled incidents with an appointment strictly in the future
    pub upcoming_appointments: usize,
    /// Sum of cost over completed incidents that carry one
    pub total_revenue: f64,
    pub completed_treatments: usize,
    pub pending_treatments: usize,
}

/// Revenue bucket for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRevenue {
    /// "%b %Y" label, e.g. "May 2024"
    pub month: String,
    pub revenue: f64,
}

/// Leaderboard row: a patient with their all-time incident count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientVisits {
    pub patient: Patient,
    pub incident_count: usize,
}

/// Compute the dashboard KPIs over the given snapshot.
pub fn dashboard_kpis(
    patients: &[Patient],
    incidents: &[Incident],
    now: DateTime<Utc>,
) -> DashboardKpis {
    let total_revenue = incidents
        .iter()
        .filter(|i| i.status == IncidentStatus::Completed)
        .filter_map(|i| i.cost)
        .sum();

    DashboardKpis {
        total_patients: patients.len(),
        upcoming_appointments: incidents.iter().filter(|i| i.is_upcoming(now)).count(),
        total_revenue,
        completed_treatments: incidents
            .iter()
            .filter(|i| i.status == IncidentStatus::Completed)
            .count(),
        pending_treatments: incidents
            .iter()
            .filter(|i| i.status == IncidentStatus::Pending)
            .count(),
    }
}

/// The next `limit` upcoming appointments, soonest first.
pub fn next_appointments(
    incidents: &[Incident],
    now: DateTime<Utc>,
    limit: usize,
) -> Vec<&Incident> {
    let mut upcoming: Vec<&Incident> = incidents.iter().filter(|i| i.is_upcoming(now)).collect();
    upcoming.sort_by_key(|i| i.appointment_date);
    upcoming.truncate(limit);
    upcoming
}

/// Completed revenue grouped by the calendar month of the appointment.
/// Buckets appear in first-encounter order.
pub fn revenue_by_month(incidents: &[Incident]) -> Vec<MonthlyRevenue> {
    let mut buckets: Vec<MonthlyRevenue> = Vec::new();
    for incident in incidents {
        if incident.status != IncidentStatus::Completed {
            continue;
        }
        if let Some(cost) = incident.cost {
            let month = incident.appointment_date.format("%b %Y").to_string();
            match buckets.iter_mut().find(|b| b.month == month) {
                Some(bucket) => bucket.revenue += cost,
                None => buckets.push(MonthlyRevenue {
                    month,
                    revenue: cost,
                }),
            }
        }
    }
    buckets
}

/// Top `limit` patients by all-time incident count, any status. The sort
/// is stable, so ties keep collection order.
pub fn top_patients_by_visits(
    patients: &[Patient],
    incidents: &[Incident],
    limit: usize,
) -> Vec<PatientVisits> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for incident in incidents {
        *counts.entry(incident.patient_id.as_str()).or_insert(0) += 1;
    }

    let mut rows: Vec<PatientVisits> = patients
        .iter()
        .map(|p| PatientVisits {
            incident_count: counts.get(p.id.as_str()).copied().unwrap_or(0),
            patient: p.clone(),
        })
        .collect();
    rows.sort_by(|a, b| b.incident_count.cmp(&a.incident_count));
    rows.truncate(limit);
    rows
}
