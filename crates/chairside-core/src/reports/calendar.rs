//! Calendar bucketing for scheduled appointments.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{Incident, IncidentStatus};

/// Group scheduled incidents by the calendar day (UTC) of their
/// appointment. Within a day, collection order is preserved; day-detail
/// sorting is [`appointments_on`].
pub fn appointments_by_day(incidents: &[Incident]) -> BTreeMap<NaiveDate, Vec<&Incident>> {
    let mut days: BTreeMap<NaiveDate, Vec<&Incident>> = BTreeMap::new();
    for incident in incidents {
        if incident.status == IncidentStatus::Scheduled {
            days.entry(incident.appointment_date.date_naive())
                .or_default()
                .push(incident);
        }
    }
    days
}

/// Scheduled appointments on one day, earliest time first.
pub fn appointments_on(incidents: &[Incident], dom: NaiveDate) -> Vec<&Incident> {
    let mut on_day: Vec<&Incident> = incidents
        .iter()
        .filter(|i| i.status == IncidentStatus::Scheduled && i.appointment_date.date_naive() == dom)
        .collect();
    on_day.sort_by_key(|i| i.appointment_date);
    on_day
}
