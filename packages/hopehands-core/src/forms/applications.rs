//! In-memory registry of submitted membership applications
//!
//! Records live for the lifetime of the page only. Admins approve pending
//! applications from their dashboard.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use super::membership::{ApplicationStatus, MembershipApplication};
use crate::error::FormError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRecord {
    pub reference: Uuid,
    pub application: MembershipApplication,
    pub status: ApplicationStatus,
    pub submitted_at: DateTime<Utc>,
    /// Assigned on approval
    pub member_number: Option<String>,
}

#[derive(Default)]
struct QueueState {
    records: Vec<ApplicationRecord>,
    approved: u32,
}

#[derive(Clone, Default)]
pub struct ApplicationQueue {
    state: Rc<RefCell<QueueState>>,
}

impl ApplicationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a validated application as pending and return its reference
    pub fn submit(&self, application: MembershipApplication) -> Result<Uuid, FormError> {
        application.validate()?;
        let status = ApplicationStatus::None.submit()?;

        let reference = Uuid::new_v4();
        self.state.borrow_mut().records.push(ApplicationRecord {
            reference,
            application,
            status,
            submitted_at: Utc::now(),
            member_number: None,
        });

        info!(%reference, "Membership application submitted");
        Ok(reference)
    }

    /// Approve a pending application and assign its member number
    pub fn approve(&self, reference: Uuid) -> Result<ApplicationRecord, FormError> {
        let mut state = self.state.borrow_mut();
        let sequence = state.approved + 1;

        let record = state
            .records
            .iter_mut()
            .find(|r| r.reference == reference)
            .ok_or(FormError::UnknownApplication)?;

        record.status = record.status.approve()?;
        record.member_number = Some(member_number(Utc::now(), sequence));
        let approved = record.clone();
        state.approved = sequence;

        info!(%reference, "Membership application approved");
        Ok(approved)
    }

    pub fn get(&self, reference: Uuid) -> Option<ApplicationRecord> {
        self.state
            .borrow()
            .records
            .iter()
            .find(|r| r.reference == reference)
            .cloned()
    }

    /// Status for `reference`; unknown references have not applied
    pub fn status(&self, reference: Uuid) -> ApplicationStatus {
        self.get(reference)
            .map(|r| r.status)
            .unwrap_or_default()
    }

    /// Most recent application submitted with `email`
    pub fn latest_for_email(&self, email: &str) -> Option<ApplicationRecord> {
        self.state
            .borrow()
            .records
            .iter()
            .rev()
            .find(|r| r.application.email.eq_ignore_ascii_case(email))
            .cloned()
    }

    pub fn pending(&self) -> Vec<ApplicationRecord> {
        self.state
            .borrow()
            .records
            .iter()
            .filter(|r| r.status == ApplicationStatus::Pending)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.state.borrow().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pretty JSON of every record, for the admin export
    pub fn export_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.state.borrow().records)
    }
}

fn member_number(now: DateTime<Utc>, sequence: u32) -> String {
    format!("HH-{}-{:06}", now.year(), sequence)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn application(email: &str) -> MembershipApplication {
        MembershipApplication {
            full_name: "Jane Doe".into(),
            email: email.into(),
            phone: "555".into(),
            date_of_birth: "1990-01-01".into(),
            address: "1 Main St".into(),
            city: "Springfield".into(),
            state: "IL".into(),
            zip_code: "62701".into(),
            country: "USA".into(),
            reason: "To help".into(),
            photo: Some("me.png".into()),
        }
    }

    #[test]
    fn test_submit_records_pending() {
        let queue = ApplicationQueue::new();
        let reference = queue.submit(application("jane@example.org")).unwrap();

        assert_eq!(queue.status(reference), ApplicationStatus::Pending);
        assert_eq!(queue.pending().len(), 1);
        assert!(queue.get(reference).unwrap().member_number.is_none());
    }

    #[test]
    fn test_invalid_application_rejected() {
        let queue = ApplicationQueue::new();
        let result = queue.submit(MembershipApplication::default());
        assert!(matches!(result, Err(FormError::MissingFields(_))));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_approve_assigns_member_numbers_in_sequence() {
        let queue = ApplicationQueue::new();
        let first = queue.submit(application("a@example.org")).unwrap();
        let second = queue.submit(application("b@example.org")).unwrap();

        let b = queue.approve(second).unwrap();
        let a = queue.approve(first).unwrap();

        assert_eq!(b.status, ApplicationStatus::Approved);
        assert!(b.member_number.unwrap().ends_with("-000001"));
        assert!(a.member_number.unwrap().ends_with("-000002"));
        assert!(queue.pending().is_empty());
    }

    #[test]
    fn test_double_approval_rejected() {
        let queue = ApplicationQueue::new();
        let reference = queue.submit(application("a@example.org")).unwrap();
        queue.approve(reference).unwrap();

        assert!(matches!(
            queue.approve(reference),
            Err(FormError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn test_unknown_reference() {
        let queue = ApplicationQueue::new();
        assert_eq!(queue.status(Uuid::new_v4()), ApplicationStatus::None);
        assert_eq!(
            queue.approve(Uuid::new_v4()),
            Err(FormError::UnknownApplication)
        );
    }

    #[test]
    fn test_latest_for_email() {
        let queue = ApplicationQueue::new();
        queue.submit(application("jane@example.org")).unwrap();
        let latest = queue.submit(application("Jane@Example.org")).unwrap();

        let record = queue.latest_for_email("jane@example.org").unwrap();
        assert_eq!(record.reference, latest);
        assert!(queue.latest_for_email("nobody@example.org").is_none());
    }

    #[test]
    fn test_member_number_format() {
        let now = DateTime::parse_from_rfc3339("2024-03-15T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(member_number(now, 1234), "HH-2024-001234");
    }

    #[test]
    fn test_export_json() {
        let queue = ApplicationQueue::new();
        queue.submit(application("jane@example.org")).unwrap();
        let json = queue.export_json().unwrap();
        assert!(json.contains("\"status\": \"pending\""));
        assert!(json.contains("\"zipCode\": \"62701\""));
    }
}
