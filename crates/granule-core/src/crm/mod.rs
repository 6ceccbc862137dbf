//! Contacts, leads, deals and activities.
//!
//! Records live in memory only. A [`CrmBook`] starts from seed data and is
//! edited through [`RecordBook`] add/update/remove calls.

mod records;
mod seed;
mod summary;

pub use records::{
    Activity, ActivityKind, ActivityStatus, Contact, Deal, DealStage, Lead, LeadStatus,
};
pub use summary::{DashboardSummary, StageTotal, StatusCount};

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error, PartialEq)]
pub enum CrmError {
    #[error("{kind} is missing {field}")]
    MissingField {
        kind: &'static str,
        field: &'static str,
    },
    #[error("{kind} has invalid amount {value}")]
    InvalidAmount { kind: &'static str, value: f64 },
    #[error("Probability {0} is over 100")]
    Probability(u8),
    #[error("No {kind} with id {id}")]
    NotFound { kind: &'static str, id: String },
}

/// A record kept in a [`RecordBook`].
pub trait Record: Clone {
    /// Name used in error messages.
    const KIND: &'static str;

    fn id(&self) -> &str;

    fn set_id(&mut self, id: String);

    /// Check required fields before the record is stored.
    fn validate(&self) -> Result<(), CrmError>;
}

/// Ordered list of records, newest first.
#[derive(Debug, Clone)]
pub struct RecordBook<T: Record> {
    records: Vec<T>,
}

impl<T: Record> Default for RecordBook<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<T: Record> RecordBook<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Book holding `records` in the given order, unvalidated.
    pub fn from_records(records: Vec<T>) -> Self {
        Self { records }
    }

    /// Validate and add a record at the front.
    ///
    /// Records without an id get a fresh one. Returns the stored id.
    pub fn insert(&mut self, mut record: T) -> Result<String, CrmError> {
        record.validate()?;
        if record.id().is_empty() {
            record.set_id(Uuid::new_v4().to_string());
        }
        let id = record.id().to_string();
        log::debug!("Added {} {}", T::KIND, id);
        self.records.insert(0, record);
        Ok(id)
    }

    /// Edit a record in place. The edit is discarded if it fails validation.
    ///
    /// The id can't be changed through an update.
    pub fn update(&mut self, id: &str, edit: impl FnOnce(&mut T)) -> Result<&T, CrmError> {
        let index = self.position(id)?;
        let mut edited = self.records[index].clone();
        edit(&mut edited);
        edited.set_id(id.to_string());
        edited.validate()?;
        self.records[index] = edited;
        Ok(&self.records[index])
    }

    pub fn remove(&mut self, id: &str) -> Result<T, CrmError> {
        let index = self.position(id)?;
        log::debug!("Removed {} {}", T::KIND, id);
        Ok(self.records.remove(index))
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position(&self, id: &str) -> Result<usize, CrmError> {
        self.records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| CrmError::NotFound {
                kind: T::KIND,
                id: id.to_string(),
            })
    }
}

/// All record books behind the dashboard pages.
#[derive(Debug, Clone, Default)]
pub struct CrmBook {
    pub contacts: RecordBook<Contact>,
    pub leads: RecordBook<Lead>,
    pub deals: RecordBook<Deal>,
    pub activities: RecordBook<Activity>,
}

impl CrmBook {
    /// Empty books.
    pub fn new() -> Self {
        Self::default()
    }

    /// Books pre-filled with demo data.
    pub fn seeded() -> Self {
        Self {
            contacts: RecordBook::from_records(seed::contacts()),
            leads: RecordBook::from_records(seed::leads()),
            deals: RecordBook::from_records(seed::deals()),
            activities: RecordBook::from_records(seed::activities()),
        }
    }

    /// Dashboard figures for the current records.
    pub fn summary(&self) -> DashboardSummary {
        DashboardSummary::compute(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_assigns_id_and_prepends() {
        let mut book = RecordBook::new();
        let first = book.insert(Contact::new("Ali", "Khan")).unwrap();
        let second = book.insert(Contact::new("Sara", "Ahmed")).unwrap();

        assert_ne!(first, second);
        let order: Vec<_> = book.iter().map(|c| c.id.clone()).collect();
        assert_eq!(order, vec![second, first]);
    }

    #[test]
    fn test_insert_keeps_given_id() {
        let mut book = RecordBook::new();
        let mut lead = Lead::new("SEO Campaign");
        lead.id = "11".to_string();
        assert_eq!(book.insert(lead).unwrap(), "11");
        assert!(book.get("11").is_some());
    }

    #[test]
    fn test_insert_rejects_invalid() {
        let mut book = RecordBook::new();
        assert!(book.insert(Deal::new("")).is_err());
        assert!(book.is_empty());
    }

    #[test]
    fn test_update_applies_edit() {
        let mut book = RecordBook::new();
        let id = book.insert(Deal::new("CRM Deal")).unwrap();

        let deal = book
            .update(&id, |d| {
                d.stage = DealStage::Negotiation;
                d.value = 1200.0;
            })
            .unwrap();
        assert_eq!(deal.stage, DealStage::Negotiation);
        assert_eq!(book.get(&id).map(|d| d.value), Some(1200.0));
    }

    #[test]
    fn test_update_rolls_back_invalid_edit() {
        let mut book = RecordBook::new();
        let id = book.insert(Deal::new("CRM Deal")).unwrap();

        let result = book.update(&id, |d| d.probability = 150);
        assert_eq!(result.unwrap_err(), CrmError::Probability(150));
        assert_eq!(book.get(&id).map(|d| d.probability), Some(50));
    }

    #[test]
    fn test_update_cannot_change_id() {
        let mut book = RecordBook::new();
        let id = book.insert(Contact::new("Ali", "Khan")).unwrap();
        book.update(&id, |c| c.id = "other".to_string()).unwrap();
        assert!(book.get(&id).is_some());
        assert!(book.get("other").is_none());
    }

    #[test]
    fn test_remove_missing() {
        let mut book: RecordBook<Activity> = RecordBook::new();
        assert_eq!(
            book.remove("nope").unwrap_err(),
            CrmError::NotFound {
                kind: "activity",
                id: "nope".to_string()
            }
        );
    }

    #[test]
    fn test_seeded_books() {
        let crm = CrmBook::seeded();
        assert_eq!(crm.contacts.len(), 2);
        assert_eq!(crm.leads.len(), 1);
        assert_eq!(crm.deals.len(), 2);
        assert_eq!(crm.activities.len(), 2);
        assert!(crm.contacts.iter().all(|c| c.validate().is_ok()));
        assert!(crm.deals.iter().all(|d| d.validate().is_ok()));
    }

    #[test]
    fn test_toggle_seeded_activity() {
        let mut crm = CrmBook::seeded();
        assert_eq!(crm.summary().pending_activities, 1);

        crm.activities
            .update("a1", |activity| {
                activity.toggle_status();
            })
            .unwrap();
        assert_eq!(
            crm.activities.get("a1").map(|a| a.status),
            Some(ActivityStatus::Completed)
        );
        assert_eq!(crm.summary().pending_activities, 0);
    }
}
