//! CRM record types.

use super::{CrmError, Record};
use serde::{Deserialize, Serialize};

/// A person in the address book.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub position: Option<String>,
    pub notes: Option<String>,
}

impl Contact {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            ..Self::default()
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Record for Contact {
    const KIND: &'static str = "contact";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn validate(&self) -> Result<(), CrmError> {
        require(Self::KIND, "first_name", &self.first_name)?;
        require(Self::KIND, "last_name", &self.last_name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadStatus {
    #[default]
    New,
    Contacted,
    Qualified,
    Unqualified,
}

impl LeadStatus {
    pub const ALL: [LeadStatus; 4] = [
        LeadStatus::New,
        LeadStatus::Contacted,
        LeadStatus::Qualified,
        LeadStatus::Unqualified,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LeadStatus::New => "New",
            LeadStatus::Contacted => "Contacted",
            LeadStatus::Qualified => "Qualified",
            LeadStatus::Unqualified => "Unqualified",
        }
    }
}

/// A potential opportunity, not yet in the pipeline.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Lead {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub status: LeadStatus,
    pub source: Option<String>,
    pub value: f64,
    pub contact_id: Option<String>,
}

impl Lead {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

impl Record for Lead {
    const KIND: &'static str = "lead";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn validate(&self) -> Result<(), CrmError> {
        require(Self::KIND, "title", &self.title)?;
        require_amount(Self::KIND, self.value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DealStage {
    #[default]
    Prospecting,
    Qualification,
    Proposal,
    Negotiation,
    ClosedWon,
    ClosedLost,
}

impl DealStage {
    /// Pipeline order.
    pub const ALL: [DealStage; 6] = [
        DealStage::Prospecting,
        DealStage::Qualification,
        DealStage::Proposal,
        DealStage::Negotiation,
        DealStage::ClosedWon,
        DealStage::ClosedLost,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DealStage::Prospecting => "Prospecting",
            DealStage::Qualification => "Qualification",
            DealStage::Proposal => "Proposal",
            DealStage::Negotiation => "Negotiation",
            DealStage::ClosedWon => "Closed Won",
            DealStage::ClosedLost => "Closed Lost",
        }
    }

    pub fn is_closed(self) -> bool {
        matches!(self, DealStage::ClosedWon | DealStage::ClosedLost)
    }
}

/// An opportunity moving through the sales pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub stage: DealStage,
    pub value: f64,
    /// Chance of closing, 0 to 100.
    pub probability: u8,
    /// ISO 8601 date.
    pub expected_close_date: Option<String>,
    pub contact_id: Option<String>,
}

impl Default for Deal {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            description: None,
            stage: DealStage::default(),
            value: 0.0,
            probability: 50,
            expected_close_date: None,
            contact_id: None,
        }
    }
}

impl Deal {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Value scaled by probability.
    pub fn weighted_value(&self) -> f64 {
        self.value * f64::from(self.probability) / 100.0
    }
}

impl Record for Deal {
    const KIND: &'static str = "deal";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn validate(&self) -> Result<(), CrmError> {
        require(Self::KIND, "title", &self.title)?;
        require_amount(Self::KIND, self.value)?;
        if self.probability > 100 {
            return Err(CrmError::Probability(self.probability));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Call,
    Email,
    Meeting,
    #[default]
    Task,
    Note,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityStatus {
    #[default]
    Pending,
    Completed,
    Cancelled,
}

/// A call, meeting or other logged task, linked to any of the other records.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub subject: String,
    pub description: Option<String>,
    pub status: ActivityStatus,
    /// ISO 8601 timestamp.
    pub due_date: Option<String>,
    pub contact_id: Option<String>,
    pub lead_id: Option<String>,
    pub deal_id: Option<String>,
}

impl Activity {
    pub fn new(kind: ActivityKind, subject: impl Into<String>) -> Self {
        Self {
            kind,
            subject: subject.into(),
            ..Self::default()
        }
    }

    /// Flip between completed and pending. Cancelled activities become completed.
    pub fn toggle_status(&mut self) -> ActivityStatus {
        self.status = match self.status {
            ActivityStatus::Completed => ActivityStatus::Pending,
            ActivityStatus::Pending | ActivityStatus::Cancelled => ActivityStatus::Completed,
        };
        self.status
    }
}

impl Record for Activity {
    const KIND: &'static str = "activity";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn validate(&self) -> Result<(), CrmError> {
        require(Self::KIND, "subject", &self.subject)
    }
}

fn require(kind: &'static str, field: &'static str, value: &str) -> Result<(), CrmError> {
    if value.trim().is_empty() {
        return Err(CrmError::MissingField { kind, field });
    }
    Ok(())
}

fn require_amount(kind: &'static str, value: f64) -> Result<(), CrmError> {
    if !value.is_finite() || value < 0.0 {
        return Err(CrmError::InvalidAmount { kind, value });
    }
    Ok(())
}
