//! Demo records the dashboard starts with.

use super::records::{
    Activity, ActivityKind, ActivityStatus, Contact, Deal, DealStage, Lead, LeadStatus,
};

fn some(s: &str) -> Option<String> {
    Some(s.to_string())
}

pub(super) fn contacts() -> Vec<Contact> {
    vec![
        Contact {
            id: "1".to_string(),
            first_name: "Charles".to_string(),
            last_name: "Aliyansis".to_string(),
            email: some("charles@demo.com"),
            phone: some("+92 300 1234567"),
            company: some("Demo Company"),
            position: some("Manager"),
            notes: some("VIP client"),
        },
        Contact {
            id: "2".to_string(),
            first_name: "Sarah".to_string(),
            last_name: "Khan".to_string(),
            email: some("sarah@demo.com"),
            phone: some("+92 333 9876543"),
            company: some("Tech Solutions"),
            position: some("Developer"),
            notes: some("Met at expo"),
        },
    ]
}

pub(super) fn leads() -> Vec<Lead> {
    vec![Lead {
        id: "101".to_string(),
        title: "Website Redesign Project".to_string(),
        description: some("Client interested in full website redesign."),
        status: LeadStatus::Contacted,
        source: some("Referral"),
        value: 2000.0,
        contact_id: some("1"),
    }]
}

pub(super) fn deals() -> Vec<Deal> {
    vec![
        Deal {
            id: "d1".to_string(),
            title: "Website Redesign".to_string(),
            description: some("Client wants a full redesign"),
            stage: DealStage::Proposal,
            value: 5000.0,
            probability: 70,
            expected_close_date: some("2025-10-15"),
            contact_id: some("1"),
        },
        Deal {
            id: "d2".to_string(),
            title: "SEO Project".to_string(),
            description: some("Ongoing SEO work"),
            stage: DealStage::Negotiation,
            value: 2000.0,
            probability: 60,
            expected_close_date: some("2025-11-01"),
            contact_id: some("2"),
        },
    ]
}

pub(super) fn activities() -> Vec<Activity> {
    vec![
        Activity {
            id: "a1".to_string(),
            kind: ActivityKind::Call,
            subject: "Follow-up call with client".to_string(),
            description: some("Discuss project scope"),
            status: ActivityStatus::Pending,
            due_date: some("2025-10-01T10:00:00Z"),
            contact_id: some("1"),
            lead_id: some("101"),
            deal_id: None,
        },
        Activity {
            id: "a2".to_string(),
            kind: ActivityKind::Task,
            subject: "Prepare proposal".to_string(),
            description: some("Draft proposal for SEO project"),
            status: ActivityStatus::Completed,
            due_date: None,
            contact_id: some("2"),
            lead_id: None,
            deal_id: some("d2"),
        },
    ]
}
