//! Figures shown on the dashboard home page.

use super::records::{ActivityStatus, DealStage, LeadStatus};
use super::CrmBook;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusCount {
    pub status: LeadStatus,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageTotal {
    pub stage: DealStage,
    pub count: usize,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub total_contacts: usize,
    pub total_leads: usize,
    pub total_deals: usize,
    pub total_activities: usize,
    /// Sum of all deal values, open or closed.
    pub deal_value: f64,
    pub pending_activities: usize,
    /// One entry per status, in [`LeadStatus::ALL`] order.
    pub leads_by_status: Vec<StatusCount>,
    /// One entry per stage, in pipeline order.
    pub deals_by_stage: Vec<StageTotal>,
    /// Probability-weighted value of deals that are still open.
    pub weighted_pipeline: f64,
}

impl DashboardSummary {
    pub fn compute(crm: &CrmBook) -> Self {
        let leads_by_status = LeadStatus::ALL
            .iter()
            .map(|&status| StatusCount {
                status,
                count: crm.leads.iter().filter(|l| l.status == status).count(),
            })
            .collect();

        let deals_by_stage = DealStage::ALL
            .iter()
            .map(|&stage| {
                let (count, value) = crm
                    .deals
                    .iter()
                    .filter(|d| d.stage == stage)
                    .fold((0, 0.0), |(n, v), d| (n + 1, v + d.value));
                StageTotal { stage, count, value }
            })
            .collect();

        Self {
            total_contacts: crm.contacts.len(),
            total_leads: crm.leads.len(),
            total_deals: crm.deals.len(),
            total_activities: crm.activities.len(),
            deal_value: crm.deals.iter().map(|d| d.value).sum(),
            pending_activities: crm
                .activities
                .iter()
                .filter(|a| a.status == ActivityStatus::Pending)
                .count(),
            leads_by_status,
            deals_by_stage,
            weighted_pipeline: crm
                .deals
                .iter()
                .filter(|d| !d.stage.is_closed())
                .map(|d| d.weighted_value())
                .sum(),
        }
    }
}
