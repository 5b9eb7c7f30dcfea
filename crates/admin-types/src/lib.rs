//! Admin DTO Fragment
//!
//! Record shapes exchanged with the backend admin API. The admin panel
//! itself lives in a separate repository; only the types are shared here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AdminRole {
    Moderator,
    Support,
    Superadmin,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: AdminRole,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DisputeStatus {
    Open,
    UnderReview,
    Resolved,
    Dismissed,
}

impl DisputeStatus {
    /// Label shown in admin list views
    pub fn display_name(&self) -> &'static str {
        match self {
            DisputeStatus::Open => "Open",
            DisputeStatus::UnderReview => "Under review",
            DisputeStatus::Resolved => "Resolved",
            DisputeStatus::Dismissed => "Dismissed",
        }
    }
}

/// What a content report or dispute points at
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "id")]
pub enum ReportTarget {
    Post(String),
    Comment(String),
    Recipe(String),
    Review(String),
    User(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dispute {
    pub id: String,
    pub reporter_id: String,
    pub target: ReportTarget,
    pub reason: String,
    pub status: DisputeStatus,
    pub assigned_to: Option<String>,
    pub resolution_note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentReport {
    pub id: String,
    pub target: ReportTarget,
    pub reason: String,
    pub reporter_id: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisputeListResponse {
    pub disputes: Vec<Dispute>,
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispute_decodes_from_api_shape() {
        let raw = r#"{
            "id": "d-17",
            "reporterId": "u-3",
            "target": {"kind": "comment", "id": "c-99"},
            "reason": "spam",
            "status": "underReview",
            "assignedTo": null,
            "resolutionNote": null,
            "createdAt": "2026-01-05T10:00:00Z",
            "updatedAt": "2026-01-06T09:30:00Z"
        }"#;
        let dispute: Dispute = serde_json::from_str(raw).unwrap();
        assert_eq!(dispute.status, DisputeStatus::UnderReview);
        assert_eq!(dispute.target, ReportTarget::Comment("c-99".to_string()));
        assert!(dispute.assigned_to.is_none());
    }

    #[test]
    fn test_status_display_names() {
        assert_eq!(DisputeStatus::Open.display_name(), "Open");
        assert_eq!(DisputeStatus::UnderReview.display_name(), "Under review");
    }
}
