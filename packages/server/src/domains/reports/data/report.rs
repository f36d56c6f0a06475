//! GraphQL data types for reports.

use serde::{Deserialize, Serialize};

use crate::domains::reports::models::Report;

/// GraphQL-friendly representation of a report
#[derive(Debug, Clone, Serialize, Deserialize, juniper::GraphQLObject)]
#[graphql(description = "A user report")]
pub struct ReportData {
    /// Unique identifier
    pub id: String,

    /// Who filed the report
    pub reporter_id: String,

    /// Who the report is about
    pub reported_user_id: String,

    /// Username of the reported user at submission time
    pub reported_username: String,

    /// Free-form reason
    pub reason: String,

    /// When the report was filed (ISO 8601)
    pub created_at: String,
}

impl From<Report> for ReportData {
    fn from(r: Report) -> Self {
        Self {
            id: r.id.to_string(),
            reporter_id: r.reporter_id.to_string(),
            reported_user_id: r.reported_user_id.to_string(),
            reported_username: r.reported_username,
            reason: r.reason,
            created_at: r.created_at.to_rfc3339(),
        }
    }
}
