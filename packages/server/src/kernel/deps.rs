//! Server dependencies for domain actions (using traits for testability)
//!
//! This module provides the central dependency container used by all domain
//! actions. External services sit behind trait abstractions so tests can
//! inject mocks.

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use sqlx::PgPool;
use std::sync::Arc;
use tracing::{debug, info};

use crate::common::auth::HasAuthContext;
use crate::kernel::{BaseNotifier, ReportNotification, StreamHub};

// =============================================================================
// WebhookNotifier (implements BaseNotifier)
// =============================================================================

/// Posts report notifications to a moderation webhook.
///
/// When no webhook URL is configured the notifier logs and succeeds; reports
/// are still persisted either way.
pub struct WebhookNotifier {
    client: Client,
    webhook_url: Option<String>,
}

impl WebhookNotifier {
    pub fn new(webhook_url: Option<String>) -> Self {
        Self {
            client: Client::new(),
            webhook_url,
        }
    }
}

#[async_trait]
impl BaseNotifier for WebhookNotifier {
    async fn notify_report(&self, notification: &ReportNotification) -> Result<()> {
        let Some(url) = &self.webhook_url else {
            debug!(
                report_id = %notification.report_id,
                "No report webhook configured, skipping notification"
            );
            return Ok(());
        };

        let payload = serde_json::json!({
            "reportId": notification.report_id,
            "reporterId": notification.reporter_id,
            "reportedUserId": notification.reported_user_id,
            "reason": notification.reason,
            "timestamp": notification.created_at,
        });

        let response = self.client.post(url).json(&payload).send().await?;
        response.error_for_status()?;

        info!(report_id = %notification.report_id, "Report notification delivered");
        Ok(())
    }
}

// =============================================================================
// ServerDeps
// =============================================================================

/// Server dependencies accessible to domain actions
#[derive(Clone)]
pub struct ServerDeps {
    pub db_pool: PgPool,
    /// Fire-and-forget moderation notifier for reports
    pub notifier: Arc<dyn BaseNotifier>,
    /// In-process pub/sub hub for real-time streaming to SSE endpoints
    pub stream_hub: StreamHub,
    /// Identities granted admin capabilities
    pub admin_identifiers: Vec<String>,
}

impl ServerDeps {
    /// Create new ServerDeps with the given dependencies
    pub fn new(
        db_pool: PgPool,
        notifier: Arc<dyn BaseNotifier>,
        admin_identifiers: Vec<String>,
    ) -> Self {
        Self {
            db_pool,
            notifier,
            stream_hub: StreamHub::new(),
            admin_identifiers,
        }
    }
}

impl HasAuthContext for ServerDeps {
    fn admin_identifiers(&self) -> &[String] {
        &self.admin_identifiers
    }
}
