// Mock implementations for testing
//
// Provides mock services that can be injected into ServerDeps for tests.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::{BaseNotifier, ReportNotification};

// =============================================================================
// Mock Notifier
// =============================================================================

/// Records every report notification instead of delivering it.
pub struct MockNotifier {
    notifications: Arc<Mutex<Vec<ReportNotification>>>,
    fail_next: Arc<Mutex<bool>>,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self {
            notifications: Arc::new(Mutex::new(Vec::new())),
            fail_next: Arc::new(Mutex::new(false)),
        }
    }

    /// Make the next notify call return an error (delivery failure).
    pub fn fail_next(&self) {
        *self.fail_next.lock().unwrap() = true;
    }

    /// Notifications captured so far.
    pub fn captured(&self) -> Vec<ReportNotification> {
        self.notifications.lock().unwrap().clone()
    }
}

impl Default for MockNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseNotifier for MockNotifier {
    async fn notify_report(&self, notification: &ReportNotification) -> Result<()> {
        let mut fail = self.fail_next.lock().unwrap();
        if *fail {
            *fail = false;
            return Err(anyhow::anyhow!("simulated notifier outage"));
        }
        self.notifications.lock().unwrap().push(notification.clone());
        Ok(())
    }
}
