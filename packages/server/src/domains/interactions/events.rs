//! Domain events published on the stream hub after a ledger transaction
//! commits. Clients subscribe per user (`ledger:<user_id>`) or per chat
//! (`chat:<pair_key>`).

use serde::Serialize;
use serde_json::Value;

use crate::common::UserId;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum InteractionEvent {
    #[serde(rename_all = "camelCase")]
    RequestReceived { from: UserId, to: UserId },

    #[serde(rename_all = "camelCase")]
    RequestDeclined { by: UserId, requester: UserId },

    #[serde(rename_all = "camelCase")]
    Matched { users: [UserId; 2], chat_id: String },

    #[serde(rename_all = "camelCase")]
    Blocked { by: UserId, target: UserId },

    #[serde(rename_all = "camelCase")]
    Unblocked { by: UserId, target: UserId },
}

impl InteractionEvent {
    /// Stream topic for a user's personal ledger feed.
    pub fn ledger_topic(user_id: UserId) -> String {
        format!("ledger:{}", user_id)
    }

    /// The topics this event should be published to. Request and match
    /// activity fans out to the affected users; block state changes stay
    /// on the blocker's own feed.
    pub fn topics(&self) -> Vec<String> {
        match self {
            InteractionEvent::RequestReceived { from, to } => vec![
                Self::ledger_topic(*from),
                Self::ledger_topic(*to),
            ],
            InteractionEvent::RequestDeclined { by, .. } => vec![Self::ledger_topic(*by)],
            InteractionEvent::Matched { users, .. } => vec![
                Self::ledger_topic(users[0]),
                Self::ledger_topic(users[1]),
            ],
            InteractionEvent::Blocked { by, .. } | InteractionEvent::Unblocked { by, .. } => {
                vec![Self::ledger_topic(*by)]
            }
        }
    }

    pub fn to_payload(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matched_event_fans_out_to_both_users() {
        let a = UserId::new();
        let b = UserId::new();
        let event = InteractionEvent::Matched {
            users: [a, b],
            chat_id: "x_y".into(),
        };
        let topics = event.topics();
        assert!(topics.contains(&format!("ledger:{}", a)));
        assert!(topics.contains(&format!("ledger:{}", b)));
    }

    #[test]
    fn blocked_event_stays_on_the_blockers_feed() {
        let a = UserId::new();
        let b = UserId::new();
        let event = InteractionEvent::Blocked { by: a, target: b };
        assert_eq!(event.topics(), vec![format!("ledger:{}", a)]);
    }

    #[test]
    fn payload_is_tagged_json() {
        let event = InteractionEvent::RequestReceived {
            from: UserId::new(),
            to: UserId::new(),
        };
        let payload = event.to_payload();
        assert_eq!(payload["type"], "requestReceived");
        assert!(payload["from"].is_string());
    }
}
