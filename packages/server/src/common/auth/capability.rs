use crate::common::entity_ids::UserId;

/// Capabilities in the interaction ledger.
///
/// Each `UserInteractions` record is owned by its subject user, but two
/// narrow cross-account writes exist: liking someone appends the actor to
/// the target's `requests` set, and matching appends to the counterpart's
/// `matches` set. Those are modeled here as explicit field-scoped append
/// grants rather than ambient write access: the only value an actor may
/// append to someone else's record is their own id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Append `actor` to `counterpart.requests` (the like side effect)
    AppendRequest { counterpart: UserId },

    /// Append `actor` to `counterpart.matches` (mutual match / acceptance)
    AppendMatch { counterpart: UserId },

    /// Suspend or reinstate a profile
    SuspendProfiles,

    /// Read submitted reports
    ManageReports,
}

impl Capability {
    /// Check if this capability requires admin access
    pub fn requires_admin(&self) -> bool {
        matches!(self, Capability::SuspendProfiles | Capability::ManageReports)
    }
}
