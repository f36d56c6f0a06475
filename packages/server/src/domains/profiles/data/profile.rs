//! GraphQL data types for profiles.

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::common::PageInfo;
use crate::domains::profiles::models::Profile;

/// GraphQL-friendly representation of a user profile
#[derive(Debug, Clone, Serialize, Deserialize, juniper::GraphQLObject)]
#[graphql(description = "A user profile")]
pub struct ProfileData {
    /// Unique identifier
    pub id: String,

    /// Display name
    pub username: String,

    /// Free-form self description
    pub bio: Option<String>,

    /// Age derived from birth year
    pub age: Option<i32>,

    /// URL of the profile photo in the blob store
    pub photo_url: Option<String>,

    /// Whether the profile is suspended (hidden from discovery)
    pub is_suspended: bool,

    /// When the profile was created (ISO 8601)
    pub created_at: String,
}

impl From<Profile> for ProfileData {
    fn from(p: Profile) -> Self {
        let age = p
            .birth_year
            .map(|year| chrono::Utc::now().year() - year);
        Self {
            id: p.id.to_string(),
            username: p.username,
            bio: p.bio,
            age,
            photo_url: p.photo_url,
            is_suspended: p.is_suspended,
            created_at: p.created_at.to_rfc3339(),
        }
    }
}

/// Edge in a profile connection
#[derive(Debug, Clone, juniper::GraphQLObject)]
pub struct ProfileEdge {
    pub node: ProfileData,
    pub cursor: String,
}

/// Relay-style connection of profiles (discovery feed page)
#[derive(Debug, Clone, juniper::GraphQLObject)]
pub struct ProfileConnection {
    pub edges: Vec<ProfileEdge>,
    pub page_info: PageInfo,
}
