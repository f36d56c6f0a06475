//! Profile query actions
//!
//! Query actions return data directly. Auth checks are done at the GraphQL
//! layer (the viewer id comes from the verified token).

use anyhow::Result;
use tracing::debug;

use crate::common::{build_page_info, trim_to_limit, Cursor, UserId, ValidatedPaginationArgs};
use crate::domains::profiles::data::{ProfileConnection, ProfileData, ProfileEdge};
use crate::domains::profiles::models::Profile;
use crate::kernel::ServerDeps;

/// Get discovery candidates for the viewer with cursor pagination.
///
/// This is a set-difference filter, not a ranking algorithm: everyone the
/// viewer has already interacted with (liked / disliked / blocked / matched)
/// is excluded, along with suspended profiles and the viewer themselves.
pub async fn discovery_candidates(
    viewer: UserId,
    args: &ValidatedPaginationArgs,
    deps: &ServerDeps,
) -> Result<ProfileConnection> {
    debug!(%viewer, "Fetching discovery candidates");

    let rows = Profile::find_discovery_candidates(viewer, args, &deps.db_pool).await?;
    let (mut profiles, has_more) = trim_to_limit(rows, args.limit);

    // Backward pages come out of the query newest-first; restore feed order
    if !args.is_forward() {
        profiles.reverse();
    }

    let edges: Vec<ProfileEdge> = profiles
        .into_iter()
        .map(|profile| {
            let cursor = Cursor::encode_uuid(profile.id.into_uuid());
            ProfileEdge {
                node: ProfileData::from(profile),
                cursor,
            }
        })
        .collect();

    let page_info = build_page_info(
        has_more,
        args,
        edges.first().map(|e| e.cursor.clone()),
        edges.last().map(|e| e.cursor.clone()),
    );

    Ok(ProfileConnection { edges, page_info })
}
