// Common types and utilities shared across the application

pub mod auth;
pub mod entity_ids;
pub mod id;
pub mod pagination;

pub use auth::{Actor, AuthError, Capability, HasAuthContext};
pub use entity_ids::*;
pub use id::Id;
pub use pagination::{
    build_page_info, trim_to_limit, Cursor, PageInfo, PaginationArgs, ValidatedPaginationArgs,
};
