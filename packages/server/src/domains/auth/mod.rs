//! Auth domain - verification of externally-issued identity tokens.
//!
//! Authentication itself (login, OTP, password reset) lives in the identity
//! provider; this service trusts the verified token's user id as the actor
//! identity for every operation and performs no further authentication.

pub mod jwt;

pub use jwt::{Claims, JwtService};
