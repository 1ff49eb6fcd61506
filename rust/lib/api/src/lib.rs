//! Typed endpoint wrappers.
//!
//! One module per backend feature. Every wrapper is a thin call into
//! the [`oj_client::Gateway`] with a fixed verb and path, a declared
//! input shape, and a declared payload shape; envelope handling and
//! all side effects stay in the gateway. Wrappers never normalize
//! errors: transport failures reject, business failures resolve with
//! `success == false` for the caller to inspect.
//!
//! Identifiers are 64-bit snowflakes transported as strings; wire
//! field names are the backend's PascalCase (`Page`, `NickName`,
//! `_id`, ...).

pub mod announcement;
pub mod comment;
pub mod discussion;
pub mod judge;
pub mod problem;
pub mod solution;
pub mod status;
pub mod tag;
pub mod user;
