//! Run outcome rendering.
//!
//! Once the checks finish, the collected [`RunReport`](crate::checks::RunReport)
//! is rendered in one of two formats: the terminal presentation students see
//! (diagnostic blocks plus a verdict banner), or JSON for tooling.

pub mod human;
pub mod json;
