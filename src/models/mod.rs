//! Data models for the homepage content backend.
//!
//! These models match the frontend TypeScript interfaces so the admin dashboard
//! and the public site can consume them unchanged.

mod envelope;
mod requests;
mod section;

pub use envelope::*;
pub use requests::*;
pub use section::*;
