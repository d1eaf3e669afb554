//! Waymark domain models
//!
//! This module contains the types the verification backend returns.
//! Models are organized by resource type for easy discovery.

mod event;
mod fraud;
mod location;
mod user;
mod verified_location_token;

// Re-export all models for convenient access
pub use event::{Event, EventType};
pub use fraud::Fraud;
pub use location::Location;
pub use user::User;
pub use verified_location_token::VerifiedLocationToken;
