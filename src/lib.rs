//! Data models for the Waymark location verification SDK
//!
//! This crate is the model layer shared by the SDK's verification,
//! tracking, and transport components. The centerpiece is
//! [`VerifiedLocationToken`], the read-only record the verification
//! subsystem produces from a server response. The collaborator models it
//! references ([`User`], [`Event`], and their embedded value types) live
//! here too, along with the [`DictionaryValue`] conversion every model
//! exposes for JSON encoding and logging.
//!
//! No network, cryptographic, or geofencing logic lives in this crate;
//! those concerns belong to the SDK layers that consume these types.

pub mod error;
pub mod models;
pub mod serialize;

pub use error::{Error, Result};
pub use models::{Event, EventType, Fraud, Location, User, VerifiedLocationToken};
pub use serialize::DictionaryValue;
