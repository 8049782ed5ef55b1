//! # catpoint-domain
//!
//! Pure domain model for the catpoint home-security simulator.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Sensors** (named door/window/motion detectors with an active flag)
//! - Define **Statuses** (arming status chosen by the user, alarm status derived by the service)
//! - Define **Camera images** handed to the image classifier
//! - Contain all invariant enforcement on these values
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod image;
pub mod sensor;
pub mod status;
