//! # catpoint-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `SecurityRepository`: alarm status, arming status, and the sensor set
//!   - `ImageClassifier`: black-box "does this image contain a cat?" check
//!   - `StatusListener`: observers notified of status changes (control panels, logs)
//! - Define the **driving/inbound** use-case: `SecurityService`, the single
//!   authority for alarm-status transitions
//! - Provide **in-process infrastructure** (listener registry) that doesn't need IO
//!
//! ## Dependency rule
//! Depends on `catpoint-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod config;
pub mod listener_registry;
pub mod ports;
pub mod services;
