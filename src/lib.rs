//! Remote action dispatcher for the Join by joaoapps push API.
//!
//! The core is host-agnostic: a launcher (or the bundled CLI) drives it
//! through the four [`dispatcher::HostCallbacks`] entry points, and the
//! component answers with catalog/suggestion items and issues the
//! resulting GET requests against the Join REST endpoints.

pub mod catalog;
pub mod clipboard;
pub mod config;
pub mod dispatcher;
pub mod registry;
pub mod request;
pub mod transport;
