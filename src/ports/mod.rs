//! Port traits for the external collaborators.

pub mod connector_port;
pub mod snapshot_port;
pub mod presentation_port;
