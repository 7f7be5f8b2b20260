//! Concrete adapter implementations for ports.

pub mod csv_feed_adapter;
pub mod json_snapshot_adapter;
pub mod json_config_adapter;
pub mod text_table_adapter;
