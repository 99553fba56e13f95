//! egui widgets for the dashboard: side panel, charts, and the raw table.

pub mod charts;
pub mod panels;
pub mod table;
