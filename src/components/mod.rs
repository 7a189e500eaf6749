//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod chart;
pub mod insight_card;
pub mod loading;

pub use chart::TimeSeriesChart;
pub use insight_card::InsightCard;
