// Domain layer - Dashboard models with no I/O
pub mod chart;
pub mod filters;
pub mod map;
pub mod panel;
pub mod summary;
