// Application layer - Refresh protocol and the ports it talks through
pub mod dashboard_api;
pub mod dashboard_service;
pub mod panel_refresher;
pub mod surface;
