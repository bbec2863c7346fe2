pub mod form_service;
pub mod status_poller;
