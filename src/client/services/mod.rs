pub mod api_service;
pub mod repository;
