pub mod health_controller;

pub use health_controller::{configure, health_check, index, HealthResponse, ServiceInfo};
