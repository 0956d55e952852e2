pub mod form_controller;

pub use form_controller::{configure, payment_form, payment_script};
