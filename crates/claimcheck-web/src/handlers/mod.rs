//! HTTP handlers for all web routes.

pub mod history;
pub mod result_card;
pub mod system;
pub mod verify;
