pub mod cli;
pub mod session_service;
pub mod tasks;
