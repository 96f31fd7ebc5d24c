pub mod exports;
pub mod import;
pub mod skin_processor;
