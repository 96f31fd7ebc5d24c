pub mod zip_store;
