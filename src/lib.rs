pub mod apis;
pub mod arguments;
pub mod batch;
pub mod cache;
pub mod errors;
pub mod logger;
pub mod paths;
