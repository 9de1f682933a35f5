pub mod algorithm;
pub mod optimization_client;
pub mod request;
pub mod response;
pub mod schema;
