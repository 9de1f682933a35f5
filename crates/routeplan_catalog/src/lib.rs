pub mod catalog_client;
pub mod city;
pub mod error;
pub mod ids;
pub mod page;
pub mod stop;
pub mod stop_catalog;

#[cfg(test)]
pub(crate) mod test_utils;
