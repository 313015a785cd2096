pub mod error;
pub mod fields;
pub mod image_store;
pub mod layout;
pub mod repo;
pub mod service;
pub mod surface;
pub mod validation;

#[cfg(test)]
pub(crate) mod test_support;
