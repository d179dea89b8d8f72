pub mod auth;
pub mod books;
pub mod catalog;
pub mod core;
pub mod metadata;
pub mod utils;
#[cfg(test)]
pub(crate) mod test_utils;
