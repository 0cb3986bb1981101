pub mod error;
pub mod invoice;
pub mod user;
