pub mod answers;
pub mod catalog;
pub mod corpus;
pub(crate) mod health;
pub mod questions;

pub use health::health_check;
