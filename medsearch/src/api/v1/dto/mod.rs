//! v1 API Data Transfer Objects.
//!
//! Wire format for the v1 REST API, kept separate from the domain models in
//! `src/models/`. Field names are camelCase on the wire.

pub mod answers;
pub mod corpus;

pub use answers::*;
pub use corpus::*;
