mod answer;
mod article;
mod common;
mod corpus;

pub use answer::*;
pub use article::*;
pub use common::*;
pub use corpus::*;
