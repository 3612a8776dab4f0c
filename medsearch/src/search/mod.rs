mod client;
mod discovery;
pub mod normalize;
pub mod raw;

#[cfg(test)]
pub(crate) mod fake;

pub use client::{
    EngineTarget, ListOptions, SearchClient, SearchOptions, MAX_SNIPPET_COUNT, PAGE_SIZE,
    SUMMARY_RESULT_COUNT,
};
pub use discovery::DiscoveryEngineClient;
