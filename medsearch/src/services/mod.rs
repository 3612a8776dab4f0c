mod answer;
mod corpus;

pub use answer::AnswerService;
pub use corpus::CorpusService;
