use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::search::SearchClient;
use crate::services::{AnswerService, CorpusService};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub answers: AnswerService,
    pub corpus: CorpusService,
    pub catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(config: Config, client: Arc<dyn SearchClient>, catalog: Catalog) -> Self {
        let target = config.search.target();
        let answers = AnswerService::new(client.clone(), target.clone());
        let corpus = CorpusService::new(client, target);

        Self {
            config: Arc::new(config),
            answers,
            corpus,
            catalog: Arc::new(catalog),
        }
    }
}
