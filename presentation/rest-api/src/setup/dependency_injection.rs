use std::sync::Arc;

use logger::TracingLogger;
use openai::client::OpenAIClient;
use openai::summarizer::SummarizerOpenAI;
use persistence::question::repository::QuestionRepositoryInMemory;

use business::application::question::count_opinions::CountOpinionsUseCaseImpl;
use business::application::question::create::CreateQuestionUseCaseImpl;
use business::application::question::get_by_id::GetQuestionUseCaseImpl;
use business::application::question::submit_opinion::SubmitOpinionUseCaseImpl;
use business::application::summary::summarize::SummarizeOpinionsUseCaseImpl;
use business::domain::logger::Logger;
use business::domain::question::repository::QuestionRepository;
use business::domain::summary::services::SummarizerService;

use crate::config::openai_config::OpenAIConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub question_api: crate::api::question::routes::QuestionApi,
    pub summary_api: crate::api::summary::routes::SummaryApi,
    pub page_api: crate::api::pages::routes::PageApi,
}

impl DependencyContainer {
    pub fn new(openai_config: OpenAIConfig) -> Self {
        let repository = Arc::new(QuestionRepositoryInMemory::new());

        let openai_client = OpenAIClient::new(openai_config.api_key, openai_config.base_url);
        let summarizer = Arc::new(SummarizerOpenAI::new(openai_client, openai_config.model));

        Self::with_adapters(repository, summarizer, Arc::new(TracingLogger))
    }

    /// Wires use cases and APIs around the given adapters.
    pub fn with_adapters(
        repository: Arc<dyn QuestionRepository>,
        summarizer: Arc<dyn SummarizerService>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        let health_api = crate::api::health::routes::Api::new();

        // Question use cases
        let create_use_case = Arc::new(CreateQuestionUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let get_use_case = Arc::new(GetQuestionUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let submit_opinion_use_case = Arc::new(SubmitOpinionUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let count_opinions_use_case = Arc::new(CountOpinionsUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });

        // Summary use cases
        let summarize_use_case = Arc::new(SummarizeOpinionsUseCaseImpl {
            repository,
            summarizer,
            logger,
        });

        let question_api = crate::api::question::routes::QuestionApi::new(
            create_use_case,
            get_use_case.clone(),
            submit_opinion_use_case,
            count_opinions_use_case,
        );

        let summary_api = crate::api::summary::routes::SummaryApi::new(summarize_use_case);

        let page_api = crate::api::pages::routes::PageApi::new(get_use_case);

        Self {
            health_api,
            question_api,
            summary_api,
            page_api,
        }
    }
}
