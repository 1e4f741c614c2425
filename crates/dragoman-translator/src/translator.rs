//! Core Translator implementation

use crate::config::TranslatorConfig;
use crate::error::TranslatorError;
use crate::parse;
use crate::prompt;
use crate::rate::RateLimiter;
use dragoman_domain::traits::CompletionClient;
use dragoman_domain::{CompletionRequest, Conversation, Message, Role};
use serde_json::Value;
use tracing::{debug, info, warn};

/// Orchestrates a schema-guided conversation with a completion backend.
///
/// The translator owns its transcript and pacing state exclusively; every
/// mutating operation takes `&mut self`, so one logical caller drives one
/// instance at a time and interleaved use of a single instance is not
/// representable.
///
/// Fallible chaining operations return `&mut Self`, so a pipeline reads as
///
/// ```no_run
/// # use dragoman_translator::Translator;
/// # use dragoman_llm::MockClient;
/// # async fn example() -> Result<(), dragoman_translator::TranslatorError> {
/// # let mut translator = Translator::new(MockClient::new("{}"), serde_json::json!({}));
/// translator
///     .translate("Alice is 29 and lives in Berlin")
///     .await?
///     .add_context("she moved to Hamburg last month")
///     .await?
///     .process_result(|result, _| println!("{:?}", result))?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Translator<C: CompletionClient> {
    client: C,
    schema: Value,
    config: TranslatorConfig,
    conversation: Conversation,
    limiter: RateLimiter,
}

impl<C: CompletionClient> Translator<C> {
    /// Create a translator with the default configuration
    pub fn new(client: C, schema: Value) -> Self {
        Self::with_config(client, schema, TranslatorConfig::default())
    }

    /// Create a translator with an explicit configuration
    pub fn with_config(client: C, schema: Value, config: TranslatorConfig) -> Self {
        let limiter = RateLimiter::new(config.max_requests_per_window, config.effective_window());
        Self {
            client,
            schema,
            config,
            conversation: Conversation::new(),
            limiter,
        }
    }

    /// Start a fresh extraction.
    ///
    /// Discards all prior history, seeds the transcript with the schema
    /// instructions and `input`, and runs one request cycle. The input is
    /// forwarded verbatim — empty text included; the provider's judgement
    /// is authoritative.
    pub async fn translate(&mut self, input: &str) -> Result<&mut Self, TranslatorError> {
        let system = prompt::render_system(&self.config.system_template, &self.schema);
        self.conversation.reset(system, input);

        info!(input_len = input.len(), "translation started");
        self.complete_once().await?;
        Ok(self)
    }

    /// Ask the model to revise its last reply using additional free text.
    ///
    /// Fails with [`TranslatorError::NothingToComplete`] when no assistant
    /// reply exists yet; the transcript is left untouched in that case.
    pub async fn add_context(&mut self, input: &str) -> Result<&mut Self, TranslatorError> {
        let template = self.config.context_template.clone();
        self.add_context_with(input, &template).await
    }

    /// [`add_context`](Self::add_context) with an explicit wrap template
    /// for this call only.
    pub async fn add_context_with(
        &mut self,
        input: &str,
        template: &str,
    ) -> Result<&mut Self, TranslatorError> {
        if !self.conversation.has_assistant_turn() {
            return Err(TranslatorError::NothingToComplete);
        }

        self.conversation
            .push(Message::user(prompt::render_context(template, input)));

        info!(input_len = input.len(), "context completion started");
        self.complete_once().await?;
        Ok(self)
    }

    /// Append a worked example as a synthetic user/assistant pair.
    ///
    /// Biases subsequent completions toward the example's structure and
    /// values — intentionally so. No request is issued.
    pub fn add_example(&mut self, input: &str, result: &Value) -> &mut Self {
        let rendered =
            serde_json::to_string_pretty(result).unwrap_or_else(|_| result.to_string());
        self.conversation.push(Message::user(input));
        self.conversation.push(Message::assistant(rendered));
        self
    }

    /// Append an arbitrary message.
    ///
    /// Escape hatch: no conversational coherence is enforced and no request
    /// is issued.
    pub fn add_message(&mut self, role: Role, content: &str) -> &mut Self {
        self.conversation.push(Message::new(role, content));
        self
    }

    /// Parsed JSON of the last assistant reply.
    ///
    /// `Ok(None)` when the transcript is empty or does not end with an
    /// assistant turn. `Err(Parse)` when the reply is not valid JSON — a
    /// nominally successful request cycle can still leave the result
    /// unavailable, and callers must be prepared for that.
    pub fn result(&self) -> Result<Option<Value>, TranslatorError> {
        let Some(content) = self.conversation.last_assistant_content() else {
            return Ok(None);
        };

        let payload = if self.config.lenient_json {
            parse::extract_json(content)
        } else {
            content
        };

        let value = serde_json::from_str(payload)?;
        Ok(Some(value))
    }

    /// Invoke `handler` with the current result, purely for side effects,
    /// and keep chaining.
    pub fn process_result<F>(&mut self, handler: F) -> Result<&mut Self, TranslatorError>
    where
        F: FnOnce(Option<&Value>, &Self),
    {
        let result = self.result()?;
        handler(result.as_ref(), self);
        Ok(self)
    }

    /// The transcript as it would be sent on the next request
    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    /// The configuration this translator was built with
    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    /// The schema handed over at construction
    pub fn schema(&self) -> &Value {
        &self.schema
    }

    /// One request cycle: pace, issue, audit the stop reason, append.
    ///
    /// On success the last message in the transcript is the newly produced
    /// assistant reply.
    async fn complete_once(&mut self) -> Result<(), TranslatorError> {
        self.limiter.acquire().await;

        let request = CompletionRequest::new(
            self.conversation.messages().to_vec(),
            self.config.model.clone(),
            self.config.temperature,
        );
        debug!(
            messages = request.messages.len(),
            model = %request.model,
            "issuing completion request"
        );

        let completion = self
            .client
            .complete(request)
            .await
            .map_err(|e| TranslatorError::Transport(Box::new(e)))?;

        if !completion.stop_reason.is_natural() {
            warn!(
                stop_reason = ?completion.stop_reason,
                "completion ended abnormally; keeping the reply"
            );
        }
        debug!(
            prompt_tokens = completion.usage.prompt_tokens,
            completion_tokens = completion.usage.completion_tokens,
            "reply appended"
        );

        self.conversation.push(completion.message);
        Ok(())
    }
}
