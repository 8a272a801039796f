//! Conversation controller.
//!
//! A [`Conversation`] is an explicit handle binding one user and one study
//! mode to a live session. Exchange protocol, in order: validate input,
//! build the outbound context, call the provider, and only then persist the
//! user/assistant pair. A provider failure or timeout therefore leaves zero
//! new rows and the in-memory history untouched.
//!
//! Two handles for the same session must not be driven concurrently; the
//! store provides no conflict detection between writers of one transcript.

use std::time::Duration;

use estudia_core::entities::Session;
use estudia_core::enums::{MessageRole, StudyMode};
use estudia_db::service::EstudiaService;

use crate::error::ChatError;
use crate::prompts;
use crate::provider::{ChatTurn, ModelProvider};

/// Shown to the user whenever the provider fails or times out.
pub const PROVIDER_FAILURE_NOTICE: &str =
    "Lo siento, ocurrió un error al procesar tu mensaje. Por favor, intenta de nuevo.";

/// Provider calls are bounded; a hung provider reads as a failed one.
const PROVIDER_TIMEOUT: Duration = Duration::from_secs(30);

/// Outcome of one exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// The assistant replied; both turns are persisted.
    Reply(String),
    /// The provider failed or timed out. Nothing was persisted; the notice
    /// is localized and safe to show verbatim.
    Unavailable { notice: String },
}

/// A live, appendable conversation for one (user, mode) pair.
pub struct Conversation<'a> {
    store: &'a EstudiaService,
    provider: &'a dyn ModelProvider,
    session: Session,
    history: Vec<(MessageRole, String)>,
    timeout: Duration,
}

impl<'a> Conversation<'a> {
    /// Bind to the latest session for `(user_id, mode)`, hydrating prior
    /// messages into memory. Creates the session if the user has none in
    /// that mode, so a freshly bound handle is always ready to send.
    ///
    /// # Errors
    ///
    /// Returns `ChatError::Database` if the lookup or hydration fails.
    pub async fn bind(
        store: &'a EstudiaService,
        provider: &'a dyn ModelProvider,
        user_id: &str,
        mode: StudyMode,
    ) -> Result<Conversation<'a>, ChatError> {
        let session = store.latest_session(user_id, Some(mode)).await?;
        let history = store
            .list_messages(&session.id)
            .await?
            .into_iter()
            .map(|m| (m.role, m.content))
            .collect();

        Ok(Self {
            store,
            provider,
            session,
            history,
            timeout: PROVIDER_TIMEOUT,
        })
    }

    /// Override the provider timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The bound session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// The bound mode.
    #[must_use]
    pub const fn mode(&self) -> StudyMode {
        self.session.mode
    }

    /// Hydrated conversation history, oldest first.
    #[must_use]
    pub fn history(&self) -> &[(MessageRole, String)] {
        &self.history
    }

    /// Detach from the current session and start a fresh one in the same
    /// mode. The previous session is never mutated.
    ///
    /// # Errors
    ///
    /// Returns `ChatError::Database` if the session insert fails.
    pub async fn start_new(&mut self, name: Option<&str>) -> Result<&Session, ChatError> {
        let session = self
            .store
            .create_session(&self.session.user_id, name, self.session.mode)
            .await?;
        self.session = session;
        self.history.clear();
        Ok(&self.session)
    }

    /// Run one exchange: context out, completion in, then persist the pair.
    ///
    /// On provider failure or timeout, returns [`SendOutcome::Unavailable`]
    /// with nothing persisted and history unchanged.
    ///
    /// # Errors
    ///
    /// Returns `ChatError::EmptyMessage` for empty or whitespace-only input
    /// (the provider is not invoked), or `ChatError::Database` if persisting
    /// a successful exchange fails.
    pub async fn send(&mut self, text: &str) -> Result<SendOutcome, ChatError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        // Preamble, then hydrated history, then the new user turn.
        let mut context = Vec::with_capacity(self.history.len() + 2);
        context.push(ChatTurn::system(prompts::preamble(self.session.mode)));
        context.extend(self.history.iter().map(|(role, content)| match role {
            MessageRole::User => ChatTurn::user(content.clone()),
            MessageRole::Assistant => ChatTurn::assistant(content.clone()),
        }));
        context.push(ChatTurn::user(text));

        let reply = match tokio::time::timeout(self.timeout, self.provider.complete(&context)).await
        {
            Ok(Ok(reply)) => reply,
            Ok(Err(err)) => {
                tracing::warn!("provider '{}' failed: {err}", self.provider.name());
                return Ok(SendOutcome::Unavailable {
                    notice: PROVIDER_FAILURE_NOTICE.to_string(),
                });
            }
            Err(_) => {
                tracing::warn!(
                    "provider '{}' timed out after {:?}",
                    self.provider.name(),
                    self.timeout
                );
                return Ok(SendOutcome::Unavailable {
                    notice: PROVIDER_FAILURE_NOTICE.to_string(),
                });
            }
        };

        // Provider succeeded: persist user turn, then assistant turn.
        self.store
            .append_message(&self.session.id, MessageRole::User, text)
            .await?;
        let assistant = self
            .store
            .append_message(&self.session.id, MessageRole::Assistant, &reply)
            .await?;
        self.session.last_used_at = assistant.timestamp;

        self.history.push((MessageRole::User, text.to_string()));
        self.history.push((MessageRole::Assistant, reply.clone()));

        Ok(SendOutcome::Reply(reply))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{ProviderError, TurnRole};
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    enum Behavior {
        Echo,
        Fail,
        Hang,
    }

    struct StubProvider {
        behavior: Behavior,
        calls: AtomicUsize,
        seen: Mutex<Vec<ChatTurn>>,
    }

    impl StubProvider {
        fn new(behavior: Behavior) -> Self {
            Self {
                behavior,
                calls: AtomicUsize::new(0),
                seen: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ModelProvider for StubProvider {
        fn name(&self) -> &str {
            "stub"
        }

        async fn complete(&self, turns: &[ChatTurn]) -> Result<String, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.seen.lock().unwrap() = turns.to_vec();
            match self.behavior {
                Behavior::Echo => Ok(format!("eco: {}", turns.last().unwrap().content)),
                Behavior::Fail => Err(ProviderError::Api {
                    status: 500,
                    message: "boom".into(),
                }),
                Behavior::Hang => {
                    tokio::time::sleep(Duration::from_secs(5)).await;
                    Ok("demasiado tarde".into())
                }
            }
        }
    }

    async fn seeded_store() -> (EstudiaService, String) {
        let svc = EstudiaService::new_local(":memory:").await.unwrap();
        let user = svc
            .create_user("ana_pm", "ana@example.com", "clave123")
            .await
            .unwrap();
        (svc, user.id)
    }

    #[tokio::test]
    async fn bind_auto_creates_session_for_fresh_user() {
        let (svc, uid) = seeded_store().await;
        let provider = StubProvider::new(Behavior::Echo);

        let convo = Conversation::bind(&svc, &provider, &uid, StudyMode::GuidedStudy)
            .await
            .unwrap();

        assert_eq!(convo.mode(), StudyMode::GuidedStudy);
        assert!(convo.history().is_empty());
        assert!(svc.get_session(&convo.session().id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn bind_hydrates_prior_history() {
        let (svc, uid) = seeded_store().await;
        let session = svc
            .create_session(&uid, None, StudyMode::FreeChat)
            .await
            .unwrap();
        svc.append_message(&session.id, MessageRole::User, "hola")
            .await
            .unwrap();
        svc.append_message(&session.id, MessageRole::Assistant, "¡Hola! ¿En qué te ayudo?")
            .await
            .unwrap();

        let provider = StubProvider::new(Behavior::Echo);
        let convo = Conversation::bind(&svc, &provider, &uid, StudyMode::FreeChat)
            .await
            .unwrap();

        assert_eq!(convo.session().id, session.id);
        assert_eq!(
            convo.history(),
            &[
                (MessageRole::User, "hola".to_string()),
                (MessageRole::Assistant, "¡Hola! ¿En qué te ayudo?".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn send_persists_exchange_in_order() {
        let (svc, uid) = seeded_store().await;
        let provider = StubProvider::new(Behavior::Echo);
        let mut convo = Conversation::bind(&svc, &provider, &uid, StudyMode::FreeChat)
            .await
            .unwrap();

        let outcome = convo.send("¿Qué es un acta de constitución?").await.unwrap();
        assert_eq!(
            outcome,
            SendOutcome::Reply("eco: ¿Qué es un acta de constitución?".to_string())
        );

        let messages = svc.list_messages(&convo.session().id).await.unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, MessageRole::User);
        assert_eq!(messages[0].content, "¿Qué es un acta de constitución?");
        assert_eq!(messages[1].role, MessageRole::Assistant);
        assert_eq!(messages[1].content, "eco: ¿Qué es un acta de constitución?");

        assert_eq!(convo.history().len(), 2);
        assert_eq!(convo.session().last_used_at, messages[1].timestamp);
    }

    #[tokio::test]
    async fn empty_message_never_reaches_provider_or_store() {
        let (svc, uid) = seeded_store().await;
        let provider = StubProvider::new(Behavior::Echo);
        let mut convo = Conversation::bind(&svc, &provider, &uid, StudyMode::FreeChat)
            .await
            .unwrap();

        for text in ["", "   ", "\n\t "] {
            let result = convo.send(text).await;
            assert!(matches!(result, Err(ChatError::EmptyMessage)));
        }

        assert_eq!(provider.calls(), 0);
        assert_eq!(svc.message_count(&convo.session().id).await.unwrap(), 0);
        assert!(convo.history().is_empty());
    }

    #[tokio::test]
    async fn provider_failure_leaves_store_untouched() {
        let (svc, uid) = seeded_store().await;
        let echo = StubProvider::new(Behavior::Echo);
        let mut convo = Conversation::bind(&svc, &echo, &uid, StudyMode::FreeChat)
            .await
            .unwrap();
        convo.send("primer intercambio").await.unwrap();
        let sid = convo.session().id.clone();
        let before = svc.message_count(&sid).await.unwrap();

        let failing = StubProvider::new(Behavior::Fail);
        let mut convo = Conversation::bind(&svc, &failing, &uid, StudyMode::FreeChat)
            .await
            .unwrap();
        let history_before = convo.history().to_vec();

        let outcome = convo.send("¿sigues ahí?").await.unwrap();
        assert_eq!(
            outcome,
            SendOutcome::Unavailable {
                notice: PROVIDER_FAILURE_NOTICE.to_string()
            }
        );

        assert_eq!(svc.message_count(&sid).await.unwrap(), before);
        assert_eq!(convo.history(), history_before.as_slice());
        assert_eq!(failing.calls(), 1);
    }

    #[tokio::test]
    async fn timeout_behaves_like_provider_failure() {
        let (svc, uid) = seeded_store().await;
        let hanging = StubProvider::new(Behavior::Hang);
        let mut convo = Conversation::bind(&svc, &hanging, &uid, StudyMode::FreeChat)
            .await
            .unwrap()
            .with_timeout(Duration::from_millis(50));

        let outcome = convo.send("hola").await.unwrap();
        assert!(matches!(outcome, SendOutcome::Unavailable { .. }));
        assert_eq!(svc.message_count(&convo.session().id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn context_is_preamble_then_history_then_message() {
        let (svc, uid) = seeded_store().await;
        let provider = StubProvider::new(Behavior::Echo);
        let mut convo = Conversation::bind(&svc, &provider, &uid, StudyMode::FreeChat)
            .await
            .unwrap();

        convo.send("primera pregunta").await.unwrap();
        convo.send("segunda pregunta").await.unwrap();

        let seen = provider.seen.lock().unwrap().clone();
        assert_eq!(seen.len(), 4, "preamble + 2 history turns + new message");
        assert_eq!(seen[0].role, TurnRole::System);
        assert!(seen[0].content.contains("CHARLEMOS"));
        assert_eq!(seen[1].role, TurnRole::User);
        assert_eq!(seen[1].content, "primera pregunta");
        assert_eq!(seen[2].role, TurnRole::Assistant);
        assert_eq!(seen[3].role, TurnRole::User);
        assert_eq!(seen[3].content, "segunda pregunta");
    }

    #[tokio::test]
    async fn start_new_detaches_without_touching_previous() {
        let (svc, uid) = seeded_store().await;
        let provider = StubProvider::new(Behavior::Echo);
        let mut convo = Conversation::bind(&svc, &provider, &uid, StudyMode::FreeChat)
            .await
            .unwrap();
        convo.send("mensaje en la sesión original").await.unwrap();
        let old_sid = convo.session().id.clone();

        convo.start_new(Some("Repaso nuevo")).await.unwrap();
        assert_ne!(convo.session().id, old_sid);
        assert_eq!(convo.session().name, "Repaso nuevo");
        assert_eq!(convo.mode(), StudyMode::FreeChat);
        assert!(convo.history().is_empty());

        convo.send("mensaje en la sesión nueva").await.unwrap();

        // The original transcript is intact and did not grow.
        assert_eq!(svc.message_count(&old_sid).await.unwrap(), 2);
        assert_eq!(svc.message_count(&convo.session().id).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn rebinding_in_new_mode_never_mutates_previous_session() {
        let (svc, uid) = seeded_store().await;
        let provider = StubProvider::new(Behavior::Echo);

        let mut chat = Conversation::bind(&svc, &provider, &uid, StudyMode::FreeChat)
            .await
            .unwrap();
        chat.send("hola desde charla libre").await.unwrap();
        let chat_sid = chat.session().id.clone();
        let chat_count = svc.message_count(&chat_sid).await.unwrap();

        let mut assessment = Conversation::bind(&svc, &provider, &uid, StudyMode::Assessment)
            .await
            .unwrap();
        assert_ne!(assessment.session().id, chat_sid);
        assert_ne!(assessment.mode(), chat.mode());

        assessment.send("ponme una pregunta").await.unwrap();
        assert_eq!(svc.message_count(&chat_sid).await.unwrap(), chat_count);
    }
}
