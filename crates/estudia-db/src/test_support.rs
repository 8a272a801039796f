//! Shared test utilities for estudia-db integration tests.

#[cfg(test)]
pub(crate) mod helpers {
    use estudia_core::enums::StudyMode;

    use crate::EstudiaDb;
    use crate::service::EstudiaService;

    /// Create an in-memory `EstudiaService` for tests.
    pub async fn test_service() -> EstudiaService {
        let db = EstudiaDb::open_local(":memory:").await.unwrap();
        EstudiaService::from_db(db)
    }

    /// Register a user and return its ID (convenience for tests that need one).
    pub async fn create_test_user(svc: &EstudiaService) -> String {
        let user = svc
            .create_user("ana_pm", "ana@example.com", "clave123")
            .await
            .unwrap();
        user.id
    }

    /// Create a session in the given mode and return its ID.
    pub async fn create_test_session(svc: &EstudiaService, user_id: &str, mode: StudyMode) -> String {
        let session = svc.create_session(user_id, None, mode).await.unwrap();
        session.id
    }

    /// Insert a session row with explicit timestamps, bypassing `create_session`.
    ///
    /// Analytics tests need sessions spread over past days and hours; the
    /// public API always stamps "now".
    pub async fn insert_session_at(
        svc: &EstudiaService,
        user_id: &str,
        mode: StudyMode,
        created_at: chrono::DateTime<chrono::Utc>,
    ) -> String {
        let id = svc.db().generate_id("ses").await.unwrap();
        svc.db()
            .conn()
            .execute(
                "INSERT INTO sessions (id, user_id, name, mode, created_at, last_used_at)
                 VALUES (?1, ?2, 'Nueva Conversación', ?3, ?4, ?4)",
                libsql::params![
                    id.as_str(),
                    user_id,
                    mode.as_str(),
                    created_at.to_rfc3339()
                ],
            )
            .await
            .unwrap();
        id
    }

    /// Insert a message row with an explicit timestamp.
    pub async fn insert_message_at(
        svc: &EstudiaService,
        session_id: &str,
        role: &str,
        content: &str,
        timestamp: chrono::DateTime<chrono::Utc>,
    ) {
        let id = svc.db().generate_id("msg").await.unwrap();
        svc.db()
            .conn()
            .execute(
                "INSERT INTO messages (id, session_id, role, content, timestamp)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                libsql::params![
                    id.as_str(),
                    session_id,
                    role,
                    content,
                    timestamp.to_rfc3339()
                ],
            )
            .await
            .unwrap();
    }
}
