#[cfg(test)]
mod tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode, header},
        routing::get,
    };
    use chrono::{TimeZone, Utc};
    use tower::ServiceExt;

    use crate::core::auth::session::test_tokens::token;
    use crate::core::auth::{
        AccessDecision, AuthBackend, AuthStore, LoginCredentials, LoginResponse, MemoryStorage,
        User, authorize, verify_session,
    };
    use crate::core::guard::edge_guard;
    use crate::core::models::EnteSinSupervisor;
    use crate::core::selection::EnteSelection;
    use crate::core::services::{ApiErrorBody, ApiFailure, Operation, ServiceError};

    struct FixedLogin(LoginResponse);

    impl AuthBackend for FixedLogin {
        async fn login(&self, _: &LoginCredentials) -> Result<LoginResponse, ApiFailure> {
            Ok(self.0.clone())
        }

        async fn logout(&self) -> Result<(), ApiFailure> {
            Ok(())
        }
    }

    fn user(rol: &str) -> User {
        User {
            id: "u-9".to_string(),
            email: "admin@ente.gob.ve".to_string(),
            nombre: "Admin".to_string(),
            apellido: "Ente".to_string(),
            rol: rol.to_string(),
            ente_id: Some("e-1".to_string()),
        }
    }

    #[test]
    fn test_valid_token_verifies_with_email_and_role() {
        let now = Utc.timestamp_opt(1_760_000_000, 0).unwrap();
        let t = token("UNIVERSITAS", Some(now.timestamp() + 1000));

        let session = verify_session(&t, now).unwrap();
        assert_eq!(session.email, "ana.perez@universitas.gob.ve");
        assert_eq!(session.role, "UNIVERSITAS");
    }

    #[test]
    fn test_expired_and_wrong_role_tokens_never_grant() {
        let now = Utc::now();
        let tokens = [
            token("UNIVERSITAS", Some(now.timestamp() - 1)),
            token("ADMIN_ENTE", Some(now.timestamp() + 1000)),
            token("ADMIN_ENTE", Some(now.timestamp() - 1000)),
        ];

        for t in &tokens {
            let decision = authorize("/dashboard", Some(t), now);
            assert!(!decision.is_allowed());
            assert!(matches!(
                decision,
                AccessDecision::RedirectToLogin {
                    clear_cookies: true,
                    ..
                }
            ));
        }
    }

    #[tokio::test]
    async fn test_usuarios_without_cookie_redirects_to_login() {
        let app = Router::new()
            .route("/dashboard/usuarios", get(|| async { "usuarios" }))
            .layer(axum::middleware::from_fn(edge_guard));

        let response = app
            .oneshot(
                Request::get("/dashboard/usuarios")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response.status().is_redirection());
        assert_eq!(response.headers()[header::LOCATION], "/login");
    }

    #[tokio::test]
    async fn test_login_with_other_role_fails_client_side() {
        let backend = FixedLogin(LoginResponse {
            access_token: token("ADMIN_ENTE", None),
            user: user("ADMIN_ENTE"),
        });
        let storage = MemoryStorage::new();
        let mut store = AuthStore::new(backend, &storage);

        let err = store.login("admin@ente.gob.ve", "clave").await.unwrap_err();

        assert_eq!(err.to_string(), "No tiene permisos para acceder a este sistema");
        assert!(!store.state().is_authenticated);
        assert!(!crate::core::auth::AuthStorage::has_valid_session(&storage));
    }

    #[test]
    fn test_selection_remove_then_readd_is_idempotent() {
        let ente = EnteSinSupervisor {
            id: "3f2b8c1e-9d4a-4e6f-8a7b-1c2d3e4f5a6b".to_string(),
            nombre: "Gobernación de Lara".to_string(),
            rif: Some("G-20000002-1".to_string()),
            estado: Some("Lara".to_string()),
            municipio: None,
        };

        let mut selection = EnteSelection::new();
        selection.add(ente.clone());
        let snapshot = selection.clone();

        selection.remove(&ente.id);
        selection.add(ente.clone());
        selection.add(ente);

        assert_eq!(selection, snapshot);
    }

    #[test]
    fn test_supervisor_conflict_surfaces_exact_message() {
        let failure = ApiFailure::status(
            StatusCode::CONFLICT.as_u16(),
            ApiErrorBody::parse(r#"{"message":"duplicate key value"}"#),
        );
        let err = ServiceError::from_failure(Operation::CreateSupervisor, &failure);
        assert_eq!(err.to_string(), "Email ya registrado");
    }
}
