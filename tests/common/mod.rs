#![allow(dead_code)]

use async_trait::async_trait;
use axum::{Router, middleware, routing::get};
use chrono::{Duration, Utc};
use std::sync::{Arc, Mutex};

use link_cards::application::services::{AuthService, LinkService};
use link_cards::domain::entities::{Session, SessionToken, ShortLinkRecord, User};
use link_cards::domain::repositories::{LinkRepository, SessionRepository};
use link_cards::error::AppError;
use link_cards::state::AppState;
use link_cards::ui::{BaseUrl, LinkOptionsDropdown};
use link_cards::web;
use link_cards::web::handlers::health_handler;
use link_cards::web::middleware::web_auth;

pub const SIGNING_SECRET: &str = "test-signing-secret";
pub const BASE_URL: &str = "https://sho.rt";

/// Link store backed by a vector.
#[derive(Default)]
pub struct InMemoryLinks {
    links: Mutex<Vec<ShortLinkRecord>>,
    unreachable: bool,
}

impl InMemoryLinks {
    pub fn new(links: Vec<ShortLinkRecord>) -> Self {
        Self {
            links: Mutex::new(links),
            unreachable: false,
        }
    }

    /// A store whose every call fails like a lost database connection.
    pub fn unreachable() -> Self {
        Self {
            links: Mutex::new(Vec::new()),
            unreachable: true,
        }
    }

    fn check(&self) -> Result<(), AppError> {
        if self.unreachable {
            Err(AppError::internal("Database error", serde_json::json!({})))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinks {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<ShortLinkRecord>, AppError> {
        self.check()?;
        let links = self.links.lock().unwrap();
        Ok(links.iter().find(|l| l.slug == slug).cloned())
    }

    async fn list_by_owner(
        &self,
        owner_id: i64,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<ShortLinkRecord>, AppError> {
        self.check()?;
        let mut owned: Vec<_> = self
            .links
            .lock()
            .unwrap()
            .iter()
            .filter(|l| l.created_by == Some(owner_id))
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(owned
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn count_by_owner(&self, owner_id: i64) -> Result<i64, AppError> {
        self.check()?;
        let links = self.links.lock().unwrap();
        Ok(links.iter().filter(|l| l.created_by == Some(owner_id)).count() as i64)
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.check()
    }
}

/// User and token store backed by vectors.
#[derive(Default)]
pub struct InMemorySessions {
    users: Mutex<Vec<User>>,
    tokens: Mutex<Vec<SessionToken>>,
}

#[async_trait]
impl SessionRepository for InMemorySessions {
    async fn find_session(&self, token_hash: &str) -> Result<Option<Session>, AppError> {
        let tokens = self.tokens.lock().unwrap();
        let users = self.users.lock().unwrap();

        Ok(tokens
            .iter()
            .find(|t| t.token_hash == token_hash && !t.is_revoked())
            .and_then(|t| users.iter().find(|u| u.id == t.user_id))
            .map(|u| Session {
                user_id: u.id,
                user_name: u.name.clone(),
            }))
    }

    async fn touch(&self, token_hash: &str) -> Result<(), AppError> {
        let mut tokens = self.tokens.lock().unwrap();
        if let Some(token) = tokens.iter_mut().find(|t| t.token_hash == token_hash) {
            token.last_used_at = Some(Utc::now());
        }
        Ok(())
    }

    async fn create_user(&self, name: &str) -> Result<User, AppError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.name == name) {
            return Err(AppError::bad_request(
                "User already exists",
                serde_json::json!({ "name": name }),
            ));
        }

        let user = User {
            id: users.len() as i64 + 1,
            name: name.to_string(),
            created_at: Utc::now(),
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn list_users(&self) -> Result<Vec<User>, AppError> {
        Ok(self.users.lock().unwrap().clone())
    }

    async fn find_user(&self, name: &str) -> Result<Option<User>, AppError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.name == name).cloned())
    }

    async fn create_token(
        &self,
        user_id: i64,
        name: &str,
        token_hash: &str,
    ) -> Result<SessionToken, AppError> {
        let mut tokens = self.tokens.lock().unwrap();
        let token = SessionToken {
            id: tokens.len() as i64 + 1,
            user_id,
            name: name.to_string(),
            token_hash: token_hash.to_string(),
            created_at: Utc::now(),
            last_used_at: None,
            revoked_at: None,
        };
        tokens.push(token.clone());
        Ok(token)
    }

    async fn list_tokens(&self) -> Result<Vec<SessionToken>, AppError> {
        Ok(self.tokens.lock().unwrap().clone())
    }

    async fn find_token_by_id(&self, id: i64) -> Result<Option<SessionToken>, AppError> {
        let tokens = self.tokens.lock().unwrap();
        Ok(tokens.iter().find(|t| t.id == id).cloned())
    }

    async fn find_token_by_name(&self, name: &str) -> Result<Option<SessionToken>, AppError> {
        let tokens = self.tokens.lock().unwrap();
        Ok(tokens.iter().find(|t| t.name == name).cloned())
    }

    async fn revoke_token(&self, id: i64) -> Result<(), AppError> {
        let mut tokens = self.tokens.lock().unwrap();
        if let Some(token) = tokens.iter_mut().find(|t| t.id == id) {
            token.revoked_at = Some(Utc::now());
        }
        Ok(())
    }
}

/// Everything a handler test needs: state plus direct access to the stores.
pub struct TestContext {
    pub state: AppState,
    pub sessions: Arc<InMemorySessions>,
}

impl TestContext {
    /// Creates a user and returns a raw session token for them.
    pub async fn sign_in(&self, user_name: &str) -> String {
        let user = match self.sessions.find_user(user_name).await.unwrap() {
            Some(user) => user,
            None => self.sessions.create_user(user_name).await.unwrap(),
        };

        let (raw, _) = self
            .state
            .auth_service
            .issue_token(user.id, "test", None)
            .await
            .unwrap();
        raw
    }

    /// Revokes the first token called `name`.
    pub async fn revoke(&self, name: &str) {
        let token = self.sessions.find_token_by_name(name).await.unwrap().unwrap();
        self.sessions.revoke_token(token.id).await.unwrap();
    }
}

pub fn create_test_state(links: Vec<ShortLinkRecord>) -> TestContext {
    create_test_state_with(Arc::new(InMemoryLinks::new(links)))
}

pub fn create_test_state_with(links: Arc<InMemoryLinks>) -> TestContext {
    let sessions = Arc::new(InMemorySessions::default());

    let state = AppState::new(
        Arc::new(LinkService::new(links)),
        Arc::new(AuthService::new(
            sessions.clone(),
            SIGNING_SECRET.to_string(),
        )),
        BaseUrl::new(BASE_URL),
        Arc::new(LinkOptionsDropdown),
        25,
    );

    TestContext { state, sessions }
}

/// The production routes without rate limiting, which needs a peer address.
pub fn test_app(state: AppState) -> Router {
    let protected = web::routes::protected_routes().route_layer(middleware::from_fn_with_state(
        state.clone(),
        web_auth::layer,
    ));
    let preview = web::routes::preview_routes().route_layer(middleware::from_fn_with_state(
        state.clone(),
        web_auth::optional_session,
    ));

    Router::new()
        .route("/health", get(health_handler))
        .merge(preview)
        .nest(
            "/dashboard",
            Router::new()
                .merge(protected)
                .merge(web::routes::public_routes()),
        )
        .with_state(state)
}

/// A record owned by `owner`, created `age` ago.
pub fn link(slug: &str, url: &str, owner: Option<i64>, age: Duration) -> ShortLinkRecord {
    ShortLinkRecord::new(
        slug.to_string(),
        url.to_string(),
        None,
        0,
        Utc::now() - age,
        owner,
    )
}

