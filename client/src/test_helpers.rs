//! Shared fakes for unit tests: scripted transport, recording collaborators
//! and a fully wired client harness over an in-memory cache.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;

use crate::auth::AuthContext;
use crate::config::ApiConfig;
use crate::net::http::ApiClient;
use crate::net::transport::{HttpRequest, HttpResponse, Transport, TransportError};
use crate::notify::{Notice, Notifier};
use crate::routing::{AuthRedirect, Navigator};
use crate::session::{MemoryCache, Session, SessionStore, UserData};

pub const TEST_API_URL: &str = "http://api.test";

fn locked<T>(m: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Transport answering from a queue of canned outcomes, recording requests.
#[derive(Default)]
pub struct ScriptedTransport {
    replies: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
    requests: Mutex<Vec<HttpRequest>>,
    yield_first: bool,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suspend once before answering, so concurrent callers interleave.
    pub fn yielding() -> Self {
        Self { yield_first: true, ..Self::default() }
    }

    pub fn reply(&self, status: u16, body: &str) -> &Self {
        locked(&self.replies).push_back(Ok(HttpResponse { status, body: body.to_owned() }));
        self
    }

    pub fn fail(&self, reason: &str) -> &Self {
        locked(&self.replies).push_back(Err(TransportError(reason.to_owned())));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        locked(&self.requests).clone()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests().pop().expect("no request was sent")
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        locked(&self.requests).push(request);
        if self.yield_first {
            tokio::task::yield_now().await;
        }
        locked(&self.replies)
            .pop_front()
            .unwrap_or_else(|| Err(TransportError("no scripted reply".to_owned())))
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        locked(&self.notices).clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        locked(&self.notices).push(notice);
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    path: Mutex<String>,
    redirects: Mutex<Vec<AuthRedirect>>,
}

impl RecordingNavigator {
    pub fn at(path: &str) -> Self {
        Self { path: Mutex::new(path.to_owned()), ..Self::default() }
    }

    pub fn set_path(&self, path: &str) {
        *locked(&self.path) = path.to_owned();
    }

    pub fn redirects(&self) -> Vec<AuthRedirect> {
        locked(&self.redirects).clone()
    }
}

impl Navigator for RecordingNavigator {
    fn current_path(&self) -> String {
        locked(&self.path).clone()
    }

    fn redirect(&self, to: AuthRedirect) {
        locked(&self.redirects).push(to);
    }
}

/// Everything a test needs to drive the client against scripted replies.
pub struct Harness {
    pub cache: Arc<MemoryCache>,
    pub store: Arc<SessionStore>,
    pub transport: Arc<ScriptedTransport>,
    pub notifier: Arc<RecordingNotifier>,
    pub navigator: Arc<RecordingNavigator>,
    pub api: Arc<ApiClient>,
}

impl Harness {
    /// Harness on `/` with an empty cache, already hydrated.
    pub fn new() -> Self {
        Self::build(MemoryCache::new(), ScriptedTransport::new(), true)
    }

    /// Harness whose cache already holds `session`, already hydrated.
    pub fn signed_in(session: &Session) -> Self {
        let raw = session.to_cache_record().expect("serializable session");
        Self::build(MemoryCache::with_record(raw), ScriptedTransport::new(), true)
    }

    /// Like [`Harness::new`] but the transport yields before replying.
    pub fn yielding() -> Self {
        Self::build(MemoryCache::new(), ScriptedTransport::yielding(), true)
    }

    /// Like [`Harness::signed_in`] but the transport yields before replying.
    pub fn signed_in_yielding(session: &Session) -> Self {
        let raw = session.to_cache_record().expect("serializable session");
        Self::build(MemoryCache::with_record(raw), ScriptedTransport::yielding(), true)
    }

    /// Harness still in the loading phase.
    pub fn unhydrated() -> Self {
        Self::build(MemoryCache::new(), ScriptedTransport::new(), false)
    }

    fn build(cache: MemoryCache, transport: ScriptedTransport, hydrate: bool) -> Self {
        let cache = Arc::new(cache);
        let store = Arc::new(SessionStore::new(cache.clone()));
        let transport = Arc::new(transport);
        let notifier = Arc::new(RecordingNotifier::default());
        let navigator = Arc::new(RecordingNavigator::at("/"));
        let api = Arc::new(ApiClient::new(
            ApiConfig::new(TEST_API_URL),
            transport.clone(),
            store.clone(),
            notifier.clone(),
            navigator.clone(),
        ));
        if hydrate {
            store.hydrate();
        }
        Self { cache, store, transport, notifier, navigator, api }
    }

    pub fn context(&self) -> AuthContext {
        AuthContext::new(self.store.clone(), self.api.clone(), self.navigator.clone())
    }
}

/// A valid participant session.
pub fn participant_session() -> Session {
    let mut user = UserData::new();
    user.insert("name".to_owned(), serde_json::json!("Ana"));
    user.insert("email".to_owned(), serde_json::json!("ana@example.com"));
    user.insert("role".to_owned(), serde_json::json!("participant"));
    Session::new("tok-123", user)
}
