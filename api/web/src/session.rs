use std::sync::{Mutex, MutexGuard};

use actix_web::{
    cookie::{Cookie, SameSite},
    HttpRequest,
};
use ahash::{HashMap, HashMapExt};
use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

pub type SessionId = Uuid;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FlashKind {
    Success,
    Error,
}

impl FlashKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// A notice shown once, on the next page the visitor sees.
#[derive(Clone, Debug)]
pub struct Flash {
    kind: FlashKind,
    message: String,
}

impl Flash {
    pub fn success(message: &str) -> Self {
        Self {
            kind: FlashKind::Success,
            message: message.to_owned(),
        }
    }

    pub fn error(message: &str) -> Self {
        Self {
            kind: FlashKind::Error,
            message: message.to_owned(),
        }
    }

    pub fn kind(&self) -> &FlashKind {
        &self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Snapshot of an accepted contact form. Passwords are never kept.
#[derive(Clone, Debug)]
pub struct ContactSubmission {
    first_name: String,
    last_name: String,
    email: String,
    subject: String,
    message: String,
    submitted_at: DateTime<Utc>,
}

impl ContactSubmission {
    pub fn new(
        first_name: &str,
        last_name: &str,
        email: &str,
        subject: &str,
        message: &str,
    ) -> Self {
        Self {
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
            email: email.to_owned(),
            subject: subject.to_owned(),
            message: message.to_owned(),
            submitted_at: Utc::now(),
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn submitted_at(&self) -> &DateTime<Utc> {
        &self.submitted_at
    }
}

/// Per-visitor state. Holds at most one contact submission: a new one
/// replaces the old, reading it removes it.
pub struct Session {
    flashes: Vec<Flash>,
    contact_submission: Option<ContactSubmission>,
    last_seen: DateTime<Utc>,
}

impl Session {
    fn new(now: DateTime<Utc>) -> Self {
        Self {
            flashes: Vec::new(),
            contact_submission: None,
            last_seen: now,
        }
    }

    pub fn push_flash(&mut self, flash: Flash) {
        self.flashes.push(flash);
    }

    pub fn take_flashes(&mut self) -> Vec<Flash> {
        std::mem::take(&mut self.flashes)
    }

    pub fn set_contact_submission(&mut self, submission: ContactSubmission) {
        self.contact_submission = Some(submission);
    }

    pub fn take_contact_submission(&mut self) -> Option<ContactSubmission> {
        self.contact_submission.take()
    }
}

/// In-memory sessions keyed by the id stored in the session cookie. Idle
/// sessions expire after `ttl`; past `max_sessions` the least recently seen
/// one is dropped to make room.
pub struct SessionStore {
    cookie_name: String,
    ttl: Duration,
    max_sessions: usize,
    sessions: Mutex<HashMap<SessionId, Session>>,
}

impl SessionStore {
    pub fn new(cookie_name: &str, ttl: &u32, max_sessions: &usize) -> Self {
        Self {
            cookie_name: cookie_name.to_owned(),
            ttl: Duration::seconds(i64::from(*ttl)),
            max_sessions: *max_sessions,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Session id carried by the request, or a fresh one.
    pub fn resolve(&self, req: &HttpRequest) -> SessionId {
        self.request_id(req).unwrap_or_else(Uuid::now_v7)
    }

    /// Runs `f` on the session `id`, creating it if it does not exist.
    pub fn update<R>(&self, id: &SessionId, f: impl FnOnce(&mut Session) -> R) -> R {
        let now = Utc::now();
        let mut sessions = self.lock(&now);
        if !sessions.contains_key(id) && sessions.len() >= self.max_sessions {
            let oldest = sessions
                .iter()
                .min_by_key(|(_, session)| session.last_seen)
                .map(|(id, _)| *id);
            if let Some(oldest) = oldest {
                pf_log::debug(None, format!("[ApiWebServer] Session store full, dropping {oldest}"));
                sessions.remove(&oldest);
            }
        }
        let session = sessions.entry(*id).or_insert_with(|| Session::new(now));
        session.last_seen = now;
        f(session)
    }

    /// Runs `f` only if the request carries a live session.
    pub fn with_existing<R>(
        &self,
        req: &HttpRequest,
        f: impl FnOnce(&mut Session) -> R,
    ) -> Option<R> {
        let id = self.request_id(req)?;
        let now = Utc::now();
        let mut sessions = self.lock(&now);
        let session = sessions.get_mut(&id)?;
        session.last_seen = now;
        Some(f(session))
    }

    pub fn take_flashes(&self, req: &HttpRequest) -> Vec<Flash> {
        self.with_existing(req, Session::take_flashes)
            .unwrap_or_default()
    }

    pub fn cookie(&self, id: &SessionId) -> Cookie<'static> {
        Cookie::build(self.cookie_name.clone(), id.to_string())
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .finish()
    }

    pub fn len(&self) -> usize {
        self.lock(&Utc::now()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn request_id(&self, req: &HttpRequest) -> Option<SessionId> {
        let cookie = req.cookie(&self.cookie_name)?;
        Uuid::parse_str(cookie.value()).ok()
    }

    // Evicts idle sessions on every access.
    fn lock(&self, now: &DateTime<Utc>) -> MutexGuard<'_, HashMap<SessionId, Session>> {
        let mut sessions = self
            .sessions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        sessions.retain(|_, session| *now - session.last_seen <= self.ttl);
        sessions
    }
}

#[cfg(test)]
mod tests {
    use std::{thread, time::Duration};

    use actix_web::test::TestRequest;
    use uuid::Uuid;

    use super::{ContactSubmission, Flash, FlashKind, SessionStore};

    fn submission(subject: &str) -> ContactSubmission {
        ContactSubmission::new("John", "Doe", "john@example.com", subject, "Long enough message!")
    }

    #[test]
    fn flashes_are_taken_once() {
        let store = SessionStore::new("pf_session", &1800, &64);
        let id = Uuid::now_v7();
        store.update(&id, |session| {
            session.push_flash(Flash::success("Project deleted"));
            session.push_flash(Flash::error("Project not found"));
        });

        let req = TestRequest::default()
            .cookie(store.cookie(&id))
            .to_http_request();
        let flashes = store.take_flashes(&req);
        assert_eq!(flashes.len(), 2);
        assert_eq!(flashes[0].kind(), &FlashKind::Success);
        assert_eq!(flashes[1].message(), "Project not found");

        assert!(store.take_flashes(&req).is_empty());
    }

    #[test]
    fn contact_submission_is_overwritten_and_consumed() {
        let store = SessionStore::new("pf_session", &1800, &64);
        let id = Uuid::now_v7();
        store.update(&id, |session| session.set_contact_submission(submission("First subject")));
        store.update(&id, |session| session.set_contact_submission(submission("Second subject")));

        let taken = store.update(&id, |session| session.take_contact_submission());
        assert_eq!(taken.map(|s| s.subject().to_owned()).as_deref(), Some("Second subject"));

        let taken = store.update(&id, |session| session.take_contact_submission());
        assert!(taken.is_none());
    }

    #[test]
    fn requests_without_cookie_get_no_session() {
        let store = SessionStore::new("pf_session", &1800, &64);
        let req = TestRequest::default().to_http_request();

        assert!(store.with_existing(&req, |_| ()).is_none());
        assert!(store.take_flashes(&req).is_empty());
        assert!(store.is_empty());
    }

    #[test]
    fn malformed_cookie_resolves_to_fresh_id() {
        let store = SessionStore::new("pf_session", &1800, &64);
        let req = TestRequest::default()
            .cookie(actix_web::cookie::Cookie::new("pf_session", "not-a-uuid"))
            .to_http_request();

        let first = store.resolve(&req);
        let second = store.resolve(&req);
        assert_ne!(first, second);
    }

    #[test]
    fn idle_sessions_are_evicted() {
        let store = SessionStore::new("pf_session", &1, &64);
        let idle = Uuid::now_v7();
        store.update(&idle, |session| session.push_flash(Flash::success("stale")));

        thread::sleep(Duration::from_millis(1100));
        store.update(&Uuid::now_v7(), |_| ());

        assert_eq!(store.len(), 1);
        let flashes = store.update(&idle, |session| session.take_flashes());
        assert!(flashes.is_empty());
    }

    #[test]
    fn full_store_drops_least_recently_seen_session() {
        let store = SessionStore::new("pf_session", &1800, &2);
        let first = Uuid::now_v7();
        let second = Uuid::now_v7();
        store.update(&first, |session| session.push_flash(Flash::success("first")));
        thread::sleep(Duration::from_millis(5));
        store.update(&second, |session| session.push_flash(Flash::success("second")));
        thread::sleep(Duration::from_millis(5));
        // touching `first` makes `second` the stalest
        store.update(&first, |_| ());

        store.update(&Uuid::now_v7(), |_| ());

        assert_eq!(store.len(), 2);
        assert_eq!(store.update(&first, |session| session.take_flashes()).len(), 1);
        assert!(store.update(&second, |session| session.take_flashes()).is_empty());
    }
}
