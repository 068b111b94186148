#![allow(dead_code)]

use std::{
    cell::{Cell, RefCell},
    collections::HashSet,
};

use nin::{
    clients::{Connectivity, Login, Mailer, Prompter},
    error::{Error, Result},
    types::{AuthToken, Envelope},
};

// Mailer stub that records every envelope it is asked to send
pub struct RecordingMailer {
    pub sent: RefCell<Vec<Envelope>>,
    status: u16,
    rejected: RefCell<HashSet<String>>,
    transport_failure: bool,
}

impl RecordingMailer {
    pub fn accepting() -> Self {
        Self::with_status(202)
    }

    pub fn with_status(status: u16) -> Self {
        Self {
            sent: RefCell::new(Vec::new()),
            status,
            rejected: RefCell::new(HashSet::new()),
            transport_failure: false,
        }
    }

    pub fn failing_transport() -> Self {
        Self {
            transport_failure: true,
            ..Self::accepting()
        }
    }

    pub fn reject(&self, subject: &str) {
        self.rejected.borrow_mut().insert(subject.to_string());
    }

    pub fn subjects(&self) -> Vec<String> {
        self.sent.borrow().iter().map(|e| e.subject.clone()).collect()
    }
}

impl Mailer for &RecordingMailer {
    async fn send(&self, envelope: &Envelope) -> Result<u16> {
        self.sent.borrow_mut().push(envelope.clone());
        if self.transport_failure {
            return Err(Error::Transport("connection reset".to_string()));
        }
        if self.rejected.borrow().contains(&envelope.subject) {
            return Ok(400);
        }
        Ok(self.status)
    }
}

pub struct StubProbe {
    pub online: Cell<bool>,
    pub checks: Cell<usize>,
    /// Goes offline once this many checks have passed.
    pub drop_after: Option<usize>,
}

impl StubProbe {
    pub fn online() -> Self {
        Self {
            online: Cell::new(true),
            checks: Cell::new(0),
            drop_after: None,
        }
    }

    pub fn offline() -> Self {
        Self {
            online: Cell::new(false),
            checks: Cell::new(0),
            drop_after: None,
        }
    }

    pub fn dropping_after(checks: usize) -> Self {
        Self {
            drop_after: Some(checks),
            ..Self::online()
        }
    }
}

impl Connectivity for &StubProbe {
    async fn is_online(&self) -> bool {
        if self.drop_after == Some(self.checks.get()) {
            self.online.set(false);
        }
        self.checks.set(self.checks.get() + 1);
        self.online.get()
    }
}

pub struct StubLogin {
    pub response: Option<AuthToken>,
    pub calls: RefCell<Vec<(String, String)>>,
}

impl StubLogin {
    pub fn returning(token: &str, expiry: i64) -> Self {
        Self {
            response: Some(AuthToken {
                token: token.to_string(),
                expiry,
            }),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            response: None,
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl Login for StubLogin {
    async fn login(&self, username: &str, secret_hash: &str) -> Option<AuthToken> {
        self.calls
            .borrow_mut()
            .push((username.to_string(), secret_hash.to_string()));
        self.response.clone()
    }
}

pub struct ScriptedPrompter {
    pub username: String,
    pub password: String,
    pub asked: Cell<usize>,
}

impl ScriptedPrompter {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
            asked: Cell::new(0),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&self, _prompt: &str) -> Result<String> {
        self.asked.set(self.asked.get() + 1);
        Ok(self.username.clone())
    }

    fn password(&self, _prompt: &str) -> Result<String> {
        self.asked.set(self.asked.get() + 1);
        Ok(self.password.clone())
    }

    fn confirm(&self, _prompt: &str) -> Result<bool> {
        self.asked.set(self.asked.get() + 1);
        Ok(true)
    }
}
