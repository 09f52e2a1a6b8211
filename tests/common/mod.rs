//! Common test utilities shared across test modules.

use std::cell::RefCell;
use std::fmt;

use dns_endpoint::{Diagnostics, Endpoint, RecordType, OWNER_LABEL_KEY};

/// Builds an A record owned by `owner`.
pub fn owned_a(name: &str, target: &str, owner: &str) -> Endpoint {
    Endpoint::new(name, RecordType::A, [target])
        .unwrap()
        .with_label(OWNER_LABEL_KEY, owner)
}

/// Diagnostics sink that keeps every message.
#[derive(Default)]
pub struct RecordingDiagnostics {
    messages: RefCell<Vec<String>>,
}

#[allow(dead_code)]
impl RecordingDiagnostics {
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.borrow().is_empty()
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn debug(&self, message: fmt::Arguments<'_>) {
        self.messages.borrow_mut().push(message.to_string());
    }
}
