use sha2::{Digest, Sha256};

use crate::domain::Order;

/// Derives confirmation codes from a server-side secret.
///
/// Codes are deterministic, so verification recomputes them instead of
/// storing anything. The secret is injected at construction time and
/// never read from ambient state.
#[derive(Clone)]
pub struct CodeGenerator {
    secret: String,
}

impl CodeGenerator {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// SHA-256 over the secret, the order id and the order's current
    /// email, rendered as lowercase hex. An order whose email changes
    /// gets a different code, which invalidates previously issued links.
    pub fn code_for(&self, order: &Order) -> String {
        let key = format!(
            "{}{}{}",
            self.secret,
            order.id,
            order.email.as_deref().unwrap_or("")
        );
        hex::encode(Sha256::digest(key.as_bytes()))
    }
}
