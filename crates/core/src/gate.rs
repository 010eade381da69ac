//! The editor gate.
//!
//! A UX gate in front of the authoring surface, *not* a security boundary:
//! unlocking is an exact string comparison against a configured passphrase,
//! with no hashing, no session, no lockout, and no attempt tracking. Anything
//! that needs real authentication must add a proper capability boundary
//! instead of extending this.

/// Gate in front of the authoring surface.
#[derive(Debug, Clone)]
pub struct EditorGate {
    passphrase: String,
}

impl EditorGate {
    /// Creates a gate that unlocks on `passphrase`.
    pub fn new(passphrase: impl Into<String>) -> Self {
        Self {
            passphrase: passphrase.into(),
        }
    }

    /// Returns true if `attempt` matches the passphrase exactly.
    ///
    /// Case- and whitespace-sensitive; the caller is expected to show a
    /// blocking notice on a mismatch.
    pub fn unlock(&self, attempt: &str) -> bool {
        attempt == self.passphrase
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unlock_on_exact_match() {
        let gate = EditorGate::new("rwq234");
        assert!(gate.unlock("rwq234"));
    }

    #[test]
    fn test_unlock_is_case_sensitive() {
        let gate = EditorGate::new("rwq234");
        assert!(!gate.unlock("RWQ234"));
    }

    #[test]
    fn test_unlock_is_whitespace_sensitive() {
        let gate = EditorGate::new("rwq234");
        assert!(!gate.unlock(" rwq234"));
        assert!(!gate.unlock("rwq234 "));
    }

    #[test]
    fn test_unlock_rejects_empty_attempt() {
        let gate = EditorGate::new("rwq234");
        assert!(!gate.unlock(""));
    }
}
