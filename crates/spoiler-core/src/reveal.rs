use std::collections::HashSet;

use tracing::debug;

use spoiler_model::ItemKey;

/// Items the viewer explicitly unlocked in the current view.
///
/// Lives exactly as long as the view that owns it. Nothing is persisted,
/// so a remounted view starts fully gated again.
#[derive(Debug, Clone, Default)]
pub struct RevealSession {
    revealed: HashSet<ItemKey>,
}

impl RevealSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_revealed(&self, key: &ItemKey) -> bool {
        self.revealed.contains(key)
    }

    /// Returns `true` if the key was not already revealed.
    pub fn reveal(&mut self, key: ItemKey) -> bool {
        debug!(key = %key, "item revealed");
        self.revealed.insert(key)
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }

    /// Forget every reveal (view teardown).
    pub fn clear(&mut self) {
        self.revealed.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(value: &str) -> ItemKey {
        ItemKey::new(value).expect("key")
    }

    #[test]
    fn reveal_is_per_key() {
        let mut session = RevealSession::new();
        assert!(session.reveal(key("arc:1")));
        assert!(session.is_revealed(&key("arc:1")));
        assert!(!session.is_revealed(&key("arc:2")));
    }

    #[test]
    fn reveal_twice_is_idempotent() {
        let mut session = RevealSession::new();
        assert!(session.reveal(key("arc:1")));
        assert!(!session.reveal(key("arc:1")));
        assert_eq!(session.len(), 1);
    }

    #[test]
    fn clear_regates_everything() {
        let mut session = RevealSession::new();
        session.reveal(key("arc:1"));
        session.clear();
        assert!(session.is_empty());
        assert!(!session.is_revealed(&key("arc:1")));
    }
}
