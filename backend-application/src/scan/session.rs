// Scan-lock guard
// A burst of scanner frames for the same code must resolve exactly once.
// Two states per session: Idle and Resolving. Frames arriving while
// Resolving are discarded no matter what they contain.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use backend_domain::SessionId;

#[derive(Debug, Default)]
struct Gate {
    resolving: bool,
    generation: u64,
}

/// Held by the single in-flight resolution; settling consumes it, so a
/// resolution cannot release the lock twice.
#[derive(Debug)]
pub struct ScanTicket {
    generation: u64,
}

#[derive(Debug, Default)]
pub struct ScanSession {
    gate: Mutex<Gate>,
}

impl ScanSession {
    /// Atomic Idle -> Resolving. `None` while a resolution is in flight.
    pub fn try_begin(&self) -> Option<ScanTicket> {
        let mut gate = self.gate.lock().expect("scan gate poisoned");
        if gate.resolving {
            return None;
        }
        gate.resolving = true;
        gate.generation += 1;
        Some(ScanTicket {
            generation: gate.generation,
        })
    }

    /// Releases the lock after the cool-down, measured from when the result
    /// was produced. The generation check makes the release idempotent and
    /// keeps a stale timer from unlocking a newer resolution.
    pub fn settle_after(self: &Arc<Self>, ticket: ScanTicket, cooldown: Duration) {
        let session = Arc::clone(self);
        tokio::spawn(async move {
            tokio::time::sleep(cooldown).await;
            session.release(ticket.generation);
        });
    }

    /// Operator acknowledgement: immediate release, racing the cool-down
    /// timer. Whichever fires first wins; the loser is a no-op.
    pub fn acknowledge(&self) -> bool {
        let mut gate = self.gate.lock().expect("scan gate poisoned");
        if !gate.resolving {
            return false;
        }
        gate.resolving = false;
        true
    }

    pub fn is_idle(&self) -> bool {
        !self.gate.lock().expect("scan gate poisoned").resolving
    }

    fn release(&self, generation: u64) -> bool {
        let mut gate = self.gate.lock().expect("scan gate poisoned");
        if !gate.resolving || gate.generation != generation {
            return false;
        }
        gate.resolving = false;
        true
    }
}

/// Per-session locks, created on first use. Sessions are identified by the
/// scanning device; the lock is never shared across sessions.
#[derive(Debug, Default)]
pub struct ScanSessions {
    sessions: Mutex<HashMap<SessionId, Arc<ScanSession>>>,
}

impl ScanSessions {
    pub fn session(&self, id: &SessionId) -> Arc<ScanSession> {
        let mut sessions = self.sessions.lock().expect("scan registry poisoned");
        sessions.entry(id.clone()).or_default().clone()
    }

    /// Early release for a session, if it exists and is resolving.
    pub fn acknowledge(&self, id: &SessionId) -> bool {
        let sessions = self.sessions.lock().expect("scan registry poisoned");
        sessions.get(id).map(|s| s.acknowledge()).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Arc<ScanSession> {
        Arc::new(ScanSession::default())
    }

    #[tokio::test]
    async fn burst_of_frames_yields_one_ticket() {
        let session = session();
        let first = session.try_begin();
        let second = session.try_begin();
        let third = session.try_begin();
        assert!(first.is_some());
        assert!(second.is_none());
        assert!(third.is_none());
    }

    #[tokio::test]
    async fn lock_clears_after_cooldown() {
        let session = session();
        let ticket = session.try_begin().expect("ticket");
        session.settle_after(ticket, Duration::from_millis(20));
        assert!(session.try_begin().is_none());

        tokio::time::sleep(Duration::from_millis(80)).await;
        assert!(session.try_begin().is_some());
    }

    #[tokio::test]
    async fn acknowledge_releases_early() {
        let session = session();
        let ticket = session.try_begin().expect("ticket");
        session.settle_after(ticket, Duration::from_secs(60));

        assert!(session.acknowledge());
        assert!(session.try_begin().is_some());
    }

    #[tokio::test]
    async fn acknowledge_when_idle_is_noop() {
        let session = session();
        assert!(!session.acknowledge());
        assert!(session.is_idle());
    }

    #[tokio::test]
    async fn stale_timer_does_not_release_newer_resolution() {
        let session = session();
        let first = session.try_begin().expect("first ticket");
        session.settle_after(first, Duration::from_millis(20));
        session.acknowledge();

        // New resolution begins before the first timer fires.
        let second = session.try_begin().expect("second ticket");
        tokio::time::sleep(Duration::from_millis(60)).await;
        assert!(!session.is_idle());

        session.settle_after(second, Duration::from_millis(10));
        tokio::time::sleep(Duration::from_millis(40)).await;
        assert!(session.is_idle());
    }

    #[tokio::test]
    async fn registry_hands_out_one_lock_per_session() {
        let sessions = ScanSessions::default();
        let a = sessions.session(&SessionId("scanner-a".to_string()));
        let b = sessions.session(&SessionId("scanner-b".to_string()));

        let _ticket = a.try_begin().expect("a ticket");
        assert!(a.try_begin().is_none());
        assert!(b.try_begin().is_some());

        assert!(sessions.acknowledge(&SessionId("scanner-a".to_string())));
        assert!(!sessions.acknowledge(&SessionId("scanner-unknown".to_string())));
    }
}
