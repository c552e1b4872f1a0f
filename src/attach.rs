//! Attaching sessions to host fields.
//!
//! Hosts differ in *when* their editable fields can be wired: some expose
//! every field as soon as the editor loads, others build fields
//! asynchronously and only signal readiness later. Each variant is one
//! [`AttachStrategy`]; [`select_strategy`] picks one at startup from the
//! host's [`HostFeatures`], and matching code never sees the difference.

use crate::host::FieldId;
use crate::session::Session;

/// What the host can do, probed once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HostFeatures {
    /// Fields are enumerable and ready as soon as they are announced.
    pub fields_ready_on_announce: bool,
}

/// One way of wiring keystroke gates to announced fields.
pub trait AttachStrategy {
    fn name(&self) -> &'static str;

    /// A field became available. Returns whether a gate was attached now.
    fn announce(&mut self, session: &mut Session, field: FieldId) -> bool;

    /// The host finished building its UI. Returns how many fields got
    /// attached by this call.
    fn host_ready(&mut self, session: &mut Session) -> usize {
        let _ = session;
        0
    }
}

/// Attach on announce.
#[derive(Debug, Default, Clone)]
pub struct ImmediateAttach;

impl AttachStrategy for ImmediateAttach {
    fn name(&self) -> &'static str {
        "immediate"
    }

    fn announce(&mut self, session: &mut Session, field: FieldId) -> bool {
        session.attach(field)
    }
}

/// Queue fields until the host reports it is ready, then attach them all.
#[derive(Debug, Default, Clone)]
pub struct DeferredAttach {
    queued: Vec<FieldId>,
    ready: bool,
}

impl DeferredAttach {
    pub fn queued(&self) -> &[FieldId] {
        &self.queued
    }
}

impl AttachStrategy for DeferredAttach {
    fn name(&self) -> &'static str {
        "deferred"
    }

    fn announce(&mut self, session: &mut Session, field: FieldId) -> bool {
        if self.ready {
            return session.attach(field);
        }
        if !self.queued.contains(&field) {
            self.queued.push(field);
        }
        false
    }

    fn host_ready(&mut self, session: &mut Session) -> usize {
        self.ready = true;
        let attached = self.queued.drain(..).filter(|field| session.attach(*field)).count();
        tracing::debug!(attached, "host ready; attached queued fields");
        attached
    }
}

/// Pick the strategy for this host.
pub fn select_strategy(features: HostFeatures) -> Box<dyn AttachStrategy> {
    if features.fields_ready_on_announce { Box::new(ImmediateAttach) } else { Box::new(DeferredAttach::default()) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::TriggerTable;

    #[test]
    fn immediate_attaches_once() {
        let mut session = Session::new(TriggerTable::empty());
        let mut strategy = select_strategy(HostFeatures { fields_ready_on_announce: true });

        assert_eq!(strategy.name(), "immediate");
        assert!(strategy.announce(&mut session, FieldId(1)));
        assert!(!strategy.announce(&mut session, FieldId(1)));
        assert!(session.is_attached(FieldId(1)));
    }

    #[test]
    fn deferred_waits_for_host() {
        let mut session = Session::new(TriggerTable::empty());
        let mut strategy = DeferredAttach::default();

        assert!(!strategy.announce(&mut session, FieldId(1)));
        assert!(!strategy.announce(&mut session, FieldId(2)));
        assert!(!strategy.announce(&mut session, FieldId(1)));
        assert_eq!(strategy.queued(), &[FieldId(1), FieldId(2)]);
        assert!(!session.is_attached(FieldId(1)));

        assert_eq!(strategy.host_ready(&mut session), 2);
        assert!(session.is_attached(FieldId(1)) && session.is_attached(FieldId(2)));

        assert!(strategy.announce(&mut session, FieldId(3)));
        assert_eq!(strategy.host_ready(&mut session), 0);
    }

    #[test]
    fn deferred_skips_fields_attached_elsewhere() {
        let mut session = Session::new(TriggerTable::empty());
        session.attach(FieldId(7));
        let mut strategy = DeferredAttach::default();

        strategy.announce(&mut session, FieldId(7));

        assert_eq!(strategy.host_ready(&mut session), 0);
    }
}
