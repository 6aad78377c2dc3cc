//! Pane references and the `"active"` sentinel.
//!
//! Callers address panes either by concrete id or by the literal sentinel
//! `"active"`, meaning "whatever pane is focused when the call runs". The
//! sentinel is a wire-level convenience only: it is resolved to a concrete
//! `PaneId` exactly once, at dispatch time, and is never stored.

use serde::{Deserialize, Serialize};

use crate::pane::PaneId;

/// A reference to a pane as it appears in action arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaneRef {
    /// Resolve to the currently active pane at call time.
    Active,
    /// A concrete pane id, used verbatim.
    Id(PaneId),
}

impl PaneRef {
    /// Literal wire form of the active-pane sentinel.
    pub const ACTIVE_SENTINEL: &'static str = "active";

    /// Resolve to a concrete id. `Active` with no focused pane yields `None`.
    pub fn resolve(&self, active: Option<&PaneId>) -> Option<PaneId> {
        match self {
            Self::Active => active.cloned(),
            Self::Id(id) => Some(id.clone()),
        }
    }

    pub fn is_active_sentinel(&self) -> bool {
        matches!(self, Self::Active)
    }
}

impl Default for PaneRef {
    fn default() -> Self {
        Self::Active
    }
}

impl From<String> for PaneRef {
    fn from(s: String) -> Self {
        if s == Self::ACTIVE_SENTINEL {
            Self::Active
        } else {
            Self::Id(PaneId::new(s))
        }
    }
}

impl From<&str> for PaneRef {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl From<PaneRef> for String {
    fn from(r: PaneRef) -> Self {
        match r {
            PaneRef::Active => PaneRef::ACTIVE_SENTINEL.to_string(),
            PaneRef::Id(id) => id.to_string(),
        }
    }
}

impl From<PaneId> for PaneRef {
    fn from(id: PaneId) -> Self {
        Self::Id(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_parses_to_active() {
        assert_eq!(PaneRef::from("active"), PaneRef::Active);
        assert_eq!(PaneRef::from("p1"), PaneRef::Id(PaneId::new("p1")));
    }

    #[test]
    fn test_resolve_active() {
        let p1 = PaneId::new("p1");
        assert_eq!(PaneRef::Active.resolve(Some(&p1)), Some(p1.clone()));
        assert_eq!(PaneRef::Active.resolve(None), None);
    }

    #[test]
    fn test_resolve_concrete_ignores_focus() {
        let p1 = PaneId::new("p1");
        let p2 = PaneId::new("p2");
        assert_eq!(PaneRef::Id(p2.clone()).resolve(Some(&p1)), Some(p2));
    }

    #[test]
    fn test_serde_wire_forms() {
        let r: PaneRef = serde_json::from_str("\"active\"").unwrap();
        assert!(r.is_active_sentinel());
        let r: PaneRef = serde_json::from_str("\"p7\"").unwrap();
        assert_eq!(r, PaneRef::Id(PaneId::new("p7")));
        assert_eq!(serde_json::to_string(&PaneRef::Active).unwrap(), "\"active\"");
    }
}
