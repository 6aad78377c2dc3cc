//! Uniform action dispatch for the Deck pane workspace.
//!
//! Every workspace operation, from opening and splitting panes to tabs,
//! content reads and writes, browser navigation, and dialogs, is an
//! [`Action`] behind one name-keyed [`ActionRegistry`]. A dispatch call resolves the pane
//! reference, checks the host's capabilities, runs the handler, and always
//! returns a JSON object with a boolean `success` field.
//!
//! The registry is an explicit value built at the composition root; shared
//! workspace state travels in an [`ActionContext`], and everything that
//! touches a real surface goes through the [`Host`] trait. The bundled
//! [`WorkspaceHost`] is a complete in-process host for headless embedders
//! and tests.
//!
//! ```no_run
//! # async fn demo() {
//! use deck_actions::{ActionRegistry, WorkspaceHost};
//! use serde_json::json;
//!
//! let host = WorkspaceHost::new();
//! let ctx = host.context();
//! let registry = ActionRegistry::new();
//!
//! let result = registry
//!     .dispatch("open_pane", json!({"type": "editor", "path": "/src/main.rs"}), &ctx)
//!     .await;
//! assert_eq!(result["success"], true);
//! # }
//! ```

pub mod action;
pub mod args;
pub mod capability;
pub mod context;
pub mod error;
pub mod handlers;
pub mod host;
pub mod registry;
pub mod workspace;

// Re-exports
pub use action::{Action, ActionDefinition};
pub use capability::{Capability, CapabilitySet};
pub use context::ActionContext;
pub use error::ActionError;
pub use host::{HistoryDirection, Host, NotifyLevel, PickerKind};
pub use registry::ActionRegistry;
pub use workspace::{HostEvent, WorkspaceHost};
