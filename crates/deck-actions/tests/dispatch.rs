//! End-to-end dispatch scenarios against the in-process host.

use deck_actions::{
    ActionRegistry, Capability, CapabilitySet, HostEvent, NotifyLevel, PickerKind, WorkspaceHost,
};
use deck_core::{ContentType, PaneId, PaneState};
use deck_layout::{LayoutNode, SplitDirection};
use serde_json::{json, Value};
use std::sync::Arc;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

async fn open_pane(
    registry: &ActionRegistry,
    host: &Arc<WorkspaceHost>,
    args: Value,
) -> PaneId {
    init_tracing();
    let result = registry.dispatch("open_pane", args, &host.context()).await;
    assert_eq!(result["success"], true, "open_pane failed: {}", result);
    PaneId::new(result["paneId"].as_str().unwrap())
}

#[tokio::test]
async fn test_first_pane_becomes_root() {
    let host = WorkspaceHost::new();
    let registry = ActionRegistry::new();

    let pane = open_pane(
        &registry,
        &host,
        json!({"type": "editor", "path": "/src/main.rs"}),
    )
    .await;

    assert_eq!(host.layout(), Some(LayoutNode::content(pane.clone())));
    assert_eq!(host.active_pane(), Some(pane.clone()));
    assert_eq!(host.pane_state(&pane).unwrap().content_id, "/src/main.rs");

    let listed = registry
        .dispatch("list_panes", json!({}), &host.context())
        .await;
    assert_eq!(listed["count"], 1);
    assert_eq!(listed["panes"][0]["nodePath"], json!([]));
    assert_eq!(listed["panes"][0]["isActive"], true);
}

#[tokio::test]
async fn test_second_pane_splits_the_first() {
    let host = WorkspaceHost::new();
    let registry = ActionRegistry::new();

    let first = open_pane(&registry, &host, json!({"type": "editor", "path": "/a.rs"})).await;
    let second = open_pane(&registry, &host, json!({"type": "terminal"})).await;

    // Default position is right: first at [0], new pane at [1]
    let listed = registry
        .dispatch("list_panes", json!({}), &host.context())
        .await;
    assert_eq!(listed["count"], 2);
    assert_eq!(listed["panes"][0]["id"], first.as_str());
    assert_eq!(listed["panes"][0]["nodePath"], json!([0]));
    assert_eq!(listed["panes"][1]["id"], second.as_str());
    assert_eq!(listed["panes"][1]["nodePath"], json!([1]));
    assert_eq!(listed["panes"][1]["isActive"], true);

    match host.layout().unwrap() {
        LayoutNode::Split {
            direction, sizes, ..
        } => {
            assert_eq!(direction, SplitDirection::Horizontal);
            assert_eq!(sizes, vec![0.5, 0.5]);
        }
        other => panic!("expected a split root, got {:?}", other),
    }
}

#[tokio::test]
async fn test_open_pane_position_left_inserts_before() {
    let host = WorkspaceHost::new();
    let registry = ActionRegistry::new();

    let first = open_pane(&registry, &host, json!({"type": "editor", "path": "/a.rs"})).await;
    let second = open_pane(&registry, &host, json!({"type": "chat", "position": "left"})).await;

    let ids = host.layout().unwrap().pane_ids();
    assert_eq!(ids, vec![second, first]);
}

#[tokio::test]
async fn test_list_panes_title_precedence() {
    let host = WorkspaceHost::new();
    let registry = ActionRegistry::new();

    open_pane(
        &registry,
        &host,
        json!({"type": "editor", "path": "/deep/dir/notes.md"}),
    )
    .await;
    open_pane(&registry, &host, json!({"type": "browser", "url": "https://example.com"})).await;
    let chat = open_pane(&registry, &host, json!({"type": "chat"})).await;

    let listed = registry
        .dispatch("list_panes", json!({}), &host.context())
        .await;
    let titles: Vec<&str> = listed["panes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["title"].as_str().unwrap())
        .collect();
    // Path panes take the last segment; the url keeps its last segment too;
    // the chat pane's generated id has no separator and shows verbatim.
    assert_eq!(titles[0], "notes.md");
    assert_eq!(titles[1], "example.com");
    assert_eq!(titles[2], host.pane_state(&chat).unwrap().content_id);
}

#[tokio::test]
async fn test_focus_pane_by_id_and_unknown() {
    let host = WorkspaceHost::new();
    let registry = ActionRegistry::new();

    let first = open_pane(&registry, &host, json!({"type": "editor", "path": "/a.rs"})).await;
    open_pane(&registry, &host, json!({"type": "terminal"})).await;
    assert_ne!(host.active_pane(), Some(first.clone()));

    let result = registry
        .dispatch("focus_pane", json!({"paneId": first.as_str()}), &host.context())
        .await;
    assert_eq!(result["success"], true);
    assert_eq!(host.active_pane(), Some(first));

    let result = registry
        .dispatch("focus_pane", json!({"paneId": "no-such-pane"}), &host.context())
        .await;
    assert_eq!(result["success"], false);
    assert!(result["error"].as_str().unwrap().contains("no-such-pane"));
}

#[tokio::test]
async fn test_close_pane_hoists_and_refocuses() {
    let host = WorkspaceHost::new();
    let registry = ActionRegistry::new();

    let first = open_pane(&registry, &host, json!({"type": "editor", "path": "/a.rs"})).await;
    let second = open_pane(&registry, &host, json!({"type": "terminal"})).await;

    // Close the active (second) pane; the split collapses back to a leaf
    let result = registry
        .dispatch("close_pane", json!({}), &host.context())
        .await;
    assert_eq!(result["success"], true);
    assert_eq!(result["closedPaneId"], second.as_str());

    assert_eq!(host.layout(), Some(LayoutNode::content(first.clone())));
    assert!(host.pane_state(&second).is_none());
    assert_eq!(host.active_pane(), Some(first));
}

#[tokio::test]
async fn test_close_last_pane_empties_workspace() {
    let host = WorkspaceHost::new();
    let registry = ActionRegistry::new();

    open_pane(&registry, &host, json!({"type": "editor", "path": "/a.rs"})).await;
    let result = registry
        .dispatch("close_pane", json!({}), &host.context())
        .await;
    assert_eq!(result["success"], true);

    assert_eq!(host.layout(), None);
    assert_eq!(host.active_pane(), None);

    let listed = registry
        .dispatch("list_panes", json!({}), &host.context())
        .await;
    assert_eq!(listed["count"], 0);
}

#[tokio::test]
async fn test_split_pane_vertical_stacks() {
    let host = WorkspaceHost::new();
    let registry = ActionRegistry::new();

    let first = open_pane(&registry, &host, json!({"type": "editor", "path": "/a.rs"})).await;
    let result = registry
        .dispatch(
            "split_pane",
            json!({"direction": "vertical", "type": "terminal"}),
            &host.context(),
        )
        .await;
    assert_eq!(result["success"], true);
    let new_pane = PaneId::new(result["paneId"].as_str().unwrap());

    match host.layout().unwrap() {
        LayoutNode::Split {
            direction,
            children,
            ..
        } => {
            assert_eq!(direction, SplitDirection::Vertical);
            assert_eq!(children[0], LayoutNode::content(first));
            assert_eq!(children[1], LayoutNode::content(new_pane.clone()));
        }
        other => panic!("expected a split root, got {:?}", other),
    }
    assert_eq!(host.active_pane(), Some(new_pane));
}

#[tokio::test]
async fn test_write_file_then_read_pane() {
    let host = WorkspaceHost::new();
    let registry = ActionRegistry::new();

    let pane = open_pane(&registry, &host, json!({"type": "editor", "path": "/a.rs"})).await;
    let result = registry
        .dispatch(
            "write_file",
            json!({"content": "fn main() {}"}),
            &host.context(),
        )
        .await;
    assert_eq!(result["success"], true);
    assert_eq!(result["path"], "/a.rs");
    assert_eq!(result["modified"], true);

    let read = registry.dispatch("read_pane", json!({}), &host.context()).await;
    assert_eq!(read["success"], true);
    assert_eq!(read["paneId"], pane.as_str());
    assert_eq!(read["contentType"], "editor");
    assert_eq!(read["content"], "fn main() {}");
    assert_eq!(read["modified"], true);
}

#[tokio::test]
async fn test_write_file_retarget_triggers_reload() {
    let host = WorkspaceHost::new();
    let registry = ActionRegistry::new();

    let pane = open_pane(&registry, &host, json!({"type": "editor", "path": "/a.rs"})).await;
    registry
        .dispatch(
            "write_file",
            json!({"content": "x", "path": "/b.rs"}),
            &host.context(),
        )
        .await;

    assert_eq!(host.pane_state(&pane).unwrap().content_id, "/b.rs");
    assert!(host.events().contains(&HostEvent::PaneUpdated {
        pane,
        skip_reload: false,
    }));
}

#[tokio::test]
async fn test_run_terminal_queues_without_mutating_state() {
    let host = WorkspaceHost::new();
    let registry = ActionRegistry::new();

    let pane = open_pane(&registry, &host, json!({"type": "terminal"})).await;
    let before = host.pane_state(&pane).unwrap();

    let result = registry
        .dispatch(
            "run_terminal",
            json!({"command": "cargo check"}),
            &host.context(),
        )
        .await;
    assert_eq!(result["success"], true);
    assert_eq!(result["queued"], true);

    // Intent accepted: the command is recorded, the registry untouched
    assert_eq!(host.pane_state(&pane).unwrap(), before);
    assert!(host.events().contains(&HostEvent::TerminalCommand {
        pane,
        command: "cargo check".to_string(),
    }));
}

#[tokio::test]
async fn test_run_terminal_rejects_wrong_pane_type() {
    let host = WorkspaceHost::new();
    let registry = ActionRegistry::new();

    open_pane(&registry, &host, json!({"type": "editor", "path": "/a.rs"})).await;
    let result = registry
        .dispatch("run_terminal", json!({"command": "ls"}), &host.context())
        .await;
    assert_eq!(result["success"], false);
    let msg = result["error"].as_str().unwrap();
    assert!(msg.contains("terminal"));
    assert!(msg.contains("editor"));
}

#[tokio::test]
async fn test_write_file_against_terminal_leaves_registry_untouched() {
    let host = WorkspaceHost::new();
    let registry = ActionRegistry::new();

    let pane = open_pane(&registry, &host, json!({"type": "terminal"})).await;
    let before = host.pane_state(&pane).unwrap();

    let result = registry
        .dispatch("write_file", json!({"content": "oops"}), &host.context())
        .await;
    assert_eq!(result["success"], false);
    assert_eq!(host.pane_state(&pane).unwrap(), before);
}

#[tokio::test]
async fn test_capability_gating() {
    let host = WorkspaceHost::with_capabilities(
        CapabilitySet::full().without(Capability::Notify),
    );
    let registry = ActionRegistry::new();

    let result = registry
        .dispatch("notify", json!({"message": "hi"}), &host.context())
        .await;
    assert_eq!(result["success"], false);
    assert!(result["error"].as_str().unwrap().contains("notify"));
    // The handler never ran
    assert!(host.events().is_empty());
}

#[tokio::test]
async fn test_active_sentinel_with_no_focus() {
    let host = WorkspaceHost::new();
    let registry = ActionRegistry::new();

    let result = registry
        .dispatch("close_pane", json!({"paneId": "active"}), &host.context())
        .await;
    assert_eq!(result["success"], false);
    assert!(result["error"].as_str().unwrap().contains("No active pane"));
}

#[tokio::test]
async fn test_get_selection_never_fails() {
    let host = WorkspaceHost::new();
    let registry = ActionRegistry::new();

    // No panes, no focus: still a success with a null selection
    let result = registry
        .dispatch("get_selection", json!({}), &host.context())
        .await;
    assert_eq!(result["success"], true);
    assert_eq!(result["selection"], Value::Null);

    let pane = open_pane(&registry, &host, json!({"type": "editor", "path": "/a.rs"})).await;
    host.insert_pane(pane.clone(), {
        let mut state = host.pane_state(&pane).unwrap();
        state.selection = Some("let x".to_string());
        state
    });
    let result = registry
        .dispatch("get_selection", json!({}), &host.context())
        .await;
    assert_eq!(result["selection"], "let x");
}

#[tokio::test]
async fn test_notify_confirm_and_picker() {
    let host = WorkspaceHost::new();
    let registry = ActionRegistry::new();
    let ctx = host.context();

    let result = registry
        .dispatch(
            "notify",
            json!({"message": "saved", "type": "success", "duration": 2000}),
            &ctx,
        )
        .await;
    assert_eq!(result["success"], true);
    // notify echoes its inputs back
    assert_eq!(result["message"], "saved");
    assert_eq!(result["type"], "success");
    assert_eq!(result["duration"], 2000);
    assert!(host.events().contains(&HostEvent::Notified {
        message: "saved".to_string(),
        level: NotifyLevel::Success,
        duration_ms: Some(2000),
    }));

    host.set_confirm_response(false);
    let result = registry
        .dispatch("confirm", json!({"message": "Discard changes?"}), &ctx)
        .await;
    assert_eq!(result["success"], true);
    assert_eq!(result["confirmed"], false);

    // Cancelled picker is a success too
    let result = registry.dispatch("open_file_picker", json!({}), &ctx).await;
    assert_eq!(result["success"], true);
    assert_eq!(result["canceled"], true);

    host.set_picker_response(Some(vec!["/tmp/a".to_string(), "/tmp/b".to_string()]));
    let result = registry
        .dispatch("open_file_picker", json!({"multiple": true}), &ctx)
        .await;
    assert_eq!(result["canceled"], false);
    assert_eq!(result["paths"], json!(["/tmp/a", "/tmp/b"]));

    // The `type` argument selects directory picking
    host.set_picker_response(Some(vec!["/tmp/dir".to_string()]));
    let result = registry
        .dispatch("open_file_picker", json!({"type": "directory"}), &ctx)
        .await;
    assert_eq!(result["canceled"], false);
    assert!(host.events().contains(&HostEvent::FilePickerOpened {
        kind: PickerKind::Directory,
        multiple: false,
    }));
}

#[tokio::test]
async fn test_notify_rejects_bad_level() {
    let host = WorkspaceHost::new();
    let registry = ActionRegistry::new();

    let result = registry
        .dispatch(
            "notify",
            json!({"message": "hi", "type": "shouting"}),
            &host.context(),
        )
        .await;
    assert_eq!(result["success"], false);
    assert!(result["error"].as_str().unwrap().contains("shouting"));
}

#[tokio::test]
async fn test_chat_send_and_switch_npc() {
    let host = WorkspaceHost::new();
    let registry = ActionRegistry::new();
    let ctx = host.context();

    let pane = open_pane(&registry, &host, json!({"type": "chat"})).await;

    let result = registry
        .dispatch("send_message", json!({"message": "hello"}), &ctx)
        .await;
    assert_eq!(result["success"], true);
    assert!(host.events().contains(&HostEvent::ChatMessageQueued {
        pane: pane.clone(),
        message: "hello".to_string(),
    }));

    let result = registry
        .dispatch("switch_npc", json!({"npcName": "navigator"}), &ctx)
        .await;
    assert_eq!(result["success"], true, "switch_npc rejected npcName: {}", result);
    assert_eq!(
        host.pane_state(&pane).unwrap().selected_npc.as_deref(),
        Some("navigator")
    );

    // Chat-only actions refuse other pane types
    open_pane(&registry, &host, json!({"type": "terminal"})).await;
    let result = registry
        .dispatch("send_message", json!({"message": "hello"}), &ctx)
        .await;
    assert_eq!(result["success"], false);
}

#[tokio::test]
async fn test_read_pane_chat_windows_transcript() {
    let host = WorkspaceHost::new();
    let registry = ActionRegistry::new();

    let pane = open_pane(&registry, &host, json!({"type": "chat"})).await;
    let mut state = host.pane_state(&pane).unwrap();
    state.chat_messages = Some(
        (0..60)
            .map(|i| deck_core::ChatMessage {
                role: "user".to_string(),
                content: format!("message {}", i),
                timestamp: None,
            })
            .collect(),
    );
    host.insert_pane(pane.clone(), state);

    let read = registry.dispatch("read_pane", json!({}), &host.context()).await;
    assert_eq!(read["messageCount"], 60);
    let window = read["messages"].as_array().unwrap();
    // Trailing 50 messages, oldest-first
    assert_eq!(window.len(), 50);
    assert_eq!(window[0]["content"], "message 10");
    assert_eq!(window[49]["content"], "message 59");
}

#[tokio::test]
async fn test_browser_navigate_and_info() {
    let host = WorkspaceHost::new();
    let registry = ActionRegistry::new();
    let ctx = host.context();

    let pane = open_pane(
        &registry,
        &host,
        json!({"type": "browser", "url": "https://example.com"}),
    )
    .await;

    let result = registry
        .dispatch("navigate", json!({"url": "https://docs.rs"}), &ctx)
        .await;
    assert_eq!(result["success"], true);
    assert_eq!(result["url"], "https://docs.rs");

    let info = registry.dispatch("get_browser_info", json!({}), &ctx).await;
    assert_eq!(info["url"], "https://docs.rs");
    assert_eq!(info["title"], Value::Null);

    let result = registry.dispatch("browser_back", json!({}), &ctx).await;
    assert_eq!(result["success"], true);
    assert_eq!(result["requested"], true);
    assert!(host.events().iter().any(|e| matches!(
        e,
        HostEvent::HistoryNavigated { pane: p, .. } if *p == pane
    )));
}

#[tokio::test]
async fn test_zen_mode_records_toggle() {
    let host = WorkspaceHost::new();
    let registry = ActionRegistry::new();

    let pane = open_pane(&registry, &host, json!({"type": "editor", "path": "/a.rs"})).await;
    let result = registry
        .dispatch("zen_mode", json!({}), &host.context())
        .await;
    assert_eq!(result["success"], true);
    assert!(host.events().contains(&HostEvent::ZenToggled { pane }));
}

#[tokio::test]
async fn test_stale_reference_after_close() {
    let host = WorkspaceHost::new();
    let registry = ActionRegistry::new();
    let ctx = host.context();

    let first = open_pane(&registry, &host, json!({"type": "editor", "path": "/a.rs"})).await;
    let second = open_pane(&registry, &host, json!({"type": "terminal"})).await;

    registry
        .dispatch("close_pane", json!({"paneId": second.as_str()}), &ctx)
        .await;

    // A reference to the closed pane fails closed; the survivor still works
    let result = registry
        .dispatch("focus_pane", json!({"paneId": second.as_str()}), &ctx)
        .await;
    assert_eq!(result["success"], false);

    let result = registry
        .dispatch("focus_pane", json!({"paneId": first.as_str()}), &ctx)
        .await;
    assert_eq!(result["success"], true);
}

#[tokio::test]
async fn test_open_pane_with_stale_focus_falls_back_to_root() {
    let host = WorkspaceHost::new();
    let registry = ActionRegistry::new();

    open_pane(&registry, &host, json!({"type": "editor", "path": "/a.rs"})).await;
    // Focus a pane the tree never held
    host.set_active_pane(Some(PaneId::new("ghost")));
    host.insert_pane(PaneId::new("ghost"), PaneState::new(ContentType::Editor, "/g.rs"));

    let result = registry
        .dispatch("open_pane", json!({"type": "terminal"}), &host.context())
        .await;
    assert_eq!(result["success"], true);
    // The split landed at the root instead of failing
    assert_eq!(host.layout().unwrap().pane_ids().len(), 2);
}
