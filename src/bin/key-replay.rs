//! Key replay - smoke test for the key router
//!
//! Replays a JSON script of key events, route changes and suspensions against
//! a router wired to an in-memory text target, and prints what happened.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin key-replay -- script.json
//! cargo run --bin key-replay -- script.json --config ~/.keyfocus/config.json --verbose
//! ```
//!
//! # Script format
//!
//! ```json
//! {"steps": [
//!   {"type": "key", "kind": "down", "physical": 4, "key": "a", "character": "a"},
//!   {"type": "push", "route": {"kind": "dialog"}},
//!   {"type": "pop", "route": {"kind": "dialog"}},
//!   {"type": "suspend"},
//!   {"type": "resume"},
//!   {"type": "blur"}
//! ]}
//! ```

use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;

use keyfocus::config::{self, Config};
use keyfocus::error::ResultExt;
use keyfocus::keys::{KeyEvent, KeyEventKind, LogicalKey, Modifiers, PhysicalKey};
use keyfocus::logging;
use keyfocus::modal::{RouteDescriptor, RouteModalTracker};
use keyfocus::shortcuts::ShortcutAction;
use keyfocus::text::{FocusHandle, FocusNode, TextBuffer, TextController};
use keyfocus::{GlobalKeyRouter, ResumeHandle};

#[derive(Debug, Parser)]
#[command(name = "key-replay", about = "Replay key events through the key router")]
struct Args {
    /// JSON script to replay
    script: PathBuf,

    /// Config file (defaults to ~/.keyfocus/config.json)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log every routing decision at debug level
    #[arg(long, short)]
    verbose: bool,
}

#[derive(Debug, Deserialize)]
struct Script {
    steps: Vec<Step>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
enum Step {
    Key {
        kind: KeyEventKind,
        physical: u64,
        key: String,
        #[serde(default)]
        character: Option<String>,
        #[serde(default)]
        modifiers: Modifiers,
    },
    Push {
        route: RouteDescriptor,
    },
    Pop {
        route: RouteDescriptor,
    },
    Remove {
        route: RouteDescriptor,
    },
    Replace {
        #[serde(default)]
        new_route: Option<RouteDescriptor>,
        #[serde(default)]
        old_route: Option<RouteDescriptor>,
    },
    Suspend,
    Resume,
    Focus,
    Blur,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _guard = logging::init();

    let mut config = match &args.config {
        Some(path) => config::load_config_from(path)
            .warn_on_err()
            .unwrap_or_default(),
        None => config::load_config(),
    };
    config.trace_key_events |= args.verbose;

    let content = fs::read_to_string(&args.script)
        .with_context(|| format!("reading script {}", args.script.display()))?;
    let script: Script = serde_json::from_str(&content)
        .with_context(|| format!("parsing script {}", args.script.display()))?;

    let text = replay(&config, &script)?;
    println!("final text: {:?}", text);
    Ok(())
}

fn replay(config: &Config, script: &Script) -> Result<String> {
    let router = GlobalKeyRouter::from_config(config).context("building router")?;
    let tracker = RouteModalTracker::with_name_hint(config.modal.name_hint.clone());
    router.connect_modal_tracker(&tracker);

    let focus = FocusNode::new();
    let controller = TextController::new();
    router.register_target(focus.clone(), controller.clone());

    for action in [
        ShortcutAction::Escape,
        ShortcutAction::NewWorktree,
        ShortcutAction::NewChat,
    ] {
        router.set_shortcut_callback(action, move || println!("  shortcut: {}", action.name()));
    }

    let mut held: Vec<ResumeHandle> = Vec::new();
    for (index, step) in script.steps.iter().enumerate() {
        match step {
            Step::Key {
                kind,
                physical,
                key,
                character,
                modifiers,
            } => {
                let event = KeyEvent {
                    kind: *kind,
                    physical: PhysicalKey(*physical),
                    logical: LogicalKey::from_name(key),
                    character: character.clone(),
                    modifiers: *modifiers,
                };
                let result = router.handle_key_event(&event);
                println!(
                    "{:>3} key {:?} {} -> {:?} text={:?}",
                    index,
                    kind,
                    event.logical,
                    result,
                    controller.value().text
                );
            }
            Step::Push { route } => {
                tracker.did_push(route, None);
                print_modal(index, "push", &tracker, &router);
            }
            Step::Pop { route } => {
                tracker.did_pop(route, None);
                print_modal(index, "pop", &tracker, &router);
            }
            Step::Remove { route } => {
                tracker.did_remove(route, None);
                print_modal(index, "remove", &tracker, &router);
            }
            Step::Replace {
                new_route,
                old_route,
            } => {
                tracker.did_replace(new_route.as_ref(), old_route.as_ref());
                print_modal(index, "replace", &tracker, &router);
            }
            Step::Suspend => {
                held.push(router.suspend());
                println!("{:>3} suspend suspend_count={}", index, router.suspend_count());
            }
            Step::Resume => {
                let released = held.pop().is_some_and(|handle| handle.resume());
                println!(
                    "{:>3} resume released={} suspend_count={}",
                    index,
                    released,
                    router.suspend_count()
                );
            }
            Step::Focus => {
                focus.request_focus();
                println!("{:>3} focus", index);
            }
            Step::Blur => {
                focus.blur();
                println!("{:>3} blur", index);
            }
        }
    }

    let text = controller.value().text;
    for handle in held {
        handle.resume();
    }
    router.dispose();
    Ok(text)
}

fn print_modal(index: usize, what: &str, tracker: &RouteModalTracker, router: &GlobalKeyRouter) {
    println!(
        "{:>3} {} open_modals={} suspend_count={}",
        index,
        what,
        tracker.open_modal_count(),
        router.suspend_count()
    );
}
