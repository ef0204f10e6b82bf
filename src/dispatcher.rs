//! Dispatcher: selection state plus the four host entry points.
//!
//! The host launcher drives this component through [`HostCallbacks`]:
//! request the catalog, ask for suggestions as the user types, execute
//! a chosen item, and signal configuration changes. Calls arrive one
//! at a time; nothing here runs in the background.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::catalog::{self, ActionKind, Item, Target};
use crate::clipboard;
use crate::config::Config;
use crate::registry::{self, Device};
use crate::request;
use crate::transport::Transport;

/// Which device is active and what the user last typed. Reset to empty
/// at startup, never persisted.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    pub device_id: String,
    pub input: String,
}

/// The contract a host adapter calls into.
pub trait HostCallbacks {
    /// Full catalog: device entries, or one guidance entry when empty.
    fn on_catalog_request(&mut self) -> Vec<Item>;

    /// Suggestions for the current input. The tail of `chain` tells us
    /// which device entry the user drilled into.
    fn on_suggest(&mut self, input: &str, chain: &[Item]) -> Vec<Item>;

    /// Execute a chosen item. `action` is the host's secondary-action
    /// id, if one was picked; dispatch is by item target alone, so it
    /// is accepted but unused.
    fn on_execute(&mut self, item: &Item, action: Option<&str>);

    /// Configuration store changed: reload and re-fetch devices.
    fn on_config_changed(&mut self);
}

pub struct Dispatcher {
    config: Config,
    config_path: Option<PathBuf>,
    transport: Transport,
    devices: Vec<Device>,
    selection: Selection,
}

impl Dispatcher {
    /// Load configuration and fetch the device list once.
    pub fn new(config_path: Option<&Path>) -> Self {
        let config = Config::load(config_path);
        let transport = Transport::new();
        let devices = registry::refresh(&transport, &config);
        info!("Dispatcher ready ({} devices)", devices.len());

        Self {
            config,
            config_path: config_path.map(PathBuf::from),
            transport,
            devices,
            selection: Selection::default(),
        }
    }

    /// Assemble from already-loaded parts; no device fetch happens.
    pub fn with_parts(config: Config, transport: Transport, devices: Vec<Device>) -> Self {
        Self {
            config,
            config_path: None,
            transport,
            devices,
            selection: Selection::default(),
        }
    }

    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    fn execute_action(&mut self, kind: ActionKind) {
        // Never attempt a push without a key and a selected device.
        if self.config.api_key.is_empty() {
            warn!("No API key configured, dropping '{}' action", kind.tag());
            return;
        }
        if self.selection.device_id.is_empty() {
            warn!("No device selected, dropping '{}' action", kind.tag());
            return;
        }

        let message = match kind {
            ActionKind::Clipboard => match clipboard::read_text() {
                Ok(contents) => request::clipboard_message(&contents),
                Err(e) => {
                    warn!("{e}, dropping clipboard action");
                    return;
                }
            },
            ActionKind::Notification => {
                request::notification_message(&self.config.notifications, &self.selection.input)
            }
            ActionKind::Download => request::link_message("file", &self.selection.input),
            ActionKind::Website => request::link_message("url", &self.selection.input),
            ActionKind::Find => request::find_message(),
            ActionKind::Speak => {
                request::speak_message(&self.config.tts_language, &self.selection.input)
            }
            ActionKind::App => request::app_message(&self.selection.input),
        };

        let url = request::push_url(&message, &self.selection.device_id, &self.config.api_key);
        info!("Sending '{}' to device {}", kind.tag(), self.selection.device_id);
        // Envelope errors are reported inside the transport; nothing
        // further to do with the response here.
        self.transport.send(&url);
    }
}

impl HostCallbacks for Dispatcher {
    fn on_catalog_request(&mut self) -> Vec<Item> {
        catalog::build_catalog(&self.devices, &self.config)
    }

    fn on_suggest(&mut self, input: &str, chain: &[Item]) -> Vec<Item> {
        if chain.is_empty() {
            return Vec::new();
        }

        if let Some(Item { target: Target::Device(id), .. }) = chain.last() {
            self.selection.device_id = id.clone();
        }
        self.selection.input = input.to_string();

        catalog::build_actions(&self.config, &self.selection.device_id, input)
    }

    fn on_execute(&mut self, item: &Item, _action: Option<&str>) {
        match &item.target {
            Target::Action(kind) => self.execute_action(*kind),
            // Guidance entries carry no action; device entries only
            // feed the selection chain.
            Target::Guidance | Target::Device(_) => {}
        }
    }

    fn on_config_changed(&mut self) {
        info!("Configuration changed, reloading");
        self.config = Config::load(self.config_path.as_deref());
        self.devices = registry::refresh(&self.transport, &self.config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn device_item(id: &str) -> Item {
        Item {
            label: format!("Join: {id}"),
            description: String::new(),
            target: Target::Device(id.into()),
        }
    }

    fn dispatcher(config: Config) -> Dispatcher {
        Dispatcher::with_parts(config, Transport::new(), Vec::new())
    }

    #[test]
    fn suggest_with_empty_chain_yields_nothing() {
        let mut dispatcher = dispatcher(Config::default());
        assert!(dispatcher.on_suggest("hello", &[]).is_empty());
        assert_eq!(dispatcher.selection().device_id, "");
    }

    #[test]
    fn device_tail_selects_device_and_stores_input() {
        let mut dispatcher = dispatcher(Config::default());
        let items = dispatcher.on_suggest("hello", &[device_item("d1")]);
        assert!(!items.is_empty());
        assert_eq!(dispatcher.selection().device_id, "d1");
        assert_eq!(dispatcher.selection().input, "hello");
    }

    #[test]
    fn selection_sticks_across_action_suggestions() {
        let mut dispatcher = dispatcher(Config::default());
        dispatcher.on_suggest("", &[device_item("d1")]);

        // Drilling into an action keeps the selected device; the input
        // is overwritten every cycle.
        let chain = [device_item("d1"), Item {
            label: "Speak: second".into(),
            description: String::new(),
            target: Target::Action(ActionKind::Speak),
        }];
        dispatcher.on_suggest("second", &chain);
        assert_eq!(dispatcher.selection().device_id, "d1");
        assert_eq!(dispatcher.selection().input, "second");

        dispatcher.on_suggest("", &[device_item("d2")]);
        assert_eq!(dispatcher.selection().device_id, "d2");
    }

    #[test]
    fn execute_without_api_key_is_a_guarded_no_op() {
        let mut dispatcher = dispatcher(Config::default());
        dispatcher.on_suggest("ring", &[device_item("d1")]);
        // Empty API key: must not attempt any network call.
        dispatcher.on_execute(
            &Item {
                label: "Find device".into(),
                description: String::new(),
                target: Target::Action(ActionKind::Find),
            },
            None,
        );
    }

    #[test]
    fn execute_without_device_is_a_guarded_no_op() {
        let config = Config { api_key: "k".into(), ..Config::default() };
        let mut dispatcher = dispatcher(config);
        dispatcher.on_execute(
            &Item {
                label: "Find device".into(),
                description: String::new(),
                target: Target::Action(ActionKind::Find),
            },
            None,
        );
        assert_eq!(dispatcher.selection().device_id, "");
    }

    #[test]
    fn guidance_and_device_items_execute_to_nothing() {
        let mut dispatcher = dispatcher(Config::default());
        dispatcher.on_execute(
            &Item {
                label: "Join: API key missing".into(),
                description: String::new(),
                target: Target::Guidance,
            },
            None,
        );
        dispatcher.on_execute(&device_item("d1"), None);
        assert_eq!(dispatcher.selection().device_id, "");
    }

    #[test]
    fn secondary_action_id_does_not_change_dispatch() {
        let mut dispatcher = dispatcher(Config::default());
        dispatcher.on_suggest("ring", &[device_item("d1")]);
        // Same guarded no-op whether or not the host passes an action id.
        dispatcher.on_execute(
            &Item {
                label: "Find device".into(),
                description: String::new(),
                target: Target::Action(ActionKind::Find),
            },
            Some("copy-to-clipboard"),
        );
        assert_eq!(dispatcher.selection().device_id, "d1");
    }
}
