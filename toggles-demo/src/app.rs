//! The playground: mounts a scene into a host and plays the owning parent.
//!
//! Controlled entries keep their value in a parent-side [`State`]. The
//! widget's change handler writes to it, and after every interaction turn
//! the playground re-renders those entries with the new value.

use log::{debug, info};
use toggles::{
    Checkbox, CheckboxWidget, Handle, Host, HostError, State, Switch, SwitchWidget, WidgetResult,
};
use unicode_width::UnicodeWidthStr;
use webdom::{NodeRef, to_html_pretty};

use crate::scene::{Scene, SceneError, WidgetKind, WidgetConfig};

#[derive(Debug, Clone, Copy)]
enum Mounted {
    Checkbox(Handle<CheckboxWidget>),
    Switch(Handle<SwitchWidget>),
}

#[derive(Debug)]
struct Entry {
    config: WidgetConfig,
    mounted: Mounted,
    /// Parent-held value for controlled entries.
    owner: Option<State<bool>>,
    indeterminate: bool,
}

#[derive(Debug)]
pub struct Playground {
    host: Host,
    entries: Vec<Entry>,
}

impl Playground {
    pub fn new(scene: &Scene) -> Result<Self, SceneError> {
        let mut host = Host::new();
        let mut entries = Vec::with_capacity(scene.widgets.len());

        for (index, config) in scene.widgets.iter().enumerate() {
            let owner = config.checked.map(State::new);
            let checked = owner.as_ref().map(State::get);
            let mounted = match config.widget_kind(index)? {
                WidgetKind::Checkbox => Mounted::Checkbox(host.mount(
                    with_owner(config.checkbox(checked, config.indeterminate), owner.as_ref()),
                )),
                WidgetKind::Switch => Mounted::Switch(
                    host.mount(with_owner_switch(config.switch(checked), owner.as_ref())),
                ),
            };
            entries.push(Entry {
                config: config.clone(),
                mounted,
                owner,
                indeterminate: config.indeterminate,
            });
        }

        info!("[playground] mounted {} widget(s)", entries.len());
        Ok(Self { host, entries })
    }

    pub fn html(&self) -> String {
        to_html_pretty(self.host.document().root())
    }

    /// Feed raw terminal events to the host, then let owners re-render.
    pub fn handle_terminal_events(
        &mut self,
        raw: &[crossterm::event::Event],
    ) -> Result<bool, HostError> {
        let changed = self
            .host
            .handle_terminal_events(raw)
            .iter()
            .any(WidgetResult::is_handled);
        if changed {
            self.sync_owners()?;
        }
        Ok(changed)
    }

    /// Click an element, then let owners re-render.
    #[cfg(test)]
    pub fn click(&mut self, target: &NodeRef) -> Result<WidgetResult, HostError> {
        let result = self.host.click(target);
        if result.is_handled() {
            self.sync_owners()?;
        }
        Ok(result)
    }

    /// Flip the indeterminate overlay of the focused checkbox.
    ///
    /// Returns false when focus is not on a checkbox.
    pub fn toggle_indeterminate(&mut self) -> Result<bool, HostError> {
        let Some(index) = self.focused_entry()? else {
            return Ok(false);
        };
        let entry = &mut self.entries[index];
        let Mounted::Checkbox(handle) = entry.mounted else {
            return Ok(false);
        };
        entry.indeterminate = !entry.indeterminate;
        debug!(
            "[playground] {} indeterminate -> {}",
            entry.config.display_label(),
            entry.indeterminate
        );
        let props = with_owner(
            entry
                .config
                .checkbox(entry.owner.as_ref().map(State::get), entry.indeterminate),
            entry.owner.as_ref(),
        );
        self.host.rerender(&handle, props)?;
        Ok(true)
    }

    /// Re-render controlled entries with their owner's current value.
    fn sync_owners(&mut self) -> Result<(), HostError> {
        for entry in &self.entries {
            let Some(owner) = &entry.owner else { continue };
            let value = Some(owner.get());
            match entry.mounted {
                Mounted::Checkbox(handle) => {
                    let props = entry.config.checkbox(value, entry.indeterminate);
                    self.host.rerender(&handle, with_owner(props, Some(owner)))?;
                }
                Mounted::Switch(handle) => {
                    let props = entry.config.switch(value);
                    self.host.rerender(&handle, with_owner_switch(props, Some(owner)))?;
                }
            }
        }
        Ok(())
    }

    fn focused_entry(&self) -> Result<Option<usize>, HostError> {
        let Some(focused) = self.host.focus().focused() else {
            return Ok(None);
        };
        for (index, entry) in self.entries.iter().enumerate() {
            if &self.control(entry)? == focused {
                return Ok(Some(index));
            }
        }
        Ok(None)
    }

    fn control(&self, entry: &Entry) -> Result<NodeRef, HostError> {
        match &entry.mounted {
            Mounted::Checkbox(handle) => self.host.control(handle),
            Mounted::Switch(handle) => self.host.control(handle),
        }
    }

    fn is_checked(&self, entry: &Entry) -> Result<bool, HostError> {
        match &entry.mounted {
            Mounted::Checkbox(handle) => self.host.is_checked(handle),
            Mounted::Switch(handle) => self.host.is_checked(handle),
        }
    }

    /// One text line per widget, labels aligned in a column.
    pub fn preview(&self) -> Result<Vec<String>, HostError> {
        let focused = self.focused_entry()?;
        let width = self
            .entries
            .iter()
            .map(|entry| entry.config.display_label().width())
            .max()
            .unwrap_or(0);

        let mut lines = Vec::with_capacity(self.entries.len());
        for (index, entry) in self.entries.iter().enumerate() {
            let checked = self.is_checked(entry)?;
            let glyph = match entry.mounted {
                Mounted::Checkbox(_) if entry.indeterminate => "[-]",
                Mounted::Checkbox(_) if checked => "[x]",
                Mounted::Checkbox(_) => "[ ]",
                Mounted::Switch(_) if checked => "(==o)",
                Mounted::Switch(_) => "(o==)",
            };
            let label = entry.config.display_label();
            let padding = " ".repeat(width - label.width());
            let marker = if focused == Some(index) { '>' } else { ' ' };

            let mut notes = vec![if entry.owner.is_some() {
                "controlled"
            } else {
                "uncontrolled"
            }];
            if entry.config.disabled {
                notes.push("disabled");
            }
            lines.push(format!(
                "{marker} {glyph:<5} {label}{padding}  {}",
                notes.join(", ")
            ));
        }
        Ok(lines)
    }
}

fn with_owner(props: Checkbox, owner: Option<&State<bool>>) -> Checkbox {
    match owner {
        Some(owner) => {
            let owner = owner.clone();
            props.on_change(move |checked| owner.set(checked))
        }
        None => props,
    }
}

fn with_owner_switch(props: Switch, owner: Option<&State<bool>>) -> Switch {
    match owner {
        Some(owner) => {
            let owner = owner.clone();
            props.on_change(move |checked| owner.set(checked))
        }
        None => props,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playground(source: &str) -> Playground {
        Playground::new(&Scene::parse(source).unwrap()).unwrap()
    }

    #[test]
    fn test_controlled_entry_follows_owner() {
        let mut pg = playground("[[widget]]\nkind = \"switch\"\nchecked = false\n");
        let control = pg.control(&pg.entries[0]).unwrap();

        pg.click(&control).unwrap();
        assert!(pg.entries[0].owner.as_ref().unwrap().get());
        assert!(pg.is_checked(&pg.entries[0]).unwrap());

        pg.click(&control).unwrap();
        assert!(!pg.is_checked(&pg.entries[0]).unwrap());
    }

    #[test]
    fn test_toggle_indeterminate_needs_focused_checkbox() {
        let mut pg = playground(
            "[[widget]]\nkind = \"checkbox\"\nlabel = \"All\"\n\n[[widget]]\nkind = \"switch\"\n",
        );
        assert!(!pg.toggle_indeterminate().unwrap());

        pg.host.focus_next();
        assert!(pg.toggle_indeterminate().unwrap());
        assert!(pg.html().contains("aria-checked=\"mixed\""));

        pg.host.focus_next();
        assert!(!pg.toggle_indeterminate().unwrap());
    }

    #[test]
    fn test_preview_aligns_labels() {
        let pg = playground(
            "[[widget]]\nkind = \"checkbox\"\nlabel = \"Größe\"\ndefault_checked = true\n\n\
             [[widget]]\nkind = \"switch\"\nlabel = \"Wi-Fi long\"\ndisabled = true\n",
        );
        let lines = pg.preview().unwrap();
        assert_eq!(lines[0], "  [x]   Größe       uncontrolled");
        assert_eq!(lines[1], "  (o==) Wi-Fi long  uncontrolled, disabled");
    }

    #[test]
    fn test_html_lists_every_widget() {
        let pg = playground(
            "[[widget]]\nkind = \"checkbox\"\nid = \"terms\"\n\n[[widget]]\nkind = \"switch\"\naria_label = \"Wi-Fi\"\n",
        );
        let html = pg.html();
        assert!(html.contains("id=\"terms\""));
        assert!(html.contains("aria-label=\"Wi-Fi\""));
        assert_eq!(pg.host.len(), 2);
    }
}
