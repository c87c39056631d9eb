//! Tabs widget: a roving-tabindex tab list bound to existing markup.
//!
//! Tabs and panels are paired by document order. Exactly one tab is selected
//! at a time; it alone carries `aria-selected=true`, `tabindex=0` and the
//! active class, and its panel alone is visible. Arrow keys move focus with
//! wraparound and, in automatic mode, activate as they move.

use std::fmt;

use crate::dom::node::NodeId;
use crate::dom::query::Selector;
use crate::event::dispatch::{Event, EventKind};
use crate::event::input::Key;
use crate::event::listener::{EventTarget, ListenerId};
use crate::page::Page;
use crate::widget::{AttachError, Widget};

// ---------------------------------------------------------------------------
// TabsConfig
// ---------------------------------------------------------------------------

/// Configuration for [`Tabs::attach`].
pub struct TabsConfig {
    container_key: String,
    tab_selector: Selector,
    panel_selector: Selector,
    active_class: String,
    auto_activate: bool,
    on_change: Option<Box<dyn FnMut(usize)>>,
}

impl TabsConfig {
    /// Configuration for the tab list whose container has the given id.
    pub fn new(container_key: impl Into<String>) -> Self {
        Self {
            container_key: container_key.into(),
            tab_selector: Selector::role("tab"),
            panel_selector: Selector::role("tabpanel"),
            active_class: "active".to_owned(),
            auto_activate: true,
            on_change: None,
        }
    }

    /// Selector for tab elements (builder). Default `role=tab`.
    pub fn tab_selector(mut self, tab_selector: Selector) -> Self {
        self.tab_selector = tab_selector;
        self
    }

    /// Selector for panel elements (builder). Default `role=tabpanel`.
    pub fn panel_selector(mut self, panel_selector: Selector) -> Self {
        self.panel_selector = panel_selector;
        self
    }

    /// Class applied to the selected tab (builder). Default `active`.
    pub fn active_class(mut self, active_class: impl Into<String>) -> Self {
        self.active_class = active_class.into();
        self
    }

    /// Whether arrow-key focus moves also activate (builder). Default `true`.
    /// With `false`, arrows only move focus; activation needs a click.
    pub fn auto_activate(mut self, auto_activate: bool) -> Self {
        self.auto_activate = auto_activate;
        self
    }

    /// Callback invoked with the index of each newly activated tab (builder).
    pub fn on_change(mut self, on_change: impl FnMut(usize) + 'static) -> Self {
        self.on_change = Some(Box::new(on_change));
        self
    }
}

impl fmt::Debug for TabsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabsConfig")
            .field("container_key", &self.container_key)
            .field("tab_selector", &self.tab_selector)
            .field("panel_selector", &self.panel_selector)
            .field("active_class", &self.active_class)
            .field("auto_activate", &self.auto_activate)
            .field("on_change", &self.on_change.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Tabs
// ---------------------------------------------------------------------------

/// A tab list controller.
///
/// # Examples
///
/// ```ignore
/// let mut tabs = Tabs::attach(&mut page, TabsConfig::new("features"))?;
/// tabs.activate_tab(&mut page, 2);
/// ```
#[derive(Debug)]
pub struct Tabs {
    container: NodeId,
    config: TabsConfig,
    tabs: Vec<NodeId>,
    panels: Vec<NodeId>,
    active_index: usize,
    click_listeners: Vec<ListenerId>,
    key_listeners: Vec<ListenerId>,
}

impl Tabs {
    /// Bind a tab list to the container with the configured id.
    ///
    /// The container must hold a `role=tablist` element and at least one tab.
    /// Panels are paired with tabs by document order; a count mismatch is
    /// logged once and the unpaired remainder is left alone. Tab 0 is
    /// activated as part of attaching, which fires the change callback.
    pub fn attach(page: &mut Page, config: TabsConfig) -> Result<Self, AttachError> {
        let container =
            page.dom
                .query_by_id(&config.container_key)
                .ok_or_else(|| AttachError::ContainerNotFound {
                    key: config.container_key.clone(),
                })?;

        let tablist_selector = Selector::role("tablist");
        if page.dom.first_within(container, &tablist_selector).is_none() {
            return Err(AttachError::MissingChild {
                container: config.container_key.clone(),
                selector: tablist_selector,
            });
        }

        let tabs = page.dom.query_within(container, &config.tab_selector);
        if tabs.is_empty() {
            return Err(AttachError::NoMatches {
                container: config.container_key.clone(),
                selector: config.tab_selector.clone(),
            });
        }
        let mut panels = page.dom.query_within(container, &config.panel_selector);
        if tabs.len() != panels.len() {
            tracing::warn!(
                "tab/panel count mismatch in #{}: {} tabs, {} panels",
                config.container_key,
                tabs.len(),
                panels.len()
            );
            // Pair index-wise up to the tab count; surplus panels are left
            // alone entirely.
            panels.truncate(tabs.len());
        }

        let mut widget = Self {
            container,
            config,
            tabs,
            panels,
            active_index: 0,
            click_listeners: Vec::new(),
            key_listeners: Vec::new(),
        };
        widget.wire_aria(page);
        for &tab in &widget.tabs {
            widget
                .click_listeners
                .push(page.add_listener(EventTarget::Node(tab), EventKind::Click));
            widget
                .key_listeners
                .push(page.add_listener(EventTarget::Node(tab), EventKind::KeyDown));
        }
        widget.activate_tab(page, 0);
        Ok(widget)
    }

    /// Give every tab/panel pair its ids, roles and initial ARIA state.
    ///
    /// Existing ids are kept; missing ones are generated from the container
    /// key and pair index so `aria-controls`/`aria-labelledby` can point both
    /// ways.
    fn wire_aria(&mut self, page: &mut Page) {
        let key = self.config.container_key.clone();
        for (index, &tab) in self.tabs.iter().enumerate() {
            let tab_id = {
                let Some(data) = page.dom.get_mut(tab) else {
                    continue;
                };
                let id = data
                    .id
                    .clone()
                    .unwrap_or_else(|| format!("tab-{key}-{index}"));
                data.id = Some(id.clone());
                data.set_attr("role", "tab");
                data.set_attr("aria-selected", "false");
                data.tab_index = Some(-1);
                id
            };

            if let Some(&panel) = self.panels.get(index) {
                let panel_id = {
                    let Some(data) = page.dom.get_mut(panel) else {
                        continue;
                    };
                    let id = data
                        .id
                        .clone()
                        .unwrap_or_else(|| format!("panel-{key}-{index}"));
                    data.id = Some(id.clone());
                    data.set_attr("role", "tabpanel");
                    data.set_attr("aria-labelledby", tab_id.clone());
                    data.tab_index = Some(0);
                    data.visible = false;
                    id
                };
                if let Some(data) = page.dom.get_mut(tab) {
                    data.set_attr("aria-controls", panel_id);
                }
            }
        }
    }

    /// Activate the tab at `index`.
    ///
    /// Out-of-range indices are logged and change nothing. Otherwise the
    /// previous selection is cleared, the new tab becomes the single selected
    /// one, its panel (when it has one) becomes the single visible panel, and
    /// the change callback fires.
    pub fn activate_tab(&mut self, page: &mut Page, index: usize) {
        if index >= self.tabs.len() {
            tracing::warn!("invalid tab index: {index}");
            return;
        }

        for &tab in &self.tabs {
            if let Some(data) = page.dom.get_mut(tab) {
                data.set_attr("aria-selected", "false");
                data.tab_index = Some(-1);
                data.remove_class(&self.config.active_class);
            }
        }
        for &panel in &self.panels {
            if let Some(data) = page.dom.get_mut(panel) {
                data.visible = false;
            }
        }

        if let Some(data) = page.dom.get_mut(self.tabs[index]) {
            data.set_attr("aria-selected", "true");
            data.tab_index = Some(0);
            data.add_class(&self.config.active_class);
        }
        if let Some(&panel) = self.panels.get(index) {
            if let Some(data) = page.dom.get_mut(panel) {
                data.visible = true;
            }
        }

        self.active_index = index;
        if let Some(on_change) = &mut self.config.on_change {
            on_change(index);
        }
    }

    /// Index of the currently active tab.
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Number of tabs under control.
    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    /// Whether the widget controls no tabs. Attach guarantees it never does.
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// The tab index whose listener (from `listeners`) matches this event.
    fn listener_index(
        &self,
        page: &Page,
        listeners: &[ListenerId],
        event: &Event,
    ) -> Option<usize> {
        listeners
            .iter()
            .position(|&id| page.listener_matches(id, event))
    }
}

impl Widget for Tabs {
    fn container(&self) -> NodeId {
        self.container
    }

    fn handle_event(&mut self, page: &mut Page, event: &mut Event) {
        match event.kind() {
            EventKind::Click => {
                let Some(index) = self.listener_index(page, &self.click_listeners, event) else {
                    return;
                };
                self.activate_tab(page, index);
            }
            EventKind::KeyDown => {
                let Some(index) = self.listener_index(page, &self.key_listeners, event) else {
                    return;
                };
                let Some(key) = event.key() else {
                    return;
                };
                let last = self.tabs.len() - 1;
                let next = match key.code {
                    Key::Left => Some(if index == 0 { last } else { index - 1 }),
                    Key::Right => Some(if index == last { 0 } else { index + 1 }),
                    Key::Home => Some(0),
                    Key::End => Some(last),
                    // Enter/Space activation is native button behavior; the
                    // host delivers it as a click.
                    _ => None,
                };
                if let Some(next) = next {
                    event.prevent_default();
                    page.focus_node(self.tabs[next]);
                    if self.config.auto_activate {
                        self.activate_tab(page, next);
                    }
                }
            }
            _ => {}
        }
    }

    fn destroy(&mut self, page: &mut Page) {
        for id in self.click_listeners.drain(..) {
            page.remove_listener(id);
        }
        for id in self.key_listeners.drain(..) {
            page.remove_listener(id);
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::dom::node::NodeData;
    use crate::event::input::{KeyEvent, Modifiers};

    /// Container #features with a tablist of three tab buttons and three
    /// sibling panels.
    fn tabs_page() -> (Page, Vec<NodeId>, Vec<NodeId>) {
        let mut page = Page::new();
        let root = page.dom.insert(NodeData::new("Container"));
        let container = page
            .dom
            .insert_child(root, NodeData::new("Container").with_id("features"));
        let tablist = page.dom.insert_child(
            container,
            NodeData::new("Container").with_attr("role", "tablist"),
        );
        let mut tabs = Vec::new();
        for _ in 0..3 {
            tabs.push(page.dom.insert_child(
                tablist,
                NodeData::new("Button").with_attr("role", "tab").focusable(true),
            ));
        }
        let mut panels = Vec::new();
        for _ in 0..3 {
            panels.push(page.dom.insert_child(
                container,
                NodeData::new("Container").with_attr("role", "tabpanel"),
            ));
        }
        (page, tabs, panels)
    }

    fn attached(page: &mut Page) -> Tabs {
        Tabs::attach(page, TabsConfig::new("features")).unwrap()
    }

    fn press_on_tab(tabs: &mut Tabs, page: &mut Page, tab: NodeId, key: Key) -> Event {
        let mut event = Event::key_down(KeyEvent::new(key, Modifiers::NONE), Some(tab));
        tabs.handle_event(page, &mut event);
        event
    }

    fn selected_states(page: &Page, tabs: &[NodeId]) -> Vec<bool> {
        tabs.iter()
            .map(|&tab| page.dom.get(tab).unwrap().attr("aria-selected") == Some("true"))
            .collect()
    }

    // ── Attach ───────────────────────────────────────────────────────

    #[test]
    fn attach_unknown_container_fails() {
        let mut page = Page::new();
        let err = Tabs::attach(&mut page, TabsConfig::new("missing")).unwrap_err();
        assert!(matches!(err, AttachError::ContainerNotFound { .. }));
        assert_eq!(page.listener_count(), 0);
    }

    #[test]
    fn attach_requires_tablist() {
        let mut page = Page::new();
        let root = page.dom.insert(NodeData::new("Container"));
        let container = page
            .dom
            .insert_child(root, NodeData::new("Container").with_id("features"));
        let _tab = page
            .dom
            .insert_child(container, NodeData::new("Button").with_attr("role", "tab"));

        let err = Tabs::attach(&mut page, TabsConfig::new("features")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "required element role=tablist not found inside #features"
        );
        assert_eq!(page.listener_count(), 0);
    }

    #[test]
    fn attach_requires_at_least_one_tab() {
        let mut page = Page::new();
        let root = page.dom.insert(NodeData::new("Container"));
        let container = page
            .dom
            .insert_child(root, NodeData::new("Container").with_id("features"));
        let _tablist = page.dom.insert_child(
            container,
            NodeData::new("Container").with_attr("role", "tablist"),
        );

        let err = Tabs::attach(&mut page, TabsConfig::new("features")).unwrap_err();
        assert!(matches!(err, AttachError::NoMatches { .. }));
        assert_eq!(page.listener_count(), 0);
    }

    #[test]
    fn attach_activates_first_tab() {
        let (mut page, tab_nodes, panel_nodes) = tabs_page();
        let tabs = attached(&mut page);

        assert_eq!(tabs.active_index(), 0);
        assert_eq!(selected_states(&page, &tab_nodes), vec![true, false, false]);
        assert_eq!(page.dom.get(tab_nodes[0]).unwrap().tab_index, Some(0));
        assert_eq!(page.dom.get(tab_nodes[1]).unwrap().tab_index, Some(-1));
        assert!(page.dom.get(tab_nodes[0]).unwrap().has_class("active"));
        assert!(page.dom.get(panel_nodes[0]).unwrap().visible);
        assert!(!page.dom.get(panel_nodes[1]).unwrap().visible);
    }

    #[test]
    fn attach_generates_ids_and_cross_links() {
        let (mut page, tab_nodes, panel_nodes) = tabs_page();
        let _tabs = attached(&mut page);

        let tab = page.dom.get(tab_nodes[1]).unwrap();
        let panel = page.dom.get(panel_nodes[1]).unwrap();
        assert_eq!(tab.id.as_deref(), Some("tab-features-1"));
        assert_eq!(panel.id.as_deref(), Some("panel-features-1"));
        assert_eq!(tab.attr("aria-controls"), Some("panel-features-1"));
        assert_eq!(panel.attr("aria-labelledby"), Some("tab-features-1"));
        assert_eq!(panel.attr("role"), Some("tabpanel"));
        assert_eq!(panel.tab_index, Some(0));
    }

    #[test]
    fn attach_keeps_existing_ids() {
        let (mut page, tab_nodes, _panel_nodes) = tabs_page();
        page.dom.get_mut(tab_nodes[0]).unwrap().id = Some("pricing-tab".to_owned());
        let _tabs = attached(&mut page);
        assert_eq!(
            page.dom.get(tab_nodes[0]).unwrap().id.as_deref(),
            Some("pricing-tab")
        );
    }

    #[test]
    fn attach_fires_initial_change() {
        let (mut page, ..) = tabs_page();
        let changes = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&changes);
        let _tabs = Tabs::attach(
            &mut page,
            TabsConfig::new("features").on_change(move |index| sink.borrow_mut().push(index)),
        )
        .unwrap();
        assert_eq!(*changes.borrow(), vec![0]);
    }

    #[test]
    fn attach_tolerates_panel_mismatch() {
        let (mut page, _tab_nodes, panel_nodes) = tabs_page();
        page.dom.remove(panel_nodes[2]);
        let mut tabs = attached(&mut page);

        // Activating the unpaired tab hides every panel.
        tabs.activate_tab(&mut page, 2);
        assert_eq!(tabs.active_index(), 2);
        assert!(!page.dom.get(panel_nodes[0]).unwrap().visible);
        assert!(!page.dom.get(panel_nodes[1]).unwrap().visible);
    }

    #[test]
    fn surplus_panels_are_left_alone() {
        let (mut page, _tab_nodes, _panel_nodes) = tabs_page();
        let container = page.dom.query_by_id("features").unwrap();
        let extra = page.dom.insert_child(
            container,
            NodeData::new("Container").with_attr("role", "tabpanel"),
        );
        let mut tabs = attached(&mut page);

        // The fourth panel got no wiring at attach.
        let data = page.dom.get(extra).unwrap();
        assert!(data.visible);
        assert!(!data.has_attr("aria-labelledby"));

        // And activation never hides it either.
        tabs.activate_tab(&mut page, 1);
        assert!(page.dom.get(extra).unwrap().visible);
    }

    // ── activate_tab ─────────────────────────────────────────────────

    #[test]
    fn activate_switches_selection_exclusively() {
        let (mut page, tab_nodes, panel_nodes) = tabs_page();
        let mut tabs = attached(&mut page);

        tabs.activate_tab(&mut page, 2);
        assert_eq!(tabs.active_index(), 2);
        assert_eq!(selected_states(&page, &tab_nodes), vec![false, false, true]);
        assert!(!page.dom.get(tab_nodes[0]).unwrap().has_class("active"));
        assert!(page.dom.get(tab_nodes[2]).unwrap().has_class("active"));
        assert!(!page.dom.get(panel_nodes[0]).unwrap().visible);
        assert!(page.dom.get(panel_nodes[2]).unwrap().visible);
    }

    #[test]
    fn activate_out_of_range_changes_nothing() {
        let (mut page, tab_nodes, _panel_nodes) = tabs_page();
        let changes = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&changes);
        let mut tabs = Tabs::attach(
            &mut page,
            TabsConfig::new("features").on_change(move |index| sink.borrow_mut().push(index)),
        )
        .unwrap();

        tabs.activate_tab(&mut page, 3);
        assert_eq!(tabs.active_index(), 0);
        assert_eq!(selected_states(&page, &tab_nodes), vec![true, false, false]);
        // Only the initial activation reached the callback.
        assert_eq!(*changes.borrow(), vec![0]);
    }

    // ── Click ────────────────────────────────────────────────────────

    #[test]
    fn click_activates_tab() {
        let (mut page, tab_nodes, _panel_nodes) = tabs_page();
        let mut tabs = attached(&mut page);

        let mut event = Event::click(tab_nodes[1]);
        tabs.handle_event(&mut page, &mut event);
        assert_eq!(tabs.active_index(), 1);
    }

    #[test]
    fn click_on_tab_child_bubbles_to_tab() {
        let (mut page, tab_nodes, _panel_nodes) = tabs_page();
        let icon = page.dom.insert_child(tab_nodes[2], NodeData::new("Label"));
        let mut tabs = attached(&mut page);

        let mut event = Event::click(icon);
        tabs.handle_event(&mut page, &mut event);
        assert_eq!(tabs.active_index(), 2);
    }

    #[test]
    fn click_elsewhere_is_ignored() {
        let (mut page, _tab_nodes, panel_nodes) = tabs_page();
        let mut tabs = attached(&mut page);

        let mut event = Event::click(panel_nodes[1]);
        tabs.handle_event(&mut page, &mut event);
        assert_eq!(tabs.active_index(), 0);
    }

    // ── Keyboard ─────────────────────────────────────────────────────

    #[test]
    fn right_arrow_moves_and_activates() {
        let (mut page, tab_nodes, _panel_nodes) = tabs_page();
        let mut tabs = attached(&mut page);
        page.focus_node(tab_nodes[0]);

        let event = press_on_tab(&mut tabs, &mut page, tab_nodes[0], Key::Right);
        assert!(event.default_prevented);
        assert_eq!(page.active_element(), Some(tab_nodes[1]));
        assert_eq!(tabs.active_index(), 1);
    }

    #[test]
    fn right_arrow_wraps_from_last() {
        let (mut page, tab_nodes, _panel_nodes) = tabs_page();
        let mut tabs = attached(&mut page);
        tabs.activate_tab(&mut page, 2);

        let _ = press_on_tab(&mut tabs, &mut page, tab_nodes[2], Key::Right);
        assert_eq!(tabs.active_index(), 0);
        assert_eq!(page.active_element(), Some(tab_nodes[0]));
    }

    #[test]
    fn left_arrow_wraps_from_first() {
        let (mut page, tab_nodes, _panel_nodes) = tabs_page();
        let mut tabs = attached(&mut page);

        let _ = press_on_tab(&mut tabs, &mut page, tab_nodes[0], Key::Left);
        assert_eq!(tabs.active_index(), 2);
        assert_eq!(page.active_element(), Some(tab_nodes[2]));
    }

    #[test]
    fn home_and_end_jump_to_edges() {
        let (mut page, tab_nodes, _panel_nodes) = tabs_page();
        let mut tabs = attached(&mut page);
        tabs.activate_tab(&mut page, 1);

        let _ = press_on_tab(&mut tabs, &mut page, tab_nodes[1], Key::End);
        assert_eq!(tabs.active_index(), 2);

        let _ = press_on_tab(&mut tabs, &mut page, tab_nodes[2], Key::Home);
        assert_eq!(tabs.active_index(), 0);
    }

    #[test]
    fn manual_mode_moves_focus_without_activating() {
        let (mut page, tab_nodes, _panel_nodes) = tabs_page();
        let mut tabs = Tabs::attach(
            &mut page,
            TabsConfig::new("features").auto_activate(false),
        )
        .unwrap();
        page.focus_node(tab_nodes[0]);

        let event = press_on_tab(&mut tabs, &mut page, tab_nodes[0], Key::Right);
        assert!(event.default_prevented);
        assert_eq!(page.active_element(), Some(tab_nodes[1]));
        assert_eq!(tabs.active_index(), 0);

        // A click on the focused tab still activates it.
        let mut click = Event::click(tab_nodes[1]);
        tabs.handle_event(&mut page, &mut click);
        assert_eq!(tabs.active_index(), 1);
    }

    #[test]
    fn enter_is_left_to_native_activation() {
        let (mut page, tab_nodes, _panel_nodes) = tabs_page();
        let mut tabs = attached(&mut page);

        let event = press_on_tab(&mut tabs, &mut page, tab_nodes[1], Key::Enter);
        assert!(!event.default_prevented);
        assert_eq!(tabs.active_index(), 0);
    }

    #[test]
    fn other_containers_keydown_is_ignored() {
        let (mut page, tab_nodes, panel_nodes) = tabs_page();
        let mut tabs = attached(&mut page);

        let event = press_on_tab(&mut tabs, &mut page, panel_nodes[0], Key::Right);
        assert!(!event.default_prevented);
        assert_eq!(tabs.active_index(), 0);
        let _ = tab_nodes;
    }

    // ── Custom selectors ─────────────────────────────────────────────

    #[test]
    fn class_selectors_and_custom_active_class() {
        let mut page = Page::new();
        let root = page.dom.insert(NodeData::new("Container"));
        let container = page
            .dom
            .insert_child(root, NodeData::new("Container").with_id("pricing"));
        let tablist = page.dom.insert_child(
            container,
            NodeData::new("Container").with_attr("role", "tablist"),
        );
        let tab_a = page
            .dom
            .insert_child(tablist, NodeData::new("Button").with_class("tab-button"));
        let _tab_b = page
            .dom
            .insert_child(tablist, NodeData::new("Button").with_class("tab-button"));
        let _panel_a = page
            .dom
            .insert_child(container, NodeData::new("Container").with_class("tab-pane"));
        let _panel_b = page
            .dom
            .insert_child(container, NodeData::new("Container").with_class("tab-pane"));

        let _tabs = Tabs::attach(
            &mut page,
            TabsConfig::new("pricing")
                .tab_selector(Selector::class("tab-button"))
                .panel_selector(Selector::class("tab-pane"))
                .active_class("is-current"),
        )
        .unwrap();

        let data = page.dom.get(tab_a).unwrap();
        assert!(data.has_class("is-current"));
        // Role is filled in even when selection went by class.
        assert_eq!(data.attr("role"), Some("tab"));
    }

    // ── Destroy ──────────────────────────────────────────────────────

    #[test]
    fn destroy_detaches_behavior() {
        let (mut page, tab_nodes, _panel_nodes) = tabs_page();
        let mut tabs = attached(&mut page);

        tabs.destroy(&mut page);
        assert_eq!(page.listener_count(), 0);

        let mut event = Event::click(tab_nodes[1]);
        tabs.handle_event(&mut page, &mut event);
        assert_eq!(tabs.active_index(), 0);

        // Attributes survive teardown.
        assert_eq!(
            page.dom.get(tab_nodes[0]).unwrap().attr("aria-selected"),
            Some("true")
        );
    }

    #[test]
    fn destroy_twice_is_harmless() {
        let (mut page, ..) = tabs_page();
        let mut tabs = attached(&mut page);
        tabs.destroy(&mut page);
        tabs.destroy(&mut page);
        assert_eq!(page.listener_count(), 0);
    }

    #[test]
    fn config_debug_masks_callbacks() {
        let config = TabsConfig::new("t").on_change(|_| {});
        let debug = format!("{config:?}");
        assert!(debug.contains("<fn>"));
    }
}
