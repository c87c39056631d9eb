//! Carousel widget: a slide deck with wrap-around navigation, swipe,
//! indicators and an optional virtual-clock autoplay.
//!
//! Slide changes are announced through a polite live region inserted under
//! the container. Autoplay pauses while the pointer or keyboard focus is
//! inside the carousel and resumes when both leave.

use std::fmt;
use std::time::Duration;

use crate::dom::node::{NodeData, NodeId};
use crate::dom::query::Selector;
use crate::event::dispatch::{Event, EventDetail, EventKind};
use crate::event::input::Key;
use crate::event::listener::{EventTarget, ListenerId};
use crate::page::Page;
use crate::time::TimerId;
use crate::widget::{AttachError, Widget};

// ---------------------------------------------------------------------------
// CarouselConfig
// ---------------------------------------------------------------------------

/// Configuration for [`Carousel::attach`].
pub struct CarouselConfig {
    container_key: String,
    slides_selector: Selector,
    slide_selector: Selector,
    prev_selector: Selector,
    next_selector: Selector,
    indicator_selector: Selector,
    auto_play: bool,
    auto_play_interval: Duration,
    loop_around: bool,
    swipe_threshold: f32,
    on_change: Option<Box<dyn FnMut(usize)>>,
}

impl CarouselConfig {
    /// Configuration for the carousel whose container has the given id.
    pub fn new(container_key: impl Into<String>) -> Self {
        Self {
            container_key: container_key.into(),
            slides_selector: Selector::class("carousel-slides"),
            slide_selector: Selector::class("carousel-slide"),
            prev_selector: Selector::class("carousel-prev"),
            next_selector: Selector::class("carousel-next"),
            indicator_selector: Selector::class("carousel-indicator"),
            auto_play: false,
            auto_play_interval: Duration::from_secs(5),
            loop_around: true,
            swipe_threshold: 50.0,
            on_change: None,
        }
    }

    /// Selector for the slide wrapper (builder). Default `.carousel-slides`.
    pub fn slides_selector(mut self, slides_selector: Selector) -> Self {
        self.slides_selector = slides_selector;
        self
    }

    /// Selector for individual slides (builder). Default `.carousel-slide`.
    pub fn slide_selector(mut self, slide_selector: Selector) -> Self {
        self.slide_selector = slide_selector;
        self
    }

    /// Selector for the previous button (builder). Default `.carousel-prev`.
    pub fn prev_selector(mut self, prev_selector: Selector) -> Self {
        self.prev_selector = prev_selector;
        self
    }

    /// Selector for the next button (builder). Default `.carousel-next`.
    pub fn next_selector(mut self, next_selector: Selector) -> Self {
        self.next_selector = next_selector;
        self
    }

    /// Selector for indicator dots (builder). Default `.carousel-indicator`.
    pub fn indicator_selector(mut self, indicator_selector: Selector) -> Self {
        self.indicator_selector = indicator_selector;
        self
    }

    /// Whether the carousel advances on its own (builder). Default `false`.
    pub fn auto_play(mut self, auto_play: bool) -> Self {
        self.auto_play = auto_play;
        self
    }

    /// Time between automatic advances (builder). Default five seconds.
    pub fn auto_play_interval(mut self, auto_play_interval: Duration) -> Self {
        self.auto_play_interval = auto_play_interval;
        self
    }

    /// Whether navigation wraps past the ends (builder). Default `true`.
    /// With `false`, the edge buttons are marked disabled instead.
    pub fn loop_around(mut self, loop_around: bool) -> Self {
        self.loop_around = loop_around;
        self
    }

    /// Minimum horizontal travel for a touch to count as a swipe (builder).
    /// Default `50.0`.
    pub fn swipe_threshold(mut self, swipe_threshold: f32) -> Self {
        self.swipe_threshold = swipe_threshold;
        self
    }

    /// Callback invoked with the index of each newly shown slide (builder).
    pub fn on_change(mut self, on_change: impl FnMut(usize) + 'static) -> Self {
        self.on_change = Some(Box::new(on_change));
        self
    }
}

impl fmt::Debug for CarouselConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CarouselConfig")
            .field("container_key", &self.container_key)
            .field("slides_selector", &self.slides_selector)
            .field("slide_selector", &self.slide_selector)
            .field("prev_selector", &self.prev_selector)
            .field("next_selector", &self.next_selector)
            .field("indicator_selector", &self.indicator_selector)
            .field("auto_play", &self.auto_play)
            .field("auto_play_interval", &self.auto_play_interval)
            .field("loop_around", &self.loop_around)
            .field("swipe_threshold", &self.swipe_threshold)
            .field("on_change", &self.on_change.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Carousel
// ---------------------------------------------------------------------------

/// A slide deck controller.
///
/// # Examples
///
/// ```ignore
/// let mut carousel = Carousel::attach(
///     &mut page,
///     CarouselConfig::new("gallery").auto_play(true),
/// )?;
/// carousel.next(&mut page);
/// ```
#[derive(Debug)]
pub struct Carousel {
    container: NodeId,
    config: CarouselConfig,
    slides: Vec<NodeId>,
    prev_button: Option<NodeId>,
    next_button: Option<NodeId>,
    indicators: Vec<NodeId>,
    live_region: NodeId,
    current_index: usize,
    touch_start_x: Option<f32>,
    autoplay_timer: Option<TimerId>,
    prev_listener: Option<ListenerId>,
    next_listener: Option<ListenerId>,
    indicator_listeners: Vec<ListenerId>,
    container_listeners: Vec<ListenerId>,
}

impl Carousel {
    /// Bind a carousel to the container with the configured id.
    ///
    /// The container must hold a slide wrapper and at least one slide.
    /// Navigation buttons and indicators are optional. Slide 0 is shown as
    /// part of attaching, which fires the change callback, and autoplay
    /// starts if configured.
    pub fn attach(page: &mut Page, config: CarouselConfig) -> Result<Self, AttachError> {
        let container =
            page.dom
                .query_by_id(&config.container_key)
                .ok_or_else(|| AttachError::ContainerNotFound {
                    key: config.container_key.clone(),
                })?;

        if page
            .dom
            .first_within(container, &config.slides_selector)
            .is_none()
        {
            return Err(AttachError::MissingChild {
                container: config.container_key.clone(),
                selector: config.slides_selector.clone(),
            });
        }

        let slides = page.dom.query_within(container, &config.slide_selector);
        if slides.is_empty() {
            return Err(AttachError::NoMatches {
                container: config.container_key.clone(),
                selector: config.slide_selector.clone(),
            });
        }

        let prev_button = page.dom.first_within(container, &config.prev_selector);
        let next_button = page.dom.first_within(container, &config.next_selector);
        let indicators = page.dom.query_within(container, &config.indicator_selector);

        // Announcements for assistive tech go through a polite live region.
        let live_region = page.dom.insert_child(
            container,
            NodeData::new("Label")
                .with_class("sr-only")
                .with_attr("aria-live", "polite")
                .with_attr("aria-atomic", "true"),
        );

        let mut widget = Self {
            container,
            config,
            slides,
            prev_button,
            next_button,
            indicators,
            live_region,
            current_index: 0,
            touch_start_x: None,
            autoplay_timer: None,
            prev_listener: None,
            next_listener: None,
            indicator_listeners: Vec::new(),
            container_listeners: Vec::new(),
        };
        widget.wire_aria(page);

        widget.prev_listener = widget
            .prev_button
            .map(|node| page.add_listener(EventTarget::Node(node), EventKind::Click));
        widget.next_listener = widget
            .next_button
            .map(|node| page.add_listener(EventTarget::Node(node), EventKind::Click));
        for &indicator in &widget.indicators {
            widget
                .indicator_listeners
                .push(page.add_listener(EventTarget::Node(indicator), EventKind::Click));
        }
        for kind in [
            EventKind::KeyDown,
            EventKind::TouchStart,
            EventKind::TouchEnd,
            EventKind::PointerEnter,
            EventKind::PointerLeave,
            EventKind::FocusIn,
            EventKind::FocusOut,
        ] {
            widget
                .container_listeners
                .push(page.add_listener(EventTarget::Node(container), kind));
        }

        widget.go_to_slide(page, 0);
        if widget.config.auto_play {
            widget.start_autoplay(page);
        }
        Ok(widget)
    }

    /// Label the container, slides, buttons and indicators for assistive
    /// tech. Slides start hidden; showing the first one is `go_to_slide`'s
    /// job.
    fn wire_aria(&mut self, page: &mut Page) {
        let total = self.slides.len();
        if let Some(data) = page.dom.get_mut(self.container) {
            data.set_attr("role", "region");
            data.set_attr("aria-roledescription", "carousel");
            data.set_attr("aria-label", "Image carousel");
        }
        for (index, &slide) in self.slides.iter().enumerate() {
            if let Some(data) = page.dom.get_mut(slide) {
                data.set_attr("role", "group");
                data.set_attr("aria-roledescription", "slide");
                data.set_attr("aria-label", format!("Slide {} of {}", index + 1, total));
                data.set_attr("aria-hidden", "true");
                data.visible = false;
            }
        }
        if let Some(data) = self.prev_button.and_then(|node| page.dom.get_mut(node)) {
            data.set_attr("aria-label", "Previous slide");
        }
        if let Some(data) = self.next_button.and_then(|node| page.dom.get_mut(node)) {
            data.set_attr("aria-label", "Next slide");
        }
        for (index, &indicator) in self.indicators.iter().enumerate() {
            if let Some(data) = page.dom.get_mut(indicator) {
                data.set_attr("role", "button");
                data.set_attr("aria-label", format!("Go to slide {}", index + 1));
            }
        }
    }

    /// Show the slide at `index`.
    ///
    /// Out-of-range indices are logged and change nothing. Otherwise the
    /// previous slide is hidden, indicators and edge-button state follow the
    /// new position, the live region announces it, and the change callback
    /// fires.
    pub fn go_to_slide(&mut self, page: &mut Page, index: usize) {
        let total = self.slides.len();
        if index >= total {
            tracing::warn!("invalid slide index: {index}");
            return;
        }

        for (position, &slide) in self.slides.iter().enumerate() {
            if let Some(data) = page.dom.get_mut(slide) {
                let current = position == index;
                data.visible = current;
                data.set_attr("aria-hidden", if current { "false" } else { "true" });
            }
        }
        for (position, &indicator) in self.indicators.iter().enumerate() {
            if let Some(data) = page.dom.get_mut(indicator) {
                if position == index {
                    data.add_class("active");
                    data.set_attr("aria-current", "true");
                } else {
                    data.remove_class("active");
                    data.remove_attr("aria-current");
                }
            }
        }
        // Edge buttons are marked for announcement only; they keep their
        // place in the focus order.
        if !self.config.loop_around {
            if let Some(data) = self.prev_button.and_then(|node| page.dom.get_mut(node)) {
                data.set_attr("aria-disabled", if index == 0 { "true" } else { "false" });
            }
            if let Some(data) = self.next_button.and_then(|node| page.dom.get_mut(node)) {
                data.set_attr(
                    "aria-disabled",
                    if index == total - 1 { "true" } else { "false" },
                );
            }
        }
        if let Some(data) = page.dom.get_mut(self.live_region) {
            data.text = format!("Slide {} of {}", index + 1, total);
        }

        self.current_index = index;
        if let Some(on_change) = &mut self.config.on_change {
            on_change(index);
        }
    }

    /// Advance one slide, wrapping past the end when looping is on.
    pub fn next(&mut self, page: &mut Page) {
        let total = self.slides.len();
        if self.config.loop_around {
            self.go_to_slide(page, (self.current_index + 1) % total);
        } else if self.current_index + 1 < total {
            self.go_to_slide(page, self.current_index + 1);
        }
    }

    /// Step back one slide, wrapping past the start when looping is on.
    pub fn prev(&mut self, page: &mut Page) {
        let total = self.slides.len();
        if self.config.loop_around {
            self.go_to_slide(page, (self.current_index + total - 1) % total);
        } else if self.current_index > 0 {
            self.go_to_slide(page, self.current_index - 1);
        }
    }

    /// Index of the currently shown slide.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Number of slides under control.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Arm the autoplay interval, replacing any timer already running.
    pub fn start_autoplay(&mut self, page: &mut Page) {
        self.pause_autoplay(page);
        self.autoplay_timer = Some(page.set_interval(self.config.auto_play_interval));
    }

    /// Stop autoplay. Harmless when it is not running.
    pub fn pause_autoplay(&mut self, page: &mut Page) {
        if let Some(timer) = self.autoplay_timer.take() {
            page.clear_timer(timer);
        }
    }

    /// Whether the autoplay interval is currently armed.
    pub fn is_autoplaying(&self) -> bool {
        self.autoplay_timer.is_some()
    }

    /// Whether this event matches one of the container-level listeners.
    fn matches_container(&self, page: &Page, event: &Event) -> bool {
        self.container_listeners
            .iter()
            .any(|&id| page.listener_matches(id, event))
    }

    fn handle_click(&mut self, page: &mut Page, event: &Event) {
        if self
            .prev_listener
            .is_some_and(|id| page.listener_matches(id, event))
        {
            self.prev(page);
        } else if self
            .next_listener
            .is_some_and(|id| page.listener_matches(id, event))
        {
            self.next(page);
        } else if let Some(index) = self
            .indicator_listeners
            .iter()
            .position(|&id| page.listener_matches(id, event))
        {
            self.go_to_slide(page, index);
        }
    }

    fn handle_key(&mut self, page: &mut Page, event: &mut Event) {
        let Some(key) = event.key() else {
            return;
        };
        let last = self.slides.len() - 1;
        match key.code {
            Key::Left => {
                event.prevent_default();
                self.prev(page);
            }
            Key::Right => {
                event.prevent_default();
                self.next(page);
            }
            Key::Home => {
                event.prevent_default();
                self.go_to_slide(page, 0);
            }
            Key::End => {
                event.prevent_default();
                self.go_to_slide(page, last);
            }
            _ => {}
        }
    }

    fn finish_swipe(&mut self, page: &mut Page, end_x: f32) {
        let Some(start_x) = self.touch_start_x.take() else {
            return;
        };
        let travel = start_x - end_x;
        if travel.abs() > self.config.swipe_threshold {
            if travel > 0.0 {
                self.next(page);
            } else {
                self.prev(page);
            }
        }
    }
}

impl Widget for Carousel {
    fn container(&self) -> NodeId {
        self.container
    }

    fn handle_event(&mut self, page: &mut Page, event: &mut Event) {
        match event.kind() {
            EventKind::Click => self.handle_click(page, event),
            EventKind::KeyDown => {
                if self.matches_container(page, event) {
                    self.handle_key(page, event);
                }
            }
            EventKind::TouchStart => {
                if self.matches_container(page, event) {
                    if let EventDetail::TouchStart { x } = event.detail {
                        self.touch_start_x = Some(x);
                    }
                }
            }
            EventKind::TouchEnd => {
                if self.matches_container(page, event) {
                    if let EventDetail::TouchEnd { x } = event.detail {
                        self.finish_swipe(page, x);
                    }
                }
            }
            EventKind::PointerEnter | EventKind::FocusIn => {
                if self.matches_container(page, event) {
                    self.pause_autoplay(page);
                }
            }
            EventKind::PointerLeave | EventKind::FocusOut => {
                if self.matches_container(page, event) && self.config.auto_play {
                    self.start_autoplay(page);
                }
            }
        }
    }

    fn on_timer(&mut self, page: &mut Page, timer: TimerId) {
        if self.autoplay_timer == Some(timer) {
            self.next(page);
        }
    }

    fn destroy(&mut self, page: &mut Page) {
        self.pause_autoplay(page);
        if let Some(id) = self.prev_listener.take() {
            page.remove_listener(id);
        }
        if let Some(id) = self.next_listener.take() {
            page.remove_listener(id);
        }
        for id in self.indicator_listeners.drain(..) {
            page.remove_listener(id);
        }
        for id in self.container_listeners.drain(..) {
            page.remove_listener(id);
        }
        // The live region stays behind so a final announcement is not cut
        // off mid-read.
    }
}

// ===========================================================================
// Tests
// ===========================================================================
