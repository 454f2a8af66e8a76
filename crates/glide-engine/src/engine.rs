#![forbid(unsafe_code)]

//! Engine facade: one event in, a batch of effects out.
//!
//! Owns every component and routes host events through them in a fixed
//! order. All work happens on the host's event callbacks; there is no
//! thread, no queue, and no clock in here, so re-entrancy hazards reduce
//! to the transition controller's `pending` flag.
//!
//! Routing:
//!
//! - Vertical scroll → navbar chrome, vertical scan (indicator + focus
//!   resolution), reveal pass.
//! - Horizontal scroll → horizontal scan, guarded by the carousel
//!   container's visibility in the vertical viewport.
//! - Resize → both scans re-run plus an indicator reposition; an
//!   unchanged active section leaves focus and transition state alone.
//! - Everything else → the single component that consumes it.

use tracing::trace;

use glide_core::assets::AssetMap;
use glide_core::event::Event;
use glide_core::geometry::Axis;
use glide_core::layout::Layout;
use glide_core::model::PageModel;
use glide_core::options::EngineOptions;

use crate::chrome::Chrome;
use crate::effects::Effect;
use crate::glow::glow_origin;
use crate::indicator::NavIndicator;
use crate::resolver::{FocusResolver, FocusState};
use crate::reveal::RevealTracker;
use crate::scrolling::{anchor_target, page_carousel};
use crate::transition::{TransitionController, TransitionState};
use crate::watcher::ViewportWatcher;

/// The assembled scroll-reactive engine.
#[derive(Debug, Clone)]
pub struct Engine {
    options: EngineOptions,
    page: PageModel,
    vertical: ViewportWatcher,
    horizontal: ViewportWatcher,
    resolver: FocusResolver,
    transition: TransitionController,
    indicator: NavIndicator,
    chrome: Chrome,
    reveal: RevealTracker,
    scroll_offset: f32,
}

impl Engine {
    /// Assemble an engine for `page`, displaying `assets`, tuned by
    /// `options`.
    pub fn new(page: PageModel, assets: AssetMap, options: EngineOptions) -> Self {
        let carousel = page.carousel();

        let vertical = ViewportWatcher::new(Axis::Vertical, options.vertical_band)
            .observe(page.sections().to_vec());
        let horizontal = ViewportWatcher::new(Axis::Horizontal, options.horizontal_band)
            .root(carousel.container.clone())
            .observe(carousel.cards.clone());

        let resolver =
            FocusResolver::new(carousel.section.clone(), carousel.first_card().cloned());
        let transition = TransitionController::new(assets, options.fade_out(), options.fade_in());
        let mut indicator = NavIndicator::new(page.nav_entries().to_vec());
        if let Some(bar) = page.nav_bar_element() {
            indicator = indicator.bar(bar.clone());
        }
        let chrome = Chrome::new(options.navbar_threshold);
        let reveal = RevealTracker::new(
            page.reveal_targets().to_vec(),
            options.reveal_margin,
            options.reveal_min_ratio,
        );

        Self {
            options,
            page,
            vertical,
            horizontal,
            resolver,
            transition,
            indicator,
            chrome,
            reveal,
            scroll_offset: 0.0,
        }
    }

    /// The engine's tunables.
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// The resolver's focus state.
    pub fn focus(&self) -> &FocusState {
        self.resolver.focus()
    }

    /// The transition controller's state.
    pub fn transition(&self) -> &TransitionState {
        self.transition.state()
    }

    /// Process one host event against current geometry.
    pub fn handle(&mut self, event: Event, layout: &impl Layout) -> Vec<Effect> {
        let mut out = Vec::new();
        trace!(?event, "handling");

        match event {
            Event::VerticalScroll { offset } => {
                self.scroll_offset = offset;
                self.chrome.on_scroll(offset, &mut out);
                self.vertical_pass(layout, &mut out);
                self.reveal.scan(layout, &mut out);
            }
            Event::HorizontalScroll => {
                self.horizontal_pass(layout, &mut out);
            }
            Event::Resize => {
                self.vertical_pass(layout, &mut out);
                self.horizontal_pass(layout, &mut out);
                self.indicator.on_resize(layout, &mut out);
                self.reveal.scan(layout, &mut out);
            }
            Event::Tick { dt } => {
                self.transition.tick(dt, &mut out);
            }
            Event::SourceLoaded => self.transition.source_loaded(&mut out),
            Event::SourceFailed => self.transition.source_failed(&mut out),
            Event::NavHover { entry } => self.indicator.on_hover(&entry, layout, &mut out),
            Event::NavHoverEnd => self.indicator.on_hover_end(layout, &mut out),
            Event::MenuToggle => self.chrome.toggle_drawer(&mut out),
            Event::DrawerNavigate { target } => {
                self.chrome.close_drawer(&mut out);
                out.extend(anchor_target(
                    &target,
                    self.scroll_offset,
                    self.options.header_offset,
                    layout,
                ));
            }
            Event::AnchorClick { target } => {
                out.extend(anchor_target(
                    &target,
                    self.scroll_offset,
                    self.options.header_offset,
                    layout,
                ));
            }
            Event::CarouselPrev => {
                out.extend(page_carousel(
                    &self.page.carousel().container,
                    false,
                    layout,
                ));
            }
            Event::CarouselNext => {
                out.extend(page_carousel(&self.page.carousel().container, true, layout));
            }
            Event::PointerMove { card, x, y } => {
                if self.page.carousel().cards.contains(&card) {
                    out.extend(glow_origin(&card, x, y, layout));
                }
            }
        }

        out
    }

    /// Vertical scan: indicator first (it tracks the raw section), then
    /// focus resolution, then any resulting swap request.
    fn vertical_pass(&mut self, layout: &impl Layout, out: &mut Vec<Effect>) {
        let Some(report) = self.vertical.scan(layout) else {
            return;
        };
        let section = report.primary().clone();
        self.indicator.on_active_section(&section, layout, out);
        if let Some(key) = self.resolver.on_vertical(&section) {
            self.transition.request_swap(&key, out);
        }
    }

    /// Horizontal scan with the carousel-visibility guard: a centered card
    /// only wins focus while the carousel container itself intersects the
    /// vertical viewport.
    fn horizontal_pass(&mut self, layout: &impl Layout, out: &mut Vec<Effect>) {
        let Some(report) = self.horizontal.scan(layout) else {
            return;
        };
        let visible = layout
            .bounds(&self.page.carousel().container)
            .is_some_and(|rect| rect.intersects(&layout.viewport()));
        if let Some(key) = self.resolver.on_horizontal(report.primary(), visible) {
            self.transition.request_swap(&key, out);
        }
    }
}
