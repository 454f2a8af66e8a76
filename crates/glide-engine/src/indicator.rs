#![forbid(unsafe_code)]

//! Nav indicator positioner.
//!
//! Moves the highlight pill under the nav entry matching the active
//! section. Consumes the vertical watcher's winning section in parallel
//! with the focus resolver: it keeps its own `active` state and never
//! reads the resolver's focus. Hover transiently repositions the pill to
//! the hovered entry; leaving the nav area restores the true active entry.
//! When no entry is active, or an entry's geometry is missing, the pill is
//! hidden.

use tracing::trace;

use glide_core::key::ContentKey;
use glide_core::layout::Layout;
use glide_core::model::NavEntry;

use crate::effects::Effect;

/// Positions the highlight pill under nav entries.
#[derive(Debug, Clone)]
pub struct NavIndicator {
    entries: Vec<NavEntry>,
    /// Key of the nav bar element the pill offsets against, if any.
    bar: Option<ContentKey>,
    /// Active section, tracked independently of the focus resolver.
    active: Option<ContentKey>,
    hovered: Option<ContentKey>,
}

impl NavIndicator {
    /// Create a positioner over the page's nav entries.
    pub fn new(entries: Vec<NavEntry>) -> Self {
        Self {
            entries,
            bar: None,
            active: None,
            hovered: None,
        }
    }

    /// Offset pill placements against this nav bar element (builder
    /// pattern). Without it, placements are in viewport coordinates.
    #[must_use]
    pub fn bar(mut self, key: impl Into<ContentKey>) -> Self {
        self.bar = Some(key.into());
        self
    }

    /// The section the indicator currently considers active.
    pub fn active(&self) -> Option<&ContentKey> {
        self.active.as_ref()
    }

    /// The vertical watcher reported `section` as active.
    ///
    /// Repositions only on an actual change; scroll ticks repeating the
    /// same section emit nothing.
    pub fn on_active_section(
        &mut self,
        section: &ContentKey,
        layout: &impl Layout,
        out: &mut Vec<Effect>,
    ) {
        if self.active.as_ref() == Some(section) {
            return;
        }
        self.active = Some(section.clone());
        match self.element_for(section) {
            Some(element) => self.place(&element, layout, out),
            None => {
                trace!(section = %section, "no nav entry for section, hiding pill");
                out.push(Effect::HideIndicator);
            }
        }
    }

    /// The pointer entered the nav element `element`.
    pub fn on_hover(&mut self, element: &ContentKey, layout: &impl Layout, out: &mut Vec<Effect>) {
        self.hovered = Some(element.clone());
        self.place(element, layout, out);
    }

    /// The pointer left the navigation area: restore the active entry.
    pub fn on_hover_end(&mut self, layout: &impl Layout, out: &mut Vec<Effect>) {
        self.hovered = None;
        self.restore(layout, out);
    }

    /// The viewport resized: recompute the active entry's geometry.
    pub fn on_resize(&mut self, layout: &impl Layout, out: &mut Vec<Effect>) {
        self.restore(layout, out);
    }

    fn restore(&self, layout: &impl Layout, out: &mut Vec<Effect>) {
        match self.active.as_ref().and_then(|s| self.element_for(s)) {
            Some(element) => self.place(&element, layout, out),
            None => out.push(Effect::HideIndicator),
        }
    }

    fn element_for(&self, section: &ContentKey) -> Option<ContentKey> {
        self.entries
            .iter()
            .find(|e| e.section == *section)
            .map(|e| e.element.clone())
    }

    fn place(&self, element: &ContentKey, layout: &impl Layout, out: &mut Vec<Effect>) {
        let Some(rect) = layout.bounds(element) else {
            trace!(element = %element, "nav element has no bounds, hiding pill");
            out.push(Effect::HideIndicator);
            return;
        };
        let origin = self
            .bar
            .as_ref()
            .and_then(|bar| layout.bounds(bar))
            .map_or(0.0, |bar| bar.left());
        out.push(Effect::Indicator {
            left: rect.left() - origin,
            width: rect.width,
        });
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use glide_core::geometry::Rect;
    use glide_core::layout::StaticLayout;

    use super::*;

    fn fixture() -> (NavIndicator, StaticLayout) {
        let indicator = NavIndicator::new(vec![
            NavEntry::new("hero", "nav-hero"),
            NavEntry::new("projects", "nav-projects"),
        ])
        .bar("nav-bar");
        let layout = StaticLayout::new(Rect::from_size(1000.0, 800.0))
            .with("nav-bar", Rect::new(200.0, 10.0, 600.0, 40.0))
            .with("nav-hero", Rect::new(220.0, 15.0, 60.0, 30.0))
            .with("nav-projects", Rect::new(300.0, 15.0, 90.0, 30.0));
        (indicator, layout)
    }

    #[test]
    fn active_section_positions_pill() {
        let (mut nav, layout) = fixture();
        let mut out = Vec::new();
        nav.on_active_section(&"hero".into(), &layout, &mut out);
        assert_eq!(
            out,
            vec![Effect::Indicator {
                left: 20.0,
                width: 60.0
            }]
        );
    }

    #[test]
    fn repeated_section_emits_nothing() {
        let (mut nav, layout) = fixture();
        let mut out = Vec::new();
        nav.on_active_section(&"hero".into(), &layout, &mut out);
        out.clear();
        nav.on_active_section(&"hero".into(), &layout, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn section_without_entry_hides_pill() {
        let (mut nav, layout) = fixture();
        let mut out = Vec::new();
        nav.on_active_section(&"contact".into(), &layout, &mut out);
        assert_eq!(out, vec![Effect::HideIndicator]);
    }

    #[test]
    fn missing_element_bounds_hides_pill() {
        let (mut nav, mut layout) = fixture();
        layout.remove(&"nav-hero".into());
        let mut out = Vec::new();
        nav.on_active_section(&"hero".into(), &layout, &mut out);
        assert_eq!(out, vec![Effect::HideIndicator]);
    }

    #[test]
    fn hover_moves_pill_and_leave_restores_active() {
        let (mut nav, layout) = fixture();
        let mut out = Vec::new();
        nav.on_active_section(&"hero".into(), &layout, &mut out);
        out.clear();

        nav.on_hover(&"nav-projects".into(), &layout, &mut out);
        assert_eq!(
            out,
            vec![Effect::Indicator {
                left: 100.0,
                width: 90.0
            }]
        );
        out.clear();

        nav.on_hover_end(&layout, &mut out);
        assert_eq!(
            out,
            vec![Effect::Indicator {
                left: 20.0,
                width: 60.0
            }]
        );
    }

    #[test]
    fn hover_end_with_no_active_hides() {
        let (mut nav, layout) = fixture();
        let mut out = Vec::new();
        nav.on_hover(&"nav-hero".into(), &layout, &mut out);
        out.clear();
        nav.on_hover_end(&layout, &mut out);
        assert_eq!(out, vec![Effect::HideIndicator]);
    }

    #[test]
    fn resize_recomputes_active_geometry() {
        let (mut nav, mut layout) = fixture();
        let mut out = Vec::new();
        nav.on_active_section(&"hero".into(), &layout, &mut out);
        out.clear();

        // Narrower viewport moved the nav entries.
        layout.place("nav-hero", Rect::new(110.0, 15.0, 50.0, 30.0));
        layout.place("nav-bar", Rect::new(100.0, 10.0, 400.0, 40.0));
        nav.on_resize(&layout, &mut out);
        assert_eq!(
            out,
            vec![Effect::Indicator {
                left: 10.0,
                width: 50.0
            }]
        );
    }

    #[test]
    fn without_bar_placement_is_viewport_relative() {
        let (_, layout) = fixture();
        let mut nav = NavIndicator::new(vec![NavEntry::new("hero", "nav-hero")]);
        let mut out = Vec::new();
        nav.on_active_section(&"hero".into(), &layout, &mut out);
        assert_eq!(
            out,
            vec![Effect::Indicator {
                left: 220.0,
                width: 60.0
            }]
        );
    }
}
