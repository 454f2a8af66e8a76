#![forbid(unsafe_code)]

//! Scroll targeting and carousel paging.

use glide_core::key::ContentKey;
use glide_core::layout::Layout;

use crate::effects::Effect;

/// Scroll target for an anchor activation: the target element's page
/// position minus the fixed header height, so the heading is not hidden
/// under the navbar. `None` when the target has no geometry.
pub fn anchor_target(
    target: &ContentKey,
    current_scroll: f32,
    header_offset: f32,
    layout: &impl Layout,
) -> Option<Effect> {
    let bounds = layout.bounds(target)?;
    Some(Effect::ScrollTo {
        offset: bounds.top() + current_scroll - header_offset,
    })
}

/// Carousel paging: scroll the container by exactly its own width, so each
/// activation advances one full page of cards.
pub fn page_carousel(
    container: &ContentKey,
    forward: bool,
    layout: &impl Layout,
) -> Option<Effect> {
    let width = layout.bounds(container)?.width;
    let delta = if forward { width } else { -width };
    Some(Effect::ScrollCarouselBy { delta })
}

#[cfg(test)]
mod tests {
    use glide_core::geometry::Rect;
    use glide_core::layout::StaticLayout;

    use super::*;

    fn layout() -> StaticLayout {
        StaticLayout::new(Rect::from_size(1000.0, 800.0))
            .with("contact", Rect::new(0.0, 700.0, 1000.0, 800.0))
            .with("carousel", Rect::new(100.0, 200.0, 800.0, 400.0))
    }

    #[test]
    fn anchor_target_subtracts_header_offset() {
        // Element 700px below the viewport top, page scrolled to 100.
        let effect = anchor_target(&"contact".into(), 100.0, 70.0, &layout());
        assert_eq!(effect, Some(Effect::ScrollTo { offset: 730.0 }));
    }

    #[test]
    fn missing_anchor_target_is_skipped() {
        assert_eq!(anchor_target(&"ghost".into(), 100.0, 70.0, &layout()), None);
    }

    #[test]
    fn paging_scrolls_one_container_width() {
        let l = layout();
        assert_eq!(
            page_carousel(&"carousel".into(), true, &l),
            Some(Effect::ScrollCarouselBy { delta: 800.0 })
        );
        assert_eq!(
            page_carousel(&"carousel".into(), false, &l),
            Some(Effect::ScrollCarouselBy { delta: -800.0 })
        );
    }

    #[test]
    fn paging_without_container_is_skipped() {
        assert_eq!(page_carousel(&"ghost".into(), true, &layout()), None);
    }
}
