#![forbid(unsafe_code)]

//! Card hover glow: viewport pointer coordinates to card-local ones.

use glide_core::key::ContentKey;
use glide_core::layout::Layout;

use crate::effects::Effect;

/// Glow origin for the pointer at `(x, y)` over `card`, relative to the
/// card's top-left corner. `None` when the card has no geometry.
pub fn glow_origin(card: &ContentKey, x: f32, y: f32, layout: &impl Layout) -> Option<Effect> {
    let rect = layout.bounds(card)?;
    Some(Effect::GlowOrigin {
        card: card.clone(),
        x: x - rect.left(),
        y: y - rect.top(),
    })
}
