#![forbid(unsafe_code)]

//! Scripted scroll-session replay.
//!
//! Builds the demo page, drives the engine through a landing → browse →
//! return session, and logs every effect the host would execute. The
//! image-load confirmation is simulated: each source swap is answered
//! with a `SourceLoaded` on the next step.
//!
//! ```text
//! RUST_LOG=debug cargo run -p glide-sim
//! ```

use std::time::Duration;

use tracing::info;
use tracing_subscriber::EnvFilter;

use glide_core::assets::AssetMap;
use glide_core::event::Event;
use glide_core::geometry::Rect;
use glide_core::layout::StaticLayout;
use glide_core::model::{CarouselModel, NavEntry, PageModel};
use glide_core::options::EngineOptions;
use glide_engine::{Effect, Engine};

const VIEW_W: f32 = 1000.0;
const VIEW_H: f32 = 800.0;
const CARD_W: f32 = 400.0;
const CARD_GAP: f32 = 20.0;
const CARDS: [&str; 5] = ["p1", "p2", "p3", "p4", "p5"];

fn page_model() -> PageModel {
    PageModel::new(
        vec!["hero".into(), "projects".into(), "contact".into()],
        CarouselModel::new(
            "projects",
            "carousel",
            CARDS.iter().map(|c| (*c).into()).collect(),
        ),
    )
    .nav(vec![
        NavEntry::new("hero", "nav-hero"),
        NavEntry::new("projects", "nav-projects"),
        NavEntry::new("contact", "nav-contact"),
    ])
    .nav_bar("nav-bar")
    .reveals(vec!["about-card".into()])
}

fn asset_map() -> AssetMap {
    let mut assets = AssetMap::new("hero").with("hero", "assets/portrait.jpg");
    for card in CARDS {
        assets.insert(card, format!("assets/{card}.jpg"));
    }
    assets
}

/// Viewport-relative geometry for the given page and carousel scroll
/// offsets.
fn layout_at(scroll: f32, carousel_x: f32) -> StaticLayout {
    let mut layout = StaticLayout::new(Rect::from_size(VIEW_W, VIEW_H));

    layout.place("hero", Rect::new(0.0, -scroll, VIEW_W, 800.0));
    layout.place("projects", Rect::new(0.0, 800.0 - scroll, VIEW_W, 800.0));
    layout.place("contact", Rect::new(0.0, 1600.0 - scroll, VIEW_W, 800.0));
    layout.place("carousel", Rect::new(100.0, 950.0 - scroll, 800.0, 500.0));
    for (i, card) in CARDS.iter().enumerate() {
        let content_x = i as f32 * (CARD_W + CARD_GAP);
        layout.place(
            *card,
            Rect::new(100.0 + content_x - carousel_x, 975.0 - scroll, CARD_W, 450.0),
        );
    }
    layout.place("nav-bar", Rect::new(200.0, 10.0, 600.0, 40.0));
    layout.place("nav-hero", Rect::new(220.0, 15.0, 60.0, 30.0));
    layout.place("nav-projects", Rect::new(300.0, 15.0, 90.0, 30.0));
    layout.place("nav-contact", Rect::new(410.0, 15.0, 100.0, 30.0));
    layout.place("about-card", Rect::new(100.0, 850.0 - scroll, 800.0, 200.0));

    layout
}

/// Carousel scroll offset centering card `index` in the container.
fn centering(index: usize) -> f32 {
    index as f32 * (CARD_W + CARD_GAP) + CARD_W / 2.0 - 400.0
}

struct Session {
    engine: Engine,
    /// A source swap awaiting its simulated load confirmation.
    load_pending: bool,
}

impl Session {
    fn new() -> Self {
        Self {
            engine: Engine::new(page_model(), asset_map(), EngineOptions::default()),
            load_pending: false,
        }
    }

    fn step(&mut self, label: &str, event: Event, layout: &StaticLayout) {
        let effects = self.engine.handle(event, layout);
        for effect in &effects {
            info!(step = label, effect = ?effect, "effect");
            if matches!(effect, Effect::SetSource(_)) {
                self.load_pending = true;
            }
        }

        if self.load_pending {
            self.load_pending = false;
            for effect in self.engine.handle(Event::SourceLoaded, layout) {
                info!(step = label, effect = ?effect, "effect");
            }
        }
    }

    /// Advance frame ticks until the transition machine drains.
    fn run_ticks(&mut self, label: &str, layout: &StaticLayout, frames: u32) {
        for _ in 0..frames {
            self.step(
                label,
                Event::Tick {
                    dt: Duration::from_millis(100),
                },
                layout,
            );
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let mut session = Session::new();

    // Landing on the hero section.
    let layout = layout_at(0.0, 0.0);
    session.step("land", Event::VerticalScroll { offset: 0.0 }, &layout);
    session.run_ticks("land", &layout, 5);

    // Scrolling down into the projects section.
    for offset in [150.0, 400.0, 650.0, 800.0] {
        let layout = layout_at(offset, 0.0);
        session.step("scroll-down", Event::VerticalScroll { offset }, &layout);
    }
    let layout = layout_at(800.0, 0.0);
    session.run_ticks("scroll-down", &layout, 5);

    // Browsing the carousel: next page, then centering p3.
    session.step("browse", Event::CarouselNext, &layout);
    let layout = layout_at(800.0, centering(2));
    session.step("browse", Event::HorizontalScroll, &layout);
    session.run_ticks("browse", &layout, 5);

    // Pointer wanders over the centered card.
    session.step(
        "browse",
        Event::PointerMove {
            card: "p3".into(),
            x: 420.0,
            y: 300.0,
        },
        &layout,
    );

    // Hovering the contact link, then leaving the nav.
    session.step(
        "nav",
        Event::NavHover {
            entry: "nav-contact".into(),
        },
        &layout,
    );
    session.step("nav", Event::NavHoverEnd, &layout);

    // Back to the top: hero wins regardless of the carousel position.
    let layout = layout_at(0.0, centering(2));
    session.step("return", Event::VerticalScroll { offset: 0.0 }, &layout);
    session.run_ticks("return", &layout, 5);

    info!(
        focus = ?session.engine.focus().current(),
        displayed = ?session.engine.transition().displayed(),
        "session complete"
    );
}
