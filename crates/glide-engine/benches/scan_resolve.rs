//! Hot path: a vertical scroll event through scan, resolution, and the
//! transition request.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use glide_core::assets::AssetMap;
use glide_core::event::Event;
use glide_core::geometry::Rect;
use glide_core::layout::StaticLayout;
use glide_core::model::{CarouselModel, NavEntry, PageModel};
use glide_core::options::EngineOptions;
use glide_engine::Engine;

fn fixture() -> (Engine, Vec<StaticLayout>) {
    let cards: Vec<_> = (1..=8).map(|i| format!("p{i}").into()).collect();
    let model = PageModel::new(
        vec!["hero".into(), "projects".into(), "contact".into()],
        CarouselModel::new("projects", "carousel", cards),
    )
    .nav(vec![
        NavEntry::new("hero", "nav-hero"),
        NavEntry::new("projects", "nav-projects"),
        NavEntry::new("contact", "nav-contact"),
    ]);

    let mut assets = AssetMap::new("hero").with("hero", "hero.jpg");
    for i in 1..=8 {
        assets.insert(format!("p{i}"), format!("p{i}.jpg"));
    }

    let engine = Engine::new(model, assets, EngineOptions::default());

    // Pre-built layouts across a scroll sweep.
    let layouts = (0..64)
        .map(|step| {
            let scroll = step as f32 * 37.5;
            let mut layout = StaticLayout::new(Rect::from_size(1000.0, 800.0));
            layout.place("hero", Rect::new(0.0, -scroll, 1000.0, 800.0));
            layout.place("projects", Rect::new(0.0, 800.0 - scroll, 1000.0, 800.0));
            layout.place("contact", Rect::new(0.0, 1600.0 - scroll, 1000.0, 800.0));
            layout.place("carousel", Rect::new(100.0, 950.0 - scroll, 800.0, 500.0));
            for i in 0..8u32 {
                layout.place(
                    format!("p{}", i + 1),
                    Rect::new(100.0 + i as f32 * 420.0, 975.0 - scroll, 400.0, 450.0),
                );
            }
            layout.place("nav-hero", Rect::new(220.0, 15.0, 60.0, 30.0));
            layout.place("nav-projects", Rect::new(300.0, 15.0, 90.0, 30.0));
            layout.place("nav-contact", Rect::new(410.0, 15.0, 100.0, 30.0));
            layout
        })
        .collect();

    (engine, layouts)
}

fn bench_scroll_sweep(c: &mut Criterion) {
    let (engine, layouts) = fixture();

    c.bench_function("vertical_scroll_sweep", |b| {
        b.iter(|| {
            let mut engine = engine.clone();
            for (step, layout) in layouts.iter().enumerate() {
                let offset = step as f32 * 37.5;
                black_box(engine.handle(Event::VerticalScroll { offset }, layout));
            }
        });
    });
}

criterion_group!(benches, bench_scroll_sweep);
criterion_main!(benches);
