//! Standalone demo: opens a window with the palette strip and a swatch.

use floem::prelude::*;
use floem::window::WindowConfig;
use floem_palette::{gradient_palette, PaletteColor};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("floem_palette=info")),
        )
        .with_target(true)
        .init();

    let selection = RwSignal::new(PaletteColor::default());

    floem::Application::new()
        .window(
            move |_| {
                h_stack((
                    gradient_palette(selection),
                    v_stack((
                        empty().style(move |s| {
                            let c = selection.get().color();
                            s.width(48.0)
                                .height(48.0)
                                .border_radius(4.0)
                                .border(1.0)
                                .border_color(Color::rgb8(180, 180, 180))
                                .background(Color::rgba(c.r(), c.g(), c.b(), c.a()))
                        }),
                        label(move || {
                            let p = selection.get();
                            format!("#{}  {:.3}", p.color().to_hex(), p.phase())
                        }),
                    ))
                    .style(|s| s.gap(8.0)),
                ))
                .style(|s| s.gap(16.0).padding(16.0).size_full())
                .on_event_stop(floem::event::EventListener::WindowClosed, |_| {
                    floem::quit_app()
                })
            },
            Some(
                WindowConfig::default()
                    .size((200.0, 240.0))
                    .title("floem-palette"),
            ),
        )
        .run();
}
