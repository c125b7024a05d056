#![cfg(target_arch = "wasm32")]
use crate::constants::{PARTICLE_CLASS, PARTICLE_COUNT};
use crate::core::interaction::{self, FocusMode, BADGE_CARD_STYLE, BADGE_SECTION_STYLE};
use crate::core::{motion, reveal, LoopCommand, PageLifecycle, Role, Viewport};
use crate::dom::ElementRegistry;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod gsap;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("landing-fx starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    dom::document_ready(&document).await;

    gsap::register_plugins();

    let mut registry = ElementRegistry::default();
    let targets = dom::resolve_targets(&document, &mut registry);
    let registry = Rc::new(registry);
    let viewport = dom::viewport(&window);
    let page = events::Page {
        window: window.clone(),
        document: document.clone(),
        registry: registry.clone(),
        targets: Rc::new(targets),
        sink: gsap::GsapSink::new(registry),
        focus: Rc::new(RefCell::new(FocusMode::default())),
        initial_viewport: viewport,
    };
    let mut rng = StdRng::from_entropy();
    let mut sink = page.sink.clone();

    // Pointer-driven and ambient motion
    events::wire_pointer(&page);
    events::wire_hover_targets(&page);
    let drifting = motion::spawn_drift(page.targets.get(Role::Shape), &mut rng, &mut sink);
    log::info!("[motion] {} shapes drifting", drifting);

    // Background mesh; only desktop layouts run the frame loop
    let mesh = match render::MeshCanvas::from_document(&document, viewport) {
        Ok(m) => Some(Rc::new(RefCell::new(m))),
        Err(e) => {
            log::warn!("[mesh] disabled: {:?}", e);
            None
        }
    };
    match &mesh {
        Some(m) if viewport.is_desktop() => run_mesh_loop(&window, m.clone()),
        Some(_) => log::info!("[mesh] narrow viewport; animation off"),
        None => {}
    }
    events::wire_resize(&page, mesh);

    // Intro, reveals and interactions
    reveal::play_hero_intro(&page.targets, &mut sink);
    let reveals = reveal::play_section_reveals(&page.targets, &mut sink);
    log::debug!("[reveal] {} section reveals registered", reveals);
    events::wire_card_tilt(&page);
    events::wire_anchor_links(&page);
    events::wire_join_buttons(&page);
    events::wire_header_scroll(&page);
    events::wire_keyboard_focus(&page);
    adapt_layout(&page, viewport);

    if viewport.is_desktop() {
        spawn_hero_particles(&page, &mut rng);
    }
    reveal_badges(&page);
    log::info!("landing-fx initialized");
    Ok(())
}

/// Frame loop for the mesh, stopped on `pagehide` and restarted when the
/// page comes back from the back/forward cache.
fn run_mesh_loop(window: &web::Window, mesh: Rc<RefCell<render::MeshCanvas>>) {
    let start = move || {
        let mesh = mesh.clone();
        frame::FrameLoop::start(move || mesh.borrow_mut().frame())
    };
    let current = Rc::new(RefCell::new(start()));
    let lifecycle = Rc::new(RefCell::new(PageLifecycle::default()));

    {
        let current = current.clone();
        let lifecycle = lifecycle.clone();
        dom::on(window, "pagehide", move |ev: web::PageTransitionEvent| {
            if lifecycle.borrow_mut().on_hide(ev.persisted()) == LoopCommand::Stop {
                current.borrow().stop();
            }
        });
    }
    dom::on(window, "pageshow", move |ev: web::PageTransitionEvent| {
        if lifecycle.borrow_mut().on_show(ev.persisted()) == LoopCommand::Restart {
            log::info!("[mesh] restored from page cache");
            *current.borrow_mut() = start();
        }
    });
}

fn spawn_hero_particles(page: &events::Page, rng: &mut StdRng) {
    let hero = page
        .targets
        .first(Role::HeroSection)
        .and_then(|id| page.registry.get(id));
    let Some(hero) = hero else {
        log::warn!("[particles] no hero section");
        return;
    };
    let mut created = 0;
    for spec in interaction::spawn_particles(rng, PARTICLE_COUNT) {
        let Ok(particle) = page.document.create_element("div") else {
            continue;
        };
        _ = particle.class_list().add_1(PARTICLE_CLASS);
        let style = spec.style();
        dom::apply_styles(&particle, style.iter().map(|(k, v)| (*k, v.as_str())));
        if hero.append_child(&particle).is_ok() {
            created += 1;
        }
    }
    log::debug!("[particles] created {}", created);
}

/// Narrow layouts lose the particles and run the CSS shape animations slower.
fn adapt_layout(page: &events::Page, viewport: Viewport) {
    let shapes: Vec<&web::Element> = page.elements(Role::Shape).collect();
    let durations: Vec<Option<f64>> = shapes
        .iter()
        .map(|el| {
            dom::computed_style(&page.window, el, "animation-duration")
                .and_then(|v| interaction::parse_css_seconds(&v))
        })
        .collect();
    let plan = interaction::adapt_layout(viewport, &durations);
    if plan.is_noop() {
        return;
    }
    for (el, duration) in shapes.iter().zip(&plan.shape_durations) {
        if let Some(secs) = duration {
            let value = format!("{}s", secs);
            dom::apply_styles(el, [("animation-duration", value.as_str())]);
        }
    }
    if plan.remove_particles {
        for particle in dom::query_all(&page.document, Role::Particle.selector()) {
            particle.remove();
        }
    }
    log::info!("[layout] mobile adaptation applied");
}

fn reveal_badges(page: &events::Page) {
    for section in page.elements(Role::BadgeSection) {
        dom::apply_styles(section, BADGE_SECTION_STYLE.iter().copied());
    }
    for card in page.elements(Role::BadgeCard) {
        dom::apply_styles(card, BADGE_CARD_STYLE.iter().copied());
    }
}
