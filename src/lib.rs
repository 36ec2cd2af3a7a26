#![cfg(target_arch = "wasm32")]
use folio_core::{default_catalog, CarouselConfig, DetailConfig, Gallery};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod app;
mod card_view;
mod constants;
mod detail_view;
mod dom;
mod events;
mod frame;
mod overlay;
mod style;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("[init] folio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("[init] error: {:?}", e);
        }
    });
    Ok(())
}

/// Mount point: `#folio-root` when the page provides one, else `<body>`.
fn mount_root(document: &web::Document) -> anyhow::Result<web::HtmlElement> {
    if let Some(el) = document.get_element_by_id(constants::ROOT_ID) {
        return el
            .dyn_into::<web::HtmlElement>()
            .map_err(|e| anyhow::anyhow!("#{} is not an HtmlElement: {:?}", constants::ROOT_ID, e));
    }
    document.body().ok_or_else(|| anyhow::anyhow!("no body"))
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let root = mount_root(&document)?;
    dom::set_styles(
        &root,
        &[
            ("position", "relative"),
            ("width", "100vw"),
            ("height", "100vh"),
            ("overflow", "hidden"),
            ("background", "#000"),
            ("touch-action", "none"),
        ],
    );
    overlay::install_base_style(&document)?;
    overlay::show_loading(&document, &root)?;

    let catalog = default_catalog();
    let viewport = dom::viewport();
    log::info!(
        "[init] {} items, viewport {:.0}x{:.0}",
        catalog.len(),
        viewport.width,
        viewport.height
    );
    let gallery = Gallery::new(
        catalog,
        CarouselConfig::default(),
        DetailConfig::default(),
        viewport,
    );

    overlay::mount_chrome(&document, &root)?;
    let track = overlay::mount_stage(&document, &root)?;
    let app = app::App::new(gallery, document.clone(), root, track);
    app.borrow_mut().mount_cards()?;
    overlay::hide_loading(&document);

    events::wire_delta_sources(&window, app.clone());
    events::wire_global_keydown(&window, app.clone());
    events::wire_resize(&window, app.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(app)));
    frame::start_loop(frame_ctx);
    Ok(())
}
