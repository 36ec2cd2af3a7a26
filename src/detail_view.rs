//! DOM for the detail overlay.
//!
//! The view is created when a card is selected and dropped when the
//! controller reports that closing finished. Escape, backdrop and close
//! button listeners are owned by the view, so they exist exactly as long as
//! the overlay does.

use crate::app::{with_app, WeakApp};
use crate::constants::*;
use crate::dom;
use crate::events::escape_listener;
use crate::style;
use folio_core::catalog::GalleryItem;
use folio_core::detail::{DetailController, TransitionPhase};
use gloo::events::EventListener;
use web_sys as web;

pub struct DetailView {
    root: web::HtmlElement,
    backdrop: web::HtmlElement,
    container: web::HtmlElement,
    surface: web::HtmlElement,
    hero_image: web::HtmlElement,
    preview_hint: web::HtmlElement,
    fullscreen_hint: web::HtmlElement,
    /// Hero text, one per secondary image, footer.
    blocks: Vec<web::HtmlElement>,
    parallax: Vec<web::HtmlElement>,
    _listeners: Vec<EventListener>,
}

impl DetailView {
    pub fn mount(
        document: &web::Document,
        parent: &web::HtmlElement,
        item: &GalleryItem,
        app: WeakApp,
    ) -> anyhow::Result<Self> {
        let root = dom::create(document, "div", &[])?;
        root.set_id(DETAIL_ID);
        dom::set_attr(&root, "role", "dialog");
        dom::set_attr(&root, "aria-modal", "true");
        dom::set_attr(&root, "aria-label", &item.title);
        dom::set_styles(
            &root,
            &[
                ("position", "fixed".to_string()),
                ("inset", "0".to_string()),
                ("z-index", DETAIL_Z_INDEX.to_string()),
            ],
        );

        let backdrop = dom::create(document, "div", &[DETAIL_BACKDROP_CLASS])?;
        dom::set_styles(
            &backdrop,
            &[
                ("position", "absolute"),
                ("inset", "0"),
                ("background", "rgba(0, 0, 0, 0.95)"),
                ("backdrop-filter", "blur(12px)"),
                ("cursor", "pointer"),
                ("opacity", "0"),
            ],
        );
        dom::append(&root, &backdrop);

        let container = dom::create(document, "div", &[DETAIL_CONTAINER_CLASS])?;
        dom::set_styles(
            &container,
            &[
                ("position", "fixed"),
                ("overflow", "hidden"),
                ("background", "#000"),
                ("will-change", "transform, width, height"),
            ],
        );
        let surface = dom::create(document, "div", &[DETAIL_SURFACE_CLASS])?;
        dom::set_styles(
            &surface,
            &[("width", "100%"), ("height", "100%"), ("will-change", "transform")],
        );
        dom::append(&container, &surface);

        // Hero section with the text block and phase hints.
        let hero = dom::create(document, "section", &[DETAIL_HERO_CLASS])?;
        dom::set_styles(
            &hero,
            &[("position", "relative"), ("width", "100%"), ("height", "100%"), ("overflow", "hidden")],
        );
        let hero_image = dom::create(document, "div", &[DETAIL_HERO_IMAGE_CLASS])?;
        dom::set_styles(&hero_image, &[("position", "absolute"), ("inset", "0")]);
        let img = dom::create_image(document, item.hero_image(), &item.title, &[])?;
        dom::set_styles(&img, &[("width", "100%"), ("height", "100%"), ("object-fit", "cover")]);
        dom::append(&hero_image, &img);
        dom::append(&hero, &hero_image);

        let hero_text = dom::create(document, "div", &[DETAIL_CONTENT_CLASS])?;
        dom::set_styles(
            &hero_text,
            &[("position", "absolute"), ("left", "0"), ("right", "0"), ("bottom", "0"), ("padding", "4rem")],
        );
        dom::append(&hero_text, &dom::create_text(document, "p", &[], &item.year)?);
        let heading = dom::create_text(document, "h2", &[], &item.title)?;
        dom::append(&hero_text, &heading);
        dom::append(&hero_text, &dom::create_text(document, "p", &[], &item.description)?);
        dom::append(&hero, &hero_text);

        let preview_hint = dom::create_text(document, "div", &[DETAIL_HINT_CLASS, HIDDEN_CLASS], PREVIEW_HINT_TEXT)?;
        let fullscreen_hint =
            dom::create_text(document, "div", &[DETAIL_HINT_CLASS, HIDDEN_CLASS], FULLSCREEN_HINT_TEXT)?;
        dom::append(&hero, &preview_hint);
        dom::append(&hero, &fullscreen_hint);
        dom::append(&surface, &hero);

        let mut blocks = vec![hero_text];
        let mut parallax = Vec::new();
        for (i, src) in item.secondary_images().iter().enumerate() {
            let section = dom::create(document, "section", &[DETAIL_SECTION_CLASS, DETAIL_CONTENT_CLASS, HIDDEN_CLASS])?;
            dom::set_styles(
                &section,
                &[("height", "100vh"), ("display", "flex"), ("align-items", "center"), ("justify-content", "center")],
            );
            let frame = dom::create(document, "div", &[DETAIL_PARALLAX_CLASS])?;
            dom::set_style(&frame, "will-change", "transform");
            let alt = format!("{} - Image {}", item.title, i + 2);
            let img = dom::create_image(document, src, &alt, &[])?;
            dom::set_styles(&img, &[("width", "100%"), ("object-fit", "cover")]);
            dom::append(&frame, &img);
            dom::append(&section, &frame);
            dom::append(&surface, &section);
            blocks.push(section);
            parallax.push(frame);
        }

        let footer = dom::create(document, "section", &[DETAIL_FOOTER_CLASS, DETAIL_CONTENT_CLASS, HIDDEN_CLASS])?;
        dom::append(&footer, &dom::create_text(document, "p", &[], FOOTER_PROMPT_TEXT)?);
        let back = dom::create_text(document, "button", &[DETAIL_BACK_CLASS], FOOTER_BACK_TEXT)?;
        dom::append(&footer, &back);
        dom::append(&surface, &footer);
        blocks.push(footer);
        dom::append(&root, &container);

        let close = dom::create_text(document, "button", &[DETAIL_CLOSE_CLASS], "\u{00d7}")?;
        dom::set_attr(&close, "aria-label", CLOSE_LABEL);
        dom::set_styles(
            &close,
            &[
                ("position", "fixed".to_string()),
                ("top", "1.5rem".to_string()),
                ("right", "1.5rem".to_string()),
                ("z-index", DETAIL_CLOSE_Z_INDEX.to_string()),
            ],
        );
        dom::append(&root, &close);
        dom::append(parent, &root);

        let mut listeners = vec![escape_listener(document, app.clone())];
        for target in [&backdrop, &close, &back] {
            let app = app.clone();
            listeners.push(EventListener::new(target, "click", move |_event: &web::Event| {
                with_app(&app, |app| app.request_close());
            }));
        }
        log::debug!("[detail] overlay mounted with {} listeners", listeners.len());

        Ok(Self {
            root,
            backdrop,
            container,
            surface,
            hero_image,
            preview_hint,
            fullscreen_hint,
            blocks,
            parallax,
            _listeners: listeners,
        })
    }

    /// Write the controller's visual state for this frame.
    pub fn render(&self, controller: &DetailController) {
        let v = controller.visual();

        dom::set_styles(&self.container, &style::rect_properties(&v.container));
        dom::set_styles(
            &self.container,
            &[
                ("transform", style::rotate_y(v.container_rotation_y)),
                ("border-radius", style::px(v.border_radius)),
            ],
        );
        dom::set_style(&self.backdrop, "opacity", &style::opacity(v.overlay_opacity));
        dom::set_style(
            &self.surface,
            "transform",
            &style::translate_y_scale(v.surface_offset_y - v.scroll_offset, v.surface_scale),
        );
        dom::set_style(
            &self.hero_image,
            "transform",
            &style::translate_y_scale(v.hero_offset_y, v.hero_scale),
        );

        let sections_visible = controller.sections_visible();
        for (i, block) in self.blocks.iter().enumerate() {
            if i > 0 {
                dom::set_hidden(block, !sections_visible);
            }
            let opacity = v.content_opacity.get(i).copied().unwrap_or(0.0);
            let offset = v.content_offset_y.get(i).copied().unwrap_or(0.0);
            dom::set_styles(
                block,
                &[("opacity", style::opacity(opacity)), ("transform", style::translate_y(offset))],
            );
        }
        for (frame, offset) in self.parallax.iter().zip(&v.gallery_offsets) {
            dom::set_style(frame, "transform", &style::translate_y(*offset));
        }
    }

    /// Swap the phase hints. Called once per phase change.
    pub fn on_phase(&self, phase: TransitionPhase) {
        dom::set_hidden(&self.preview_hint, phase != TransitionPhase::Preview);
        dom::set_hidden(&self.fullscreen_hint, phase != TransitionPhase::Fullscreen);
    }
}

impl Drop for DetailView {
    fn drop(&mut self) {
        dom::remove(&self.root);
        log::debug!("[detail] overlay removed");
    }
}
