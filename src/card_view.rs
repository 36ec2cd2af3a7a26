use crate::app::{with_app, WeakApp};
use crate::constants::*;
use crate::dom;
use crate::style;
use folio_core::card::CardPresenter;
use folio_core::catalog::GalleryItem;
use folio_core::input::is_activation_key;
use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys as web;

/// DOM mirror of one card. Listeners are owned here and unregister when the
/// view is dropped.
pub struct CardView {
    root: web::HtmlElement,
    label: web::HtmlElement,
    _listeners: Vec<EventListener>,
}

impl CardView {
    pub fn mount(
        document: &web::Document,
        track: &web::HtmlElement,
        index: usize,
        item: &GalleryItem,
        app: WeakApp,
    ) -> anyhow::Result<Self> {
        let root = dom::create(document, "div", &[CARD_CLASS])?;
        dom::set_attr(&root, "role", "button");
        dom::set_attr(&root, "tabindex", "0");
        dom::set_attr(&root, "aria-label", &item.title);
        dom::set_styles(
            &root,
            &[
                ("position", "absolute"),
                ("width", CARD_WIDTH),
                ("height", CARD_HEIGHT),
                ("transform-style", "preserve-3d"),
                ("transition", CARD_FILTER_TRANSITION),
                ("cursor", "pointer"),
            ],
        );

        let image = dom::create_image(document, &item.thumbnail_image, &item.title, &[CARD_IMAGE_CLASS])?;
        // First few cards are on screen immediately.
        dom::set_attr(&image, "loading", if index < 3 { "eager" } else { "lazy" });
        dom::append(&root, &image);

        let label = dom::create(document, "div", &[CARD_LABEL_CLASS, HIDDEN_CLASS])?;
        dom::set_style(&label, "position", "absolute");
        dom::set_style(&label, "pointer-events", "none");
        let line = dom::create(document, "div", &[CARD_LABEL_LINE_CLASS])?;
        dom::set_style(&line, "width", &style::px(LABEL_LINE_WIDTH_PX));
        let title = dom::create_text(document, "div", &[CARD_LABEL_TEXT_CLASS], &item.title)?;
        dom::append(&label, &line);
        dom::append(&label, &title);
        dom::append(&root, &label);
        dom::append(track, &root);

        let listeners = Self::listen(&root, index, app);
        Ok(Self {
            root,
            label,
            _listeners: listeners,
        })
    }

    fn listen(root: &web::HtmlElement, index: usize, app: WeakApp) -> Vec<EventListener> {
        let mut listeners = Vec::with_capacity(6);

        for (name, entered) in [("mouseenter", true), ("mouseleave", false)] {
            let app = app.clone();
            listeners.push(EventListener::new(root, name, move |_event: &web::Event| {
                with_app(&app, |app| app.card_hover(index, entered));
            }));
        }
        for (name, focused) in [("focus", true), ("blur", false)] {
            let app = app.clone();
            listeners.push(EventListener::new(root, name, move |_event: &web::Event| {
                with_app(&app, |app| app.card_focus(index, focused));
            }));
        }

        let click_app = app.clone();
        listeners.push(EventListener::new(root, "click", move |_event: &web::Event| {
            with_app(&click_app, |app| app.activate(index));
        }));

        listeners.push(EventListener::new_with_options(
            root,
            "keydown",
            EventListenerOptions::enable_prevent_default(),
            move |event: &web::Event| {
                let Some(ev) = event.dyn_ref::<web::KeyboardEvent>() else {
                    return;
                };
                if !is_activation_key(&ev.key()) {
                    return;
                }
                ev.prevent_default();
                with_app(&app, |app| app.activate(index));
            },
        ));
        listeners
    }

    #[inline]
    pub fn element(&self) -> &web::Element {
        &self.root
    }

    /// Write the presenter's latest frame and label state.
    pub fn apply(&self, presenter: &CardPresenter) {
        if let Some(frame) = presenter.frame() {
            let t = &frame.transform;
            dom::set_styles(
                &self.root,
                &[
                    ("transform", style::card_transform(t)),
                    ("filter", style::brightness_filter(t.brightness)),
                    ("z-index", style::z_index(t.paint_order)),
                ],
            );
        }

        let hidden = presenter.is_hidden();
        dom::set_style(&self.root, "visibility", if hidden { "hidden" } else { "visible" });
        dom::set_style(&self.root, "pointer-events", if hidden { "none" } else { "auto" });
        dom::set_attr(&self.root, "tabindex", if hidden { "-1" } else { "0" });
        dom::set_attr(&self.root, "aria-hidden", if hidden { "true" } else { "false" });

        let show_label = presenter.is_label_visible();
        dom::set_hidden(&self.label, !show_label);
        if show_label {
            dom::set_styles(&self.label, &style::label_position(presenter.label_placement()));
        }
    }

    pub fn restore_focus(&self) {
        _ = self.root.focus();
    }
}
