use crate::card_view::CardView;
use crate::detail_view::DetailView;
use crate::dom;
use folio_core::{DeltaEvent, Gallery, GalleryEvent, TransitionPhase, Viewport};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;
use web_sys as web;

pub type SharedApp = Rc<RefCell<App>>;
pub type WeakApp = Weak<RefCell<App>>;

/// Run `f` against the app if it is still alive and not already borrowed.
/// Listeners can fire synchronously from inside DOM calls made by the app
/// itself; those nested events are dropped.
pub fn with_app<R>(app: &WeakApp, f: impl FnOnce(&mut App) -> R) -> Option<R> {
    let app = app.upgrade()?;
    let mut guard = app.try_borrow_mut().ok()?;
    Some(f(&mut guard))
}

/// Browser-side state: the engine plus the DOM views that mirror it.
pub struct App {
    pub gallery: Gallery,
    document: web::Document,
    root: web::HtmlElement,
    track: web::HtmlElement,
    cards: Vec<CardView>,
    detail: Option<DetailView>,
    pending: Vec<GalleryEvent>,
    me: WeakApp,
}

impl App {
    pub fn new(
        gallery: Gallery,
        document: web::Document,
        root: web::HtmlElement,
        track: web::HtmlElement,
    ) -> SharedApp {
        Rc::new_cyclic(|me| {
            RefCell::new(Self {
                gallery,
                document,
                root,
                track,
                cards: Vec::new(),
                detail: None,
                pending: Vec::new(),
                me: me.clone(),
            })
        })
    }

    /// Build one card element per catalog item.
    pub fn mount_cards(&mut self) -> anyhow::Result<()> {
        let mut cards = Vec::with_capacity(self.gallery.catalog().len());
        for (index, item) in self.gallery.catalog().items().iter().enumerate() {
            let view = CardView::mount(&self.document, &self.track, index, item, self.me.clone())?;
            cards.push(view);
        }
        self.cards = cards;
        self.render_cards();
        Ok(())
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.gallery.set_viewport(viewport);
    }

    pub fn on_delta(&mut self, event: DeltaEvent) {
        self.gallery.on_input(event, &mut self.pending);
        self.process_events();
    }

    pub fn on_key(&mut self, key: &str) -> bool {
        let handled = self.gallery.on_key(key, &mut self.pending);
        self.process_events();
        handled
    }

    /// Card click or keyboard confirm. The rectangle is read before anything
    /// else touches layout.
    pub fn activate(&mut self, index: usize) -> bool {
        let Some(card) = self.cards.get(index) else {
            return false;
        };
        let rect = dom::rect_of(card.element());
        let opened = self.gallery.activate_card(index, rect, &mut self.pending);
        self.process_events();
        opened
    }

    pub fn request_close(&mut self) -> bool {
        let started = self.gallery.request_close(&mut self.pending);
        self.process_events();
        started
    }

    pub fn card_hover(&mut self, index: usize, entered: bool) {
        match (entered, self.cards.get(index)) {
            (true, Some(card)) => {
                let rect = dom::rect_of(card.element());
                self.gallery.card_pointer_enter(index, rect);
            }
            (false, _) => self.gallery.card_pointer_leave(index),
            _ => {}
        }
        self.render_card(index);
    }

    pub fn card_focus(&mut self, index: usize, focused: bool) {
        match (focused, self.cards.get(index)) {
            (true, Some(card)) => {
                let rect = dom::rect_of(card.element());
                self.gallery.card_focus(index, rect);
            }
            (false, _) => self.gallery.card_blur(index),
            _ => {}
        }
        self.render_card(index);
    }

    /// One display refresh: advance the engine, then write every view.
    pub fn frame(&mut self, dt: Duration) {
        self.gallery.tick(dt, &mut self.pending);
        self.process_events();
        self.render_cards();
        if let (Some(view), Some(controller)) = (&self.detail, self.gallery.detail()) {
            view.render(controller);
        }
    }

    fn render_cards(&self) {
        for (view, presenter) in self.cards.iter().zip(self.gallery.cards()) {
            view.apply(presenter);
        }
    }

    fn render_card(&self, index: usize) {
        if let (Some(view), Some(presenter)) = (self.cards.get(index), self.gallery.cards().get(index)) {
            view.apply(presenter);
        }
    }

    fn process_events(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let events = std::mem::take(&mut self.pending);
        for event in &events {
            match *event {
                GalleryEvent::CardSelected { index, .. } => self.open_detail(index),
                GalleryEvent::PhaseChanged(phase) => {
                    if let Some(view) = &self.detail {
                        view.on_phase(phase);
                    }
                    if phase == TransitionPhase::Closing {
                        self.render_cards();
                    }
                }
                GalleryEvent::DetailClosed { index } => {
                    // Dropping the view removes its DOM and every listener it owns.
                    self.detail = None;
                    self.render_cards();
                    if let Some(card) = self.cards.get(index) {
                        card.restore_focus();
                    }
                }
            }
        }
        // Keep the allocation.
        self.pending = events;
        self.pending.clear();
    }

    fn open_detail(&mut self, index: usize) {
        self.render_card(index);
        let (Some(item), Some(controller)) =
            (self.gallery.catalog().get(index), self.gallery.detail())
        else {
            return;
        };
        match DetailView::mount(&self.document, &self.root, item, self.me.clone()) {
            Ok(view) => {
                view.render(controller);
                view.on_phase(controller.phase());
                self.detail = Some(view);
            }
            Err(e) => log::error!("[detail] failed to mount overlay: {:?}", e),
        }
    }
}
