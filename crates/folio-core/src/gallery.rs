//! Gallery orchestration: routes input to the carousel driver or the open
//! detail view, turns card activation into a selection, and hands control
//! back to the driver when the detail view reports that it closed.

use crate::card::CardPresenter;
use crate::carousel::{CarouselConfig, CarouselDriver};
use crate::catalog::{Catalog, GalleryItem};
use crate::detail::{DetailConfig, DetailController, DetailEvent, TransitionPhase};
use crate::geometry::{Rect, Viewport};
use crate::input::{is_close_key, step_for_key, DeltaEvent};
use std::time::Duration;

/// The item currently open in the detail view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Selection {
    pub index: usize,
    pub origin_rect: Rect,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GalleryEvent {
    CardSelected { index: usize, origin_rect: Rect },
    PhaseChanged(TransitionPhase),
    /// Emitted once per open/close cycle, after the closing animation.
    DetailClosed { index: usize },
}

#[derive(Debug)]
pub struct Gallery {
    catalog: Catalog,
    driver: CarouselDriver,
    cards: Vec<CardPresenter>,
    detail: Option<DetailController>,
    selection: Option<Selection>,
    detail_config: DetailConfig,
    viewport: Viewport,
    scratch: Vec<DetailEvent>,
}

impl Gallery {
    pub fn new(
        catalog: Catalog,
        carousel: CarouselConfig,
        detail_config: DetailConfig,
        viewport: Viewport,
    ) -> Self {
        let driver = CarouselDriver::new(catalog.len(), carousel);
        let cards = (0..catalog.len()).map(CardPresenter::new).collect();
        log::info!("[carousel] mounted {} cards", catalog.len());
        Self {
            catalog,
            driver,
            cards,
            detail: None,
            selection: None,
            detail_config,
            viewport,
            scratch: Vec::new(),
        }
    }

    #[inline]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[inline]
    pub fn driver(&self) -> &CarouselDriver {
        &self.driver
    }

    #[inline]
    pub fn cards(&self) -> &[CardPresenter] {
        &self.cards
    }

    #[inline]
    pub fn detail(&self) -> Option<&DetailController> {
        self.detail.as_ref()
    }

    #[inline]
    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    pub fn selected_item(&self) -> Option<&GalleryItem> {
        self.selection.and_then(|s| self.catalog.get(s.index))
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Resizes reach the open detail view too.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        if let Some(detail) = &mut self.detail {
            detail.set_viewport(viewport);
        }
    }

    /// Vertical input goes to the detail view while one is open, otherwise
    /// to the carousel.
    pub fn on_input(&mut self, event: DeltaEvent, out: &mut Vec<GalleryEvent>) {
        match &mut self.detail {
            Some(detail) => {
                detail.on_input(event, &mut self.scratch);
                self.drain_detail_events(out);
            }
            None => {
                self.driver.on_input(event);
            }
        }
    }

    /// Returns whether the key was consumed.
    pub fn on_key(&mut self, key: &str, out: &mut Vec<GalleryEvent>) -> bool {
        if is_close_key(key) {
            return self.request_close(out);
        }
        match step_for_key(key) {
            Some(step) => self.driver.step(step),
            None => false,
        }
    }

    /// Activate card `index`, whose bounding rectangle was read synchronously
    /// by the caller. Ignored while another selection is open or the card is
    /// hidden.
    pub fn activate_card(&mut self, index: usize, rect: Rect, out: &mut Vec<GalleryEvent>) -> bool {
        if self.selection.is_some() {
            return false;
        }
        let Some(activation) = self.cards.get(index).and_then(|c| c.activate(rect)) else {
            return false;
        };
        let Some(item) = self.catalog.get(activation.index) else {
            return false;
        };
        let secondary = item.secondary_images().len();
        log::info!("[card] selected `{}` ({})", item.title, item.id);

        let selection = Selection {
            index: activation.index,
            origin_rect: activation.origin_rect,
        };
        self.selection = Some(selection);
        self.driver.set_selected(Some(activation.index));
        self.sync_cards();
        out.push(GalleryEvent::CardSelected {
            index: selection.index,
            origin_rect: selection.origin_rect,
        });

        let detail = DetailController::open(
            selection.index,
            selection.origin_rect,
            self.viewport,
            secondary,
            self.detail_config,
            &mut self.scratch,
        );
        self.detail = Some(detail);
        self.drain_detail_events(out);
        true
    }

    /// Escape, backdrop click and close controls all land here.
    pub fn request_close(&mut self, out: &mut Vec<GalleryEvent>) -> bool {
        let started = match &mut self.detail {
            Some(detail) => detail.request_close(&mut self.scratch),
            None => false,
        };
        self.drain_detail_events(out);
        started
    }

    pub fn card_pointer_enter(&mut self, index: usize, rect: Rect) {
        let height = self.viewport.height;
        if let Some(card) = self.cards.get_mut(index) {
            card.pointer_enter(rect, height);
        }
    }

    pub fn card_pointer_leave(&mut self, index: usize) {
        if let Some(card) = self.cards.get_mut(index) {
            card.pointer_leave();
        }
    }

    pub fn card_focus(&mut self, index: usize, rect: Rect) {
        let height = self.viewport.height;
        if let Some(card) = self.cards.get_mut(index) {
            card.focus(rect, height);
        }
    }

    pub fn card_blur(&mut self, index: usize) {
        if let Some(card) = self.cards.get_mut(index) {
            card.blur();
        }
    }

    /// One display refresh: the driver updates first, then every card takes
    /// its transform, then the detail view advances.
    pub fn tick(&mut self, dt: Duration, out: &mut Vec<GalleryEvent>) {
        self.driver.frame();
        self.sync_cards();
        if let Some(detail) = &mut self.detail {
            detail.tick(dt, &mut self.scratch);
        }
        self.drain_detail_events(out);
    }

    /// Push the driver's latest frames to the cards without advancing.
    fn sync_cards(&mut self) {
        for (card, frame) in self.cards.iter_mut().zip(self.driver.frames()) {
            card.apply(*frame);
        }
    }

    fn drain_detail_events(&mut self, out: &mut Vec<GalleryEvent>) {
        let mut closed = false;
        for ev in self.scratch.drain(..) {
            match ev {
                DetailEvent::PhaseChanged(phase) => out.push(GalleryEvent::PhaseChanged(phase)),
                DetailEvent::Closed => closed = true,
            }
        }
        if closed {
            self.finish_close(out);
        }
    }

    fn finish_close(&mut self, out: &mut Vec<GalleryEvent>) {
        self.detail = None;
        if let Some(selection) = self.selection.take() {
            self.driver.set_selected(None);
            self.sync_cards();
            log::info!("[carousel] input restored after closing item {}", selection.index);
            out.push(GalleryEvent::DetailClosed {
                index: selection.index,
            });
        }
    }
}
