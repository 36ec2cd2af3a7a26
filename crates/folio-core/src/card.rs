//! Card presenter: local hover/focus state, label placement and activation
//! for one gallery item.

use crate::carousel::CardFrame;
use crate::geometry::Rect;

/// Where the hover label sits relative to the card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LabelPlacement {
    Above,
    #[default]
    Below,
}

/// Cards whose vertical centre is in the lower half of the viewport put
/// their label above, everything else below.
#[inline]
pub fn label_placement_for(card_rect: &Rect, viewport_height: f32) -> LabelPlacement {
    if card_rect.center().y > viewport_height * 0.5 {
        LabelPlacement::Above
    } else {
        LabelPlacement::Below
    }
}

/// A card reporting that it was activated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Activation {
    pub index: usize,
    pub origin_rect: Rect,
}

#[derive(Clone, Debug)]
pub struct CardPresenter {
    index: usize,
    hovered: bool,
    focused: bool,
    label: LabelPlacement,
    frame: Option<CardFrame>,
}

impl CardPresenter {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            hovered: false,
            focused: false,
            label: LabelPlacement::default(),
            frame: None,
        }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Store the transform supplied by the driver for this frame.
    pub fn apply(&mut self, frame: CardFrame) {
        if frame.hidden && self.is_label_visible() {
            self.hovered = false;
            self.focused = false;
        }
        self.frame = Some(frame);
    }

    #[inline]
    pub fn frame(&self) -> Option<&CardFrame> {
        self.frame.as_ref()
    }

    #[inline]
    pub fn is_hidden(&self) -> bool {
        self.frame.map(|f| f.hidden).unwrap_or(false)
    }

    #[inline]
    pub fn is_label_visible(&self) -> bool {
        self.hovered || self.focused
    }

    #[inline]
    pub fn label_placement(&self) -> LabelPlacement {
        self.label
    }

    /// Pointer entered. Placement is measured when hover begins and kept
    /// until it ends.
    pub fn pointer_enter(&mut self, rect: Rect, viewport_height: f32) {
        if self.is_hidden() {
            return;
        }
        if !self.is_label_visible() {
            self.label = label_placement_for(&rect, viewport_height);
        }
        self.hovered = true;
    }

    pub fn pointer_leave(&mut self) {
        self.hovered = false;
    }

    pub fn focus(&mut self, rect: Rect, viewport_height: f32) {
        if self.is_hidden() {
            return;
        }
        if !self.is_label_visible() {
            self.label = label_placement_for(&rect, viewport_height);
        }
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Click or keyboard confirm. `rect` must be the card's bounding
    /// rectangle read before anything else changes layout. Hidden cards
    /// never activate.
    pub fn activate(&self, rect: Rect) -> Option<Activation> {
        if self.is_hidden() {
            return None;
        }
        Some(Activation {
            index: self.index,
            origin_rect: rect,
        })
    }
}
