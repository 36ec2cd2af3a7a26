//! Platform-independent engine for the folio gallery: the scroll-driven
//! carousel, card presentation state and the detail transition controller.
//!
//! Nothing here touches the DOM. The web front-end feeds input events and
//! frame times in, and reads transforms and visual state back out.

pub mod card;
pub mod carousel;
pub mod catalog;
pub mod constants;
pub mod detail;
pub mod gallery;
pub mod geometry;
pub mod gesture;
pub mod input;
pub mod tween;

pub use card::{label_placement_for, Activation, CardPresenter, LabelPlacement};
pub use carousel::{CardFrame, CardTransform, CarouselConfig, CarouselDriver, CarouselState};
pub use catalog::{default_catalog, Catalog, CatalogError, GalleryItem};
pub use detail::{DetailConfig, DetailController, DetailEvent, DetailVisual, TransitionPhase};
pub use gallery::{Gallery, GalleryEvent, Selection};
pub use geometry::{Rect, Viewport};
pub use input::{DeltaEvent, DeltaFilter, DeltaSource};
