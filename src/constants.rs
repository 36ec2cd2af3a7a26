// DOM ids, class names, copy and CSS fragments for the web front-end.
//
// Layout tuning that the engine cares about lives in `folio_core::constants`;
// this file only holds what the browser side needs to build and style the
// document.

// Mount points
pub const ROOT_ID: &str = "folio-root";
pub const LOADING_ID: &str = "folio-loading";
pub const STAGE_ID: &str = "folio-stage";
pub const TRACK_ID: &str = "folio-track";
pub const DETAIL_ID: &str = "folio-detail";
pub const BASE_STYLE_ID: &str = "folio-base-style";

// Class names
pub const CARD_CLASS: &str = "gallery-card";
pub const CARD_IMAGE_CLASS: &str = "gallery-card__image";
pub const CARD_LABEL_CLASS: &str = "gallery-card__label";
pub const CARD_LABEL_LINE_CLASS: &str = "gallery-card__line";
pub const CARD_LABEL_TEXT_CLASS: &str = "gallery-card__title";
pub const DETAIL_BACKDROP_CLASS: &str = "detail-backdrop";
pub const DETAIL_CONTAINER_CLASS: &str = "detail-container";
pub const DETAIL_SURFACE_CLASS: &str = "detail-surface";
pub const DETAIL_HERO_CLASS: &str = "detail-hero";
pub const DETAIL_HERO_IMAGE_CLASS: &str = "detail-hero__image";
pub const DETAIL_CONTENT_CLASS: &str = "detail-content";
pub const DETAIL_SECTION_CLASS: &str = "detail-section";
pub const DETAIL_PARALLAX_CLASS: &str = "parallax-image";
pub const DETAIL_FOOTER_CLASS: &str = "detail-footer";
pub const DETAIL_HINT_CLASS: &str = "detail-hint";
pub const DETAIL_CLOSE_CLASS: &str = "detail-close";
pub const DETAIL_BACK_CLASS: &str = "detail-back";
pub const HIDDEN_CLASS: &str = "hidden";

// Copy
pub const LOADING_TEXT: &str = "Loading...";
pub const HEADER_TITLE: &str = "Selected Work";
pub const SCROLL_HINT_TEXT: &str = "Scroll to explore";
pub const PREVIEW_HINT_TEXT: &str = "Swipe up";
pub const FULLSCREEN_HINT_TEXT: &str = "Scroll";
pub const FOOTER_PROMPT_TEXT: &str = "Pull down to close";
pub const FOOTER_BACK_TEXT: &str = "Back to Gallery";
pub const CLOSE_LABEL: &str = "Close";

// Stage perspective
pub const STAGE_PERSPECTIVE: &str = "2000px";
pub const STAGE_PERSPECTIVE_ORIGIN: &str = "10% 10%";
pub const TRACK_TRANSFORM: &str = "translateY(100px)";

// Card box and hover label
pub const CARD_WIDTH: &str = "clamp(280px, 20vw, 320px)";
pub const CARD_HEIGHT: &str = "clamp(350px, 25vw, 400px)";
pub const CARD_FILTER_TRANSITION: &str = "filter 0.3s ease";
pub const LABEL_OFFSET_PX: f32 = 40.0;
pub const LABEL_LINE_WIDTH_PX: f32 = 60.0;

// Detail overlay paint order, above every card
pub const DETAIL_Z_INDEX: i32 = 5000;
pub const DETAIL_CLOSE_Z_INDEX: i32 = 5010;
