//! CSS value formatting. Pure string building so host tests can cover it.

use crate::constants::*;
use folio_core::card::LabelPlacement;
use folio_core::carousel::CardTransform;
use folio_core::geometry::Rect;

/// Rules the front-end relies on regardless of the host page's stylesheet.
/// `!important` so the class also wins over inline `display` values.
pub fn base_css() -> String {
    format!(".{HIDDEN_CLASS}{{display:none!important}}")
}

#[inline]
pub fn px(v: f32) -> String {
    format!("{:.2}px", v)
}

/// Card transform: position on the diagonal, fixed gallery tilt, then the
/// shared curve and skew of the current frame.
pub fn card_transform(t: &CardTransform) -> String {
    format!(
        "translate3d({:.2}px, {:.2}px, {:.2}px) rotateY({}deg) rotateZ({:.3}deg) skewY({:.3}deg)",
        t.position.x, t.position.y, t.position.z, t.rotation_y, t.curve, t.skew
    )
}

#[inline]
pub fn brightness_filter(brightness: f32) -> String {
    format!("brightness({:.3})", brightness)
}

#[inline]
pub fn z_index(order: i32) -> String {
    order.to_string()
}

#[inline]
pub fn opacity(v: f32) -> String {
    format!("{:.3}", v.clamp(0.0, 1.0))
}

/// Absolute box for the detail container.
pub fn rect_properties(rect: &Rect) -> [(&'static str, String); 4] {
    [
        ("left", px(rect.left)),
        ("top", px(rect.top)),
        ("width", px(rect.width)),
        ("height", px(rect.height)),
    ]
}

#[inline]
pub fn rotate_y(deg: f32) -> String {
    format!("rotateY({:.3}deg)", deg)
}

#[inline]
pub fn translate_y(v: f32) -> String {
    format!("translateY({:.2}px)", v)
}

/// Used for both the pull feedback on the surface and the hero parallax.
#[inline]
pub fn translate_y_scale(y: f32, scale: f32) -> String {
    format!("translateY({:.2}px) scale({:.4})", y, scale)
}

/// Label box position relative to its card.
pub fn label_position(placement: LabelPlacement) -> [(&'static str, String); 3] {
    let offset = px(-LABEL_OFFSET_PX);
    match placement {
        LabelPlacement::Above => [
            ("top", offset),
            ("bottom", String::from("auto")),
            ("left", String::from("0")),
        ],
        LabelPlacement::Below => [
            ("top", String::from("auto")),
            ("bottom", offset),
            ("left", String::from("0")),
        ],
    }
}
