use crate::constants::HIDDEN_CLASS;
use folio_core::geometry::{Rect, Viewport};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Current visible viewport in CSS pixels.
pub fn viewport() -> Viewport {
    let Some(w) = web::window() else {
        return Viewport::new(0.0, 0.0);
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Viewport::new(width as f32, height as f32)
}

/// Live bounding rectangle, read synchronously.
#[inline]
pub fn rect_of(el: &web::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(
        r.left() as f32,
        r.top() as f32,
        r.width() as f32,
        r.height() as f32,
    )
}

pub fn create(
    document: &web::Document,
    tag: &str,
    classes: &[&str],
) -> anyhow::Result<web::HtmlElement> {
    let el = document
        .create_element(tag)
        .map_err(|e| anyhow::anyhow!("create <{}>: {:?}", tag, e))?;
    if !classes.is_empty() {
        let list: js_sys::Array = classes.iter().map(|c| JsValue::from_str(c)).collect();
        _ = el.class_list().add(&list);
    }
    el.dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("<{}> is not an HtmlElement: {:?}", tag, e))
}

pub fn create_image(
    document: &web::Document,
    src: &str,
    alt: &str,
    classes: &[&str],
) -> anyhow::Result<web::HtmlImageElement> {
    let el = create(document, "img", classes)?;
    let img = el
        .dyn_into::<web::HtmlImageElement>()
        .map_err(|e| anyhow::anyhow!("<img> cast failed: {:?}", e))?;
    img.set_src(src);
    img.set_alt(alt);
    Ok(img)
}

pub fn create_text(
    document: &web::Document,
    tag: &str,
    classes: &[&str],
    text: &str,
) -> anyhow::Result<web::HtmlElement> {
    let el = create(document, tag, classes)?;
    el.set_text_content(Some(text));
    Ok(el)
}

#[inline]
pub fn append(parent: &web::Node, child: &web::Node) {
    _ = parent.append_child(child);
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

pub fn set_styles<S: AsRef<str>>(el: &web::HtmlElement, properties: &[(&str, S)]) {
    let style = el.style();
    for (property, value) in properties {
        _ = style.set_property(property, value.as_ref());
    }
}

#[inline]
pub fn set_attr(el: &web::Element, name: &str, value: &str) {
    _ = el.set_attribute(name, value);
}

#[inline]
pub fn set_hidden(el: &web::Element, hidden: bool) {
    _ = el.class_list().toggle_with_force(HIDDEN_CLASS, hidden);
}

#[inline]
pub fn remove(el: &web::Element) {
    el.remove();
}
