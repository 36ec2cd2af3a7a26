use crate::constants::*;
use crate::dom;
use crate::style;
use web_sys as web;

/// Install the base rules once, ahead of anything that toggles them.
pub fn install_base_style(document: &web::Document) -> anyhow::Result<()> {
    if document.get_element_by_id(BASE_STYLE_ID).is_some() {
        return Ok(());
    }
    let head = document
        .head()
        .ok_or_else(|| anyhow::anyhow!("document has no <head>"))?;
    let el = dom::create_text(document, "style", &[], &style::base_css())?;
    el.set_id(BASE_STYLE_ID);
    dom::append(&head, &el);
    Ok(())
}

/// Show the loading status until the gallery has mounted.
pub fn show_loading(document: &web::Document, root: &web::HtmlElement) -> anyhow::Result<()> {
    if document.get_element_by_id(LOADING_ID).is_some() {
        return Ok(());
    }
    let status = dom::create_text(document, "div", &[], LOADING_TEXT)?;
    status.set_id(LOADING_ID);
    dom::set_attr(&status, "role", "status");
    dom::set_attr(&status, "aria-live", "polite");
    dom::append(root, &status);
    Ok(())
}

#[inline]
pub fn hide_loading(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(LOADING_ID) {
        dom::set_hidden(&el, true);
    }
}

/// Header title and scroll hint drawn above the stage.
pub fn mount_chrome(document: &web::Document, root: &web::HtmlElement) -> anyhow::Result<()> {
    let header = dom::create_text(document, "h1", &["gallery-title"], HEADER_TITLE)?;
    dom::set_styles(
        &header,
        &[("position", "absolute"), ("top", "2rem"), ("right", "2rem"), ("z-index", "50")],
    );
    dom::append(root, &header);

    let hint = dom::create_text(document, "div", &["gallery-hint"], SCROLL_HINT_TEXT)?;
    dom::set_styles(
        &hint,
        &[("position", "absolute"), ("bottom", "2rem"), ("left", "2rem"), ("z-index", "50")],
    );
    dom::append(root, &hint);
    Ok(())
}

/// Perspective stage and the 3D track the cards live in.
pub fn mount_stage(
    document: &web::Document,
    root: &web::HtmlElement,
) -> anyhow::Result<web::HtmlElement> {
    let stage = dom::create(document, "div", &[])?;
    stage.set_id(STAGE_ID);
    dom::set_styles(
        &stage,
        &[
            ("position", "relative"),
            ("width", "100%"),
            ("height", "100%"),
            ("display", "flex"),
            ("align-items", "center"),
            ("justify-content", "center"),
            ("perspective", STAGE_PERSPECTIVE),
            ("perspective-origin", STAGE_PERSPECTIVE_ORIGIN),
        ],
    );
    let track = dom::create(document, "div", &[])?;
    track.set_id(TRACK_ID);
    dom::set_styles(
        &track,
        &[
            ("position", "relative"),
            ("display", "flex"),
            ("align-items", "center"),
            ("justify-content", "center"),
            ("transform-style", "preserve-3d"),
            ("transform", TRACK_TRANSFORM),
        ],
    );
    dom::append(&stage, &track);
    dom::append(root, &stage);
    Ok(track)
}
