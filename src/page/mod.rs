//! DOM layer: builds the question card, routes every reach for "No" through the evasion
//! session, and swaps in the accepted screen when "Yes" is clicked.
//! Only meaningful in a browser; the logic it drives lives in `evasion`.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, window};

use crate::config::PageConfig;
use crate::decor;
use crate::evasion::{
    AnchorMode, ElementPosition, EvasionController, InteractionEvent, Layer, MarkerPosition,
    Session,
};
use crate::geometry::{ContainerGeometry, Point, Rect, ViewportBounds};
use crate::random::PageRng;

mod style;

pub const ROOT_ID: &str = "wydm-root";
pub const CARD_ID: &str = "wydm-card";
pub const YES_ID: &str = "wydm-yes";
pub const NO_ID: &str = "wydm-no";
pub const MARKER_ID: &str = "wydm-marker";
pub const ACCEPTED_ID: &str = "wydm-accepted";

/// Runtime page state.
struct PageState {
    config: PageConfig,
    controller: EvasionController,
    session: Session,
    rng: PageRng,
    // Holds the card, later the accepted screen
    stage: HtmlElement,
    card: HtmlElement,
    no_button: HtmlElement,
    marker: HtmlElement,
}

thread_local! {
    static PAGE_STATE: RefCell<Option<PageState>> = RefCell::new(None);
}

/// Mount the page into `<body>`. Calling again tears down the previous mount.
pub fn start(config: PageConfig) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = doc.body().ok_or_else(|| JsValue::from_str("no body"))?;
    let config = config.normalized();

    crate::logging::init(config.level_filter());

    if doc.get_element_by_id(style::STYLE_ID).is_none() {
        let sheet = doc.create_element("style")?;
        sheet.set_id(style::STYLE_ID);
        sheet.set_text_content(Some(style::STYLESHEET));
        body.append_child(&sheet)?;
    }
    if let Some(old) = doc.get_element_by_id(ROOT_ID) {
        old.remove();
    }

    let mut rng = PageRng::from_entropy();

    let root = element(&doc, "main", "")?;
    root.set_id(ROOT_ID);

    // Background bubbles, generated once per mount
    let bubbles = element(&doc, "div", "wydm-bubbles")?;
    for b in decor::bubbles(config.bubble_count, &mut rng) {
        let el = element(&doc, "div", "wydm-bubble")?;
        el.set_attribute("style", &b.style())?;
        bubbles.append_child(&el)?;
    }
    root.append_child(&bubbles)?;

    let stage = element(&doc, "div", "wydm-stage")?;
    let (card, yes_button, no_button) = build_card(&doc, &config)?;
    stage.append_child(&card)?;
    root.append_child(&stage)?;

    let marker = build_marker(&doc, &config)?;
    root.append_child(&marker)?;
    body.append_child(&root)?;

    // "No": hover, touch and click all evade
    {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::MouseEvent| {
            let client = Point::new(evt.client_x() as f64, evt.client_y() as f64);
            evade(|origin| InteractionEvent::Pointer { client, origin });
        }) as Box<dyn FnMut(_)>);
        no_button
            .add_event_listener_with_callback("mouseenter", closure.as_ref().unchecked_ref())?;
        no_button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::TouchEvent| {
            // Suppress the emulated mouse events so one tap counts once
            evt.prevent_default();
            let first_touch = evt
                .touches()
                .get(0)
                .map(|t| Point::new(t.client_x() as f64, t.client_y() as f64));
            evade(|origin| InteractionEvent::Touch {
                first_touch,
                origin,
            });
        }) as Box<dyn FnMut(_)>);
        no_button
            .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    // "Yes": terminal
    {
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
            accept();
        }) as Box<dyn FnMut(_)>);
        yes_button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    log::info!(
        "page mounted: policy {:?}, {} bubbles",
        config.evasion.policy,
        config.bubble_count
    );

    let controller = EvasionController::new(config.evasion.clone());
    PAGE_STATE.with(|s| {
        s.replace(Some(PageState {
            config,
            controller,
            session: Session::new(),
            rng,
            stage,
            card,
            no_button,
            marker,
        }))
    });
    Ok(())
}

fn build_card(
    doc: &Document,
    config: &PageConfig,
) -> Result<(HtmlElement, HtmlElement, HtmlElement), JsValue> {
    let card = element(doc, "div", "")?;
    card.set_id(CARD_ID);

    let question = element(doc, "p", "wydm-question")?;
    question.set_text_content(Some(&config.question));
    card.append_child(&question)?;

    add_flowers(doc, &card, &decor::CARD_FLOWERS)?;

    let photo = element(doc, "div", "wydm-photo")?;
    let cover = element(doc, "img", "wydm-cover")?;
    cover.set_attribute("src", &config.cover_image)?;
    cover.set_attribute("alt", "Our picture")?;
    photo.append_child(&cover)?;
    add_flowers(doc, &photo, &decor::COVER_FLOWERS)?;
    card.append_child(&photo)?;

    // Row is left unpositioned so a placed "No" resolves against the card
    let row = element(doc, "div", "wydm-row")?;
    let yes = element(doc, "button", "wydm-yes")?;
    yes.set_id(YES_ID);
    yes.set_text_content(Some(&config.yes_label));
    let no = element(doc, "button", "wydm-no")?;
    no.set_id(NO_ID);
    no.set_text_content(Some(&config.no_label));
    row.append_child(&yes)?;
    row.append_child(&no)?;
    card.append_child(&row)?;

    Ok((card, yes, no))
}

fn build_marker(doc: &Document, config: &PageConfig) -> Result<HtmlElement, JsValue> {
    let marker = element(doc, "div", "wydm-marker")?;
    marker.set_id(MARKER_ID);
    let img = element(doc, "img", "")?;
    img.set_attribute("src", &config.marker_image)?;
    img.set_attribute("alt", "")?;
    marker.append_child(&img)?;
    let caption = element(doc, "span", "")?;
    caption.set_text_content(Some(&config.marker_caption));
    marker.append_child(&caption)?;
    Ok(marker)
}

fn evade(make_event: impl FnOnce(Option<Rect>) -> InteractionEvent) {
    PAGE_STATE.with(|cell| {
        // A handler re-entered mid-update just drops the event
        let Ok(mut guard) = cell.try_borrow_mut() else {
            return;
        };
        let Some(st) = guard.as_mut() else {
            return;
        };
        let PageState {
            controller,
            session,
            rng,
            card,
            no_button,
            marker,
            ..
        } = st;

        let viewport = read_viewport();
        let container = read_rect(card).map(|r| ContainerGeometry::new(r.width, r.height));
        let event = make_event(read_rect(no_button));
        if let Some((marker_pos, element_pos)) =
            session.interact(controller, &event, container, viewport, rng)
        {
            apply_element(no_button, element_pos);
            apply_marker(marker, marker_pos);
        }
    });
}

fn accept() {
    PAGE_STATE.with(|cell| {
        let Ok(mut guard) = cell.try_borrow_mut() else {
            return;
        };
        let Some(st) = guard.as_mut() else {
            return;
        };
        if st.session.is_accepted() {
            return;
        }
        st.session.accept();
        log::info!(
            "accepted after {} evasions",
            st.session.interaction_count()
        );
        if let Err(e) = show_accepted(st) {
            log::error!("could not render accepted screen: {e:?}");
        }
    });
}

fn show_accepted(st: &mut PageState) -> Result<(), JsValue> {
    let doc = window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    st.card.remove();
    st.marker.remove();

    let screen = element(&doc, "div", "wydm-accepted")?;
    screen.set_id(ACCEPTED_ID);

    let hearts = element(&doc, "div", "")?;
    hearts.set_attribute("style", "position:absolute; inset:0; pointer-events:none;")?;
    for h in decor::hearts(st.config.heart_count, &mut st.rng) {
        let span = element(&doc, "span", "wydm-heart")?;
        span.set_attribute("style", &h.style())?;
        span.set_text_content(Some("❤️"));
        hearts.append_child(&span)?;
    }
    screen.append_child(&hearts)?;

    let title = element(&doc, "h1", "")?;
    title.set_text_content(Some(&st.config.accepted_message));
    screen.append_child(&title)?;

    let photo = element(&doc, "div", "wydm-celebration")?;
    let img = element(&doc, "img", "")?;
    img.set_attribute("src", &st.config.cover_image)?;
    img.set_attribute("alt", "Celebrating")?;
    photo.append_child(&img)?;
    add_flowers(&doc, &photo, &decor::CELEBRATION_FLOWERS)?;
    screen.append_child(&photo)?;

    let caption = element(&doc, "p", "")?;
    caption.set_text_content(Some(&st.config.accepted_caption));
    screen.append_child(&caption)?;

    st.stage.append_child(&screen)?;
    Ok(())
}

// --- Geometry reads (fresh per event) ----------------------------------------

fn read_viewport() -> ViewportBounds {
    let Some(win) = window() else {
        return ViewportBounds::new(0.0, 0.0);
    };
    let w = win
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = win
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    ViewportBounds::new(w, h)
}

/// `None` for detached elements, whose rect is all zeros.
fn read_rect(el: &HtmlElement) -> Option<Rect> {
    if !el.is_connected() {
        return None;
    }
    let r = el.get_bounding_client_rect();
    Some(Rect::new(r.top(), r.left(), r.width(), r.height()))
}

// --- Style writes -------------------------------------------------------------

fn apply_element(el: &HtmlElement, pos: ElementPosition) {
    let ElementPosition::Placed {
        top,
        left,
        anchor,
        layer,
    } = pos
    else {
        return;
    };
    let (position, transform) = match anchor {
        // Radial/hide targets are centers, fixed targets are corners
        AnchorMode::Container => ("absolute", "translate(-50%, -50%)"),
        AnchorMode::Viewport => ("fixed", "none"),
    };
    let z_index = match layer {
        Layer::Front => "50",
        Layer::Behind => "1",
    };
    set_style(el, "position", position);
    set_style(el, "top", &format!("{top:.1}px"));
    set_style(el, "left", &format!("{left:.1}px"));
    set_style(el, "transform", transform);
    set_style(el, "z-index", z_index);
}

fn apply_marker(el: &HtmlElement, pos: MarkerPosition) {
    set_style(el, "display", "flex");
    set_style(el, "top", &format!("{:.1}px", pos.top));
    set_style(el, "left", &format!("{:.1}px", pos.left));
}

fn set_style(el: &HtmlElement, prop: &str, value: &str) {
    if el.style().set_property(prop, value).is_err() {
        log::warn!("failed to set {prop}: {value}");
    }
}

fn add_flowers(
    doc: &Document,
    parent: &HtmlElement,
    flowers: &[decor::Flower],
) -> Result<(), JsValue> {
    for f in flowers {
        let span = element(doc, "span", "wydm-flower")?;
        span.set_attribute("style", f.style)?;
        span.set_text_content(Some(f.glyph));
        parent.append_child(&span)?;
    }
    Ok(())
}

fn element(doc: &Document, tag: &str, class: &str) -> Result<HtmlElement, JsValue> {
    let el: HtmlElement = doc.create_element(tag)?.dyn_into()?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    Ok(el)
}
