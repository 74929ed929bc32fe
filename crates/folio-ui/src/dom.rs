//! DOM host and event wiring.
//!
//! ```text
//!  wheel / keydown / touch ──┐
//!  link click / popstate ────┼──► Rc<RefCell<NavigationController<DomHost>>>
//!  IntersectionObserver ─────┘                 │
//!                                              ▼
//!                      DomHost ── scrollIntoView / history / setTimeout
//!                         │
//!                         └── fallback timers reach the controller through a
//!                             Weak handle, so the host never owns its owner
//! ```

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use folio_input::KeyCode;
use folio_nav::{
    HistoryEntry, Location, NavigationController, NavigationHost, RawInput, ScrollBehavior,
    TransitionId,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    AddEventListenerOptions, Document, Element, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, KeyboardEvent, MouseEvent,
    PopStateEvent, ScrollIntoViewOptions, ScrollLogicalPosition, TouchEvent, WheelEvent, Window,
};

use crate::{
    load_config, observer_thresholds, wheel_delta_px, CONFIG_ATTRIBUTE, INDEX_ATTRIBUTE,
    SECTIONS_SELECTOR, SECTION_SELECTOR,
};

type Controller = NavigationController<DomHost>;
type SharedController = Rc<RefCell<Controller>>;
type ControllerSlot = Rc<RefCell<Option<Weak<RefCell<Controller>>>>>;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("No document"))?;

    let Some(container) = document.query_selector(SECTIONS_SELECTOR)? else {
        tracing::info!("no section container on this page");
        return Ok(());
    };
    let sections = collect_sections(&container)?;

    let config = load_config(
        container.get_attribute(CONFIG_ATTRIBUTE).as_deref(),
        sections.len(),
    )
    .map_err(to_js)?;
    let location = Location::parse(&window.location().href()?).map_err(to_js)?;

    let slot: ControllerSlot = Rc::new(RefCell::new(None));
    let host = DomHost {
        window: window.clone(),
        sections: sections.clone(),
        slot: Rc::clone(&slot),
    };
    let controller: SharedController = Rc::new(RefCell::new(
        NavigationController::mount(config, host, &location).map_err(to_js)?,
    ));
    *slot.borrow_mut() = Some(Rc::downgrade(&controller));

    install_wheel(&window, &controller)?;
    install_keys(&document, &controller)?;
    install_touch(&window, &controller)?;
    install_links(&document, &controller)?;
    install_popstate(&window, &controller)?;
    install_observer(&container, &sections, &controller)?;

    tracing::info!(
        sections = sections.len(),
        current = controller.borrow().current_section(),
        "section navigation mounted"
    );
    Ok(())
}

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn collect_sections(container: &Element) -> Result<Vec<Element>, JsValue> {
    let nodes = container.query_selector_all(SECTION_SELECTOR)?;
    let mut sections = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        if let Some(element) = nodes.item(i).and_then(|node| node.dyn_into::<Element>().ok()) {
            element.set_attribute(INDEX_ATTRIBUTE, &sections.len().to_string())?;
            sections.push(element);
        }
    }
    Ok(sections)
}

/// Run `f` unless the controller is already borrowed by an outer handler.
fn with_controller<R>(
    controller: &SharedController,
    f: impl FnOnce(&mut Controller) -> R,
) -> Option<R> {
    match controller.try_borrow_mut() {
        Ok(mut controller) => Some(f(&mut controller)),
        Err(_) => {
            tracing::warn!("navigation event dropped: controller busy");
            None
        }
    }
}

// =============================================================================
// HOST
// =============================================================================

pub struct DomHost {
    window: Window,
    sections: Vec<Element>,
    slot: ControllerSlot,
}

impl std::fmt::Debug for DomHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DomHost")
            .field("sections", &self.sections.len())
            .finish()
    }
}

impl DomHost {
    fn history_state(entry: &HistoryEntry) -> Result<JsValue, JsValue> {
        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        entry.serialize(&serializer).map_err(JsValue::from)
    }

    fn write_history(&self, entry: &HistoryEntry, path: &str, replace: bool) {
        let result = Self::history_state(entry).and_then(|state| {
            let history = self.window.history()?;
            if replace {
                history.replace_state_with_url(&state, "", Some(path))
            } else {
                history.push_state_with_url(&state, "", Some(path))
            }
        });
        if let Err(err) = result {
            tracing::warn!(path, ?err, replace, "history update failed");
        }
    }
}

impl NavigationHost for DomHost {
    fn scroll_into_view(&mut self, index: usize, behavior: ScrollBehavior) {
        let Some(section) = self.sections.get(index) else {
            tracing::warn!(index, "no section element to scroll to");
            return;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(match behavior {
            ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
            ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
        });
        options.set_block(ScrollLogicalPosition::Start);
        section.scroll_into_view_with_scroll_into_view_options(&options);
    }

    fn push_state(&mut self, entry: &HistoryEntry, path: &str) {
        self.write_history(entry, path, false);
    }

    fn replace_state(&mut self, entry: &HistoryEntry, path: &str) {
        self.write_history(entry, path, true);
    }

    fn schedule_fallback(&mut self, id: TransitionId, after: Duration) {
        let slot = Rc::clone(&self.slot);
        let callback = Closure::once_into_js(move || {
            let controller = slot.borrow().as_ref().and_then(Weak::upgrade);
            if let Some(controller) = controller {
                with_controller(&controller, |c| c.on_fallback(id));
            }
        });
        let timeout = i32::try_from(after.as_millis()).unwrap_or(i32::MAX);
        if let Err(err) = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.unchecked_ref::<js_sys::Function>(),
                timeout,
            )
        {
            tracing::error!(%id, ?err, "failed to schedule fallback timer");
        }
    }
}

// =============================================================================
// LISTENERS
// =============================================================================

fn install_wheel(window: &Window, controller: &SharedController) -> Result<(), JsValue> {
    let controller = Rc::clone(controller);
    let viewport = window.clone();
    let callback = Closure::<dyn FnMut(WheelEvent)>::new(move |event: WheelEvent| {
        // Native scrolling would fight the section transition.
        event.prevent_default();
        let height = viewport
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(800.0);
        let delta = wheel_delta_px(event.delta_y(), event.delta_mode(), height);
        let now = event.time_stamp() as u64;
        with_controller(&controller, |c| c.handle_input(RawInput::wheel(now, delta), now));
    });

    let options = AddEventListenerOptions::new();
    options.set_passive(false);
    window.add_event_listener_with_callback_and_add_event_listener_options(
        "wheel",
        callback.as_ref().unchecked_ref(),
        &options,
    )?;
    callback.forget();
    Ok(())
}

fn is_editable(target: Option<web_sys::EventTarget>) -> bool {
    target
        .and_then(|target| target.dyn_into::<HtmlElement>().ok())
        .map(|el| {
            el.is_content_editable()
                || matches!(el.tag_name().as_str(), "INPUT" | "TEXTAREA" | "SELECT")
        })
        .unwrap_or(false)
}

fn install_keys(document: &Document, controller: &SharedController) -> Result<(), JsValue> {
    let controller = Rc::clone(controller);
    let callback = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        if event.alt_key() || event.ctrl_key() || event.meta_key() || is_editable(event.target()) {
            return;
        }
        let Some(key) = KeyCode::from_dom_key(&event.key()) else {
            return;
        };
        event.prevent_default();
        let now = event.time_stamp() as u64;
        with_controller(&controller, |c| c.handle_input(RawInput::KeyDown(key), now));
    });
    document.add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}

fn install_touch(window: &Window, controller: &SharedController) -> Result<(), JsValue> {
    let start = {
        let controller = Rc::clone(controller);
        Closure::<dyn FnMut(TouchEvent)>::new(move |event: TouchEvent| {
            let Some(touch) = event.touches().get(0) else {
                return;
            };
            let now = event.time_stamp() as u64;
            let input = RawInput::TouchStart {
                y: touch.client_y() as f32,
                timestamp_ms: now,
            };
            with_controller(&controller, |c| c.handle_input(input, now));
        })
    };
    let end = {
        let controller = Rc::clone(controller);
        Closure::<dyn FnMut(TouchEvent)>::new(move |event: TouchEvent| {
            let Some(touch) = event.changed_touches().get(0) else {
                return;
            };
            let now = event.time_stamp() as u64;
            let input = RawInput::TouchEnd {
                y: touch.client_y() as f32,
                timestamp_ms: now,
            };
            with_controller(&controller, |c| c.handle_input(input, now));
        })
    };

    window.add_event_listener_with_callback("touchstart", start.as_ref().unchecked_ref())?;
    window.add_event_listener_with_callback("touchend", end.as_ref().unchecked_ref())?;
    start.forget();
    end.forget();
    Ok(())
}

/// Same-origin links to section paths become route changes instead of page loads.
fn install_links(document: &Document, controller: &SharedController) -> Result<(), JsValue> {
    let controller = Rc::clone(controller);
    let callback = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
        if event.button() != 0
            || event.ctrl_key()
            || event.meta_key()
            || event.shift_key()
            || event.alt_key()
        {
            return;
        }
        let Some(href) = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .and_then(|el| el.closest("a[href]").ok().flatten())
            .and_then(|anchor| anchor.get_attribute("href"))
        else {
            return;
        };
        if !href.starts_with('/') || href.starts_with("//") {
            return;
        }
        let Ok(location) = Location::parse(&href) else {
            return;
        };

        if let Some(Some(outcome)) = with_controller(&controller, |c| c.on_link(&location)) {
            event.prevent_default();
            tracing::debug!(%href, ?outcome, "section link");
        }
    });
    document.add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}

fn install_popstate(window: &Window, controller: &SharedController) -> Result<(), JsValue> {
    let controller = Rc::clone(controller);
    let current = window.clone();
    let callback = Closure::<dyn FnMut(PopStateEvent)>::new(move |event: PopStateEvent| {
        let state: Option<serde_json::Value> = serde_wasm_bindgen::from_value(event.state()).ok();
        let Some(location) = current
            .location()
            .href()
            .ok()
            .and_then(|href| Location::parse(&href).ok())
        else {
            tracing::warn!("popstate with unreadable location");
            return;
        };
        with_controller(&controller, |c| c.on_history_pop(state.as_ref(), &location));
    });
    window.add_event_listener_with_callback("popstate", callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}

fn install_observer(
    container: &Element,
    sections: &[Element],
    controller: &SharedController,
) -> Result<(), JsValue> {
    let visibility_ratio = controller.borrow().observer().visibility_ratio();
    let controller = Rc::clone(controller);
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let Some(index) = entry
                    .target()
                    .get_attribute(INDEX_ATTRIBUTE)
                    .and_then(|raw| raw.parse::<usize>().ok())
                else {
                    continue;
                };
                let ratio = entry.intersection_ratio() as f32;
                with_controller(&controller, |c| c.on_visibility(index, ratio));
            }
        },
    );

    let thresholds = js_sys::Array::new();
    for threshold in observer_thresholds(visibility_ratio) {
        thresholds.push(&JsValue::from_f64(threshold));
    }

    let options = IntersectionObserverInit::new();
    options.set_root(Some(container));
    options.set_threshold(&thresholds);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    for section in sections {
        observer.observe(section);
    }
    callback.forget();
    Ok(())
}
