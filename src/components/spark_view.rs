use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{HtmlElement, TouchEvent};
use yew::prelude::*;

use crate::model::{ContactId, DisplayMode};
use crate::state::SparkField;
use crate::surface::DomSurface;
use crate::util::clog;

const DECORATION_TICK_MS: i32 = 100;

/// Built inside the wiring effect once the surface element exists.
type SharedField = Rc<RefCell<Option<SparkField<DomSurface>>>>;

fn apply_mode(mode: DisplayMode, label: &UseStateHandle<String>) {
    label.set(mode.label().to_string());
    if let Some(body) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.body())
    {
        body.set_class_name(mode.label());
    }
    clog(&format!("display mode: {}", mode.label()));
}

#[function_component(SparkView)]
pub fn spark_view() -> Html {
    let surface_ref = use_node_ref();
    let field: SharedField = use_mut_ref(|| None);
    let mode_label = use_state(String::new);

    {
        let surface_ref = surface_ref.clone();
        let field = field.clone();
        let mode_label = mode_label.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("no global `window` exists");
            let container: HtmlElement = surface_ref
                .cast::<HtmlElement>()
                .expect("surface_ref not attached to an element");

            *field.borrow_mut() = Some(SparkField::new(DomSurface::new(container.clone())));

            // Startup: the first advance lands on sparky.
            if let Some(f) = field.borrow_mut().as_mut() {
                apply_mode(f.advance_mode(), &mode_label);
            }

            // Touch
            let touch_start_cb = {
                let field = field.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    e.prevent_default();
                    let mut field = field.borrow_mut();
                    let Some(field) = field.as_mut() else { return };
                    let touches = e.changed_touches();
                    for i in 0..touches.length() {
                        if let Some(touch) = touches.item(i) {
                            field.add_contact(
                                ContactId::from_touch(touch.identifier()),
                                touch.client_x() as f64,
                                touch.client_y() as f64,
                            );
                        }
                    }
                }) as Box<dyn FnMut(_)>)
            };
            container
                .add_event_listener_with_callback(
                    "touchstart",
                    touch_start_cb.as_ref().unchecked_ref(),
                )
                .ok();
            let touch_move_cb = {
                let field = field.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    e.prevent_default();
                    let mut field = field.borrow_mut();
                    let Some(field) = field.as_mut() else { return };
                    let touches = e.changed_touches();
                    for i in 0..touches.length() {
                        if let Some(touch) = touches.item(i) {
                            field.move_contact(
                                &ContactId::from_touch(touch.identifier()),
                                touch.client_x() as f64,
                                touch.client_y() as f64,
                            );
                        }
                    }
                }) as Box<dyn FnMut(_)>)
            };
            container
                .add_event_listener_with_callback(
                    "touchmove",
                    touch_move_cb.as_ref().unchecked_ref(),
                )
                .ok();
            let touch_end_cb = {
                let field = field.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    e.prevent_default();
                    let mut field = field.borrow_mut();
                    let Some(field) = field.as_mut() else { return };
                    let touches = e.changed_touches();
                    for i in 0..touches.length() {
                        if let Some(touch) = touches.item(i) {
                            field.remove_contact(&ContactId::from_touch(touch.identifier()));
                        }
                    }
                }) as Box<dyn FnMut(_)>)
            };
            container
                .add_event_listener_with_callback(
                    "touchend",
                    touch_end_cb.as_ref().unchecked_ref(),
                )
                .ok();
            container
                .add_event_listener_with_callback(
                    "touchcancel",
                    touch_end_cb.as_ref().unchecked_ref(),
                )
                .ok();

            // Gestures and mouse input never reach the tracker.
            let suppress_cb = {
                Closure::wrap(Box::new(move |e: web_sys::Event| {
                    e.prevent_default();
                    e.stop_immediate_propagation();
                }) as Box<dyn FnMut(_)>)
            };
            container
                .add_event_listener_with_callback(
                    "gesturechange",
                    suppress_cb.as_ref().unchecked_ref(),
                )
                .ok();
            window
                .add_event_listener_with_callback("mousedown", suppress_cb.as_ref().unchecked_ref())
                .ok();
            window
                .add_event_listener_with_callback("mousemove", suppress_cb.as_ref().unchecked_ref())
                .ok();

            // Decoration ticker: fixed period, runs for the life of the view.
            let tick = {
                let field = field.clone();
                Closure::wrap(Box::new(move || {
                    if let Some(field) = field.borrow_mut().as_mut() {
                        field.decoration_tick();
                    }
                }) as Box<dyn FnMut()>)
            };
            let tick_id = window
                .set_interval_with_callback_and_timeout_and_arguments_0(
                    tick.as_ref().unchecked_ref(),
                    DECORATION_TICK_MS,
                )
                .unwrap();

            // Cleanup
            let window_clone = window.clone();
            move || {
                let _ = container.remove_event_listener_with_callback(
                    "touchstart",
                    touch_start_cb.as_ref().unchecked_ref(),
                );
                let _ = container.remove_event_listener_with_callback(
                    "touchmove",
                    touch_move_cb.as_ref().unchecked_ref(),
                );
                let _ = container.remove_event_listener_with_callback(
                    "touchend",
                    touch_end_cb.as_ref().unchecked_ref(),
                );
                let _ = container.remove_event_listener_with_callback(
                    "touchcancel",
                    touch_end_cb.as_ref().unchecked_ref(),
                );
                let _ = container.remove_event_listener_with_callback(
                    "gesturechange",
                    suppress_cb.as_ref().unchecked_ref(),
                );
                let _ = window_clone.remove_event_listener_with_callback(
                    "mousedown",
                    suppress_cb.as_ref().unchecked_ref(),
                );
                let _ = window_clone.remove_event_listener_with_callback(
                    "mousemove",
                    suppress_cb.as_ref().unchecked_ref(),
                );
                window_clone.clear_interval_with_handle(tick_id);
                let _keep_alive = (
                    &touch_start_cb,
                    &touch_move_cb,
                    &touch_end_cb,
                    &suppress_cb,
                    &tick,
                );
            }
        });
    }

    let on_mode = {
        let field = field.clone();
        let mode_label = mode_label.clone();
        Callback::from(move |e: TouchEvent| {
            e.prevent_default();
            if let Some(field) = field.borrow_mut().as_mut() {
                apply_mode(field.advance_mode(), &mode_label);
            }
        })
    };
    // Taps on the links must not become contacts.
    let swallow = Callback::from(|e: TouchEvent| e.stop_propagation());

    html! {
        <>
            <div class="spark-surface" ref={surface_ref}></div>
            <div class="hud">
                <div class="mode-toggle" ontouchstart={on_mode}>
                    { (*mode_label).clone() }
                </div>
                <div
                    class="link-holder"
                    ontouchstart={swallow.clone()}
                    ontouchend={swallow}
                >
                    <a
                        href="https://developer.mozilla.org/en-US/docs/Web/API/Touch_events"
                        target="_blank"
                    >
                        { "touch events" }
                    </a>
                </div>
            </div>
        </>
    }
}
