//! Full-page scroll component: wires wheel, touch, keyboard, hash and nav
//! command input into the pure `PageController`, keeps the URL fragment in
//! step with the active page, and runs the native-mode viewport observer.
//!
//! The component is controlled: the composition root owns `current_page`
//! and passes it back down, so sections can derive `is_active` from the
//! same value the track renders with.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{
    window, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, KeyboardEvent, ScrollBehavior, ScrollIntoViewOptions, TouchEvent,
    WheelEvent,
};
use yew::prelude::*;

use crate::config;
use crate::scroll::controller::{self, PageController};
use crate::scroll::hash;
use crate::scroll::mode::ScrollMode;

/// Absolute-jump command from the nav bar. `seq` distinguishes repeated
/// requests for the same index.
#[derive(Clone, Copy, PartialEq)]
pub struct NavRequest {
    pub index: usize,
    pub seq: u32,
}

/// Damping applied to the finger offset while dragging the paged track.
const DRAG_DAMPING: f64 = 0.35;

#[derive(Properties, PartialEq)]
pub struct FullPageScrollProps {
    /// URL fragment per page, in page order. Also the page count.
    pub fragments: Vec<&'static str>,
    pub current_page: usize,
    pub on_page_change: Callback<usize>,
    pub mode: ScrollMode,
    /// Externally owned suspension flag (modal open, entrance overlay).
    /// Gates gestures only; absolute jumps are still honored.
    pub suspended: bool,
    pub reduced_motion: bool,
    #[prop_or_default]
    pub nav_request: Option<NavRequest>,
    #[prop_or_default]
    pub children: Children,
}

/// Everything the window-scoped closures need to read fresh values from.
/// Synced from props after every render so mount-once listeners never see
/// stale mode or suspension state.
struct Shared {
    controller: PageController,
    mode: ScrollMode,
    suspended: bool,
    notify: Callback<usize>,
    fragments: Vec<&'static str>,
    touch_start_y: Option<f64>,
}

impl Shared {
    /// Absolute jump shared by dots, nav commands and hash changes.
    /// Returns what the caller should do after releasing the borrow.
    fn jump(&mut self, index: usize) -> (usize, Option<String>, Callback<usize>) {
        let page = self.controller.jump_to(index);
        let scroll_target = if self.mode == ScrollMode::Native {
            hash::fragment_for_index(&self.fragments, page).map(str::to_owned)
        } else {
            None
        };
        (page, scroll_target, self.notify.clone())
    }
}

fn scroll_section_into_view(id: &str, smooth: bool) {
    if let Some(document) = window().and_then(|w| w.document()) {
        if let Some(element) = document.get_element_by_id(id) {
            let mut options = ScrollIntoViewOptions::new();
            options.behavior(if smooth {
                ScrollBehavior::Smooth
            } else {
                ScrollBehavior::Auto
            });
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
}

/// Rewrite the URL fragment to the current page, replacing in place so no
/// history entry is created. Skipped while the hash already resolves to the
/// current page (covers the unknown-fragment fallback without churning the
/// address bar on load).
fn sync_fragment(fragments: &[&str], page: usize) {
    let Some(window) = window() else { return };
    let current_hash = window.location().hash().unwrap_or_default();
    if hash::index_for_fragment(fragments, &current_hash) == page {
        return;
    }
    if let Some(fragment) = hash::fragment_for_index(fragments, page) {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(
                &JsValue::NULL,
                "",
                Some(&format!("#{}", fragment)),
            );
        }
    }
}

fn step_and_notify(shared: &Rc<RefCell<Shared>>, direction: controller::Direction) {
    let mut s = shared.borrow_mut();
    let suspended = s.suspended;
    let accepted = s
        .controller
        .request_step(direction, js_sys::Date::now(), suspended);
    let notify = s.notify.clone();
    drop(s);
    if let Some(page) = accepted {
        log::debug!("page step accepted -> {}", page);
        notify.emit(page);
    }
}

#[function_component(FullPageScroll)]
pub fn full_page_scroll(props: &FullPageScrollProps) -> Html {
    let track_ref = use_node_ref();
    let shared = use_mut_ref(|| Shared {
        controller: PageController::new(props.fragments.len(), props.current_page),
        mode: props.mode,
        suspended: props.suspended,
        notify: props.on_page_change.clone(),
        fragments: props.fragments.clone(),
        touch_start_y: None,
    });

    // Keep the cell in step with the latest render.
    {
        let shared = shared.clone();
        let mode = props.mode;
        let suspended = props.suspended;
        let current = props.current_page;
        let notify = props.on_page_change.clone();
        use_effect(move || {
            let mut s = shared.borrow_mut();
            s.mode = mode;
            s.suspended = suspended;
            s.notify = notify;
            s.controller.set_current(current);
            || ()
        });
    }

    // Gesture and hash listeners, registered once on the window and removed
    // on teardown. Leaking these across remounts is a defect, so every
    // closure is moved into the destructor.
    {
        let shared = shared.clone();
        let track_ref = track_ref.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(win) = window() {
                    let wheel = {
                        let shared = shared.clone();
                        Closure::wrap(Box::new(move |event: WheelEvent| {
                            if shared.borrow().mode != ScrollMode::Paged {
                                return;
                            }
                            if let Some(direction) = controller::wheel_direction(event.delta_y()) {
                                step_and_notify(&shared, direction);
                            }
                        }) as Box<dyn FnMut(WheelEvent)>)
                    };

                    let keydown = {
                        let shared = shared.clone();
                        Closure::wrap(Box::new(move |event: KeyboardEvent| {
                            if shared.borrow().mode != ScrollMode::Paged {
                                return;
                            }
                            if let Some(direction) = controller::key_direction(&event.key()) {
                                step_and_notify(&shared, direction);
                            }
                        }) as Box<dyn FnMut(KeyboardEvent)>)
                    };

                    let touchstart = {
                        let shared = shared.clone();
                        Closure::wrap(Box::new(move |event: TouchEvent| {
                            let mut s = shared.borrow_mut();
                            if s.mode != ScrollMode::Paged {
                                return;
                            }
                            if let Some(touch) = event.touches().item(0) {
                                s.touch_start_y = Some(touch.client_y() as f64);
                            }
                        }) as Box<dyn FnMut(TouchEvent)>)
                    };

                    let touchmove = {
                        let shared = shared.clone();
                        let track_ref = track_ref.clone();
                        Closure::wrap(Box::new(move |event: TouchEvent| {
                            let s = shared.borrow();
                            if s.mode != ScrollMode::Paged || s.suspended {
                                return;
                            }
                            let (Some(start), Some(touch)) =
                                (s.touch_start_y, event.touches().item(0))
                            else {
                                return;
                            };
                            let page = s.controller.current_page();
                            drop(s);
                            // Transient drag offset, applied straight to the
                            // node so every move does not re-render the tree.
                            let offset = (touch.client_y() as f64 - start) * DRAG_DAMPING;
                            if let Some(track) = track_ref.cast::<HtmlElement>() {
                                let _ = track.class_list().add_1("dragging");
                                let _ = track.style().set_property(
                                    "transform",
                                    &format!(
                                        "translateY(calc(-{}vh + {:.1}px))",
                                        page * 100,
                                        offset
                                    ),
                                );
                            }
                        }) as Box<dyn FnMut(TouchEvent)>)
                    };

                    let touchend = {
                        let shared = shared.clone();
                        let track_ref = track_ref.clone();
                        Closure::wrap(Box::new(move |event: TouchEvent| {
                            let mut s = shared.borrow_mut();
                            if s.mode != ScrollMode::Paged {
                                return;
                            }
                            let start = s.touch_start_y.take();
                            let page = s.controller.current_page();
                            drop(s);
                            // Settle the track back onto the page grid; a
                            // re-render only happens when a step is accepted.
                            if let Some(track) = track_ref.cast::<HtmlElement>() {
                                let _ = track.class_list().remove_1("dragging");
                                let _ = track.style().set_property(
                                    "transform",
                                    &format!("translateY(-{}vh)", page * 100),
                                );
                            }
                            let (Some(start), Some(touch)) =
                                (start, event.changed_touches().item(0))
                            else {
                                return;
                            };
                            if let Some(direction) =
                                controller::swipe_direction(start, touch.client_y() as f64)
                            {
                                step_and_notify(&shared, direction);
                            }
                        }) as Box<dyn FnMut(TouchEvent)>)
                    };

                    let hashchange = {
                        let shared = shared.clone();
                        Closure::wrap(Box::new(move || {
                            let hash_value = window()
                                .and_then(|w| w.location().hash().ok())
                                .unwrap_or_default();
                            let mut s = shared.borrow_mut();
                            let index = hash::index_for_fragment(&s.fragments, &hash_value);
                            let (page, scroll_target, notify) = s.jump(index);
                            drop(s);
                            if let Some(target) = scroll_target {
                                scroll_section_into_view(&target, true);
                            }
                            notify.emit(page);
                        }) as Box<dyn FnMut()>)
                    };

                    let pairs: [(&str, &js_sys::Function); 6] = [
                        ("wheel", wheel.as_ref().unchecked_ref()),
                        ("keydown", keydown.as_ref().unchecked_ref()),
                        ("touchstart", touchstart.as_ref().unchecked_ref()),
                        ("touchmove", touchmove.as_ref().unchecked_ref()),
                        ("touchend", touchend.as_ref().unchecked_ref()),
                        ("hashchange", hashchange.as_ref().unchecked_ref()),
                    ];
                    for (name, listener) in pairs {
                        let _ = win.add_event_listener_with_callback(name, listener);
                    }

                    Box::new(move || {
                        let listeners: [(&str, &js_sys::Function); 6] = [
                            ("wheel", wheel.as_ref().unchecked_ref()),
                            ("keydown", keydown.as_ref().unchecked_ref()),
                            ("touchstart", touchstart.as_ref().unchecked_ref()),
                            ("touchmove", touchmove.as_ref().unchecked_ref()),
                            ("touchend", touchend.as_ref().unchecked_ref()),
                            ("hashchange", hashchange.as_ref().unchecked_ref()),
                        ];
                        for (name, listener) in listeners {
                            let _ = win.remove_event_listener_with_callback(name, listener);
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                destructor
            },
            (),
        );
    }

    // URL fragment follows the active page (replace, never push).
    {
        let fragments = props.fragments.clone();
        use_effect_with_deps(
            move |page| {
                sync_fragment(&fragments, *page);
                || ()
            },
            props.current_page,
        );
    }

    // Paged mode owns the viewport; the document must not scroll under it.
    use_effect_with_deps(
        move |mode| {
            let overflow = if *mode == ScrollMode::Paged {
                "hidden"
            } else {
                ""
            };
            if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
                let _ = body.style().set_property("overflow", overflow);
            }
            || {
                if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
                    let _ = body.style().set_property("overflow", "");
                }
            }
        },
        props.mode,
    );

    // Native-mode observer: among sections crossing a visibility threshold,
    // the most intersecting one wins and becomes the current page.
    {
        let shared = shared.clone();
        use_effect_with_deps(
            move |mode| {
                let destructor: Box<dyn FnOnce()> = if *mode == ScrollMode::Native {
                    // Entering native mode: put the document where the paged
                    // track was before handing scrolling back to the browser.
                    {
                        let s = shared.borrow();
                        if let Some(fragment) =
                            hash::fragment_for_index(&s.fragments, s.controller.current_page())
                        {
                            scroll_section_into_view(fragment, false);
                        }
                    }

                    let callback = {
                        let shared = shared.clone();
                        Closure::wrap(Box::new(
                            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                                let mut best: Option<(f64, usize)> = None;
                                for entry in entries.iter() {
                                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                                    if !entry.is_intersecting() {
                                        continue;
                                    }
                                    let id = entry.target().id();
                                    let index = {
                                        let s = shared.borrow();
                                        s.fragments.iter().position(|f| *f == id)
                                    };
                                    let Some(index) = index else { continue };
                                    let ratio = entry.intersection_ratio();
                                    if best.map_or(true, |(r, _)| ratio > r) {
                                        best = Some((ratio, index));
                                    }
                                }
                                if let Some((_, index)) = best {
                                    let mut s = shared.borrow_mut();
                                    if s.controller.current_page() == index {
                                        return;
                                    }
                                    let page = s.controller.observe_active(index);
                                    let notify = s.notify.clone();
                                    drop(s);
                                    notify.emit(page);
                                }
                            },
                        )
                            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>)
                    };

                    let mut init = IntersectionObserverInit::new();
                    let thresholds = js_sys::Array::of3(
                        &JsValue::from_f64(0.5),
                        &JsValue::from_f64(0.7),
                        &JsValue::from_f64(0.9),
                    );
                    init.threshold(&thresholds);

                    let observer = IntersectionObserver::new_with_options(
                        callback.as_ref().unchecked_ref(),
                        &init,
                    )
                    .ok();
                    if let (Some(observer), Some(document)) =
                        (observer.as_ref(), window().and_then(|w| w.document()))
                    {
                        let fragments = shared.borrow().fragments.clone();
                        for fragment in fragments {
                            if let Some(element) = document.get_element_by_id(fragment) {
                                observer.observe(&element);
                            }
                        }
                    }

                    Box::new(move || {
                        if let Some(observer) = observer {
                            observer.disconnect();
                        }
                        drop(callback);
                    })
                } else {
                    Box::new(|| ())
                };
                destructor
            },
            props.mode,
        );
    }

    // Absolute-jump commands from the nav bar. Honored even while
    // suspended, so a menu click racing a closing modal lands predictably.
    {
        let shared = shared.clone();
        use_effect_with_deps(
            move |request: &Option<NavRequest>| {
                if let Some(request) = request {
                    let mut s = shared.borrow_mut();
                    let (page, scroll_target, notify) = s.jump(request.index);
                    drop(s);
                    if let Some(target) = scroll_target {
                        scroll_section_into_view(&target, true);
                    }
                    notify.emit(page);
                }
                || ()
            },
            props.nav_request,
        );
    }

    let paged = props.mode == ScrollMode::Paged;
    let page_count = props.fragments.len();

    let go_to = {
        let shared = shared.clone();
        Callback::from(move |index: usize| {
            let mut s = shared.borrow_mut();
            let (page, scroll_target, notify) = s.jump(index);
            drop(s);
            if let Some(target) = scroll_target {
                scroll_section_into_view(&target, true);
            }
            notify.emit(page);
        })
    };

    let sections: Html = props
        .children
        .iter()
        .zip(props.fragments.iter())
        .map(|(child, fragment)| {
            html! {
                <section id={*fragment} key={*fragment} class="fps-page">
                    { child }
                </section>
            }
        })
        .collect();

    let track_style = format!(
        "transform: translateY(-{}vh); --fps-transition-ms: {}ms;",
        props.current_page * 100,
        config::PAGE_TRANSITION_MS
    );

    html! {
        <>
            <style>
                {r#"
                    .fps-viewport {
                        position: fixed;
                        inset: 0;
                        overflow: hidden;
                    }
                    .fps-track {
                        height: 100vh;
                        transition: transform var(--fps-transition-ms, 700ms) cubic-bezier(0.22, 1, 0.36, 1);
                        will-change: transform;
                    }
                    .fps-track.dragging {
                        transition: none;
                    }
                    .fps-page {
                        height: 100vh;
                        width: 100%;
                        overflow: hidden;
                    }
                    .fps-dots {
                        position: fixed;
                        right: 18px;
                        top: 50%;
                        transform: translateY(-50%);
                        display: flex;
                        flex-direction: column;
                        gap: 10px;
                        z-index: 60;
                    }
                    .fps-dot {
                        width: 10px;
                        height: 10px;
                        padding: 0;
                        border-radius: 50%;
                        border: 1px solid var(--color-primary);
                        background: transparent;
                        cursor: pointer;
                        transition: background 0.3s, transform 0.3s;
                    }
                    .fps-dot.active {
                        background: var(--color-primary);
                        transform: scale(1.25);
                    }
                    .fps-hint {
                        position: fixed;
                        bottom: 84px;
                        left: 50%;
                        transform: translateX(-50%);
                        z-index: 60;
                        background: none;
                        border: none;
                        color: var(--color-primary);
                        cursor: pointer;
                        animation: fps-bounce 1.6s ease-in-out infinite;
                    }
                    @keyframes fps-bounce {
                        0%, 100% { transform: translate(-50%, 0); }
                        50% { transform: translate(-50%, 8px); }
                    }
                "#}
            </style>
            {
                if paged {
                    html! {
                        <div class="fps-viewport">
                            <div ref={track_ref} class="fps-track" style={track_style}>
                                { sections }
                            </div>
                        </div>
                    }
                } else {
                    html! { <div class="fps-flow">{ sections }</div> }
                }
            }
            <div class="fps-dots" role="navigation" aria-label="페이지 이동">
                {
                    for (0..page_count).map(|index| {
                        let go_to = go_to.clone();
                        let active = index == props.current_page;
                        html! {
                            <button
                                class={classes!("fps-dot", active.then_some("active"))}
                                aria-label={format!("{} 페이지로 이동", index + 1)}
                                onclick={Callback::from(move |_| go_to.emit(index))}
                            />
                        }
                    })
                }
            </div>
            {
                if paged && props.current_page == 0 && !props.reduced_motion && page_count > 1 {
                    let go_to = go_to.clone();
                    html! {
                        <button
                            class="fps-hint"
                            aria-label="다음 페이지로 스크롤"
                            onclick={Callback::from(move |_| go_to.emit(1))}
                        >
                            <svg xmlns="http://www.w3.org/2000/svg" width="30" height="30"
                                viewBox="0 0 24 24" fill="none" stroke="currentColor"
                                stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round">
                                <path d="m6 9 6 6 6-6" />
                            </svg>
                        </button>
                    }
                } else {
                    html! {}
                }
            }
        </>
    }
}
