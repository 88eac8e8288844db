//! Floating consultation call-to-action and its reservation modal.
//!
//! While the modal is open it raises the shared suspension flag (gating
//! page gestures), locks body scroll, and traps focus the way the
//! accessible-modal contract demands: first focusable focused on open,
//! Tab/Shift-Tab cycle inside, Escape closes, focus restored on close.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement, KeyboardEvent, MouseEvent};
use yew::prelude::*;

use crate::components::icons;
use crate::config;

const FOCUSABLE_SELECTOR: &str = "a[href], button:not([disabled]), textarea:not([disabled]), input:not([disabled]), select:not([disabled]), [tabindex]:not([tabindex='-1'])";

fn focusables(modal: &HtmlElement) -> Vec<HtmlElement> {
    let mut elements = Vec::new();
    if let Ok(list) = modal.query_selector_all(FOCUSABLE_SELECTOR) {
        for i in 0..list.length() {
            if let Some(element) = list.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
                elements.push(element);
            }
        }
    }
    elements
}

#[derive(Properties, PartialEq)]
pub struct ConsultationCtaProps {
    /// Raised while the modal is open so the pagination controller ignores
    /// gesture input underneath it.
    pub on_suspend: Callback<bool>,
}

#[function_component(ConsultationCta)]
pub fn consultation_cta(props: &ConsultationCtaProps) -> Html {
    let open = use_state(|| false);
    let modal_ref = use_node_ref();

    let open_modal = {
        let open = open.clone();
        let on_suspend = props.on_suspend.clone();
        Callback::from(move |_: MouseEvent| {
            open.set(true);
            on_suspend.emit(true);
        })
    };

    let close_modal = {
        let open = open.clone();
        let on_suspend = props.on_suspend.clone();
        Callback::from(move |_: ()| {
            open.set(false);
            on_suspend.emit(false);
        })
    };

    // Focus trap + scroll lock for the modal's lifetime.
    {
        let modal_ref = modal_ref.clone();
        let close_modal = close_modal.clone();
        use_effect_with_deps(
            move |is_open| {
                let destructor: Box<dyn FnOnce()> = if *is_open {
                    let document = window().and_then(|w| w.document());
                    let previously_focused = document
                        .as_ref()
                        .and_then(|d| d.active_element())
                        .and_then(|e| e.dyn_into::<HtmlElement>().ok());

                    if let Some(body) = document.as_ref().and_then(|d| d.body()) {
                        let _ = body.style().set_property("overflow", "hidden");
                    }

                    if let Some(modal) = modal_ref.cast::<HtmlElement>() {
                        let first = focusables(&modal).into_iter().next();
                        let _ = first.unwrap_or(modal).focus();
                    }

                    let keydown = {
                        let modal_ref = modal_ref.clone();
                        Closure::wrap(Box::new(move |event: KeyboardEvent| {
                            if event.key() == "Escape" {
                                event.prevent_default();
                                close_modal.emit(());
                                return;
                            }
                            if event.key() != "Tab" {
                                return;
                            }
                            let Some(modal) = modal_ref.cast::<HtmlElement>() else {
                                return;
                            };
                            let elements = focusables(&modal);
                            let (Some(first), Some(last)) =
                                (elements.first(), elements.last())
                            else {
                                event.prevent_default();
                                return;
                            };
                            let active = window()
                                .and_then(|w| w.document())
                                .and_then(|d| d.active_element())
                                .and_then(|e| e.dyn_into::<HtmlElement>().ok());
                            let active = active.as_ref();
                            if event.shift_key() && active == Some(first) {
                                event.prevent_default();
                                let _ = last.focus();
                            } else if !event.shift_key() && active == Some(last) {
                                event.prevent_default();
                                let _ = first.focus();
                            }
                        })
                            as Box<dyn FnMut(KeyboardEvent)>)
                    };

                    if let Some(document) = document.as_ref() {
                        let _ = document.add_event_listener_with_callback(
                            "keydown",
                            keydown.as_ref().unchecked_ref(),
                        );
                    }

                    Box::new(move || {
                        if let Some(document) = window().and_then(|w| w.document()) {
                            let _ = document.remove_event_listener_with_callback(
                                "keydown",
                                keydown.as_ref().unchecked_ref(),
                            );
                            if let Some(body) = document.body() {
                                let _ = body.style().set_property("overflow", "");
                            }
                        }
                        if let Some(previous) = previously_focused {
                            let _ = previous.focus();
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                destructor
            },
            *open,
        );
    }

    let close_click = {
        let close_modal = close_modal.clone();
        Callback::from(move |_: MouseEvent| close_modal.emit(()))
    };
    let backdrop_click = {
        let close_modal = close_modal.clone();
        Callback::from(move |_: MouseEvent| close_modal.emit(()))
    };

    html! {
        <>
            <style>
                {r#"
                    .cta-float {
                        position: fixed;
                        bottom: 1.5rem;
                        right: 1.5rem;
                        z-index: 120;
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                        animation: cta-arrive 0.5s ease 1.2s both;
                    }
                    @keyframes cta-arrive {
                        from { opacity: 0; transform: translateY(100px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    .cta-primary {
                        padding: 0.75rem 1.5rem;
                        border: none;
                        border-radius: 9999px;
                        background: var(--color-primary);
                        color: #ffffff;
                        font-size: 0.95rem;
                        font-weight: 700;
                        letter-spacing: 0.02em;
                        cursor: pointer;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.15);
                        transition: background 0.3s, transform 0.2s;
                    }
                    .cta-primary:hover {
                        background: var(--color-primary-strong);
                        transform: scale(1.05);
                    }
                    .cta-primary:active {
                        transform: scale(0.95);
                    }
                    .cta-secondary {
                        padding: 0.75rem 1.5rem;
                        border: 1px solid var(--color-primary);
                        border-radius: 9999px;
                        background: #ffffff;
                        color: var(--color-primary);
                        font-size: 0.95rem;
                        font-weight: 700;
                        text-align: center;
                        text-decoration: none;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                        transition: background 0.3s, color 0.3s;
                    }
                    .cta-secondary:hover {
                        background: var(--color-primary);
                        color: #ffffff;
                    }
                    .consult-modal-layer {
                        position: fixed;
                        inset: 0;
                        z-index: 150;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 1rem;
                    }
                    .consult-backdrop {
                        position: absolute;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.4);
                        backdrop-filter: blur(4px);
                        animation: fade-in 0.25s ease both;
                    }
                    @keyframes fade-in {
                        from { opacity: 0; }
                        to { opacity: 1; }
                    }
                    .consult-modal {
                        position: relative;
                        width: 100%;
                        max-width: 28rem;
                        padding: 2rem;
                        border-radius: 1.5rem;
                        background: #ffffff;
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                        overflow: hidden;
                        text-align: center;
                        animation: modal-pop 0.3s ease both;
                    }
                    @keyframes modal-pop {
                        from { opacity: 0; transform: scale(0.95) translateY(20px); }
                        to { opacity: 1; transform: scale(1) translateY(0); }
                    }
                    .consult-close {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        padding: 0.5rem;
                        border: none;
                        background: none;
                        color: #94a3b8;
                        cursor: pointer;
                        transition: color 0.3s;
                    }
                    .consult-close:hover {
                        color: #475569;
                    }
                    .consult-modal h2 {
                        margin: 0 0 1.25rem;
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: #0f172a;
                    }
                    .consult-center {
                        font-size: 1.125rem;
                        font-weight: 500;
                        color: #475569;
                    }
                    .consult-center .sub {
                        margin: 0.25rem 0;
                        font-size: 0.9rem;
                        font-weight: 400;
                        color: #64748b;
                    }
                    .consult-phone {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.5rem;
                        margin-top: 0.5rem;
                        color: var(--color-primary);
                    }
                    .consult-phone p {
                        margin: 0;
                        font-size: 1.5rem;
                        font-weight: 700;
                    }
                    .consult-notice {
                        margin: 1.25rem 0;
                        padding: 0.75rem;
                        border-radius: 0.75rem;
                        background: #f8fafc;
                        font-size: 0.9rem;
                        color: #64748b;
                    }
                    .consult-actions {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 0.5rem;
                    }
                    .consult-actions a {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.5rem;
                        padding: 0.75rem 1rem;
                        border-radius: 0.75rem;
                        font-size: 0.875rem;
                        font-weight: 700;
                        text-decoration: none;
                        transition: background 0.3s, color 0.3s;
                    }
                    .consult-call {
                        background: var(--color-primary);
                        color: #ffffff;
                    }
                    .consult-call:hover {
                        background: var(--color-primary-strong);
                    }
                    .consult-map {
                        border: 1px solid var(--color-primary);
                        color: var(--color-primary);
                    }
                    .consult-map:hover {
                        background: var(--color-primary);
                        color: #ffffff;
                    }
                "#}
            </style>
            <div class="cta-float">
                <button class="cta-primary" onclick={open_modal}>{"상담예약"}</button>
                <a
                    class="cta-secondary"
                    href={config::MAP_URL}
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    {"위치보기"}
                </a>
            </div>
            {
                if *open {
                    html! {
                        <div class="consult-modal-layer">
                            <div class="consult-backdrop" onclick={backdrop_click}></div>
                            <div
                                ref={modal_ref}
                                class="consult-modal"
                                role="dialog"
                                aria-modal="true"
                                aria-label="상담 예약"
                                tabindex="-1"
                            >
                                <button class="consult-close" onclick={close_click} aria-label="상담 모달 닫기">
                                    { icons::close(24) }
                                </button>
                                <h2>{"상담 예약"}</h2>
                                <div class="consult-center">
                                    <p>{"자격증공장 중앙 컨트롤 본부"}</p>
                                    <p class="sub">{"(J-control hub)"}</p>
                                    <div class="consult-phone">
                                        { icons::phone(24) }
                                        <p>{ config::PHONE_NUMBER }</p>
                                    </div>
                                </div>
                                <p class="consult-notice">{"현재 부산 거주 수험자만 등록 가능합니다."}</p>
                                <div class="consult-actions">
                                    <a class="consult-call" href={format!("tel:{}", config::PHONE_NUMBER)}>
                                        { icons::phone(16) }
                                        {"전화걸기"}
                                    </a>
                                    <a
                                        class="consult-map"
                                        href={config::MAP_URL}
                                        target="_blank"
                                        rel="noopener noreferrer"
                                    >
                                        { icons::map_pin(16) }
                                        {"길찾기"}
                                    </a>
                                </div>
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </>
    }
}
