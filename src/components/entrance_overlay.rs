//! One-time "blinds opening" entrance. Holds a closed blind over the page,
//! then collapses every slat at once and fades the rails in place. The
//! composition root keeps paging suspended until `on_finished` fires, and
//! skips mounting this at all under reduced motion.

use gloo_timers::callback::Timeout;
use web_sys::window;
use yew::prelude::*;

use crate::config;

const SLAT_HEIGHT_PX: f64 = 30.0;
const START_DELAY_MS: u32 = 800;
const ANIMATION_MS: u32 = 2000;

#[derive(Properties, PartialEq)]
pub struct EntranceOverlayProps {
    pub on_finished: Callback<()>,
}

fn slat_count() -> usize {
    let height = window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(config::FALLBACK_VIEWPORT_HEIGHT);
    (height / SLAT_HEIGHT_PX).ceil() as usize + 2
}

#[function_component(EntranceOverlay)]
pub fn entrance_overlay(props: &EntranceOverlayProps) -> Html {
    let visible = use_state(|| true);
    let opening = use_state(|| false);
    let slats = use_state(slat_count);

    {
        let opening = opening.setter();
        let visible = visible.setter();
        let on_finished = props.on_finished.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
                    let _ = body.style().set_property("overflow", "hidden");
                }
                let start = Timeout::new(START_DELAY_MS, move || {
                    opening.set(true);
                });
                let finish = Timeout::new(START_DELAY_MS + ANIMATION_MS, move || {
                    visible.set(false);
                    if let Some(body) =
                        window().and_then(|w| w.document()).and_then(|d| d.body())
                    {
                        let _ = body.style().set_property("overflow", "");
                    }
                    on_finished.emit(());
                });
                move || {
                    drop(start);
                    drop(finish);
                }
            },
            (),
        );
    }

    if !*visible {
        return html! {};
    }

    html! {
        <>
            <style>
                {r#"
                    .entrance-overlay {
                        position: fixed;
                        inset: 0;
                        z-index: 9999;
                        display: flex;
                        flex-direction: column;
                        pointer-events: none;
                    }
                    .entrance-slat {
                        height: 30px;
                        width: 100%;
                        background: linear-gradient(to bottom, #d0d0d0 0%, #c0c0c0 100%);
                        border-bottom: 1px solid #a0a0a0;
                        transform: scaleY(1);
                        transform-origin: top;
                        transition: transform 2s cubic-bezier(0.8, 0, 0.2, 1);
                        will-change: transform;
                        z-index: 10;
                    }
                    .entrance-overlay.open .entrance-slat {
                        transform: scaleY(0);
                    }
                    .entrance-rail {
                        position: absolute;
                        top: 0;
                        bottom: 0;
                        width: 15px;
                        z-index: 20;
                        background-color: rgba(255, 255, 255, 0.4);
                        border-left: 1px solid rgba(255, 255, 255, 0.8);
                        border-right: 1px solid rgba(0, 0, 0, 0.05);
                        opacity: 1;
                        transition: opacity 2s cubic-bezier(0.8, 0, 0.2, 1);
                    }
                    .entrance-overlay.open .entrance-rail {
                        opacity: 0;
                    }
                "#}
            </style>
            <div class={classes!("entrance-overlay", (*opening).then_some("open"))}>
                <div class="entrance-rail" style="left: 20%;"></div>
                <div class="entrance-rail" style="left: 80%;"></div>
                { for (0..*slats).map(|i| html! { <div class="entrance-slat" key={i}></div> }) }
            </div>
        </>
    }
}
