//! Composition root for the landing page. Owns the page/suspension/mode
//! state the scroll controller and the overlays share, and hands each
//! section its `is_active` flag.

use stylist::yew::Global;
use web_sys::window;
use yew::prelude::*;

use crate::components::benefits::Benefits;
use crate::components::consultation_cta::ConsultationCta;
use crate::components::entrance_overlay::EntranceOverlay;
use crate::components::footer::Footer;
use crate::components::franchise::Franchise;
use crate::components::happiness::Happiness;
use crate::components::hero::Hero;
use crate::components::nav_bar::NavBar;
use crate::components::reviews::Reviews;
use crate::config;
use crate::scroll::full_page::{FullPageScroll, NavRequest};
use crate::scroll::hash;
use crate::scroll::mode::{self, ScrollMode};

const GLOBAL_CSS: &str = r#"
    :root {
        --color-primary: #267E82;
        --color-primary-strong: #1d6366;
        --color-surface: #ffffff;
        --nav-height: 56px;
    }
    * {
        box-sizing: border-box;
    }
    html, body {
        margin: 0;
        padding: 0;
        height: 100%;
    }
    body {
        font-family: 'Noto Sans KR', sans-serif;
        -webkit-font-smoothing: antialiased;
        color: #1e293b;
        background: #ffffff;
    }
    ::selection {
        background: #267E82;
        color: #ffffff;
    }
"#;

#[function_component(Home)]
pub fn home() -> Html {
    let reduced_motion = use_state(mode::prefers_reduced_motion);
    let scroll_mode = use_state(mode::resolve_initial);
    let current_page = use_state(|| {
        let hash_value = window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        hash::index_for_fragment(&config::PAGE_FRAGMENTS, &hash_value)
    });
    let entrance_done = {
        let skip_entrance = *reduced_motion;
        use_state(move || skip_entrance)
    };
    let modal_open = use_state(|| false);
    let nav_request = use_state(|| None::<NavRequest>);
    let nav_seq = use_mut_ref(|| 0u32);

    let navigate = {
        let nav_request = nav_request.clone();
        let nav_seq = nav_seq.clone();
        Callback::from(move |index: usize| {
            let mut seq = nav_seq.borrow_mut();
            *seq += 1;
            nav_request.set(Some(NavRequest { index, seq: *seq }));
        })
    };

    let on_page_change = {
        let current_page = current_page.clone();
        Callback::from(move |page: usize| current_page.set(page))
    };

    let on_mode_change = {
        let scroll_mode = scroll_mode.clone();
        Callback::from(move |new_mode: ScrollMode| {
            mode::persist(new_mode);
            scroll_mode.set(new_mode);
        })
    };

    let on_suspend = {
        let modal_open = modal_open.clone();
        Callback::from(move |suspended: bool| modal_open.set(suspended))
    };

    let entrance_finished = {
        let entrance_done = entrance_done.clone();
        Callback::from(move |_: ()| entrance_done.set(true))
    };

    let page = *current_page;
    let suspended = *modal_open || !*entrance_done;

    html! {
        <>
            <Global css={GLOBAL_CSS} />
            {
                if !*entrance_done {
                    html! { <EntranceOverlay on_finished={entrance_finished} /> }
                } else {
                    html! {}
                }
            }
            <NavBar
                on_navigate={navigate}
                mode={*scroll_mode}
                on_mode_change={on_mode_change}
            />
            <FullPageScroll
                fragments={config::PAGE_FRAGMENTS.to_vec()}
                current_page={page}
                on_page_change={on_page_change}
                mode={*scroll_mode}
                suspended={suspended}
                reduced_motion={*reduced_motion}
                nav_request={*nav_request}
            >
                <Hero />
                <Benefits is_active={page == 1} />
                <Happiness is_active={page == 2} />
                <Reviews is_active={page == 3} />
                <Franchise />
                <Footer />
            </FullPageScroll>
            <ConsultationCta on_suspend={on_suspend} />
        </>
    }
}
