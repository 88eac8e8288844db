use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content;
use crate::scroll::mode::ScrollMode;

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    /// Absolute-jump dispatch into the pagination controller.
    pub on_navigate: Callback<usize>,
    pub mode: ScrollMode,
    pub on_mode_change: Callback<ScrollMode>,
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let go_home = {
        let on_navigate = props.on_navigate.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            on_navigate.emit(0);
        })
    };

    let other_mode = match props.mode {
        ScrollMode::Paged => ScrollMode::Native,
        ScrollMode::Native => ScrollMode::Paged,
    };
    let mode_label = match props.mode {
        ScrollMode::Paged => "일반 스크롤로 보기",
        ScrollMode::Native => "스냅 스크롤로 보기",
    };
    let switch_mode = {
        let on_mode_change = props.on_mode_change.clone();
        Callback::from(move |_: MouseEvent| {
            on_mode_change.emit(other_mode);
        })
    };

    html! {
        <>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        height: var(--nav-height);
                        padding: 0 1.5rem;
                        background: rgba(255, 255, 255, 0.95);
                        backdrop-filter: blur(8px);
                        border-bottom: 1px solid #f1f5f9;
                        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.04);
                    }
                    .nav-logo {
                        border: none;
                        background: none;
                        cursor: pointer;
                        font-size: 1.25rem;
                        font-weight: 900;
                        letter-spacing: -0.02em;
                        color: var(--color-primary);
                    }
                    .nav-logo span {
                        color: #1e293b;
                    }
                    .burger-menu {
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        gap: 5px;
                        width: 40px;
                        height: 40px;
                        padding: 8px;
                        border: none;
                        background: none;
                        cursor: pointer;
                    }
                    .burger-menu span {
                        display: block;
                        height: 2px;
                        width: 100%;
                        background: #1e293b;
                        transition: transform 0.3s, opacity 0.3s;
                    }
                    .burger-menu.open span:nth-child(1) {
                        transform: translateY(7px) rotate(45deg);
                    }
                    .burger-menu.open span:nth-child(2) {
                        opacity: 0;
                    }
                    .burger-menu.open span:nth-child(3) {
                        transform: translateY(-7px) rotate(-45deg);
                    }
                    .nav-menu {
                        position: fixed;
                        inset: 0;
                        z-index: 40;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 3rem;
                        background: rgba(255, 255, 255, 0.96);
                        backdrop-filter: blur(12px);
                        opacity: 0;
                        pointer-events: none;
                        transition: opacity 0.35s ease;
                    }
                    .nav-menu.open {
                        opacity: 1;
                        pointer-events: auto;
                    }
                    .nav-menu ul {
                        list-style: none;
                        margin: 0;
                        padding: 0;
                        display: flex;
                        flex-direction: column;
                        gap: 2rem;
                        text-align: center;
                    }
                    .nav-menu-item {
                        border: none;
                        background: none;
                        cursor: pointer;
                        font-size: 1.75rem;
                        font-weight: 600;
                        color: #1e293b;
                        transition: color 0.3s;
                    }
                    .nav-menu-item:hover {
                        color: var(--color-primary);
                    }
                    .nav-mode-toggle {
                        border: 1px solid var(--color-primary);
                        border-radius: 9999px;
                        background: none;
                        cursor: pointer;
                        padding: 0.5rem 1.25rem;
                        font-size: 0.85rem;
                        font-weight: 600;
                        color: var(--color-primary);
                        transition: background 0.3s, color 0.3s;
                    }
                    .nav-mode-toggle:hover {
                        background: var(--color-primary);
                        color: #ffffff;
                    }
                "#}
            </style>
            <nav class="top-nav">
                <button class="nav-logo" onclick={go_home} aria-label="자격증공장 홈으로 이동">
                    {"자격증"}<span>{"공장"}</span>
                </button>
                <button
                    class={classes!("burger-menu", (*menu_open).then_some("open"))}
                    onclick={toggle_menu}
                    aria-label="Menu"
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </nav>
            <div class={classes!("nav-menu", (*menu_open).then_some("open"))}>
                <ul>
                    {
                        for content::MENU_ITEMS.iter().map(|item| {
                            let on_navigate = props.on_navigate.clone();
                            let menu_open = menu_open.clone();
                            let page = item.page;
                            html! {
                                <li>
                                    <button
                                        class="nav-menu-item"
                                        onclick={Callback::from(move |_| {
                                            menu_open.set(false);
                                            on_navigate.emit(page);
                                        })}
                                    >
                                        { item.label }
                                    </button>
                                </li>
                            }
                        })
                    }
                </ul>
                <button class="nav-mode-toggle" onclick={switch_mode}>
                    { mode_label }
                </button>
            </div>
        </>
    }
}
