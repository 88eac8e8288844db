//! Inline SVG icons shared across sections (stroke-style, 24px grid).

use yew::prelude::*;

fn svg(size: u32, body: Html) -> Html {
    html! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width={size.to_string()}
            height={size.to_string()}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="1.5"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { body }
        </svg>
    }
}

pub fn chevron_left(size: u32) -> Html {
    svg(size, html! { <path d="m15 18-6-6 6-6" /> })
}

pub fn chevron_right(size: u32) -> Html {
    svg(size, html! { <path d="m9 18 6-6-6-6" /> })
}

pub fn close(size: u32) -> Html {
    svg(
        size,
        html! { <><path d="M18 6 6 18" /><path d="m6 6 12 12" /></> },
    )
}

pub fn phone(size: u32) -> Html {
    svg(
        size,
        html! {
            <path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z" />
        },
    )
}

pub fn map_pin(size: u32) -> Html {
    svg(
        size,
        html! {
            <>
                <path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z" />
                <circle cx="12" cy="10" r="3" />
            </>
        },
    )
}

pub fn external_link(size: u32) -> Html {
    svg(
        size,
        html! {
            <>
                <path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6" />
                <path d="M15 3h6v6" />
                <path d="M10 14 21 3" />
            </>
        },
    )
}

pub fn check_circle(size: u32) -> Html {
    svg(
        size,
        html! {
            <>
                <circle cx="12" cy="12" r="10" />
                <path d="m9 12 2 2 4-4" />
            </>
        },
    )
}
