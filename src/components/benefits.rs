//! Benefits carousel. Auto-advances while the section is the active page
//! and snaps back to the first slide shortly after the page scrolls away.

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::icons;
use crate::config;

const SLIDE_DURATION_MS: u32 = 4000;

struct Slide {
    text: &'static str,
    sub: &'static str,
}

const SLIDES: [Slide; 4] = [
    Slide {
        text: "Study Factory에 오면 누리는 행복",
        sub: "",
    },
    Slide {
        text: "최상의 면학 분위기",
        sub: "서로 자극받으며 성장하는 공간",
    },
    Slide {
        text: "철저한 출결 관리",
        sub: "나태해질 틈 없는 스파르타 시스템",
    },
    Slide {
        text: "쾌적한 학습 환경",
        sub: "공기청정기, 백색소음기 완비",
    },
];

#[derive(Properties, PartialEq)]
pub struct BenefitsProps {
    pub is_active: bool,
}

#[function_component(Benefits)]
pub fn benefits(props: &BenefitsProps) -> Html {
    // (index, direction): direction picks the slide-in side.
    let slide = use_state(|| (0usize, 0i8));

    let paginate = {
        let slide = slide.clone();
        Callback::from(move |direction: i8| {
            let (index, _) = *slide;
            let len = SLIDES.len();
            let next = (index + len).wrapping_add_signed(direction as isize) % len;
            slide.set((next, direction));
        })
    };

    // Auto-advance only while this section is the foregrounded page.
    {
        let paginate = paginate.clone();
        use_effect_with_deps(
            move |(is_active, _index): &(bool, usize)| {
                let timer = is_active.then(|| {
                    Timeout::new(SLIDE_DURATION_MS, move || {
                        paginate.emit(1);
                    })
                });
                move || drop(timer)
            },
            (props.is_active, slide.0),
        );
    }

    // Reset contract: back to the first slide after the grace delay, unless
    // the section becomes active again first.
    {
        let slide = slide.setter();
        use_effect_with_deps(
            move |is_active| {
                let timer = (!is_active).then(|| {
                    Timeout::new(config::SECTION_RESET_GRACE_MS, move || {
                        slide.set((0, 0));
                    })
                });
                move || drop(timer)
            },
            props.is_active,
        );
    }

    let (index, direction) = *slide;
    let current = &SLIDES[index];
    let enter_class = match direction {
        d if d > 0 => "slide-enter-right",
        d if d < 0 => "slide-enter-left",
        _ => "",
    };

    let prev = {
        let paginate = paginate.clone();
        Callback::from(move |_| paginate.emit(-1))
    };
    let next = {
        let paginate = paginate.clone();
        Callback::from(move |_| paginate.emit(1))
    };

    html! {
        <>
            <style>
                {r#"
                    .benefits-section {
                        position: relative;
                        height: 100%;
                        width: 100%;
                        overflow: hidden;
                        background: linear-gradient(135deg, #1e293b 0%, #0f172a 100%);
                        color: #ffffff;
                    }
                    .benefits-section::after {
                        content: "";
                        position: absolute;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.3);
                    }
                    .carousel-arrow {
                        position: absolute;
                        top: 50%;
                        transform: translateY(-50%);
                        z-index: 30;
                        padding: 0.5rem;
                        border: none;
                        background: none;
                        color: rgba(255, 255, 255, 0.5);
                        cursor: pointer;
                        transition: color 0.3s;
                    }
                    .carousel-arrow:hover {
                        color: #ffffff;
                    }
                    .carousel-arrow.left { left: 1rem; }
                    .carousel-arrow.right { right: 1rem; }
                    .benefits-slide {
                        position: absolute;
                        inset: 0;
                        z-index: 1;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        padding: 1.5rem;
                        text-align: center;
                    }
                    .slide-enter-right {
                        animation: slide-from-right 0.5s cubic-bezier(0.22, 1, 0.36, 1) both;
                    }
                    .slide-enter-left {
                        animation: slide-from-left 0.5s cubic-bezier(0.22, 1, 0.36, 1) both;
                    }
                    @keyframes slide-from-right {
                        from { transform: translateX(100%); }
                        to { transform: translateX(0); }
                    }
                    @keyframes slide-from-left {
                        from { transform: translateX(-100%); }
                        to { transform: translateX(0); }
                    }
                    .benefits-slide h2 {
                        margin: 0 0 1rem;
                        font-size: clamp(1.875rem, 5vw, 3rem);
                        font-weight: 700;
                        animation: copy-rise 0.8s ease 0.2s both;
                    }
                    .benefits-slide .sub {
                        margin: 0 0 2rem;
                        font-size: 1.125rem;
                        color: #cbd5e1;
                        animation: copy-rise 0.8s ease 0.3s both;
                    }
                    @keyframes copy-rise {
                        from { opacity: 0; transform: translateY(20px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    .slide-progress {
                        width: 6rem;
                        height: 2px;
                        margin-top: 3rem;
                        border-radius: 9999px;
                        overflow: hidden;
                        background: #334155;
                    }
                    .slide-progress-fill {
                        height: 100%;
                        width: 0;
                        background: var(--color-primary);
                    }
                    .slide-progress-fill.running {
                        animation: progress-fill 4s linear forwards;
                    }
                    @keyframes progress-fill {
                        from { width: 0; }
                        to { width: 100%; }
                    }
                "#}
            </style>
            <div class="benefits-section">
                <button class="carousel-arrow left" onclick={prev} aria-label="이전 슬라이드">
                    { icons::chevron_left(48) }
                </button>
                <button class="carousel-arrow right" onclick={next} aria-label="다음 슬라이드">
                    { icons::chevron_right(48) }
                </button>
                <div class={classes!("benefits-slide", enter_class)} key={format!("slide-{index}")}>
                    <h2>{ current.text }</h2>
                    {
                        if current.sub.is_empty() {
                            html! {}
                        } else {
                            html! { <p class="sub">{ current.sub }</p> }
                        }
                    }
                    <div class="slide-progress">
                        <div
                            class={classes!("slide-progress-fill", props.is_active.then_some("running"))}
                            key={format!("progress-{index}")}
                        ></div>
                    </div>
                </div>
            </div>
        </>
    }
}
