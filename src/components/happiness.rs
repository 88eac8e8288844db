//! Happiness feature gallery: intro slide plus image features with
//! alternating layouts. Manual navigation only.

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::icons;
use crate::config;

enum SlideKind {
    Intro,
    Feature {
        text: &'static str,
        image: &'static str,
        image_right: bool,
    },
}

struct Slide {
    title: &'static str,
    kind: SlideKind,
}

const SLIDES: [Slide; 6] = [
    Slide {
        title: "자격증공장에 오면 누리는 행복",
        kind: SlideKind::Intro,
    },
    Slide {
        title: "매일 아침 건강 선식 제공",
        kind: SlideKind::Feature {
            text: "선식은 익힌 곡물로 소화에 용이하며 아침 뇌기능 활성에 도움",
            image: "/benefits_food.jpg",
            image_right: true,
        },
    },
    Slide {
        title: "모모스커피와 함께하는 공부",
        kind: SlideKind::Feature {
            text: "바리스타 대회 1등 모모스커피 에스쇼콜라 블렌드 스페셜티 원두와 함께하는 고급스러운 공부",
            image: "/benefits_coffee.jpg",
            image_right: false,
        },
    },
    Slide {
        title: "건강 간식 제공",
        kind: SlideKind::Feature {
            text: "오븐에 구운 감자, 고구마, 단호박, 삶은 달걀로 운동 없이도 살찌지 않는 건강 수험 생활",
            image: "/benefits_healthy_food.jpg",
            image_right: true,
        },
    },
    Slide {
        title: "뷔페급 신선 과일 제공",
        kind: SlideKind::Feature {
            text: "다양한 과일을 통한 비타민 섭취와 스트레스 완화로 활기찬 전문직 수험생활",
            image: "/benefits_fruits.jpg",
            image_right: false,
        },
    },
    Slide {
        title: "야식 라면 무한 제공",
        kind: SlideKind::Feature {
            text: "늦은 밤까지 이어지는 공부에 든든한 야식으로 허기질 틈 없는 수험생활",
            image: "/benefits_ramen.jpg",
            image_right: true,
        },
    },
];

#[derive(Properties, PartialEq)]
pub struct HappinessProps {
    pub is_active: bool,
}

#[function_component(Happiness)]
pub fn happiness(props: &HappinessProps) -> Html {
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
    let hint_next = {
        let paginate = paginate.clone();
        Callback::from(move |_| paginate.emit(1))
    };

    let body = match &current.kind {
        SlideKind::Intro => html! {
            <div class="happiness-intro">
                <h2>{ current.title }</h2>
                <p class="happiness-hint" onclick={hint_next}>{"오른쪽으로 넘기기 →"}</p>
            </div>
        },
        SlideKind::Feature {
            text,
            image,
            image_right,
        } => html! {
            <div class={classes!("happiness-feature", image_right.then_some("image-right"))}>
                <div class="happiness-visual">
                    <img src={*image} alt={current.title} loading="lazy" />
                </div>
                <div class="happiness-copy">
                    <h3>{ current.title }</h3>
                    <p>{ *text }</p>
                </div>
            </div>
        },
    };

    html! {
        <>
            <style>
                {r#"
                    .happiness-section {
                        position: relative;
                        height: 100%;
                        width: 100%;
                        overflow: hidden;
                        background: #ffffff;
                        color: #0f172a;
                    }
                    .happiness-section .carousel-arrow {
                        color: #cbd5e1;
                    }
                    .happiness-section .carousel-arrow:hover {
                        color: var(--color-primary);
                    }
                    .happiness-slide {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .happiness-intro {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        padding: 2rem 1.5rem 5rem;
                        text-align: center;
                    }
                    .happiness-intro h2 {
                        margin: 0 0 2rem;
                        font-size: clamp(1.875rem, 5vw, 3.75rem);
                        font-weight: 700;
                        letter-spacing: -0.02em;
                        color: var(--color-primary);
                        white-space: pre-line;
                    }
                    .happiness-hint {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        font-size: clamp(1rem, 2vw, 1.25rem);
                        font-weight: 500;
                        color: #94a3b8;
                        cursor: pointer;
                        animation: hint-nudge 1.5s ease-in-out infinite alternate;
                    }
                    @keyframes hint-nudge {
                        from { transform: translateX(-8px); opacity: 0.6; }
                        to { transform: translateX(0); opacity: 1; }
                    }
                    .happiness-feature {
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        gap: 1rem;
                        width: 100%;
                        max-width: 72rem;
                        height: 100%;
                        margin: 0 auto;
                        padding: 2rem 1.25rem 5rem;
                    }
                    .happiness-visual {
                        flex: 1;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        min-height: 0;
                    }
                    .happiness-visual img {
                        max-width: 620px;
                        width: 100%;
                        max-height: clamp(260px, 44vh, 470px);
                        object-fit: contain;
                        padding: 0 0.5rem;
                        filter: drop-shadow(0 25px 25px rgba(0, 0, 0, 0.15));
                    }
                    .happiness-copy {
                        flex: 1;
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        gap: 0.75rem;
                        text-align: center;
                    }
                    .happiness-copy h3 {
                        margin: 0;
                        font-size: clamp(1.5rem, 4vw, 3rem);
                        font-weight: 700;
                        line-height: 1.25;
                        color: #1e293b;
                        white-space: pre-line;
                        animation: copy-rise 0.6s ease 0.2s both;
                    }
                    .happiness-copy p {
                        margin: 0;
                        font-size: 0.9rem;
                        line-height: 1.7;
                        color: #475569;
                        white-space: pre-line;
                        animation: copy-rise 0.6s ease 0.4s both;
                    }
                    @media (min-width: 768px) {
                        .happiness-feature {
                            flex-direction: row;
                            align-items: center;
                            gap: 3rem;
                            padding: 2rem 3rem 4rem;
                        }
                        .happiness-feature.image-right .happiness-visual {
                            order: 2;
                        }
                        .happiness-feature.image-right .happiness-copy {
                            order: 1;
                        }
                        .happiness-copy {
                            text-align: left;
                            align-items: flex-start;
                        }
                        .happiness-visual img {
                            max-height: clamp(320px, 56vh, 600px);
                        }
                    }
                    .happiness-counter {
                        position: absolute;
                        bottom: 2rem;
                        left: 50%;
                        transform: translateX(-50%);
                        z-index: 30;
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                    }
                    .happiness-counter span {
                        padding: 0.25rem 0.75rem;
                        border-radius: 9999px;
                        background: rgba(255, 255, 255, 0.5);
                        backdrop-filter: blur(4px);
                        font-size: 0.75rem;
                        font-weight: 600;
                        color: var(--color-primary);
                        opacity: 0.8;
                    }
                    .happiness-counter .counter-arrow {
                        padding: 0.5rem;
                        border: none;
                        background: none;
                        color: #94a3b8;
                        cursor: pointer;
                        transition: color 0.3s;
                    }
                    .happiness-counter .counter-arrow:hover {
                        color: var(--color-primary);
                    }
                "#}
            </style>
            <div class="happiness-section">
                <button class="carousel-arrow left" onclick={prev.clone()} aria-label="이전 슬라이드">
                    { icons::chevron_left(40) }
                </button>
                <button class="carousel-arrow right" onclick={next.clone()} aria-label="다음 슬라이드">
                    { icons::chevron_right(40) }
                </button>
                <div class={classes!("happiness-slide", enter_class)} key={format!("slide-{index}")}>
                    { body }
                </div>
                <div class="happiness-counter">
                    <button class="counter-arrow" onclick={prev} aria-label="이전 슬라이드">
                        { icons::chevron_left(22) }
                    </button>
                    <span>{ format!("{} / {}", index + 1, SLIDES.len()) }</span>
                    <button class="counter-arrow" onclick={next} aria-label="다음 슬라이드">
                        { icons::chevron_right(22) }
                    </button>
                </div>
            </div>
        </>
    }
}
