//! Review carousel: highlight intro, visitor testimonials, and a closing
//! slide linking out to the full review page. Auto-advances while active.

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::icons;
use crate::config;

const SLIDE_DURATION_MS: u32 = 5000;

enum ReviewKind {
    Highlight,
    Testimonial { author: &'static str },
    Link,
}

struct Review {
    text: &'static str,
    sub: &'static str,
    kind: ReviewKind,
}

const REVIEWS: [Review; 7] = [
    Review {
        text: "다녀본 사람들의 생생한 리뷰",
        sub: "",
        kind: ReviewKind::Highlight,
    },
    Review {
        text: "Study Factory 다니면서 국가직 7급 교정직 합격했습니다.",
        sub: "사장님께서 매번 상주해 계시니 분위기가 흐트러질 일이 없고 매일 긴장감 있는 상태에서 공부할 수 있습니다. 공부하다 멘탈이 흔들릴 때마다 사장님께서 해주신 조언들이 수험생활을 버티는 데 정말 큰 힘이 되었습니다.",
        kind: ReviewKind::Testimonial { author: "b3*** 님" },
    },
    Review {
        text: "경찰청 주관 2025년 제1차 경찰공무원 최종 합격",
        sub: "블로그 추천글을 보고 등록했는데, 정해진 시간에 맞춰 공부량을 확보할 수 있었고 무엇보다 철저한 휴대폰 관리 덕분에 순공 시간이 비약적으로 늘었습니다. 허리가 아플 때 의자 추천부터 멘탈 케어까지, 단순 독서실 그 이상의 관리를 받았습니다.",
        kind: ReviewKind::Testimonial { author: "ssw*** 님" },
    },
    Review {
        text: "2025년 제62회 세무사 2차 합격",
        sub: "1차 시작부터 2차 합격까지 Study Factory와 함께했습니다. 중간에 다른 곳도 가봤지만 결국 다시 돌아오게 되더군요. 다 같이 치열하게 공부하는 분위기와 사장님의 열정적인 관리는 서울의 유명 학원 못지않습니다. 돈과 시간을 아끼는 지름길입니다.",
        kind: ReviewKind::Testimonial { author: "joj*** 님" },
    },
    Review {
        text: "부산광역시 2024년도 하반기 공공기관 통합채용 최종 합격",
        sub: "관리형 독서실은 처음이었는데 시설이 정말 좋습니다. 개인 좌석, 스탠딩석 등 공부하기 최적의 환경이고, 소음에 예민한 편인데 불편사항 발생 시 사장님께서 즉각 조치해주셔서 오직 공부에만 집중할 수 있었습니다.",
        kind: ReviewKind::Testimonial { author: "Lp9*** 님" },
    },
    Review {
        text: "식물보호기사, 한능검 1급, 토익스피킹 AL 달성",
        sub: "미루기 달인이었던 제가 등록 3일 만에 기사 필기에 합격했습니다. '한 달만 해보자'는 마음으로 시작했는데, 열심히 공부하는 주변 분위기에 압도되어 토스, 한능검, 컴활까지 줄줄이 합격했네요. 여기가 진짜 'Study Factory'입니다.",
        kind: ReviewKind::Testimonial { author: "vyw*** 님" },
    },
    Review {
        text: "더 많은 리뷰 보기",
        sub: "합격생들이 증명하는 Study Factory의 가치, 직접 확인해보세요.",
        kind: ReviewKind::Link,
    },
];

#[derive(Properties, PartialEq)]
pub struct ReviewsProps {
    pub is_active: bool,
}

#[function_component(Reviews)]
pub fn reviews(props: &ReviewsProps) -> Html {
    let slide = use_state(|| (0usize, 0i8));

    let paginate = {
        let slide = slide.clone();
        Callback::from(move |direction: i8| {
            let (index, _) = *slide;
            let len = REVIEWS.len();
            let next = (index + len).wrapping_add_signed(direction as isize) % len;
            slide.set((next, direction));
        })
    };

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
    let current = &REVIEWS[index];
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

    let body = match &current.kind {
        ReviewKind::Highlight => html! {
            <h2 class="review-highlight">{ current.text }</h2>
        },
        ReviewKind::Testimonial { author } => html! {
            <>
                <h2 class="review-title">{ current.text }</h2>
                <p class="review-quote">{ format!("\"{}\"", current.sub) }</p>
                <span class="review-author">{ *author }</span>
            </>
        },
        ReviewKind::Link => html! {
            <a
                class="review-link"
                href={config::REVIEWS_URL}
                target="_blank"
                rel="noopener noreferrer"
            >
                <div class="review-link-badge">{ icons::external_link(48) }</div>
                <h2 class="review-title">{ current.text }</h2>
                <p class="review-link-sub">{ current.sub }</p>
            </a>
        },
    };

    html! {
        <>
            <style>
                {r#"
                    .reviews-section {
                        position: relative;
                        height: 100%;
                        width: 100%;
                        overflow: hidden;
                        background: #ffffff;
                        color: #0f172a;
                    }
                    .reviews-section .carousel-arrow {
                        color: #94a3b8;
                    }
                    .reviews-section .carousel-arrow:hover {
                        color: #0f172a;
                    }
                    .reviews-slide {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        padding: 1.5rem;
                    }
                    .reviews-slide-inner {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        max-width: 48rem;
                        text-align: center;
                    }
                    .review-highlight {
                        margin: 0 0 1.5rem;
                        font-size: clamp(2.25rem, 6vw, 3.75rem);
                        font-weight: 700;
                        color: var(--color-primary);
                        animation: copy-rise 0.8s ease 0.2s both;
                    }
                    .review-title {
                        margin: 0 0 1.5rem;
                        font-size: clamp(1.5rem, 4vw, 2.25rem);
                        font-weight: 700;
                        color: #0f172a;
                        animation: copy-rise 0.8s ease 0.2s both;
                    }
                    .review-quote {
                        margin: 0 0 2rem;
                        font-size: clamp(1.125rem, 2.2vw, 1.25rem);
                        line-height: 1.8;
                        color: #475569;
                        word-break: keep-all;
                        animation: copy-rise 0.8s ease 0.3s both;
                    }
                    .review-author {
                        padding: 0.25rem 0.75rem;
                        border-radius: 9999px;
                        background: rgba(38, 126, 130, 0.1);
                        font-size: 0.875rem;
                        font-weight: 700;
                        color: var(--color-primary);
                        animation: copy-rise 0.8s ease 0.5s both;
                    }
                    .review-link {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        text-decoration: none;
                        color: inherit;
                    }
                    .review-link-badge {
                        margin-bottom: 1.5rem;
                        padding: 1rem;
                        border-radius: 50%;
                        background: rgba(38, 126, 130, 0.1);
                        color: var(--color-primary);
                        transition: background 0.3s, color 0.3s;
                    }
                    .review-link:hover .review-link-badge {
                        background: var(--color-primary);
                        color: #ffffff;
                    }
                    .review-link:hover .review-title {
                        color: var(--color-primary);
                    }
                    .review-link-sub {
                        margin: 0;
                        font-size: 1.125rem;
                        color: #64748b;
                    }
                    .reviews-slide .slide-progress {
                        margin-top: 4rem;
                        background: #e2e8f0;
                    }
                    .reviews-slide .slide-progress-fill.running {
                        animation-duration: 5s;
                    }
                "#}
            </style>
            <div class="reviews-section">
                <button class="carousel-arrow left" onclick={prev} aria-label="이전 리뷰">
                    { icons::chevron_left(48) }
                </button>
                <button class="carousel-arrow right" onclick={next} aria-label="다음 리뷰">
                    { icons::chevron_right(48) }
                </button>
                <div class={classes!("reviews-slide", enter_class)} key={format!("slide-{index}")}>
                    <div class="reviews-slide-inner">
                        { body }
                        <div class="slide-progress">
                            <div
                                class={classes!("slide-progress-fill", props.is_active.then_some("running"))}
                                key={format!("progress-{index}")}
                            ></div>
                        </div>
                    </div>
                </div>
            </div>
        </>
    }
}
