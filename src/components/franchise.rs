use yew::prelude::*;

use crate::components::icons;
use crate::config;

const POINTS: [&str; 3] = [
    "중앙 컨트롤 센터 기반의 전 지점 실시간 관리",
    "검증된 관리형 독서실 운영 시스템 일체 제공",
    "상권 분석부터 개원까지 본사 전담 지원",
];

#[function_component(Franchise)]
pub fn franchise() -> Html {
    html! {
        <>
            <style>
                {r#"
                    .franchise-section {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        height: 100%;
                        padding: 0 1.5rem;
                        overflow: hidden;
                        background: linear-gradient(to bottom, #f8fafc, #ffffff);
                        text-align: center;
                    }
                    .franchise-section h2 {
                        margin: 0 0 1rem;
                        font-size: clamp(1.875rem, 5vw, 3rem);
                        font-weight: 700;
                        color: #0f172a;
                    }
                    .franchise-pitch {
                        margin: 0 0 2.5rem;
                        font-size: clamp(1rem, 2vw, 1.25rem);
                        color: #475569;
                    }
                    .franchise-points {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        margin: 0 0 2.5rem;
                        padding: 0;
                        list-style: none;
                        text-align: left;
                    }
                    .franchise-points li {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        font-size: 1rem;
                        color: #334155;
                    }
                    .franchise-points li svg {
                        flex-shrink: 0;
                        color: var(--color-primary);
                    }
                    .franchise-cta {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.875rem 2rem;
                        border-radius: 9999px;
                        background: var(--color-primary);
                        color: #ffffff;
                        font-size: 1rem;
                        font-weight: 700;
                        text-decoration: none;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                        transition: background 0.3s, transform 0.2s;
                    }
                    .franchise-cta:hover {
                        background: var(--color-primary-strong);
                        transform: scale(1.03);
                    }
                "#}
            </style>
            <div class="franchise-section">
                <h2>{"가맹 문의"}</h2>
                <p class="franchise-pitch">
                    {"자격증공장의 관리 시스템을 우리 동네에서도. 개원 상담은 본부가 직접 진행합니다."}
                </p>
                <ul class="franchise-points">
                    {
                        for POINTS.iter().map(|point| html! {
                            <li>
                                { icons::check_circle(20) }
                                { *point }
                            </li>
                        })
                    }
                </ul>
                <a class="franchise-cta" href={format!("tel:{}", config::PHONE_NUMBER)}>
                    { icons::phone(18) }
                    {"가맹 상담 전화하기"}
                </a>
            </div>
        </>
    }
}
