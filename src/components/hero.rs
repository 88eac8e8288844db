use yew::prelude::*;

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <>
            <style>
                {r#"
                    .hero-section {
                        position: relative;
                        height: 100%;
                        width: 100%;
                        overflow: hidden;
                        background: var(--color-surface);
                    }
                    .hero-backdrop {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(160deg, #eef7f7 0%, #ffffff 55%, #f0fafa 100%);
                    }
                    .hero-backdrop::after {
                        content: "";
                        position: absolute;
                        inset: 0;
                        background: rgba(255, 255, 255, 0.88);
                    }
                    .hero-content {
                        position: relative;
                        z-index: 10;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        height: 100%;
                        max-width: 64rem;
                        margin: 0 auto;
                        padding: 2.5rem 1.5rem 5rem;
                    }
                    .hero-copy {
                        text-align: center;
                        animation: hero-rise 0.7s ease both;
                    }
                    @keyframes hero-rise {
                        from { opacity: 0; transform: translateY(20px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    .hero-eyebrow {
                        color: var(--color-primary);
                        font-weight: 600;
                        letter-spacing: 0.05em;
                        font-size: 0.9rem;
                        margin-bottom: 1rem;
                    }
                    .hero-line {
                        font-size: clamp(1.125rem, 3vw, 1.875rem);
                        font-weight: 500;
                        color: #475569;
                        margin: 0.75rem 0;
                    }
                    .hero-title {
                        margin: 0.5rem 0;
                        padding: 0.5rem 0;
                        font-size: clamp(2.25rem, 6vw, 3.75rem);
                        font-weight: 800;
                        line-height: 1.2;
                        background: linear-gradient(to right, var(--color-primary), var(--color-primary-strong));
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .hero-pitch {
                        max-width: 48rem;
                        margin: 1.75rem auto 0;
                        font-size: clamp(0.875rem, 1.6vw, 1rem);
                        line-height: 1.7;
                        color: #475569;
                    }
                    .hero-pitch p {
                        margin: 0.75rem 0;
                    }
                    .hero-pitch strong {
                        margin: 0 0.25rem;
                        font-weight: 700;
                        color: var(--color-primary);
                    }
                "#}
            </style>
            <div class="hero-section">
                <div class="hero-backdrop"></div>
                <div class="hero-content">
                    <div class="hero-copy">
                        <p class="hero-eyebrow">{"전문자격 학습관리센터 | 성인관리형독서실"}</p>
                        <p class="hero-line">{"행복한 수험생활이 합격이 되는"}</p>
                        <h1 class="hero-title">{"자격증공장의 마법"}</h1>
                        <p class="hero-line">{"지금 시작합니다."}</p>
                        <div class="hero-pitch">
                            <p>
                                {"자격증공장은"}
                                <strong>{"중앙 컨트롤 센터"}</strong>
                                {"를 통해 전국 모든 지점의 면학 분위기를 실시간으로 모니터링하고 즉각적으로 통제합니다."}
                            </p>
                            <p>
                                {"소음, 온도, 습도, 그리고 학습법까지 전국 어디의 수험생이든 자격증공장에서 가장 완벽한 몰입을 경험하게 됩니다."}
                            </p>
                        </div>
                    </div>
                </div>
            </div>
        </>
    }
}
