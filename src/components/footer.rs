use chrono::Datelike;
use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <>
            <style>
                {r#"
                    .footer-section {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        height: 100%;
                        padding: 0 1.5rem;
                        background: #f8fafc;
                        border-top: 1px solid #e2e8f0;
                        text-align: center;
                    }
                    .footer-section h3 {
                        margin: 0 0 1rem;
                        font-size: 1.25rem;
                        font-weight: 700;
                        color: #0f172a;
                    }
                    .footer-copyright {
                        font-size: 0.75rem;
                        color: #94a3b8;
                    }
                "#}
            </style>
            <div class="footer-section">
                <h3>{"Study Factory"}</h3>
                <div class="footer-copyright">
                    { format!("© {} Study Factory. All rights reserved.", year) }
                </div>
            </div>
        </>
    }
}
