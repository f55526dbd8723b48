use yew::prelude::*;

use crate::config;
use crate::data::content::NAV_ITEMS;
use crate::utils::scroll::{navigate_to, scroll_to_top};

#[function_component(Footer)]
pub fn footer() -> Html {
    let email = config::get().contact_email.clone();

    let back_to_top = Callback::from(|_: MouseEvent| {
        if let Err(e) = scroll_to_top() {
            log::warn!("scroll to top failed: {}", e);
        }
    });

    let footer_css = r#"
        .site-footer {
            background: #0a0c0a;
            color: #9a9a9a;
            padding: 3rem 2rem 1.5rem;
            border-top: 1px solid rgba(200, 169, 81, 0.2);
        }
        .footer-grid {
            max-width: 1200px;
            margin: 0 auto;
            display: grid;
            grid-template-columns: 2fr 1fr 1fr;
            gap: 2rem;
        }
        .footer-grid h4 {
            color: #c8a951;
            margin-bottom: 1rem;
        }
        .footer-grid a {
            display: block;
            color: #9a9a9a;
            text-decoration: none;
            margin-bottom: 0.5rem;
        }
        .footer-grid a:hover {
            color: #e6e6e6;
        }
        .footer-bottom {
            max-width: 1200px;
            margin: 2rem auto 0;
            display: flex;
            justify-content: space-between;
            align-items: center;
            font-size: 0.85rem;
        }
        .back-to-top {
            background: none;
            border: 1px solid rgba(200, 169, 81, 0.4);
            color: #c8a951;
            border-radius: 50%;
            width: 2.5rem;
            height: 2.5rem;
            cursor: pointer;
        }
        @media (max-width: 768px) {
            .footer-grid {
                grid-template-columns: 1fr;
            }
        }
    "#;

    html! {
        <footer class="site-footer">
            <style>{footer_css}</style>
            <div class="footer-grid">
                <div>
                    <h4>{"ש.י סחר בינלאומי"}</h4>
                    <p>{"סחר ביטחוני מורשה לגופים ממשלתיים וגופי אכיפה בלבד. כל העסקאות כפופות לאישור הרשויות המוסמכות."}</p>
                </div>
                <div>
                    <h4>{"ניווט"}</h4>
                    { for NAV_ITEMS.iter().take(4).map(|item| {
                        let id = item.id;
                        let onclick = Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            navigate_to(id);
                        });
                        html! { <a href={format!("#{}", item.id)} {onclick}>{item.label}</a> }
                    }) }
                </div>
                <div>
                    <h4>{"קשר"}</h4>
                    <a href={format!("mailto:{}", email)}>{email.clone()}</a>
                    <a href="#compliance" onclick={Callback::from(|e: MouseEvent| {
                        e.prevent_default();
                        navigate_to("compliance");
                    })}>{"מדיניות ציות"}</a>
                </div>
            </div>
            <div class="footer-bottom">
                <span>{"© ש.י. כל הזכויות שמורות."}</span>
                <button class="back-to-top" aria-label="חזרה למעלה" onclick={back_to_top}>
                    <i class="fas fa-arrow-up"></i>
                </button>
            </div>
        </footer>
    }
}
