use yew::prelude::*;

use crate::config;
use crate::hooks::use_scroll_y;
use crate::state::navigation::parallax_shift;
use crate::utils::scroll::navigate_to;

#[function_component(Hero)]
pub fn hero() -> Html {
    let cfg = config::get();
    let background = cfg.image_url("photo-1507608616759-54f48f0af0ee", 1920);
    let shift = parallax_shift(use_scroll_y(), cfg.hero_parallax_factor);

    let to_products = Callback::from(|_: MouseEvent| navigate_to("products"));
    let to_contact = Callback::from(|_: MouseEvent| navigate_to("contact"));

    let hero_css = r#"
        .hero {
            position: relative;
            min-height: 100vh;
            display: flex;
            align-items: center;
            justify-content: center;
            text-align: center;
            overflow: hidden;
        }
        .hero-background {
            position: absolute;
            top: -20%;
            right: 0;
            bottom: 0;
            left: 0;
            background-size: cover;
            background-position: center;
            will-change: transform;
        }
        .hero-overlay {
            position: absolute;
            inset: 0;
            background: linear-gradient(180deg, rgba(10, 12, 10, 0.55), rgba(10, 12, 10, 0.9));
        }
        .hero-content {
            position: relative;
            z-index: 2;
            max-width: 820px;
            padding: 0 1.5rem;
            animation: fade-up 1s ease-out both;
        }
        .hero-title {
            font-size: 3.5rem;
            font-weight: 800;
            color: #f2f2f2;
            margin-bottom: 1.25rem;
        }
        .hero-title .accent {
            color: #c8a951;
        }
        .hero-subtitle {
            font-size: 1.25rem;
            color: #cfcfcf;
            margin-bottom: 2.5rem;
        }
        .hero-lead {
            color: #b5b5b5;
            line-height: 1.8;
            margin-bottom: 2rem;
        }
        .hero-badges {
            display: flex;
            gap: 1.5rem;
            justify-content: center;
            flex-wrap: wrap;
            margin-bottom: 2.5rem;
            font-size: 0.8rem;
            color: #cfcfcf;
        }
        .hero-badges i {
            color: #c8a951;
            margin-left: 0.4rem;
        }
        .hero-cta-group {
            display: flex;
            gap: 1rem;
            justify-content: center;
            flex-wrap: wrap;
        }
        .hero-cta {
            padding: 0.9rem 2.2rem;
            border-radius: 4px;
            font-size: 1rem;
            cursor: pointer;
            border: 1px solid #c8a951;
        }
        .hero-cta.primary {
            background: #c8a951;
            color: #0a0c0a;
        }
        .hero-cta.secondary {
            background: transparent;
            color: #c8a951;
        }
        @media (max-width: 768px) {
            .hero-title {
                font-size: 2.2rem;
            }
            .hero-subtitle {
                font-size: 1.05rem;
            }
        }
    "#;

    html! {
        <header id="home" class="hero">
            <style>{hero_css}</style>
            <div
                class="hero-background"
                style={format!("background-image: url('{}'); transform: translateY({:.1}px);", background, shift)}
            ></div>
            <div class="hero-overlay"></div>
            <div class="hero-content">
                <h1 class="hero-title"><span class="accent">{"ש.י"}</span></h1>
                <p class="hero-subtitle">{"חברת נשק וסחר בינלאומי"}</p>
                <p class="hero-lead">
                    {"חברת ש.י היא חברה חדשה וחדשנית בתחום הסחר הבינלאומי בנשק. החברה מתמחה בייבוא, ייצוא וסחר של אמצעי לחימה וציוד ביטחוני בין מדינות, ובאספקת פתרונות מתקדמים לגורמים ממשלתיים, ארגונים רשמיים וגורמי ביטחון במדינת ישראל ובעולם."}
                </p>
                <div class="hero-badges">
                    <span><i class="fas fa-shield-halved"></i>{"פועלים לפי תקני בטיחות בינלאומיים"}</span>
                    <span><i class="fas fa-globe"></i>{"שירות גלובלי"}</span>
                    <span><i class="fas fa-file-contract"></i>{"עמידה בתקני רגולציה"}</span>
                </div>
                <div class="hero-cta-group">
                    <button class="hero-cta primary" onclick={to_products}>{"לקטלוג המוצרים"}</button>
                    <button class="hero-cta secondary" onclick={to_contact}>{"תיאום פגישה"}</button>
                </div>
            </div>
        </header>
    }
}
