use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::components::section_heading::SectionHeading;
use crate::config;
use crate::data::content::STATS;

#[function_component(About)]
pub fn about() -> Html {
    let photo = config::get().image_url("photo-1580130379624-3a069adbffc5", 900);

    let about_css = r#"
        .about-grid {
            display: grid;
            grid-template-columns: 1fr 1fr;
            gap: 3rem;
            align-items: center;
        }
        .about-text p {
            color: #cfcfcf;
            line-height: 1.8;
            margin-bottom: 1rem;
        }
        .about-image img {
            width: 100%;
            border-radius: 6px;
            filter: grayscale(30%);
        }
        .stats-strip {
            display: grid;
            grid-template-columns: repeat(4, 1fr);
            gap: 1.5rem;
            margin-top: 3.5rem;
            text-align: center;
        }
        .stat-value {
            font-size: 2.5rem;
            font-weight: 800;
            color: #c8a951;
        }
        .stat-label {
            color: #9a9a9a;
        }
        @media (max-width: 768px) {
            .about-grid {
                grid-template-columns: 1fr;
            }
            .stats-strip {
                grid-template-columns: repeat(2, 1fr);
            }
        }
    "#;

    html! {
        <section id="about" class="page-section">
            <style>{about_css}</style>
            <SectionHeading eyebrow="אודות" title="שותף אסטרטגי לביטחון לאומי" />
            <div class="about-grid">
                <Reveal class={classes!("about-text")}>
                    <p>{"ש.י נוסדה בידי יוצאי מערכת הביטחון ומתמחה בתיווך ובאספקה של ציוד ביטחוני בין יצרנים מורשים לבין גופים ממשלתיים ברחבי העולם."}</p>
                    <p>{"כל עסקה מנוהלת תחת פיקוח רגולטורי מלא, עם תיעוד שרשרת אספקה מקצה לקצה ומחויבות בלתי מתפשרת לשקיפות מול הרשויות."}</p>
                </Reveal>
                <Reveal class={classes!("about-image")} delay_ms={150}>
                    <img src={photo} alt="צוות החברה" loading="lazy" />
                </Reveal>
            </div>
            <div class="stats-strip">
                { for STATS.iter().enumerate().map(|(i, stat)| html! {
                    <Reveal delay_ms={i as u32 * 100}>
                        <div class="stat-value">{stat.value}</div>
                        <div class="stat-label">{stat.label}</div>
                    </Reveal>
                }) }
            </div>
        </section>
    }
}
