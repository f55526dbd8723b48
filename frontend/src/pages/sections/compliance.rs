use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::components::section_heading::SectionHeading;
use crate::data::content::COMPLIANCE;

#[function_component(Compliance)]
pub fn compliance() -> Html {
    let compliance_css = r#"
        .compliance-list {
            display: grid;
            grid-template-columns: repeat(2, 1fr);
            gap: 1.5rem;
        }
        .compliance-point {
            display: flex;
            gap: 1.25rem;
            align-items: flex-start;
        }
        .compliance-point i {
            color: #c8a951;
            font-size: 1.6rem;
            margin-top: 0.25rem;
        }
        .compliance-point h3 {
            color: #f2f2f2;
            margin-bottom: 0.4rem;
        }
        .compliance-point p {
            color: #9a9a9a;
            line-height: 1.7;
        }
        .compliance-note {
            margin-top: 2.5rem;
            padding: 1.25rem 1.5rem;
            border-inline-start: 3px solid #c8a951;
            background: #141814;
            color: #cfcfcf;
        }
        @media (max-width: 768px) {
            .compliance-list {
                grid-template-columns: 1fr;
            }
        }
    "#;

    html! {
        <section id="compliance" class="page-section">
            <style>{compliance_css}</style>
            <SectionHeading
                eyebrow="רגולציה וציות"
                title="פועלים רק במסגרת החוק"
                subtitle={Some("כל עסקה נבחנת מול דיני הפיקוח על יצוא ביטחוני לפני שהיא יוצאת לדרך")}
            />
            <div class="compliance-list">
                { for COMPLIANCE.iter().enumerate().map(|(i, point)| html! {
                    <Reveal delay_ms={i as u32 * 100}>
                        <div class="compliance-point">
                            <i class={classes!("fas", point.icon)}></i>
                            <div>
                                <h3>{point.title}</h3>
                                <p>{point.body}</p>
                            </div>
                        </div>
                    </Reveal>
                }) }
            </div>
            <Reveal>
                <p class="compliance-note">
                    {"איננו מתקשרים עם גורמים פרטיים, עם מדינות תחת אמברגו או עם גורם שלא הציג תעודת משתמש קצה מאומתת."}
                </p>
            </Reveal>
        </section>
    }
}
