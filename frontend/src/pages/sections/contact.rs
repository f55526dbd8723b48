use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::components::section_heading::SectionHeading;
use crate::config;
use crate::data::content::CONTACT;

#[function_component(Contact)]
pub fn contact() -> Html {
    let email = &config::get().contact_email;
    let mailto = format!("mailto:{}?subject={}", email, "פנייה מהאתר");

    let contact_css = r#"
        .contact-card {
            max-width: 720px;
            margin: 0 auto;
            background: #141814;
            border: 1px solid rgba(200, 169, 81, 0.25);
            border-radius: 6px;
            padding: 2.5rem;
            text-align: center;
        }
        .contact-lines {
            list-style: none;
            padding: 0;
            margin: 0 0 2rem;
        }
        .contact-lines li {
            color: #cfcfcf;
            margin-bottom: 0.75rem;
        }
        .contact-lines i {
            color: #c8a951;
            margin-inline-end: 0.6rem;
        }
        .contact-cta {
            display: inline-block;
            padding: 0.9rem 2.2rem;
            background: #c8a951;
            color: #0a0c0a;
            border-radius: 4px;
            text-decoration: none;
            font-weight: 700;
        }
        .contact-disclaimer {
            margin-top: 1.5rem;
            color: #7a7a7a;
            font-size: 0.85rem;
        }
    "#;

    html! {
        <section id="contact" class="page-section alt">
            <style>{contact_css}</style>
            <SectionHeading eyebrow="צור קשר" title="נשמח לבחון את הדרישה שלכם" />
            <Reveal>
                <div class="contact-card">
                    <ul class="contact-lines">
                        { for CONTACT.iter().map(|line| html! {
                            <li><i class={classes!("fas", line.icon)}></i>{line.text}</li>
                        }) }
                        <li><i class="fas fa-envelope"></i>{email.clone()}</li>
                    </ul>
                    <a class="contact-cta" href={mailto}>{"שליחת פנייה"}</a>
                    <p class="contact-disclaimer">{"פניות יטופלו רק מגופים מוסמכים ובכפוף לאימות זהות."}</p>
                </div>
            </Reveal>
        </section>
    }
}
