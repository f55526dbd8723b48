use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::components::section_heading::SectionHeading;
use crate::data::content::{FaqEntry, FAQ};
use crate::state::disclosure::Accordion;

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    entry: &'static FaqEntry,
    is_open: bool,
    on_toggle: Callback<&'static str>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        let id = props.entry.id;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(id);
        })
    };
    html! {
        <div id={format!("faq-{}", props.entry.id)} class={classes!("faq-item", props.is_open.then(|| "open"))}>
            <button class="faq-question" aria-expanded={props.is_open.to_string()} onclick={toggle}>
                <span class="question-text">{props.entry.question}</span>
                <span class="toggle-icon">{if props.is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                <p>{props.entry.answer}</p>
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let accordion = use_state(Accordion::<&'static str>::new);

    let on_toggle = {
        let accordion = accordion.clone();
        Callback::from(move |id: &'static str| {
            let mut next = (*accordion).clone();
            next.toggle(id);
            accordion.set(next);
        })
    };

    let faq_css = r#"
        .faq-list {
            max-width: 820px;
            margin: 0 auto;
        }
        .faq-item {
            border-bottom: 1px solid rgba(200, 169, 81, 0.2);
        }
        .faq-question {
            width: 100%;
            display: flex;
            justify-content: space-between;
            align-items: center;
            background: none;
            border: none;
            color: #f2f2f2;
            font-size: 1.1rem;
            padding: 1.25rem 0;
            cursor: pointer;
            text-align: right;
        }
        .toggle-icon {
            color: #c8a951;
            font-size: 1.5rem;
        }
        .faq-answer {
            max-height: 0;
            opacity: 0;
            overflow: hidden;
            transition: max-height 0.35s ease, opacity 0.35s ease;
        }
        .faq-item.open .faq-answer {
            max-height: 16rem;
            opacity: 1;
        }
        .faq-answer p {
            color: #9a9a9a;
            line-height: 1.8;
            padding-bottom: 1.25rem;
        }
    "#;

    html! {
        <section id="faq" class="page-section alt">
            <style>{faq_css}</style>
            <SectionHeading eyebrow="שאלות נפוצות" title="כל מה שצריך לדעת לפני שמתחילים" />
            <Reveal class={classes!("faq-list")}>
                { for FAQ.iter().map(|entry| html! {
                    <FaqItem
                        key={entry.id}
                        entry={entry}
                        is_open={accordion.is_open(&entry.id)}
                        on_toggle={on_toggle.clone()}
                    />
                }) }
            </Reveal>
        </section>
    }
}
