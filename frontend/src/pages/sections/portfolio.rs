use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::components::section_heading::SectionHeading;
use crate::config;
use crate::data::content::CASE_STUDIES;
use crate::state::disclosure::Accordion;

/// Expanding one case card collapses whichever card was open before.
fn toggled(current: &Accordion<&'static str>, id: &'static str) -> Accordion<&'static str> {
    let mut next = current.clone();
    next.toggle(id);
    next
}

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let expanded = use_state(Accordion::<&'static str>::new);

    let portfolio_css = r#"
        .portfolio-grid {
            display: grid;
            grid-template-columns: repeat(3, 1fr);
            gap: 1.5rem;
        }
        .case-card {
            background: #141814;
            border-radius: 6px;
            overflow: hidden;
        }
        .case-card img {
            width: 100%;
            aspect-ratio: 16 / 10;
            object-fit: cover;
        }
        .case-body {
            padding: 1.5rem;
        }
        .case-region {
            color: #c8a951;
            font-size: 0.85rem;
        }
        .case-region i {
            margin-left: 0.4rem;
        }
        .case-body h3 {
            color: #f2f2f2;
            margin: 0.5rem 0;
        }
        .case-body p {
            color: #9a9a9a;
            line-height: 1.6;
        }
        .case-toggle {
            margin-top: 1rem;
            background: none;
            border: none;
            color: #c8a951;
            cursor: pointer;
            padding: 0;
        }
        .case-details {
            max-height: 0;
            opacity: 0;
            overflow: hidden;
            transition: max-height 0.4s ease, opacity 0.4s ease;
        }
        .case-card.expanded .case-details {
            max-height: 20rem;
            opacity: 1;
        }
        .case-details h4 {
            color: #c8a951;
            font-size: 0.9rem;
            margin-top: 0.75rem;
        }
        .case-details p {
            color: #cfcfcf;
        }
        @media (max-width: 968px) {
            .portfolio-grid {
                grid-template-columns: 1fr;
            }
        }
    "#;

    html! {
        <section id="portfolio" class="page-section alt">
            <style>{portfolio_css}</style>
            <SectionHeading eyebrow="תיק עבודות" title="פרויקטים נבחרים" />
            <div class="portfolio-grid">
                { for CASE_STUDIES.iter().enumerate().map(|(i, case)| {
                    let is_open = expanded.is_open(&case.id);
                    let toggle = {
                        let expanded = expanded.clone();
                        let id = case.id;
                        Callback::from(move |_: MouseEvent| expanded.set(toggled(&expanded, id)))
                    };
                    html! {
                        <Reveal delay_ms={i as u32 * 120}>
                            <article class={classes!("case-card", is_open.then(|| "expanded"))}>
                                <img src={config::get().image_url(case.photo, 800)} alt={case.title} loading="lazy" />
                                <div class="case-body">
                                    <span class="case-region">
                                        <i class={classes!("fas", case.kind.icon())}></i>
                                        {case.region}
                                    </span>
                                    <h3>{case.title}</h3>
                                    <p>{case.challenge}</p>
                                    <div class="case-details" aria-hidden={(!is_open).to_string()}>
                                        <h4>{"הפתרון"}</h4>
                                        <p>{case.solution}</p>
                                        <h4>{"התוצאה"}</h4>
                                        <p>{case.outcome}</p>
                                    </div>
                                    <button class="case-toggle" onclick={toggle}>
                                        { if is_open { "פחות פרטים" } else { "פרטים נוספים" } }
                                    </button>
                                </div>
                            </article>
                        </Reveal>
                    }
                }) }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expanding_a_second_case_collapses_the_first() {
        let first = CASE_STUDIES[0].id;
        let second = CASE_STUDIES[1].id;
        let expanded = toggled(&Accordion::new(), first);
        let expanded = toggled(&expanded, second);
        assert!(!expanded.is_open(&first));
        assert!(expanded.is_open(&second));
        let open = CASE_STUDIES.iter().filter(|c| expanded.is_open(&c.id)).count();
        assert_eq!(open, 1);
    }

    #[test]
    fn expanding_the_open_case_collapses_everything() {
        let id = CASE_STUDIES[2].id;
        let expanded = toggled(&toggled(&Accordion::new(), id), id);
        assert!(CASE_STUDIES.iter().all(|c| !expanded.is_open(&c.id)));
    }
}
