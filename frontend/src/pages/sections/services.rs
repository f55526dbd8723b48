use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::components::section_heading::SectionHeading;
use crate::data::content::{Service, SERVICES};

#[derive(Properties, PartialEq)]
struct ServiceCardProps {
    service: &'static Service,
}

#[function_component(ServiceCard)]
fn service_card(props: &ServiceCardProps) -> Html {
    let hovered = use_state_eq(|| false);
    let on_enter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let on_leave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };
    let service = props.service;

    html! {
        <div
            class={classes!("service-card", (*hovered).then(|| "hovered"))}
            onmouseenter={on_enter}
            onmouseleave={on_leave}
        >
            <i class={classes!("fas", service.icon)}></i>
            <h3>{service.title}</h3>
            <p>{service.body}</p>
        </div>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    let services_css = r#"
        .services-grid {
            display: grid;
            grid-template-columns: repeat(3, 1fr);
            gap: 1.5rem;
        }
        .service-card {
            background: #141814;
            border: 1px solid rgba(200, 169, 81, 0.15);
            border-radius: 6px;
            padding: 2rem;
            height: 100%;
            transition: border-color 0.3s ease, transform 0.3s ease;
        }
        .service-card.hovered {
            border-color: #c8a951;
            transform: translateY(-4px);
        }
        .service-card i {
            display: inline-block;
            font-size: 2rem;
            color: #c8a951;
            margin-bottom: 1rem;
            transition: transform 0.3s ease;
        }
        .service-card.hovered i {
            transform: scale(1.15);
        }
        .service-card h3 {
            color: #f2f2f2;
            margin-bottom: 0.75rem;
        }
        .service-card p {
            color: #9a9a9a;
            line-height: 1.7;
        }
        @media (max-width: 968px) {
            .services-grid {
                grid-template-columns: repeat(2, 1fr);
            }
        }
        @media (max-width: 768px) {
            .services-grid {
                grid-template-columns: 1fr;
            }
        }
    "#;

    html! {
        <section id="services" class="page-section alt">
            <style>{services_css}</style>
            <SectionHeading
                eyebrow="שירותים"
                title="מענה מלא לאורך כל מחזור העסקה"
                subtitle={Some("מהגדרת הדרישה ועד תחזוקה שוטפת בשטח")}
            />
            <div class="services-grid">
                { for SERVICES.iter().enumerate().map(|(i, service)| html! {
                    <Reveal delay_ms={(i % 3) as u32 * 120}>
                        <ServiceCard {service} />
                    </Reveal>
                }) }
            </div>
        </section>
    }
}
