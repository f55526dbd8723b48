use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::components::section_heading::SectionHeading;
use crate::components::star_rating::StarRating;
use crate::config;
use crate::data::content::TESTIMONIALS;
use crate::hooks::use_auto_advance;
use crate::state::slideshow::{Slideshow, SlideshowAction};

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let slides = use_reducer(|| Slideshow::new(TESTIMONIALS.len()));

    let auto = {
        let slides = slides.clone();
        use_auto_advance(
            config::get().testimonial_interval_ms,
            Callback::from(move |_| slides.dispatch(SlideshowAction::AutoAdvance)),
        )
    };

    // every manual move pushes the next automatic one a full interval out
    {
        let auto = auto.clone();
        use_effect_with_deps(
            move |_| {
                auto.restart();
                || ()
            },
            slides.manual_moves(),
        );
    }

    let on_prev = {
        let slides = slides.clone();
        Callback::from(move |_: MouseEvent| slides.dispatch(SlideshowAction::Prev))
    };
    let on_next = {
        let slides = slides.clone();
        Callback::from(move |_: MouseEvent| slides.dispatch(SlideshowAction::Next))
    };

    let testimonials_css = r#"
        .testimonial-stage {
            position: relative;
            max-width: 760px;
            margin: 0 auto;
            text-align: center;
            min-height: 18rem;
        }
        .testimonial {
            animation-duration: 0.6s;
            animation-fill-mode: both;
            animation-timing-function: ease-out;
        }
        .testimonial.slide-forward {
            animation-name: slide-in-forward;
        }
        .testimonial.slide-backward {
            animation-name: slide-in-backward;
        }
        .testimonial img {
            width: 5rem;
            height: 5rem;
            border-radius: 50%;
            object-fit: cover;
            border: 2px solid #c8a951;
        }
        .testimonial blockquote {
            font-size: 1.35rem;
            color: #f2f2f2;
            line-height: 1.8;
            margin: 1.5rem 0;
        }
        .testimonial-role {
            color: #c8a951;
            font-weight: 700;
        }
        .testimonial-region {
            color: #9a9a9a;
            font-size: 0.9rem;
        }
        .star-rating {
            color: #c8a951;
            display: flex;
            justify-content: center;
            gap: 0.2rem;
            margin-top: 1rem;
        }
        .testimonial-controls {
            display: flex;
            justify-content: center;
            align-items: center;
            gap: 1rem;
            margin-top: 2rem;
        }
        @keyframes slide-in-forward {
            from { opacity: 0; transform: translateX(-40px); }
            to { opacity: 1; transform: translateX(0); }
        }
        @keyframes slide-in-backward {
            from { opacity: 0; transform: translateX(40px); }
            to { opacity: 1; transform: translateX(0); }
        }
    "#;

    if slides.is_empty() {
        return html! {};
    }
    let current = TESTIMONIALS.get(slides.index());

    html! {
        <section id="testimonials" class="page-section">
            <style>{testimonials_css}</style>
            <SectionHeading eyebrow="המלצות" title="מה אומרים עלינו" />
            <Reveal>
                <div class="testimonial-stage">
                    if let Some(t) = current {
                        <div key={slides.index()} class={classes!("testimonial", slides.direction().class())}>
                            <img src={config::get().image_url(t.photo, 200)} alt={t.role} loading="lazy" />
                            <blockquote>{t.quote}</blockquote>
                            <div class="testimonial-role">{t.role}</div>
                            if let Some(region) = t.region {
                                <div class="testimonial-region">{region}</div>
                            }
                            <StarRating rating={t.rating} />
                        </div>
                    }
                </div>
                <div class="testimonial-controls">
                    <button class="carousel-arrow" aria-label="הקודם" onclick={on_prev}>
                        <i class="fas fa-chevron-right"></i>
                    </button>
                    <div class="carousel-dots">
                        { for (0..slides.len()).map(|i| {
                            let onclick = {
                                let slides = slides.clone();
                                Callback::from(move |_: MouseEvent| slides.dispatch(SlideshowAction::GoTo(i)))
                            };
                            html! {
                                <button
                                    class={classes!("carousel-dot", (i == slides.index()).then(|| "active"))}
                                    aria-label={format!("המלצה {}", i + 1)}
                                    {onclick}
                                />
                            }
                        }) }
                    </div>
                    <button class="carousel-arrow" aria-label="הבא" onclick={on_next}>
                        <i class="fas fa-chevron-left"></i>
                    </button>
                </div>
            </Reveal>
        </section>
    }
}
