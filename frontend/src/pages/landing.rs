use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::pages::sections::about::About;
use crate::pages::sections::compliance::Compliance;
use crate::pages::sections::contact::Contact;
use crate::pages::sections::faq::Faq;
use crate::pages::sections::hero::Hero;
use crate::pages::sections::portfolio::Portfolio;
use crate::pages::sections::products::Products;
use crate::pages::sections::services::Services;
use crate::pages::sections::testimonials::Testimonials;

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let page_css = r#"
        html {
            scroll-behavior: smooth;
        }
        body {
            margin: 0;
            background: #0c0f0c;
            font-family: "Heebo", "Assistant", system-ui, sans-serif;
        }
        .landing-page {
            color: #e6e6e6;
            overflow-x: hidden;
        }
        .page-section {
            padding: 6rem 2rem;
            max-width: 1200px;
            margin: 0 auto;
            scroll-margin-top: 4rem;
        }
        .page-section.alt {
            max-width: none;
            background: #101310;
            padding-inline: max(2rem, calc((100% - 1200px) / 2));
        }
        .section-heading {
            text-align: center;
            margin-bottom: 3.5rem;
        }
        .section-heading .eyebrow {
            color: #c8a951;
            letter-spacing: 0.15em;
            font-size: 0.85rem;
        }
        .section-heading h2 {
            font-size: 2.5rem;
            color: #f2f2f2;
            margin: 0.5rem 0;
        }
        .section-subtitle {
            color: #9a9a9a;
        }
        .reveal {
            opacity: 0;
            transform: translateY(32px);
            transition: opacity 0.8s ease-out, transform 0.8s ease-out;
        }
        .reveal.revealed {
            opacity: 1;
            transform: none;
        }
        .carousel-arrow {
            background: #141814;
            border: 1px solid rgba(200, 169, 81, 0.4);
            color: #c8a951;
            width: 2.75rem;
            height: 2.75rem;
            border-radius: 50%;
            cursor: pointer;
            flex-shrink: 0;
        }
        .carousel-arrow:disabled {
            opacity: 0.3;
            cursor: default;
        }
        .carousel-dots {
            display: flex;
            justify-content: center;
            gap: 0.5rem;
            margin-top: 1.5rem;
        }
        .carousel-dot {
            width: 0.6rem;
            height: 0.6rem;
            border-radius: 50%;
            border: none;
            background: #3a3f3a;
            cursor: pointer;
            padding: 0;
        }
        .carousel-dot.active {
            background: #c8a951;
        }
        @keyframes fade-up {
            from { opacity: 0; transform: translateY(24px); }
            to { opacity: 1; transform: none; }
        }
        @media (max-width: 768px) {
            .page-section {
                padding: 4rem 1.25rem;
            }
            .section-heading h2 {
                font-size: 1.9rem;
            }
        }
    "#;

    html! {
        <div class="landing-page" dir="rtl" lang="he">
            <style>{page_css}</style>
            <Navbar />
            <Hero />
            <About />
            <Services />
            <Products />
            <Portfolio />
            <Testimonials />
            <Compliance />
            <Faq />
            <Contact />
            <Footer />
        </div>
    }
}
