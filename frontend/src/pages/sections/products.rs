use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::components::section_heading::SectionHeading;
use crate::config;
use crate::data::products::{FilterTag, Product};
use crate::hooks::use_is_narrow;
use crate::state::breakpoint::visible_count;
use crate::state::filter::{ProductShelf, ShelfAction};

#[derive(Properties, PartialEq)]
struct ProductCardProps {
    product: &'static Product,
}

#[function_component(ProductCard)]
fn product_card(props: &ProductCardProps) -> Html {
    let product = props.product;
    let photo = config::get().image_url(product.photo, 600);
    html! {
        <article class="product-card" data-id={product.id}>
            <div class="product-image">
                <img src={photo} alt={product.name} loading="lazy" />
            </div>
            <div class="product-body">
                <h3>{product.name}</h3>
                <p>{product.summary}</p>
            </div>
        </article>
    }
}

#[function_component(Products)]
pub fn products() -> Html {
    let cfg = config::get();
    let narrow = use_is_narrow();
    let per_page = visible_count(narrow, cfg.products_visible_mobile, cfg.products_visible_desktop);
    let shelf = use_reducer(|| ProductShelf::new(per_page));

    {
        let shelf = shelf.clone();
        use_effect_with_deps(
            move |per_page: &usize| {
                shelf.dispatch(ShelfAction::Resize(*per_page));
                || ()
            },
            per_page,
        );
    }

    let on_prev = {
        let shelf = shelf.clone();
        Callback::from(move |_: MouseEvent| shelf.dispatch(ShelfAction::Prev))
    };
    let on_next = {
        let shelf = shelf.clone();
        Callback::from(move |_: MouseEvent| shelf.dispatch(ShelfAction::Next))
    };

    let active = shelf.projection.active();
    let carousel = shelf.carousel;

    let products_css = r#"
        .filter-tabs {
            display: flex;
            justify-content: center;
            flex-wrap: wrap;
            gap: 0.75rem;
            margin-bottom: 2.5rem;
        }
        .filter-tab {
            background: transparent;
            border: 1px solid rgba(200, 169, 81, 0.4);
            color: #cfcfcf;
            padding: 0.5rem 1.25rem;
            border-radius: 999px;
            cursor: pointer;
            transition: background 0.2s ease, color 0.2s ease;
        }
        .filter-tab.active {
            background: #c8a951;
            color: #0a0c0a;
        }
        .product-carousel {
            display: flex;
            align-items: center;
            gap: 1rem;
        }
        .product-track {
            flex: 1;
            display: grid;
            gap: 1.5rem;
        }
        .product-card {
            background: #141814;
            border-radius: 6px;
            overflow: hidden;
            animation: fade-up 0.5s ease-out both;
        }
        .product-image img {
            width: 100%;
            aspect-ratio: 4 / 3;
            object-fit: cover;
        }
        .product-body {
            padding: 1.25rem;
        }
        .product-body h3 {
            color: #f2f2f2;
            margin-bottom: 0.5rem;
        }
        .product-body p {
            color: #9a9a9a;
            line-height: 1.6;
        }
        .empty-shelf {
            text-align: center;
            color: #9a9a9a;
        }
    "#;

    html! {
        <section id="products" class="page-section">
            <style>{products_css}</style>
            <SectionHeading eyebrow="מוצרים" title="קטגוריות מוצרים" subtitle={Some("אספקה מיצרנים מורשים בלבד, בכפוף לרישיון יצוא")} />
            <Reveal>
                <div class="filter-tabs" role="tablist">
                    { for FilterTag::TABS.iter().map(|tag| {
                        let tag = *tag;
                        let slug = tag.slug();
                        let onclick = {
                            let shelf = shelf.clone();
                            Callback::from(move |_: MouseEvent| shelf.dispatch(ShelfAction::Filter(slug)))
                        };
                        html! {
                            <button
                                class={classes!("filter-tab", (active == Some(tag)).then(|| "active"))}
                                role="tab"
                                data-filter={slug}
                                {onclick}
                            >
                                {tag.label()}
                            </button>
                        }
                    }) }
                </div>
                if shelf.projection.visible().is_empty() {
                    <p class="empty-shelf">{"אין מוצרים בקטגוריה זו"}</p>
                } else {
                    <>
                    <div class="product-carousel">
                        <button class="carousel-arrow" aria-label="הקודם" disabled={!carousel.can_prev()} onclick={on_prev}>
                            <i class="fas fa-chevron-right"></i>
                        </button>
                        <div
                            class="product-track"
                            style={format!("grid-template-columns: repeat({}, 1fr);", carousel.visible_count())}
                        >
                            { for shelf.on_screen().iter().map(|product| html! {
                                <ProductCard key={product.id} product={*product} />
                            }) }
                        </div>
                        <button class="carousel-arrow" aria-label="הבא" disabled={!carousel.can_next()} onclick={on_next}>
                            <i class="fas fa-chevron-left"></i>
                        </button>
                    </div>
                    if carousel.page_count() > 1 {
                        <div class="carousel-dots">
                            { for (0..carousel.page_count()).map(|page| {
                                let onclick = {
                                    let shelf = shelf.clone();
                                    Callback::from(move |_: MouseEvent| shelf.dispatch(ShelfAction::GoTo(page)))
                                };
                                html! {
                                    <button
                                        class={classes!("carousel-dot", (page == carousel.index()).then(|| "active"))}
                                        aria-label={format!("עמוד {}", page + 1)}
                                        {onclick}
                                    />
                                }
                            }) }
                        </div>
                    }
                    </>
                }
            </Reveal>
        </section>
    }
}
