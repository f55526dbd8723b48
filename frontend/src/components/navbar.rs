use yew::prelude::*;

use crate::config;
use crate::data::content::NAV_ITEMS;
use crate::hooks::use_scrolled;
use crate::state::navigation::MenuState;
use crate::utils::scroll::{navigate_to, scroll_to_top};

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu = use_state_eq(MenuState::default);
    let scrolled = use_scrolled(config::get().header_scrolled_offset_px);

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *menu;
            next.toggle();
            menu.set(next);
        })
    };

    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *menu;
            next.close();
            menu.set(next);
        })
    };

    let on_select = {
        let menu = menu.clone();
        Callback::from(move |id: &'static str| {
            let mut next = *menu;
            let target = next.select(id);
            menu.set(next);
            navigate_to(target);
        })
    };

    let on_logo = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        if let Err(e) = scroll_to_top() {
            log::warn!("scroll to top failed: {}", e);
        }
    });

    let links = |class: &'static str| -> Html {
        NAV_ITEMS
            .iter()
            .map(|item| {
                let on_select = on_select.clone();
                let id = item.id;
                let onclick = Callback::from(move |e: MouseEvent| {
                    e.prevent_default();
                    on_select.emit(id);
                });
                html! {
                    <a href={format!("#{}", item.id)} class={class} {onclick}>{item.label}</a>
                }
            })
            .collect()
    };

    let nav_css = r#"
        .navbar {
            position: fixed;
            top: 0;
            inset-inline: 0;
            z-index: 50;
            display: flex;
            align-items: center;
            justify-content: space-between;
            padding: 1.25rem 2rem;
            transition: background 0.3s ease, padding 0.3s ease;
        }
        .navbar.scrolled {
            background: rgba(12, 15, 12, 0.95);
            padding: 0.75rem 2rem;
            box-shadow: 0 2px 12px rgba(0, 0, 0, 0.4);
        }
        .nav-logo {
            font-size: 1.5rem;
            font-weight: 800;
            color: #c8a951;
            text-decoration: none;
            letter-spacing: 0.05em;
        }
        .nav-links {
            display: flex;
            gap: 1.5rem;
        }
        .nav-link {
            color: #e6e6e6;
            text-decoration: none;
            font-size: 0.95rem;
        }
        .nav-link:hover {
            color: #c8a951;
        }
        .menu-button {
            display: none;
            background: none;
            border: none;
            color: #e6e6e6;
            font-size: 1.5rem;
            cursor: pointer;
        }
        .mobile-menu {
            position: fixed;
            inset: 0;
            z-index: 60;
            background: rgba(12, 15, 12, 0.98);
            display: flex;
            flex-direction: column;
            align-items: center;
            justify-content: center;
            gap: 1.75rem;
            opacity: 0;
            pointer-events: none;
            transition: opacity 0.3s ease;
        }
        .mobile-menu.open {
            opacity: 1;
            pointer-events: auto;
        }
        .mobile-menu .mobile-link {
            color: #e6e6e6;
            font-size: 1.5rem;
            text-decoration: none;
        }
        .mobile-menu .close-button {
            position: absolute;
            top: 1.25rem;
            left: 1.5rem;
            background: none;
            border: none;
            color: #e6e6e6;
            font-size: 1.75rem;
            cursor: pointer;
        }
        @media (max-width: 768px) {
            .nav-links {
                display: none;
            }
            .menu-button {
                display: block;
            }
        }
    "#;

    html! {
        <>
            <style>{nav_css}</style>
            <nav class={classes!("navbar", scrolled.then(|| "scrolled"))}>
                <a href="#" class="nav-logo" onclick={on_logo}>{"ש.י"}</a>
                <div class="nav-links">
                    { links("nav-link") }
                </div>
                <button class="menu-button" aria-label="תפריט" onclick={toggle_menu}>
                    <i class="fas fa-bars"></i>
                </button>
            </nav>
            <div class={classes!("mobile-menu", menu.is_open().then(|| "open"))}>
                <button class="close-button" aria-label="סגירה" onclick={close_menu}>
                    <i class="fas fa-xmark"></i>
                </button>
                { links("mobile-link") }
            </div>
        </>
    }
}
