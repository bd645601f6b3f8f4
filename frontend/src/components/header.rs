use yew::prelude::*;

use crate::components::anchor_link::AnchorLink;
use crate::content::{COMPANY_NAME, NAV_LINKS};

#[derive(Properties, PartialEq)]
pub struct SiteHeaderProps {
    pub scrolled: bool,
    pub active_section: Option<String>,
}

#[function_component(SiteHeader)]
pub fn site_header(props: &SiteHeaderProps) -> Html {
    let SiteHeaderProps { scrolled, active_section } = props;
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: ()| menu_open.set(false))
    };

    html! {
        <header id="header" class={classes!("site-header", scrolled.then(|| "scrolled"))}>
            <style>
                {r#".site-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    padding: 1.5rem 0;
                    background: transparent;
                    transition: all 0.3s ease;
                    z-index: 1000;
                }
                .site-header.scrolled {
                    padding: 0.8rem 0;
                    background: rgba(17, 17, 17, 0.95);
                    box-shadow: 0 4px 20px rgba(0, 0, 0, 0.2);
                }
                .header-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .logo {
                    color: #fff;
                    font-weight: 700;
                    font-size: 1.3rem;
                    text-decoration: none;
                }
                .nav-menu {
                    display: flex;
                    gap: 2rem;
                    list-style: none;
                }
                .nav-menu a {
                    color: #fff;
                    text-decoration: none;
                    transition: color 0.3s ease;
                }
                .mobile-toggle {
                    display: none;
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1.6rem;
                    cursor: pointer;
                }
                @media (max-width: 768px) {
                    .mobile-toggle {
                        display: block;
                    }
                    .nav-menu {
                        position: fixed;
                        top: 70px;
                        left: -100%;
                        width: 100%;
                        flex-direction: column;
                        padding: 2rem;
                        background: #111;
                        transition: left 0.3s ease;
                    }
                    .nav-menu.active {
                        left: 0;
                    }
                }"#}
            </style>
            <div class="header-content">
                <AnchorLink href="#home" class="logo">{COMPANY_NAME}</AnchorLink>

                <button id="mobileToggle" class="mobile-toggle" aria-label="Toggle menu" onclick={toggle_menu}>
                    {"☰"}
                </button>

                <ul id="navMenu" class={classes!("nav-menu", (*menu_open).then(|| "active"))}>
                    { for NAV_LINKS.iter().map(|link| {
                        let is_active = active_section.as_deref() == Some(link.section);
                        let style = is_active.then(|| AttrValue::from("color: var(--primary-color);"));
                        html! {
                            <li key={link.section}>
                                <AnchorLink
                                    href={format!("#{}", link.section)}
                                    {style}
                                    on_navigate={close_menu.clone()}
                                >
                                    {link.label}
                                </AnchorLink>
                            </li>
                        }
                    }) }
                </ul>
            </div>
        </header>
    }
}
