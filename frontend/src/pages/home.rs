use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::browser;
use crate::components::anchor_link::AnchorLink;
use crate::components::back_to_top::BackToTop;
use crate::components::footer::SiteFooter;
use crate::components::gallery::Gallery;
use crate::components::header::SiteHeader;
use crate::components::quote_form::QuoteForm;
use crate::components::reveal::Reveal;
use crate::content::{Card, CLIENTS, SERVICES, VALUES, VISION_MISSION};
use crate::scroll::{active_section, ScrollEffects};

#[derive(Clone, Default, PartialEq)]
struct ScrollSnapshot {
    effects: ScrollEffects,
    active_section: Option<String>,
}

impl ScrollSnapshot {
    fn capture(previous: &ScrollSnapshot) -> Self {
        let y = browser::scroll_y();
        let sections = browser::section_bounds();
        Self {
            effects: ScrollEffects::at(y),
            // keep the last highlight while between sections
            active_section: active_section(&sections, y)
                .map(str::to_string)
                .or_else(|| previous.active_section.clone()),
        }
    }
}

fn card_grid(cards: &'static [Card], class: &'static str) -> Html {
    html! {
        <div class="card-grid">
            { for cards.iter().map(|card| html! {
                <Reveal key={card.title} class={class}>
                    <div class="card-icon">{card.icon}</div>
                    <h3>{card.title}</h3>
                    <p>{card.body}</p>
                </Reveal>
            }) }
        </div>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let snapshot = use_state(ScrollSnapshot::default);

    {
        let snapshot = snapshot.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let current = Rc::new(RefCell::new(ScrollSnapshot::capture(&ScrollSnapshot::default())));
                snapshot.set(current.borrow().clone());

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let next = ScrollSnapshot::capture(&current.borrow());
                    if next != *current.borrow() {
                        *current.borrow_mut() = next.clone();
                        snapshot.set(next);
                    }
                }) as Box<dyn FnMut()>);

                if let Some(window) = &window {
                    if let Err(e) = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref()) {
                        warn!("Could not listen for scroll: {:?}", e);
                    }
                }

                move || {
                    if let Some(window) = window {
                        if let Err(e) = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref()) {
                            warn!("Could not remove scroll listener: {:?}", e);
                        }
                    }
                }
            },
            (),
        );
    }

    html! {
        <div class="home-page">
            <style>
                {r#":root {
                    --primary-color: #E8431C;
                }
                body {
                    margin: 0;
                    background: #1a1a1a;
                    color: #fff;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }
                section {
                    padding: 6rem 1.5rem;
                }
                .section-inner {
                    max-width: 1200px;
                    margin: 0 auto;
                }
                .section-title {
                    font-size: 2.2rem;
                    margin-bottom: 0.5rem;
                }
                .section-subtitle {
                    color: rgba(255, 255, 255, 0.7);
                    margin-bottom: 3rem;
                }
                .hero {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    background: linear-gradient(rgba(0, 0, 0, 0.6), rgba(0, 0, 0, 0.6)), url('/assets/hero.jpg') center / cover no-repeat;
                }
                .hero h1 {
                    font-size: 3.2rem;
                    margin-bottom: 1rem;
                }
                .btn-primary {
                    display: inline-block;
                    padding: 1rem 2rem;
                    border-radius: 8px;
                    background: var(--primary-color);
                    color: #fff;
                    font-weight: 700;
                    text-decoration: none;
                }
                .card-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 1.5rem;
                }
                .service-card, .value-card, .vm-card, .client-card {
                    background: rgba(30, 30, 30, 0.7);
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    border-radius: 12px;
                    padding: 2rem;
                }
                .card-icon {
                    font-size: 2rem;
                    margin-bottom: 1rem;
                }
                @media (max-width: 768px) {
                    .hero h1 {
                        font-size: 2.2rem;
                    }
                    section {
                        padding: 4rem 1rem;
                    }
                }"#}
            </style>

            <SiteHeader
                scrolled={snapshot.effects.header_scrolled}
                active_section={snapshot.active_section.clone()}
            />

            <section id="home" class="hero">
                <div class="section-inner">
                    <h1>{"Marine & Oil Field Solutions"}</h1>
                    <p class="section-subtitle">
                        {"Vessels, manpower and equipment for offshore and onshore operations, delivered safely and on schedule."}
                    </p>
                    <AnchorLink href="#contact" class="btn-primary">{"Request a Quote"}</AnchorLink>
                </div>
            </section>

            <section id="about">
                <div class="section-inner">
                    <h2 class="section-title">{"About Us"}</h2>
                    <p class="section-subtitle">
                        {"Fan-Tek Ventures Limited is an indigenous services company supporting the marine and oil & gas industry since inception."}
                    </p>
                    {card_grid(VISION_MISSION, "vm-card")}
                    <h3 class="section-title">{"Our Values"}</h3>
                    {card_grid(VALUES, "value-card")}
                </div>
            </section>

            <section id="services">
                <div class="section-inner">
                    <h2 class="section-title">{"Our Services"}</h2>
                    <p class="section-subtitle">{"End-to-end support from the jetty to the well head."}</p>
                    {card_grid(SERVICES, "service-card")}
                </div>
            </section>

            <section id="clients">
                <div class="section-inner">
                    <h2 class="section-title">{"Our Clients"}</h2>
                    <p class="section-subtitle">{"Trusted by operators across the Niger Delta."}</p>
                    <div class="card-grid">
                        { for CLIENTS.iter().map(|client| html! {
                            <Reveal key={*client} class="client-card">
                                <h3>{*client}</h3>
                            </Reveal>
                        }) }
                    </div>
                </div>
            </section>

            <section id="gallery">
                <div class="section-inner">
                    <h2 class="section-title">{"Gallery"}</h2>
                    <p class="section-subtitle">{"A look at recent operations."}</p>
                    <Gallery />
                </div>
            </section>

            <section id="contact">
                <div class="section-inner">
                    <h2 class="section-title">{"Request a Quote"}</h2>
                    <p class="section-subtitle">{"Tell us what you need and our team will get back to you."}</p>
                    <QuoteForm />
                </div>
            </section>

            <SiteFooter />
            <BackToTop visible={snapshot.effects.back_to_top_visible} />
        </div>
    }
}
