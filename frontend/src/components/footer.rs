use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::components::anchor_link::AnchorLink;
use crate::content::{COMPANY_NAME, NAV_LINKS};

pub fn copyright_notice(year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, COMPANY_NAME)
}

#[function_component(SiteFooter)]
pub fn site_footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <style>
                {r#".site-footer {
                    background: #111;
                    color: rgba(255, 255, 255, 0.7);
                    padding: 3rem 1.5rem 2rem;
                    text-align: center;
                }
                .footer-links {
                    display: flex;
                    justify-content: center;
                    flex-wrap: wrap;
                    gap: 1.5rem;
                    margin-bottom: 1.5rem;
                }
                .footer-links a {
                    color: rgba(255, 255, 255, 0.7);
                    text-decoration: none;
                }
                .footer-links a:hover {
                    color: var(--primary-color);
                }"#}
            </style>
            <div class="footer-links">
                { for NAV_LINKS.iter().map(|link| html! {
                    <AnchorLink key={link.section} href={format!("#{}", link.section)}>{link.label}</AnchorLink>
                }) }
            </div>
            <p>{"Marine & Oil Field Solutions"}</p>
            <p id="currentYear">{copyright_notice(year)}</p>
        </footer>
    }
}
