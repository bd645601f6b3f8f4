use log::info;
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::GALLERY;

#[function_component(Gallery)]
pub fn gallery() -> Html {
    let lightbox = use_state(|| None::<&'static str>);

    let close_lightbox = {
        let lightbox = lightbox.clone();
        Callback::from(move |_: MouseEvent| lightbox.set(None))
    };

    html! {
        <>
            <style>
                {r#".gallery-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
                    gap: 1.5rem;
                }
                .gallery-item {
                    position: relative;
                    overflow: hidden;
                    border-radius: 12px;
                    background: #1e1e1e;
                    min-height: 220px;
                    cursor: pointer;
                }
                .gallery-item img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.4s ease;
                }
                .gallery-item:hover img {
                    transform: scale(1.05);
                }
                .gallery-caption {
                    position: absolute;
                    left: 0;
                    bottom: 0;
                    width: 100%;
                    padding: 0.8rem 1rem;
                    color: #fff;
                    background: linear-gradient(to top, rgba(0, 0, 0, 0.8), transparent);
                }
                .lightbox {
                    position: fixed;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(0, 0, 0, 0.9);
                    z-index: 2000;
                    cursor: zoom-out;
                }
                .lightbox img {
                    max-width: 90vw;
                    max-height: 85vh;
                    border-radius: 8px;
                }"#}
            </style>
            <div class="gallery-grid">
                { for GALLERY.iter().map(|item| {
                    let onclick = item.image.map(|src| {
                        let lightbox = lightbox.clone();
                        Callback::from(move |_: MouseEvent| {
                            info!("Gallery item clicked: {}", src);
                            lightbox.set(Some(src));
                        })
                    });
                    html! {
                        <Reveal key={item.caption} class="gallery-item" {onclick}>
                            {
                                if let Some(src) = item.image {
                                    html! { <img src={src} alt={item.caption} loading="lazy" /> }
                                } else {
                                    html! {}
                                }
                            }
                            <div class="gallery-caption">{item.caption}</div>
                        </Reveal>
                    }
                }) }
            </div>
            {
                if let Some(src) = *lightbox {
                    html! {
                        <div class="lightbox" onclick={close_lightbox}>
                            <img src={src} alt="Gallery image" />
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </>
    }
}
