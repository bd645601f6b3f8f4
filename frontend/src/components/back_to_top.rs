use yew::prelude::*;

use crate::browser;

#[derive(Properties, PartialEq)]
pub struct BackToTopProps {
    pub visible: bool,
}

#[function_component(BackToTop)]
pub fn back_to_top(props: &BackToTopProps) -> Html {
    let onclick = Callback::from(|_: MouseEvent| browser::scroll_to_top());

    html! {
        <>
            <style>
                {r#".back-to-top {
                    position: fixed;
                    right: 2rem;
                    bottom: 2rem;
                    width: 48px;
                    height: 48px;
                    border: none;
                    border-radius: 50%;
                    background: var(--primary-color);
                    color: #fff;
                    font-size: 1.4rem;
                    cursor: pointer;
                    opacity: 0;
                    visibility: hidden;
                    transition: all 0.3s ease;
                    z-index: 900;
                }
                .back-to-top.show {
                    opacity: 1;
                    visibility: visible;
                }"#}
            </style>
            <button
                id="backToTop"
                class={classes!("back-to-top", props.visible.then(|| "show"))}
                aria-label="Back to top"
                {onclick}
            >
                {"↑"}
            </button>
        </>
    }
}
