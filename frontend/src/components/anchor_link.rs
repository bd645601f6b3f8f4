use yew::prelude::*;

use crate::browser;

#[derive(Properties, PartialEq)]
pub struct AnchorLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub style: Option<AttrValue>,
    /// Fired before scrolling, e.g. to close the mobile menu.
    #[prop_or_default]
    pub on_navigate: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

/// In-page link that smooth-scrolls instead of jumping.
#[function_component(AnchorLink)]
pub fn anchor_link(props: &AnchorLinkProps) -> Html {
    let onclick = {
        let href = props.href.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(());
            browser::scroll_to_anchor(&href);
        })
    };

    html! {
        <a href={props.href.clone()} class={props.class.clone()} style={props.style.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}
