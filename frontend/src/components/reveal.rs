use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;

const HIDDEN_STYLE: &str = "opacity: 0; transform: translateY(30px); transition: all 0.6s ease;";
const SHOWN_STYLE: &str = "opacity: 1; transform: translateY(0); transition: all 0.6s ease;";

pub fn reveal_style(visible: bool) -> &'static str {
    if visible {
        SHOWN_STYLE
    } else {
        HIDDEN_STYLE
    }
}

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

fn observe(element: &Element, on_visible: UseStateSetter<bool>) -> Option<(IntersectionObserver, ObserverCallback)> {
    let callback: ObserverCallback = Closure::wrap(Box::new(move |entries: js_sys::Array, _observer: IntersectionObserver| {
        let intersecting = entries
            .iter()
            .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
            .any(|entry| entry.is_intersecting());
        if intersecting {
            on_visible.set(true);
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(config::REVEAL_THRESHOLD));
    init.set_root_margin(config::REVEAL_ROOT_MARGIN);

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            observer.observe(element);
            Some((observer, callback))
        }
        Err(e) => {
            warn!("IntersectionObserver unavailable: {:?}", e);
            None
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub children: Children,
}

/// Fades its children in the first time they scroll into view. Once shown
/// they stay shown.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_state(|| false);

    {
        let node = node.clone();
        let setter = visible.setter();
        use_effect_with_deps(
            move |_| {
                let observed = node.cast::<Element>().and_then(|el| observe(&el, setter));
                move || {
                    if let Some((observer, _callback)) = observed {
                        observer.disconnect();
                    }
                }
            },
            (),
        );
    }

    html! {
        <div
            ref={node}
            class={props.class.clone()}
            style={reveal_style(*visible)}
            onclick={props.onclick.clone()}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_styles() {
        assert!(reveal_style(false).contains("opacity: 0"));
        assert!(reveal_style(false).contains("translateY(30px)"));
        assert!(reveal_style(true).contains("opacity: 1"));
        assert!(reveal_style(true).contains("translateY(0)"));
        assert!(reveal_style(true).contains("all 0.6s ease"));
    }
}
