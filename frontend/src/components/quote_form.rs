use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use web_sys::{HtmlFormElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::browser;
use crate::config;
use crate::content::SERVICE_OPTIONS;
use crate::quote::controller::{QuoteFormController, QuoteView};
use crate::quote::draft::FieldValues;
use crate::quote::sink::LogSink;
use crate::quote::submit_state::SubmitState;
use crate::scheduling::TimeoutScheduler;

/// Element handles the controller works through.
#[derive(Clone)]
struct FormHandles {
    form: NodeRef,
    full_name: NodeRef,
    email: NodeRef,
    company: NodeRef,
    service: NodeRef,
    message: NodeRef,
    submit_state: UseStateSetter<SubmitState>,
}

fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>().map(|el| el.value()).unwrap_or_default()
}

impl QuoteView for FormHandles {
    fn read_fields(&self) -> FieldValues {
        FieldValues {
            full_name: input_value(&self.full_name),
            email: input_value(&self.email),
            company: input_value(&self.company),
            service: self
                .service
                .cast::<HtmlSelectElement>()
                .map(|el| el.value())
                .unwrap_or_default(),
            message: self
                .message
                .cast::<HtmlTextAreaElement>()
                .map(|el| el.value())
                .unwrap_or_default(),
        }
    }

    fn notify(&self, message: &str) {
        browser::alert(message);
    }

    fn reset_fields(&self) {
        match self.form.cast::<HtmlFormElement>() {
            Some(form) => form.reset(),
            None => warn!("Quote form not mounted, nothing to reset"),
        }
    }

    fn set_submit_state(&self, state: SubmitState) {
        self.submit_state.set(state);
    }
}

type Controller = QuoteFormController<FormHandles, TimeoutScheduler, LogSink>;

#[function_component(QuoteForm)]
pub fn quote_form() -> Html {
    let submit_state = use_state(SubmitState::default);
    let form = use_node_ref();
    let full_name = use_node_ref();
    let email = use_node_ref();
    let company = use_node_ref();
    let service = use_node_ref();
    let message = use_node_ref();
    let handles = FormHandles {
        form,
        full_name,
        email,
        company,
        service,
        message,
        submit_state: submit_state.setter(),
    };

    let controller: Rc<RefCell<Controller>> = {
        let handles = handles.clone();
        use_mut_ref(move || {
            QuoteFormController::new(handles, TimeoutScheduler, LogSink, config::SUBMIT_RESET_DELAY_MS)
        })
    };

    // the re-enable timer must not outlive the form
    {
        let controller = controller.clone();
        use_effect_with_deps(
            move |_| move || controller.borrow_mut().cancel_pending_reset(),
            (),
        );
    }

    let onsubmit = {
        let controller = controller.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let outcome = controller.borrow_mut().submit_from_view();
            debug!("Quote form submitted, accepted: {}", outcome.is_accepted());
        })
    };

    html! {
        <form id="quoteForm" class="quote-form" ref={handles.form.clone()} {onsubmit} novalidate=true>
            <style>
                {r#".quote-form {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.2rem;
                    background: rgba(30, 30, 30, 0.7);
                    border: 1px solid rgba(232, 67, 28, 0.15);
                    border-radius: 16px;
                    padding: 2.5rem;
                }
                .quote-form .full {
                    grid-column: 1 / -1;
                }
                .quote-form label {
                    display: block;
                    margin-bottom: 0.4rem;
                    color: rgba(255, 255, 255, 0.8);
                    font-size: 0.9rem;
                }
                .quote-form input,
                .quote-form select,
                .quote-form textarea {
                    width: 100%;
                    padding: 0.8rem 1rem;
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    border-radius: 8px;
                    background: rgba(0, 0, 0, 0.3);
                    color: #fff;
                    font-size: 1rem;
                }
                .submit-btn {
                    grid-column: 1 / -1;
                    padding: 1rem;
                    border: none;
                    border-radius: 8px;
                    background: var(--primary-color);
                    color: #fff;
                    font-weight: 700;
                    letter-spacing: 0.05em;
                    cursor: pointer;
                }
                .submit-btn:disabled {
                    opacity: 0.6;
                    cursor: not-allowed;
                }
                @media (max-width: 768px) {
                    .quote-form {
                        grid-template-columns: 1fr;
                        padding: 1.5rem;
                    }
                }"#}
            </style>
            <div>
                <label for="fullname">{"Full Name *"}</label>
                <input id="fullname" name="fullname" type="text" ref={handles.full_name.clone()} placeholder="Your full name" />
            </div>
            <div>
                <label for="email">{"Email Address *"}</label>
                <input id="email" name="email" type="email" ref={handles.email.clone()} placeholder="you@company.com" />
            </div>
            <div>
                <label for="company">{"Company"}</label>
                <input id="company" name="company" type="text" ref={handles.company.clone()} placeholder="Company name" />
            </div>
            <div>
                <label for="service">{"Service Required"}</label>
                <select id="service" name="service" ref={handles.service.clone()}>
                    { for SERVICE_OPTIONS.iter().map(|(value, label)| html! {
                        <option key={*value} value={*value}>{*label}</option>
                    }) }
                </select>
            </div>
            <div class="full">
                <label for="message">{"Message"}</label>
                <textarea id="message" name="message" rows="5" ref={handles.message.clone()} placeholder="Tell us about your project" />
            </div>
            <button
                type="submit"
                class="submit-btn"
                disabled={submit_state.is_disabled()}
            >
                {submit_state.label()}
            </button>
        </form>
    }
}
