//! Contact form wiring: validation display, a simulated 1.5 s network
//! round trip, and the 5 s status auto-clear. The rules themselves live in
//! `portfolio_core::form`.

use portfolio_core::constants::{STATUS_CLEAR_MS, SUBMIT_LATENCY_MS};
use portfolio_core::form::{ContactForm, Field, FieldError, SubmitStatus};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;

struct FormDom {
    name: web::HtmlInputElement,
    email: web::HtmlInputElement,
    message: web::HtmlTextAreaElement,
    submit: web::HtmlButtonElement,
    status: web::HtmlElement,
    name_error: web::HtmlElement,
    email_error: web::HtmlElement,
    message_error: web::HtmlElement,
}

pub fn mount(window: &web::Window, document: &web::Document) -> anyhow::Result<()> {
    let form_el = document
        .get_element_by_id("contact-form")
        .ok_or_else(|| anyhow::anyhow!("missing #contact-form"))?;
    let refs = Rc::new(FormDom {
        name: elem(document, "contact-name")?,
        email: elem(document, "contact-email")?,
        message: elem(document, "contact-message")?,
        submit: elem(document, "contact-submit")?,
        status: elem(document, "contact-status")?,
        name_error: elem(document, "contact-name-error")?,
        email_error: elem(document, "contact-email-error")?,
        message_error: elem(document, "contact-message-error")?,
    });
    let state = Rc::new(RefCell::new(ContactForm::default()));

    wire_error_clear(refs.name.as_ref(), Field::Name, &state, &refs);
    wire_error_clear(refs.email.as_ref(), Field::Email, &state, &refs);
    wire_error_clear(refs.message.as_ref(), Field::Message, &state, &refs);

    let window = window.clone();
    let submit_state = state.clone();
    let submit_refs = refs.clone();
    dom::listen_forever(form_el.as_ref(), "submit", move |ev: web::Event| {
        ev.prevent_default();
        let mut form = submit_state.borrow_mut();
        form.input.name = submit_refs.name.value();
        form.input.email = submit_refs.email.value();
        form.input.message = submit_refs.message.value();

        if !form.begin_submit() {
            render_errors(&submit_refs, &form);
            return;
        }
        render_errors(&submit_refs, &form);
        render_status(&submit_refs, form.status);
        drop(form);

        let state = submit_state.clone();
        let refs = submit_refs.clone();
        let w = window.clone();
        dom::set_timeout(&window, SUBMIT_LATENCY_MS, move || {
            let mut form = state.borrow_mut();
            form.complete(true);
            refs.name.set_value("");
            refs.email.set_value("");
            refs.message.set_value("");
            render_status(&refs, form.status);
            drop(form);

            let state = state.clone();
            let refs = refs.clone();
            dom::set_timeout(&w, STATUS_CLEAR_MS, move || {
                let mut form = state.borrow_mut();
                form.clear_status();
                render_status(&refs, form.status);
            });
        });
    });
    log::info!("contact form mounted");
    Ok(())
}

fn elem<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{id}"))?
        .dyn_into::<T>()
        .map_err(|_| anyhow::anyhow!("#{id} has unexpected element type"))
}

/// Typing into a field clears that field's error display.
fn wire_error_clear(
    target: &web::EventTarget,
    field: Field,
    state: &Rc<RefCell<ContactForm>>,
    refs: &Rc<FormDom>,
) {
    let state = state.clone();
    let refs = refs.clone();
    dom::listen_forever(target, "input", move |_| {
        let mut form = state.borrow_mut();
        if form.error_for(field).is_some() {
            form.clear_field_error(field);
            render_errors(&refs, &form);
        }
    });
}

fn render_errors(refs: &FormDom, form: &ContactForm) {
    set_error(&refs.name_error, form.error_for(Field::Name));
    set_error(&refs.email_error, form.error_for(Field::Email));
    set_error(&refs.message_error, form.error_for(Field::Message));
}

fn set_error(slot: &web::HtmlElement, error: Option<FieldError>) {
    match error {
        Some(e) => {
            slot.set_text_content(Some(&e.to_string()));
            _ = slot.style().set_property("display", "block");
        }
        None => {
            slot.set_text_content(None);
            _ = slot.style().set_property("display", "none");
        }
    }
}

fn render_status(refs: &FormDom, status: SubmitStatus) {
    let submitting = matches!(status, SubmitStatus::Submitting);
    refs.submit.set_disabled(submitting);
    refs.submit.set_text_content(Some(if submitting {
        "Sending..."
    } else {
        "Send Message"
    }));

    let (class, text) = match status {
        SubmitStatus::Success => (
            "form-status success",
            "Message sent successfully! I'll get back to you soon.",
        ),
        SubmitStatus::Error => (
            "form-status error",
            "Something went wrong. Please try again later.",
        ),
        SubmitStatus::Idle | SubmitStatus::Submitting => ("form-status", ""),
    };
    refs.status.set_class_name(class);
    refs.status.set_text_content(Some(text));
    _ = refs
        .status
        .style()
        .set_property("display", if text.is_empty() { "none" } else { "block" });
}
