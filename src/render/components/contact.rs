//! Contact info cards and the contact form

use super::IconGlyph;
use crate::content::ContactContent;
use crate::core::{ContactField, ContactForm, SubmitResult, SUBMIT_FALLBACK_ERROR};
use crate::domain::icon::Icon;
use crate::domain::model::DEFAULT_CONTACT_SUCCESS;
use leptos::prelude::*;

/// Snapshot of [`ContactForm`] for rendering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactFormView {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub service: String,
    pub message: String,
    pub submitting: bool,
    pub result: Option<SubmitResult>,
    /// absolute URL the browser posts to
    pub endpoint: Option<String>,
}

impl ContactFormView {
    pub fn from_form(form: &ContactForm, endpoint: Option<String>) -> Self {
        Self {
            name: form.value(ContactField::Name).to_string(),
            email: form.value(ContactField::Email).to_string(),
            phone: form.value(ContactField::Phone).to_string(),
            company: form.value(ContactField::Company).to_string(),
            service: form.value(ContactField::Service).to_string(),
            message: form.value(ContactField::Message).to_string(),
            submitting: form.submitting(),
            result: form.result().cloned(),
            endpoint,
        }
    }
}

#[component]
pub fn ContactSection(
    contact: ContactContent,
    service_options: Vec<String>,
    form: ContactFormView,
) -> impl IntoView {
    let ContactFormView {
        name,
        email,
        phone,
        company,
        service,
        message,
        submitting,
        result,
        endpoint,
    } = form;

    // 沒有結果時仍輸出隱藏的橫幅，讓瀏覽器端腳本填入
    let (banner_class, banner_text, banner_hidden) = match result {
        Some(SubmitResult { success: true, message: text }) => ("form-result success", text, false),
        Some(SubmitResult { success: false, message: text }) => ("form-result error", text, false),
        None => ("form-result", String::new(), true),
    };

    let submit_label = if submitting { "Mengirim..." } else { "Kirim Pesan" };

    view! {
        <section id="contact" class="section">
            <div class="container">
                <div class="section-header">
                    <h2 class="display-large">"Get In Touch"</h2>
                    <p class="body-large">{contact.intro}</p>
                </div>

                <div class="card-grid">
                    <div class="contact-info">
                        {contact.info.into_iter().map(|info| view! {
                            <div class="info-card">
                                <div class="card-icon"><IconGlyph icon=info.icon /></div>
                                <h3 class="heading-3">{info.title}</h3>
                                <p class="accent">{info.details}</p>
                                <p class="body-small">{info.description}</p>
                            </div>
                        }).collect::<Vec<_>>()}
                    </div>

                    <div class="card">
                        <h3 class="heading-2">"Send us a Message"</h3>
                        <div id="contact-result" class=banner_class role="status" hidden=banner_hidden>
                            {banner_text}
                        </div>
                        <form
                            id="contact-form"
                            class="contact-form"
                            data-endpoint=endpoint
                            data-error-fallback=SUBMIT_FALLBACK_ERROR
                            data-success-fallback=DEFAULT_CONTACT_SUCCESS
                        >
                            <label>"Nama Lengkap *"</label>
                            <input id="contact-name" name="name" type="text" required=true value=name disabled=submitting />

                            <label>"Email *"</label>
                            <input id="contact-email" name="email" type="email" required=true value=email disabled=submitting />

                            <label>"Nomor Telepon"</label>
                            <input id="contact-phone" name="phone" type="tel" value=phone disabled=submitting />

                            <label>"Perusahaan"</label>
                            <input id="contact-company" name="company" type="text" value=company disabled=submitting />

                            <label>"Layanan yang Diminati *"</label>
                            <select id="contact-service" name="service" required=true disabled=submitting>
                                <option value="" selected=service.is_empty()>"Pilih layanan"</option>
                                {service_options.into_iter().map(|option| {
                                    let selected = option == service;
                                    view! {
                                        <option value=option.clone() selected=selected>{option.clone()}</option>
                                    }
                                }).collect::<Vec<_>>()}
                            </select>

                            <label>"Pesan *"</label>
                            <textarea id="contact-message" name="message" rows="5" required=true disabled=submitting>
                                {message}
                            </textarea>

                            <button type="submit" class="btn-primary" disabled=submitting>
                                <IconGlyph icon=Icon::Mail />
                                <span class="button-text">{submit_label}</span>
                            </button>
                        </form>
                        <p class="body-small">{contact.general_inquiry}</p>
                    </div>
                </div>
            </div>
        </section>
    }
}
