//! Service cards

use super::{FallbackNotice, IconGlyph, LoadingSection};
use crate::domain::model::Service;
use leptos::prelude::*;

#[component]
pub fn ServicesSection(
    services: Vec<Service>,
    loading: bool,
    warning: Option<String>,
) -> impl IntoView {
    if loading {
        return view! { <LoadingSection id="services" label="Services" /> }.into_any();
    }

    view! {
        <section id="services" class="section">
            <div class="container">
                <div class="section-header">
                    <h2 class="display-large">"Our Services"</h2>
                    <p class="body-large">
                        "Solusi teknologi menyeluruh untuk kebutuhan bisnis Anda, dari pengembangan perangkat lunak hingga infrastruktur jaringan."
                    </p>
                    <FallbackNotice resource="services" warning=warning />
                </div>

                <div class="card-grid">
                    {services.into_iter().map(|service| view! {
                        <div class="service-card">
                            <div class="card-icon"><IconGlyph icon=service.icon /></div>
                            <h3 class="heading-3">{service.title}</h3>
                            <p class="body-medium">{service.description}</p>
                            <ul class="feature-list">
                                {service.features.into_iter().map(|feature| view! {
                                    <li class="body-small">{feature}</li>
                                }).collect::<Vec<_>>()}
                            </ul>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>

                <div class="section-cta">
                    <a href="#contact" class="btn-primary">"Diskusikan Kebutuhan Anda"</a>
                </div>
            </div>
        </section>
    }
    .into_any()
}
