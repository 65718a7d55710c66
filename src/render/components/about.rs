//! Company profile, vision and mission

use super::IconGlyph;
use crate::content::AboutContent;
use crate::domain::icon::Icon;
use leptos::prelude::*;

#[component]
pub fn AboutSection(about: AboutContent) -> impl IntoView {
    view! {
        <section id="about" class="section">
            <div class="container">
                <div class="section-header">
                    <h2 class="display-large">{about.title}</h2>
                    <p class="body-large">{about.intro}</p>
                </div>

                <div class="about-overview">
                    <div>
                        <h3 class="heading-2">"Company Overview"</h3>
                        {about.overview.into_iter().map(|paragraph| view! {
                            <p class="body-medium">{paragraph}</p>
                        }).collect::<Vec<_>>()}
                    </div>
                    <dl class="about-facts">
                        {about.facts.into_iter().map(|fact| view! {
                            <dt class="heading-3 accent">{fact.label}</dt>
                            <dd class="body-medium">{fact.value}</dd>
                        }).collect::<Vec<_>>()}
                    </dl>
                </div>

                <div class="card-grid">
                    <div class="card">
                        <div class="card-icon"><IconGlyph icon=Icon::Eye /></div>
                        <h3 class="heading-2">"Visi"</h3>
                        <p class="body-large">{about.vision}</p>
                        <p class="body-medium"><em>{about.vision_en}</em></p>
                    </div>
                    <div class="card">
                        <div class="card-icon"><IconGlyph icon=Icon::Target /></div>
                        <h3 class="heading-2">"Misi"</h3>
                        <ol class="feature-list">
                            {about.mission.into_iter().map(|item| view! {
                                <li class="body-medium">{item}</li>
                            }).collect::<Vec<_>>()}
                        </ol>
                    </div>
                </div>
            </div>
        </section>
    }
}
