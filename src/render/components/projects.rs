//! Project portfolio tabs and partner cards

use super::tabs::panel_class;
use super::{FallbackNotice, IconGlyph, LoadingSection, TabBar};
use crate::content::Partner;
use crate::domain::icon::Icon;
use crate::domain::model::Project;
use leptos::prelude::*;

#[component]
pub fn ProjectsSection(
    projects: Vec<Project>,
    selected: usize,
    partners: Vec<Partner>,
    loading: bool,
    warning: Option<String>,
) -> impl IntoView {
    if loading {
        return view! { <LoadingSection id="projects" label="Projects" /> }.into_any();
    }

    let labels = projects
        .iter()
        .map(|project| (project.icon, project.client.clone()))
        .collect::<Vec<_>>();

    view! {
        <section id="projects" class="section">
            <div class="container">
                <div class="section-header">
                    <h2 class="display-large">"Our Projects"</h2>
                    <p class="body-large">
                        "Beberapa proyek yang telah kami selesaikan bersama klien dan mitra."
                    </p>
                    <FallbackNotice resource="projects" warning=warning />
                </div>

                <TabBar scope="projects" labels=labels selected=selected />

                {projects.into_iter().enumerate().map(|(index, project)| view! {
                    <div class=panel_class(index, selected) data-tab-panel=format!("projects-{}", index)>
                        <div class="card-icon"><IconGlyph icon=project.icon /></div>
                        <p class="accent">{project.category}</p>
                        <h3 class="heading-2">{project.title}</h3>
                        <p class="body-small">{format!("Client: {}", project.client)}</p>
                        <p class="body-large">{project.description}</p>

                        <div class="meta-row">
                            <span class="body-small">
                                <IconGlyph icon=Icon::Clock />
                                {project.duration}
                            </span>
                            <span class="body-small">
                                <IconGlyph icon=Icon::Calendar />
                                {project.year}
                            </span>
                            <span class="body-small accent">{project.status}</span>
                        </div>

                        <ul class="feature-list">
                            {project.features.into_iter().map(|feature| view! {
                                <li class="body-medium">{feature}</li>
                            }).collect::<Vec<_>>()}
                        </ul>

                        <div>
                            {project.technologies.into_iter().map(|tech| view! {
                                <span class="tech-tag">{tech}</span>
                            }).collect::<Vec<_>>()}
                        </div>
                    </div>
                }).collect::<Vec<_>>()}

                <div class="section-header partners">
                    <h3 class="heading-2">"Trusted Partners"</h3>
                </div>
                <div class="card-grid">
                    {partners.into_iter().map(|partner| view! {
                        <div class="partner-card">
                            <h4 class="heading-3">{partner.name}</h4>
                            <p class="accent">{partner.industry}</p>
                            <p class="body-medium">{partner.description}</p>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
    .into_any()
}
