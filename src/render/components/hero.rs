//! Hero banner

use super::IconGlyph;
use crate::content::{CompanyProfile, HeroContent};
use leptos::prelude::*;

#[component]
pub fn HeroSection(company: CompanyProfile, hero: HeroContent) -> impl IntoView {
    view! {
        <section id="home" class="section hero">
            <div class="container">
                <h1 class="display-huge">
                    {hero.title}
                    <br />
                    <span class="accent">{hero.highlight}</span>
                </h1>
                <p class="body-large">{company.tagline}</p>

                <div class="hero-highlights">
                    {hero.highlights.into_iter().map(|item| view! {
                        <div class="hero-highlight">
                            <div class="card-icon"><IconGlyph icon=item.icon /></div>
                            <span class="body-small">{item.label}</span>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>

                <div class="hero-actions">
                    <a href="#services" class="btn-primary">{hero.primary_cta}</a>
                    <a href="#contact" class="btn-secondary">{hero.secondary_cta}</a>
                </div>

                <div class="stats-grid">
                    {hero.stats.into_iter().map(|stat| view! {
                        <div class="stat">
                            <div class="display-medium">{stat.value}</div>
                            <div class="body-small">{stat.label}</div>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
