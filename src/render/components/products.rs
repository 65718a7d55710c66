//! Product tabs with one detail panel per product

use super::tabs::panel_class;
use super::{FallbackNotice, IconGlyph, LoadingSection, TabBar};
use crate::content::Stat;
use crate::domain::model::Product;
use leptos::prelude::*;

#[component]
pub fn ProductsSection(
    products: Vec<Product>,
    selected: usize,
    stats: Vec<Stat>,
    loading: bool,
    warning: Option<String>,
) -> impl IntoView {
    if loading {
        return view! { <LoadingSection id="products" label="Products" /> }.into_any();
    }

    let labels = products
        .iter()
        .map(|product| (product.icon, product.title.clone()))
        .collect::<Vec<_>>();

    view! {
        <section id="products" class="section">
            <div class="container">
                <div class="section-header">
                    <h2 class="display-large">"Our Products"</h2>
                    <p class="body-large">
                        "Produk siap pakai yang dikembangkan dari pengalaman kami melayani berbagai industri."
                    </p>
                    <FallbackNotice resource="products" warning=warning />
                </div>

                <TabBar scope="products" labels=labels selected=selected />

                {products.into_iter().enumerate().map(|(index, product)| {
                    let badge = format!("card-icon gradient {}", product.color);
                    view! {
                        <div class=panel_class(index, selected) data-tab-panel=format!("products-{}", index)>
                            <div class=badge><IconGlyph icon=product.icon /></div>
                            <h3 class="heading-2">{product.title}</h3>
                            <p class="accent">{product.subtitle}</p>
                            <p class="body-large">{product.description}</p>
                            <div class="card-grid">
                                {product.features.into_iter().map(|feature| view! {
                                    <div class="feature-row">
                                        <IconGlyph icon=feature.icon() />
                                        <span class="body-medium">{feature.text().to_string()}</span>
                                    </div>
                                }).collect::<Vec<_>>()}
                            </div>
                        </div>
                    }
                }).collect::<Vec<_>>()}

                <div class="stats-grid">
                    {stats.into_iter().map(|stat| view! {
                        <div class="stat">
                            <div class="display-medium">{stat.value}</div>
                            <div class="body-small">{stat.label}</div>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
    .into_any()
}
