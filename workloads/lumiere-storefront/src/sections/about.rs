//! About section.

use leptos::prelude::*;

use crate::config::AboutConfig;

#[component]
pub fn AboutSection(about: AboutConfig) -> impl IntoView {
    view! {
        <section class="about container narrow fade-in" data-section="about">
            <h2 class="page-title">{about.title}</h2>
            <p class="page-subtitle">{about.subtitle}</p>
            <div class="chapters">
                {about
                    .chapters
                    .into_iter()
                    .map(|chapter| {
                        view! {
                            <article class="chapter">
                                <h3 class="chapter-title">{chapter.title}</h3>
                                <p class="chapter-body">{chapter.body}</p>
                            </article>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
