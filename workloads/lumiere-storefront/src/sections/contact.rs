//! Contact section.

use leptos::prelude::*;

use crate::config::{ContactConfig, SocialLink};
use crate::icon::{Icon, IconName};

#[component]
pub fn ContactSection(contact: ContactConfig) -> impl IntoView {
    let email_href = contact.email_href();
    let phone_href = contact.phone_href();
    let ContactConfig {
        title,
        email,
        phone,
        showroom,
        hours,
        socials,
    } = contact;

    view! {
        <section class="contact container narrow fade-in" data-section="contact">
            <h2 class="page-title">{title}</h2>
            <div class="card contact-card">
                <a class="contact-line" href=email_href>
                    <Icon name=IconName::Mail/>
                    <span>{email}</span>
                </a>
                <a class="contact-line" href=phone_href>
                    <Icon name=IconName::Phone/>
                    <span>{phone}</span>
                </a>
                <div class="contact-line">
                    <Icon name=IconName::MapPin/>
                    <div>
                        <p>{showroom}</p>
                        <p class="muted">{hours}</p>
                    </div>
                </div>
                <div class="socials">
                    {socials.into_iter().map(social_button).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

fn social_button(link: SocialLink) -> impl IntoView {
    let SocialLink { icon, label, url } = link;
    match url {
        Some(url) => view! {
            <a class="btn btn-outline" href=url target="_blank" rel="noopener">
                <Icon name=icon size=18/>
                {label}
            </a>
        }
        .into_any(),
        None => view! {
            <button class="btn btn-outline" type="button">
                <Icon name=icon size=18/>
                {label}
            </button>
        }
        .into_any(),
    }
}
