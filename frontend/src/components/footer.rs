use yew::prelude::*;
use yew_router::components::Link;
use yew_router::Routable;

use crate::config::{CONTACT_EMAIL, DOWNLOAD_PATH, ICON_PATH};
use crate::utils::dom::current_year;
use crate::Route;

enum Target {
    Page(Route),
    Href(&'static str),
    Mail(&'static str),
    Download(&'static str),
}

impl Target {
    fn href(&self) -> String {
        match self {
            Target::Page(route) => route.to_path(),
            Target::Href(href) | Target::Download(href) => href.to_string(),
            Target::Mail(address) => format!("mailto:{}", address),
        }
    }
}

struct FooterLink {
    label: &'static str,
    target: Target,
}

struct FooterSection {
    title: &'static str,
    links: &'static [FooterLink],
}

const SECTIONS: &[FooterSection] = &[
    FooterSection {
        title: "Product",
        links: &[
            FooterLink { label: "Features", target: Target::Page(Route::Home) },
            FooterLink { label: "Learn More", target: Target::Page(Route::LearnMore) },
            FooterLink { label: "Download", target: Target::Download(DOWNLOAD_PATH) },
        ],
    },
    FooterSection {
        title: "Support",
        links: &[
            FooterLink { label: "Help Center", target: Target::Page(Route::Support) },
            FooterLink { label: "Contact Us", target: Target::Mail(CONTACT_EMAIL) },
            FooterLink { label: "Discord", target: Target::Href("#") },
        ],
    },
    FooterSection {
        title: "Legal",
        links: &[
            FooterLink { label: "Privacy Policy", target: Target::Href("#") },
            FooterLink { label: "Terms of Service", target: Target::Href("#") },
        ],
    },
];

struct SocialLink {
    icon: &'static str,
    label: &'static str,
    target: Target,
}

const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { icon: "fab fa-twitter", label: "Twitter", target: Target::Href("#") },
    SocialLink { icon: "fab fa-github", label: "GitHub", target: Target::Href("#") },
    SocialLink { icon: "fas fa-envelope", label: "Email", target: Target::Mail(CONTACT_EMAIL) },
];

fn render_link(link: &FooterLink) -> Html {
    let arrow = html! { <i class="fas fa-arrow-right link-arrow"></i> };
    match &link.target {
        Target::Page(route) => html! {
            <Link<Route> to={route.clone()} classes="footer-link">
                {link.label}
                {arrow}
            </Link<Route>>
        },
        Target::Download(_) => html! {
            <a href={link.target.href()} download="" class="footer-link">{link.label}{arrow}</a>
        },
        Target::Href(_) | Target::Mail(_) => html! {
            <a href={link.target.href()} class="footer-link">{link.label}{arrow}</a>
        },
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-glow-line"></div>
            <div class="footer-glow"></div>
            <div class="footer-inner">
                <div class="footer-grid">
                    <div class="footer-brand fade-up">
                        <div class="footer-logo">
                            <img src={ICON_PATH} alt="Notch Logo" />
                            <span>{"Notch"}</span>
                        </div>
                        <p>{"Transforming your unused screen space into a beautiful, interactive command center for Windows."}</p>
                        <div class="footer-socials">
                            { for SOCIAL_LINKS.iter().map(|social| html! {
                                <a href={social.target.href()} aria-label={social.label} class="social-link">
                                    <i class={social.icon}></i>
                                </a>
                            }) }
                        </div>
                    </div>
                    { for SECTIONS.iter().enumerate().map(|(index, section)| html! {
                        <div class="footer-section fade-up" key={section.title}
                            style={format!("animation-delay: {:.1}s;", 0.1 * (index + 1) as f64)}>
                            <h4>{section.title}</h4>
                            <ul>
                                { for section.links.iter().map(|link| html! {
                                    <li key={link.label}>{render_link(link)}</li>
                                }) }
                            </ul>
                        </div>
                    }) }
                </div>
                <div class="footer-divider"></div>
                <div class="footer-bottom">
                    <p>{format!("© {} Notch App. All rights reserved.", current_year())}</p>
                    <div class="footer-credit">
                        {"Crafted with"}
                        <i class="fas fa-heart heartbeat"></i>
                        {"by Rahim Saroar"}
                    </div>
                </div>
            </div>
            <style>
                {r#"
    .site-footer {
        position: relative;
        padding-top: 5rem;
        overflow: hidden;
        border-top: 1px solid rgba(255, 255, 255, 0.05);
        background: #050507;
    }
    .footer-glow-line {
        position: absolute;
        top: 0;
        left: 50%;
        transform: translateX(-50%);
        width: 800px;
        height: 1px;
        background: linear-gradient(90deg, transparent, rgba(99, 102, 241, 0.2), transparent);
    }
    .footer-glow {
        position: absolute;
        top: 0;
        left: 50%;
        transform: translateX(-50%);
        width: 600px;
        height: 8rem;
        background: rgba(99, 102, 241, 0.05);
        filter: blur(100px);
        pointer-events: none;
    }
    .footer-inner {
        position: relative;
        z-index: 1;
        max-width: 80rem;
        margin: 0 auto;
        padding: 3rem 1.5rem 2rem;
    }
    .footer-grid {
        display: grid;
        grid-template-columns: 2fr 1fr 1fr 1fr;
        gap: 3rem;
        padding-bottom: 4rem;
    }
    .footer-logo {
        display: flex;
        align-items: center;
        gap: 0.75rem;
        margin-bottom: 1.5rem;
        font-family: 'Syne', sans-serif;
        font-size: 1.5rem;
        font-weight: 700;
        color: #fff;
    }
    .footer-logo img {
        width: 2rem;
        height: 2rem;
        border-radius: 10px;
        box-shadow: 0 0 20px rgba(255, 255, 255, 0.1);
    }
    .footer-brand p {
        max-width: 20rem;
        margin-bottom: 2rem;
        font-size: 0.875rem;
        line-height: 1.6;
        color: rgba(255, 255, 255, 0.4);
    }
    .footer-socials {
        display: flex;
        gap: 0.75rem;
    }
    .social-link {
        display: flex;
        align-items: center;
        justify-content: center;
        width: 2.5rem;
        height: 2.5rem;
        border-radius: 9999px;
        border: 1px solid rgba(255, 255, 255, 0.05);
        background: rgba(255, 255, 255, 0.02);
        color: rgba(255, 255, 255, 0.4);
        transition: all 0.3s;
    }
    .social-link:hover {
        background: rgba(255, 255, 255, 0.06);
        border-color: rgba(255, 255, 255, 0.2);
        color: rgba(255, 255, 255, 0.9);
        transform: scale(1.1);
    }
    .footer-section h4 {
        margin-bottom: 1.5rem;
        font-weight: 600;
        color: #fff;
    }
    .footer-section ul {
        list-style: none;
        padding: 0;
        display: flex;
        flex-direction: column;
        gap: 1rem;
    }
    .footer-link {
        display: inline-flex;
        align-items: center;
        gap: 0.25rem;
        font-size: 0.875rem;
        color: rgba(255, 255, 255, 0.4);
        text-decoration: none;
        transition: color 0.2s;
    }
    .footer-link:hover {
        color: #fff;
    }
    .link-arrow {
        font-size: 0.65rem;
        color: #818cf8;
        opacity: 0;
        transform: translateX(-0.5rem);
        transition: all 0.2s;
    }
    .footer-link:hover .link-arrow {
        opacity: 1;
        transform: translateX(0);
    }
    .footer-divider {
        width: 100%;
        height: 1px;
        margin-bottom: 2rem;
        background: linear-gradient(90deg, transparent, rgba(255, 255, 255, 0.1), transparent);
    }
    .footer-bottom {
        display: flex;
        align-items: center;
        justify-content: space-between;
        gap: 1rem;
        font-size: 0.75rem;
        color: rgba(255, 255, 255, 0.3);
    }
    .footer-credit {
        display: flex;
        align-items: center;
        gap: 0.375rem;
    }
    .heartbeat {
        color: #f43f5e;
        animation: heartbeat 1.5s ease-in-out infinite;
    }
    @keyframes heartbeat {
        0%, 100% { transform: scale(1); }
        50% { transform: scale(1.2); }
    }
    @media (max-width: 1024px) {
        .footer-grid {
            grid-template-columns: 1fr 1fr;
        }
    }
    @media (max-width: 768px) {
        .footer-grid {
            grid-template-columns: 1fr;
        }
        .footer-bottom {
            flex-direction: column;
        }
    }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn targets_resolve_to_hrefs() {
        assert_eq!(Target::Page(Route::Support).href(), "/support");
        assert_eq!(Target::Download(DOWNLOAD_PATH).href(), "/notch.exe");
        assert_eq!(Target::Mail("team@example.com").href(), "mailto:team@example.com");
    }

    #[test]
    fn email_links_use_contact_address() {
        let expected = format!("mailto:{}", CONTACT_EMAIL);
        let social = SOCIAL_LINKS
            .iter()
            .find(|social| social.label == "Email")
            .map(|social| social.target.href());
        assert_eq!(social, Some(expected.clone()));

        let contact = SECTIONS
            .iter()
            .flat_map(|section| section.links.iter())
            .find(|link| link.label == "Contact Us")
            .map(|link| link.target.href());
        assert_eq!(contact, Some(expected));
    }
}
