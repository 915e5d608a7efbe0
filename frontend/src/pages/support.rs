use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::config::SUPPORT_EMAIL;
use crate::utils::dom::jump_to_top;

#[derive(Debug, PartialEq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: &[Faq] = &[
    Faq {
        question: "How do I install Notch?",
        answer: "Simply download the installer from our home page, run the .exe file, and follow the on-screen instructions. Notch will automatically start and sit at the top of your screen.",
    },
    Faq {
        question: "Is Notch compatible with Windows 10?",
        answer: "Yes! Notch is fully compatible with both Windows 10 and Windows 11.",
    },
    Faq {
        question: "Will this slow down my PC?",
        answer: "Not at all. Notch is built to be ultra-lightweight, consuming minimal RAM and 0% CPU when idle.",
    },
    Faq {
        question: "How can I customize the modules?",
        answer: "Right-click the Notch and open 'Settings'. From there, you can drag and drop modules, change colors, and adjust the size.",
    },
];

/// Entries whose question or answer contains `query`, ignoring case.
/// A blank query matches everything.
pub fn search_faqs<'a>(faqs: &'a [Faq], query: &str) -> Vec<&'a Faq> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return faqs.iter().collect();
    }
    faqs.iter()
        .filter(|faq| {
            faq.question.to_lowercase().contains(&needle) || faq.answer.to_lowercase().contains(&needle)
        })
        .collect()
}

#[function_component(Support)]
pub fn support() -> Html {
    let query = use_state(String::new);

    {
        use_effect_with_deps(
            move |_| {
                jump_to_top();
                || ()
            },
            (),
        );
    }

    let oninput = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    let matches = search_faqs(FAQS, &query);

    html! {
        <div class="support-page">
            <div class="page-glow"></div>
            <div class="support-inner">
                <div class="page-header fade-up">
                    <h1>
                        {"How can we "}
                        <span class="accent-text">{"help?"}</span>
                    </h1>
                    <p>{"Search our knowledge base or get in touch with our support team. We're here to make your experience seamless."}</p>
                    <div class="search-box">
                        <i class="fas fa-magnifying-glass"></i>
                        <input
                            type="text"
                            placeholder="Search for articles, guides, or FAQs..."
                            value={(*query).clone()}
                            {oninput}
                        />
                    </div>
                </div>

                <Reveal class={classes!("support-options")}>
                    <div class="support-card tint-indigo">
                        <div class="support-icon"><i class="fas fa-book"></i></div>
                        <h3>{"Documentation"}</h3>
                        <p>{"Detailed guides on how to install, configure, and get the most out of Notch."}</p>
                        <div class="support-action">{"Read Guides"}<i class="fas fa-chevron-right"></i></div>
                    </div>
                    <a href={format!("mailto:{}", SUPPORT_EMAIL)} class="support-card tint-cyan">
                        <div class="support-icon"><i class="fas fa-envelope"></i></div>
                        <h3>{"Email Support"}</h3>
                        <p>{"Can't find what you're looking for? Send us an email and we'll reply within 24 hours."}</p>
                        <div class="support-action">{SUPPORT_EMAIL}<i class="fas fa-chevron-right"></i></div>
                    </a>
                    <div class="support-card tint-emerald">
                        <div class="support-icon"><i class="fas fa-comments"></i></div>
                        <h3>{"Community"}</h3>
                        <p>{"Join our Discord server to chat with other users, share setups, and request features."}</p>
                        <div class="support-action">{"Join Discord"}<i class="fas fa-chevron-right"></i></div>
                    </div>
                </Reveal>

                <Reveal class={classes!("faq-block")}>
                    <div class="faq-heading">
                        <div class="faq-heading-icon"><i class="fas fa-circle-question"></i></div>
                        <h2>{"Frequently Asked Questions"}</h2>
                    </div>
                    <div class="faq-list">
                        if matches.is_empty() {
                            <p class="faq-empty">{format!("No answers match \"{}\".", query.trim())}</p>
                        } else {
                            { for matches.iter().map(|faq| html! {
                                <div class="faq-entry" key={faq.question}>
                                    <h3>{faq.question}</h3>
                                    <p>{faq.answer}</p>
                                </div>
                            }) }
                        }
                    </div>
                </Reveal>
            </div>
            <style>
                {r#"
    .support-page {
        position: relative;
        min-height: 100vh;
        padding: 8rem 0 6rem;
        overflow: hidden;
        background: #0A0A0F;
    }
    .support-inner {
        position: relative;
        z-index: 10;
        max-width: 64rem;
        margin: 0 auto;
        padding: 0 1.5rem;
    }
    .search-box {
        position: relative;
        width: 100%;
        max-width: 36rem;
        margin: 0 auto;
    }
    .search-box i {
        position: absolute;
        top: 50%;
        left: 1rem;
        transform: translateY(-50%);
        color: rgba(255, 255, 255, 0.4);
        pointer-events: none;
        transition: color 0.2s;
    }
    .search-box:focus-within i {
        color: #818cf8;
    }
    .search-box input {
        width: 100%;
        padding: 1rem 1rem 1rem 3rem;
        border-radius: 1rem;
        border: 1px solid rgba(255, 255, 255, 0.1);
        background: rgba(255, 255, 255, 0.03);
        color: #fff;
        font-size: 1rem;
        outline: none;
        box-shadow: 0 4px 20px rgba(0, 0, 0, 0.2);
        transition: all 0.2s;
    }
    .search-box input::placeholder {
        color: rgba(255, 255, 255, 0.3);
    }
    .search-box input:focus {
        border-color: rgba(99, 102, 241, 0.5);
        background: rgba(255, 255, 255, 0.05);
        box-shadow: 0 0 0 4px rgba(99, 102, 241, 0.1);
    }
    .support-options {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 1.5rem;
        margin-bottom: 6rem;
    }
    .support-card {
        display: block;
        padding: 2rem;
        border-radius: 1.5rem;
        border: 1px solid rgba(255, 255, 255, 0.05);
        background: rgba(255, 255, 255, 0.02);
        text-decoration: none;
        cursor: pointer;
        transition: all 0.2s;
    }
    .support-card:hover {
        background: rgba(255, 255, 255, 0.04);
        border-color: rgba(255, 255, 255, 0.1);
        transform: translateY(-0.25rem);
    }
    .support-icon {
        display: flex;
        align-items: center;
        justify-content: center;
        width: 3rem;
        height: 3rem;
        margin-bottom: 1.5rem;
        border-radius: 1rem;
        font-size: 1.25rem;
        transition: transform 0.2s;
    }
    .support-card:hover .support-icon {
        transform: scale(1.1);
    }
    .support-card.tint-indigo .support-icon { background: rgba(99, 102, 241, 0.1); border: 1px solid rgba(99, 102, 241, 0.2); color: #818cf8; }
    .support-card.tint-cyan .support-icon { background: rgba(6, 182, 212, 0.1); border: 1px solid rgba(6, 182, 212, 0.2); color: #22d3ee; }
    .support-card.tint-emerald .support-icon { background: rgba(16, 185, 129, 0.1); border: 1px solid rgba(16, 185, 129, 0.2); color: #34d399; }
    .support-card h3 {
        margin-bottom: 0.75rem;
        font-size: 1.25rem;
        font-weight: 700;
        color: #fff;
    }
    .support-card p {
        margin-bottom: 1.5rem;
        font-size: 0.875rem;
        line-height: 1.6;
        color: rgba(255, 255, 255, 0.4);
    }
    .support-action {
        display: flex;
        align-items: center;
        gap: 0.25rem;
        font-size: 0.875rem;
        font-weight: 600;
    }
    .support-card.tint-indigo .support-action { color: #818cf8; }
    .support-card.tint-cyan .support-action { color: #22d3ee; }
    .support-card.tint-emerald .support-action { color: #34d399; }
    .support-action i {
        font-size: 0.75rem;
        transition: transform 0.2s;
    }
    .support-card:hover .support-action i {
        transform: translateX(0.25rem);
    }
    .faq-block {
        max-width: 48rem;
        margin: 0 auto;
    }
    .faq-heading {
        display: flex;
        align-items: center;
        gap: 0.75rem;
        margin-bottom: 2rem;
    }
    .faq-heading-icon {
        display: flex;
        align-items: center;
        justify-content: center;
        width: 2.5rem;
        height: 2.5rem;
        border-radius: 0.75rem;
        border: 1px solid rgba(255, 255, 255, 0.1);
        background: rgba(255, 255, 255, 0.05);
        color: rgba(255, 255, 255, 0.7);
    }
    .faq-heading h2 {
        font-family: 'Syne', sans-serif;
        font-size: 1.875rem;
        font-weight: 700;
        color: #fff;
    }
    .faq-list {
        display: flex;
        flex-direction: column;
        gap: 1rem;
    }
    .faq-entry {
        padding: 1.5rem;
        border-radius: 1rem;
        border: 1px solid rgba(255, 255, 255, 0.05);
        background: rgba(255, 255, 255, 0.02);
        transition: background 0.2s;
    }
    .faq-entry:hover {
        background: rgba(255, 255, 255, 0.05);
    }
    .faq-entry h3 {
        margin-bottom: 0.75rem;
        font-size: 1.125rem;
        font-weight: 600;
        color: rgba(255, 255, 255, 0.9);
    }
    .faq-entry p, .faq-empty {
        font-size: 0.875rem;
        line-height: 1.6;
        color: rgba(255, 255, 255, 0.5);
    }
    @media (max-width: 768px) {
        .support-options {
            grid-template-columns: 1fr;
        }
    }
                "#}
            </style>
        </div>
    }
}
