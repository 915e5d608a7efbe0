use yew::prelude::*;
use yew_router::components::Link;

use crate::components::reveal::Reveal;
use crate::config::SETUP_DOWNLOAD_PATH;
use crate::utils::dom::jump_to_top;
use crate::Route;

struct Highlight {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        icon: "fas fa-table-columns tint-indigo",
        title: "Seamless Integration",
        description: "Built with advanced overlay technology, Notch lives natively on your Windows desktop without interfering with your active windows or gaming sessions.",
    },
    Highlight {
        icon: "fas fa-bolt tint-cyan",
        title: "Dynamic Context",
        description: "It intelligently adapts to your current workflow. Whether you're playing music, transferring files, or checking your calendar, Notch shows exactly what you need, when you need it.",
    },
    Highlight {
        icon: "fas fa-microchip tint-emerald",
        title: "Ultra Lightweight",
        description: "Engineered to ensure zero impact on your PC's performance. It consumes minimal RAM and CPU resources while running incredibly smoothly in the background.",
    },
    Highlight {
        icon: "fas fa-shield-halved tint-rose",
        title: "Privacy First",
        description: "Notch doesn't track your personal data or send telemetry to the cloud. Everything processes locally on your machine for complete peace of mind.",
    },
];

#[function_component(LearnMore)]
pub fn learn_more() -> Html {
    {
        use_effect_with_deps(
            move |_| {
                jump_to_top();
                || ()
            },
            (),
        );
    }

    html! {
        <div class="learn-more-page">
            <div class="page-glow"></div>
            <div class="learn-more-inner">
                <div class="page-header fade-up">
                    <h1>
                        {"Elevate Your "}
                        <span class="accent-text">{"Workspace."}</span>
                    </h1>
                    <p>{"Notch is more than just a visual upgrade. It's a fundamental shift in how you interact with your Windows PC, bringing the elegant \"Dynamic Island\" experience directly to your desktop."}</p>
                </div>

                <div class="story-grid">
                    <Reveal from="from-left">
                        <h2>{"Bridging the Gap"}</h2>
                        <p>{"For years, Windows users have relied on the taskbar and system tray for quick information. While functional, it often breaks your focus when you have to look away from the center of your screen."}</p>
                        <p>{"We built Notch to solve this. By utilizing the unused space at the top center of your monitor, we've created a beautiful, interactive command center that feels like a native part of the operating system. It's there when you need it, and quietly fades away when you don't."}</p>
                    </Reveal>
                    <Reveal from="from-right" class={classes!("island-stage")}>
                        <div class="island-halo"></div>
                        <div class="island">
                            <div class="island-dot active"></div>
                            <div class="island-dot"></div>
                            <div class="island-dot"></div>
                        </div>
                    </Reveal>
                </div>

                <Reveal class={classes!("highlight-grid")}>
                    { for HIGHLIGHTS.iter().map(|highlight| html! {
                        <div class="highlight-card" key={highlight.title}>
                            <div class="highlight-icon"><i class={highlight.icon}></i></div>
                            <h3>{highlight.title}</h3>
                            <p>{highlight.description}</p>
                        </div>
                    }) }
                </Reveal>

                <Reveal class={classes!("bottom-cta")}>
                    <h2>{"Ready to upgrade your desktop?"}</h2>
                    <div class="cta-row">
                        <a href={SETUP_DOWNLOAD_PATH} download="" class="cta-download">
                            {"Download for Windows"}
                            <i class="fas fa-arrow-right"></i>
                        </a>
                        <Link<Route> to={Route::Support}>
                            <button class="cta-docs">{"Read the Docs"}</button>
                        </Link<Route>>
                    </div>
                </Reveal>
            </div>
            <style>
                {r#"
    .learn-more-page {
        position: relative;
        min-height: 100vh;
        padding: 8rem 0 5rem;
        overflow: hidden;
        background: #0A0A0F;
    }
    .learn-more-inner {
        position: relative;
        z-index: 10;
        max-width: 72rem;
        margin: 0 auto;
        padding: 0 1.5rem;
    }
    .story-grid {
        display: grid;
        grid-template-columns: 1fr 1fr;
        align-items: center;
        gap: 3rem;
        margin-bottom: 8rem;
    }
    .story-grid h2 {
        margin-bottom: 1rem;
        font-family: 'Syne', sans-serif;
        font-size: 1.875rem;
        font-weight: 700;
        color: #fff;
    }
    .story-grid p {
        margin-bottom: 1.5rem;
        line-height: 1.7;
        color: rgba(255, 255, 255, 0.5);
    }
    .island-stage {
        position: relative;
        height: 400px;
        display: flex;
        align-items: center;
        justify-content: center;
        overflow: hidden;
        border-radius: 1.5rem;
        border: 1px solid rgba(255, 255, 255, 0.1);
        background: rgba(255, 255, 255, 0.02);
    }
    .island-halo {
        position: absolute;
        inset: 0;
        background: radial-gradient(circle at center, rgba(99, 102, 241, 0.1) 0%, transparent 70%);
    }
    .island {
        display: flex;
        align-items: center;
        justify-content: center;
        gap: 0.5rem;
        border: 1px solid rgba(255, 255, 255, 0.1);
        background: #000;
        box-shadow: 0 0 30px rgba(99, 102, 241, 0.3);
        animation: island-breathe 4s ease-in-out infinite;
    }
    .island-dot {
        width: 0.375rem;
        height: 0.375rem;
        border-radius: 9999px;
        background: rgba(255, 255, 255, 0.2);
    }
    .island-dot.active {
        background: rgba(255, 255, 255, 0.4);
        animation: pulse 2s ease-in-out infinite;
    }
    @keyframes island-breathe {
        0%, 100% { width: 120px; height: 36px; border-radius: 18px; }
        50% { width: 280px; height: 80px; border-radius: 24px; }
    }
    .highlight-grid {
        display: grid;
        grid-template-columns: repeat(4, 1fr);
        gap: 1.5rem;
        margin-bottom: 8rem;
    }
    .highlight-card {
        padding: 2rem;
        border-radius: 1.5rem;
        border: 1px solid rgba(255, 255, 255, 0.05);
        background: rgba(255, 255, 255, 0.02);
        transition: background 0.2s;
    }
    .highlight-card:hover {
        background: rgba(255, 255, 255, 0.04);
    }
    .highlight-icon {
        display: flex;
        align-items: center;
        justify-content: center;
        width: 3rem;
        height: 3rem;
        margin-bottom: 1.5rem;
        border-radius: 1rem;
        border: 1px solid rgba(255, 255, 255, 0.1);
        background: rgba(255, 255, 255, 0.05);
        font-size: 1.25rem;
    }
    .highlight-icon .tint-indigo { color: #818cf8; }
    .highlight-icon .tint-cyan { color: #22d3ee; }
    .highlight-icon .tint-emerald { color: #34d399; }
    .highlight-icon .tint-rose { color: #fb7185; }
    .highlight-card h3 {
        margin-bottom: 0.75rem;
        font-size: 1.125rem;
        font-weight: 700;
        color: #fff;
    }
    .highlight-card p {
        font-size: 0.875rem;
        line-height: 1.6;
        color: rgba(255, 255, 255, 0.4);
    }
    .bottom-cta {
        display: flex;
        flex-direction: column;
        align-items: center;
        text-align: center;
    }
    .bottom-cta h2 {
        margin-bottom: 1.5rem;
        font-family: 'Syne', sans-serif;
        font-size: 1.875rem;
        font-weight: 700;
        color: #fff;
    }
    .cta-row {
        display: flex;
        gap: 1rem;
    }
    .cta-download {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        padding: 1rem 2rem;
        border-radius: 9999px;
        background: #fff;
        color: #000;
        font-size: 0.875rem;
        font-weight: 700;
        text-decoration: none;
        transition: all 0.2s;
    }
    .cta-download:hover {
        background: rgba(255, 255, 255, 0.9);
        transform: scale(1.05);
    }
    .cta-docs {
        padding: 1rem 2rem;
        border-radius: 9999px;
        border: 1px solid rgba(255, 255, 255, 0.1);
        background: transparent;
        color: rgba(255, 255, 255, 0.7);
        font-size: 0.875rem;
        font-weight: 700;
        cursor: pointer;
        transition: all 0.2s;
    }
    .cta-docs:hover {
        border-color: rgba(255, 255, 255, 0.2);
        color: #fff;
    }
    @media (max-width: 1024px) {
        .highlight-grid {
            grid-template-columns: 1fr 1fr;
        }
    }
    @media (max-width: 768px) {
        .story-grid, .highlight-grid {
            grid-template-columns: 1fr;
        }
        .island-stage {
            height: 300px;
        }
        .cta-row {
            flex-direction: column;
        }
    }
                "#}
            </style>
        </div>
    }
}
