use yew::prelude::*;
use yew_router::components::Link;

use crate::components::icons::AppleIcon;
use crate::config::{DOWNLOAD_PATH, ICON_PATH, NAV_SCROLL_THRESHOLD_PX};
use crate::motion::hooks::use_scroll_threshold;
use crate::Route;

#[function_component(Nav)]
pub fn nav() -> Html {
    let scrolled = use_scroll_threshold(NAV_SCROLL_THRESHOLD_PX);

    html! {
        <nav class={classes!("floating-nav", scrolled.then_some("scrolled"))}>
            <Link<Route> to={Route::Home} classes="nav-brand">
                <img src={ICON_PATH} alt="Logo" />
                <span>{"Notch"}</span>
            </Link<Route>>
            <div class="nav-links">
                <Link<Route> to={Route::Home}>{"Features"}</Link<Route>>
                <Link<Route> to={Route::LearnMore}>{"Learn More"}</Link<Route>>
                <Link<Route> to={Route::Support}>{"Support"}</Link<Route>>
            </div>
            <a href={DOWNLOAD_PATH} download="" class="nav-download">
                <AppleIcon />
                {"Download"}
            </a>
            <style>
                {r#"
    .floating-nav {
        position: fixed;
        top: 1rem;
        left: 50%;
        transform: translateX(-50%);
        z-index: 40;
        display: flex;
        align-items: center;
        gap: 2rem;
        padding: 0.75rem 1.5rem;
        border-radius: 1rem;
        border: 1px solid transparent;
        background: transparent;
        transition: all 0.5s;
        animation: nav-drop 0.6s ease-out 0.1s both;
    }
    .floating-nav.scrolled {
        background: rgba(10, 10, 15, 0.8);
        backdrop-filter: blur(24px);
        border-color: rgba(255, 255, 255, 0.08);
        box-shadow: 0 0 0 1px rgba(255, 255, 255, 0.05);
    }
    .nav-brand {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        text-decoration: none;
        color: #fff;
        font-family: 'Syne', sans-serif;
        font-size: 0.875rem;
        font-weight: 600;
    }
    .nav-brand img {
        width: 1.5rem;
        height: 1.5rem;
        border-radius: 7px;
        object-fit: cover;
    }
    .nav-links {
        display: flex;
        align-items: center;
        gap: 1.5rem;
        font-size: 0.75rem;
        font-weight: 500;
    }
    .nav-links a {
        color: rgba(255, 255, 255, 0.4);
        text-decoration: none;
        transition: color 0.2s;
    }
    .nav-links a:hover {
        color: rgba(255, 255, 255, 0.9);
    }
    .nav-download {
        margin-left: auto;
        display: flex;
        align-items: center;
        gap: 0.375rem;
        font-size: 0.75rem;
        font-weight: 600;
        background: #fff;
        color: #000;
        padding: 0.375rem 1rem;
        border-radius: 0.75rem;
        text-decoration: none;
        transition: background 0.2s;
    }
    .nav-download:hover {
        background: rgba(255, 255, 255, 0.9);
    }
    .nav-download .apple-icon {
        width: 12px;
        height: 12px;
    }
    @keyframes nav-drop {
        from { opacity: 0; margin-top: -20px; }
        to { opacity: 1; margin-top: 0; }
    }
    @media (max-width: 768px) {
        .nav-links, .nav-download {
            display: none;
        }
    }
                "#}
            </style>
        </nav>
    }
}
