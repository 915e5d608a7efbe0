use yew::prelude::*;

use crate::config::ICON_PATH;

#[function_component(PageLoader)]
pub fn page_loader() -> Html {
    html! {
        <div class="page-loader">
            <div class="loader-content">
                <div class="loader-logo">
                    <div class="loader-icon">
                        <img src={ICON_PATH} alt="Notch Logo" />
                    </div>
                    <div class="loader-ping"></div>
                </div>
                <p class="loader-title">{"Notch"}</p>
                <div class="loader-track">
                    <div class="loader-bar"></div>
                </div>
            </div>
            <style>
                {r#"
    .page-loader {
        position: fixed;
        inset: 0;
        z-index: 9990;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        background: #0A0A0F;
    }
    .loader-content {
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 1.5rem;
        animation: loader-pop 0.5s ease-out both;
    }
    .loader-logo {
        position: relative;
    }
    .loader-icon {
        width: 3.5rem;
        height: 3.5rem;
        border-radius: 1rem;
        background: #fff;
        display: flex;
        align-items: center;
        justify-content: center;
        box-shadow: 0 0 40px rgba(255, 255, 255, 0.2);
    }
    .loader-icon img {
        width: 2.5rem;
        height: 2.5rem;
        object-fit: contain;
    }
    .loader-ping {
        position: absolute;
        inset: 0;
        border: 1px solid rgba(255, 255, 255, 0.2);
        border-radius: 1rem;
        animation: ping 2.5s cubic-bezier(0, 0, 0.2, 1) infinite;
    }
    .loader-title {
        font-family: 'Syne', sans-serif;
        font-size: 1.25rem;
        font-weight: 600;
        letter-spacing: -0.02em;
        color: #fff;
    }
    .loader-track {
        width: 8rem;
        height: 1px;
        margin-top: 0.5rem;
        overflow: hidden;
        border-radius: 9999px;
        background: rgba(255, 255, 255, 0.1);
    }
    .loader-bar {
        height: 100%;
        border-radius: 9999px;
        background: linear-gradient(90deg, #818cf8, #a78bfa);
        animation: loader-fill 1.4s ease-in-out both;
    }
    @keyframes loader-pop {
        from { transform: scale(0.8); opacity: 0; }
        to { transform: scale(1); opacity: 1; }
    }
    @keyframes loader-fill {
        from { width: 0%; }
        to { width: 100%; }
    }
    @keyframes ping {
        75%, 100% { transform: scale(1.6); opacity: 0; }
    }
                "#}
            </style>
        </div>
    }
}
