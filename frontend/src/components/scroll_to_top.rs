use yew::prelude::*;

use crate::config::SCROLL_TOP_THRESHOLD_PX;
use crate::motion::hooks::use_scroll_threshold;
use crate::utils::dom::smooth_scroll_to_top;

#[function_component(ScrollToTop)]
pub fn scroll_to_top() -> Html {
    let visible = use_scroll_threshold(SCROLL_TOP_THRESHOLD_PX);

    let onclick = Callback::from(|_: MouseEvent| {
        if let Err(err) = smooth_scroll_to_top() {
            log::warn!("Scroll to top failed: {}", err);
        }
    });

    html! {
        <>
            if visible {
                <button class="scroll-to-top" aria-label="Scroll to top" {onclick}>
                    <svg width="14" height="14" viewBox="0 0 14 14" fill="none">
                        <path d="M7 11V3M7 3L3 7M7 3l4 4" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round" />
                    </svg>
                </button>
            }
            <style>
                {r#"
    .scroll-to-top {
        position: fixed;
        bottom: 2rem;
        right: 2rem;
        z-index: 50;
        width: 2.5rem;
        height: 2.5rem;
        border-radius: 9999px;
        display: flex;
        align-items: center;
        justify-content: center;
        border: 1px solid rgba(255, 255, 255, 0.1);
        background: rgba(255, 255, 255, 0.05);
        backdrop-filter: blur(24px);
        color: rgba(255, 255, 255, 0.6);
        cursor: pointer;
        box-shadow: 0 4px 20px rgba(0, 0, 0, 0.4);
        transition: all 0.2s;
        animation: rise-in 0.3s ease-out both;
    }
    .scroll-to-top:hover {
        background: rgba(255, 255, 255, 0.1);
        border-color: rgba(99, 102, 241, 0.4);
        color: #fff;
    }
    @keyframes rise-in {
        from { opacity: 0; transform: translateY(10px); }
        to { opacity: 1; transform: translateY(0); }
    }
                "#}
            </style>
        </>
    }
}
