use yew::prelude::*;

use crate::motion::hooks::use_scroll_fraction;

#[function_component(ScrollProgress)]
pub fn scroll_progress() -> Html {
    let fraction = use_scroll_fraction();

    html! {
        <div class="scroll-progress">
            <div class="scroll-progress-bar" style={format!("transform: scaleX({:.4});", fraction)}></div>
            <style>
                {r#"
    .scroll-progress {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 50;
        height: 2px;
        background: transparent;
    }
    .scroll-progress-bar {
        height: 100%;
        transform-origin: left;
        background: linear-gradient(90deg, #6366f1, #8b5cf6, #22d3ee);
    }
                "#}
            </style>
        </div>
    }
}
