use yew::prelude::*;

use crate::config::CAROUSEL_INTERVAL_MS;
use crate::motion::hooks::use_carousel;

#[derive(Properties, PartialEq)]
pub struct MediaSliderProps {
    pub slides: &'static [&'static str],
}

/// Auto-advancing image strip with pagination dots.
#[function_component(MediaSlider)]
pub fn media_slider(props: &MediaSliderProps) -> Html {
    let carousel = use_carousel(props.slides.len(), CAROUSEL_INTERVAL_MS);
    let offset = carousel.state.index() * 100;

    html! {
        <div class="media-slider">
            <div class="slider-track" style={format!("transform: translateX(-{}%);", offset)}>
                { for props.slides.iter().enumerate().map(|(i, src)| html! {
                    <div class="slide" key={i}>
                        <img src={*src} alt={format!("slide-{}", i)} />
                        <div class="slide-shade"></div>
                    </div>
                }) }
            </div>
            <div class="slider-dots">
                { for (0..carousel.state.len()).map(|i| {
                    let select = carousel.select.clone();
                    let onclick = Callback::from(move |_: MouseEvent| select.emit(i));
                    html! {
                        <button
                            key={i}
                            aria-label={format!("Show slide {}", i + 1)}
                            class={classes!("slider-dot", carousel.state.is_current(i).then_some("active"))}
                            {onclick}
                        />
                    }
                }) }
            </div>
            <style>
                {r#"
    .media-slider {
        position: relative;
        z-index: 10;
        width: 65%;
        height: 100%;
        overflow: hidden;
        border-radius: 30px;
        border: 1px solid rgba(255, 255, 255, 0.1);
        box-shadow: 0 0 50px rgba(0, 0, 0, 0.6);
        background: #0a0a0f;
    }
    .slider-track {
        display: flex;
        width: 100%;
        height: 100%;
        transition: transform 0.8s cubic-bezier(0.25, 1, 0.5, 1);
    }
    .slide {
        position: relative;
        width: 100%;
        height: 100%;
        flex-shrink: 0;
    }
    .slide img {
        width: 100%;
        height: 100%;
        object-fit: cover;
        opacity: 0.9;
    }
    .slide-shade {
        position: absolute;
        left: 0;
        right: 0;
        bottom: 0;
        height: 8rem;
        pointer-events: none;
        background: linear-gradient(to top, rgba(0, 0, 0, 0.8), transparent);
    }
    .slider-dots {
        position: absolute;
        bottom: 2rem;
        left: 50%;
        transform: translateX(-50%);
        z-index: 20;
        display: flex;
        gap: 0.625rem;
    }
    .slider-dot {
        width: 0.5rem;
        height: 0.5rem;
        padding: 0;
        border: none;
        border-radius: 9999px;
        background: rgba(255, 255, 255, 0.3);
        cursor: pointer;
        transition: all 0.5s;
    }
    .slider-dot:hover {
        background: rgba(255, 255, 255, 0.6);
    }
    .slider-dot.active {
        width: 2rem;
        background: #fff;
    }
    @media (max-width: 1024px) {
        .media-slider {
            width: 100%;
        }
    }
                "#}
            </style>
        </div>
    }
}
