use web_sys::Element;
use yew::prelude::*;

use crate::motion::hooks::use_in_view;
use crate::motion::view::Spotlight;

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    #[prop_or_default]
    pub class: Classes,
    /// Entrance delay in seconds.
    #[prop_or_default]
    pub delay: f64,
    pub children: Children,
}

/// Bento card that slides in on first view and follows the pointer with a soft highlight.
#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone());
    // each handler writes only its own cell
    let pointer = use_state_eq(|| (0.0, 0.0));
    let hovered = use_state_eq(|| false);
    let spotlight = Spotlight::default()
        .moved_to(pointer.0, pointer.1)
        .with_active(*hovered);

    let onmousemove = {
        let node = node.clone();
        let pointer = pointer.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(element) = node.cast::<Element>() {
                let rect = element.get_bounding_client_rect();
                let x = f64::from(e.client_x()) - rect.left();
                let y = f64::from(e.client_y()) - rect.top();
                pointer.set((x, y));
            }
        })
    };
    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    html! {
        <div
            ref={node}
            class={classes!("feature-card", in_view.then_some("in-view"), props.class.clone())}
            style={format!("transition-delay: {:.1}s;", props.delay)}
            {onmousemove}
            {onmouseenter}
            {onmouseleave}
        >
            <div class="card-spotlight" style={spotlight.style("rgba(255,255,255,0.06)")}></div>
            <div class="card-glow" style={format!("background: {};", spotlight.gradient("rgba(99,102,241,0.15)"))}></div>
            <div class="card-body">
                { for props.children.iter() }
            </div>
        </div>
    }
}
