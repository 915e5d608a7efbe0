use yew::prelude::*;

use crate::motion::hooks::use_in_view;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    /// Entry direction, one of the `from-*` modifiers.
    #[prop_or("from-below")]
    pub from: &'static str,
    pub children: Children,
}

/// Fades its children in the first time they scroll into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone());

    html! {
        <div ref={node} class={classes!("reveal-on-view", props.from, in_view.then_some("in-view"), props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}
