use rumors_client::{RichText, Segment};
use yew::prelude::*;

pub fn rich_text(t: &RichText) -> Html {
    t.segments()
        .iter()
        .map(|s| match s {
            Segment::Text(t) => html! { <>{ t }</> },
            Segment::Link(url) => html! {
                <a href={ url.clone() } target="_blank" rel="noopener noreferrer">{ url }</a>
            },
            Segment::LineBreak => html! { <br /> },
        })
        .collect()
}
