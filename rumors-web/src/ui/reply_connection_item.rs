use std::rc::Rc;

use rumors_client::{
    api::{ReplyConnection, ReplyConnectionId},
    compose, ActionControl, Attribution, CardOptions, DisplaySettings, Footer, Hint,
    ReferenceBody, ReferenceSection,
};
use yew::prelude::*;

use crate::{ui::rich_text, util};

#[derive(Clone, PartialEq, Properties)]
pub struct ReplyConnectionItemProps {
    pub reply_connection: Rc<ReplyConnection>,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub on_action: Callback<ReplyConnectionId>,
    /// None renders the locale's "delete response"
    #[prop_or_default]
    pub action_text: Option<String>,
    #[prop_or(true)]
    pub link_to_reply: bool,
    #[prop_or_else(util::browser_settings)]
    pub settings: Rc<DisplaySettings>,
}

#[function_component(ReplyConnectionItem)]
pub fn reply_connection_item(p: &ReplyConnectionItemProps) -> Html {
    let options = CardOptions {
        disabled: p.disabled,
        action_text: p.action_text.clone(),
        link_to_reply: p.link_to_reply,
    };
    let card = compose(&p.reply_connection, &options, &p.settings, chrono::Utc::now());
    let header = &card.header;

    html! {
        <li class="reply-connection">
            <header class="section">
                { attribution(&header.author) }
                { header.marked_as }
                <strong title={ header.type_label.description }>
                    { header.type_label.label }
                </strong>
                { for header.hint.as_ref().map(hint) }
            </header>
            <section class="section">
                <h3>{ card.reason.heading }</h3>
                <div class="expandable-text">{ rich_text(&card.reason.text) }</div>
            </section>
            { for card.reference.as_ref().map(reference) }
            { footer(&card.footer, &p.on_action) }
        </li>
    }
}

fn attribution(a: &Attribution) -> Html {
    match a {
        Attribution::Author(name) => html! { <>{ name }</> },
        Attribution::UsedReplyOf {
            author,
            before,
            link_text,
            href,
            after,
            ..
        } => html! {
            <span>
                { author }{ *before }<a href={ href.clone() }>{ link_text }</a>{ *after }
            </span>
        },
    }
}

fn hint(h: &Hint) -> Html {
    html! {
        <span class="hint">
            { h.before }
            <a href={ h.href } target="_blank" rel="noopener noreferrer">{ h.link_text }</a>
            { h.after }
        </span>
    }
}

fn reference(r: &ReferenceSection) -> Html {
    let body = match &r.body {
        ReferenceBody::Cited(text) => rich_text(text),
        ReferenceBody::Missing(warning) => html! { <>{ *warning }</> },
    };
    html! {
        <section class="section">
            <h3>{ r.heading }</h3>
            { body }
        </section>
    }
}

fn footer(f: &Footer, on_action: &Callback<ReplyConnectionId>) -> Html {
    let time = html! {
        <span title={ f.time.absolute.clone() }>{ &f.time.relative }</span>
    };
    let time = match &f.time.href {
        Some(href) => html! { <a href={ href.clone() }>{ time }</a> },
        None => time,
    };
    html! {
        <footer>
            { time }
            { for f.feedback_summary.as_ref().map(|s| format!("{}{}", f.separator, s)) }
            { for f.action.as_ref().map(|a| action_button(a, f.separator, on_action)) }
        </footer>
    }
}

fn action_button(
    a: &ActionControl,
    separator: &'static str,
    on_action: &Callback<ReplyConnectionId>,
) -> Html {
    let onclick = {
        let action = a.clone();
        let on_action = on_action.clone();
        Callback::from(move |_: MouseEvent| {
            action.trigger(|id| on_action.emit(id));
        })
    };
    html! {
        <>
            { separator }
            <button type="button" disabled={ a.disabled } { onclick }>{ &a.label }</button>
        </>
    }
}
