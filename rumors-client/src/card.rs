use std::fmt;

use crate::{
    api::{ReplyConnection, ReplyConnectionId, Time},
    hint_for, reference_section, resolve_attribution, time, Attribution, CardOptions,
    DisplaySettings, FeedbackTally, Hint, ReferenceBody, ReferenceSection, ReplyTypeExt, RichText,
    Route, TypeLabel,
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Header {
    pub author: Attribution,
    pub marked_as: &'static str,
    pub type_label: TypeLabel,
    pub hint: Option<Hint>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReasonSection {
    pub heading: &'static str,
    pub text: RichText,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TimeLabel {
    /// eg. "3 hours ago"
    pub relative: String,

    /// Full date, shown as a tooltip
    pub absolute: String,

    /// Link to the reply page, if the time should be a link
    pub href: Option<String>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ActionControl {
    pub target: ReplyConnectionId,
    pub label: String,
    pub disabled: bool,
}

impl ActionControl {
    /// Calls `on_action` with the connection id, unless disabled. Returns whether it was called.
    pub fn trigger(&self, on_action: impl FnOnce(ReplyConnectionId)) -> bool {
        if self.disabled {
            tracing::debug!(connection = ?self.target, "ignoring action on disabled control");
            return false;
        }
        on_action(self.target.clone());
        true
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Footer {
    pub time: TimeLabel,
    pub feedback_summary: Option<String>,

    /// Only present when the viewer can update the connection status
    pub action: Option<ActionControl>,

    pub separator: &'static str,
}

/// Everything displayed for one reply connection
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReplyCard {
    pub header: Header,
    pub reason: ReasonSection,
    pub reference: Option<ReferenceSection>,
    pub footer: Footer,
}

pub fn compose(
    connection: &ReplyConnection,
    options: &CardOptions,
    settings: &DisplaySettings,
    now: Time,
) -> ReplyCard {
    tracing::trace!(id = ?connection.id, "composing reply card");
    let locale = settings.locale;
    let strings = locale.strings();
    let version = connection.current_version();
    let reply_href = || Route::Reply(connection.reply.id().clone()).href(&settings.route_prefix);

    let header = Header {
        author: resolve_attribution(
            connection.user.as_ref(),
            version.user.as_ref(),
            connection.reply.id(),
            settings,
        ),
        marked_as: strings.marked_as,
        type_label: version.typ.type_label(locale),
        hint: hint_for(&version.typ, locale),
    };

    let reason = ReasonSection {
        heading: strings.reason_heading,
        text: RichText::format(&version.text),
    };

    let summary = FeedbackTally::tally(&connection.feedbacks).summary(locale);
    let footer = Footer {
        time: TimeLabel {
            relative: time::relative(connection.created_at, now, locale),
            absolute: time::absolute(connection.created_at, settings.time_zone, locale),
            href: options.link_to_reply.then(reply_href),
        },
        feedback_summary: (!summary.is_empty()).then_some(summary),
        action: connection.can_update_status.then(|| ActionControl {
            target: connection.id.clone(),
            label: options
                .action_text
                .clone()
                .unwrap_or_else(|| String::from(strings.delete_response)),
            disabled: options.disabled,
        }),
        separator: strings.separator,
    };

    ReplyCard {
        header,
        reason,
        reference: reference_section(&version.typ, version.reference.as_deref(), locale),
        footer,
    }
}

impl fmt::Display for ReplyCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Header {
            author,
            marked_as,
            type_label,
            hint,
        } = &self.header;
        write!(f, "{author}{marked_as}{}", type_label.label)?;
        if let Some(hint) = hint {
            write!(f, " {hint}")?;
        }
        writeln!(f)?;

        writeln!(f, "{}", self.reason.heading)?;
        writeln!(f, "{}", self.reason.text.plain_text())?;

        if let Some(reference) = &self.reference {
            writeln!(f, "{}", reference.heading)?;
            match &reference.body {
                ReferenceBody::Cited(text) => writeln!(f, "{}", text.plain_text())?,
                ReferenceBody::Missing(warning) => writeln!(f, "{warning}")?,
            }
        }

        let footer = &self.footer;
        match &footer.time.href {
            Some(href) => write!(f, "[{}]({href})", footer.time.relative)?,
            None => write!(f, "{}", footer.time.relative)?,
        }
        write!(f, " ({})", footer.time.absolute)?;
        if let Some(summary) = &footer.feedback_summary {
            write!(f, "{}{summary}", footer.separator)?;
        }
        if let Some(action) = &footer.action {
            write!(f, "{}[{}]", footer.separator, action.label)?;
            if action.disabled {
                write!(f, " (disabled)")?;
            }
        }
        Ok(())
    }
}
