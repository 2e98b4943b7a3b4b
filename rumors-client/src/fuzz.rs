#![cfg(test)]

use crate::{
    api::{Feedback, ReplyId, ReplyType, User},
    hint_for, reference_section, resolve_attribution, Attribution, DisplaySettings,
    FeedbackTally, Locale,
};

static TYPES: [ReplyType; 5] = [
    ReplyType::Rumor,
    ReplyType::NotRumor,
    ReplyType::Opinionated,
    ReplyType::NotArticle,
    ReplyType::Unknown(String::new()),
];

fn user(u: Option<(String, String)>) -> Option<User> {
    u.map(|(id, name)| User::new(&id, &name))
}

#[test]
fn tally_is_bounded_by_feedback_count() {
    bolero::check!()
        .with_type::<Vec<i64>>()
        .cloned()
        .for_each(|scores| {
            let feedbacks = scores
                .iter()
                .map(|&score| Feedback { score })
                .collect::<Vec<_>>();
            let t = FeedbackTally::tally(&feedbacks);
            let neutral = scores.iter().filter(|s| **s != 1 && **s != -1).count();
            assert!(t.positive + t.negative <= feedbacks.len());
            assert_eq!(t.positive + t.negative + neutral, feedbacks.len());
        })
}

#[test]
fn summary_is_empty_iff_no_opinion() {
    bolero::check!()
        .with_type::<(u16, u16)>()
        .cloned()
        .for_each(|(positive, negative)| {
            let t = FeedbackTally {
                positive: positive as usize,
                negative: negative as usize,
            };
            let summary = t.summary(Locale::En);
            assert_eq!(summary.is_empty(), positive == 0 && negative == 0);
            if positive != 0 && negative != 0 {
                let pos = summary.find("responsive to the original").unwrap();
                let neg = summary.find("unresponsive").unwrap();
                assert!(pos < neg, "clauses out of order in {summary:?}");
            }
        })
}

#[test]
fn reply_author_link_only_for_other_author() {
    bolero::check!()
        .with_type::<(Option<(String, String)>, Option<(String, String)>)>()
        .cloned()
        .for_each(|(connection_author, reply_author)| {
            let connection_author = user(connection_author);
            let reply_author = user(reply_author);
            let a = resolve_attribution(
                connection_author.as_ref(),
                reply_author.as_ref(),
                &ReplyId(String::from("r")),
                &DisplaySettings::default(),
            );
            let expect_link = match (&connection_author, &reply_author) {
                (Some(c), Some(r)) => c.id != r.id,
                _ => false,
            };
            assert_eq!(matches!(a, Attribution::UsedReplyOf { .. }), expect_link);
        })
}

#[test]
fn not_article_policies() {
    bolero::check!()
        .with_type::<(u8, Option<String>)>()
        .cloned()
        .for_each(|(typ, reference)| {
            let typ = &TYPES[typ as usize % TYPES.len()];
            let is_not_article = *typ == ReplyType::NotArticle;
            for locale in [Locale::En, Locale::ZhTw] {
                assert_eq!(
                    reference_section(typ, reference.as_deref(), locale).is_none(),
                    is_not_article,
                );
                assert_eq!(hint_for(typ, locale).is_some(), is_not_article);
            }
        })
}
