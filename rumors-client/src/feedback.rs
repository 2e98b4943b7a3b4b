use crate::{
    api::{Feedback, Opinion},
    locale::fill,
    Locale,
};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct FeedbackTally {
    pub positive: usize,
    pub negative: usize,
}

impl FeedbackTally {
    pub fn tally(feedbacks: &[Feedback]) -> FeedbackTally {
        feedbacks
            .iter()
            .fold(FeedbackTally::default(), |mut agg, f| {
                match f.opinion() {
                    Some(Opinion::Responsive) => agg.positive += 1,
                    Some(Opinion::Unresponsive) => agg.negative += 1,
                    None => tracing::debug!(score = f.score, "ignoring neutral feedback score"),
                }
                agg
            })
    }

    /// Empty when nobody gave an opinion, positive clause always first
    pub fn summary(&self, locale: Locale) -> String {
        let strings = locale.strings();
        let mut results = Vec::new();
        if self.positive != 0 {
            results.push(fill(strings.positive_feedback, self.positive));
        }
        if self.negative != 0 {
            results.push(fill(strings.negative_feedback, self.negative));
        }
        results.join(strings.feedback_delimiter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feedbacks(scores: &[i64]) -> Vec<Feedback> {
        scores.iter().map(|&score| Feedback { score }).collect()
    }

    #[test]
    fn mixed_scores() {
        let t = FeedbackTally::tally(&feedbacks(&[1, 1, -1, 0]));
        assert_eq!(t, FeedbackTally { positive: 2, negative: 1 });
        assert_eq!(
            t.summary(Locale::En),
            "2 people found this responsive to the original、1 people found this unresponsive",
        );
        assert_eq!(t.summary(Locale::ZhTw), "2 人覺得有回答到原文、1 人覺得沒回答到原文");
    }

    #[test]
    fn no_feedback() {
        let t = FeedbackTally::tally(&[]);
        assert_eq!(t, FeedbackTally::default());
        assert_eq!(t.summary(Locale::En), "");
    }

    #[test]
    fn out_of_range_scores_are_ignored() {
        let t = FeedbackTally::tally(&feedbacks(&[0, 2, -2, 42, i64::MIN]));
        assert_eq!(t, FeedbackTally::default());
        assert_eq!(t.summary(Locale::ZhTw), "");
    }

    #[test]
    fn single_sided() {
        let t = FeedbackTally::tally(&feedbacks(&[-1, -1, 0]));
        assert_eq!(t.summary(Locale::En), "2 people found this unresponsive");
        let t = FeedbackTally::tally(&feedbacks(&[1]));
        assert_eq!(t.summary(Locale::En), "1 people found this responsive to the original");
    }
}
