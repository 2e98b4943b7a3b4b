#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Opinion {
    /// The reply answers the original article
    Responsive,

    /// The reply does not answer the original article
    Unresponsive,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Feedback {
    /// Raw score as sent by the server, only 1 and -1 carry an opinion
    #[serde(default, deserialize_with = "lenient_score")]
    pub score: i64,
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum RawScore {
    Int(i64),
    Other(serde::de::IgnoredAny),
}

/// Anything but an integer is read as a neutral score
fn lenient_score<'de, D: serde::Deserializer<'de>>(d: D) -> Result<i64, D::Error> {
    Ok(match <RawScore as serde::Deserialize>::deserialize(d)? {
        RawScore::Int(score) => score,
        RawScore::Other(_) => 0,
    })
}

impl Feedback {
    pub fn opinion(&self) -> Option<Opinion> {
        match self.score {
            1 => Some(Opinion::Responsive),
            -1 => Some(Opinion::Unresponsive),
            _ => None,
        }
    }
}
