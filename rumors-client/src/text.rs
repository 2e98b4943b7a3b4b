use regex::Regex;

lazy_static::lazy_static! {
    // URLs are printable ASCII without spaces, quotes or angle brackets, so
    // full-width punctuation and CJK text end them
    static ref URL: Regex = Regex::new(r"https?://[!#-;=?-~]+").expect("url regex is invalid");
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Segment {
    Text(String),
    Link(String),
    LineBreak,
}

/// Free-form text with its line breaks and links made explicit
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RichText(Vec<Segment>);

impl RichText {
    pub fn format(raw: &str) -> RichText {
        let mut segments = Vec::new();
        for (i, line) in raw.split('\n').enumerate() {
            if i != 0 {
                segments.push(Segment::LineBreak);
            }
            linkify_into(line.strip_suffix('\r').unwrap_or(line), &mut segments);
        }
        RichText(segments)
    }

    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    pub fn plain_text(&self) -> String {
        self.0
            .iter()
            .map(|s| match s {
                Segment::Text(t) | Segment::Link(t) => t as &str,
                Segment::LineBreak => "\n",
            })
            .collect()
    }
}

fn linkify_into(line: &str, segments: &mut Vec<Segment>) {
    let mut last = 0;
    for m in URL.find_iter(line) {
        let url = trim_trailing(m.as_str());
        if url.len() <= "https://".len() {
            continue;
        }
        if m.start() > last {
            segments.push(Segment::Text(String::from(&line[last..m.start()])));
        }
        segments.push(Segment::Link(String::from(url)));
        last = m.start() + url.len();
    }
    if last < line.len() {
        segments.push(Segment::Text(String::from(&line[last..])));
    }
}

/// Strips sentence punctuation ending a link, keeping closing brackets that
/// pair with an opening one inside the link
fn trim_trailing(url: &str) -> &str {
    let mut url = url;
    while let Some(c) = url.chars().last() {
        let strip = match c {
            ')' => url.matches('(').count() < url.matches(')').count(),
            ']' => url.matches('[').count() < url.matches(']').count(),
            '.' | ',' | ';' | ':' | '!' | '?' | '\'' => true,
            _ => false,
        };
        if !strip {
            break;
        }
        url = &url[..url.len() - c.len_utf8()];
    }
    url
}
