mod author;
pub use author::{resolve_attribution, Attribution};

mod card;
pub use card::{compose, ActionControl, Footer, Header, ReasonSection, ReplyCard, TimeLabel};

mod feedback;
pub use feedback::FeedbackTally;

mod fuzz;

mod hint;
pub use hint::{hint_for, Hint, USER_REFERENCE};

mod locale;
pub use locale::Locale;

mod reference;
pub use reference::{reference_section, ReferenceBody, ReferenceSection};

mod reply_type;
pub use reply_type::{ReplyTypeExt, TypeLabel};

mod route;
pub use route::Route;

mod settings;
pub use settings::{parse_time_zone, CardOptions, DisplaySettings};

mod text;
pub use text::{RichText, Segment};

pub mod time;

pub mod api {
    pub use rumors_api::*;
}

pub mod prelude {
    pub use crate::ReplyTypeExt;
}
