//! Pass-through context handed to the presentation layer with every page.

use serde::Serialize;

use crate::domain::club::Club;
use crate::domain::foundation::Timestamp;
use crate::domain::season::Season;

use super::{MinuteParityTitle, TitlePolicy};

/// Page metadata shared by every club page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageContext {
    pub title: String,
    pub year: i32,
    pub club_name: String,
    pub web_name: String,
    /// Active season label, if the club has one.
    pub season: Option<String>,
    /// True when the minute-parity title policy capitalized the title.
    #[serde(rename = "easterEgg")]
    pub easter_egg: bool,
}

impl PageContext {
    /// Builds the context for `page` as rendered at `at`.
    pub fn build(
        policy: &dyn TitlePolicy,
        page: &str,
        at: &Timestamp,
        club: &Club,
        season: Option<&Season>,
    ) -> Self {
        Self {
            title: policy.title(page, at),
            year: at.year(),
            club_name: club.name().to_string(),
            web_name: club.web_name().to_string(),
            season: season.map(Season::label),
            easter_egg: MinuteParityTitle::is_capitalized(at),
        }
    }
}
