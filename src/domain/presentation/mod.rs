//! Presentation policies: page titles and shared page context.

mod context;
mod title;

pub use context::PageContext;
pub use title::{page_words, CapitalizedTitle, MinuteParityTitle, TitlePolicy};
