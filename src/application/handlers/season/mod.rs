//! Season command and query handlers.

mod activate_season;
mod create_season;
mod get_active_season;
mod list_seasons;

pub use activate_season::{ActivateSeasonCommand, ActivateSeasonHandler};
pub use create_season::{CreateSeasonCommand, CreateSeasonHandler};
pub use get_active_season::{ActiveSeasonResult, GetActiveSeasonHandler, GetActiveSeasonQuery};
pub use list_seasons::{ListSeasonsHandler, ListSeasonsQuery};
