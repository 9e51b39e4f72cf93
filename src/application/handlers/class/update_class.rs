//! UpdateClassHandler - Command handler for editing a class.

use std::sync::Arc;

use crate::domain::class::{ClassDetails, ClassOffering};
use crate::domain::club::ClubError;
use crate::domain::foundation::{require_capability, AuthenticatedUser, Capability, ClassId, SeasonId};
use crate::ports::{ClassRepository, ClubRepository, SeasonRepository, TeacherRepository};

use super::super::club_scope::load_club;
use super::{check_details, load_club_class};

/// Command to replace a class's editable fields.
#[derive(Debug, Clone)]
pub struct UpdateClassCommand {
    pub web_name: String,
    pub user: AuthenticatedUser,
    pub class_id: ClassId,
    /// Move the class to another season of the same club.
    pub season_id: Option<SeasonId>,
    pub details: ClassDetails,
}

pub struct UpdateClassHandler {
    clubs: Arc<dyn ClubRepository>,
    seasons: Arc<dyn SeasonRepository>,
    classes: Arc<dyn ClassRepository>,
    teachers: Arc<dyn TeacherRepository>,
}

impl UpdateClassHandler {
    pub fn new(
        clubs: Arc<dyn ClubRepository>,
        seasons: Arc<dyn SeasonRepository>,
        classes: Arc<dyn ClassRepository>,
        teachers: Arc<dyn TeacherRepository>,
    ) -> Self {
        Self {
            clubs,
            seasons,
            classes,
            teachers,
        }
    }

    pub async fn handle(&self, cmd: UpdateClassCommand) -> Result<ClassOffering, ClubError> {
        // 1. Resolve club and check role
        let club = load_club(self.clubs.as_ref(), &cmd.web_name).await?;
        require_capability(&cmd.user, club.id(), Capability::ManageClasses)?;

        // 2. Load class, scoped to this club
        let mut class = load_club_class(
            self.seasons.as_ref(),
            self.classes.as_ref(),
            &club,
            &cmd.class_id,
        )
        .await?;

        // 3. Validate the new season and fields before touching the aggregate
        if let Some(season_id) = cmd.season_id {
            self.seasons
                .find_by_id(&season_id)
                .await?
                .filter(|s| s.belongs_to(club.id()))
                .ok_or(ClubError::SeasonNotFound(season_id))?;
        }
        check_details(self.teachers.as_ref(), &club, &cmd.details).await?;

        // 4. Apply and persist
        class.update(cmd.details)?;
        if let Some(season_id) = cmd.season_id {
            class.move_to_season(season_id);
        }
        self.classes.update(&class).await?;

        tracing::info!(club = %club.web_name(), class_id = %class.id(), "class updated");
        Ok(class)
    }
}
