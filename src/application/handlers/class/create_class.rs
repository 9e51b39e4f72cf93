//! CreateClassHandler - Command handler for adding a class to a season.

use std::sync::Arc;

use crate::domain::class::{ClassDetails, ClassOffering};
use crate::domain::club::ClubError;
use crate::domain::foundation::{require_capability, AuthenticatedUser, Capability, ClassId, SeasonId};
use crate::ports::{ClassRepository, ClubRepository, SeasonRepository, TeacherRepository};

use super::super::club_scope::load_club;
use super::check_details;

/// Command to create a class.
#[derive(Debug, Clone)]
pub struct CreateClassCommand {
    pub web_name: String,
    pub user: AuthenticatedUser,
    pub season_id: SeasonId,
    pub details: ClassDetails,
}

pub struct CreateClassHandler {
    clubs: Arc<dyn ClubRepository>,
    seasons: Arc<dyn SeasonRepository>,
    classes: Arc<dyn ClassRepository>,
    teachers: Arc<dyn TeacherRepository>,
}

impl CreateClassHandler {
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

    pub async fn handle(&self, cmd: CreateClassCommand) -> Result<ClassOffering, ClubError> {
        // 1. Resolve club and check role
        let club = load_club(self.clubs.as_ref(), &cmd.web_name).await?;
        require_capability(&cmd.user, club.id(), Capability::ManageClasses)?;

        // 2. Season must belong to this club
        self.seasons
            .find_by_id(&cmd.season_id)
            .await?
            .filter(|s| s.belongs_to(club.id()))
            .ok_or(ClubError::SeasonNotFound(cmd.season_id))?;

        // 3. Validate everything before writing
        check_details(self.teachers.as_ref(), &club, &cmd.details).await?;
        let class = ClassOffering::new(ClassId::new(), cmd.season_id, cmd.details)?;

        // 4. Persist
        self.classes.save(&class).await?;

        tracing::info!(
            club = %club.web_name(),
            season_id = %class.season_id(),
            class_id = %class.id(),
            "class created"
        );
        Ok(class)
    }
}
