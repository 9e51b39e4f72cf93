//! Class management command and query handlers.

mod create_class;
mod get_class_roster;
mod update_class;

pub use create_class::{CreateClassCommand, CreateClassHandler};
pub use get_class_roster::{ClassRoster, GetClassRosterHandler, GetClassRosterQuery};
pub use update_class::{UpdateClassCommand, UpdateClassHandler};

use crate::domain::class::{ClassDetails, ClassOffering};
use crate::domain::club::{Club, ClubError};
use crate::domain::foundation::{ClassId, FieldErrors, INVALID_CHOICE};
use crate::ports::{ClassRepository, SeasonRepository, TeacherRepository};

/// Validates class fields together with the teacher choice, so every
/// problem is reported at once.
async fn check_details(
    teachers: &dyn TeacherRepository,
    club: &Club,
    details: &ClassDetails,
) -> Result<(), ClubError> {
    let mut fields = match details.validate() {
        Ok(()) => FieldErrors::new(),
        Err(err) => err.field_errors,
    };

    if let Some(teacher_id) = &details.teacher_id {
        let in_club = teachers
            .find_by_id(teacher_id)
            .await?
            .map(|t| t.club_id() == club.id())
            .unwrap_or(false);
        if !in_club {
            fields.add("teacher", INVALID_CHOICE);
        }
    }

    Ok(fields.into_result("Class is invalid")?)
}

/// Loads a class whose season belongs to `club`.
async fn load_club_class(
    seasons: &dyn SeasonRepository,
    classes: &dyn ClassRepository,
    club: &Club,
    class_id: &ClassId,
) -> Result<ClassOffering, ClubError> {
    let class = classes
        .find_by_id(class_id)
        .await?
        .ok_or(ClubError::ClassNotFound(*class_id))?;

    let owned = seasons
        .find_by_id(class.season_id())
        .await?
        .map(|s| s.belongs_to(club.id()))
        .unwrap_or(false);
    if !owned {
        return Err(ClubError::ClassNotFound(*class_id));
    }
    Ok(class)
}
