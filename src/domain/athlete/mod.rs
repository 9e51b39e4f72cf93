//! Athlete domain module.

mod aggregate;

pub use aggregate::{
    is_valid_email, Athlete, AthleteProfile, MAX_ATHLETE_CODE_LENGTH, MAX_NAME_LENGTH,
    MAX_PHONE_LENGTH,
};
