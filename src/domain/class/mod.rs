//! Class offering domain module.

mod aggregate;

pub use aggregate::{
    ClassDetails, ClassOffering, END_TIME_BEFORE_START_MESSAGE, MAX_CLASS_NAME_LENGTH,
};
