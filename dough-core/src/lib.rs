//! Pizza dough calculations: ingredient weights from baker's percentages,
//! yeast quantities from time and temperature, pre-ferments and a
//! timestamped fermentation schedule.
//!
//! Every calculation is a pure function of its arguments.

pub mod catalog;
pub mod dough;
pub mod error;
pub mod locale;
pub mod preferment;
pub mod schedule;
pub mod yeast;

pub use catalog::{
    FLOURS, FlourType, PizzaStyle, Range, STYLES, ServingMode, flour_by_id, flours_for_style,
    style_by_id,
};
pub use dough::{
    DoughInput, DoughResult, FermentationMethod, IngredientAmounts, MultiPhaseFermentation,
    calculate_dough, calculate_fermentation_time, calculate_multi_phase_yeast_percent,
    calculate_yeast_percent, round_grams, round_yeast, tray_weight,
};
pub use error::{DoughError, Result};
pub use locale::Locale;
pub use preferment::{PreFermentResult, calculate_biga, calculate_poolish};
pub use schedule::{FermentationSchedule, FermentationStep, build_schedule};
pub use yeast::{
    FermentationPhase, YeastConversions, YeastType, calculate_equivalent_time, convert_yeast,
    convert_yeast_weight, yeast_activity_factor, yeast_conversions,
};
