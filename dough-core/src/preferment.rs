use serde::{Deserialize, Serialize};

use crate::dough::{calculate_yeast_percent, round_grams, round_yeast};
use crate::yeast::YeastType;

const POOLISH_FLOUR_RATIO: f64 = 0.5;
const POOLISH_HYDRATION: f64 = 1.0;
const BIGA_FLOUR_RATIO: f64 = 0.5;
const BIGA_HYDRATION: f64 = 0.45;
/// A stiff biga slows the yeast down; compensate with more of it.
const BIGA_YEAST_MULTIPLIER: f64 = 6.0;

/// Pre-ferment sub-batch, carved out of the total flour. Yeast is fresh.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PreFermentResult {
    pub flour: f64,
    pub water: f64,
    pub yeast: f64,
    pub fermentation_time_h: f64,
}

/// Poolish: half the flour, equal weight of water.
pub fn calculate_poolish(total_flour: f64, temperature_c: f64, preferment_time_h: f64) -> PreFermentResult {
    calculate_preferment(
        total_flour,
        temperature_c,
        preferment_time_h,
        POOLISH_FLOUR_RATIO,
        POOLISH_HYDRATION,
        1.0,
    )
}

/// Biga: half the flour, water at 45% of the biga flour.
pub fn calculate_biga(total_flour: f64, temperature_c: f64, preferment_time_h: f64) -> PreFermentResult {
    calculate_preferment(
        total_flour,
        temperature_c,
        preferment_time_h,
        BIGA_FLOUR_RATIO,
        BIGA_HYDRATION,
        BIGA_YEAST_MULTIPLIER,
    )
}

fn calculate_preferment(
    total_flour: f64,
    temperature_c: f64,
    preferment_time_h: f64,
    flour_ratio: f64,
    hydration: f64,
    yeast_multiplier: f64,
) -> PreFermentResult {
    let flour = total_flour * flour_ratio;
    let water = flour * hydration;
    let yeast_percent = calculate_yeast_percent(temperature_c, preferment_time_h, YeastType::Fresh);
    let yeast = flour * (yeast_percent / 100.0) * yeast_multiplier;

    PreFermentResult {
        flour: round_grams(flour),
        water: round_grams(water),
        yeast: round_yeast(yeast),
        fermentation_time_h: preferment_time_h,
    }
}
