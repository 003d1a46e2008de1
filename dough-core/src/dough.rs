use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{DoughError, Result};
use crate::yeast::{
    FermentationPhase, REFERENCE_TEMP_C, TEMP_HALVING_INTERVAL_C, YeastType,
    calculate_equivalent_time, convert_yeast,
};

/// 0.1% fresh yeast (1g/kg flour) at 20°C for 24h.
const REFERENCE_FRESH_PERCENT: f64 = 0.1;
const REFERENCE_TIME_H: f64 = 24.0;
pub const MIN_YEAST_PERCENT: f64 = 0.01;
pub const MAX_YEAST_PERCENT: f64 = 5.0;
pub const MIN_FERMENTATION_H: f64 = 1.0;
pub const MAX_FERMENTATION_H: f64 = 120.0;
/// Dough per cm² of a standard tray.
const TRAY_G_PER_CM2: f64 = 0.7;
/// Rounded batch may differ from the target weight by at most this much.
pub const MAX_ROUNDING_DRIFT_G: f64 = 2.0;

/// How the dough is built.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FermentationMethod {
    #[default]
    Direct,
    Poolish,
    Biga,
}

impl FermentationMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            FermentationMethod::Direct => "direct",
            FermentationMethod::Poolish => "poolish",
            FermentationMethod::Biga => "biga",
        }
    }
}

impl fmt::Display for FermentationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FermentationMethod {
    type Err = DoughError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "direct" => Ok(FermentationMethod::Direct),
            "poolish" => Ok(FermentationMethod::Poolish),
            "biga" => Ok(FermentationMethod::Biga),
            other => Err(DoughError::UnknownMethod(other.to_string())),
        }
    }
}

/// Room → fridge → temper fermentation. Phase order is fixed.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MultiPhaseFermentation {
    pub enabled: bool,
    pub room: FermentationPhase,
    pub cold: FermentationPhase,
    pub temper: FermentationPhase,
}

impl MultiPhaseFermentation {
    pub fn new(room: FermentationPhase, cold: FermentationPhase, temper: FermentationPhase) -> Self {
        Self {
            enabled: true,
            room,
            cold,
            temper,
        }
    }

    pub fn phases(&self) -> [FermentationPhase; 3] {
        [self.room, self.cold, self.temper]
    }

    pub fn total_hours(&self) -> f64 {
        self.room.duration_h + self.cold.duration_h + self.temper.duration_h
    }
}

/// Input for a dough calculation. Percentages are of flour weight (65.0 = 65%).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DoughInput {
    pub style_id: String,
    pub flour_id: String,
    pub number_of_balls: u32,
    /// Weight of one ball (or of the whole tray) in grams.
    pub ball_weight: f64,
    pub hydration: f64,
    pub salt: f64,
    pub oil: f64,
    pub sugar: f64,
    pub malt: f64,
    pub yeast_type: YeastType,
    pub temperature_c: f64,
    pub fermentation_time_h: f64,
    pub fermentation_method: FermentationMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multi_phase: Option<MultiPhaseFermentation>,
}

impl Default for DoughInput {
    fn default() -> Self {
        Self {
            style_id: "napoletana-stg".to_string(),
            flour_id: "00-w260".to_string(),
            number_of_balls: 4,
            ball_weight: 250.0,
            hydration: 65.0,
            salt: 2.8,
            oil: 0.0,
            sugar: 0.0,
            malt: 0.0,
            yeast_type: YeastType::Fresh,
            temperature_c: 22.0,
            fermentation_time_h: 24.0,
            fermentation_method: FermentationMethod::Direct,
            multi_phase: None,
        }
    }
}

impl DoughInput {
    /// Enabled multi-phase descriptor, if any.
    pub fn active_multi_phase(&self) -> Option<&MultiPhaseFermentation> {
        self.multi_phase.as_ref().filter(|mp| mp.enabled)
    }

    /// Yeast percentage of flour for this input, in `yeast_type` terms.
    pub fn yeast_percent(&self) -> f64 {
        match self.active_multi_phase() {
            Some(mp) => calculate_multi_phase_yeast_percent(&mp.phases(), self.yeast_type),
            None => calculate_yeast_percent(
                self.temperature_c,
                self.fermentation_time_h,
                self.yeast_type,
            ),
        }
    }

    /// Check that every field is inside the range a caller may submit.
    pub fn validate(&self) -> Result<()> {
        check_range("number_of_balls", self.number_of_balls as f64, 1.0, 20.0)?;
        check_range("ball_weight", self.ball_weight, 100.0, 2000.0)?;
        check_range("hydration", self.hydration, 40.0, 100.0)?;
        check_range("salt", self.salt, 0.0, 10.0)?;
        check_range("oil", self.oil, 0.0, 20.0)?;
        check_range("sugar", self.sugar, 0.0, 15.0)?;
        check_range("malt", self.malt, 0.0, 5.0)?;
        check_range("temperature_c", self.temperature_c, 5.0, 45.0)?;
        check_range(
            "fermentation_time_h",
            self.fermentation_time_h,
            MIN_FERMENTATION_H,
            MAX_FERMENTATION_H,
        )?;

        if let Some(mp) = self.active_multi_phase() {
            for (name, phase) in [("room", mp.room), ("cold", mp.cold), ("temper", mp.temper)] {
                if !phase.temperature_c.is_finite() {
                    return Err(DoughError::NotFinite {
                        field: format!("{name}.temperature_c"),
                    });
                }
                check_range(
                    &format!("{name}.duration_h"),
                    phase.duration_h,
                    0.0,
                    MAX_FERMENTATION_H,
                )?;
            }
            if mp.total_hours() <= 0.0 {
                return Err(DoughError::EmptyMultiPhase);
            }
        }
        Ok(())
    }
}

fn check_range(field: &str, value: f64, min: f64, max: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(DoughError::NotFinite {
            field: field.to_string(),
        });
    }
    if value < min || value > max {
        return Err(DoughError::OutOfRange {
            field: field.to_string(),
            value,
            min,
            max,
        });
    }
    Ok(())
}

/// Ingredient weights in grams.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IngredientAmounts {
    pub flour: f64,
    pub water: f64,
    pub salt: f64,
    pub oil: f64,
    pub sugar: f64,
    pub malt: f64,
    pub yeast: f64,
}

impl IngredientAmounts {
    pub fn sum(&self) -> f64 {
        self.flour + self.water + self.salt + self.oil + self.sugar + self.malt + self.yeast
    }

    /// Scale unrounded weights by `1/divisor`, then round each one.
    fn rounded(&self, divisor: f64) -> Self {
        Self {
            flour: round_grams(self.flour / divisor),
            water: round_grams(self.water / divisor),
            salt: round_grams(self.salt / divisor),
            oil: round_grams(self.oil / divisor),
            sugar: round_grams(self.sugar / divisor),
            malt: round_grams(self.malt / divisor),
            yeast: round_yeast(self.yeast / divisor),
        }
    }
}

/// Output of [`calculate_dough`].
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DoughResult {
    /// Balls × ball weight, independent of ingredient rounding.
    pub total_weight: f64,
    #[serde(flatten)]
    pub amounts: IngredientAmounts,
    pub yeast_type: YeastType,
    pub per_ball: IngredientAmounts,
}

#[inline]
pub(crate) fn clamp(v: f64, lo: f64, hi: f64) -> f64 {
    if v < lo {
        lo
    } else if v > hi {
        hi
    } else {
        v
    }
}

/// Compute ingredient weights for the whole batch and per ball.
///
/// With every percentage `p` expressed as a fraction of flour `F`,
/// `total = F * (1 + hydration + salt + oil + sugar + malt + yeast)`.
pub fn calculate_dough(input: &DoughInput) -> DoughResult {
    let total_weight = input.number_of_balls as f64 * input.ball_weight;

    let frac = |p: f64| p / 100.0;
    let yeast_percent = input.yeast_percent();

    let hydration = frac(input.hydration);
    let salt = frac(input.salt);
    let oil = frac(input.oil);
    let sugar = frac(input.sugar);
    let malt = frac(input.malt);
    let yeast = frac(yeast_percent);

    let divisor = 1.0 + hydration + salt + oil + sugar + malt + yeast;
    let flour = total_weight / divisor;
    debug!(total_weight, yeast_percent, flour, "solved dough");

    let raw = IngredientAmounts {
        flour,
        water: flour * hydration,
        salt: flour * salt,
        oil: flour * oil,
        sugar: flour * sugar,
        malt: flour * malt,
        yeast: flour * yeast,
    };

    let balls = input.number_of_balls.max(1) as f64;

    let mut amounts = raw.rounded(1.0);
    let drift = total_weight - amounts.sum();
    if drift.abs() > MAX_ROUNDING_DRIFT_G {
        // whole grams go to the flour, the largest amount
        amounts.flour += round_grams(drift);
        debug!(drift, flour = amounts.flour, "absorbed rounding drift");
    }

    DoughResult {
        total_weight,
        amounts,
        yeast_type: input.yeast_type,
        per_ball: raw.rounded(balls),
    }
}

fn temperature_factor(temperature_c: f64) -> f64 {
    2f64.powf((REFERENCE_TEMP_C - temperature_c) / TEMP_HALVING_INTERVAL_C)
}

/// Yeast percentage of flour for a single-temperature fermentation.
///
/// `yeast% = 0.1 * (24 / time) * 2^((20 - temp) / 5)` in fresh yeast,
/// clamped to 0.01%..5% and then converted to `yeast_type`.
pub fn calculate_yeast_percent(
    temperature_c: f64,
    fermentation_time_h: f64,
    yeast_type: YeastType,
) -> f64 {
    let time_factor = REFERENCE_TIME_H / fermentation_time_h;
    let fresh = clamp(
        REFERENCE_FRESH_PERCENT * temperature_factor(temperature_c) * time_factor,
        MIN_YEAST_PERCENT,
        MAX_YEAST_PERCENT,
    );
    convert_yeast(fresh, YeastType::Fresh, yeast_type)
}

/// Hours of fermentation for a given yeast percentage. Inverse of
/// [`calculate_yeast_percent`], clamped to 1..120h.
pub fn calculate_fermentation_time(
    temperature_c: f64,
    yeast_percent: f64,
    yeast_type: YeastType,
) -> f64 {
    let fresh = convert_yeast(yeast_percent, yeast_type, YeastType::Fresh);
    clamp(
        REFERENCE_FRESH_PERCENT * temperature_factor(temperature_c) * REFERENCE_TIME_H / fresh,
        MIN_FERMENTATION_H,
        MAX_FERMENTATION_H,
    )
}

/// Yeast percentage for a multi-phase fermentation, using the equivalent
/// time at 20°C. With no usable time the maximum percentage is returned.
pub fn calculate_multi_phase_yeast_percent(
    phases: &[FermentationPhase],
    yeast_type: YeastType,
) -> f64 {
    let equivalent_h = calculate_equivalent_time(phases);
    if equivalent_h <= 0.0 || equivalent_h.is_nan() {
        warn!(equivalent_h, "no fermentation time, using maximum yeast");
        return MAX_YEAST_PERCENT;
    }

    let fresh = clamp(
        REFERENCE_FRESH_PERCENT * (REFERENCE_TIME_H / equivalent_h),
        MIN_YEAST_PERCENT,
        MAX_YEAST_PERCENT,
    );
    convert_yeast(fresh, YeastType::Fresh, yeast_type)
}

/// Dough weight for a rectangular tray (cm).
pub fn tray_weight(width_cm: f64, height_cm: f64) -> f64 {
    round_grams(width_cm * height_cm * TRAY_G_PER_CM2)
}

/// Round to a whole gram, halves towards +∞.
pub fn round_grams(g: f64) -> f64 {
    let r = g.round();
    // f64::round sends -1.5 to -2; we want -1
    if g - r == 0.5 { r + 1.0 } else { r }
}

/// Round to a tenth of a gram.
pub fn round_yeast(g: f64) -> f64 {
    round_grams(g * 10.0) / 10.0
}

/* ===========================
Unit tests
=========================== */

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn napoletana() -> DoughInput {
        DoughInput {
            temperature_c: 20.0,
            ..DoughInput::default()
        }
    }

    fn focaccia() -> DoughInput {
        DoughInput {
            style_id: "focaccia".into(),
            number_of_balls: 1,
            ball_weight: 900.0,
            hydration: 85.0,
            salt: 2.5,
            oil: 6.0,
            temperature_c: 24.0,
            fermentation_time_h: 8.0,
            ..DoughInput::default()
        }
    }

    fn fridge_phases(cold_h: f64) -> MultiPhaseFermentation {
        MultiPhaseFermentation::new(
            FermentationPhase::new(22.0, 2.0),
            FermentationPhase::new(4.0, cold_h),
            FermentationPhase::new(22.0, 2.0),
        )
    }

    #[test]
    fn test_rounding() {
        assert_eq!(round_grams(595.3), 595.0);
        assert_eq!(round_grams(595.7), 596.0);
        assert_eq!(round_grams(0.0), 0.0);
        assert_eq!(round_grams(2.5), 3.0);
        assert_eq!(round_grams(-1.5), -1.0);

        assert_abs_diff_eq!(round_yeast(1.83), 1.8, epsilon = 1e-12);
        assert_abs_diff_eq!(round_yeast(1.87), 1.9, epsilon = 1e-12);
        assert_abs_diff_eq!(round_yeast(0.05), 0.1, epsilon = 1e-12);
        assert_eq!(round_yeast(0.0), 0.0);
    }

    #[test]
    fn test_napoletana_reference() {
        let r = calculate_dough(&napoletana());
        assert_eq!(r.total_weight, 1000.0);
        assert!(r.amounts.flour > 585.0 && r.amounts.flour < 600.0);
        assert_eq!(r.amounts.water, round_grams(r.amounts.flour * 0.65));
        assert_eq!(r.amounts.salt, round_grams(r.amounts.flour * 0.028));
        assert_eq!(r.amounts.oil, 0.0);
        assert_eq!(r.yeast_type, YeastType::Fresh);
        assert!((r.amounts.sum() - 1000.0).abs() < 2.0);
    }

    #[test]
    fn test_per_ball_rounds_after_division() {
        let r = calculate_dough(&napoletana());
        // 1000 / 1.679 = 595.59g flour, 148.9g per ball
        assert_eq!(r.per_ball.flour, round_grams(1000.0 / 1.679 / 4.0));
        assert_eq!(r.per_ball.water, round_grams(1000.0 / 1.679 * 0.65 / 4.0));
        assert_abs_diff_eq!(r.per_ball.yeast, 0.1, epsilon = 1e-9);
    }

    #[test]
    fn test_focaccia_high_hydration() {
        let r = calculate_dough(&focaccia());
        assert!((r.amounts.sum() - 900.0).abs() < 2.0);
        let ratio = r.amounts.water / r.amounts.flour;
        assert!(ratio > 0.83 && ratio < 0.87);
        assert!(r.amounts.oil > 0.0);
    }

    #[test]
    fn test_single_ball_per_ball_matches_total() {
        let r = calculate_dough(&DoughInput {
            number_of_balls: 1,
            ..napoletana()
        });
        assert_eq!(r.total_weight, 250.0);
        assert_eq!(r.per_ball, r.amounts);
    }

    #[test]
    fn test_zero_balls_does_not_divide_by_zero() {
        let r = calculate_dough(&DoughInput {
            number_of_balls: 0,
            ..napoletana()
        });
        assert_eq!(r.total_weight, 0.0);
        assert!(r.per_ball.flour.is_finite());
        assert_eq!(r.per_ball.flour, 0.0);
    }

    #[test]
    fn test_zero_percentages() {
        let r = calculate_dough(&DoughInput {
            salt: 0.0,
            oil: 0.0,
            sugar: 0.0,
            malt: 0.0,
            ..napoletana()
        });
        assert_eq!(r.amounts.salt, 0.0);
        assert_eq!(r.amounts.oil, 0.0);
        assert_eq!(r.amounts.sugar, 0.0);
        assert_eq!(r.amounts.malt, 0.0);
    }

    #[test]
    fn test_sum_close_to_total_for_rich_dough() {
        let input = DoughInput {
            number_of_balls: 3,
            ball_weight: 333.0,
            hydration: 95.0,
            salt: 2.2,
            oil: 3.3,
            sugar: 1.7,
            malt: 0.6,
            yeast_type: YeastType::Sourdough,
            ..napoletana()
        };
        let r = calculate_dough(&input);
        assert_eq!(r.total_weight, 999.0);
        assert!((r.amounts.sum() - 999.0).abs() <= 2.0);
        assert!(r.amounts.water > r.amounts.flour * 0.93);
    }

    #[test]
    fn test_sum_close_to_total_across_mixes() {
        for (balls, ball_weight) in [(4, 250.0), (3, 333.0), (6, 280.0), (1, 1250.0)] {
            for hydration in [50.0, 62.5, 70.0, 85.0, 100.0] {
                for oil in [0.0, 2.5, 6.0, 12.0] {
                    for sugar in [0.0, 1.5, 4.0] {
                        for malt in [0.0, 0.5, 2.0] {
                            for yeast_type in YeastType::ALL {
                                let input = DoughInput {
                                    number_of_balls: balls,
                                    ball_weight,
                                    hydration,
                                    oil,
                                    sugar,
                                    malt,
                                    yeast_type,
                                    ..napoletana()
                                };
                                let r = calculate_dough(&input);
                                let drift = (r.amounts.sum() - r.total_weight).abs();
                                assert!(
                                    drift <= MAX_ROUNDING_DRIFT_G + 1e-9,
                                    "drift {drift} for {input:?}"
                                );
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_drift_correction_only_moves_flour() {
        // 687 + 429 + 19 + 82 + 27 + 3 + 0.7 = 1247.7, 2.3g short of 1250
        let input = DoughInput {
            number_of_balls: 1,
            ball_weight: 1250.0,
            hydration: 62.5,
            oil: 12.0,
            sugar: 4.0,
            malt: 0.5,
            ..napoletana()
        };
        let r = calculate_dough(&input);
        assert_eq!(r.amounts.flour, 689.0);
        assert_eq!(r.amounts.water, 429.0);
        assert_eq!(r.amounts.oil, 82.0);
        assert_abs_diff_eq!(r.amounts.sum(), 1249.7, epsilon = 1e-9);
        assert_eq!(r.per_ball.flour, 687.0);
    }

    #[test]
    fn test_yeast_percent_reference_and_scaling() {
        let at20 = calculate_yeast_percent(20.0, 24.0, YeastType::Fresh);
        assert_relative_eq!(at20, 0.1, max_relative = 1e-12);
        assert_relative_eq!(
            calculate_yeast_percent(25.0, 24.0, YeastType::Fresh),
            at20 / 2.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            calculate_yeast_percent(15.0, 24.0, YeastType::Fresh),
            at20 * 2.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            calculate_yeast_percent(20.0, 12.0, YeastType::Fresh),
            at20 * 2.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            calculate_yeast_percent(20.0, 24.0, YeastType::Dry),
            at20 / 3.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            calculate_yeast_percent(20.0, 24.0, YeastType::Sourdough),
            at20 * 25.0,
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_yeast_percent_clamps() {
        assert!(calculate_yeast_percent(20.0, 1000.0, YeastType::Fresh) >= MIN_YEAST_PERCENT);
        assert!(calculate_yeast_percent(35.0, 1.0, YeastType::Fresh) <= MAX_YEAST_PERCENT);
        assert_eq!(
            calculate_yeast_percent(5.0, 1.0, YeastType::Fresh),
            MAX_YEAST_PERCENT
        );
    }

    #[test]
    fn test_fermentation_time_is_inverse() {
        assert_relative_eq!(
            calculate_fermentation_time(20.0, 0.1, YeastType::Fresh),
            24.0,
            max_relative = 1e-9
        );
        let at25 = calculate_fermentation_time(25.0, 0.1, YeastType::Fresh);
        assert_relative_eq!(at25, 12.0, max_relative = 1e-9);

        for (temp, hours, yeast) in [
            (18.0, 36.0, YeastType::Fresh),
            (24.0, 8.0, YeastType::Dry),
            (22.0, 16.0, YeastType::Sourdough),
        ] {
            let pct = calculate_yeast_percent(temp, hours, yeast);
            assert_relative_eq!(
                calculate_fermentation_time(temp, pct, yeast),
                hours,
                max_relative = 1e-9
            );
        }
    }

    #[test]
    fn test_fermentation_time_clamps() {
        let short = calculate_fermentation_time(35.0, 5.0, YeastType::Fresh);
        let long = calculate_fermentation_time(5.0, 0.001, YeastType::Fresh);
        assert_eq!(short, MIN_FERMENTATION_H);
        assert_eq!(long, MAX_FERMENTATION_H);
    }

    #[test]
    fn test_multi_phase_matches_single_phase_for_room_only() {
        let phases = [FermentationPhase::new(20.0, 24.0)];
        assert_relative_eq!(
            calculate_multi_phase_yeast_percent(&phases, YeastType::Fresh),
            calculate_yeast_percent(20.0, 24.0, YeastType::Fresh),
            max_relative = 1e-12
        );

        let warm = [FermentationPhase::new(23.0, 10.0)];
        assert_relative_eq!(
            calculate_multi_phase_yeast_percent(&warm, YeastType::Dry),
            calculate_yeast_percent(23.0, 10.0, YeastType::Dry),
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_multi_phase_reference_points() {
        let eight = [FermentationPhase::new(20.0, 8.0)];
        assert_relative_eq!(
            calculate_multi_phase_yeast_percent(&eight, YeastType::Fresh),
            0.3,
            max_relative = 1e-9
        );

        // ~9g/kg for a day in the fridge
        let fridge = [FermentationPhase::new(4.0, 24.0)];
        let pct = calculate_multi_phase_yeast_percent(&fridge, YeastType::Fresh);
        assert!(pct > 0.5 && pct < 1.5);

        let with_room = fridge_phases(24.0).phases();
        assert!(calculate_multi_phase_yeast_percent(&with_room, YeastType::Fresh) < pct);
    }

    #[test]
    fn test_multi_phase_degenerate_uses_max_yeast() {
        let zero = [FermentationPhase::new(20.0, 0.0); 3];
        assert_eq!(
            calculate_multi_phase_yeast_percent(&zero, YeastType::Dry),
            MAX_YEAST_PERCENT
        );
        assert_eq!(
            calculate_multi_phase_yeast_percent(&[], YeastType::Fresh),
            MAX_YEAST_PERCENT
        );

        let input = DoughInput {
            multi_phase: Some(MultiPhaseFermentation::new(
                FermentationPhase::new(22.0, 0.0),
                FermentationPhase::new(4.0, 0.0),
                FermentationPhase::new(22.0, 0.0),
            )),
            ..napoletana()
        };
        let r = calculate_dough(&input);
        assert!(r.amounts.yeast > 0.0);
        assert!(r.amounts.flour.is_finite());
    }

    #[test]
    fn test_dough_with_multi_phase() {
        let single = calculate_dough(&napoletana());
        let multi = calculate_dough(&DoughInput {
            multi_phase: Some(fridge_phases(24.0)),
            ..napoletana()
        });
        assert!(multi.amounts.yeast > single.amounts.yeast);

        let disabled = calculate_dough(&DoughInput {
            multi_phase: Some(MultiPhaseFermentation {
                enabled: false,
                ..fridge_phases(24.0)
            }),
            ..napoletana()
        });
        assert_eq!(disabled, single);

        let long = calculate_dough(&DoughInput {
            multi_phase: Some(fridge_phases(48.0)),
            ..napoletana()
        });
        assert!((long.amounts.sum() - 1000.0).abs() < 2.0);
    }

    #[test]
    fn test_multi_phase_total_hours() {
        assert_eq!(fridge_phases(46.0).total_hours(), 50.0);
    }

    #[test]
    fn test_tray_weight() {
        assert_eq!(tray_weight(40.0, 30.0), 840.0);
        assert_eq!(tray_weight(30.0, 30.0), 630.0);
    }

    #[test]
    fn test_validate() {
        assert!(DoughInput::default().validate().is_ok());

        let err = DoughInput {
            hydration: 120.0,
            ..DoughInput::default()
        }
        .validate()
        .unwrap_err();
        assert!(matches!(err, DoughError::OutOfRange { ref field, .. } if field == "hydration"));

        let err = DoughInput {
            ball_weight: f64::NAN,
            ..DoughInput::default()
        }
        .validate()
        .unwrap_err();
        assert!(matches!(err, DoughError::NotFinite { .. }));

        let err = DoughInput {
            number_of_balls: 0,
            ..DoughInput::default()
        }
        .validate()
        .unwrap_err();
        assert!(matches!(err, DoughError::OutOfRange { .. }));

        let empty = DoughInput {
            multi_phase: Some(MultiPhaseFermentation::new(
                FermentationPhase::new(22.0, 0.0),
                FermentationPhase::new(4.0, 0.0),
                FermentationPhase::new(22.0, 0.0),
            )),
            ..DoughInput::default()
        };
        assert!(matches!(empty.validate(), Err(DoughError::EmptyMultiPhase)));
    }

    #[test]
    fn test_method_parsing() {
        assert_eq!(
            "biga".parse::<FermentationMethod>().unwrap(),
            FermentationMethod::Biga
        );
        assert!("sponge".parse::<FermentationMethod>().is_err());
    }
}
