use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dough::round_yeast;
use crate::error::DoughError;

/// Reference temperature at which the activity factor is 1.
pub const REFERENCE_TEMP_C: f64 = 20.0;
/// Every +5°C doubles yeast activity (and halves the yeast needed).
pub const TEMP_HALVING_INTERVAL_C: f64 = 5.0;

/// Yeast kind supported by the core.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum YeastType {
    Fresh,
    Dry,
    Sourdough,
}

impl YeastType {
    pub const ALL: [YeastType; 3] = [YeastType::Fresh, YeastType::Dry, YeastType::Sourdough];

    /// Grams of fresh yeast one gram of this type is worth.
    pub fn fresh_equivalent(self) -> f64 {
        match self {
            YeastType::Fresh => 1.0,
            // 1g dry = 3g fresh
            YeastType::Dry => 3.0,
            // 1g starter = 0.04g fresh
            YeastType::Sourdough => 1.0 / 25.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            YeastType::Fresh => "fresh",
            YeastType::Dry => "dry",
            YeastType::Sourdough => "sourdough",
        }
    }
}

impl fmt::Display for YeastType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for YeastType {
    type Err = DoughError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fresh" => Ok(YeastType::Fresh),
            "dry" => Ok(YeastType::Dry),
            "sourdough" => Ok(YeastType::Sourdough),
            other => Err(DoughError::UnknownYeastType(other.to_string())),
        }
    }
}

/// Convert a yeast amount between types, routing through fresh yeast.
pub fn convert_yeast(amount: f64, from: YeastType, to: YeastType) -> f64 {
    let fresh = amount * from.fresh_equivalent();
    fresh / to.fresh_equivalent()
}

/// Same as [`convert_yeast`], rounded to one decimal gram.
pub fn convert_yeast_weight(grams: f64, from: YeastType, to: YeastType) -> f64 {
    round_yeast(convert_yeast(grams, from, to))
}

/// Rounded weights of one amount expressed in every yeast type.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct YeastConversions {
    pub fresh: f64,
    pub dry: f64,
    pub sourdough: f64,
}

pub fn yeast_conversions(grams: f64, from: YeastType) -> YeastConversions {
    YeastConversions {
        fresh: convert_yeast_weight(grams, from, YeastType::Fresh),
        dry: convert_yeast_weight(grams, from, YeastType::Dry),
        sourdough: convert_yeast_weight(grams, from, YeastType::Sourdough),
    }
}

/// One fermentation stage at a fixed temperature.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FermentationPhase {
    pub temperature_c: f64,
    pub duration_h: f64,
}

impl FermentationPhase {
    pub fn new(temperature_c: f64, duration_h: f64) -> Self {
        Self {
            temperature_c,
            duration_h,
        }
    }

    /// Hours at 20°C this phase is worth.
    pub fn equivalent_hours(&self) -> f64 {
        self.duration_h * yeast_activity_factor(self.temperature_c)
    }
}

/// Yeast activity relative to 20°C: doubles every +5°C, halves every -5°C.
pub fn yeast_activity_factor(temperature_c: f64) -> f64 {
    2f64.powf((temperature_c - REFERENCE_TEMP_C) / TEMP_HALVING_INTERVAL_C)
}

/// Collapse a sequence of phases into "equivalent hours at 20°C".
///
/// An empty list yields 0; callers treat a non-positive result as degenerate.
pub fn calculate_equivalent_time(phases: &[FermentationPhase]) -> f64 {
    phases.iter().map(FermentationPhase::equivalent_hours).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_conversion_factors() {
        assert_relative_eq!(convert_yeast(3.0, YeastType::Fresh, YeastType::Dry), 1.0);
        assert_relative_eq!(convert_yeast(1.0, YeastType::Dry, YeastType::Fresh), 3.0);
        assert_relative_eq!(
            convert_yeast(1.0, YeastType::Fresh, YeastType::Sourdough),
            25.0,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            convert_yeast(25.0, YeastType::Sourdough, YeastType::Fresh),
            1.0,
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_conversion_round_trips_for_every_pair() {
        for from in YeastType::ALL {
            for to in YeastType::ALL {
                let x = 7.0;
                let back = convert_yeast(convert_yeast(x, from, to), to, from);
                assert_relative_eq!(back, x, max_relative = 1e-5);
            }
        }
    }

    #[test]
    fn test_convert_weight_is_rounded() {
        assert_abs_diff_eq!(
            convert_yeast_weight(10.0, YeastType::Fresh, YeastType::Dry),
            3.3,
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(
            convert_yeast_weight(10.0, YeastType::Fresh, YeastType::Sourdough),
            250.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_yeast_conversions_view() {
        let c = yeast_conversions(9.0, YeastType::Fresh);
        assert_abs_diff_eq!(c.fresh, 9.0, epsilon = 1e-9);
        assert_abs_diff_eq!(c.dry, 3.0, epsilon = 1e-9);
        assert_abs_diff_eq!(c.sourdough, 225.0, epsilon = 1e-9);
    }

    #[test]
    fn test_yeast_type_parsing() {
        assert_eq!("dry".parse::<YeastType>().unwrap(), YeastType::Dry);
        assert!(matches!(
            "instant".parse::<YeastType>(),
            Err(DoughError::UnknownYeastType(_))
        ));
    }

    #[test]
    fn test_activity_factor() {
        assert_relative_eq!(yeast_activity_factor(20.0), 1.0);
        assert_relative_eq!(yeast_activity_factor(25.0), 2.0);
        assert_abs_diff_eq!(yeast_activity_factor(4.0), 0.109, epsilon = 0.001);
    }

    #[test]
    fn test_equivalent_time() {
        let single = [FermentationPhase::new(20.0, 24.0)];
        assert_relative_eq!(calculate_equivalent_time(&single), 24.0);

        // 24h in the fridge is worth a bit over 2.5h at room temperature
        let fridge = [FermentationPhase::new(4.0, 24.0)];
        let eq = calculate_equivalent_time(&fridge);
        assert!(eq > 2.0 && eq < 3.5);

        let three = [
            FermentationPhase::new(22.0, 2.0),
            FermentationPhase::new(4.0, 46.0),
            FermentationPhase::new(22.0, 2.0),
        ];
        let eq = calculate_equivalent_time(&three);
        assert!(eq > 8.0 && eq < 13.0);

        assert_eq!(calculate_equivalent_time(&[]), 0.0);
    }
}
