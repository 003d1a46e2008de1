//! Flour and pizza-style reference data.
//!
//! Styles only pre-populate a [`DoughInput`]; flours are informational.

use serde::Serialize;

use crate::dough::{DoughInput, tray_weight};
use crate::error::{DoughError, Result};

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn mid(&self) -> f64 {
        (self.min + self.max) / 2.0
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServingMode {
    Balls,
    Tray,
}

#[derive(Clone, Debug, Serialize)]
pub struct FlourType {
    pub id: &'static str,
    pub name: &'static str,
    /// Baking strength W.
    pub w: Range,
    /// Protein content, %.
    pub protein: Range,
    /// Tenacity/extensibility ratio P/L.
    pub pl: &'static str,
    pub description: &'static str,
    pub recommended_styles: &'static [&'static str],
}

#[derive(Clone, Debug, Serialize)]
pub struct PizzaStyle {
    pub id: &'static str,
    pub name: &'static str,
    pub hydration: Range,
    pub salt: Range,
    pub oil: Range,
    pub sugar: Range,
    pub malt: Range,
    pub ball_weight: Range,
    pub fermentation_h: Range,
    pub recommended_temp_c: f64,
    pub recommended_flours: &'static [&'static str],
    pub serving_mode: ServingMode,
    /// Default tray for tray styles, cm. Replaces `ball_weight` in
    /// [`DoughInput::apply_style`].
    pub tray_default_cm: Option<(f64, f64)>,
}

pub static FLOURS: &[FlourType] = &[
    FlourType {
        id: "00-w170",
        name: "Farina 00 (W170-200)",
        w: Range::new(170.0, 200.0),
        protein: Range::new(9.0, 11.0),
        pl: "0.50-0.60",
        description: "Weak flour for quick doughs (2-6h). Soft and extensible.",
        recommended_styles: &["pane-pizza"],
    },
    FlourType {
        id: "00-w260",
        name: "Farina 00 (W260-300)",
        w: Range::new(260.0, 300.0),
        protein: Range::new(11.5, 13.0),
        pl: "0.55-0.65",
        description: "Classic Neapolitan flour for 8-24h fermentation.",
        recommended_styles: &["napoletana-stg", "canotto", "chicago", "new-york"],
    },
    FlourType {
        id: "00-w300",
        name: "Farina 00 (W300-350)",
        w: Range::new(300.0, 350.0),
        protein: Range::new(13.0, 14.5),
        pl: "0.55-0.70",
        description: "Strong flour for long fermentation (24-72h) and high hydration.",
        recommended_styles: &[
            "napoletana-contemporanea",
            "romana-teglia",
            "pizza-pala",
            "canotto",
            "focaccia",
            "detroit",
            "new-york",
        ],
    },
    FlourType {
        id: "farina-0",
        name: "Farina 0",
        w: Range::new(200.0, 280.0),
        protein: Range::new(10.0, 12.5),
        pl: "0.50-0.60",
        description: "Less refined than 00, more flavour and a slightly rustic crumb.",
        recommended_styles: &["pane-pizza", "focaccia"],
    },
    FlourType {
        id: "tipo-1",
        name: "Farina Tipo 1",
        w: Range::new(180.0, 260.0),
        protein: Range::new(10.0, 12.0),
        pl: "0.45-0.55",
        description: "Semi-refined, nutty, slightly darker.",
        recommended_styles: &["pane-pizza"],
    },
    FlourType {
        id: "tipo-2",
        name: "Farina Tipo 2",
        w: Range::new(150.0, 220.0),
        protein: Range::new(10.0, 12.0),
        pl: "0.40-0.55",
        description: "Semi-wholemeal. Often blended with 00.",
        recommended_styles: &["pane-pizza"],
    },
    FlourType {
        id: "integrale",
        name: "Farina Integrale",
        w: Range::new(120.0, 180.0),
        protein: Range::new(11.0, 13.0),
        pl: "0.35-0.50",
        description: "Wholemeal. Best blended at 20-30% with white flour.",
        recommended_styles: &["pane-pizza"],
    },
    FlourType {
        id: "manitoba",
        name: "Manitoba (W350-400)",
        w: Range::new(350.0, 400.0),
        protein: Range::new(14.0, 16.0),
        pl: "0.60-0.70",
        description: "Very strong flour for 48-72h+ fermentation and very high hydration.",
        recommended_styles: &[
            "napoletana-contemporanea",
            "romana-teglia",
            "pizza-pala",
            "canotto",
            "focaccia",
        ],
    },
    FlourType {
        id: "bread-flour",
        name: "Bread Flour",
        w: Range::new(280.0, 320.0),
        protein: Range::new(12.0, 14.0),
        pl: "0.55-0.65",
        description: "High-protein American flour, the standard for NY and Detroit.",
        recommended_styles: &["new-york", "chicago", "detroit"],
    },
    FlourType {
        id: "mix-pinsa",
        name: "Mix Pinsa",
        w: Range::new(260.0, 320.0),
        protein: Range::new(11.0, 13.0),
        pl: "0.50-0.60",
        description: "Wheat, soy and rice blend for Pinsa Romana.",
        recommended_styles: &["pinsa"],
    },
];

pub static STYLES: &[PizzaStyle] = &[
    PizzaStyle {
        id: "napoletana-stg",
        name: "Napoletana STG",
        hydration: Range::new(58.0, 72.0),
        salt: Range::new(2.5, 3.1),
        oil: Range::new(0.0, 0.0),
        sugar: Range::new(0.0, 0.0),
        malt: Range::new(0.0, 0.0),
        ball_weight: Range::new(230.0, 270.0),
        fermentation_h: Range::new(8.0, 24.0),
        recommended_temp_c: 22.0,
        recommended_flours: &["00-w260"],
        serving_mode: ServingMode::Balls,
        tray_default_cm: None,
    },
    PizzaStyle {
        id: "napoletana-contemporanea",
        name: "Napoletana Contemporanea",
        hydration: Range::new(68.0, 80.0),
        salt: Range::new(2.5, 3.0),
        oil: Range::new(0.0, 0.0),
        sugar: Range::new(0.0, 0.0),
        malt: Range::new(0.0, 0.0),
        ball_weight: Range::new(250.0, 290.0),
        fermentation_h: Range::new(24.0, 48.0),
        recommended_temp_c: 20.0,
        recommended_flours: &["00-w300", "manitoba"],
        serving_mode: ServingMode::Balls,
        tray_default_cm: None,
    },
    PizzaStyle {
        id: "romana-teglia",
        name: "Romana in Teglia",
        hydration: Range::new(75.0, 85.0),
        salt: Range::new(2.2, 2.8),
        oil: Range::new(2.0, 4.0),
        sugar: Range::new(0.0, 0.0),
        malt: Range::new(0.0, 1.0),
        ball_weight: Range::new(800.0, 900.0),
        fermentation_h: Range::new(24.0, 72.0),
        recommended_temp_c: 20.0,
        recommended_flours: &["00-w300", "manitoba"],
        serving_mode: ServingMode::Tray,
        tray_default_cm: Some((40.0, 30.0)),
    },
    PizzaStyle {
        id: "focaccia",
        name: "Focaccia",
        hydration: Range::new(80.0, 90.0),
        salt: Range::new(2.2, 2.8),
        oil: Range::new(4.0, 8.0),
        sugar: Range::new(0.0, 1.0),
        malt: Range::new(0.0, 0.0),
        ball_weight: Range::new(800.0, 1000.0),
        fermentation_h: Range::new(6.0, 10.0),
        recommended_temp_c: 24.0,
        recommended_flours: &["00-w300", "farina-0"],
        serving_mode: ServingMode::Tray,
        tray_default_cm: Some((40.0, 30.0)),
    },
    PizzaStyle {
        id: "canotto",
        name: "Canotto",
        hydration: Range::new(70.0, 80.0),
        salt: Range::new(2.5, 3.0),
        oil: Range::new(0.0, 0.0),
        sugar: Range::new(0.0, 0.0),
        malt: Range::new(0.0, 0.0),
        ball_weight: Range::new(260.0, 300.0),
        fermentation_h: Range::new(24.0, 48.0),
        recommended_temp_c: 20.0,
        recommended_flours: &["00-w300", "manitoba", "00-w260"],
        serving_mode: ServingMode::Balls,
        tray_default_cm: None,
    },
    PizzaStyle {
        id: "pizza-pala",
        name: "Pizza alla Pala",
        hydration: Range::new(75.0, 85.0),
        salt: Range::new(2.2, 2.8),
        oil: Range::new(1.0, 3.0),
        sugar: Range::new(0.0, 0.0),
        malt: Range::new(0.0, 1.0),
        ball_weight: Range::new(1000.0, 1300.0),
        fermentation_h: Range::new(24.0, 72.0),
        recommended_temp_c: 20.0,
        recommended_flours: &["00-w300", "manitoba"],
        serving_mode: ServingMode::Tray,
        tray_default_cm: Some((60.0, 30.0)),
    },
    PizzaStyle {
        id: "pinsa",
        name: "Pinsa Romana",
        hydration: Range::new(75.0, 85.0),
        salt: Range::new(2.0, 2.5),
        oil: Range::new(1.0, 3.0),
        sugar: Range::new(0.0, 0.0),
        malt: Range::new(0.0, 0.0),
        ball_weight: Range::new(230.0, 270.0),
        fermentation_h: Range::new(48.0, 72.0),
        recommended_temp_c: 20.0,
        recommended_flours: &["mix-pinsa"],
        serving_mode: ServingMode::Balls,
        tray_default_cm: None,
    },
    PizzaStyle {
        id: "pane-pizza",
        name: "Pane Pizza",
        hydration: Range::new(60.0, 70.0),
        salt: Range::new(2.0, 2.5),
        oil: Range::new(1.0, 3.0),
        sugar: Range::new(0.0, 1.0),
        malt: Range::new(0.0, 0.0),
        ball_weight: Range::new(250.0, 300.0),
        fermentation_h: Range::new(2.0, 6.0),
        recommended_temp_c: 24.0,
        recommended_flours: &["00-w170", "farina-0", "tipo-1", "tipo-2", "integrale"],
        serving_mode: ServingMode::Balls,
        tray_default_cm: None,
    },
    PizzaStyle {
        id: "new-york",
        name: "New York",
        hydration: Range::new(60.0, 65.0),
        salt: Range::new(2.0, 2.5),
        oil: Range::new(2.0, 4.0),
        sugar: Range::new(1.0, 3.0),
        malt: Range::new(0.0, 1.0),
        ball_weight: Range::new(300.0, 400.0),
        fermentation_h: Range::new(24.0, 72.0),
        recommended_temp_c: 20.0,
        recommended_flours: &["bread-flour", "00-w260"],
        serving_mode: ServingMode::Balls,
        tray_default_cm: None,
    },
    PizzaStyle {
        id: "chicago",
        name: "Chicago Deep Dish",
        hydration: Range::new(50.0, 60.0),
        salt: Range::new(1.8, 2.2),
        oil: Range::new(8.0, 12.0),
        sugar: Range::new(1.0, 3.0),
        malt: Range::new(0.0, 0.0),
        ball_weight: Range::new(600.0, 800.0),
        fermentation_h: Range::new(8.0, 24.0),
        recommended_temp_c: 22.0,
        recommended_flours: &["bread-flour", "00-w260"],
        serving_mode: ServingMode::Balls,
        tray_default_cm: None,
    },
    PizzaStyle {
        id: "detroit",
        name: "Detroit",
        hydration: Range::new(68.0, 75.0),
        salt: Range::new(2.0, 2.5),
        oil: Range::new(1.0, 3.0),
        sugar: Range::new(0.0, 1.0),
        malt: Range::new(0.0, 0.0),
        ball_weight: Range::new(500.0, 600.0),
        fermentation_h: Range::new(12.0, 48.0),
        recommended_temp_c: 20.0,
        recommended_flours: &["bread-flour", "00-w300"],
        serving_mode: ServingMode::Tray,
        tray_default_cm: Some((25.0, 35.0)),
    },
];

pub fn flour_by_id(id: &str) -> Option<&'static FlourType> {
    FLOURS.iter().find(|f| f.id == id)
}

/// Flours suited to a style; every flour for `custom`.
pub fn flours_for_style(style_id: &str) -> Vec<&'static FlourType> {
    FLOURS
        .iter()
        .filter(|f| style_id == "custom" || f.recommended_styles.iter().any(|s| *s == style_id))
        .collect()
}

pub fn style_by_id(id: &str) -> Option<&'static PizzaStyle> {
    STYLES.iter().find(|s| s.id == id)
}

fn round_tenth(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

impl DoughInput {
    /// Fill in the midpoint of every range the style recommends. Tray
    /// styles become one tray of their default size.
    pub fn apply_style(&mut self, style: &PizzaStyle) {
        self.style_id = style.id.to_string();
        self.hydration = style.hydration.mid().round();
        self.salt = round_tenth(style.salt.mid());
        self.oil = round_tenth(style.oil.mid());
        self.sugar = round_tenth(style.sugar.mid());
        self.malt = round_tenth(style.malt.mid());
        match (style.serving_mode, style.tray_default_cm) {
            (ServingMode::Tray, Some((width, height))) => {
                self.number_of_balls = 1;
                self.ball_weight = tray_weight(width, height);
            }
            _ => self.ball_weight = style.ball_weight.mid().round(),
        }
        self.temperature_c = style.recommended_temp_c;
        self.fermentation_time_h = style.fermentation_h.mid().round();
        if let Some(flour) = style.recommended_flours.first() {
            self.flour_id = flour.to_string();
        }
    }

    /// [`apply_style`](Self::apply_style) by id.
    pub fn apply_style_id(&mut self, id: &str) -> Result<()> {
        let style = style_by_id(id).ok_or_else(|| DoughError::UnknownStyle(id.to_string()))?;
        self.apply_style(style);
        Ok(())
    }
}
