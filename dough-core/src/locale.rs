//! Step wording. The scheduler decides *what* happens and with which
//! quantities; this module only turns that into text.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dough::FermentationMethod;
use crate::error::DoughError;
use crate::yeast::YeastType;

#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    It,
    En,
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Locale::It => "it",
            Locale::En => "en",
        })
    }
}

impl FromStr for Locale {
    type Err = DoughError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "it" => Ok(Locale::It),
            "en" => Ok(Locale::En),
            other => Err(DoughError::UnknownLocale(other.to_string())),
        }
    }
}

/// A schedule step with every quantity its text needs.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Phrase {
    Knead {
        yeast_g: f64,
        yeast_type: YeastType,
        oil_g: f64,
    },
    RoomBulk {
        temperature_c: f64,
        hours: f64,
        approximate: bool,
    },
    DivideAndFridge {
        balls: u32,
        ball_weight: f64,
        fridge_c: f64,
        hours: Option<f64>,
    },
    RemoveFromFridge {
        hours: f64,
    },
    BulkRise {
        temperature_c: f64,
    },
    Divide {
        balls: u32,
        ball_weight: f64,
    },
    PrepareFerment {
        method: FermentationMethod,
        flour_g: f64,
        water_g: f64,
        yeast_g: f64,
        temperature_c: f64,
    },
    MixAll {
        flour_g: f64,
        water_g: f64,
        salt_g: f64,
        oil_g: f64,
    },
    RestAndRise {
        temperature_c: f64,
    },
    Fridge,
    Ready,
}

impl Locale {
    /// `(action, description)` for a step.
    pub fn render(self, phrase: &Phrase) -> (String, String) {
        match self {
            Locale::It => italian(phrase),
            Locale::En => english(phrase),
        }
    }

    fn yeast_label(self, yeast: YeastType) -> &'static str {
        match (self, yeast) {
            (Locale::It, YeastType::Fresh) => "lievito fresco",
            (Locale::It, YeastType::Dry) => "lievito secco",
            (Locale::It, YeastType::Sourdough) => "lievito madre",
            (Locale::En, YeastType::Fresh) => "fresh yeast",
            (Locale::En, YeastType::Dry) => "dry yeast",
            (Locale::En, YeastType::Sourdough) => "sourdough starter",
        }
    }

    fn oil_note(self, oil_g: f64) -> String {
        if oil_g <= 0.0 {
            return String::new();
        }
        match self {
            Locale::It => format!(", {oil_g}g olio"),
            Locale::En => format!(", {oil_g}g oil"),
        }
    }
}

fn pair(action: &str, description: String) -> (String, String) {
    (action.to_string(), description)
}

fn italian(phrase: &Phrase) -> (String, String) {
    let it = Locale::It;
    match *phrase {
        Phrase::Knead {
            yeast_g,
            yeast_type,
            oil_g,
        } => pair(
            "Impastare",
            format!(
                "Sciogliere {yeast_g}g di {} nell'acqua. Mescolare farina + acqua, autolisi 20min, aggiungere sale{}. Impastare fino a liscio.",
                it.yeast_label(yeast_type),
                it.oil_note(oil_g)
            ),
        ),
        Phrase::RoomBulk {
            temperature_c,
            hours,
            approximate,
        } => pair(
            "Puntata a Temperatura Ambiente",
            format!(
                "Lasciar lievitare a {temperature_c}°C per {}{hours}h. Fare 2-3 pieghe.",
                if approximate { "~" } else { "" }
            ),
        ),
        Phrase::DivideAndFridge {
            balls,
            ball_weight,
            fridge_c,
            hours,
        } => pair(
            "Staglio e Frigo",
            format!(
                "Dividere in {balls} panetti da ~{ball_weight}g. Oliare i contenitori, mettere in frigo a {fridge_c}°C{}.",
                hours.map(|h| format!(" per {h}h")).unwrap_or_default()
            ),
        ),
        Phrase::RemoveFromFridge { hours } => pair(
            "Tirare Fuori dal Frigo",
            format!("Estrarre i panetti dal frigo. Lasciar tornare a temperatura ambiente ({hours}h)."),
        ),
        Phrase::BulkRise { temperature_c } => {
            pair("Puntata", format!("Lasciar lievitare a {temperature_c}°C."))
        }
        Phrase::Divide { balls, ball_weight } => pair(
            "Staglio",
            format!("Dividere in {balls} panetti da ~{ball_weight}g. Far riposare 1h prima di stendere."),
        ),
        Phrase::PrepareFerment {
            method,
            flour_g,
            water_g,
            yeast_g,
            temperature_c,
        } => {
            let (action, verb) = match method {
                FermentationMethod::Biga => (
                    "Preparare la Biga",
                    "Impastare brevemente, coprire e far fermentare",
                ),
                _ => ("Preparare il Poolish", "Coprire e far fermentare"),
            };
            pair(
                action,
                format!(
                    "Mescolare {flour_g}g farina + {water_g}g acqua + {yeast_g}g lievito fresco. {verb} a {temperature_c}°C."
                ),
            )
        }
        Phrase::MixAll {
            flour_g,
            water_g,
            salt_g,
            oil_g,
        } => pair(
            "Impastare il Tutto",
            format!(
                "Aggiungere i restanti {flour_g}g farina, {water_g}g acqua, {salt_g}g sale{}. Impastare fino a liscio.",
                it.oil_note(oil_g)
            ),
        ),
        Phrase::RestAndRise { temperature_c } => pair(
            "Puntata",
            format!("Lasciar riposare e lievitare l'impasto a {temperature_c}°C."),
        ),
        Phrase::Fridge => pair(
            "Frigo",
            "Dividere in panetti, mettere in contenitori oliati, refrigerare a 4°C.".to_string(),
        ),
        Phrase::Ready => pair(
            "Pronto per Stendere!",
            "L'impasto è pronto. Stendere, condire e infornare!".to_string(),
        ),
    }
}

fn english(phrase: &Phrase) -> (String, String) {
    let en = Locale::En;
    match *phrase {
        Phrase::Knead {
            yeast_g,
            yeast_type,
            oil_g,
        } => pair(
            "Knead",
            format!(
                "Dissolve {yeast_g}g of {} in the water. Mix flour and water, rest 20min (autolyse), add salt{}. Knead until smooth.",
                en.yeast_label(yeast_type),
                en.oil_note(oil_g)
            ),
        ),
        Phrase::RoomBulk {
            temperature_c,
            hours,
            approximate,
        } => pair(
            "Room-Temperature Bulk",
            format!(
                "Let it rise at {temperature_c}°C for {}{hours}h. Do 2-3 folds.",
                if approximate { "~" } else { "" }
            ),
        ),
        Phrase::DivideAndFridge {
            balls,
            ball_weight,
            fridge_c,
            hours,
        } => pair(
            "Divide and Refrigerate",
            format!(
                "Divide into {balls} balls of ~{ball_weight}g. Oil the containers and refrigerate at {fridge_c}°C{}.",
                hours.map(|h| format!(" for {h}h")).unwrap_or_default()
            ),
        ),
        Phrase::RemoveFromFridge { hours } => pair(
            "Take Out of the Fridge",
            format!("Take the balls out of the fridge. Let them come back to room temperature ({hours}h)."),
        ),
        Phrase::BulkRise { temperature_c } => {
            pair("Bulk Rise", format!("Let it rise at {temperature_c}°C."))
        }
        Phrase::Divide { balls, ball_weight } => pair(
            "Divide",
            format!("Divide into {balls} balls of ~{ball_weight}g. Rest 1h before stretching."),
        ),
        Phrase::PrepareFerment {
            method,
            flour_g,
            water_g,
            yeast_g,
            temperature_c,
        } => {
            let (action, verb) = match method {
                FermentationMethod::Biga => ("Prepare the Biga", "Mix briefly, cover and ferment"),
                _ => ("Prepare the Poolish", "Cover and ferment"),
            };
            pair(
                action,
                format!(
                    "Mix {flour_g}g flour + {water_g}g water + {yeast_g}g fresh yeast. {verb} at {temperature_c}°C."
                ),
            )
        }
        Phrase::MixAll {
            flour_g,
            water_g,
            salt_g,
            oil_g,
        } => pair(
            "Mix Everything",
            format!(
                "Add the remaining {flour_g}g flour, {water_g}g water, {salt_g}g salt{}. Knead until smooth.",
                en.oil_note(oil_g)
            ),
        ),
        Phrase::RestAndRise { temperature_c } => pair(
            "Bulk Rise",
            format!("Let the dough rest and rise at {temperature_c}°C."),
        ),
        Phrase::Fridge => pair(
            "Refrigerate",
            "Divide into balls, place in oiled containers and refrigerate at 4°C.".to_string(),
        ),
        Phrase::Ready => pair(
            "Ready to Stretch!",
            "The dough is ready. Stretch, top and bake!".to_string(),
        ),
    }
}
