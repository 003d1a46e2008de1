use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dough::{DoughInput, DoughResult, FermentationMethod, MultiPhaseFermentation};
use crate::locale::{Locale, Phrase};
use crate::preferment::{PreFermentResult, calculate_biga, calculate_poolish};
use crate::yeast::YeastType;

const MS_PER_HOUR: f64 = 3_600_000.0;
/// Pre-ferment takes half the total time, up to this many hours.
const MAX_PREFERMENT_H: f64 = 18.0;
/// Above this, the dough spends most of its time in the fridge.
const FRIDGE_THRESHOLD_H: f64 = 12.0;
/// Fridge temperature assumed by the single-phase schedules.
const FRIDGE_C: f64 = 4.0;

/// One timestamped thing to do.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FermentationStep {
    pub at: NaiveDateTime,
    /// `at` as `HH:MM`.
    pub time: String,
    pub action: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FermentationSchedule {
    pub method: FermentationMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_ferment: Option<PreFermentResult>,
    pub total_yeast: f64,
    pub yeast_type: YeastType,
    pub steps: Vec<FermentationStep>,
}

impl FermentationSchedule {
    pub fn ready_at(&self) -> Option<NaiveDateTime> {
        self.steps.last().map(|s| s.at)
    }
}

/// Shift by fractional hours at millisecond precision. Saturates at the
/// ends of the calendar; NaN leaves `at` unchanged.
fn add_hours(at: NaiveDateTime, hours: f64) -> NaiveDateTime {
    let ms = (hours * MS_PER_HOUR).round();
    if ms.is_nan() {
        return at;
    }
    let limit = if ms < 0.0 {
        NaiveDateTime::MIN
    } else {
        NaiveDateTime::MAX
    };
    // `as` saturates out-of-range floats to i64::MIN/MAX.
    Duration::try_milliseconds(ms as i64)
        .and_then(|delta| at.checked_add_signed(delta))
        .unwrap_or(limit)
}

/// Collects steps in order, rendering each phrase with the chosen locale.
struct StepWriter {
    locale: Locale,
    steps: Vec<FermentationStep>,
}

impl StepWriter {
    fn new(locale: Locale) -> Self {
        Self {
            locale,
            steps: Vec::new(),
        }
    }

    fn push(&mut self, at: NaiveDateTime, phrase: Phrase) {
        let (action, description) = self.locale.render(&phrase);
        self.steps.push(FermentationStep {
            at,
            time: at.format("%H:%M").to_string(),
            action,
            description,
        });
    }

    fn finish(self) -> Vec<FermentationStep> {
        self.steps
    }
}

/// Build the preparation timeline so the dough is ready at
/// `now + fermentation time` (or `now + sum of phases` for multi-phase).
///
/// `result` must come from `calculate_dough(input)`.
pub fn build_schedule(
    input: &DoughInput,
    result: &DoughResult,
    now: NaiveDateTime,
    locale: Locale,
) -> FermentationSchedule {
    let schedule = if let Some(mp) = input.active_multi_phase() {
        let ready = add_hours(now, mp.total_hours());
        build_multi_phase(input, result, mp, ready, locale)
    } else {
        let ready = add_hours(now, input.fermentation_time_h);
        match input.fermentation_method {
            FermentationMethod::Direct => build_direct(input, result, ready, locale),
            method => build_preferment(input, result, method, ready, locale),
        }
    };

    debug!(
        method = %schedule.method,
        steps = schedule.steps.len(),
        ready = ?schedule.ready_at(),
        "built fermentation schedule"
    );
    schedule
}

fn knead(input: &DoughInput, result: &DoughResult) -> Phrase {
    Phrase::Knead {
        yeast_g: result.amounts.yeast,
        yeast_type: input.yeast_type,
        oil_g: result.amounts.oil,
    }
}

fn build_direct(
    input: &DoughInput,
    result: &DoughResult,
    ready: NaiveDateTime,
    locale: Locale,
) -> FermentationSchedule {
    let total_h = input.fermentation_time_h;
    let start = add_hours(ready, -total_h);
    let mut w = StepWriter::new(locale);

    w.push(start, knead(input, result));

    if total_h > FRIDGE_THRESHOLD_H {
        let room_h = (total_h * 0.1).min(2.0);
        w.push(
            add_hours(start, room_h),
            Phrase::RoomBulk {
                temperature_c: input.temperature_c,
                hours: room_h.round(),
                approximate: true,
            },
        );
        w.push(
            add_hours(start, room_h + 1.0),
            Phrase::DivideAndFridge {
                balls: input.number_of_balls,
                ball_weight: input.ball_weight,
                fridge_c: FRIDGE_C,
                hours: None,
            },
        );
        w.push(add_hours(ready, -2.0), Phrase::RemoveFromFridge { hours: 2.0 });
    } else {
        w.push(
            add_hours(start, 1.0),
            Phrase::BulkRise {
                temperature_c: input.temperature_c,
            },
        );
        w.push(
            add_hours(ready, -1.0),
            Phrase::Divide {
                balls: input.number_of_balls,
                ball_weight: input.ball_weight,
            },
        );
    }

    w.push(ready, Phrase::Ready);

    FermentationSchedule {
        method: FermentationMethod::Direct,
        pre_ferment: None,
        total_yeast: result.amounts.yeast,
        yeast_type: input.yeast_type,
        steps: w.finish(),
    }
}

fn build_preferment(
    input: &DoughInput,
    result: &DoughResult,
    method: FermentationMethod,
    ready: NaiveDateTime,
    locale: Locale,
) -> FermentationSchedule {
    let preferment_h = (input.fermentation_time_h * 0.5).min(MAX_PREFERMENT_H);
    let calc: fn(f64, f64, f64) -> PreFermentResult = match method {
        FermentationMethod::Biga => calculate_biga,
        _ => calculate_poolish,
    };
    let pre = calc(result.amounts.flour, input.temperature_c, preferment_h);

    let start = add_hours(ready, -input.fermentation_time_h);
    let preferment_end = add_hours(start, preferment_h);
    let mut w = StepWriter::new(locale);

    w.push(
        start,
        Phrase::PrepareFerment {
            method,
            flour_g: pre.flour,
            water_g: pre.water,
            yeast_g: pre.yeast,
            temperature_c: input.temperature_c,
        },
    );
    w.push(
        preferment_end,
        Phrase::MixAll {
            flour_g: result.amounts.flour - pre.flour,
            water_g: result.amounts.water - pre.water,
            salt_g: result.amounts.salt,
            oil_g: result.amounts.oil,
        },
    );
    w.push(
        add_hours(preferment_end, 0.5),
        Phrase::RestAndRise {
            temperature_c: input.temperature_c,
        },
    );

    if input.fermentation_time_h > FRIDGE_THRESHOLD_H {
        w.push(add_hours(preferment_end, 2.0), Phrase::Fridge);
        w.push(add_hours(ready, -2.0), Phrase::RemoveFromFridge { hours: 2.0 });
    } else {
        w.push(
            add_hours(ready, -1.0),
            Phrase::Divide {
                balls: input.number_of_balls,
                ball_weight: input.ball_weight,
            },
        );
    }
    w.push(ready, Phrase::Ready);

    FermentationSchedule {
        method,
        pre_ferment: Some(pre),
        total_yeast: pre.yeast,
        yeast_type: YeastType::Fresh,
        steps: w.finish(),
    }
}

fn build_multi_phase(
    input: &DoughInput,
    result: &DoughResult,
    mp: &MultiPhaseFermentation,
    ready: NaiveDateTime,
    locale: Locale,
) -> FermentationSchedule {
    let start = add_hours(ready, -mp.total_hours());
    let room_end = add_hours(start, mp.room.duration_h);
    let cold_end = add_hours(room_end, mp.cold.duration_h);
    let mut w = StepWriter::new(locale);

    w.push(start, knead(input, result));

    if mp.room.duration_h > 0.0 {
        w.push(
            add_hours(start, 0.5),
            Phrase::RoomBulk {
                temperature_c: mp.room.temperature_c,
                hours: mp.room.duration_h,
                approximate: false,
            },
        );
    }

    w.push(
        room_end,
        Phrase::DivideAndFridge {
            balls: input.number_of_balls,
            ball_weight: input.ball_weight,
            fridge_c: mp.cold.temperature_c,
            hours: Some(mp.cold.duration_h),
        },
    );

    if mp.temper.duration_h > 0.0 {
        w.push(
            cold_end,
            Phrase::RemoveFromFridge {
                hours: mp.temper.duration_h,
            },
        );
    }

    w.push(ready, Phrase::Ready);

    FermentationSchedule {
        method: FermentationMethod::Direct,
        pre_ferment: None,
        total_yeast: result.amounts.yeast,
        yeast_type: input.yeast_type,
        steps: w.finish(),
    }
}
