use comfy_table::{Attribute, Cell, ContentArrangement, Table, presets::UTF8_FULL};
use dough_core::{
    DoughInput, DoughResult, FermentationSchedule, FlourType, PizzaStyle, PreFermentResult,
    ServingMode, YeastConversions, YeastType,
};

pub fn fmt_g(x: f64) -> String {
    let v = (x * 10.0).round() / 10.0;
    if (v - v.round()).abs() < 1e-9 {
        format!("{:.0} g", v)
    } else {
        format!("{:.1} g", v)
    }
}

fn table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(
            header
                .iter()
                .map(|h| Cell::new(h).add_attribute(Attribute::Bold))
                .collect::<Vec<_>>(),
        );
    table
}

fn yeast_name(y: YeastType) -> &'static str {
    match y {
        YeastType::Fresh => "Fresh yeast",
        YeastType::Dry => "Dry yeast",
        YeastType::Sourdough => "Sourdough starter",
    }
}

pub fn ingredients(input: &DoughInput, r: &DoughResult) -> Table {
    let mut t = table(&["Ingredient", "Total", "Per ball", "Notes"]);
    let pct = |p: f64| format!("{p}%");

    t.add_row(vec![
        Cell::new("Balls"),
        Cell::new(format!("{} × {:.0} g", input.number_of_balls, input.ball_weight)),
        Cell::new(""),
        Cell::new(format!("{} total", fmt_g(r.total_weight))),
    ]);
    t.add_row(vec![
        Cell::new("Flour"),
        Cell::new(fmt_g(r.amounts.flour)),
        Cell::new(fmt_g(r.per_ball.flour)),
        Cell::new(&input.flour_id),
    ]);

    let rows = [
        ("Water", r.amounts.water, r.per_ball.water, input.hydration),
        ("Salt", r.amounts.salt, r.per_ball.salt, input.salt),
        ("Oil", r.amounts.oil, r.per_ball.oil, input.oil),
        ("Sugar", r.amounts.sugar, r.per_ball.sugar, input.sugar),
        ("Malt", r.amounts.malt, r.per_ball.malt, input.malt),
    ];
    for (name, total, per_ball, percent) in rows {
        if name != "Water" && name != "Salt" && total == 0.0 {
            continue;
        }
        t.add_row(vec![
            Cell::new(name),
            Cell::new(fmt_g(total)),
            Cell::new(fmt_g(per_ball)),
            Cell::new(pct(percent)),
        ]);
    }

    t.add_row(vec![
        Cell::new(yeast_name(r.yeast_type)),
        Cell::new(fmt_g(r.amounts.yeast)),
        Cell::new(fmt_g(r.per_ball.yeast)),
        Cell::new(format!("{:.3}% of flour", input.yeast_percent())),
    ]);
    t
}

pub fn preferment(p: &PreFermentResult) -> Table {
    let mut t = table(&["Pre-ferment", "Amount"]);
    t.add_row(vec![Cell::new("Flour"), Cell::new(fmt_g(p.flour))]);
    t.add_row(vec![Cell::new("Water"), Cell::new(fmt_g(p.water))]);
    t.add_row(vec![Cell::new("Fresh yeast"), Cell::new(fmt_g(p.yeast))]);
    t.add_row(vec![
        Cell::new("Time"),
        Cell::new(format!("{:.1} h", p.fermentation_time_h)),
    ]);
    t
}

pub fn schedule(s: &FermentationSchedule) -> Table {
    let mut t = table(&["When", "Step", "What to do"]);
    for step in &s.steps {
        t.add_row(vec![
            Cell::new(step.at.format("%a %H:%M")),
            Cell::new(&step.action),
            Cell::new(&step.description),
        ]);
    }
    t
}

pub fn conversions(amount: f64, from: YeastType, c: &YeastConversions) -> Table {
    let mut t = table(&["Yeast", "Equivalent"]);
    for (y, grams) in [
        (YeastType::Fresh, c.fresh),
        (YeastType::Dry, c.dry),
        (YeastType::Sourdough, c.sourdough),
    ] {
        let note = if y == from {
            format!("{} (input: {})", fmt_g(grams), fmt_g(amount))
        } else {
            fmt_g(grams)
        };
        t.add_row(vec![Cell::new(yeast_name(y)), Cell::new(note)]);
    }
    t
}

pub fn styles(list: &[PizzaStyle]) -> Table {
    let mut t = table(&["Id", "Style", "Hydration", "Ball / tray", "Hours", "Temp"]);
    for s in list {
        let portion = match (s.serving_mode, s.tray_default_cm) {
            (ServingMode::Tray, Some((w, h))) => format!("tray {w}×{h} cm"),
            _ => format!("{:.0}-{:.0} g", s.ball_weight.min, s.ball_weight.max),
        };
        t.add_row(vec![
            Cell::new(s.id),
            Cell::new(s.name),
            Cell::new(format!("{}-{}%", s.hydration.min, s.hydration.max)),
            Cell::new(portion),
            Cell::new(format!("{}-{} h", s.fermentation_h.min, s.fermentation_h.max)),
            Cell::new(format!("{}°C", s.recommended_temp_c)),
        ]);
    }
    t
}

pub fn flours(list: &[&FlourType]) -> Table {
    let mut t = table(&["Id", "Flour", "W", "Protein", "P/L", "Notes"]);
    for f in list {
        t.add_row(vec![
            Cell::new(f.id),
            Cell::new(f.name),
            Cell::new(format!("{}-{}", f.w.min, f.w.max)),
            Cell::new(format!("{}-{}%", f.protein.min, f.protein.max)),
            Cell::new(f.pl),
            Cell::new(f.description),
        ]);
    }
    t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_g() {
        assert_eq!(fmt_g(596.0), "596 g");
        assert_eq!(fmt_g(0.6), "0.6 g");
        assert_eq!(fmt_g(2.04), "2 g");
    }
}
