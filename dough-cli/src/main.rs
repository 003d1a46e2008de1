use std::path::PathBuf;

use anyhow::{Context, bail};
use chrono::{Local, NaiveDateTime, NaiveTime};
use clap::{Args, Parser, Subcommand, ValueEnum};
use dough_core::{
    DoughInput, FermentationMethod, FermentationPhase, Locale, MultiPhaseFermentation, STYLES,
    YeastType, build_schedule, calculate_dough, calculate_fermentation_time, flours_for_style,
    tray_weight, yeast_conversions,
};
use serde::Serialize;
use tracing::debug;

mod recipe;
mod render;

use recipe::SavedRecipe;

/// Yeast CLI enum mirrors dough-core (derive for Clap).
#[derive(Copy, Clone, Debug, PartialEq, ValueEnum)]
enum YeastFlag {
    Fresh,
    Dry,
    Sourdough,
}

impl From<YeastFlag> for YeastType {
    fn from(y: YeastFlag) -> Self {
        match y {
            YeastFlag::Fresh => YeastType::Fresh,
            YeastFlag::Dry => YeastType::Dry,
            YeastFlag::Sourdough => YeastType::Sourdough,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, ValueEnum)]
enum MethodFlag {
    Direct,
    Poolish,
    Biga,
}

impl From<MethodFlag> for FermentationMethod {
    fn from(m: MethodFlag) -> Self {
        match m {
            MethodFlag::Direct => FermentationMethod::Direct,
            MethodFlag::Poolish => FermentationMethod::Poolish,
            MethodFlag::Biga => FermentationMethod::Biga,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, ValueEnum)]
enum LangFlag {
    It,
    En,
}

impl From<LangFlag> for Locale {
    fn from(l: LangFlag) -> Self {
        match l {
            LangFlag::It => Locale::It,
            LangFlag::En => Locale::En,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "dough-cli",
    about = "Pizza dough ingredients and fermentation schedule from baker's percentages.",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    plan: PlanArgs,

    /// Debug logging (RUST_LOG overrides)
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Ingredients and schedule (default)
    Plan(PlanArgs),
    /// Convert an amount of yeast into every yeast type
    Convert {
        /// Grams of yeast
        amount: f64,
        #[arg(long, value_enum, default_value_t = YeastFlag::Fresh)]
        from: YeastFlag,
    },
    /// Fermentation hours for a given yeast percentage
    Time {
        /// Yeast as % of flour weight
        #[arg(long)]
        yeast_percent: f64,
        #[arg(long, default_value_t = 20.0)]
        temp: f64,
        #[arg(long, value_enum, default_value_t = YeastFlag::Fresh)]
        yeast: YeastFlag,
    },
    /// Dough weight for a rectangular tray
    Tray {
        /// Width in cm
        width: f64,
        /// Height in cm
        height: f64,
    },
    /// List pizza styles
    Styles,
    /// List flours, optionally only those suited to a style
    Flours {
        #[arg(long)]
        style: Option<String>,
    },
}

#[derive(Args, Debug, Clone)]
struct PlanArgs {
    /// Start from a style's recommended values
    #[arg(long)]
    style: Option<String>,

    /// Flour id (informational, see `flours`)
    #[arg(long)]
    flour: Option<String>,

    /// Number of balls [default: 4]
    #[arg(long)]
    balls: Option<u32>,

    /// Dough ball weight in grams [default: 250]
    #[arg(long)]
    ball_weight: Option<f64>,

    /// Tray size WxH in cm; replaces balls with one tray
    #[arg(long, value_parser = parse_tray)]
    tray: Option<(f64, f64)>,

    /// Hydration, % of flour [default: 65]
    #[arg(long)]
    hydration: Option<f64>,

    /// Salt, % of flour [default: 2.8]
    #[arg(long)]
    salt: Option<f64>,

    /// Oil, % of flour [default: 0]
    #[arg(long)]
    oil: Option<f64>,

    /// Sugar, % of flour [default: 0]
    #[arg(long)]
    sugar: Option<f64>,

    /// Diastatic malt, % of flour [default: 0]
    #[arg(long)]
    malt: Option<f64>,

    /// Yeast type [default: fresh]
    #[arg(long, value_enum)]
    yeast: Option<YeastFlag>,

    /// Fermentation temperature in °C [default: 22]
    #[arg(long)]
    temp: Option<f64>,

    /// Total fermentation hours (mix → ready) [default: 24]
    #[arg(long)]
    hours: Option<f64>,

    /// Fermentation method [default: direct]
    #[arg(long, value_enum)]
    method: Option<MethodFlag>,

    /// Room phase TEMP:HOURS (enables multi-phase)
    #[arg(long, value_parser = parse_phase)]
    room: Option<FermentationPhase>,

    /// Fridge phase TEMP:HOURS (enables multi-phase)
    #[arg(long, value_parser = parse_phase)]
    cold: Option<FermentationPhase>,

    /// Temper phase TEMP:HOURS (enables multi-phase)
    #[arg(long, value_parser = parse_phase)]
    temper: Option<FermentationPhase>,

    /// Start time HH:MM (optional); defaults to now
    #[arg(long)]
    start: Option<String>,

    /// Language of the schedule steps
    #[arg(long, value_enum, default_value_t = LangFlag::It)]
    lang: LangFlag,

    /// Print JSON instead of tables
    #[arg(long)]
    json: bool,

    /// Load a saved recipe before applying CLI overrides
    #[arg(long)]
    load: Option<PathBuf>,

    /// Save the effective recipe to a JSON file
    #[arg(long)]
    save: Option<PathBuf>,

    /// Name stored with --save
    #[arg(long)]
    name: Option<String>,
}

fn parse_phase(s: &str) -> Result<FermentationPhase, String> {
    let (temp, hours) = s
        .split_once(':')
        .ok_or_else(|| format!("expected TEMP:HOURS, got `{s}`"))?;
    let temp: f64 = temp.trim().parse().map_err(|_| format!("bad temperature `{temp}`"))?;
    let hours: f64 = hours.trim().parse().map_err(|_| format!("bad duration `{hours}`"))?;
    if hours < 0.0 {
        return Err("phase duration must be >= 0".into());
    }
    Ok(FermentationPhase::new(temp, hours))
}

fn parse_tray(s: &str) -> Result<(f64, f64), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got `{s}`"))?;
    let w: f64 = w.trim().parse().map_err(|_| format!("bad width `{w}`"))?;
    let h: f64 = h.trim().parse().map_err(|_| format!("bad height `{h}`"))?;
    if w <= 0.0 || h <= 0.0 {
        return Err("tray sides must be > 0".into());
    }
    Ok((w, h))
}

/// Saved recipe, then style, then every flag given on the command line (CLI wins).
fn build_input(args: &PlanArgs) -> anyhow::Result<DoughInput> {
    let mut input = match &args.load {
        Some(path) => recipe::load(path)?.input,
        None => DoughInput::default(),
    };
    if let Some(style) = &args.style {
        input.apply_style_id(style)?;
    }

    macro_rules! take {
        ($field:ident => $target:ident) => {
            if let Some(value) = args.$field {
                input.$target = value.into();
            }
        };
    }

    take!(balls => number_of_balls);
    take!(ball_weight => ball_weight);
    take!(hydration => hydration);
    take!(salt => salt);
    take!(oil => oil);
    take!(sugar => sugar);
    take!(malt => malt);
    take!(yeast => yeast_type);
    take!(temp => temperature_c);
    take!(hours => fermentation_time_h);
    take!(method => fermentation_method);

    if let Some(flour) = &args.flour {
        input.flour_id = flour.clone();
    }

    if let Some((w, h)) = args.tray {
        input.number_of_balls = 1;
        input.ball_weight = tray_weight(w, h);
    }

    if args.room.is_some() || args.cold.is_some() || args.temper.is_some() {
        let room_temp = input.temperature_c;
        input.multi_phase = Some(MultiPhaseFermentation::new(
            args.room.unwrap_or(FermentationPhase::new(room_temp, 0.0)),
            args.cold.unwrap_or(FermentationPhase::new(4.0, 0.0)),
            args.temper.unwrap_or(FermentationPhase::new(room_temp, 0.0)),
        ));
    }

    input.validate().context("Invalid dough parameters")?;
    Ok(input)
}

fn start_time(start: Option<&str>) -> anyhow::Result<NaiveDateTime> {
    let now = Local::now().naive_local();
    match start {
        Some(hhmm) => {
            let t = NaiveTime::parse_from_str(hhmm, "%H:%M")
                .with_context(|| format!("Invalid start time `{hhmm}`, expected HH:MM"))?;
            Ok(now.date().and_time(t))
        }
        None => Ok(now),
    }
}

#[derive(Serialize)]
struct PlanOutput<'a> {
    input: &'a DoughInput,
    result: &'a dough_core::DoughResult,
    schedule: &'a dough_core::FermentationSchedule,
}

fn plan(args: &PlanArgs) -> anyhow::Result<()> {
    let input = build_input(args)?;
    let result = calculate_dough(&input);
    let now = start_time(args.start.as_deref())?;
    let schedule = build_schedule(&input, &result, now, args.lang.into());
    debug!(?input, "effective input");

    if let Some(path) = &args.save {
        let name = args.name.clone().unwrap_or_else(|| input.style_id.clone());
        recipe::save(path, &SavedRecipe::new(name, input.clone(), result))?;
        if !args.json {
            println!("Recipe saved to {}", path.display());
        }
    }

    if args.json {
        let out = PlanOutput {
            input: &input,
            result: &result,
            schedule: &schedule,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("\n=== Ingredients ===");
    println!("{}", render::ingredients(&input, &result));

    if let Some(pre) = &schedule.pre_ferment {
        println!("\n=== {} ===", schedule.method);
        println!("{}", render::preferment(pre));
    }

    println!("\n=== Schedule ===");
    println!("{}", render::schedule(&schedule));

    if let Some(mp) = input.active_multi_phase() {
        println!(
            "\nMulti-phase: {:.1} h total, {:.1} h equivalent at 20°C.",
            mp.total_hours(),
            dough_core::calculate_equivalent_time(&mp.phases())
        );
    }

    println!("\nNotes:");
    println!("• Yeast amounts are heuristic: activity doubles every +5°C (reference 0.1% fresh at 20°C/24h).");
    println!("• Per-ball weights are rounded on their own and may not add up exactly to the totals.");
    Ok(())
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let default = if verbose {
        "dough_cli=debug,dough_core=debug"
    } else {
        "dough_cli=warn,dough_core=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        None => plan(&cli.plan),
        Some(Command::Plan(args)) => plan(&args),
        Some(Command::Convert { amount, from }) => {
            if amount < 0.0 {
                bail!("amount must be >= 0");
            }
            let c = yeast_conversions(amount, from.into());
            println!("{}", render::conversions(amount, from.into(), &c));
            Ok(())
        }
        Some(Command::Time {
            yeast_percent,
            temp,
            yeast,
        }) => {
            if yeast_percent <= 0.0 {
                bail!("yeast-percent must be > 0");
            }
            let hours = calculate_fermentation_time(temp, yeast_percent, yeast.into());
            println!("{hours:.1} h at {temp}°C with {yeast_percent}% {}", YeastType::from(yeast));
            Ok(())
        }
        Some(Command::Tray { width, height }) => {
            println!("{}", render::fmt_g(tray_weight(width, height)));
            Ok(())
        }
        Some(Command::Styles) => {
            println!("{}", render::styles(STYLES));
            Ok(())
        }
        Some(Command::Flours { style }) => {
            let list = flours_for_style(style.as_deref().unwrap_or("custom"));
            println!("{}", render::flours(&list));
            Ok(())
        }
    }
}
