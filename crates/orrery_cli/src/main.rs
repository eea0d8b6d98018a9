use std::cmp::max;

use clap::{Args, Parser, Subcommand, ValueEnum};
use orrery_core::{
    AnimationDriver, DEFAULT_DAY_STEP, DEFAULT_ECCENTRICITY, DEFAULT_LATITUDE_DEG,
    DEFAULT_SEMI_MAJOR_AXIS, DEFAULT_STEP_DAYS, DEFAULT_TILT_DEG, DEFAULT_YEAR_DAYS,
    DialAngles, OrreryConfig, PlotConfig, calendar_label, compute_position, format_clock_hour,
    plot_marker, sample_year, solar_state,
};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

#[derive(Parser)]
#[command(name = "orrery", version, about = "Earth orbit and daylight calculator")]
struct Cli {
    #[command(flatten)]
    orbit: OrbitArgs,

    #[command(flatten)]
    logging: LogArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug, Clone, Copy)]
struct OrbitArgs {
    /// Observer latitude in degrees, north positive
    #[arg(long, global = true, allow_hyphen_values = true, default_value_t = DEFAULT_LATITUDE_DEG)]
    latitude: f64,
    /// Axial tilt in degrees
    #[arg(long, global = true, default_value_t = DEFAULT_TILT_DEG)]
    tilt: f64,
    /// Orbital eccentricity
    #[arg(long, global = true, default_value_t = DEFAULT_ECCENTRICITY)]
    eccentricity: f64,
    /// Orbit semi-major axis in diagram units
    #[arg(long, global = true, default_value_t = DEFAULT_SEMI_MAJOR_AXIS)]
    semi_major_axis: f64,
    /// Days in the simulated year
    #[arg(long, global = true, default_value_t = DEFAULT_YEAR_DAYS)]
    year_days: f64,
}

#[derive(Args, Debug, Clone, Copy)]
struct LogArgs {
    /// Raise the log level to at least Debug
    #[arg(long, global = true, default_value_t = false)]
    debug: bool,
    /// Log level filter
    #[arg(long, global = true, default_value_t = LevelFilter::Warn)]
    log_level: LevelFilter,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CurveFormat {
    Table,
    Csv,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Earth's position on the orbit for a day of year
    Position {
        /// Fractional day of year (wraps modulo the year length)
        #[arg(long, allow_hyphen_values = true)]
        day: f64,
    },
    /// Solar declination and sunrise/sunset for a day of year
    Solar {
        /// Fractional day of year (wraps modulo the year length)
        #[arg(long, allow_hyphen_values = true)]
        day: f64,
    },
    /// Sampled sunrise/sunset curve across one year
    Curve {
        /// Days between samples
        #[arg(long, default_value_t = DEFAULT_STEP_DAYS)]
        step: u32,
        #[arg(long, value_enum, default_value_t = CurveFormat::Table)]
        format: CurveFormat,
    },
    /// Run the animation driver and print frames
    Animate {
        /// Number of ticks to run
        #[arg(long, default_value_t = 3650)]
        frames: u32,
        /// Starting day of year
        #[arg(long, allow_hyphen_values = true, default_value_t = 0.0)]
        start: f64,
        /// Days advanced per tick
        #[arg(long, default_value_t = DEFAULT_DAY_STEP)]
        day_step: f64,
        /// Print one line every N ticks
        #[arg(long, default_value_t = 100)]
        every: u32,
    },
}

fn init_logging(args: LogArgs) {
    let level = if args.debug {
        max(LevelFilter::Debug, args.log_level)
    } else {
        args.log_level
    };

    let mut builder = ConfigBuilder::new();
    builder.set_time_level(LevelFilter::Off);
    builder.set_thread_level(LevelFilter::Off);
    if args.debug {
        builder.set_target_level(LevelFilter::Error);
    } else {
        builder.set_target_level(LevelFilter::Off);
    }

    if let Err(e) = TermLogger::init(level, builder.build(), TerminalMode::Stderr, ColorChoice::Auto)
    {
        eprintln!("Failed to initialise logger: {e}");
    }
}

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

fn build_config(args: &OrbitArgs) -> OrreryConfig {
    OrreryConfig::new(
        args.year_days,
        args.tilt,
        args.latitude,
        args.semi_major_axis,
        args.eccentricity,
    )
    .unwrap_or_else(|e| fail(e))
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.logging);

    let config = build_config(&cli.orbit);
    let plot = PlotConfig::default();
    log::debug!("config: {config:?}");
    log::debug!("command: {:?}", cli.command);

    match cli.command {
        Commands::Position { day } => {
            let s = compute_position(day, &config);
            println!("Orbit position for day {day:.2} ({}):\n", calendar_label(day));
            println!("  x        {:>10.4}", s.x);
            println!("  y        {:>10.4}", s.y);
            println!("  angle    {:>10.6} rad ({:.4} deg)", s.angle_rad, s.angle_rad.to_degrees());
            println!("  radius   {:>10.4}", s.radius);
        }

        Commands::Solar { day } => {
            let s = solar_state(day, &config);
            let dial = DialAngles::from_solar(&s);
            println!(
                "Sun for day {day:.2} ({}) at {:.4} deg latitude:\n",
                calendar_label(day),
                config.latitude_deg
            );
            println!("  declination  {:>9.4} deg", s.declination_deg);
            println!(
                "  sunrise      {:>9} ({:.2} h, dial {:.1} deg)",
                format_clock_hour(s.sunrise_hour),
                s.sunrise_hour,
                dial.sunrise_deg
            );
            println!(
                "  sunset       {:>9} ({:.2} h, dial {:.1} deg)",
                format_clock_hour(s.sunset_hour),
                s.sunset_hour,
                dial.sunset_deg
            );
            println!("  day length   {:>9.2} h", s.day_length_hours);
        }

        Commands::Curve { step, format } => {
            let samples = sample_year(step, &config, &plot).unwrap_or_else(|e| fail(e));
            match format {
                CurveFormat::Csv => {
                    println!("day,day_offset_px,sunrise_y,sunset_y");
                    for s in &samples {
                        println!(
                            "{},{:.4},{:.4},{:.4}",
                            s.day, s.day_offset_px, s.sunrise_y, s.sunset_y
                        );
                    }
                }
                CurveFormat::Table => {
                    println!(
                        "{:>6}  {:>7}  {:>8}  {:>8}  {:>9}  {:>9}",
                        "day", "date", "x", "rise_y", "set_y", "sunrise"
                    );
                    for s in &samples {
                        let sun = solar_state(s.day, &config);
                        println!(
                            "{:>6.1}  {:>7}  {:>8.2}  {:>8.2}  {:>9.2}  {:>9}",
                            s.day,
                            calendar_label(s.day),
                            s.day_offset_px,
                            s.sunrise_y,
                            s.sunset_y,
                            format_clock_hour(sun.sunrise_hour)
                        );
                    }
                }
            }
        }

        Commands::Animate {
            frames,
            start,
            day_step,
            every,
        } => {
            let mut driver = AnimationDriver::new(config)
                .and_then(|d| d.with_day_step(day_step))
                .unwrap_or_else(|e| fail(e));
            driver.seek(start);
            let every = every.max(1);

            for i in 0..frames {
                let frame = driver.advance();
                if i % every != 0 {
                    continue;
                }
                let marker = plot_marker(frame.day, &config, &plot);
                println!(
                    "{:>7.2}  {:>6}  x {:>9.3}  y {:>9.3}  rise {:>5}  set {:>5}  marker {:>6.1}",
                    frame.day,
                    calendar_label(frame.day),
                    frame.orbit.x,
                    frame.orbit.y,
                    format_clock_hour(frame.solar.sunrise_hour),
                    format_clock_hour(frame.solar.sunset_hour),
                    marker.x
                );
            }
        }
    }
}
