use std::path::PathBuf;

use anyhow::bail;
use clap::{Args, Parser, Subcommand};
use rave_chart::{BirthPlace, BirthRequest, ChartEngine};
use rave_ephem::{Ephemeris, MeeusSeries};
use rave_mandala::{gate_info, sign_info};
use rave_search::DesignSolver;
use rave_time::{Instant, LocalDateTime, delta_t_seconds, decimal_year};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

mod config;

use config::CliConfig;

#[derive(Parser)]
#[command(name = "rave", about = "Birth chart and Human Design calculator")]
struct Cli {
    /// TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct BirthArgs {
    /// Local date (YYYY-MM-DD)
    #[arg(long)]
    date: String,
    /// Local time (HH:MM)
    #[arg(long)]
    time: String,
    /// UTC offset in hours, e.g. -5 or 5.5
    #[arg(long, allow_negative_numbers = true, default_value = "0")]
    tz: f64,
}

#[derive(Subcommand)]
enum Commands {
    /// Full chart for a birth
    Chart {
        #[command(flatten)]
        birth: BirthArgs,
        /// Place name looked up in the config gazetteer
        #[arg(long, conflicts_with_all = ["lat", "lon"])]
        place: Option<String>,
        /// Latitude in degrees, north positive
        #[arg(long, allow_negative_numbers = true, requires = "lon")]
        lat: Option<f64>,
        /// Longitude in degrees, east positive
        #[arg(long, allow_negative_numbers = true, requires = "lat")]
        lon: Option<f64>,
        /// Altitude in meters
        #[arg(long, allow_negative_numbers = true)]
        alt: Option<f64>,
        /// Include raw longitudes and instants
        #[arg(long)]
        details: bool,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Zodiac sign from tropical longitude
    Sign {
        /// Tropical ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// Gate and line from tropical longitude
    Gate {
        /// Tropical ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// Design Instant for a birth
    Design {
        #[command(flatten)]
        birth: BirthArgs,
    },
    /// Julian Day and ΔT for a local date/time
    Jd {
        #[command(flatten)]
        birth: BirthArgs,
    },
}

fn init_logging(config: &CliConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log.filter.as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn birth_instant(birth: &BirthArgs) -> anyhow::Result<Instant> {
    let local = LocalDateTime::parse(&birth.date, &birth.time)?;
    Ok(Instant::from_local(&local, birth.tz)?)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = CliConfig::load(cli.config.as_deref())?;
    init_logging(&config);
    debug!(
        path = ?cli.config,
        places = config.places.len(),
        window_days = config.solver.window_days,
        "config loaded"
    );

    match cli.command {
        Commands::Chart {
            birth,
            place,
            lat,
            lon,
            alt,
            details,
            json,
        } => {
            let birth_place = match (place, lat, lon) {
                (Some(name), _, _) => BirthPlace::Name(name),
                (None, Some(latitude), Some(longitude)) => BirthPlace::Coordinates {
                    latitude,
                    longitude,
                    altitude: alt,
                },
                _ => bail!("give either --place or both --lat and --lon"),
            };
            let request = BirthRequest {
                birth_date: birth.date,
                birth_time: birth.time,
                birth_place,
                timezone_offset_hours: birth.tz,
            };

            let engine = ChartEngine::new(Ephemeris::<MeeusSeries>::default(), config.design_config())?;
            let chart = engine
                .calculate_request(&request, &config.gazetteer())
                .await?;
            let result = chart.to_result(details);

            if json {
                println!("{}", result.to_json_pretty()?);
                return Ok(());
            }

            let p = &chart.profile;
            println!("Sun:        {}", result.sun_sign);
            println!("Moon:       {}", result.moon_sign);
            println!("Rising:     {}", result.rising_sign);
            println!(
                "Type:       {} ({})",
                result.human_design.energy_type, result.human_design.strategy
            );
            println!("Authority:  {}", result.human_design.authority);
            println!("Profile:    {}", result.human_design.profile);
            println!("Definition: {}", result.human_design.definition);
            println!("Method:     {}", result.calculation_method.name());
            if details {
                for (label, set) in [("Personality", &p.personality), ("Design", &p.design)] {
                    println!("{label} @ {}", set.instant);
                    for a in set.activations() {
                        println!(
                            "  {:<9} {:>9.4} deg  {:<11} gate {}",
                            a.body.name(),
                            a.longitude_deg,
                            a.sign.name(),
                            a.gate_line
                        );
                    }
                }
                println!(
                    "Design residual: {:.2e} deg after {} iterations",
                    p.design_event.residual_deg, p.design_event.iterations
                );
            }
        }

        Commands::Sign { lon } => {
            let info = sign_info(lon);
            let dms = info.dms;
            println!(
                "{} - {} deg {} min {:.1} sec ({:.4} deg in sign)",
                info.sign.name(),
                dms.degrees,
                dms.minutes,
                dms.seconds,
                info.degrees_in_sign
            );
        }

        Commands::Gate { lon } => {
            let info = gate_info(lon);
            println!(
                "Gate {} line {} ({}) - gate starts at {:.4} deg, {:.4} deg in gate, {:.4} deg in line",
                info.gate_line.gate,
                info.gate_line.line,
                info.sign.name(),
                info.gate_start_deg,
                info.degrees_in_gate,
                info.degrees_in_line
            );
        }

        Commands::Design { birth } => {
            let instant = birth_instant(&birth)?;
            let solver = DesignSolver::new(config.design_config())?;
            let ephemeris = Ephemeris::<MeeusSeries>::default();
            let result = solver.solve(&ephemeris, instant);
            let approximate = result.is_approximate();
            if approximate {
                warn!(birth = %instant, "no Sun crossing in window, using fixed offset");
            }
            let event = result.into_inner();
            println!("Birth:  {instant} (Sun {:.6} deg)", event.birth_sun_longitude_deg);
            println!(
                "Design: {} (Sun {:.6} deg, target {:.6} deg)",
                event.instant, event.sun_longitude_deg, event.target_longitude_deg
            );
            println!(
                "Residual {:.2e} deg, {} iterations, {:.3} days before birth{}",
                event.residual_deg,
                event.iterations,
                event.days_before(instant),
                if approximate { " [approximate]" } else { "" }
            );
        }

        Commands::Jd { birth } => {
            let instant = birth_instant(&birth)?;
            let jd = instant.julian_day();
            println!("UTC:   {instant}");
            println!("JD:    {jd:.6}");
            println!("ΔT:    {:.2} s", delta_t_seconds(decimal_year(jd)));
            println!("JD TT: {:.6}", instant.jd_tt());
        }
    }

    Ok(())
}
