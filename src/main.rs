use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use stopwise::types::{Axis, Exposure, StopScale};
use stopwise::{config, ev, output, solve};

/// Metered starting exposure, shared by every solve command.
#[derive(clap::Args, Clone)]
struct BaseArgs {
    /// Metered shutter speed (e.g. "1/125", "2", or "30\"")
    #[arg(value_name = "SHUTTER")]
    base_shutter: String,

    /// Metered aperture (e.g. "f/8")
    #[arg(value_name = "APERTURE")]
    base_aperture: String,

    /// Metered ISO (e.g. "100")
    #[arg(value_name = "ISO")]
    base_iso: String,
}

impl BaseArgs {
    fn exposure(self) -> Exposure {
        Exposure::new(self.base_shutter, self.base_aperture, self.base_iso)
    }
}

fn version_string() -> &'static str {
    let hash = env!("GIT_HASH");
    if hash.is_empty() {
        env!("CARGO_PKG_VERSION")
    } else {
        // Leaked once at startup — trivial, called exactly once
        Box::leak(format!("{} ({hash})", env!("CARGO_PKG_VERSION")).into_boxed_str())
    }
}

#[derive(Parser)]
#[command(name = "stopwise")]
#[command(about = "Exposure triangle calculator for photographers")]
#[command(long_about = "\
Exposure triangle calculator for photographers

Give stopwise your metered exposure, tell it which two settings you are
changing, and it solves the third so the frame keeps the same brightness.
Results snap to the real detents cameras offer (full, half, or third
stops), never to arbitrary decimals.

Examples:

  # Metered 1/125 f/8 ISO 100; stopping down to f/11 for depth of field.
  # What shutter speed keeps the exposure?
  stopwise shutter 1/125 f/8 100 --aperture f/11 --iso 100
      Shutter speed: 1/60

  # Same meter, freezing motion at 1/250 instead. Which aperture?
  stopwise aperture 1/125 f/8 100 --shutter 1/250 --iso 100
      Aperture: f/5.6

  # Dusk portrait on a half-stop body, brightened one stop on purpose.
  stopwise iso 1/60 f/2.8 400 --shutter 1/125 --aperture f/2.8 --scale half --ev 1
      ISO: 1600

Notation: shutter speeds as 1/250, 2, or 30\"; apertures as f/8; ISO as
plain numbers. EV compensation is in stops, positive = more light.

Run 'stopwise gen-config' to generate a documented stopwise.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Stop scale for solved values and tables: full, half, or third
    #[arg(long, global = true, value_name = "SCALE")]
    scale: Option<StopScale>,

    /// EV compensation in stops; positive shifts toward more light
    #[arg(long, global = true, value_name = "STOPS", allow_negative_numbers = true)]
    ev: Option<f64>,

    /// Emit machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Config file to read instead of ./stopwise.toml
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Solve the shutter speed after the aperture and ISO change
    Shutter {
        #[command(flatten)]
        base: BaseArgs,
        /// New aperture (e.g. "f/11")
        #[arg(long, value_name = "F-NUMBER")]
        aperture: String,
        /// New ISO (e.g. "200")
        #[arg(long, value_name = "ISO")]
        iso: String,
    },
    /// Solve the aperture after the shutter speed and ISO change
    Aperture {
        #[command(flatten)]
        base: BaseArgs,
        /// New shutter speed (e.g. "1/250")
        #[arg(long, value_name = "SPEED")]
        shutter: String,
        /// New ISO (e.g. "200")
        #[arg(long, value_name = "ISO")]
        iso: String,
    },
    /// Solve the ISO after the shutter speed and aperture change
    Iso {
        #[command(flatten)]
        base: BaseArgs,
        /// New shutter speed (e.g. "1/250")
        #[arg(long, value_name = "SPEED")]
        shutter: String,
        /// New aperture (e.g. "f/11")
        #[arg(long, value_name = "F-NUMBER")]
        aperture: String,
    },
    /// Show the ISO-adjusted exposure value of a metered setting
    Ev {
        #[command(flatten)]
        base: BaseArgs,
        /// Compare against a second exposure (three values)
        #[arg(long, num_args = 3, value_names = ["SHUTTER", "APERTURE", "ISO"])]
        versus: Option<Vec<String>>,
    },
    /// List the canonical value tables
    Tables {
        /// Which table: shutter, aperture, iso, or all
        #[arg(default_value = "all", value_name = "TABLE")]
        table: TableChoice,
    },
    /// Print a stock stopwise.toml with all options documented
    GenConfig,
}

/// Table selection for the `tables` command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TableChoice {
    Shutter,
    Aperture,
    Iso,
    All,
}

impl TableChoice {
    fn selection(self) -> Option<Axis> {
        match self {
            TableChoice::Shutter => Some(Axis::Shutter),
            TableChoice::Aperture => Some(Axis::Aperture),
            TableChoice::Iso => Some(Axis::Iso),
            TableChoice::All => None,
        }
    }
}

impl std::str::FromStr for TableChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "shutter" => Ok(TableChoice::Shutter),
            "aperture" => Ok(TableChoice::Aperture),
            "iso" => Ok(TableChoice::Iso),
            "all" => Ok(TableChoice::All),
            other => Err(format!(
                "unknown table {other:?} (expected shutter, aperture, iso, or all)"
            )),
        }
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let file = match &cli.config {
        Some(path) => config::read_config_file(path)?,
        None => config::load_config(Path::new("."))?,
    };
    let scale = cli.scale.unwrap_or(file.defaults.scale);
    let ev_compensation = cli.ev.unwrap_or(file.defaults.ev);
    let json = cli.json || file.defaults.json;

    match cli.command {
        Command::Shutter {
            base,
            aperture,
            iso,
        } => {
            let base = base.exposure();
            let solution =
                solve::solve_shutter_speed(&base, &aperture, &iso, scale, ev_compensation)?;
            let report =
                output::solve_report(&base, [&aperture, &iso], &solution, scale, ev_compensation);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                output::print_solve(&report);
            }
        }
        Command::Aperture { base, shutter, iso } => {
            let base = base.exposure();
            let solution =
                solve::solve_aperture(&base, &shutter, &iso, scale, ev_compensation)?;
            let report =
                output::solve_report(&base, [&shutter, &iso], &solution, scale, ev_compensation);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                output::print_solve(&report);
            }
        }
        Command::Iso {
            base,
            shutter,
            aperture,
        } => {
            let base = base.exposure();
            let solution =
                solve::solve_iso(&base, &shutter, &aperture, scale, ev_compensation)?;
            let report = output::solve_report(
                &base,
                [&shutter, &aperture],
                &solution,
                scale,
                ev_compensation,
            );
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                output::print_solve(&report);
            }
        }
        Command::Ev { base, versus } => {
            let exposure = base.exposure();
            let value = ev::ev100(&exposure)?;
            let comparison = match versus {
                Some(parts) => {
                    // clap enforces exactly three values via num_args
                    let second =
                        Exposure::new(parts[0].as_str(), parts[1].as_str(), parts[2].as_str());
                    let second_ev = ev::ev100(&second)?;
                    Some((second, second_ev))
                }
                None => None,
            };
            let report = output::ev_report(exposure, value, comparison);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                output::print_ev(&report);
            }
        }
        Command::Tables { table } => {
            let report = output::tables_report(scale, table.selection());
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                output::print_tables(&report);
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn table_choice_parses_and_selects() {
        assert_eq!("all".parse::<TableChoice>().unwrap(), TableChoice::All);
        assert_eq!(
            "shutter".parse::<TableChoice>().unwrap().selection(),
            Some(Axis::Shutter)
        );
        assert_eq!(TableChoice::All.selection(), None);
        assert!("apertures".parse::<TableChoice>().is_err());
    }
}
