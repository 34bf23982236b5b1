use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use itertools::Itertools;

use barload_rs::{
    bar::STANDARD_BAR_LBS, loadout::compute_plate_loadout, percentage::percentage_for_reps,
    plate::Plate, resolver::resolve_weight, template,
};

#[derive(Parser)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute a working weight from a one-rep max.
    Resolve {
        #[arg(long)]
        max: f64,
        /// Fraction of the max, e.g. 0.75. Mutually exclusive with --reps.
        #[arg(long, conflicts_with = "reps")]
        percentage: Option<f64>,
        /// Target rep count, looked up in the percentage table.
        #[arg(long)]
        reps: Option<u32>,
    },
    /// Work out which plates to put on each side of the bar.
    Load {
        #[arg(long)]
        target: f64,
        #[arg(long, default_value_t = STANDARD_BAR_LBS)]
        bar: f64,
        /// Plate inventory as WEIGHTxCOUNT entries, e.g. 45x4,25x2,2.5x2.
        /// Counts are totals over both sides.
        #[arg(long, value_delimiter = ',', value_parser = clap::value_parser!(Plate))]
        plates: Vec<Plate>,
    },
    /// Print a program template resolved against a one-rep max.
    Template {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        max: f64,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    match args.command {
        Command::Resolve {
            max,
            percentage,
            reps,
        } => {
            let percentage = match (percentage, reps) {
                (Some(p), _) => p,
                (None, Some(r)) => percentage_for_reps(r),
                (None, None) => bail!("pass either --percentage or --reps"),
            };
            println!("{} lbs", resolve_weight(max, percentage));
        }
        Command::Load {
            target,
            bar,
            plates,
        } => {
            let plates = if plates.is_empty() {
                Plate::standard_pairs()
            } else {
                plates
            };

            let loadout = compute_plate_loadout(target, bar, &plates)?;
            println!(
                "per side: [{}]",
                loadout.per_side.iter().map(ToString::to_string).join(", ")
            );
            println!("achieved: {} lbs", loadout.achieved_weight);
            if !loadout.exact {
                println!("off target by {} lbs", loadout.shortfall());
            }
        }
        Command::Template { name, max } => {
            let catalog = template::builtin_catalog().context("embedded catalog is malformed")?;
            let templates = match name {
                Some(name) => {
                    let template = catalog
                        .into_iter()
                        .find(|t| t.name.eq_ignore_ascii_case(&name))
                        .with_context(|| format!("no template named {name:?}"))?;
                    vec![template]
                }
                None => catalog,
            };

            for template in templates {
                println!("{}", template.name);
                for set in template.resolve(max) {
                    println!("  - {set}");
                }
            }
        }
    }

    Ok(())
}
