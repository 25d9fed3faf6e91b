use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mutation_planner_lib::model::board::Board;
use mutation_planner_lib::model::catalog::Catalog;
use mutation_planner_lib::model::score::ScoreReport;
use mutation_planner_lib::model::state::{Position, BOARD_SIZE};
use mutation_planner_lib::GameSession;
use planner_io::{load_app_config, load_catalog};
use std::fmt::Write as _;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Plan and simulate a mutation garden", long_about = None)]
struct Args {
    /// Catalog document (JSON)
    #[arg(long, default_value = "catalog.json")]
    catalog: PathBuf,

    /// Session settings (TOML); defaults are used when the file is missing
    #[arg(short, long, default_value = "planner.toml")]
    config: PathBuf,

    /// Log engine events at debug level, ignoring RUST_LOG
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the catalog and the active settings
    Info,
    /// Place pieces, run ticks, then print the score and export string
    Simulate {
        /// Player placement as `row,col,id`; may be repeated
        #[arg(long = "place", value_parser = parse_placement)]
        placements: Vec<(Position, u32)>,

        /// Number of ticks to run after placing
        #[arg(long, default_value_t = 0)]
        ticks: u32,
    },
    /// Decode an export string and print the board and its score
    Inspect {
        /// Export string produced by `simulate`
        export: String,
    },
}

fn parse_placement(s: &str) -> Result<(Position, u32), String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let [row, col, id] = parts.as_slice() else {
        return Err(format!("expected row,col,id but got {s:?}"));
    };
    let row: i32 = row.parse().map_err(|e| format!("bad row {row:?}: {e}"))?;
    let col: i32 = col.parse().map_err(|e| format!("bad column {col:?}: {e}"))?;
    let id: u32 = id.parse().map_err(|e| format!("bad type id {id:?}: {e}"))?;
    let pos = Position::new(row, col);
    if !pos.in_bounds() {
        return Err(format!("{pos} is outside the {BOARD_SIZE}x{BOARD_SIZE} board"));
    }
    Ok((pos, id))
}

fn main() -> Result<()> {
    let args = Args::parse();
    mutation_planner_lib::init_logging(args.verbose);

    let catalog = load_catalog(&args.catalog)
        .with_context(|| format!("Failed to load catalog {:?}", args.catalog))?;
    let config = load_app_config(&args.config)
        .with_context(|| format!("Failed to load settings {:?}", args.config))?;

    match args.command {
        Command::Info => {
            println!("Settings fingerprint: {}", config.fingerprint());
            print_catalog(&catalog);
        }
        Command::Simulate { placements, ticks } => {
            let mut session = GameSession::from_catalog(catalog, config)?;
            for (pos, id) in placements {
                if !session.place(pos, id) {
                    eprintln!("Could not place type {id} at {pos}");
                }
            }
            for _ in 0..ticks {
                let report = session.tick();
                tracing::debug!(
                    grown = report.grown,
                    spawned = report.spawned.len(),
                    rejected = report.rejected,
                    "Tick"
                );
            }
            print!("{}", render_board(session.board()));
            print_score(&session.score_param().name, &session.score());
            let export = session.export_board();
            println!("Export: {}", export.text);
            for pos in export.dropped {
                eprintln!("Not exported (type id too large): {pos}");
            }
        }
        Command::Inspect { export } => {
            let mut session = GameSession::from_catalog(catalog, config)?;
            session.import_board(&export)?;
            print!("{}", render_board(session.board()));
            print_score(&session.score_param().name, &session.score());
        }
    }
    Ok(())
}

fn print_catalog(catalog: &Catalog) {
    println!("Score parameters:");
    for index in 0..catalog.score_params().len() {
        let param = catalog.score_param(index);
        println!("  [{}] {}", param.index, param.name);
    }
    println!("Mutations:");
    for mutation in catalog.iter() {
        let conditions = mutation
            .conditions
            .iter()
            .map(|c| format!("{}x{}", c.min_count, c.required))
            .collect::<Vec<_>>()
            .join(" + ");
        println!(
            "  {:>3} {:<24} {}x{} {:<10} {:<16} {}",
            mutation.id,
            mutation.name,
            mutation.size,
            mutation.size,
            mutation.category.as_str(),
            mutation.growth.tag().unwrap_or("-"),
            if conditions.is_empty() { "-" } else { conditions.as_str() },
        );
    }
}

fn print_score(param: &str, report: &ScoreReport) {
    println!("Base yield ({param}): {:.2}", report.base_yield);
    println!("Final yield: {:.2}", report.final_yield);
}

/// One line per row; origins show their type id, the rest of a footprint `#`.
fn render_board(board: &Board) -> String {
    let mut out = String::new();
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let pos = Position::new(row, col);
            let cell = match board.piece_at(pos) {
                Some(piece) if piece.origin == pos => {
                    let mark = if piece.player_placed { "*" } else { "" };
                    format!("{}{mark}", piece.type_id)
                }
                Some(_) => "#".to_string(),
                None => ".".to_string(),
            };
            let _ = write!(out, "{cell:>5}");
        }
        out.push('\n');
    }
    out
}
