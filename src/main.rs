mod config;
mod storage;

use std::path::{Path, PathBuf};

use board::catalog::{FigureCatalog, Upsert};
use board::doc::EntityId;
use board::engine::{Action, EngineCore};
use board::geom::Point;
use clap::{Parser, Subcommand};
use config::{AppConfig, ConfigError};
use serde::Serialize;
use storage::{BoardStore, StorageError};
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
    #[error("tile `{0}` is not in the catalog")]
    UnknownTile(String),
    #[error("figure `{0}` is not in the figure catalog")]
    UnknownFigure(String),
    #[error("nothing placed with id {0}")]
    UnknownPlacement(EntityId),
    #[error("snap threshold must be positive, got {0}")]
    InvalidThreshold(f64),
    #[error("catalog has {0} invalid tile definition(s)")]
    InvalidCatalog(usize),
}

#[derive(Parser, Debug)]
#[command(name = "hexboard", about = "Assemble hex map tiles into a board and snap them door to door")]
struct Cli {
    /// Tile catalog: a JSON array of tile definitions.
    #[arg(long, env = "HEXBOARD_CATALOG", default_value = "tiles.json")]
    catalog: PathBuf,

    /// Directory holding saved board layouts.
    #[arg(long, env = "HEXBOARD_STATE_DIR", default_value = ".")]
    state_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the tiles in the catalog.
    Tiles,
    /// Check every catalog entry for structural problems.
    Validate,
    /// Print the saved board as JSON.
    Show,
    /// Drop a catalog tile centered on a board point.
    Place {
        tile_id: String,
        #[arg(long, allow_negative_numbers = true)]
        x: f64,
        #[arg(long, allow_negative_numbers = true)]
        y: f64,
    },
    /// Move a placed tile's top-left corner, snapping doors unless told not to.
    Move {
        id: EntityId,
        #[arg(long, allow_negative_numbers = true)]
        x: f64,
        #[arg(long, allow_negative_numbers = true)]
        y: f64,
        #[arg(long, default_value_t = false)]
        no_snap: bool,
    },
    /// Turn a placed tile 60 degrees clockwise.
    Rotate { id: EntityId },
    /// Print the board-space door positions of a placed tile.
    Doors { id: EntityId },
    /// Snap a placed tile to the nearest door in range, where it lies now.
    Snap {
        id: EntityId,
        #[arg(long)]
        threshold: Option<f64>,
    },
    /// Remove a placed tile or figure.
    Remove { id: EntityId },
    /// Upsert a tile definition file into the catalog.
    SaveTile { file: PathBuf },
    /// Drop a figure from a figure catalog centered on a board point.
    Figure {
        figure_catalog: PathBuf,
        figure_id: String,
        #[arg(long, allow_negative_numbers = true)]
        x: f64,
        #[arg(long, allow_negative_numbers = true)]
        y: f64,
    },
}

/// One CLI invocation's view of the saved board.
struct Session {
    store: BoardStore,
    session_key: String,
    core: EngineCore,
}

impl Session {
    fn open(catalog: &Path, state_dir: &Path, config: AppConfig, figures: FigureCatalog) -> Result<Self, CliError> {
        let tiles = storage::load_tile_catalog(catalog)?;
        let store = BoardStore::new(state_dir);
        let mut core = EngineCore::new(tiles, figures).with_settings(config.engine);
        core.load_snapshot(store.load(&config.session_key)?);
        Ok(Self { store, session_key: config.session_key, core })
    }

    fn commit(&self, actions: &[Action]) -> Result<(), CliError> {
        for action in actions {
            tracing::debug!(?action, "engine action");
        }
        self.store.save(&self.session_key, &self.core.board)?;
        Ok(())
    }
}

fn main() -> Result<(), CliError> {
    init_tracing();

    let Cli { catalog, state_dir, command } = Cli::parse();
    let config = AppConfig::from_env()?;
    tracing::debug!(session_key = %config.session_key, catalog = %catalog.display(), "starting");

    match command {
        Command::Tiles => run_tiles(&catalog),
        Command::Validate => run_validate(&catalog),
        Command::Show => {
            let board = BoardStore::new(&state_dir).load(&config.session_key)?;
            print_json(&board)
        }
        Command::Figure { figure_catalog, figure_id, x, y } => {
            let figures = storage::load_figure_catalog(&figure_catalog)?;
            let mut session = Session::open(&catalog, &state_dir, config, figures)?;
            run_figure(&mut session, &figure_id, Point::new(x, y))
        }
        Command::SaveTile { file } => run_save_tile(&catalog, &file),
        command => {
            let mut session = Session::open(&catalog, &state_dir, config, FigureCatalog::default())?;
            run_board(&mut session, command)
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn run_tiles(catalog: &Path) -> Result<(), CliError> {
    let tiles = storage::load_tile_catalog(catalog)?;
    for def in tiles.iter() {
        println!(
            "{}\t{}x{}\t{} hexes\t{} doors\t{}",
            def.id,
            def.size.width,
            def.size.height,
            def.hexes.len(),
            def.doors.len(),
            def.path
        );
    }
    Ok(())
}

fn run_validate(catalog: &Path) -> Result<(), CliError> {
    let tiles = storage::load_tile_catalog(catalog)?;
    let errors = tiles.validate_all();
    for error in &errors {
        println!("{error}");
    }
    if !errors.is_empty() {
        return Err(CliError::InvalidCatalog(errors.len()));
    }
    println!("{} tiles ok", tiles.len());
    Ok(())
}

fn run_save_tile(catalog: &Path, file: &Path) -> Result<(), CliError> {
    let def = storage::read_tile_definition(file)?;
    let id = def.id.clone();
    let outcome = storage::save_tile(catalog, def)?;
    let verb = match outcome {
        Upsert::Inserted => "inserted",
        Upsert::Replaced => "replaced",
    };
    println!("{id}: {verb}");
    Ok(())
}

fn run_figure(session: &mut Session, figure_id: &str, at: Point) -> Result<(), CliError> {
    let actions = session.core.drop_figure(figure_id, at);
    let Some(Action::FigurePlaced(figure)) = actions.first() else {
        return Err(CliError::UnknownFigure(figure_id.to_owned()));
    };
    print_json(figure)?;
    session.commit(&actions)
}

fn run_board(session: &mut Session, command: Command) -> Result<(), CliError> {
    let actions = match command {
        Command::Place { tile_id, x, y } => {
            let actions = session.core.drop_tile(&tile_id, Point::new(x, y));
            let Some(Action::TilePlaced(tile)) = actions.first() else {
                return Err(CliError::UnknownTile(tile_id));
            };
            print_json(tile)?;
            actions
        }
        Command::Move { id, x, y, no_snap } => {
            let to = Point::new(x, y);
            let actions = if no_snap {
                session.core.move_tile_to(&id, to)
            } else {
                session.core.commit_tile_position(&id, to)
            };
            if actions.is_empty() {
                return Err(CliError::UnknownPlacement(id));
            }
            report_position(&actions);
            actions
        }
        Command::Rotate { id } => {
            let actions = session.core.rotate_tile(&id);
            let Some(Action::TileRotated { rotation, .. }) = actions.first() else {
                return Err(CliError::UnknownPlacement(id));
            };
            println!("rotation {rotation}");
            actions
        }
        Command::Doors { id } => return run_doors(session, id),
        Command::Snap { id, threshold } => {
            if let Some(threshold) = threshold {
                if !(threshold.is_finite() && threshold > 0.0) {
                    return Err(CliError::InvalidThreshold(threshold));
                }
                session.core.settings.snap_threshold = threshold;
            }
            if session.core.board.tile(&id).is_none() {
                return Err(CliError::UnknownPlacement(id));
            }
            let actions = session.core.snap_tile(&id);
            if actions.is_empty() {
                println!("no door within {}", session.core.settings.snap_threshold);
                return Ok(());
            }
            report_position(&actions);
            actions
        }
        Command::Remove { id } => {
            let mut actions = session.core.remove_tile(&id);
            if actions.is_empty() {
                actions = session.core.remove_figure(&id);
            }
            if actions.is_empty() {
                return Err(CliError::UnknownPlacement(id));
            }
            println!("removed {id}");
            actions
        }
        Command::Tiles | Command::Validate | Command::Show | Command::SaveTile { .. } | Command::Figure { .. } => {
            return Ok(());
        }
    };
    session.commit(&actions)
}

fn run_doors(session: &Session, id: EntityId) -> Result<(), CliError> {
    let Some(tile) = session.core.board.tile(&id) else {
        return Err(CliError::UnknownPlacement(id));
    };
    let Some(doors) = session.core.doors_of(&id) else {
        return Err(CliError::UnknownTile(tile.tile_id.clone()));
    };
    for door in doors {
        println!("{:.2}\t{:.2}", door.x, door.y);
    }
    Ok(())
}

fn report_position(actions: &[Action]) {
    let last = actions.iter().rev().find_map(|action| match action {
        Action::TileSnapped { x, y, .. } => Some(("snapped", *x, *y)),
        Action::TileMoved { x, y, .. } => Some(("moved", *x, *y)),
        _ => None,
    });
    if let Some((verb, x, y)) = last {
        println!("{verb} to ({x}, {y})");
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
