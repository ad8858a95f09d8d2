use std::env;

use config::Config;
use libage::{Game, render::RenderStyle};

mod cli;
mod config;
mod printer;

pub struct State {
    game: Game,
    render: RenderStyle,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = match env::args().nth(1) {
        Some(config_path) => Config::load(config_path)?,
        None => Config::default(),
    };

    let grid = config.build_grid()?;
    log::info!(
        "running {}x{} grid for {} generations ({:?} sweep)",
        grid.width(),
        grid.height(),
        config.generations,
        config.sweep
    );

    let mut state = State {
        game: Game::new(grid, config.sweep),
        render: config.render,
    };

    print_evolutions(&mut state.game, config.generations, config.render);

    if config.interactive {
        cli::run_cli(&mut state)?;
    }

    Ok(())
}

/// Prints the seeded grid as generation 1, then every generation up to `max_generation`.
fn print_evolutions(game: &mut Game, max_generation: usize, style: RenderStyle) {
    printer::print_generation(game, style);

    while game.generation() < max_generation {
        game.tick();
        printer::print_generation(game, style);

        if game.is_extinct() {
            log::info!("grid went extinct at generation {}", game.generation());
        }
    }
}
