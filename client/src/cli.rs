use std::{io, ops::ControlFlow};

use anyhow::{Context, bail};
use libage::{age::Age, evolution::Sweep, grid::Grid, pos::Position, render::RenderStyle};

use crate::{State, printer};

pub fn run_cli(state: &mut State) -> anyhow::Result<()> {
    for line_res in io::stdin().lines() {
        let line = line_res.context("Couldn't read command")?;
        let args = line.split_whitespace();

        match handle_cmd(state, args) {
            Ok(ControlFlow::Break(())) => break,
            Ok(ControlFlow::Continue(())) => println!("OK"),
            Err(e) => eprintln!("! {e:?}"),
        }
    }

    Ok(())
}

fn handle_cmd<'a, I>(state: &mut State, mut args: I) -> anyhow::Result<ControlFlow<()>>
where
    I: Iterator<Item = &'a str>,
{
    match args.next().context("No command")? {
        "step" => {
            let times = args.next().unwrap_or("1").parse::<usize>()?;

            state.game.tick_n(times);
            printer::print_generation(&state.game, state.render);
        }

        "show" => {
            printer::print_generation(&state.game, RenderStyle::Human);
        }

        "dump" => {
            printer::print_generation(&state.game, RenderStyle::Array);
        }

        "stats" => {
            println!(
                "generation {}: {}",
                state.game.generation(),
                printer::population_summary(&state.game.grid)
            );
        }

        "render" => {
            state.render = args.next().context("missing render style")?.parse()?;
        }

        "sweep" => {
            state.game.sweep = args.next().context("missing sweep")?.parse::<Sweep>()?;
        }

        "clear" => {
            state.game.grid.clear();
        }

        "resize" => {
            let width = args.next().context("missing width")?.parse::<usize>()?;

            let height = args.next().context("missing height")?.parse::<usize>()?;

            // Keep whatever still fits inside the new bounds.
            let old_grid = &state.game.grid;
            let resized = Grid::with_factory(width, height, |pos| {
                old_grid.get(pos).unwrap_or_default()
            });

            state.game.reset(resized);
        }

        "seed" => {
            let i = args.next().context("missing i")?.parse::<usize>()?;
            let j = args.next().context("missing j")?.parse::<usize>()?;
            let age = parse_age(args.next().context("missing age")?)?;

            let cell = state
                .game
                .grid
                .get_mut(Position { i, j })
                .with_context(|| format!("({i}, {j}) is outside the grid"))?;
            *cell = age;
        }

        "load" => {
            let grid_text = args.collect::<Vec<_>>().join(" ");
            let grid = grid_text.parse::<Grid>()?;

            state.game.reset(grid);
        }

        "random" => {
            let occupied = args
                .next()
                .context("missing occupied count")?
                .parse::<usize>()?;

            let grid = &state.game.grid;
            if occupied > grid.len() {
                bail!("Can't place {occupied} cells on a {} cell grid", grid.len());
            }

            let random = Grid::new_random(grid.width(), grid.height(), occupied);
            state.game.reset(random);
        }

        "exit" => {
            return Ok(ControlFlow::Break(()));
        }

        _ => bail!("Unknown command"),
    }

    Ok(ControlFlow::Continue(()))
}

/// Ages are accepted either as a number or by name.
fn parse_age(arg: &str) -> anyhow::Result<Age> {
    match arg.parse::<u8>() {
        Ok(value) => Age::try_from(value),
        Err(_) => arg.parse::<Age>().context("Unknown age"),
    }
}
