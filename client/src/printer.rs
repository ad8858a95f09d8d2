use colored::{ColoredString, Colorize};
use itertools::Itertools;
use libage::{
    Game,
    age::Age,
    grid::Grid,
    render::{RenderStyle, age_symbol},
};

pub fn print_generation(game: &Game, style: RenderStyle) {
    println!("===== Generation {} =====", game.generation());
    println!("{}", render(&game.grid, style));
}

/// Like [`Grid::render`], but human output gets a color per age.
pub fn render(grid: &Grid, style: RenderStyle) -> String {
    match style {
        RenderStyle::Array => grid.render(RenderStyle::Array),
        RenderStyle::Human => grid
            .rows()
            .map(|row| row.iter().map(|age| colored_cell(*age)).join(""))
            .join("\n"),
    }
}

pub fn population_summary(grid: &Grid) -> String {
    let [empty, newborn, adult, senior] = grid.population();

    format!(
        "{} newborn | {} adult | {} senior | {} empty",
        newborn.to_string().bright_green(),
        adult.to_string().green(),
        senior.to_string().yellow(),
        empty.to_string().dimmed(),
    )
}

fn colored_cell(age: Age) -> ColoredString {
    let cell = format!("[{}]", age_symbol(age));

    match age {
        Age::Empty => cell.dimmed(),
        Age::Newborn => cell.bright_green(),
        Age::Adult => cell.green(),
        Age::Senior => cell.yellow(),
    }
}
