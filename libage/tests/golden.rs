use libage::{age::Age, evolution::Sweep, grid::Grid, seed::parse_seed_cells};

const CASE_1_BEFORE: &str = "
[
  [0,0,2,2,0,0,0,0,0,0],
  [0,0,0,0,1,3,1,0,0,0],
  [0,0,0,2,0,3,0,0,1,3],
  [0,0,0,0,1,3,0,0,0,3],
  [0,2,2,0,0,0,1,3,1,0],
  [0,0,0,0,0,2,2,0,0,0],
  [0,0,2,0,2,0,0,0,0,0],
  [0,0,0,0,2,0,0,0,0,0],
  [0,0,0,0,0,0,0,0,0,0],
  [0,0,0,0,0,0,0,0,0,0]
]";

const CASE_1_AFTER: &str = "
[
  [0,0,3,3,0,0,0,0,0,0],
  [0,0,0,0,2,0,2,0,0,0],
  [0,0,0,3,0,0,0,0,2,0],
  [0,1,0,1,2,0,0,0,0,0],
  [0,3,3,0,0,1,2,0,2,0],
  [0,0,0,0,1,0,0,0,0,0],
  [0,0,0,0,3,0,1,0,0,0],
  [0,0,0,0,3,1,0,0,0,0],
  [0,0,0,0,0,0,0,0,0,0],
  [0,0,0,0,0,0,0,0,0,0]
]";

// Same as CASE_1_AFTER except for cell (4, 3).
const CASE_1_AFTER_ALTERED: &str = "
[
  [0,0,3,3,0,0,0,0,0,0],
  [0,0,0,0,2,0,2,0,0,0],
  [0,0,0,3,0,0,0,0,2,0],
  [0,1,0,1,1,0,0,0,0,0],
  [0,3,3,0,0,1,2,0,2,0],
  [0,0,0,0,1,0,0,0,0,0],
  [0,0,0,0,3,0,1,0,0,0],
  [0,0,0,0,3,1,0,0,0,0],
  [0,0,0,0,0,0,0,0,0,0],
  [0,0,0,0,0,0,0,0,0,0]
]";

const CASE_2_BEFORE: &str = "
[
  [0,0,0,0,0,0,0,0,0,0],
  [0,0,1,1,0,0,2,0,0,0],
  [0,0,3,3,2,0,0,0,2,0],
  [0,1,0,0,0,0,0,0,2,0],
  [0,0,3,0,0,1,2,0,0,0],
  [0,0,1,3,3,3,0,0,0,0],
  [0,0,0,1,0,1,0,0,0,0],
  [0,0,0,0,0,0,0,0,0,0],
  [0,0,0,0,0,0,0,0,0,0],
  [0,0,0,0,0,0,0,0,0,0]
]";

const CASE_2_AFTER: &str = "
[
  [0,0,0,0,0,0,0,0,0,0],
  [0,0,2,2,0,1,0,1,0,0],
  [0,0,0,0,3,1,0,0,3,1],
  [0,2,0,0,0,1,0,0,3,1],
  [0,0,0,0,0,2,3,1,0,0],
  [0,0,2,0,0,0,0,0,0,0],
  [0,0,0,2,0,2,0,0,0,0],
  [0,0,0,0,0,0,0,0,0,0],
  [0,0,0,0,0,0,0,0,0,0],
  [0,0,0,0,0,0,0,0,0,0]
]";

const CASE_3_BEFORE: &str = "
[
  [0,0,0,0,1,3,1,0,0,0],
  [0,0,0,0,0,3,0,0,0,0],
  [0,0,2,0,0,0,0,3,1,0],
  [0,0,2,0,2,3,0,0,3,0],
  [0,0,2,0,0,0,0,3,0,0],
  [0,0,0,0,0,2,1,3,1,0],
  [0,0,0,0,2,2,0,0,0,0],
  [0,0,0,0,0,0,0,0,0,0],
  [0,0,0,0,0,0,0,0,0,0],
  [0,0,0,0,0,0,0,0,0,0]
]";

const CASE_3_AFTER: &str = "
[
  [0,0,0,0,2,0,2,0,0,0],
  [0,0,0,0,0,0,0,0,0,0],
  [0,1,3,0,0,0,0,0,2,0],
  [0,0,3,0,3,0,0,0,0,0],
  [0,1,3,0,1,1,0,0,0,0],
  [0,0,0,1,0,0,2,0,2,0],
  [0,0,0,0,3,0,1,0,0,0],
  [0,0,0,0,1,1,0,0,0,0],
  [0,0,0,0,0,0,0,0,0,0],
  [0,0,0,0,0,0,0,0,0,0]
]";

fn grid(text: &str) -> Grid {
    text.parse().expect("fixture should parse")
}

fn assert_evolves(before: &str, after: &str) {
    for sweep in [Sweep::Sequential, Sweep::Parallel] {
        let mut grid_before = grid(before);
        let grid_after = grid(after);

        assert_ne!(grid_before, grid_after, "fixture is already evolved");

        grid_before.evolve_with(sweep);
        assert_eq!(grid_before, grid_after, "{sweep:?} sweep");
    }
}

#[test]
fn case_1_evolves_to_expected() {
    assert_evolves(CASE_1_BEFORE, CASE_1_AFTER);
}

#[test]
fn case_1_does_not_match_altered() {
    let mut evolved = grid(CASE_1_BEFORE);
    evolved.evolve();

    let altered = grid(CASE_1_AFTER_ALTERED);
    assert_ne!(evolved, altered);

    let differing = evolved
        .ages()
        .iter()
        .zip(altered.ages())
        .filter(|(a, b)| a != b)
        .count();
    assert_eq!(differing, 1);
}

#[test]
fn case_2_evolves_to_expected() {
    assert_evolves(CASE_2_BEFORE, CASE_2_AFTER);
}

#[test]
fn case_3_evolves_to_expected() {
    assert_evolves(CASE_3_BEFORE, CASE_3_AFTER);
}

#[test]
fn small_seed_second_generation() {
    let seed = parse_seed_cells("[[2,0,1],[2,1,1],[3,1,1],[1,2,2],[2,2,2],[3,2,1],[3,3,1]]")
        .expect("seed should parse");

    let mut grid_5x5 = Grid::new(5, 5);
    grid_5x5.seed_cells(&seed);

    assert_eq!(
        grid_5x5,
        grid("
        [
          [0,0,1,0,0],
          [0,0,1,1,0],
          [0,2,2,1,0],
          [0,0,0,1,0],
          [0,0,0,0,0]
        ]")
    );

    grid_5x5.evolve();

    assert_eq!(
        grid_5x5,
        grid("
        [
          [0,0,2,0,0],
          [0,1,0,2,0],
          [0,3,0,2,0],
          [0,1,1,2,0],
          [0,0,0,0,0]
        ]")
    );
    assert_eq!(grid_5x5.population(), [17, 3, 4, 1]);
    assert_eq!(grid_5x5.get([1, 2]), Some(Age::Senior));
}
