use std::process;

use clap::{crate_version, App};
use log::info;

use nonoedit::{FillGrid, RcGrid, RcPuzzle, Renderer, ShellRenderer, TxtFormat};

fn main() {
    env_logger::init();

    let matches = App::new("Nonoedit")
        .version(crate_version!())
        .about("Nonogram puzzle editor")
        .args_from_usage(
            "<PATH>            'path to a puzzle file'
             -r, --roundtrip   'parse the puzzle and print its canonical form'",
        )
        .get_matches();

    let path = matches.value_of("PATH").unwrap_or_default();

    let puzzle = match TxtFormat::read_local(path) {
        Ok(puzzle) => puzzle,
        Err(err) => {
            eprintln!("{}: {}", path, err);
            process::exit(1);
        }
    };

    if matches.is_present("roundtrip") {
        print!("{}", TxtFormat::serialize(&puzzle));
        return;
    }

    info!(
        "Loaded puzzle {:?} ({}x{})",
        puzzle.name(),
        puzzle.width(),
        puzzle.height()
    );
    let grid = RcGrid::new(FillGrid::new(RcPuzzle::new(puzzle)));
    let renderer = ShellRenderer::with_grid(grid);
    println!("{}", renderer.render());
}
