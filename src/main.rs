//! This crate contains the source code for the binary for the mazewalker solver.

#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use std::time::Duration;

use clap::Parser as _;
use color_eyre::{eyre::Result, install};
use mazewalker::{
    cli::Cli,
    loader,
    navigator::{Navigator, QuietSink},
    App,
};

fn main() -> Result<()> {
    install()?;

    let cli = Cli::parse();
    let mut grid = loader::load(cli.maze_file.as_deref())?;

    let outcome = if cli.headless {
        let mut sink = QuietSink;
        Navigator::new(&mut grid, &mut sink).run()?
    } else {
        let mut terminal = ratatui::init();
        let result = App::new(grid, Duration::from_millis(cli.delay_ms)).run(&mut terminal);
        ratatui::restore();
        result?
    };

    println!("{}", outcome.message());

    Ok(())
}
