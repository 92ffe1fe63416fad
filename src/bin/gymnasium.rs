use std::process::Command;

use battlesnake_baron_voronoi::strategies::greedy::bench::{benchmark_game, make_game};
use color_eyre::Result;
use reqwest::Url;

const RUNS: u32 = 20;

enum GameMode {
    Solo,
}

impl ToString for GameMode {
    fn to_string(&self) -> String {
        match self {
            Self::Solo => "solo".to_owned(),
        }
    }
}

struct PlayOptions {
    board_width:  u64,
    board_height: u64,
    mode:         GameMode,
}

struct Snake {
    name: String,
    url:  Url,
}

fn make_play_command(play_options: &PlayOptions, snakes: &[Snake]) -> Command {
    let mut cmd = Command::new("battlesnake");
    cmd.arg("play");

    cmd.arg("--width");
    cmd.arg(play_options.board_width.to_string());
    cmd.arg("--height");
    cmd.arg(play_options.board_height.to_string());

    for snake in snakes {
        cmd.arg("--name");
        cmd.arg(&snake.name);

        cmd.arg("--url");
        cmd.arg(snake.url.to_string());
    }

    cmd.arg("--gametype");
    cmd.arg(play_options.mode.to_string());

    cmd.arg("--browser");

    cmd
}

fn main() -> Result<()> {
    color_eyre::install()?;

    println!("warming up in this arena:\n{}", make_game(4, 11, 11));

    // a quick latency sweep first, so regressions show up before the match
    for (board_width, board_height) in [(11, 11), (19, 19)] {
        for players in [1, 2, 4] {
            let mean = benchmark_game(players, board_width, board_height, RUNS);
            println!(
                "{players} players on {board_width}x{board_height}: {mean:.2} ms per decision"
            );
        }
    }

    let snakes = &mut [Snake {
        name: "👑 baron voronoi".to_owned(),
        url:  "http://localhost:6510".parse()?,
    }];

    let mut play = make_play_command(
        &PlayOptions {
            board_width:  11,
            board_height: 11,
            mode:         GameMode::Solo,
        },
        snakes,
    );

    play.status()?;

    Ok(())
}
