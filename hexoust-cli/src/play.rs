//! Play command - two players sharing one terminal
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: run_session() - read/eval/print loop
//! - Level 3: parse_command(), apply_command()
//! - Level 4: text rendering

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use hexoust_core::{Board, Cell, Game, Hex, MoveOutcome, Player};

const HELP: &str = "\
commands:
  q r          place a stone at axial (q, r)
  click x y    place a stone at the cell under pixel (x, y)
  board        redraw the board
  restart      start over with Red to move
  help         show this text
  quit         leave";

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct PlayArgs {
    /// Game config JSON file (radius and pixel layout)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Board radius (overrides the config file)
    #[arg(long)]
    pub radius: Option<i32>,
}

/// One line of user input
#[derive(Clone, Copy, Debug, PartialEq)]
enum Command {
    Place(Hex),
    Click(f64, f64),
    Board,
    Restart,
    Help,
    Quit,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run play command
pub fn run(args: PlayArgs) -> Result<()> {
    let config = crate::load_config(args.config.as_deref(), args.radius)?;
    tracing::info!("Starting terminal game on a radius {} board", config.radius);

    let mut game = Game::new(config);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    run_session(&mut game, stdin.lock(), stdout.lock())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Read commands until `quit` or end of input
fn run_session<R: BufRead, W: Write>(game: &mut Game, input: R, mut out: W) -> Result<()> {
    writeln!(out, "{}", HELP)?;
    write_board(&mut out, game)?;
    write_prompt(&mut out, game)?;

    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        let line = line.trim();
        if line.is_empty() {
            write_prompt(&mut out, game)?;
            continue;
        }

        match parse_command(line) {
            Ok(Command::Quit) => break,
            Ok(command) => apply_command(game, command, &mut out)?,
            Err(msg) => writeln!(out, "{} (type 'help')", msg)?,
        }
        write_prompt(&mut out, game)?;
    }

    Ok(())
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

fn parse_command(line: &str) -> Result<Command, String> {
    let parts: Vec<&str> = line.split_whitespace().collect();

    match parts.as_slice() {
        ["quit"] | ["exit"] => Ok(Command::Quit),
        ["help"] => Ok(Command::Help),
        ["board"] => Ok(Command::Board),
        ["restart"] => Ok(Command::Restart),
        ["click", x, y] => {
            let x = x.parse().map_err(|_| format!("bad x: {}", x))?;
            let y = y.parse().map_err(|_| format!("bad y: {}", y))?;
            Ok(Command::Click(x, y))
        }
        [q, r] => {
            let q = q.parse().map_err(|_| format!("bad q: {}", q))?;
            let r = r.parse().map_err(|_| format!("bad r: {}", r))?;
            Ok(Command::Place(Hex::new(q, r)))
        }
        _ => Err(format!("unknown command: {}", line)),
    }
}

fn apply_command<W: Write>(game: &mut Game, command: Command, out: &mut W) -> Result<()> {
    match command {
        Command::Place(hex) => {
            let outcome = game.attempt_move(hex);
            report_outcome(out, &outcome)?;
            if outcome.is_accepted() {
                write_board(out, game)?;
            }
        }
        Command::Click(x, y) => {
            let outcome = game.attempt_click(x, y);
            report_outcome(out, &outcome)?;
            if outcome.is_accepted() {
                write_board(out, game)?;
            }
        }
        Command::Board => write_board(out, game)?,
        Command::Restart => {
            game.restart();
            writeln!(out, "New game.")?;
            write_board(out, game)?;
        }
        Command::Help => writeln!(out, "{}", HELP)?,
        Command::Quit => {}
    }
    Ok(())
}

// ============================================================================
// LEVEL 4 - TEXT RENDERING
// ============================================================================

fn report_outcome<W: Write>(out: &mut W, outcome: &MoveOutcome) -> Result<()> {
    match outcome {
        MoveOutcome::Rejected { reason } => writeln!(out, "Rejected: {}", reason)?,
        MoveOutcome::Accepted {
            placed,
            player,
            captured,
            extra_turn,
            winner,
        } => {
            writeln!(out, "{} placed at {}", player, placed)?;
            if !captured.is_empty() {
                writeln!(out, "{} captured {} stone(s)", player, captured.len())?;
            }
            if let Some(winner) = winner {
                writeln!(out, "{} wins! Type 'restart' to play again.", winner)?;
            } else if *extra_turn {
                writeln!(out, "{} moves again.", player)?;
            }
        }
    }
    Ok(())
}

fn write_prompt<W: Write>(out: &mut W, game: &Game) -> Result<()> {
    if game.is_game_over() {
        write!(out, "game over> ")?;
    } else {
        write!(out, "{}> ", game.current_player())?;
    }
    out.flush()?;
    Ok(())
}

fn write_board<W: Write>(out: &mut W, game: &Game) -> Result<()> {
    write!(out, "{}", render_board(game.board()))?;
    Ok(())
}

fn cell_char(cell: Cell) -> char {
    match cell {
        Cell::Empty => '.',
        Cell::Stone(Player::Red) => 'R',
        Cell::Stone(Player::Blue) => 'B',
    }
}

/// Rows run from r = -N (top) to r = N; q grows to the right.
/// Cell (q, r) sits in column 2q + r + 2N, so neighbors line up.
fn render_board(board: &Board) -> String {
    let n = board.radius();
    let mut text = String::new();

    for r in -n..=n {
        let lo = (-n).max(-n - r);
        let hi = n.min(n - r);
        text.push_str(&" ".repeat(r.unsigned_abs() as usize));

        let row: Vec<String> = (lo..=hi)
            .map(|q| {
                let cell = board.get(Hex::new(q, r)).unwrap_or_default();
                cell_char(cell).to_string()
            })
            .collect();
        text.push_str(&row.join(" "));
        text.push_str(&format!("    r={}\n", r));
    }

    text
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use hexoust_core::GameConfig;
    use std::io::Cursor;

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_command("0 -3"), Ok(Command::Place(Hex::new(0, -3))));
        assert_eq!(
            parse_command("click 410 345.5"),
            Ok(Command::Click(410.0, 345.5))
        );
        assert_eq!(parse_command("restart"), Ok(Command::Restart));
        assert_eq!(parse_command("board"), Ok(Command::Board));
        assert_eq!(parse_command("help"), Ok(Command::Help));
        assert_eq!(parse_command("quit"), Ok(Command::Quit));
        assert!(parse_command("a b").is_err());
        assert!(parse_command("1 2 3").is_err());
        assert!(parse_command("click 1").is_err());
    }

    #[test]
    fn test_render_board() {
        let mut board = Board::new(1);
        board.place(Hex::new(0, 0), Player::Red).unwrap();
        board.place(Hex::new(1, -1), Player::Blue).unwrap();

        let text = render_board(&board);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], " . B    r=-1");
        assert_eq!(lines[1], ". R .    r=0");
        assert_eq!(lines[2], " . .    r=1");
    }

    #[test]
    fn test_session_capture_and_win() {
        let mut game = Game::new(GameConfig::with_radius(3));
        let input = Cursor::new("2 -1\n0 0\n1 0\n-2 0\nquit\n");
        let mut output = Vec::new();

        run_session(&mut game, input, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.contains("Red captured 1 stone(s)"));
        assert!(text.contains("Red wins!"));
        assert!(text.contains("Rejected: the game is over"));
        assert!(game.is_game_over());
    }

    #[test]
    fn test_session_reports_rejections() {
        let mut game = Game::new(GameConfig::with_radius(3));
        let input = Cursor::new("0 0\n0 0\n9 9\n-2147483648 0\nnonsense\nrestart\n");
        let mut output = Vec::new();

        run_session(&mut game, input, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.contains("Rejected: hex (0, 0, 0) is already occupied"));
        assert!(text.contains("Rejected: hex (9, 9, -18) is outside the board"));
        assert!(
            text.contains("Rejected: hex (-2147483648, 0, 2147483648) is outside the board")
        );
        assert!(text.contains("unknown command: nonsense"));
        assert!(text.contains("New game."));
        assert!(game.board().is_empty());
    }
}
