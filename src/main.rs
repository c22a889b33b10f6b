use std::io::{self, BufRead, Write};

use chess_board::config::{AppConfig, OutputFormat};
use chess_board::engine::{ClickEvent, Color, Game, Piece, PieceType, Square};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing (structured logging) on stderr.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chess_board=info".into()),
        )
        .init();

    let config = AppConfig::from_env();
    tracing::info!(
        "chess-board v{} ready ({:?} output)",
        env!("CARGO_PKG_VERSION"),
        config.output
    );

    let mut game = Game::new();
    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    print_state(&mut out, &config, &game, None)?;

    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();
        match input {
            "" => continue,
            "quit" | "exit" => break,
            "new" => {
                game.new_game();
                print_state(&mut out, &config, &game, None)?;
            }
            _ => match input.parse::<Square>() {
                Ok(square) => {
                    let event = game.click(square);
                    if let ClickEvent::Moved { from, to, captured } = event {
                        tracing::info!(%from, %to, captured = ?captured, "move");
                    }
                    print_state(&mut out, &config, &game, Some(event))?;
                }
                Err(e) => tracing::warn!("{e}"),
            },
        }
    }
    Ok(())
}

fn print_state(
    out: &mut impl Write,
    config: &AppConfig,
    game: &Game,
    event: Option<ClickEvent>,
) -> io::Result<()> {
    match config.output {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "event": event,
                "game": game,
            });
            writeln!(out, "{value}")?;
        }
        OutputFormat::Text => {
            write!(out, "{}", render(game, config))?;
        }
    }
    out.flush()
}

/// Text grid, row 8 at top. `*` marks the selected square and `x`/`o`
/// mark capture/quiet candidates when enabled.
fn render(game: &Game, config: &AppConfig) -> String {
    let selected = game.selection().square();
    let mut s = String::new();
    for row in game.board().rows() {
        s.push_str(&format!("{} ", row[0].square.row));
        for cell in row {
            let glyph = cell.piece.map_or('.', |p| glyph(p, config.unicode));
            let marker = if selected == Some(cell.square) {
                '*'
            } else if config.show_moves && game.selection().is_candidate(cell.square) {
                if cell.piece.is_some() { 'x' } else { 'o' }
            } else {
                ' '
            };
            if marker == 'o' {
                s.push_str(" o");
            } else {
                s.push(glyph);
                s.push(marker);
            }
        }
        s.push('\n');
    }
    s.push_str("  A B C D E F G H\n");
    s
}

fn glyph(piece: Piece, unicode: bool) -> char {
    if !unicode {
        return piece.to_char();
    }
    match (piece.color, piece.kind) {
        (Color::White, PieceType::King) => '♔',
        (Color::White, PieceType::Queen) => '♕',
        (Color::White, PieceType::Rook) => '♖',
        (Color::White, PieceType::Bishop) => '♗',
        (Color::White, PieceType::Knight) => '♘',
        (Color::White, PieceType::Pawn) => '♙',
        (Color::Black, PieceType::King) => '♚',
        (Color::Black, PieceType::Queen) => '♛',
        (Color::Black, PieceType::Rook) => '♜',
        (Color::Black, PieceType::Bishop) => '♝',
        (Color::Black, PieceType::Knight) => '♞',
        (Color::Black, PieceType::Pawn) => '♟',
    }
}
