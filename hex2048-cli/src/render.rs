//! Text rendering of the board
//!
//! Cells are placed on a character grid through the same axial-to-planar
//! mapping a graphical front end would use, so the terminal layout matches
//! the engine's spatial reasoning.

use hex2048_core::{board_cells, GameState, GameStatus};

const CELL_SIZE: f32 = 4.0;
const ROW_STEP: f32 = 3.4641;

pub fn render_board(state: &GameState) -> String {
    let mut min_x = f32::INFINITY;
    let mut max_x = f32::NEG_INFINITY;
    let mut min_y = f32::INFINITY;
    let mut max_y = f32::NEG_INFINITY;
    for &cell in board_cells() {
        let (x, y) = cell.to_pixel(CELL_SIZE);
        min_x = min_x.min(x);
        max_x = max_x.max(x);
        min_y = min_y.min(y);
        max_y = max_y.max(y);
    }

    let rows = ((max_y - min_y) / ROW_STEP).round() as usize + 1;
    let cols = (max_x - min_x).round() as usize + 6;
    let mut canvas = vec![vec![' '; cols]; rows];

    for &cell in board_cells() {
        let (x, y) = cell.to_pixel(CELL_SIZE);
        let row = ((y - min_y) / ROW_STEP).round() as usize;
        let col = (x - min_x).round() as usize;

        let label = match state.tile_at(cell) {
            Some(tile) => tile.value.to_string(),
            None => ".".to_string(),
        };
        for (i, ch) in label.chars().enumerate() {
            if col + i < cols {
                canvas[row][col + i] = ch;
            }
        }
    }

    canvas
        .into_iter()
        .map(|row| row.into_iter().collect::<String>().trim_end().to_string())
        .collect::<Vec<String>>()
        .join("\n")
}

pub fn scoreboard(state: &GameState) -> String {
    let banner = match state.status() {
        GameStatus::Won => "  [2048! type continue to keep going]",
        GameStatus::Lost => "  [game over - type new to restart]",
        _ => "",
    };
    format!(
        "score {}  best {}  moves {}{}",
        state.score(),
        state.best_score(),
        state.move_count(),
        banner
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex2048_core::Hex;

    #[test]
    fn test_render_marks_tiles_and_empty_cells() {
        let state =
            GameState::with_tiles(&[(Hex::new(0, 0), 2048), (Hex::new(-2, 1), 4)]);
        let board = render_board(&state);

        assert!(board.contains("2048"));
        assert!(board.contains('4'));
        let dots = board.matches('.').count();
        assert_eq!(dots, board_cells().len() - 2);
    }

    #[test]
    fn test_render_has_one_row_per_distinct_height() {
        let state = GameState::with_tiles(&[]);
        let board = render_board(&state);
        assert_eq!(board.lines().count(), 9);
    }

    #[test]
    fn test_scoreboard_banners() {
        let state = GameState::with_tiles(&[(Hex::new(0, 0), 2)]);
        assert!(scoreboard(&state).starts_with("score 0  best 0  moves 0"));
        assert!(!scoreboard(&state).contains("game over"));
    }
}
