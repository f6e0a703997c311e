/// Rendering layer: all terminal I/O lives here.
///
/// `field_grid` turns the game state into a character grid; `render`
/// paints that grid plus the status and hint lines, or one of the two
/// full-screen views. No game logic is performed here.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

use crate::entities::{BulletOwner, GameState};
use crate::session::{Phase, Session};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_LIVES: Color = Color::Red;
const C_HUD_LEVEL: Color = Color::Cyan;
const C_PLAYER: Color = Color::Green;
const C_ENEMY: Color = Color::Red;
const C_BULLET_PLAYER: Color = Color::Cyan;
const C_BULLET_ENEMY: Color = Color::Magenta;
const C_HINT: Color = Color::DarkGrey;
const C_FAREWELL: Color = Color::DarkYellow;

// ── Glyphs ────────────────────────────────────────────────────────────────────

const PLAYER_SPRITE: [char; 3] = ['/', 'W', '\\'];
const ENEMY_CHAR: char = 'M';
const BULLET_CHAR: char = '|';

/// Farewell box width in columns.
const FAREWELL_WIDTH: usize = 50;

const CONTROLS_HINT: &str = "Controls: [←/→ or A/D] Move, [Space or W] Fire, [Q] Quit";

/// One cell of the inner playfield.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Player(char),
    Enemy,
    Bullet(BulletOwner),
}

impl Cell {
    fn glyph(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Player(c) => c,
            Cell::Enemy => ENEMY_CHAR,
            Cell::Bullet(_) => BULLET_CHAR,
        }
    }

    fn color(self) -> Color {
        match self {
            Cell::Empty => Color::Reset,
            Cell::Player(_) => C_PLAYER,
            Cell::Enemy => C_ENEMY,
            Cell::Bullet(BulletOwner::Player) => C_BULLET_PLAYER,
            Cell::Bullet(BulletOwner::Enemy) => C_BULLET_ENEMY,
        }
    }
}

// ── Grid ──────────────────────────────────────────────────────────────────────

/// The playfield inside the border: `height - 2` rows of `width - 2` cells.
/// Field coordinate `(x, y)` lands at `grid[y - 1][x - 1]`; anything on the
/// border or outside it is not drawn. Bullets paint over enemies, enemies
/// over the player.
pub fn field_grid(state: &GameState) -> Vec<Vec<Cell>> {
    let cols = (state.width - 2).max(0) as usize;
    let rows = (state.height - 2).max(0) as usize;
    let mut grid = vec![vec![Cell::Empty; cols]; rows];

    let mut put = |x: i32, y: i32, cell: Cell| {
        if x >= 1 && y >= 1 && (x as usize) <= cols && (y as usize) <= rows {
            grid[y as usize - 1][x as usize - 1] = cell;
        }
    };

    let p = &state.player;
    for (dx, glyph) in (-1..=1).zip(PLAYER_SPRITE) {
        put(p.x + dx, p.y, Cell::Player(glyph));
    }
    for enemy in &state.enemies {
        put(enemy.x as i32, enemy.y as i32, Cell::Enemy);
    }
    for bullet in &state.bullets {
        put(bullet.x as i32, bullet.y as i32, Cell::Bullet(bullet.owner));
    }

    grid
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame for the session's current phase.
pub fn render<W: Write>(out: &mut W, session: &Session) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let state = session.game();
    match session.phase() {
        Phase::Playing => {
            draw_hud(out, session)?;
            draw_border(out, state)?;
            draw_field(out, state)?;
            draw_controls_hint(out, state)?;
        }
        Phase::GameOver => draw_game_over(out, session)?,
        Phase::ConfirmingQuit | Phase::Exited => {
            draw_farewell(out, state, session.final_score().unwrap_or(state.score))?
        }
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, screen_rows(state).saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

/// Terminal rows used: status line, bordered field, hint line.
fn screen_rows(state: &GameState) -> u16 {
    (state.height.max(2) + 2) as u16
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, session: &Session) -> std::io::Result<()> {
    let state = session.game();

    out.queue(cursor::MoveTo(0, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score: {}", state.score)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(" | "))?;
    out.queue(style::SetForegroundColor(C_HUD_LIVES))?;
    out.queue(Print(format!("Lives: {}", state.lives)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(" | "))?;
    out.queue(style::SetForegroundColor(C_HUD_LEVEL))?;
    out.queue(Print(format!("Difficulty: {}", session.difficulty().name())))?;

    Ok(())
}

// ── Border (rows 1 and height) ────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let inner = (state.width - 2).max(0) as usize;
    let bottom = state.height.max(2) as u16;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("+{}+", "-".repeat(inner))))?;

    out.queue(cursor::MoveTo(0, bottom))?;
    out.queue(Print(format!("+{}+", "-".repeat(inner))))?;

    for row in 2..bottom {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("|"))?;
        out.queue(cursor::MoveTo(state.width.max(1) as u16 - 1, row))?;
        out.queue(Print("|"))?;
    }

    Ok(())
}

// ── Field (rows 2 ..= height - 1) ─────────────────────────────────────────────

fn draw_field<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    for (r, row) in field_grid(state).iter().enumerate() {
        out.queue(cursor::MoveTo(1, 2 + r as u16))?;
        let mut current = None;
        for &cell in row {
            let color = cell.color();
            if current != Some(color) {
                out.queue(style::SetForegroundColor(color))?;
                current = Some(color);
            }
            out.queue(Print(cell.glyph()))?;
        }
    }
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(0, screen_rows(state).saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(CONTROLS_HINT))?;
    Ok(())
}

// ── Game-over view ────────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(out: &mut W, session: &Session) -> std::io::Result<()> {
    let state = session.game();
    let score_line = format!("Final Score: {}", state.score);
    let level_line = format!("Difficulty: {}", session.difficulty().name());
    let lines: &[(&str, Color)] = &[
        ("╔══════════════════╗", Color::Red),
        ("║    GAME  OVER    ║", Color::Red),
        ("╚══════════════════╝", Color::Red),
        (&score_line, Color::Yellow),
        (&level_line, C_HUD_LEVEL),
        ("R - Play Again  Q - Quit", Color::White),
    ];

    draw_centered(out, state, lines)
}

// ── Farewell view ─────────────────────────────────────────────────────────────

fn draw_farewell<W: Write>(out: &mut W, state: &GameState, score: u32) -> std::io::Result<()> {
    let inner = FAREWELL_WIDTH - 2;
    let edge = format!("+{}+", "=".repeat(inner));
    let blank = format!("|{}|", " ".repeat(inner));
    let thanks = format!("|{:^inner$}|", "THANKS FOR PLAYING!");
    let score_line = format!("|{:^inner$}|", format!("Your final score: {score}"));

    let lines: &[(&str, Color)] = &[
        (&edge, C_FAREWELL),
        (&blank, C_FAREWELL),
        (&thanks, C_FAREWELL),
        (&blank, C_FAREWELL),
        (&score_line, Color::White),
        (&blank, C_FAREWELL),
        (&edge, C_FAREWELL),
        ("", Color::Reset),
        ("Exiting...", C_HINT),
    ];

    draw_centered(out, state, lines)
}

fn draw_centered<W: Write>(
    out: &mut W,
    state: &GameState,
    lines: &[(&str, Color)],
) -> std::io::Result<()> {
    let cx = (state.width.max(0) / 2) as u16;
    let start_row = (screen_rows(state) / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    Ok(())
}
