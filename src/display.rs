/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// game state.  No game logic is performed; this module only projects the
/// pixel-space world onto terminal cells and emits terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

use crate::entities::{
    Entity, GameState, GameStatus, Sprite, CANVAS_HEIGHT, CANVAS_WIDTH, LIVES_LABEL,
    LIVES_LABEL_X, LIVES_LABEL_Y, START_Y, UPPER_LIMIT,
};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_WATER: Color = Color::Blue;
const C_GRASS: Color = Color::DarkGreen;
const C_LABEL: Color = Color::Cyan;
const C_HEART: Color = Color::Red;
const C_ENEMY: Color = Color::Red;
const C_PLAYER: Color = Color::White;
const C_HINT: Color = Color::DarkGrey;

// ── Projection ────────────────────────────────────────────────────────────────

/// Terminal size the canvas is stretched over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16) -> Self {
        Viewport { cols, rows }
    }

    /// Playable columns inside the side walls.
    fn inner_cols(&self) -> u16 {
        self.cols.saturating_sub(2)
    }

    /// Playable rows between the top bar and the bottom bar (the last row
    /// holds the controls hint).
    fn inner_rows(&self) -> u16 {
        self.rows.saturating_sub(3)
    }

    /// Cell for a canvas point, or `None` when the point is off the canvas
    /// (enemies still entering, the player parked above the goal).
    pub fn project(&self, x: f64, y: f64) -> Option<(u16, u16)> {
        if !(0.0..CANVAS_WIDTH).contains(&x) || !(0.0..CANVAS_HEIGHT).contains(&y) {
            return None;
        }
        let (w, h) = (self.inner_cols(), self.inner_rows());
        if w == 0 || h == 0 {
            return None;
        }
        let col = (x / CANVAS_WIDTH * w as f64) as u16;
        let row = (y / CANVAS_HEIGHT * h as f64) as u16;
        Some((1 + col.min(w - 1), 1 + row.min(h - 1)))
    }
}

fn glyph(sprite: Sprite) -> (&'static str, Color) {
    match sprite {
        Sprite::Player => ("@", C_PLAYER),
        Sprite::Enemy => ("<#>", C_ENEMY),
        Sprite::Heart => ("♥", C_HEART),
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.  Hearts go down first, then enemies, then the
/// player, so the player is always on top.
pub fn render<W: Write>(out: &mut W, state: &GameState, view: Viewport) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, view)?;
    draw_terrain(out, view)?;

    for heart in &state.player.lives {
        draw_entity(out, &heart.entity, view)?;
    }
    for enemy in &state.enemies {
        draw_entity(out, &enemy.entity, view)?;
    }
    draw_player(out, state, view)?;
    draw_controls_hint(out, view)?;

    match state.player.status {
        GameStatus::Won => draw_banner(out, view, "    YOU  MADE  IT!    ", Color::Green)?,
        GameStatus::Lost => draw_banner(out, view, "      GAME  OVER      ", Color::Red)?,
        GameStatus::Playing => {}
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, view.rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border & terrain ──────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, view: Viewport) -> std::io::Result<()> {
    let w = view.cols as usize;
    let bottom = view.rows.saturating_sub(2);

    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, 0))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    out.queue(cursor::MoveTo(0, bottom))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    for row in 1..bottom {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(view.cols.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

/// Water along the goal edge, grass where the player starts.
fn draw_terrain<W: Write>(out: &mut W, view: Viewport) -> std::io::Result<()> {
    let strip = "≈".repeat(view.inner_cols() as usize);
    if let Some((col, row)) = view.project(0.0, UPPER_LIMIT / 2.0) {
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(C_WATER))?;
        out.queue(Print(&strip))?;
    }
    let grass = "\"".repeat(view.inner_cols() as usize);
    if let Some((col, row)) = view.project(0.0, START_Y + 90.0) {
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(C_GRASS))?;
        out.queue(Print(&grass))?;
    }
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_entity<W: Write>(out: &mut W, entity: &Entity, view: Viewport) -> std::io::Result<()> {
    let Some((col, row)) = view.project(entity.x, entity.y) else {
        return Ok(());
    };
    let (text, color) = glyph(entity.sprite);
    // Clip against the right wall.
    let room = view.cols.saturating_sub(1).saturating_sub(col) as usize;
    let visible: String = text.chars().take(room).collect();
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(visible))?;
    Ok(())
}

/// The sprite, then the "Lives:" label next to the hearts.
fn draw_player<W: Write>(out: &mut W, state: &GameState, view: Viewport) -> std::io::Result<()> {
    draw_entity(out, &state.player.entity, view)?;
    if let Some((col, row)) = view.project(LIVES_LABEL_X, LIVES_LABEL_Y) {
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(C_LABEL))?;
        out.queue(Print(LIVES_LABEL))?;
    }
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, view: Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, view.rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← ↑ → ↓ : Move   R : Play Again   Q : Quit"))?;
    Ok(())
}

// ── End-of-game overlays ──────────────────────────────────────────────────────

fn draw_banner<W: Write>(
    out: &mut W,
    view: Viewport,
    title: &str,
    color: Color,
) -> std::io::Result<()> {
    let bar = "═".repeat(title.chars().count());
    let top = format!("╔{}╗", bar);
    let middle = format!("║{}║", title);
    let bottom = format!("╚{}╝", bar);
    let lines: &[(&str, Color)] = &[
        (top.as_str(), color),
        (middle.as_str(), color),
        (bottom.as_str(), color),
        ("R - Play Again  Q - Quit", Color::White),
    ];

    let cx = view.cols / 2;
    let start_row = (view.rows / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    Ok(())
}
