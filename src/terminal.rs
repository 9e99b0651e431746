/// Full-screen terminal session.  Dropping the guard puts the terminal back
/// the way it was, however the game loop ends.
use std::io::Write;

use crossterm::{cursor, terminal, ExecutableCommand};

pub struct TerminalGuard<W: Write> {
    out: W,
    raw: bool,
}

impl<W: Write> TerminalGuard<W> {
    pub fn new(out: W) -> Self {
        TerminalGuard { out, raw: false }
    }

    /// Raw mode, alternate screen, hidden cursor.  A failure part-way is
    /// undone when the guard drops.
    pub fn enter(&mut self) -> std::io::Result<()> {
        terminal::enable_raw_mode()?;
        self.raw = true;
        self.out.execute(terminal::EnterAlternateScreen)?;
        self.out.execute(cursor::Hide)?;
        Ok(())
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.out
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        let _ = self.out.execute(cursor::Show);
        let _ = self.out.execute(terminal::LeaveAlternateScreen);
        if self.raw {
            let _ = terminal::disable_raw_mode();
        }
    }
}
