//! Drawing the field on a terminal

use std::io::Write;

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::{Field, Point, Tile};

/// What the player is asked for below the field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    /// Start the game or generate a new field
    Menu,
    /// Choose a direction
    Move,
    /// Game over, the hat was found
    Won,
    /// Game over, the player fell into a hole
    Lost,
}

/// Everything needed to draw one screen
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub field: &'a Field,
    /// Current player position, highlighted differently from the trail
    pub position: Option<Point>,
    /// One-line status, e.g. a rejected move
    pub message: Option<&'a str>,
    pub prompt: Prompt,
}

/// Presents frames to the player
pub trait Renderer {
    fn draw(&mut self, frame: &Frame<'_>) -> Result<()>;
}

/// Colored full-screen redraws through crossterm
pub struct TerminalRenderer<W: Write> {
    out: W,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Give back the writer, e.g. to inspect what was drawn into a buffer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn bold(&mut self, text: &str, color: Option<Color>) -> Result<()> {
        self.out.queue(SetAttribute(Attribute::Bold))?;
        if let Some(color) = color {
            self.out.queue(SetForegroundColor(color))?;
        }
        self.out.queue(Print(text))?;
        self.out.queue(ResetColor)?;
        self.out.queue(SetAttribute(Attribute::Reset))?;
        Ok(())
    }

    fn plain(&mut self, text: &str) -> Result<()> {
        self.out.queue(Print(text))?;
        Ok(())
    }

    fn field(&mut self, field: &Field, position: Option<Point>) -> Result<()> {
        for (row, line) in field.rows().enumerate() {
            for (col, &tile) in line.iter().enumerate() {
                let color = match tile {
                    Tile::Hat => Some(Color::Yellow),
                    Tile::Hole => Some(Color::Red),
                    Tile::Path if position == Some(Point { row, col }) => Some(Color::Green),
                    Tile::Path => Some(Color::White),
                    Tile::Open => None,
                };
                self.bold(&tile.symbol().to_string(), color)?;
                self.plain(" ")?;
            }
            self.plain("\n\n")?;
        }
        Ok(())
    }

    fn prompt(&mut self, prompt: Prompt) -> Result<()> {
        match prompt {
            Prompt::Menu => {
                self.plain("press ")?;
                self.bold("[s]", Some(Color::Blue))?;
                self.plain(" to start game or ")?;
                self.bold("[any key]", Some(Color::Blue))?;
                self.plain(" / ")?;
                self.bold("[enter]", Some(Color::Blue))?;
                self.plain(" to generate new map\n\n: ")?;
            }
            Prompt::Move => {
                self.bold("w = up ", Some(Color::Blue))?;
                self.bold("a = left ", Some(Color::Magenta))?;
                self.bold("s = down ", Some(Color::Green))?;
                self.bold("d = right", Some(Color::Cyan))?;
                self.plain("\n\nWhich way? ")?;
            }
            Prompt::Won => {
                self.bold("\nCongrats, you found your hat!", Some(Color::Yellow))?;
                self.plain("\n")?;
            }
            Prompt::Lost => {
                self.plain("\nSorry, you fell down a hole... ")?;
                self.bold("GAME OVER!", Some(Color::Yellow))?;
                self.plain("\n")?;
            }
        }
        Ok(())
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn draw(&mut self, frame: &Frame<'_>) -> Result<()> {
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        self.out.queue(cursor::MoveTo(0, 0))?;

        let position = frame
            .position
            .map_or_else(|| String::from("-"), |p| p.to_string());
        self.plain(&format!("Current position: {}\n\n", position))?;

        self.field(frame.field, frame.position)?;

        if let Some(message) = frame.message {
            self.out.queue(SetForegroundColor(Color::Red))?;
            self.out.queue(Print(message))?;
            self.out.queue(ResetColor)?;
            self.plain("\n\n")?;
        }

        self.prompt(frame.prompt)?;
        self.out.flush()?;
        Ok(())
    }
}
