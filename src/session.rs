//! Interactive game session
//!
//! A session first lets the player pick a field (start, or generate a new
//! one), then reads moves until the player finds the hat or falls into a
//! hole. Every call to [`GameSession::step`] is one synchronous iteration:
//! at most one frame drawn and at most one line of input read.

use anyhow::Context;
use tracing::{debug, info, trace};

use crate::field_generator::FieldGenerator;
use crate::input::InputSource;
use crate::render::{Frame, Prompt, Renderer};
use crate::{classify_move, ConfigError, Direction, Field, FieldConfig, MoveOutcome, Point};

/// Input that starts the game from the menu. Anything else generates a new
/// field.
const START_KEY: &str = "s";

const INVALID_MOVE: &str = "Invalid move!";
const OUT_OF_BOUNDS: &str = "Out of bounds!";

/// Session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Menu: start the game or generate a new field
    ChoosingMap,
    /// Waiting for the player to pick a direction
    AwaitingMove,
    /// Direction chosen, move not yet applied
    ValidatingMove(Direction),
    Won,
    Lost,
}

/// How the game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player found the hat
    Won,
    /// Player fell into a hole
    Lost,
}

/// One play-through on one field at a time
pub struct GameSession {
    config: FieldConfig,
    generator: FieldGenerator,
    field: Field,
    /// Unset until the game is started from the menu
    position: Option<Point>,
    state: State,
    /// Status shown on the next move prompt
    message: Option<&'static str>,
}

impl GameSession {
    /// Start a session on a freshly generated field.
    ///
    /// Returns error if no field can be generated from `config`.
    pub fn new(config: FieldConfig, mut generator: FieldGenerator) -> Result<Self, ConfigError> {
        let field = generator.generate(&config)?;
        Ok(Self::from_field(field, config, generator))
    }

    /// Start a session on a given field. New fields generated from the menu
    /// use `config`.
    pub fn from_field(field: Field, config: FieldConfig, generator: FieldGenerator) -> Self {
        Self {
            config,
            generator,
            field,
            position: None,
            state: State::ChoosingMap,
            message: None,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn position(&self) -> Option<Point> {
        self.position
    }

    fn frame(&self, prompt: Prompt) -> Frame<'_> {
        Frame {
            field: &self.field,
            position: self.position,
            message: self.message,
            prompt,
        }
    }

    /// Advance the session by one state transition.
    ///
    /// Once the game is over, this is a no-op: nothing is drawn and no input
    /// is read.
    pub fn step(
        &mut self,
        input: &mut impl InputSource,
        renderer: &mut impl Renderer,
    ) -> anyhow::Result<State> {
        let next = match self.state {
            State::ChoosingMap => {
                let start = self
                    .field
                    .start_position()
                    .context("Field has no start tile")?;
                renderer.draw(&Frame {
                    field: &self.field,
                    position: Some(start),
                    message: None,
                    prompt: Prompt::Menu,
                })?;

                if input.next_line()? == START_KEY {
                    self.position = Some(start);
                    info!(%start, "game started");
                    State::AwaitingMove
                } else {
                    self.field = self.generator.generate(&self.config)?;
                    debug!("field regenerated");
                    State::ChoosingMap
                }
            }
            State::AwaitingMove => {
                renderer.draw(&self.frame(Prompt::Move))?;
                self.message = None;

                match input.next_line()?.parse::<Direction>() {
                    Ok(direction) => State::ValidatingMove(direction),
                    Err(_) => {
                        self.message = Some(INVALID_MOVE);
                        State::AwaitingMove
                    }
                }
            }
            State::ValidatingMove(direction) => {
                let position = self.position.context("Player position is not set")?;

                match classify_move(&self.field, position, direction) {
                    MoveOutcome::OutOfBounds => {
                        self.message = Some(OUT_OF_BOUNDS);
                        State::AwaitingMove
                    }
                    MoveOutcome::Walked(target) => {
                        self.position = Some(target);
                        self.field.mark_path(target);
                        State::AwaitingMove
                    }
                    MoveOutcome::Fell(target) => {
                        info!(%target, "fell into a hole");
                        renderer.draw(&self.frame(Prompt::Lost))?;
                        State::Lost
                    }
                    MoveOutcome::FoundHat(target) => {
                        info!(%target, "found the hat");
                        renderer.draw(&self.frame(Prompt::Won))?;
                        State::Won
                    }
                }
            }
            State::Won | State::Lost => self.state,
        };

        trace!(from = ?self.state, to = ?next, "transition");
        self.state = next;
        Ok(next)
    }

    /// Play until the game is over
    pub fn run(
        &mut self,
        input: &mut impl InputSource,
        renderer: &mut impl Renderer,
    ) -> anyhow::Result<Outcome> {
        loop {
            match self.step(input, renderer)? {
                State::Won => return Ok(Outcome::Won),
                State::Lost => return Ok(Outcome::Lost),
                _ => (),
            }
        }
    }
}
