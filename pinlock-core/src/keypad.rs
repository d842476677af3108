//! Main loop
//!
//! [`Keypad`] owns the board capabilities and all loop state. Each
//! [`Keypad::step`] is one iteration: sample the mode switch, draw a
//! frame, poll the buttons, and check the password once either pointer
//! has run off the end of the buffer.
//!
//! Everything blocks. While the success or error animation is running the
//! buttons are not polled, except for the Clear check inside the success
//! scroll.

use crate::config::{ConfigError, KeypadConfig};
use crate::display::{Multiplexer, RenderEngine, RenderOutcome};
use crate::input::{Action, InputHandler};
use crate::password::{PasswordChecker, Verdict};
use crate::state::{DisplayMode, KeypadState, OperatingMode};
use crate::traits::{Clock, DigitalIo, InputLine, OutputLine};

/// What happened during one loop iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StepReport {
    /// Mode the frame was drawn in
    pub display: DisplayMode,
    /// How the frame ended
    pub render: RenderOutcome,
    /// Button action applied after the frame
    pub action: Option<Action>,
    /// Password check run at the end of the iteration
    pub verdict: Option<Verdict>,
}

/// The password keypad
pub struct Keypad<IO, C> {
    io: IO,
    clock: C,
    state: KeypadState,
    render: RenderEngine,
    input: InputHandler,
    checker: PasswordChecker,
}

impl<IO: DigitalIo, C: Clock> Keypad<IO, C> {
    /// Validate the configuration and take over the board
    ///
    /// All digits are deselected before the first frame.
    ///
    /// # Errors
    /// Returns the configuration problem if `config` cannot drive the loop.
    pub fn new(mut io: IO, clock: C, config: &KeypadConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Multiplexer::new(&mut io).blank_all();

        Ok(Self {
            io,
            clock,
            state: KeypadState::new(),
            render: RenderEngine::new(config.timing),
            input: InputHandler::new(config.timing.settle_us),
            checker: PasswordChecker::new(config.password),
        })
    }

    /// Run one loop iteration
    pub fn step(&mut self) -> StepReport {
        let mode = OperatingMode::from_switch(self.io.read(InputLine::Mode));
        if mode != self.state.mode {
            #[cfg(feature = "defmt")]
            defmt::info!("mode switched to {}", mode);
            self.state.mode = mode;
        }
        self.io
            .write(OutputLine::StatusLed, mode == OperatingMode::Advanced);

        let display = self.state.display_mode();
        let render = self.render.render(
            &self.state.buffer,
            self.state.blink_slot(),
            &mut self.io,
            &mut self.clock,
        );

        let action = self.input.poll(&mut self.state, &mut self.io, &mut self.clock);

        let verdict = if self.state.is_full() {
            let verdict = self.checker.check(&mut self.state);
            #[cfg(feature = "defmt")]
            defmt::info!("password check: {}", verdict);
            Some(verdict)
        } else {
            None
        };

        StepReport {
            display,
            render,
            action,
            verdict,
        }
    }

    /// Run the loop forever
    pub fn run(&mut self) -> ! {
        loop {
            self.step();
        }
    }

    pub fn state(&self) -> &KeypadState {
        &self.state
    }

    pub fn io(&self) -> &IO {
        &self.io
    }

    pub fn io_mut(&mut self) -> &mut IO {
        &mut self.io
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Give the board back
    pub fn into_parts(self) -> (IO, C) {
        (self.io, self.clock)
    }
}
