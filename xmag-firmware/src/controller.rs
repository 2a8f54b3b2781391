//! Frame loop
//!
//! One poll per frame: sample the knobs, advance the state machine, draw
//! whatever the new state shows, push it to the LCD, then sleep for the
//! frame period. Nothing runs between polls.

use embedded_hal::delay::DelayNs;
use tracing::{info, trace};
use xmag_core::config::XmagConfig;
use xmag_core::geometry::plan_viewport;
use xmag_core::indicator::led_pattern;
use xmag_core::input::decode;
use xmag_core::state::{AppState, Event};
use xmag_display::{flush, render_live_view, FrameBuffer, Pixel, Raster, TitleScreen};
use xmag_hal::Board;

/// The magnifier application
///
/// Owns the board, the source image and the frame buffer for the lifetime
/// of the loop.
pub struct Magnifier<B, D> {
    board: B,
    delay: D,
    config: XmagConfig,
    source: Raster,
    frame: FrameBuffer,
    title: TitleScreen,
    state: AppState,
    /// Last mask written to the LED line
    leds: Option<u32>,
    frames: u64,
}

impl<B: Board, D: DelayNs> Magnifier<B, D> {
    /// `frame` must match the display size; `source` is shown as-is
    pub fn new(board: B, delay: D, config: XmagConfig, source: Raster, frame: FrameBuffer) -> Self {
        Self {
            title: TitleScreen::new(config.buttons.confirm, config.buttons.quit),
            board,
            delay,
            config,
            source,
            frame,
            state: AppState::default(),
            leds: None,
            frames: 0,
        }
    }

    /// Run one poll and return the state it left the application in
    pub fn step(&mut self) -> AppState {
        let input = decode(self.board.read_input());
        trace!(
            x = input.x_axis,
            y = input.y_axis,
            zoom = input.zoom_axis,
            buttons = input.buttons.bits(),
            "knobs"
        );

        let event = Event::from_input(&input, &self.config.buttons);
        let next = self.state.transition(event);
        if next != self.state {
            info!(from = ?self.state, to = ?next, "state change");
            self.state = next;
        }

        match self.state {
            AppState::Title => {
                self.title.render(&mut self.frame);
                self.set_leds(0);
            }
            AppState::LiveView => {
                let viewport = plan_viewport(
                    &input,
                    &self.config.zoom,
                    self.source.width(),
                    self.source.height(),
                );
                render_live_view(&mut self.frame, &self.source, &viewport);
                self.set_leds(led_pattern(
                    viewport.zoom,
                    self.config.zoom.min,
                    self.config.zoom.max,
                    self.config.indicator.led_count,
                ));
            }
            AppState::Exiting => return self.state,
        }

        flush(&self.frame, &mut self.board);
        self.frames += 1;
        self.delay.delay_ms(self.config.timing.frame_period_ms);
        self.state
    }

    /// Poll until the user quits
    pub fn run(&mut self) {
        info!("entering frame loop");
        while !self.step().is_terminal() {}
        info!(frames = self.frames, "frame loop finished");
    }

    /// Blank the panel and turn the LED line off
    pub fn shutdown(&mut self) {
        self.frame.fill(Pixel::BLACK);
        flush(&self.frame, &mut self.board);
        self.board.clear_leds();
        self.leds = Some(0);
        info!("display blanked, LEDs off");
    }

    fn set_leds(&mut self, mask: u32) {
        if self.leds != Some(mask) {
            self.board.write_led(mask);
            self.leds = Some(mask);
        }
    }
}
