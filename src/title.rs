use log::info;

use crate::config::Config;
use crate::display::DisplayPort;
use crate::fade::{Fade, FadeState};
use crate::input::{Button, InputPoller};
use crate::ScreenContext;

/// Receives the two hand-off points of the title screen's fade.
///
/// Each hook fires at most once per transition, in order, and never while
/// the title screen is itself borrowed by the caller.
pub trait TransitionListener<D, I> {
    /// The screen just went fully black. Heavy loads belong here.
    fn on_transition_black(&mut self, ctx: &mut ScreenContext<'_, D, I>);
    fn on_finished_transition(&mut self, ctx: &mut ScreenContext<'_, D, I>);
}

pub struct Title {
    fade: Fade,
    black_pause: u16,
    wait: u16,
    transition_triggered: bool,
    black_signalled: bool,
}

impl Title {
    pub fn new(config: &Config) -> Self {
        Self {
            fade: Fade::new(config.fade_ticks),
            black_pause: config.black_pause_ticks,
            wait: 0,
            transition_triggered: false,
            black_signalled: false,
        }
    }

    /// Overwrites the shared display memory; never call while another
    /// screen is visible.
    pub fn show<D: DisplayPort, I>(&mut self, ctx: &mut ScreenContext<'_, D, I>) {
        ctx.display.load_title_screen_assets();
        ctx.display.clear_secondary_background();
        self.fade.reset();
        ctx.display.set_brightness(self.fade.brightness());
    }

    pub fn update<D, I, L>(&mut self, ctx: &mut ScreenContext<'_, D, I>, listener: &mut L)
    where
        D: DisplayPort,
        I: InputPoller,
        L: TransitionListener<D, I>,
    {
        if !self.transition_triggered && ctx.input.is_just_pressed(Button::Start) {
            info!("start pressed, fading out");
            self.fade.reset();
            self.transition_triggered = true;
            self.black_signalled = false;
            self.wait = 0;
        }

        if !self.transition_triggered {
            return;
        }

        if self.wait > 0 {
            self.wait -= 1;
            return;
        }

        self.fade.update();
        ctx.display.set_brightness(self.fade.brightness());

        match self.fade.get_state() {
            FadeState::Middle if !self.black_signalled => {
                self.black_signalled = true;
                self.wait = self.black_pause;
                listener.on_transition_black(ctx);
            }
            FadeState::Finished => {
                self.transition_triggered = false;
                listener.on_finished_transition(ctx);
            }
            _ => {}
        }
    }

    pub fn is_transitioning(&self) -> bool {
        self.transition_triggered
    }

    pub fn fade_state(&self) -> FadeState {
        self.fade.get_state()
    }
}
