use log::info;

use crate::config::Config;
use crate::display::{Audio, DisplayPort, FrameClock};
use crate::input::InputPoller;
use crate::main_game::MainGame;
use crate::object::ObjectPool;
use crate::title::{Title, TransitionListener};
use crate::world;
use crate::ScreenContext;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Screen {
    Title,
    MainGame,
}

/// Owns every screen and the shared hardware state, and forwards each tick
/// to the current screen only.
pub struct Game<D, I> {
    display: D,
    input: I,
    objects: ObjectPool,
    title: Title,
    main_game: MainGame,
    current: Screen,
    config: Config,
}

/// What the title screen sees of the game while it fades.
struct Handoff<'a> {
    main_game: &'a mut MainGame,
    current: &'a mut Screen,
    config: &'a Config,
}

impl<'a, D: DisplayPort, I> TransitionListener<D, I> for Handoff<'a> {
    fn on_transition_black(&mut self, ctx: &mut ScreenContext<'_, D, I>) {
        info!("screen is black, loading the overworld");
        world::spawn_scenery(ctx.objects, self.config);
        self.main_game.init(ctx);
    }

    fn on_finished_transition(&mut self, _ctx: &mut ScreenContext<'_, D, I>) {
        info!("switching to the overworld");
        *self.current = Screen::MainGame;
    }
}

impl<D: DisplayPort, I: InputPoller> Game<D, I> {
    pub fn new(display: D, input: I, config: Config) -> Self {
        Self {
            display,
            input,
            objects: ObjectPool::new(),
            title: Title::new(&config),
            main_game: MainGame::new(&config),
            current: Screen::Title,
            config,
        }
    }

    /// Brings up the hardware and shows the title screen.
    pub fn init(&mut self, audio: &mut impl Audio) {
        self.display.setup();
        audio.init();
        let mut ctx = ScreenContext {
            input: &self.input,
            objects: &mut self.objects,
            display: &mut self.display,
        };
        self.title.show(&mut ctx);
        self.display.present(&self.objects);
        info!("title screen shown");
    }

    pub fn update(&mut self) {
        self.input.update();

        let Self {
            display,
            input,
            objects,
            title,
            main_game,
            current,
            config,
        } = self;
        let mut ctx = ScreenContext {
            input: &*input,
            objects,
            display,
        };

        let screen = *current;
        match screen {
            Screen::Title => {
                let mut handoff = Handoff {
                    main_game,
                    current,
                    config,
                };
                title.update(&mut ctx, &mut handoff);
            }
            Screen::MainGame => main_game.update(&mut ctx),
        }

        self.display.present(&self.objects);
    }

    /// One full frame: update, wait for the refresh, then flush.
    pub fn run_frame(&mut self, clock: &mut impl FrameClock) {
        self.update();
        clock.wait_for_frame();
        self.display.commit();
    }

    pub fn current_screen(&self) -> Screen {
        self.current
    }

    pub fn title(&self) -> &Title {
        &self.title
    }

    pub fn main_game(&self) -> &MainGame {
        &self.main_game
    }

    pub fn objects(&self) -> &ObjectPool {
        &self.objects
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::{ScrollOffset, MAX_BRIGHTNESS};
    use crate::input::Button;
    use crate::testing::{CountingAudio, CountingClock, DisplayCall, RecordingDisplay, ScriptedInput};

    type TestGame = Game<RecordingDisplay, ScriptedInput>;

    fn started(config: Config) -> TestGame {
        let mut game = Game::new(RecordingDisplay::default(), ScriptedInput::default(), config);
        let mut audio = CountingAudio::default();
        game.init(&mut audio);
        assert_eq!(audio.inits, 1);
        game
    }

    fn press_start(game: &mut TestGame) {
        game.input_mut().hold(Button::Start);
        game.update();
        game.input_mut().release(Button::Start);
    }

    #[test_log::test]
    fn init_sets_up_hardware_then_shows_title() {
        let game = started(Config::DEFAULT);
        assert_eq!(
            game.display().calls,
            [DisplayCall::Setup, DisplayCall::LoadTitle, DisplayCall::ClearSecondary]
        );
        assert_eq!(game.current_screen(), Screen::Title);
        assert_eq!(game.objects().live_count(), 0);
    }

    #[test_log::test]
    fn title_hands_over_to_main_game_after_the_fade() {
        let config = Config::DEFAULT;
        let mut game = started(config);
        let fade = config.fade_ticks as usize;
        let pause = config.black_pause_ticks as usize;

        press_start(&mut game);
        for _ in 1..fade {
            game.update();
        }
        assert_eq!(game.display().count(DisplayCall::LoadMainGame), 0);

        // Middle: the overworld loads while the screen is black.
        game.update();
        assert_eq!(game.display().count(DisplayCall::LoadMainGame), 1);
        assert_eq!(game.display().count(DisplayCall::LoadMainGameTilemap), 1);
        assert_eq!(game.display().brightness, 0);
        assert_eq!(game.current_screen(), Screen::Title);

        for _ in 0..pause + fade {
            game.update();
            assert_eq!(game.current_screen(), Screen::Title);
        }

        game.update();
        assert_eq!(game.current_screen(), Screen::MainGame);
        assert_eq!(game.display().brightness, MAX_BRIGHTNESS);
        assert!(!game.title().is_transitioning());

        for _ in 0..50 {
            game.update();
        }
        assert_eq!(game.display().count(DisplayCall::LoadMainGame), 1);
    }

    #[test]
    fn main_game_captures_the_spawned_scenery() {
        let config = Config {
            fade_ticks: 2,
            black_pause_ticks: 1,
            ..Config::DEFAULT
        };
        let mut game = started(config);
        press_start(&mut game);
        for _ in 0..10 {
            game.update();
        }
        assert_eq!(game.current_screen(), Screen::MainGame);
        assert_eq!(game.main_game().secondary_objects().len(), config.scenery_count);
        let player = game.main_game().player().unwrap();
        assert_eq!(player.index(), config.scenery_count);
        assert_eq!(game.objects().live_count(), config.scenery_count + 1);
    }

    #[test]
    fn title_is_suspended_once_main_game_is_current() {
        let config = Config {
            fade_ticks: 1,
            black_pause_ticks: 0,
            ..Config::DEFAULT
        };
        let mut game = started(config);
        press_start(&mut game);
        for _ in 0..5 {
            game.update();
        }
        assert_eq!(game.current_screen(), Screen::MainGame);

        // Start now reaches nobody and directions drive the camera.
        press_start(&mut game);
        assert!(!game.title().is_transitioning());
        game.input_mut().hold(Button::Left);
        game.update();
        assert_eq!(game.main_game().scroll(), ScrollOffset::new(-1, 0));
        assert_eq!(game.display().scroll, ScrollOffset::new(-1, 0));
    }

    #[test]
    fn main_game_does_not_run_during_the_title() {
        let mut game = started(Config::DEFAULT);
        game.input_mut().hold(Button::Right);
        for _ in 0..20 {
            game.update();
        }
        assert_eq!(game.display().scroll_writes, 0);
        assert_eq!(game.main_game().scroll(), ScrollOffset::ZERO);
    }

    #[test]
    fn run_frame_waits_then_commits() {
        let mut game = started(Config::DEFAULT);
        let mut clock = CountingClock::default();
        for _ in 0..3 {
            game.run_frame(&mut clock);
        }
        assert_eq!(clock.frames, 3);
        assert_eq!(game.display().commits, 3);
        // Once from init, then once per frame.
        assert_eq!(game.display().presented, 4);
    }
}
