use ggez::event::{self, EventHandler};
use ggez::input::keyboard::KeyInput;
use ggez::input::mouse::MouseButton;
use ggez::{graphics, Context, GameResult};
use log::{debug, info};

mod assets;
mod config;
mod error;
mod food;
mod geometry;
mod input;
mod render;
mod score;
mod session;
mod snake;

use assets::Assets;
use config::GameConfig;
use error::SnakeError;
use geometry::Layout;
use session::GameSession;

const BACKGROUND_COLOR: graphics::Color = graphics::Color::BLACK;

/// Loop driver: owns the session and calls tick/draw on ggez's schedule.
struct SnakeApp {
    session: GameSession,
    layout: Layout,
    assets: Assets,
    ticks_per_second: u32,
}

impl SnakeApp {
    fn new(ctx: &mut Context, config: &GameConfig) -> Self {
        let layout = config.layout();
        SnakeApp {
            session: GameSession::new(layout.grid(), config.seed),
            layout,
            assets: Assets::load(ctx),
            ticks_per_second: config.ticks_per_second,
        }
    }

    fn apply(&mut self, command: input::Command) {
        if self.session.apply(command) {
            debug!("{:?} -> {:?}", command, self.session.state());
        }
    }
}

impl EventHandler for SnakeApp {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        while ctx.time.check_update_time(self.ticks_per_second) {
            if let Some(effect) = self.session.tick() {
                self.assets.play(ctx, effect);
            }
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        let mut canvas = graphics::Canvas::from_frame(ctx, BACKGROUND_COLOR);
        render::draw_frame(ctx, &mut canvas, &self.layout, &self.session, &self.assets)?;
        canvas.finish(ctx)
    }

    fn key_down_event(&mut self, _ctx: &mut Context, key: KeyInput, repeated: bool) -> GameResult {
        if repeated {
            return Ok(());
        }
        if let Some(keycode) = key.keycode {
            if let Some(command) = input::key_command(self.session.state(), keycode) {
                self.apply(command);
            }
        }
        Ok(())
    }

    fn mouse_button_down_event(
        &mut self,
        _ctx: &mut Context,
        button: MouseButton,
        x: f32,
        y: f32,
    ) -> GameResult {
        if let Some(command) = input::click_command(self.session.state(), &self.layout, button, x, y) {
            self.apply(command);
        }
        Ok(())
    }
}

fn main() -> Result<(), SnakeError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = GameConfig::load()?;
    info!(
        "{}x{} window, {} ticks/s",
        config.canvas_width, config.canvas_height, config.ticks_per_second
    );

    let window_setup = ggez::conf::WindowSetup::default().title("Snake").vsync(true);
    let window_mode = ggez::conf::WindowMode::default()
        .dimensions(config.canvas_width as f32, config.canvas_height as f32)
        .resizable(false);

    // No window or graphics context means no game; bail out before the loop starts.
    let (mut ctx, event_loop) = ggez::ContextBuilder::new("snake", "snake")
        .add_resource_path(config.resource_dir.clone())
        .window_setup(window_setup)
        .window_mode(window_mode)
        .build()?;

    let app = SnakeApp::new(&mut ctx, &config);
    event::run(ctx, event_loop, app)
}
