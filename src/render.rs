// Frame drawing. Reads the session, never changes it.

use ggez::graphics::{self, Canvas, Color, DrawMode, DrawParam, Mesh, Rect, Text, TextLayout};
use ggez::mint::{Point2, Vector2};
use ggez::{Context, GameResult};

use crate::assets::Assets;
use crate::geometry::{Layout, Region, CELL_SIZE};
use crate::session::{GameSession, GameState};

const SCOREBOARD_COLOR: Color = Color::new(0.4, 0.2, 0.0, 1.0); // #663300
const PLAY_AREA_COLOR: Color = Color::new(0.0, 0.6, 0.2, 1.0); // #009933
const HEAD_COLOR: Color = Color::new(0.05, 0.2, 0.6, 1.0);
const BODY_COLOR: Color = Color::new(0.95, 0.95, 0.95, 1.0);
const FOOD_PLACEHOLDER_COLOR: Color = Color::new(0.85, 0.1, 0.1, 1.0);
const PANEL_COLOR: Color = Color::new(0.9, 0.8, 0.55, 1.0);
const BUTTON_COLOR: Color = Color::new(0.85, 0.45, 0.1, 1.0);
const OVERLAY_COLOR: Color = Color::new(0.0, 0.0, 0.0, 0.35);

pub fn draw_frame(
    ctx: &mut Context,
    canvas: &mut Canvas,
    layout: &Layout,
    session: &GameSession,
    assets: &Assets,
) -> GameResult {
    fill(ctx, canvas, layout.scoreboard, SCOREBOARD_COLOR)?;
    fill(ctx, canvas, layout.play_area, PLAY_AREA_COLOR)?;
    draw_food(ctx, canvas, layout, session, assets)?;
    draw_snake(ctx, canvas, layout, session)?;

    match session.state() {
        GameState::GetReady => draw_get_ready(ctx, canvas, layout, session)?,
        GameState::Playing => draw_score(canvas, layout, session),
        GameState::GameOver => draw_game_over(ctx, canvas, layout, session)?,
    }
    Ok(())
}

fn draw_food(
    ctx: &mut Context,
    canvas: &mut Canvas,
    layout: &Layout,
    session: &GameSession,
    assets: &Assets,
) -> GameResult {
    let cell = layout.cell_region(session.food().cell);
    match &assets.food {
        Some(image) => {
            let scale = Vector2 {
                x: CELL_SIZE as f32 / image.width().max(1) as f32,
                y: CELL_SIZE as f32 / image.height().max(1) as f32,
            };
            canvas.draw(
                image,
                DrawParam::default()
                    .dest(Point2 { x: cell.x, y: cell.y })
                    .scale(scale),
            );
            Ok(())
        }
        None => fill(ctx, canvas, layout.piece_region(session.food().cell), FOOD_PLACEHOLDER_COLOR),
    }
}

fn draw_snake(
    ctx: &mut Context,
    canvas: &mut Canvas,
    layout: &Layout,
    session: &GameSession,
) -> GameResult {
    for (i, cell) in session.snake().body().iter().enumerate() {
        let color = if i == 0 { HEAD_COLOR } else { BODY_COLOR };
        fill(ctx, canvas, layout.piece_region(*cell), color)?;
    }
    Ok(())
}

fn draw_score(canvas: &mut Canvas, layout: &Layout, session: &GameSession) {
    let board = layout.scoreboard;
    draw_centered(
        canvas,
        session.score().value.to_string(),
        35.0,
        board.center_x(),
        board.y + board.height / 2.0,
        Color::WHITE,
    );
}

fn draw_get_ready(
    ctx: &mut Context,
    canvas: &mut Canvas,
    layout: &Layout,
    session: &GameSession,
) -> GameResult {
    let board = layout.scoreboard;
    draw_centered(
        canvas,
        format!("Best: {}", session.score().best),
        24.0,
        board.center_x(),
        board.y + board.height / 2.0,
        Color::WHITE,
    );

    fill(ctx, canvas, layout.play_area, OVERLAY_COLOR)?;
    let area = layout.play_area;
    let mid_y = area.y + area.height / 2.0;
    draw_centered(canvas, "Get Ready", 40.0, area.center_x(), mid_y - 40.0, Color::WHITE);
    draw_centered(
        canvas,
        "Click, Enter or Space to start",
        20.0,
        area.center_x(),
        mid_y + 40.0,
        Color::WHITE,
    );
    Ok(())
}

fn draw_game_over(
    ctx: &mut Context,
    canvas: &mut Canvas,
    layout: &Layout,
    session: &GameSession,
) -> GameResult {
    let panel = layout.game_over_panel();
    let button = layout.start_button();
    let score = session.score();

    fill(ctx, canvas, layout.play_area, OVERLAY_COLOR)?;
    fill(ctx, canvas, panel, PANEL_COLOR)?;
    draw_centered(canvas, "Game Over", 30.0, panel.center_x(), panel.y + 24.0, Color::BLACK);
    draw_centered(
        canvas,
        format!("Score: {}", score.value),
        24.0,
        panel.center_x(),
        panel.y + 62.0,
        Color::BLACK,
    );

    let best = match score.best_at {
        Some(at) => format!("Best: {} ({})", score.best, at.format("%H:%M")),
        None => format!("Best: {}", score.best),
    };
    draw_centered(canvas, best, 24.0, panel.center_x(), panel.y + 94.0, Color::BLACK);

    fill(ctx, canvas, button, BUTTON_COLOR)?;
    draw_centered(
        canvas,
        "start",
        24.0,
        button.center_x(),
        button.y + button.height / 2.0,
        Color::WHITE,
    );
    Ok(())
}

fn fill(ctx: &mut Context, canvas: &mut Canvas, region: Region, color: Color) -> GameResult {
    let rect = Rect::new(region.x, region.y, region.width, region.height);
    canvas.draw(
        &Mesh::new_rectangle(ctx, DrawMode::fill(), rect, color)?,
        DrawParam::default(),
    );
    Ok(())
}

fn draw_centered(
    canvas: &mut Canvas,
    content: impl Into<graphics::TextFragment>,
    scale: f32,
    x: f32,
    y: f32,
    color: Color,
) {
    let mut text = Text::new(content);
    text.set_scale(scale).set_layout(TextLayout::center());
    canvas.draw(&text, DrawParam::default().dest(Point2 { x, y }).color(color));
}
