use crate::geom::{Intersection, Segment};
use crate::map::MapFile;
use crate::project::{project, Strip};
use crate::ray::{find_intersections, generate_rays};
use crate::world::{Command, World};
use crate::StringToAnyhow;
use glam::Vec2;
use sdl2::keyboard::Keycode;
use sdl2::pixels::Color;
use sdl2::rect::{Point, Rect};
use sdl2::render::{BlendMode, Canvas};
use sdl2::video::Window;

#[derive(Clone, Copy, PartialEq, Debug)]
pub(crate) enum GameState {
    Playing,
    Paused,
    Exit,
}

fn point(vec: Vec2) -> Point {
    Point::new(vec.x as i32, vec.y as i32)
}

pub(crate) struct Game {
    config: MapFile,
    world: World,
    pub game_state: GameState,
    // per-frame output, rebuilt from scratch every frame; `rays` and `hits`
    // are index-parallel (ray index = hit index = screen column), strips
    // carry their own column
    rays: Vec<Segment>,
    hits: Vec<Option<Intersection>>,
    strips: Vec<Strip>,
    pub canvas: Canvas<Window>,
    pub update: bool,
}

impl Game {
    /// initialize game
    pub fn new(canvas: Canvas<Window>, config: MapFile) -> Self {
        let world = World {
            walls: config.walls.clone(),
            player: config.spawn,
        };

        Self {
            config,
            world,
            game_state: GameState::Playing,
            rays: vec![],
            hits: vec![],
            strips: vec![],
            canvas,
            update: true,
        }
    }

    /// handle key presses for while in "playing" state
    pub fn playing_key_once(&mut self, key: Keycode) {
        if key == Keycode::Escape {
            self.game_state = GameState::Paused;
        }
    }

    /// handle key repeating for while in "playing" state
    pub fn playing_key(&mut self, key: Keycode) {
        // define controls
        let command = match key {
            Keycode::Up | Keycode::W => Some(Command::Forward),
            Keycode::Down | Keycode::S => Some(Command::Backward),
            Keycode::Left | Keycode::A => Some(Command::RotateLeft),
            Keycode::Right | Keycode::D => Some(Command::RotateRight),
            _ => None,
        };

        if let Some(command) = command {
            self.world
                .player
                .apply(command, self.config.move_speed, self.config.rotate_speed);
        }
    }

    /// handle key presses for while in "paused" state
    pub fn paused_key_once(&mut self, key: Keycode) {
        match key {
            Keycode::Backspace => self.game_state = GameState::Exit,
            _ => self.game_state = GameState::Playing,
        }
    }

    /// one simulation step: rebuild the ray fan, intersect it against the
    /// wall set, project the hits to screen strips
    fn advance_frame(&mut self) {
        self.rays = generate_rays(
            &self.world.player,
            self.config.fov,
            self.config.rays,
            self.config.sight_distance,
        );
        self.hits = find_intersections(&self.rays, &self.world.walls);
        self.strips = project(
            &self.hits,
            self.world.player.pos,
            self.config.screen_size.1 as f32,
            self.config.zoom,
        );
    }

    // draw while in "playing" state
    pub fn playing_draw(&mut self) -> anyhow::Result<()> {
        self.advance_frame();

        self.canvas.set_draw_color(Color::BLACK);
        self.canvas.clear();

        self.draw_map_view()?;
        self.draw_screen_view()?;

        Ok(())
    }

    /// top-down view: walls, player marker, the ray fan and its hit points
    fn draw_map_view(&mut self) -> anyhow::Result<()> {
        let (map_w, map_h) = self.config.map_size;

        self.canvas.set_draw_color(Color::WHITE);
        self.canvas.fill_rect(Rect::new(0, 0, map_w, map_h)).ah()?;

        self.canvas.set_draw_color(Color::BLACK);
        for wall in self.world.walls.iter() {
            self.canvas.draw_line(point(wall.a), point(wall.b)).ah()?;
        }

        self.draw_circle(self.world.player.pos, 5, Color::BLACK)?;

        self.canvas.set_draw_color(Color::GREY);
        for ray in self.rays.iter() {
            self.canvas.draw_line(point(ray.a), point(ray.b)).ah()?;
        }

        let hit_points: Vec<Vec2> = self.hits.iter().flatten().map(|hit| hit.point).collect();
        for point in hit_points {
            self.draw_circle(point, 2, Color::RED)?;
        }

        Ok(())
    }

    /// forward pseudo-3d view: gradient backdrop plus one shaded strip per
    /// hit column; missed columns leave the backdrop showing through
    fn draw_screen_view(&mut self) -> anyhow::Result<()> {
        let (screen_w, screen_h) = self.config.screen_size;
        let offset = Point::new(self.config.map_size.0 as i32, 0);

        // backdrop: light at the edges, black at the horizon line
        for row in 0..screen_h {
            let ratio = row as f32 / (screen_h - 1).max(1) as f32;
            let level = (200. * (2. * ratio - 1.).abs()) as u8;

            self.canvas.set_draw_color(Color::RGB(level, level, level));
            self.canvas
                .draw_line(
                    offset + Point::new(0, row as i32),
                    offset + Point::new(screen_w as i32 - 1, row as i32),
                )
                .ah()?;
        }

        if self.config.rays == 0 {
            return Ok(());
        }
        let strip_width = screen_w as f32 / self.config.rays as f32;

        for strip in self.strips.iter() {
            self.canvas
                .set_draw_color(Color::RGB(strip.shade, strip.shade, strip.shade));
            self.canvas
                .fill_rect(Rect::new(
                    offset.x + (strip.column as f32 * strip_width) as i32,
                    offset.y + strip.top as i32,
                    strip_width.ceil() as u32,
                    strip.height as u32,
                ))
                .ah()?;
        }

        Ok(())
    }

    // draw pause overlay
    pub fn pause_draw(&mut self) -> anyhow::Result<()> {
        self.canvas.set_blend_mode(BlendMode::Blend);
        self.canvas.set_draw_color(Color::RGBA(0, 0, 0, 0xDD));
        self.canvas.fill_rect(None).ah()?;
        self.canvas.set_blend_mode(BlendMode::None);

        Ok(())
    }

    /// sdl2 has no circle primitive, plot a midpoint circle point by point
    fn draw_circle(&mut self, center: Vec2, radius: i32, color: Color) -> anyhow::Result<()> {
        self.canvas.set_draw_color(color);
        let center = point(center);

        let mut x = radius;
        let mut y = 0;
        let mut err = 0;

        while x >= y {
            for (dx, dy) in [
                (x, y),
                (y, x),
                (-y, x),
                (-x, y),
                (-x, -y),
                (-y, -x),
                (y, -x),
                (x, -y),
            ] {
                self.canvas.draw_point(center + Point::new(dx, dy)).ah()?;
            }

            y += 1;
            if err <= 0 {
                err += 2 * y + 1;
            }
            if err > 0 {
                x -= 1;
                err -= 2 * x + 1;
            }
        }

        Ok(())
    }
}
