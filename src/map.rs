use crate::geom::Segment;
use crate::world::Pose;
use anyhow::Context;
use glam::Vec2;
use std::fs::read_to_string;
use std::path::PathBuf;

fn parse_point(raw: &str) -> anyhow::Result<Vec2> {
    let (x, y) = raw.trim().split_once(',').context("expected x,y")?;
    Ok(Vec2::new(x.trim().parse()?, y.trim().parse()?))
}

fn parse_size(raw: &str) -> anyhow::Result<(u32, u32)> {
    let (w, h) = raw.split_once('x').context("expected WxH")?;
    Ok((w.parse()?, h.parse()?))
}

/// startup configuration plus the static wall set, immutable once loaded
///
/// angles are written in degrees in the file and converted on load
#[derive(Clone, PartialEq, Debug)]
pub(crate) struct MapFile {
    pub map_size: (u32, u32),
    pub screen_size: (u32, u32),
    pub move_speed: f32,
    /// radians per rotate command
    pub rotate_speed: f32,
    pub sight_distance: f32,
    /// total width of the ray fan, radians
    pub fov: f32,
    pub rays: usize,
    pub zoom: f32,
    pub spawn: Pose,
    pub walls: Vec<Segment>,
}

impl Default for MapFile {
    fn default() -> Self {
        Self {
            map_size: (300, 300),
            screen_size: (300, 200),
            move_speed: 2.,
            rotate_speed: 3.6_f32.to_radians(),
            sight_distance: 250.,
            fov: 48.6_f32.to_radians(),
            rays: 100,
            zoom: 25.,
            spawn: Pose {
                pos: Vec2::new(75., 100.),
                angle: 270_f32.to_radians(),
            },
            walls: vec![],
        }
    }
}

impl MapFile {
    pub fn load(name: PathBuf) -> anyhow::Result<Self> {
        log::info!("loading map at {}", name.display());
        let file = read_to_string(&name)
            .with_context(|| format!("could not read map {}", name.display()))?;

        Self::parse(&file)
    }

    fn parse(file: &str) -> anyhow::Result<Self> {
        let mut lines = file.lines();
        let mut this = Self::default();

        while let Some(line) = lines.by_ref().next() {
            match line {
                "!!!!SETTINGS" => this.parse_settings(&mut lines)?,
                "!!!!PLAYER" => this.parse_player(&mut lines)?,
                "!!!!WALLS" => this.parse_walls(&mut lines)?,
                other => anyhow::bail!("unrecognized directive: {other}"),
            }
        }

        Ok(this)
    }

    fn parse_settings<'lines>(
        &mut self,
        mut lines: impl Iterator<Item = &'lines str>,
    ) -> anyhow::Result<()> {
        for line in lines.by_ref() {
            if line.is_empty() {
                break;
            }

            let (key, value) = line
                .split_once('=')
                .context("incorrectly formatted setting")?;
            match key {
                "map_size" => self.map_size = parse_size(value)?,
                "screen_size" => self.screen_size = parse_size(value)?,
                "move_speed" => self.move_speed = value.parse()?,
                "rotate_speed" => self.rotate_speed = value.parse::<f32>()?.to_radians(),
                "sight_distance" => self.sight_distance = value.parse()?,
                "fov" => self.fov = value.parse::<f32>()?.to_radians(),
                "rays" => self.rays = value.parse()?,
                "zoom" => self.zoom = value.parse()?,
                other => anyhow::bail!("unrecognized setting: {other}"),
            }
        }

        Ok(())
    }

    fn parse_player<'lines>(
        &mut self,
        mut lines: impl Iterator<Item = &'lines str>,
    ) -> anyhow::Result<()> {
        for line in lines.by_ref() {
            if line.is_empty() {
                break;
            }

            let (pos, angle) = line.rsplit_once(',').context("expected x,y,angle")?;
            self.spawn = Pose {
                pos: parse_point(pos)?,
                angle: angle.trim().parse::<f32>()?.to_radians(),
            };
        }

        Ok(())
    }

    fn parse_walls<'lines>(
        &mut self,
        mut lines: impl Iterator<Item = &'lines str>,
    ) -> anyhow::Result<()> {
        for line in lines.by_ref() {
            if line.is_empty() {
                break;
            }

            let (a, b) = line.split_once(' ').context("expected two endpoints")?;
            let wall = Segment::new(parse_point(a)?, parse_point(b)?);
            if wall.a == wall.b {
                anyhow::bail!("zero-length wall at {}", wall.a);
            }

            self.walls.push(wall);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEMO: &str = "\
!!!!SETTINGS
screen_size=320x240
move_speed=3
rotate_speed=9
rays=64

!!!!PLAYER
20,30,90

!!!!WALLS
0,0 0,300
10,10 40,25";

    #[test]
    fn parses_settings_player_and_walls() {
        let map = MapFile::parse(DEMO).unwrap();

        assert_eq!(map.screen_size, (320, 240));
        assert_eq!(map.move_speed, 3.);
        assert!((map.rotate_speed - 9_f32.to_radians()).abs() < 1e-6);
        assert_eq!(map.rays, 64);

        assert_eq!(map.spawn.pos, Vec2::new(20., 30.));
        assert!((map.spawn.angle - 90_f32.to_radians()).abs() < 1e-6);

        assert_eq!(
            map.walls,
            vec![
                Segment::new(Vec2::new(0., 0.), Vec2::new(0., 300.)),
                Segment::new(Vec2::new(10., 10.), Vec2::new(40., 25.)),
            ]
        );
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let map = MapFile::parse("").unwrap();
        assert_eq!(map, MapFile::default());

        // unlisted settings keep their defaults too
        let map = MapFile::parse("!!!!SETTINGS\nzoom=40").unwrap();
        assert_eq!(map.zoom, 40.);
        assert_eq!(map.rays, MapFile::default().rays);
    }

    #[test]
    fn unknown_directive_is_an_error() {
        assert!(MapFile::parse("!!!!BOGUS").is_err());
    }

    #[test]
    fn unknown_setting_is_an_error() {
        assert!(MapFile::parse("!!!!SETTINGS\nwarp_factor=9").is_err());
    }

    #[test]
    fn zero_length_wall_is_an_error() {
        assert!(MapFile::parse("!!!!WALLS\n5,5 5,5").is_err());
    }
}
