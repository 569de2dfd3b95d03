use crate::geom::Intersection;
use glam::Vec2;

/// one vertical slice of the forward view
#[derive(Clone, Copy, PartialEq, Debug)]
pub(crate) struct Strip {
    /// ray index; the renderer turns this into a horizontal offset, so
    /// skipped columns never shift the ones after them
    pub column: usize,
    pub top: f32,
    pub height: f32,
    /// grayscale level applied to all three channels
    pub shade: u8,
}

/// map per-ray hits to screen strips
///
/// height and brightness both scale with `zoom / dist` (inverse distance,
/// not inverse square), so nearer walls are taller and lighter; absent
/// hits emit nothing and the backdrop stays visible in that column
pub(crate) fn project(
    hits: &[Option<Intersection>],
    player: Vec2,
    screen_height: f32,
    zoom: f32,
) -> Vec<Strip> {
    hits.iter()
        .enumerate()
        .filter_map(|(column, hit)| {
            let hit = hit.as_ref()?;
            let dist = player.distance(hit.point);

            // a hit on top of the player saturates to a full-height white
            // strip instead of leaking a non-finite size into the renderer
            let coef = zoom / dist;
            let height = (screen_height * coef).min(screen_height);

            Some(Strip {
                column,
                top: (screen_height - height) / 2.,
                height,
                shade: (255. * coef).clamp(0., 255.) as u8,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit_at(x: f32, y: f32) -> Option<Intersection> {
        Some(Intersection {
            point: Vec2::new(x, y),
            along_ray: 0.5,
        })
    }

    #[test]
    fn nearer_is_taller_and_brighter() {
        let hits = [hit_at(10., 0.), hit_at(100., 0.)];
        let strips = project(&hits, Vec2::ZERO, 200., 25.);

        assert_eq!(strips.len(), 2);
        assert!(strips[0].height > strips[1].height);
        assert!(strips[0].shade >= strips[1].shade);
    }

    #[test]
    fn absent_columns_are_skipped_not_shifted() {
        let hits = [hit_at(10., 0.), None, hit_at(30., 0.)];
        let strips = project(&hits, Vec2::ZERO, 200., 25.);

        assert_eq!(strips.len(), 2);
        assert_eq!(strips[0].column, 0);
        assert_eq!(strips[1].column, 2);
    }

    #[test]
    fn strip_is_vertically_centered() {
        // dist of twice the zoom factor: half-height strip, quarter offset
        let strips = project(&[hit_at(50., 0.)], Vec2::ZERO, 200., 25.);

        assert!((strips[0].height - 100.).abs() < 1e-3);
        assert!((strips[0].top - 50.).abs() < 1e-3);
        assert_eq!(strips[0].shade, 127);
    }

    #[test]
    fn zero_distance_saturates() {
        let strips = project(&[hit_at(0., 0.)], Vec2::ZERO, 200., 25.);

        assert_eq!(strips[0].height, 200.);
        assert_eq!(strips[0].top, 0.);
        assert_eq!(strips[0].shade, 255);
    }

    #[test]
    fn far_hits_clamp_dark_not_negative() {
        let strips = project(&[hit_at(10_000., 0.)], Vec2::ZERO, 200., 25.);

        assert_eq!(strips[0].shade, 0);
        assert!(strips[0].height > 0.);
    }
}
