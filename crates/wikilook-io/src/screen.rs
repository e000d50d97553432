use anyhow::{Context, Result};
use wikilook_types::{Point, Screen, ScreenRect};
use xcap::Monitor;

/// Monitor under `point`, else the primary one, else a 1920x1080 unscaled default
pub fn screen_at(point: Point) -> Screen {
    match monitors() {
        Ok(screens) => pick_screen(&screens, point),
        Err(e) => {
            tracing::warn!("Failed to query monitors: {:#}", e);
            Screen::default()
        }
    }
}

/// (screen, is_primary) for every monitor
fn monitors() -> Result<Vec<(Screen, bool)>> {
    let monitors = Monitor::all().context("Failed to get monitors")?;
    Ok(monitors
        .iter()
        .map(|m| {
            let bounds = ScreenRect::new(m.x(), m.y(), m.width(), m.height());
            (Screen::new(bounds, m.scale_factor()), m.is_primary())
        })
        .collect())
}

fn pick_screen(screens: &[(Screen, bool)], point: Point) -> Screen {
    screens
        .iter()
        .find(|(screen, _)| screen.bounds.contains(point))
        .or_else(|| screens.iter().find(|(_, primary)| *primary))
        .or_else(|| screens.first())
        .map(|(screen, _)| *screen)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEFT: Screen = Screen::new(ScreenRect::new(-1280, 0, 1280, 1024), 1.0);
    const MAIN: Screen = Screen::new(ScreenRect::new(0, 0, 2560, 1440), 2.0);

    #[test]
    fn picks_monitor_under_cursor() {
        let screens = [(MAIN, true), (LEFT, false)];
        assert_eq!(pick_screen(&screens, Point::new(-10, 500)), LEFT);
        assert_eq!(pick_screen(&screens, Point::new(10, 500)), MAIN);
    }

    #[test]
    fn falls_back_to_primary_then_default() {
        let screens = [(LEFT, false), (MAIN, true)];
        assert_eq!(pick_screen(&screens, Point::new(9000, 9000)), MAIN);
        assert_eq!(pick_screen(&[], Point::new(0, 0)), Screen::default());
    }
}
