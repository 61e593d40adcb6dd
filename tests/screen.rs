//! Screen tests: feed frames through a VT100 emulator and check what is
//! actually visible.

use muncher::{Direction, Layout, Playground, PlaygroundConfig, Position, RngDice, ScriptedDice};
use std::collections::HashSet;
use std::time::{Duration, Instant};

fn glyph_at(screen: &vt100::Screen, x: u16, y: u16) -> String {
    screen
        .cell(y, x)
        .map(|cell| cell.contents())
        .unwrap_or_default()
}

/// Every cell on screen holding `glyph`, as (column, row).
fn cells_with(screen: &vt100::Screen, width: u16, height: u16, glyph: &str) -> HashSet<(u16, u16)> {
    let mut found = HashSet::new();
    for y in 0..height {
        for x in 0..width {
            if glyph_at(screen, x, y) == glyph {
                found.insert((x, y));
            }
        }
    }
    found
}

fn assert_screen_matches_world<D: muncher::Dice>(
    screen: &vt100::Screen,
    playground: &Playground<D>,
    width: u16,
    height: u16,
) {
    let layout = playground.layout();
    let world = playground.world();

    let actors = cells_with(screen, width, height, "@");
    let expected: HashSet<_> = [layout.to_screen(world.actor())].into_iter().collect();
    assert_eq!(actors, expected, "actor glyph out of place");

    let stars = cells_with(screen, width, height, "*");
    let expected: HashSet<_> = world.markers().iter().map(|p| layout.to_screen(p)).collect();
    assert_eq!(stars, expected, "stale or missing markers");
}

#[test]
fn border_frames_the_interior() {
    let (width, height) = (20, 10);
    let now = Instant::now();
    let dice = ScriptedDice::new().with_steps([0]);
    let mut playground = Playground::new(&PlaygroundConfig::default(), dice, now);
    let mut parser = vt100::Parser::new(height, width, 0);

    parser.process(playground.frame((width, height), now).as_bytes());
    let screen = parser.screen();
    let rows: Vec<String> = screen.rows(0, width).collect();

    let rule = format!("+{}+", "-".repeat(18));
    assert!(rows[0].starts_with("Total Stars Eaten: 0"));
    assert_eq!(rows[1], rule);
    assert_eq!(rows[9], rule);
    for row in 2..9 {
        assert_eq!(glyph_at(screen, 0, row), "|", "left border row {row}");
        assert_eq!(glyph_at(screen, 19, row), "|", "right border row {row}");
    }

    // actor at the interior midpoint
    let layout = Layout::compute(width, height);
    let (x, y) = layout.to_screen(layout.center());
    assert_eq!(glyph_at(screen, x, y), "@");
}

#[test]
fn eating_a_marker_clears_it_from_screen() {
    let (width, height) = (30, 13);
    let start = Instant::now();
    let dice = ScriptedDice::new()
        .with_directions([Direction::Right, Direction::Up])
        .with_steps([0, 1])
        .with_spawn_counts([1])
        .with_cells([Position::new(14, 4)]);
    let config = PlaygroundConfig::default();
    let mut playground = Playground::new(&config, dice, start);
    let mut parser = vt100::Parser::new(height, width, 0);
    let due = start + config.spawn_interval;

    // first tick spawns a marker right above the actor
    parser.process(playground.frame((width, height), due).as_bytes());
    assert_eq!(playground.world().actor(), Position::new(14, 5));
    assert_eq!(glyph_at(parser.screen(), 15, 6), "*");

    parser.process(playground.frame((width, height), due).as_bytes());

    assert_eq!(playground.world().actor(), Position::new(14, 4));
    assert_eq!(playground.world().counters().eaten, 1);
    assert!(cells_with(parser.screen(), width, height, "*").is_empty());
    assert_eq!(glyph_at(parser.screen(), 15, 6), "@");
    assert!(glyph_at(parser.screen(), 15, 7).trim().is_empty());
    assert!(parser.screen().contents().starts_with("Total Stars Eaten: 1"));
}

#[test]
fn long_run_leaves_no_stale_glyphs() {
    let (width, height) = (30, 12);
    let start = Instant::now();
    let mut playground = Playground::new(&PlaygroundConfig::default(), RngDice::seeded(2024), start);
    let mut parser = vt100::Parser::new(height, width, 0);

    for tick in 0..400u64 {
        let now = start + Duration::from_secs(tick);
        parser.process(playground.frame((width, height), now).as_bytes());
        assert_screen_matches_world(parser.screen(), &playground, width, height);
    }

    let counters = playground.world().counters();
    assert!(counters.distance > 0);
    assert!(counters.eaten > 0);
}

#[test]
fn resize_redraws_cleanly() {
    let start = Instant::now();
    let mut playground = Playground::new(&PlaygroundConfig::default(), RngDice::seeded(9), start);
    let mut parser = vt100::Parser::new(16, 40, 0);

    for tick in 0..60u64 {
        let now = start + Duration::from_secs(tick);
        parser.process(playground.frame((40, 16), now).as_bytes());
    }

    parser.set_size(10, 24);
    let now = start + Duration::from_secs(60);
    parser.process(playground.frame((24, 10), now).as_bytes());
    assert_screen_matches_world(parser.screen(), &playground, 24, 10);

    for marker in playground.world().markers().iter() {
        assert!(playground.world().bounds().contains(marker.x, marker.y));
    }
}

#[test]
fn unchanged_size_never_repaints_border() {
    let (width, height) = (20, 10);
    let now = Instant::now();
    let dice = ScriptedDice::new().with_steps([0, 0]);
    let mut playground = Playground::new(&PlaygroundConfig::default(), dice, now);

    let first = playground.frame((width, height), now).len();
    let second = playground.frame((width, height), now).len();

    assert!(second < first);
    // header plus the actor redraw only
    let second_bytes = playground.frame((width, height), now).as_bytes().to_vec();
    assert!(!String::from_utf8_lossy(&second_bytes).contains('+'));
}
