//! Pitch coordinate mapping.
//!
//! Raw events carry percentage coordinates in the acting team's own frame
//! (x = 100 is the opponent's goal line). Two absolute conventions exist:
//!
//! - [`Orientation::AttackNormalized`]: home attacks the goal at x = 0, away
//!   attacks the goal at x = 105. Used by the shot map and every event map.
//! - [`Orientation::HomeLeftToRight`]: home shots plotted left to right, away
//!   shots mirrored on x only. Used by the simple shot-position pitch.

use crate::models::{PitchPoint, PITCH_LENGTH, PITCH_WIDTH};

const X_SCALE: f64 = PITCH_LENGTH / 100.0;
const Y_SCALE: f64 = PITCH_WIDTH / 100.0;
const GOAL_CENTRE_Y: f64 = PITCH_WIDTH / 2.0;

/// Absolute pitch convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    AttackNormalized,
    HomeLeftToRight,
}

/// Map a percentage coordinate onto the 105x68 pitch.
pub fn map_point(x: f64, y: f64, is_home: bool, orientation: Orientation) -> PitchPoint {
    match (orientation, is_home) {
        (Orientation::AttackNormalized, true) => {
            PitchPoint::new(PITCH_LENGTH - x * X_SCALE, y * Y_SCALE)
        }
        (Orientation::AttackNormalized, false) => {
            PitchPoint::new(x * X_SCALE, PITCH_WIDTH - y * Y_SCALE)
        }
        (Orientation::HomeLeftToRight, true) => PitchPoint::new(x * X_SCALE, y * Y_SCALE),
        (Orientation::HomeLeftToRight, false) => {
            PitchPoint::new(PITCH_LENGTH - x * X_SCALE, y * Y_SCALE)
        }
    }
}

/// Map optional coordinates; any missing component yields the unavailable sentinel.
pub fn map_optional(
    x: Option<f64>,
    y: Option<f64>,
    is_home: bool,
    orientation: Orientation,
) -> PitchPoint {
    match (x, y) {
        (Some(x), Some(y)) => map_point(x, y, is_home, orientation),
        _ => PitchPoint::UNAVAILABLE,
    }
}

/// Centre of the goal a side attacks, in the attack-normalized convention.
pub fn attacked_goal(is_home: bool) -> PitchPoint {
    if is_home {
        PitchPoint::new(0.0, GOAL_CENTRE_Y)
    } else {
        PitchPoint::new(PITCH_LENGTH, GOAL_CENTRE_Y)
    }
}

/// Distance between two points, `None` when either is unavailable.
pub fn distance_between(a: &PitchPoint, b: &PitchPoint) -> Option<f64> {
    (a.is_available() && b.is_available()).then(|| a.distance_to(b))
}

/// Where a shot ended relative to the goal frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcomeKind {
    OnTarget,
    OffTarget,
    Post,
}

/// Lateral sub-zone of the goal line, from the shooter's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalMouthZone {
    OffLeft,
    PostLeft,
    GoalLeft,
    Centre,
    GoalRight,
    PostRight,
    OffRight,
}

impl GoalMouthZone {
    /// Offset from the goal centre along the goal line, in metres.
    pub fn lateral_offset(&self) -> f64 {
        match self {
            GoalMouthZone::OffLeft => -6.0,
            GoalMouthZone::PostLeft => -3.66,
            GoalMouthZone::GoalLeft => -1.83,
            GoalMouthZone::Centre => 0.0,
            GoalMouthZone::GoalRight => 1.83,
            GoalMouthZone::PostRight => 3.66,
            GoalMouthZone::OffRight => 6.0,
        }
    }
}

/// A parsed goal-mouth modifier such as `"gtr"` or `"ob"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneCode {
    pub kind: ShotOutcomeKind,
    pub zone: GoalMouthZone,
}

/// Parse `<g|o|p><t|c|b>?<l|r|c>?` (at least one suffix letter).
pub fn parse_zone_code(code: &str) -> Option<ZoneCode> {
    let mut chars = code.chars();
    let kind = match chars.next()? {
        'g' => ShotOutcomeKind::OnTarget,
        'o' => ShotOutcomeKind::OffTarget,
        'p' => ShotOutcomeKind::Post,
        _ => return None,
    };

    let suffix: Vec<char> = chars.collect();
    let side = match suffix.as_slice() {
        [h] if matches!(h, 't' | 'c' | 'b' | 'l' | 'r') => *h,
        [h, s] if matches!(h, 't' | 'c' | 'b') && matches!(s, 'l' | 'r' | 'c') => *s,
        _ => return None,
    };

    let zone = match (kind, side) {
        (ShotOutcomeKind::OffTarget, 'l') => GoalMouthZone::OffLeft,
        (ShotOutcomeKind::Post, 'l') => GoalMouthZone::PostLeft,
        (ShotOutcomeKind::OnTarget, 'l') => GoalMouthZone::GoalLeft,
        (ShotOutcomeKind::OnTarget, 'r') => GoalMouthZone::GoalRight,
        (ShotOutcomeKind::Post, 'r') => GoalMouthZone::PostRight,
        (ShotOutcomeKind::OffTarget, 'r') => GoalMouthZone::OffRight,
        _ => GoalMouthZone::Centre,
    };

    Some(ZoneCode { kind, zone })
}

/// Whether a modifier is a goal-mouth code of the given kind.
pub fn is_zone_of(modifier: &str, kind: ShotOutcomeKind) -> bool {
    parse_zone_code(modifier).is_some_and(|z| z.kind == kind)
}

/// End point of a shot on the attacked goal line, from its zone modifier.
///
/// Zones are mirrored between the two attack directions. Unknown or missing
/// modifiers give `(-1, -1)`.
pub fn shot_end_point(modifier: Option<&str>, is_home: bool) -> PitchPoint {
    let Some(code) = modifier.and_then(parse_zone_code) else {
        return PitchPoint::UNAVAILABLE;
    };

    let goal = attacked_goal(is_home);
    let offset = code.zone.lateral_offset();
    if is_home {
        PitchPoint::new(goal.x, goal.y - offset)
    } else {
        PitchPoint::new(goal.x, goal.y + offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_attack_normalized_home() {
        let p = map_point(90.0, 50.0, true, Orientation::AttackNormalized);
        assert!(approx(p.x, 10.5));
        assert!(approx(p.y, 34.0));
    }

    #[test]
    fn test_attack_normalized_away() {
        let p = map_point(90.0, 25.0, false, Orientation::AttackNormalized);
        assert!(approx(p.x, 94.5));
        assert!(approx(p.y, 51.0));
    }

    #[test]
    fn test_home_left_to_right() {
        let home = map_point(90.0, 25.0, true, Orientation::HomeLeftToRight);
        assert!(approx(home.x, 94.5));
        assert!(approx(home.y, 17.0));

        let away = map_point(90.0, 25.0, false, Orientation::HomeLeftToRight);
        assert!(approx(away.x, 10.5));
        assert!(approx(away.y, 17.0));
    }

    #[test]
    fn test_map_optional_missing_component() {
        let p = map_optional(Some(10.0), None, true, Orientation::AttackNormalized);
        assert_eq!(p, PitchPoint::UNAVAILABLE);
    }

    #[test]
    fn test_distance_to_goal_matches_formula() {
        for &(x, y, is_home) in &[(88.0, 40.0, true), (75.0, 62.0, false), (100.0, 0.0, true)] {
            let p = map_point(x, y, is_home, Orientation::AttackNormalized);
            let goal = attacked_goal(is_home);
            let expected = ((p.x - goal.x).powi(2) + (p.y - goal.y).powi(2)).sqrt();
            let expected = (expected * 100.0).round() / 100.0;

            assert_eq!(distance_between(&p, &goal), Some(expected));
            assert_eq!(distance_between(&goal, &p), Some(expected));
        }
    }

    #[test]
    fn test_distance_unavailable() {
        let goal = attacked_goal(true);
        assert_eq!(distance_between(&PitchPoint::UNAVAILABLE, &goal), None);
    }

    #[test]
    fn test_parse_zone_codes() {
        assert_eq!(
            parse_zone_code("otl"),
            Some(ZoneCode {
                kind: ShotOutcomeKind::OffTarget,
                zone: GoalMouthZone::OffLeft
            })
        );
        assert_eq!(
            parse_zone_code("gtr"),
            Some(ZoneCode {
                kind: ShotOutcomeKind::OnTarget,
                zone: GoalMouthZone::GoalRight
            })
        );
        assert_eq!(
            parse_zone_code("pbr"),
            Some(ZoneCode {
                kind: ShotOutcomeKind::Post,
                zone: GoalMouthZone::PostRight
            })
        );
        assert_eq!(parse_zone_code("gc").map(|z| z.zone), Some(GoalMouthZone::Centre));
        assert_eq!(parse_zone_code("ot").map(|z| z.zone), Some(GoalMouthZone::Centre));
    }

    #[test]
    fn test_parse_zone_rejects_other_modifiers() {
        assert_eq!(parse_zone_code("g"), None);
        assert_eq!(parse_zone_code("goal"), None);
        assert_eq!(parse_zone_code("blocked"), None);
        assert_eq!(parse_zone_code("key_pass"), None);
        assert_eq!(parse_zone_code(""), None);
    }

    #[test]
    fn test_shot_end_point_mirrored() {
        let home = shot_end_point(Some("gtl"), true);
        let away = shot_end_point(Some("gtl"), false);

        assert!(approx(home.x, 0.0));
        assert!(approx(away.x, 105.0));
        assert!(approx(home.y, 35.83));
        assert!(approx(away.y, 32.17));
    }

    #[test]
    fn test_shot_end_point_unknown_modifier() {
        assert_eq!(shot_end_point(Some("xyz"), true), PitchPoint::UNAVAILABLE);
        assert_eq!(shot_end_point(None, false), PitchPoint::UNAVAILABLE);
    }

    #[test]
    fn test_is_zone_of() {
        assert!(is_zone_of("pbr", ShotOutcomeKind::Post));
        assert!(!is_zone_of("pbr", ShotOutcomeKind::OnTarget));
        assert!(!is_zone_of("pass", ShotOutcomeKind::Post));
    }
}
