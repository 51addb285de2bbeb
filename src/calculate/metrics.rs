//! Home/away metric comparison and the weighted possession estimate.

use std::collections::HashMap;

use tracing::debug;

use super::coordinates::{is_zone_of, ShotOutcomeKind};
use crate::models::{modifiers, names, round_to, MatchEvent, MetricWidth, NormalizedEvent};

/// Name of the synthetic possession metric.
pub const POSSESSION: &str = "Possession";

/// Display group of a metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricGroup {
    Summary,
    Shots,
    Passes,
    Defense,
}

/// Constraint on an event's modifier.
#[derive(Debug, Clone, Copy)]
pub enum ModifierFilter {
    Any,
    OneOf(&'static [&'static str]),
    Zone(ShotOutcomeKind),
}

/// One counted metric. `None` fields place no constraint on the event.
#[derive(Debug, Clone, Copy)]
pub struct MetricDefinition {
    pub name: &'static str,
    pub group: MetricGroup,
    pub event_name: Option<&'static str>,
    pub actions: Option<&'static [&'static str]>,
    pub modifier: ModifierFilter,
    pub is_success: Option<bool>,
}

impl MetricDefinition {
    const fn new(name: &'static str, group: MetricGroup) -> Self {
        Self {
            name,
            group,
            event_name: None,
            actions: None,
            modifier: ModifierFilter::Any,
            is_success: None,
        }
    }

    const fn event(mut self, event_name: &'static str) -> Self {
        self.event_name = Some(event_name);
        self
    }

    const fn actions(mut self, actions: &'static [&'static str]) -> Self {
        self.actions = Some(actions);
        self
    }

    const fn modifier(mut self, modifier: ModifierFilter) -> Self {
        self.modifier = modifier;
        self
    }

    const fn successful(mut self) -> Self {
        self.is_success = Some(true);
        self
    }

    pub fn matches(&self, event: &MatchEvent) -> bool {
        if self.event_name.is_some_and(|name| event.name != name) {
            return false;
        }
        if let Some(actions) = self.actions {
            if !event.action.as_deref().is_some_and(|a| actions.contains(&a)) {
                return false;
            }
        }
        let modifier_ok = match self.modifier {
            ModifierFilter::Any => true,
            ModifierFilter::OneOf(allowed) => event
                .modifier
                .as_deref()
                .is_some_and(|m| allowed.contains(&m)),
            ModifierFilter::Zone(kind) => event
                .modifier
                .as_deref()
                .is_some_and(|m| is_zone_of(m, kind)),
        };
        if !modifier_ok {
            return false;
        }
        match self.is_success {
            Some(expected) => event.is_success == Some(expected),
            None => true,
        }
    }
}

use MetricGroup::{Defense, Passes, Shots, Summary};

/// The metric taxonomy in display order.
pub const METRICS: &[MetricDefinition] = &[
    MetricDefinition::new("Total Shots", Summary).event(names::SHOT),
    MetricDefinition::new("Accurate Shots", Summary)
        .event(names::SHOT)
        .successful(),
    MetricDefinition::new("Goalkeeper Saves", Summary)
        .event(names::SAVE_ATTEMPT)
        .successful(),
    MetricDefinition::new("Corners", Summary)
        .event(names::FREE_KICK)
        .actions(&["Corner"]),
    MetricDefinition::new("Offsides", Summary).event(names::OFFSIDE),
    MetricDefinition::new("Fouls", Summary).event(names::FOUL),
    MetricDefinition::new("Passes", Summary).event(names::PASS),
    MetricDefinition::new("Accurate Passes", Summary)
        .event(names::PASS)
        .successful(),
    MetricDefinition::new("Free Kicks", Summary)
        .event(names::FREE_KICK)
        .actions(&["Free Kick", "Free kick cross", "Free kick shot"]),
    MetricDefinition::new("Throw-ins", Summary)
        .event(names::FREE_KICK)
        .actions(&["Throw in"]),
    MetricDefinition::new("Yellow Cards", Summary)
        .modifier(ModifierFilter::OneOf(&[modifiers::YELLOW_CARD])),
    MetricDefinition::new("Red Cards", Summary).modifier(ModifierFilter::OneOf(
        &modifiers::DISMISSALS,
    )),
    MetricDefinition::new("Shots on Target", Shots)
        .event(names::SHOT)
        .modifier(ModifierFilter::Zone(ShotOutcomeKind::OnTarget)),
    MetricDefinition::new("Shots on Post", Shots)
        .event(names::SHOT)
        .modifier(ModifierFilter::Zone(ShotOutcomeKind::Post)),
    MetricDefinition::new("Shots Missed", Shots)
        .event(names::SHOT)
        .modifier(ModifierFilter::Zone(ShotOutcomeKind::OffTarget)),
    MetricDefinition::new("Shots Blocked", Shots)
        .event(names::SHOT)
        .modifier(ModifierFilter::OneOf(&[modifiers::BLOCKED])),
    MetricDefinition::new("Accurate Long Passes", Passes)
        .event(names::PASS)
        .actions(&["High pass", "Launch"])
        .successful(),
    MetricDefinition::new("Accurate Crosses", Passes)
        .event(names::PASS)
        .actions(&["Cross"])
        .successful(),
    MetricDefinition::new("Key Passes", Passes)
        .event(names::PASS)
        .modifier(ModifierFilter::OneOf(&[modifiers::KEY_PASS, modifiers::ASSIST])),
    MetricDefinition::new("Interceptions", Defense)
        .modifier(ModifierFilter::OneOf(&[modifiers::INTERCEPTION])),
    MetricDefinition::new("Clearances", Defense)
        .event(names::OTHERS_ON_THE_BALL)
        .actions(&["Clearance"]),
    MetricDefinition::new("Duel Wins", Defense)
        .event(names::DUEL)
        .successful(),
];

/// Weights of the counts that make up the possession estimate.
pub const POSSESSION_WEIGHTS: &[(&str, f64)] = &[
    ("Passes", 0.1),
    ("Accurate Passes", 0.1),
    ("Accurate Long Passes", 0.2),
    ("Throw-ins", 0.45),
    ("Interceptions", 0.45),
    ("Clearances", 0.1),
];

/// Home and away count of every metric in the taxonomy.
pub type MetricCounts = HashMap<&'static str, (u32, u32)>;

pub fn count_metrics(events: &[NormalizedEvent]) -> MetricCounts {
    let mut counts: MetricCounts = METRICS.iter().map(|m| (m.name, (0, 0))).collect();

    for event in events {
        for metric in METRICS.iter().filter(|m| m.matches(event)) {
            if let Some((home, away)) = counts.get_mut(metric.name) {
                if event.is_home {
                    *home += 1;
                } else {
                    *away += 1;
                }
            }
        }
    }

    counts
}

/// Width entry for one metric; 50/50 when both counts are zero.
pub fn metric_width(name: &str, home_count: u32, away_count: u32) -> MetricWidth {
    let total = home_count + away_count;
    let (home_width_pct, away_width_pct) = if total == 0 {
        (50.0, 50.0)
    } else {
        let home = f64::from(home_count) / f64::from(total) * 100.0;
        (home, 100.0 - home)
    };

    MetricWidth {
        metric_name: name.to_string(),
        home_count,
        away_count,
        home_width_pct,
        away_width_pct,
    }
}

/// Possession split from the two weighted sums.
pub fn possession_width(home_weighted: f64, away_weighted: f64) -> MetricWidth {
    let total = home_weighted + away_weighted;
    let (home_pct, away_pct) = if total <= 0.0 {
        (50.0, 50.0)
    } else {
        let home = round_to(home_weighted / total * 100.0, 1);
        (home, round_to(100.0 - home, 1))
    };

    MetricWidth {
        metric_name: POSSESSION.to_string(),
        home_count: home_weighted.round() as u32,
        away_count: away_weighted.round() as u32,
        home_width_pct: home_pct,
        away_width_pct: away_pct,
    }
}

/// Weighted possession estimate from already computed counts.
pub fn possession(counts: &MetricCounts) -> MetricWidth {
    let (home, away) = POSSESSION_WEIGHTS
        .iter()
        .fold((0.0, 0.0), |(home, away), (name, weight)| {
            let (h, a) = counts.get(name).copied().unwrap_or((0, 0));
            (home + f64::from(h) * weight, away + f64::from(a) * weight)
        });
    possession_width(home, away)
}

/// Width entries of one display group, in taxonomy order.
pub fn group_widths(counts: &MetricCounts, group: MetricGroup) -> Vec<MetricWidth> {
    METRICS
        .iter()
        .filter(|m| m.group == group)
        .map(|m| {
            let (home, away) = counts.get(m.name).copied().unwrap_or((0, 0));
            metric_width(m.name, home, away)
        })
        .collect()
}

/// All width groups of a match.
#[derive(Debug, Clone)]
pub struct MetricTable {
    /// Possession first, then the summary metrics
    pub summary: Vec<MetricWidth>,
    pub shots: Vec<MetricWidth>,
    pub passes: Vec<MetricWidth>,
    pub defense: Vec<MetricWidth>,
}

pub fn metric_table(events: &[NormalizedEvent]) -> MetricTable {
    let counts = count_metrics(events);

    let mut summary = vec![possession(&counts)];
    summary.extend(group_widths(&counts, Summary));

    let table = MetricTable {
        summary,
        shots: group_widths(&counts, Shots),
        passes: group_widths(&counts, Passes),
        defense: group_widths(&counts, Defense),
    };
    debug!(
        "Metric table: {} summary, {} shot, {} pass, {} defense widths",
        table.summary.len(),
        table.shots.len(),
        table.passes.len(),
        table.defense.len()
    );
    table
}
