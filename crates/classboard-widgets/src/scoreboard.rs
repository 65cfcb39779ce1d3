//! Team scoreboard

use serde::{Deserialize, Serialize};
use classboard_desktop::{Payload, WidgetKind};
use crate::ContentModel;

/// One team's name and points
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamScore {
    pub name: String,
    #[serde(default)]
    pub score: i64,
}

impl TeamScore {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), score: 0 }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scoreboard {
    pub scores: Vec<TeamScore>,
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self {
            scores: vec![TeamScore::new("Team A"), TeamScore::new("Team B")],
        }
    }
}

impl ContentModel for Scoreboard {
    const KIND: WidgetKind = WidgetKind::Score;
}

impl Scoreboard {
    /// Add `delta` to team `index`. Scores may go negative.
    pub fn adjust(&mut self, index: usize, delta: i64) -> Option<Payload> {
        let team = self.scores.get_mut(index)?;
        team.score = team.score.saturating_add(delta);
        Some(self.patch(&["scores"]))
    }

    pub fn rename(&mut self, index: usize, name: impl Into<String>) -> Option<Payload> {
        self.scores.get_mut(index)?.name = name.into();
        Some(self.patch(&["scores"]))
    }

    /// Index of the team with the most points, `None` on a tie for first
    pub fn leader(&self) -> Option<usize> {
        let best = self.scores.iter().map(|t| t.score).max()?;
        let mut leaders = self.scores.iter().enumerate().filter(|(_, t)| t.score == best);
        let (index, _) = leaders.next()?;
        match leaders.next() {
            Some(_) => None,
            None => Some(index),
        }
    }
}
