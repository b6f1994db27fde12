//! Mood Annotator — the decorative "coding companion" line in the sidebar.
//!
//! Pairs a time-of-day phrase with a mood phrase. No persistence and no effect
//! on anything else in the service.

use std::str::FromStr;

use chrono::Timelike;
use serde::{Deserialize, Serialize};

pub mod handlers;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Sad,
    Excited,
    Tired,
    Neutral,
    Focused,
}

impl Mood {
    pub const ALL: [Mood; 6] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Excited,
        Mood::Tired,
        Mood::Neutral,
        Mood::Focused,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Excited => "excited",
            Mood::Tired => "tired",
            Mood::Neutral => "neutral",
            Mood::Focused => "focused",
        }
    }

    pub fn phrase(self) -> &'static str {
        match self {
            Mood::Happy => "😊 Your avatar looks cheerful!",
            Mood::Sad => "😢 Your avatar looks a bit down.",
            Mood::Excited => "🤩 Your avatar is full of energy!",
            Mood::Tired => "🥱 Your avatar seems sleepy.",
            Mood::Neutral => "😐 Just neutral vibes.",
            Mood::Focused => "🎯 Your avatar is concentrating.",
        }
    }

    pub fn random() -> Mood {
        Mood::ALL[rand::random_range(0..Mood::ALL.len())]
    }
}

impl FromStr for Mood {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mood::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    /// 05–11 morning, 12–16 afternoon, 17–20 evening, 21–23 and 00–04 night.
    pub fn from_hour(hour: u32) -> TimeOfDay {
        match hour {
            5..=11 => TimeOfDay::Morning,
            12..=16 => TimeOfDay::Afternoon,
            17..=20 => TimeOfDay::Evening,
            _ => TimeOfDay::Night,
        }
    }

    pub fn now() -> TimeOfDay {
        TimeOfDay::from_hour(chrono::Local::now().hour())
    }

    pub fn phrase(self) -> &'static str {
        match self {
            TimeOfDay::Morning => "🌅 Fresh start of the day!",
            TimeOfDay::Afternoon => "☀️ Keep up the energy!",
            TimeOfDay::Evening => "🌇 Winding down, stay focused!",
            TimeOfDay::Night => "🌙 Time to relax soon...",
        }
    }
}

/// Mood state for one page render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoodAnnotator {
    pub mood: Mood,
    pub time_of_day: TimeOfDay,
}

impl Default for MoodAnnotator {
    fn default() -> Self {
        Self::new()
    }
}

impl MoodAnnotator {
    /// Neutral mood, time of day taken from the local clock.
    pub fn new() -> Self {
        Self {
            mood: Mood::Neutral,
            time_of_day: TimeOfDay::now(),
        }
    }

    /// Accepts a known mood name; anything else picks a mood at random.
    pub fn set_mood(&mut self, mood: Option<&str>) {
        self.mood = mood
            .and_then(|m| m.trim().to_ascii_lowercase().parse().ok())
            .unwrap_or_else(Mood::random);
    }

    pub fn expression(&self) -> String {
        format!("{} | {}", self.time_of_day.phrase(), self.mood.phrase())
    }

    /// Refreshes the time of day from the clock and returns the expression.
    pub fn update(&mut self) -> String {
        self.time_of_day = TimeOfDay::now();
        self.expression()
    }

    pub fn update_at(&mut self, hour: u32) -> String {
        self.time_of_day = TimeOfDay::from_hour(hour);
        self.expression()
    }
}

/// Sidebar line for a fresh page: random mood, current time.
pub fn sidebar_expression() -> String {
    let mut avatar = MoodAnnotator::new();
    avatar.set_mood(None);
    avatar.update()
}
