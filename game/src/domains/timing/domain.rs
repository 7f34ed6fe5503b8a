use serde::{Deserialize, Serialize};

pub use crate::collections::{Sequence, Shared};

#[derive(Default)]
pub struct TimingDomain {
    pub calendars_id: Sequence,
    pub calendars: Vec<Calendar>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarKey(pub usize);

pub struct CalendarKind {
    pub id: CalendarKey,
    pub name: String,
    /// Real seconds per in-game 24 hours.
    pub day_duration: f32,
    pub wake_hour: f32,
    pub sleep_hour: f32,
    pub rain_chance: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Weather {
    Clear,
    Rain,
}

pub struct Calendar {
    pub id: CalendarId,
    pub kind: Shared<CalendarKind>,
    pub day: u32,
    /// In `[0.0, 24.0]`; 24.0 is the midnight freeze awaiting sleep.
    pub hour: f32,
    pub weather: Weather,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Timing {
    TimeUpdated { id: CalendarId, hour: f32 },
    DayChanged { id: CalendarId, day: u32 },
    WeatherChanged { id: CalendarId, weather: Weather },
}

#[derive(Debug, Serialize, Deserialize)]
pub enum TimingError {
    CalendarNotFound { id: CalendarId },
    TooEarlyToSleep { id: CalendarId, hour: f32 },
}

impl TimingDomain {
    pub fn get_calendar(&self, id: CalendarId) -> Result<&Calendar, TimingError> {
        self.calendars
            .iter()
            .find(|calendar| calendar.id == id)
            .ok_or(TimingError::CalendarNotFound { id })
    }

    pub fn get_calendar_mut(&mut self, id: CalendarId) -> Result<&mut Calendar, TimingError> {
        self.calendars
            .iter_mut()
            .find(|calendar| calendar.id == id)
            .ok_or(TimingError::CalendarNotFound { id })
    }
}
