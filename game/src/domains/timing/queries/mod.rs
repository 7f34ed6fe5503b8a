use crate::timing::{Calendar, Weather};

impl Calendar {
    pub fn is_raining(&self) -> bool {
        self.weather == Weather::Rain
    }

    pub fn is_daytime(&self) -> bool {
        self.hour >= self.kind.wake_hour && self.hour < self.kind.sleep_hour
    }

    /// HUD clock string, "06:30" style; the midnight freeze reads "00:00".
    pub fn format_time(&self) -> String {
        let hour = self.hour % 24.0;
        let minutes = ((hour - hour.floor()) * 60.0) as u32;
        format!("{:02}:{:02}", hour as u32, minutes)
    }

    pub fn format_day(&self) -> String {
        format!("Day {}", self.day + 1)
    }
}
