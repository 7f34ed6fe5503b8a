use crate::timing::{Timing, TimingDomain};

impl TimingDomain {
    pub fn update(&mut self, real_seconds: f32) -> Vec<Timing> {
        let mut events = vec![];
        for calendar in self.calendars.iter_mut() {
            if calendar.hour >= 24.0 {
                // midnight freeze, waiting for sleep
                continue;
            }
            let delta = 24.0 * real_seconds / calendar.kind.day_duration;
            calendar.hour = (calendar.hour + delta).min(24.0);
            events.push(Timing::TimeUpdated {
                id: calendar.id,
                hour: calendar.hour,
            });
        }
        events
    }
}
