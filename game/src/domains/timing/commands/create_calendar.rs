use crate::collections::Shared;
use crate::timing::{Calendar, CalendarId, CalendarKind, Timing, TimingDomain, Weather};

impl TimingDomain {
    pub fn create_calendar<'operation>(
        &'operation mut self,
        kind: &Shared<CalendarKind>,
    ) -> (CalendarId, impl FnOnce() -> Vec<Timing> + 'operation) {
        let id = self.calendars_id.introduce().one(CalendarId);
        let kind = kind.clone();
        let operation = move || {
            let calendar = Calendar {
                id,
                day: 0,
                hour: kind.wake_hour,
                weather: Weather::Clear,
                kind,
            };
            let events = vec![
                Timing::DayChanged {
                    id,
                    day: calendar.day,
                },
                Timing::TimeUpdated {
                    id,
                    hour: calendar.hour,
                },
            ];
            self.calendars.push(calendar);
            self.calendars_id.register(id.0);
            events
        };
        (id, operation)
    }
}
