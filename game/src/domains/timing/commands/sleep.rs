use rand::Rng;

use crate::timing::{CalendarId, Timing, TimingDomain, TimingError, Weather};

impl TimingDomain {
    /// Ends the current day. The only way the day counter moves forward:
    /// `update` saturates the clock at midnight and waits for this command.
    pub fn sleep<'operation>(
        &'operation mut self,
        id: CalendarId,
        mut random: impl Rng + 'operation,
    ) -> Result<impl FnOnce() -> Vec<Timing> + 'operation, TimingError> {
        let calendar = self.get_calendar(id)?;
        if calendar.hour < calendar.kind.sleep_hour {
            return Err(TimingError::TooEarlyToSleep {
                id,
                hour: calendar.hour,
            });
        }
        let operation = move || {
            let calendar = self
                .calendars
                .iter_mut()
                .find(|calendar| calendar.id == id)
                .unwrap();
            calendar.day += 1;
            calendar.hour = calendar.kind.wake_hour;
            let weather = if random.gen_range(0.0..1.0) < calendar.kind.rain_chance {
                Weather::Rain
            } else {
                Weather::Clear
            };
            let mut events = vec![
                Timing::DayChanged {
                    id,
                    day: calendar.day,
                },
                Timing::TimeUpdated {
                    id,
                    hour: calendar.hour,
                },
            ];
            if weather != calendar.weather {
                calendar.weather = weather;
                events.push(Timing::WeatherChanged { id, weather });
            }
            events
        };
        Ok(operation)
    }
}
