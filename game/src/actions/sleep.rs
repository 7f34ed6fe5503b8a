use log::info;
use rand::thread_rng;

use crate::api::{ActionError, Event};
use crate::{occur, Game};

impl Game {
    /// The day boundary. Sleeping ends the day and runs the daily growth
    /// pass exactly once; `Game::update` never does either.
    pub(crate) fn sleep(&mut self) -> Result<Vec<Event>, ActionError> {
        let sleep = self.timing.sleep(self.calendar, thread_rng())?;
        let timing_events = sleep();
        let day = self.timing.get_calendar(self.calendar)?.day;
        info!("day {} begins", day);
        let growth = self.planting.grow_for_new_day(day);
        Ok(occur![timing_events, growth,])
    }
}
