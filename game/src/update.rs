use log::{error, warn};
use rand::thread_rng;

use crate::api::Event;
use crate::cooking::Cooking;
use crate::{Game, RAIN_WATERING_INTERVAL};

impl Game {
    /// Real-time progression: clock, rain watering, customers, stations.
    /// Day boundaries never happen here; they are sleep-gated.
    pub fn update(&mut self, real_seconds: f32) -> Vec<Event> {
        let mut events = vec![];

        let timing_events = self.timing.update(real_seconds);
        if !timing_events.is_empty() {
            events.push(timing_events.into());
        }

        let raining = self
            .timing
            .get_calendar(self.calendar)
            .map(|calendar| calendar.is_raining())
            .unwrap_or(false);
        if raining {
            self.rain_timer += real_seconds;
            if self.rain_timer >= RAIN_WATERING_INTERVAL {
                self.rain_timer -= RAIN_WATERING_INTERVAL;
                let watered = self.planting.water_all_crops();
                if !watered.is_empty() {
                    events.push(watered.into());
                }
            }
        } else {
            self.rain_timer = 0.0;
        }

        let serving_events = self.serving.update(real_seconds, thread_rng());
        if !serving_events.is_empty() {
            events.push(serving_events.into());
        }

        let (finished, cooking_events) = self.cooking.update(real_seconds);
        if !cooking_events.is_empty() {
            events.push(cooking_events.into());
        }
        for (station, recipe) in finished {
            let kind = match self.known.items.get(recipe.result) {
                Ok(kind) => kind,
                Err(error) => {
                    error!("unable to deposit result of {}: {:?}", recipe.name, error);
                    continue;
                }
            };
            match self.inventory.add_item(self.player, &kind, recipe.result_amount) {
                Ok(add) => events.push(add().into()),
                Err(reason) => {
                    // lossy on full, the dish is gone
                    warn!("result of {} lost: {:?}", recipe.name, reason);
                    events.push(
                        vec![Cooking::ResultLost {
                            station,
                            item: kind.id,
                        }]
                        .into(),
                    );
                }
            }
        }

        events
    }
}
