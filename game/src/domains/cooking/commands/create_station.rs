use crate::cooking::{Cooking, CookingDomain, Station, StationId, StationMode};

impl CookingDomain {
    pub fn create_station<'operation>(
        &'operation mut self,
    ) -> (StationId, impl FnOnce() -> Vec<Cooking> + 'operation) {
        let id = self.stations_id.introduce().one(StationId);
        let operation = move || {
            self.stations.push(Station {
                id,
                mode: StationMode::Idle,
                recipe: None,
                progress: 0.0,
            });
            self.stations_id.register(id.0);
            vec![Cooking::StationCreated { station: id }]
        };
        (id, operation)
    }
}
