use crate::planting::{Planting, PlantingDomain};

impl PlantingDomain {
    /// The only growth path, fired once per day boundary. A stage that
    /// requires water makes no progress on a dry day; the watered flag
    /// resets either way.
    pub fn grow_for_new_day(&mut self, _day: u32) -> Vec<Planting> {
        let mut events = vec![];
        for crop in self.crops.values_mut() {
            let mut changed = crop.watered;
            let stage = &crop.kind.stages[crop.stage];
            if !stage.requires_water || crop.watered {
                crop.progress += 1.0;
                changed = true;
                if crop.stage < crop.kind.last_stage() && crop.progress >= stage.days_to_next {
                    crop.stage += 1;
                    crop.progress = 0.0;
                }
            }
            crop.watered = false;
            if changed {
                events.push(Planting::CropUpdated {
                    cell: crop.cell,
                    stage: crop.stage,
                    watered: crop.watered,
                });
            }
        }
        events
    }

    /// Bulk rain watering; already-watered and terminal crops are skipped,
    /// so one event per newly watered crop.
    pub fn water_all_crops(&mut self) -> Vec<Planting> {
        let mut events = vec![];
        for crop in self.crops.values_mut() {
            if crop.watered || crop.is_harvestable() {
                continue;
            }
            crop.watered = true;
            events.push(Planting::CropUpdated {
                cell: crop.cell,
                stage: crop.stage,
                watered: crop.watered,
            });
        }
        events
    }
}
