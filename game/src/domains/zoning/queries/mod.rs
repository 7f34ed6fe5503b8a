use crate::planting::Cell;
use crate::zoning::{FarmingAction, ZoningDomain, ZoningError};

impl ZoningDomain {
    /// Which-check-failed surface for the farming gate. Occupancy and target
    /// bounds are independent checks: the player must stand in a zone, and
    /// the target must lie in that same zone.
    pub fn ensure_permitted(
        &self,
        player: Cell,
        target: Cell,
        action: FarmingAction,
    ) -> Result<(), ZoningError> {
        if !self.require_zone {
            return Ok(());
        }
        let zone = self
            .zones
            .iter()
            .find(|zone| zone.contains(player))
            .ok_or(ZoningError::OutsideAnyZone { player })?;
        if !zone.contains(target) {
            return Err(ZoningError::TargetOutOfZone {
                zone: zone.name.clone(),
                target,
            });
        }
        if !zone.allows(action) {
            return Err(ZoningError::ActionNotAllowed {
                zone: zone.name.clone(),
                action,
            });
        }
        Ok(())
    }
}
