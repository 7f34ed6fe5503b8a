use crate::cooking::RecipeKind;
use crate::inventory::{ContainerId, InventoryDomain, InventoryError, ItemKey};

impl RecipeKind {
    /// First ingredient the container lacks, counted across all slots.
    pub fn find_missing(
        &self,
        inventory: &InventoryDomain,
        container: ContainerId,
    ) -> Result<Option<ItemKey>, InventoryError> {
        for (item, required) in &self.ingredients {
            if !inventory.has_item_amount(container, *item, *required)? {
                return Ok(Some(*item));
            }
        }
        Ok(None)
    }

    pub fn can_craft(
        &self,
        inventory: &InventoryDomain,
        container: ContainerId,
    ) -> Result<bool, InventoryError> {
        Ok(self.find_missing(inventory, container)?.is_none())
    }
}
