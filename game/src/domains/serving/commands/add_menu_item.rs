use crate::collections::Shared;
use crate::inventory::{ItemKey, ItemKind};
use crate::serving::{MenuItem, Serving, ServingDomain, ServingError, MENU_CAPACITY};

impl ServingDomain {
    pub fn add_menu_item<'operation>(
        &'operation mut self,
        kind: &Shared<ItemKind>,
        price: u32,
    ) -> Result<impl FnOnce() -> Vec<Serving> + 'operation, ServingError> {
        if self.menu.len() >= MENU_CAPACITY {
            return Err(ServingError::MenuIsFull);
        }
        if self.menu.iter().any(|entry| entry.item.id == kind.id) {
            return Err(ServingError::ItemAlreadyOnMenu { item: kind.id });
        }
        let kind = kind.clone();
        let operation = move || {
            self.menu.push(MenuItem {
                item: kind,
                price,
                available: true,
            });
            vec![Serving::MenuUpdated {
                menu: self.menu_snapshot(),
            }]
        };
        Ok(operation)
    }

    pub fn remove_menu_item<'operation>(
        &'operation mut self,
        index: usize,
    ) -> Result<impl FnOnce() -> Vec<Serving> + 'operation, ServingError> {
        if index >= self.menu.len() {
            return Err(ServingError::MenuEntryNotFound { index });
        }
        let operation = move || {
            self.menu.remove(index);
            vec![Serving::MenuUpdated {
                menu: self.menu_snapshot(),
            }]
        };
        Ok(operation)
    }

    pub fn remove_menu_entry<'operation>(
        &'operation mut self,
        item: ItemKey,
    ) -> Result<impl FnOnce() -> Vec<Serving> + 'operation, ServingError> {
        let index = self
            .menu
            .iter()
            .position(|entry| entry.item.id == item)
            .ok_or(ServingError::ItemNotOnMenu { item })?;
        self.remove_menu_item(index)
    }
}
