use crate::inventory::ItemKey;
use crate::serving::{
    CustomerPhase, OrderId, OrderStatus, Serving, ServingDomain, ServingError, EATING_TIME,
};

impl ServingDomain {
    /// Returns the payment along with the commit; the caller consumes the
    /// food from its inventory and credits the money.
    pub fn serve_order<'operation>(
        &'operation mut self,
        order: OrderId,
        served: ItemKey,
        now: f32,
    ) -> Result<(u32, impl FnOnce() -> Vec<Serving> + 'operation), ServingError> {
        let customer = self.get_customer_with_order(order)?;
        if customer.phase != CustomerPhase::Seated {
            return Err(ServingError::CustomerNotSeated {
                customer: customer.id,
            });
        }
        if customer.order.item != served {
            return Err(ServingError::WrongFood {
                order,
                item: served,
            });
        }
        if customer.order.is_expired(now) {
            return Err(ServingError::OrderExpired { order });
        }
        let payment = customer.order.price;
        let operation = move || {
            let customer = self
                .customers
                .iter_mut()
                .find(|customer| customer.order.id == order)
                .unwrap();
            customer.order.status = OrderStatus::Completed;
            customer.phase = CustomerPhase::Eating {
                remaining: EATING_TIME,
            };
            let id = customer.id;
            self.customers_served += 1;
            self.total_earnings += payment;
            vec![Serving::OrderCompleted {
                customer: id,
                order,
                payment,
            }]
        };
        Ok((payment, operation))
    }
}
