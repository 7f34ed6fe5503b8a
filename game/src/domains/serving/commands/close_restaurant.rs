use crate::serving::{CustomerPhase, OrderStatus, Serving, ServingDomain, ServingError, LEAVING_TIME};

impl ServingDomain {
    /// Forced closure: every order still waiting fails and its customer
    /// starts leaving. Customers already eating or leaving are not
    /// re-triggered, so closing twice is harmless.
    pub fn close_restaurant<'operation>(
        &'operation mut self,
    ) -> Result<impl FnOnce() -> Vec<Serving> + 'operation, ServingError> {
        let operation = move || {
            self.open = false;
            let mut events = vec![Serving::RestaurantClosed];
            for customer in self.customers.iter_mut() {
                if customer.order.status == OrderStatus::Waiting {
                    customer.order.status = OrderStatus::Failed;
                    customer.phase = CustomerPhase::Leaving {
                        remaining: LEAVING_TIME,
                    };
                    events.push(Serving::OrderFailed {
                        customer: customer.id,
                        order: customer.order.id,
                    });
                }
            }
            self.menu.clear();
            events
        };
        Ok(operation)
    }
}
