use rand::Rng;

use crate::serving::{
    Customer, CustomerId, CustomerPhase, Order, OrderId, OrderStatus, Serving, ServingDomain,
    ARRIVING_TIME, CUSTOMER_NAMES, LEAVING_TIME, MAX_PATIENCE, MIN_PATIENCE, SPAWN_INTERVAL,
};

impl ServingDomain {
    pub fn update(&mut self, time: f32, mut random: impl Rng) -> Vec<Serving> {
        self.time += time;
        let now = self.time;
        let mut events = vec![];
        for customer in self.customers.iter_mut() {
            match &mut customer.phase {
                CustomerPhase::Arriving { remaining } => {
                    *remaining -= time;
                    if *remaining <= 0.0 {
                        customer.phase = CustomerPhase::Seated;
                        customer.order.placed_at = now;
                        events.push(Serving::CustomerSeated {
                            customer: customer.id,
                            order: customer.order.id,
                            item: customer.order.item,
                            price: customer.order.price,
                        });
                    }
                }
                CustomerPhase::Seated => {
                    if customer.order.status == OrderStatus::Waiting
                        && customer.order.is_expired(now)
                    {
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
                CustomerPhase::Eating { remaining } => {
                    *remaining -= time;
                    if *remaining <= 0.0 {
                        customer.phase = CustomerPhase::Leaving {
                            remaining: LEAVING_TIME,
                        };
                    }
                }
                CustomerPhase::Leaving { remaining } => {
                    *remaining -= time;
                }
            }
        }
        let mut index = 0;
        while index < self.customers.len() {
            let done = matches!(
                self.customers[index].phase,
                CustomerPhase::Leaving { remaining } if remaining <= 0.0
            );
            if done {
                let customer = self.customers.remove(index);
                events.push(Serving::CustomerVanished {
                    customer: customer.id,
                });
            } else {
                index += 1;
            }
        }
        // walk-ins spawn last so the new customer's arrival starts next tick
        if self.open {
            self.spawn_timer += time;
            if self.spawn_timer >= SPAWN_INTERVAL {
                self.spawn_timer -= SPAWN_INTERVAL;
                events.extend(self.spawn_customer(&mut random));
            }
        }
        events
    }

    fn spawn_customer(&mut self, random: &mut impl Rng) -> Vec<Serving> {
        if self.customers.len() >= self.seats {
            return vec![];
        }
        let entries: Vec<usize> = self
            .menu
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.available)
            .map(|(index, _)| index)
            .collect();
        if entries.is_empty() {
            return vec![];
        }
        let seat = (0..self.seats)
            .find(|seat| !self.customers.iter().any(|customer| customer.seat == *seat))
            .unwrap();
        let entry = &self.menu[entries[random.gen_range(0..entries.len())]];
        let order = Order {
            id: OrderId(random.gen_range(1000..=9999)),
            item: entry.item.id,
            price: entry.price,
            placed_at: 0.0,
            patience: random.gen_range(MIN_PATIENCE..=MAX_PATIENCE),
            status: OrderStatus::Waiting,
        };
        let id = self.customers_id.one(CustomerId);
        let name = CUSTOMER_NAMES[random.gen_range(0..CUSTOMER_NAMES.len())].to_string();
        let customer = Customer {
            id,
            name: name.clone(),
            seat,
            order,
            phase: CustomerPhase::Arriving {
                remaining: ARRIVING_TIME,
            },
        };
        self.customers.push(customer);
        vec![Serving::CustomerAppeared {
            customer: id,
            name,
            seat,
        }]
    }
}
