//! End-to-end fulfillment scenarios against the public engine API.

use std::collections::HashMap;

use proptest::prelude::*;

use stockline_core::{OrderId, ProductId};
use stockline_events::{InMemorySink, ShipmentRecord};
use stockline_inventory::{InventorySystem, Order, OrderItem, ProductInfo, StockItem};

/// The blood-product catalog shipped with the CLI sample data.
fn catalog() -> Vec<ProductInfo> {
    [
        (0, "RBC A+ Adult", 700.0),
        (1, "RBC B+ Adult", 700.0),
        (2, "RBC AB+ Adult", 750.0),
        (3, "RBC O- Adult", 680.0),
        (4, "RBC A+ Child", 350.0),
        (5, "RBC AB+ Child", 200.0),
        (6, "PLT AB+", 120.0),
        (7, "PLT O+", 80.0),
        (8, "CRYO A+", 40.0),
        (9, "CRYO AB+", 80.0),
        (10, "FFP A+", 300.0),
        (11, "FFP B+", 300.0),
        (12, "FFP AB+", 300.0),
    ]
    .into_iter()
    .map(|(id, name, mass)| ProductInfo::new(ProductId::new(id), name, mass))
    .collect()
}

fn engine() -> InventorySystem<InMemorySink> {
    InventorySystem::new(catalog(), InMemorySink::new()).expect("catalog is valid")
}

fn mass_of(product_id: ProductId) -> f64 {
    catalog()
        .into_iter()
        .find(|p| p.product_id == product_id)
        .map(|p| p.mass_g)
        .unwrap_or(0.0)
}

fn record_mass(record: &ShipmentRecord) -> f64 {
    record
        .shipped
        .iter()
        .map(|item| mass_of(item.product_id) * item.quantity as f64)
        .sum()
}

#[test]
fn fully_stocked_order_ships_in_capped_batches_and_leaves_no_backorder() {
    let mut system = engine();
    system.process_restock(&[
        StockItem::new(ProductId::new(0), 100),
        StockItem::new(ProductId::new(1), 50),
    ]);

    system.process_order(&Order::new(
        OrderId::new(1),
        vec![
            OrderItem::new(ProductId::new(0), 10),
            OrderItem::new(ProductId::new(1), 5),
        ],
    ));

    assert_eq!(system.get_product_info(ProductId::new(0)).unwrap().stock, 90);
    assert_eq!(system.get_product_info(ProductId::new(1)).unwrap().stock, 45);

    let records = system.sink().records();
    assert_eq!(records.len(), 8);
    assert!(records.iter().all(|r| r.order_id == OrderId::new(1)));
    assert!(records.iter().all(|r| record_mass(r) <= 1800.0));
    assert!(system.backorders().is_empty());
}

#[test]
fn sample_replay_matches_expected_output_lines() {
    let mut system = engine();

    system.process_order(&Order::new(
        OrderId::new(123),
        vec![
            OrderItem::new(ProductId::new(0), 2),
            OrderItem::new(ProductId::new(10), 4),
        ],
    ));
    assert!(system.sink().is_empty());

    let restock: Vec<StockItem> = [30, 25, 25, 12, 15, 10, 8, 8, 20, 10, 5, 5, 5]
        .into_iter()
        .enumerate()
        .map(|(id, qty)| StockItem::new(ProductId::new(id as i64), qty))
        .collect();
    system.process_restock(&restock);

    let lines: Vec<String> = system
        .sink()
        .records()
        .iter()
        .map(|r| serde_json::to_string(r).unwrap())
        .collect();
    assert_eq!(
        lines,
        vec![
            r#"{"order_id":123,"shipped":[{"product_id":0,"quantity":2},{"product_id":10,"quantity":1}]}"#,
            r#"{"order_id":123,"shipped":[{"product_id":10,"quantity":3}]}"#,
        ]
    );
    assert!(system.backorders().is_empty());
}

#[test]
fn non_positive_restock_is_a_no_op_on_stock() {
    let mut system = engine();
    system.process_restock(&[StockItem::new(ProductId::new(4), 7)]);

    system.process_restock(&[
        StockItem::new(ProductId::new(4), -10),
        StockItem::new(ProductId::new(5), 0),
    ]);

    assert_eq!(system.get_product_info(ProductId::new(4)).unwrap().stock, 7);
    assert_eq!(system.get_product_info(ProductId::new(5)).unwrap().stock, 0);
}

#[test]
fn repeated_shortfall_restocks_converge() {
    let mut system = engine();
    let order_id = OrderId::new(77);
    system.process_order(&Order::new(
        order_id,
        vec![
            OrderItem::new(ProductId::new(3), 9),
            OrderItem::new(ProductId::new(8), 100),
        ],
    ));

    let mut rounds = 0;
    loop {
        let Some(owed) = system.backorder(order_id).map(|items| items.to_vec()) else {
            break;
        };
        let restock: Vec<StockItem> = owed
            .iter()
            .map(|item| StockItem::new(item.product_id, item.quantity))
            .collect();
        system.process_restock(&restock);
        rounds += 1;
        assert!(rounds < 5, "backorder did not converge");
    }

    let records = system.sink().records_for(order_id);
    let shipped_3: u64 = records.iter().map(|r| r.quantity_of(ProductId::new(3))).sum();
    let shipped_8: u64 = records.iter().map(|r| r.quantity_of(ProductId::new(8))).sum();
    assert_eq!((shipped_3, shipped_8), (9, 100));
}

#[derive(Debug, Clone)]
enum Op {
    Order(Vec<(i64, i64)>),
    Restock(Vec<(i64, i64)>),
}

fn ops() -> impl Strategy<Value = Vec<Op>> {
    // Product ids 13..15 are not in the catalog.
    let order = prop::collection::vec((0i64..15, 1i64..30), 1..5).prop_map(Op::Order);
    let restock = prop::collection::vec((0i64..15, -5i64..40), 1..6).prop_map(Op::Restock);
    prop::collection::vec(prop_oneof![order, restock], 1..25)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// Property: shipped + still owed equals requested, per order and product;
    /// no batch exceeds the cap.
    #[test]
    fn quantities_are_conserved_and_batches_capped(ops in ops()) {
        let mut system = engine();
        let mut requested: HashMap<(OrderId, ProductId), u64> = HashMap::new();
        let mut next_order = 1;

        for op in ops {
            match op {
                Op::Order(lines) => {
                    let order_id = OrderId::new(next_order);
                    next_order += 1;
                    let items: Vec<OrderItem> = lines
                        .iter()
                        .map(|(p, q)| OrderItem::new(ProductId::new(*p), *q))
                        .collect();
                    for item in &items {
                        let key = (order_id, item.product_id);
                        *requested.entry(key).or_default() += item.quantity as u64;
                    }
                    system.process_order(&Order::new(order_id, items));
                }
                Op::Restock(lines) => {
                    let items: Vec<StockItem> = lines
                        .iter()
                        .map(|(p, q)| StockItem::new(ProductId::new(*p), *q))
                        .collect();
                    system.process_restock(&items);
                }
            }
        }

        let records = system.sink().records();
        for record in &records {
            prop_assert!(!record.shipped.is_empty());
            prop_assert!(record_mass(record) <= 1800.0);
        }

        for ((order_id, product_id), wanted) in &requested {
            let shipped: u64 = records
                .iter()
                .filter(|r| r.order_id == *order_id)
                .map(|r| r.quantity_of(*product_id))
                .sum();
            let owed: u64 = system
                .backorder(*order_id)
                .unwrap_or(&[])
                .iter()
                .filter(|item| item.product_id == *product_id)
                .map(|item| item.quantity as u64)
                .sum();
            prop_assert_eq!(shipped + owed, *wanted);
        }

        for (_, owed) in system.backorders().iter() {
            prop_assert!(!owed.is_empty());
            prop_assert!(owed.iter().all(|item| item.quantity > 0));
        }
    }

    /// Property: restocks with only non-positive quantities leave stock unchanged.
    #[test]
    fn non_positive_restocks_are_idempotent(
        initial in prop::collection::vec(0i64..50, 13),
        negatives in prop::collection::vec((0i64..13, -50i64..=0), 1..10),
    ) {
        let mut system = engine();
        let seed: Vec<StockItem> = initial
            .iter()
            .enumerate()
            .map(|(id, q)| StockItem::new(ProductId::new(id as i64), *q))
            .collect();
        system.process_restock(&seed);

        let before: Vec<u64> = (0..13)
            .map(|id| system.get_product_info(ProductId::new(id)).unwrap().stock)
            .collect();

        let items: Vec<StockItem> = negatives
            .iter()
            .map(|(p, q)| StockItem::new(ProductId::new(*p), *q))
            .collect();
        system.process_restock(&items);

        let after: Vec<u64> = (0..13)
            .map(|id| system.get_product_info(ProductId::new(id)).unwrap().stock)
            .collect();
        prop_assert_eq!(before, after);
    }
}
