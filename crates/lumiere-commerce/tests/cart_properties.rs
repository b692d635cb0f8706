use lumiere_commerce::prelude::*;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Add(u32),
    Remove(u32),
    SetQuantity(u32, i64),
    Increment(u32),
    Decrement(u32),
}

fn product(id: u32, price: i64) -> Product {
    Product::new(ProductId::new(id), format!("Candle {id}"), ScentFamily::Woody, Money::rub(price))
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (1u32..6).prop_map(Op::Add),
        (1u32..8).prop_map(Op::Remove),
        ((1u32..8), (-3i64..6)).prop_map(|(id, q)| Op::SetQuantity(id, q)),
        (1u32..8).prop_map(Op::Increment),
        (1u32..8).prop_map(Op::Decrement),
    ]
}

fn apply(cart: &mut Cart, op: &Op) {
    match *op {
        Op::Add(id) => cart.add(&product(id, i64::from(id) * 100)),
        Op::Remove(id) => {
            cart.remove(ProductId::new(id));
        }
        Op::SetQuantity(id, q) => {
            cart.set_quantity(ProductId::new(id), q);
        }
        Op::Increment(id) => {
            cart.increment(ProductId::new(id));
        }
        Op::Decrement(id) => {
            cart.decrement(ProductId::new(id));
        }
    }
}

proptest! {
    #[test]
    fn prop_repeated_add_merges_into_one_line(n in 1usize..50, price in 0i64..10_000) {
        let candle = product(1, price);
        let mut cart = Cart::new();
        for _ in 0..n {
            cart.add(&candle);
        }

        prop_assert_eq!(cart.line_count(), 1);
        prop_assert_eq!(cart.get(candle.id).map(|l| l.quantity as usize), Some(n));
        prop_assert_eq!(cart.total(), Money::rub(price * n as i64));
    }

    #[test]
    fn prop_invariants_hold_after_any_sequence(ops in prop::collection::vec(op(), 0..64)) {
        let mut cart = Cart::new();
        for op in &ops {
            apply(&mut cart, op);
        }

        let mut seen = std::collections::HashSet::new();
        for line in cart.items() {
            prop_assert!(line.quantity >= 1);
            prop_assert!(seen.insert(line.product.id));
        }

        let expected_total: i64 = cart
            .items()
            .iter()
            .map(|l| l.product.price.amount * i64::from(l.quantity))
            .sum();
        prop_assert_eq!(cart.total(), Money::rub(expected_total));

        let expected_count: u64 = cart.items().iter().map(|l| u64::from(l.quantity)).sum();
        prop_assert_eq!(cart.item_count(), expected_count);
    }

    #[test]
    fn prop_non_positive_set_quantity_equals_remove(
        ops in prop::collection::vec(op(), 0..32),
        id in 1u32..8,
        q in -100i64..=0,
    ) {
        let mut cart = Cart::new();
        for op in &ops {
            apply(&mut cart, op);
        }
        let mut removed = cart.clone();

        cart.set_quantity(ProductId::new(id), q);
        removed.remove(ProductId::new(id));
        prop_assert_eq!(cart, removed);
    }

    #[test]
    fn prop_set_quantity_never_inserts(id in 1u32..8, q in 1i64..100) {
        let mut cart = Cart::new();
        cart.set_quantity(ProductId::new(id), q);
        prop_assert!(cart.is_empty());
    }
}

#[test]
fn test_two_products_added_twice_count_four() {
    let catalog = Catalog::lumiere();
    let mut cart = Cart::new();
    for product in catalog.products().iter().take(2) {
        cart.add(product);
        cart.add(product);
    }
    assert_eq!(cart.item_count(), 4);
    assert_eq!(cart.line_count(), 2);
}
