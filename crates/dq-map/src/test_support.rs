//! Arbitrary room trees for property tests.

use proptest::prelude::*;

use crate::room::Room;

/// Tree shapes without names; names are assigned in pre-order.
#[derive(Debug, Clone)]
pub(crate) enum Shape {
    Leaf,
    Node(Option<Box<Shape>>, Option<Box<Shape>>),
}

pub(crate) fn arb_shape() -> impl Strategy<Value = Shape> {
    Just(Shape::Leaf).prop_recursive(6, 64, 2, |inner| {
        (proptest::option::of(inner.clone()), proptest::option::of(inner))
            .prop_map(|(l, r)| Shape::Node(l.map(Box::new), r.map(Box::new)))
    })
}

/// Build rooms named `Sala 0`, `Sala 1`, ... in pre-order.
pub(crate) fn grow(shape: &Shape, next: &mut usize) -> Room {
    let mut room = Room::new(&format!("Sala {next}")).unwrap();
    *next += 1;
    if let Shape::Node(left, right) = shape {
        if let Some(l) = left {
            room = room.with_left(grow(l, next));
        }
        if let Some(r) = right {
            room = room.with_right(grow(r, next));
        }
    }
    room
}
