use array_kernel::{
    flatten, flatten_into, reshape, reshape_flat, reshape_flat_into, reshape_into, view, Error,
    Invalid, Nested, Seq,
};
use proptest::prelude::*;

fn shape() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(1usize..5, 1..5)
}

#[test]
fn odometer_orders_match_row_major() {
    let flat = Nested::from_flat([1, 2, 3, 4, 5, 6]);
    assert_eq!(
        reshape(&flat, &[3, 2]).unwrap(),
        Nested::from_rows([[1, 2], [3, 4], [5, 6]])
    );

    let wide = Nested::from_rows([[1, 2, 3], [4, 5, 6]]);
    assert_eq!(reshape(&wide, &[6]).unwrap(), flat);

    let tall = Nested::from_rows([[1, 2], [3, 4], [5, 6]]);
    assert_eq!(reshape(&tall, &[2, 3]).unwrap(), wide);
}

#[test]
fn rank_can_change_both_ways() {
    let flat = Nested::from_flat(1..=8);
    let cube = reshape(&flat, &[2, 2, 2]).unwrap();
    assert_eq!(cube.shape(), [2, 2, 2]);
    assert_eq!(cube.get(&[1, 0, 1]), Some(&6));
    assert_eq!(reshape(&cube, &[4, 2]).unwrap().get(&[3, 0]), Some(&7));
    assert_eq!(flatten(&cube).unwrap(), (1..=8).collect::<Vec<_>>());
}

#[test]
fn mismatched_element_counts_are_rejected() {
    let flat = Nested::from_flat([1, 2, 3, 4, 5, 6]);
    assert_eq!(
        reshape(&flat, &[4, 2]),
        Err(Error::InvalidArgument(Invalid::ShapeMismatch {
            source_len: 6,
            shape_len: 8
        }))
    );

    let mut dest = Nested::from_flat([0]);
    assert!(reshape_into(&flat, &[5], &mut dest, 0).is_err());
    assert_eq!(dest, Nested::from_flat([0]));
}

#[test]
fn reshape_into_keeps_rows_outside_the_written_region() {
    let mut dest = Nested::from_rows([[0, 0, 0], [0, 0, 0], [7, 7, 7]]);
    reshape_into(&Nested::from_flat([1, 2, 3]), &[1, 3], &mut dest, 1).unwrap();
    assert_eq!(dest, Nested::from_rows([[0, 0, 0], [1, 2, 3], [7, 7, 7]]));
}

#[test]
fn flatten_into_grows_destination() {
    let mut dest = vec![1, 2, 3];
    flatten_into(&Nested::from_rows([[4, 5], [6, 7]]), &mut dest, 1).unwrap();
    assert_eq!(dest, [1, 4, 5, 6, 7]);
}

#[test]
fn overflowing_shapes_are_rejected() {
    let flat = Nested::from_flat([1, 2]);
    let overflow = Err(Error::InvalidArgument(Invalid::Overflow));
    assert_eq!(reshape(&flat, &[usize::MAX, 2]), overflow);
    assert_eq!(reshape_flat(&[1, 2], &[2, usize::MAX, 2]), overflow);
    // A zero extent makes the count zero however large the others are.
    let empty: Nested<i32> = Nested::from_flat([]);
    assert_eq!(reshape(&empty, &[usize::MAX, 2, 0]), Ok(Nested::Node(Vec::new())));
}

#[test]
fn flat_arrays_reshape_in_place() {
    let a = [1, 0, 2, 0, 3, 0, 4, 0, 5, 0, 6, 0];
    let odd = view::stride(&a, 0, 2, 6).unwrap();
    assert_eq!(
        reshape_flat(&odd, &[3, 2]).unwrap(),
        Nested::from_rows([[1, 2], [3, 4], [5, 6]])
    );

    let v = vec![1, 2, 3, 4, 5, 6, 7];
    let tail = Seq::new(&v, 1, 6).unwrap();
    assert_eq!(
        reshape_flat(&tail, &[2, 3]).unwrap(),
        Nested::from_rows([[2, 3, 4], [5, 6, 7]])
    );
    assert_eq!(
        reshape_flat(&v, &[2, 3]),
        Err(Error::InvalidArgument(Invalid::ShapeMismatch {
            source_len: 7,
            shape_len: 6
        }))
    );

    let mut dest = Nested::from_rows([[0, 0]]);
    reshape_flat_into(&[7, 8, 9, 10], &[2, 2], &mut dest, 1).unwrap();
    assert_eq!(dest, Nested::from_rows([[0, 0], [7, 8], [9, 10]]));
}

proptest! {
    #[test]
    fn flatten_then_reshape_restores_the_source(s in shape()) {
        let len: usize = s.iter().product();
        let nested = reshape(&Nested::from_flat(0..len), &s).unwrap();
        prop_assert_eq!(nested.shape(), s.clone());

        let flat = flatten(&nested).unwrap();
        prop_assert_eq!(reshape_flat(&flat, &s).unwrap(), nested.clone());
        prop_assert_eq!(reshape(&Nested::from_flat(flat), &s).unwrap(), nested);
    }

    #[test]
    fn reshape_then_flatten_restores_the_order(
        (from, to) in shape().prop_flat_map(|s| (Just(s.clone()), Just(s).prop_shuffle()))
    ) {
        let len: usize = from.iter().product();
        let flat: Vec<usize> = (0..len).collect();
        let source = reshape(&Nested::from_flat(flat.iter().copied()), &from).unwrap();
        let reshaped = reshape(&source, &to).unwrap();
        prop_assert_eq!(reshaped.shape(), to);
        prop_assert_eq!(flatten(&reshaped).unwrap(), flat);
    }
}
