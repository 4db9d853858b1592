use array_kernel::*;

#[test]
fn allocation_size_follows_requested_count() {
    let a = [1, 2, 3, 4, 5, 6, 7, 8, 9];
    let b = [1; 20];
    let middle = Seq::new(&a, 2, 4).unwrap();
    assert_eq!(copy(&middle), [3, 4, 5, 6]);
    assert_eq!(add(&middle, &b).unwrap(), [4, 5, 6, 7]);
    assert_eq!(map(&middle, |x| x * 2).len(), 4);
    assert_eq!(fill(0u8, 5).len(), 5);
}

#[test]
fn destination_grows_by_the_missing_tail_only() {
    let src = [7, 8, 9];
    let mut dest = vec![1, 2, 3, 4];
    copy_ex(Seq::whole(&src), &mut dest, 2).unwrap();
    assert_eq!(dest, [1, 2, 7, 8, 9]);

    // Fits entirely: no growth.
    copy_ex(Seq::new(&src, 0, 2).unwrap(), &mut dest, 0).unwrap();
    assert_eq!(dest, [7, 8, 7, 8, 9]);

    // Past the end: default-filled gap.
    fill_into(5, 2, &mut dest, 7).unwrap();
    assert_eq!(dest, [7, 8, 7, 8, 9, 0, 0, 5, 5]);
}

#[test]
fn destination_offset_on_an_empty_buffer() {
    let mut out = Vec::new();
    generate_into(3, |i| i as i32 + 1, &mut out, 2).unwrap();
    assert_eq!(out, [0, 0, 1, 2, 3]);
}

#[test]
fn fixed_capacity_destination() {
    let mut out: arrayvec::ArrayVec<i32, 4> = arrayvec::ArrayVec::new();
    copy_ex(Seq::whole(&[1, 2, 3]), &mut out, 0).unwrap();
    assert_eq!(out.as_slice(), [1, 2, 3]);
    let err = copy_ex(Seq::whole(&[4, 5]), &mut out, 3).unwrap_err();
    assert!(matches!(err, Error::Unsupported { .. }));
    assert_eq!(out.as_slice(), [1, 2, 3]);
}

#[test]
fn append_to_self_doubles() {
    let mut a = vec![1, 2, 3];
    append_within(&mut a, 0, 3).unwrap();
    assert_eq!(a, [1, 2, 3, 1, 2, 3]);

    let mut b = vec![4];
    append(&mut b, &a).unwrap();
    assert_eq!(b, [4, 1, 2, 3, 1, 2, 3]);
}

#[test]
fn join_and_reverse() {
    assert_eq!(join(&[1, 2], &vec![3]), [1, 2, 3]);
    assert_eq!(reverse(&vec!['a', 'b', 'c']), ['c', 'b', 'a']);

    let src = [1, 2, 3, 4, 5];
    let mut dest = vec![0; 2];
    reverse_ex(Seq::new(&src, 1, 3).unwrap(), &mut dest, 1).unwrap();
    assert_eq!(dest, [0, 4, 3, 2]);
}

#[test]
fn ranges() {
    assert_eq!(range(1, 5).unwrap(), [1, 2, 3, 4, 5]);
    assert_eq!(range(5, 1).unwrap(), [5, 4, 3, 2, 1]);
    assert_eq!(range_step(1, 10, 4).unwrap(), [1, 5, 9]);
    assert_eq!(range_step(-1.0, -2.0, -0.5).unwrap(), [-1.0, -1.5, -2.0]);
    assert_eq!(range_step(250u8, 255, 5).unwrap(), [250, 255]);
    assert_eq!(
        range_step(1, 10, 0),
        Err(Error::InvalidArgument(Invalid::ZeroStep))
    );
    assert_eq!(
        range_step(10, 1, 1),
        Err(Error::InvalidArgument(Invalid::StepDirection))
    );
}

#[test]
fn ranges_over_the_full_width_of_narrow_integers() {
    let up = range(-100i8, 100).unwrap();
    assert_eq!(up.len(), 201);
    assert_eq!((up[0], up[200]), (-100, 100));

    let all = range(i8::MIN, i8::MAX).unwrap();
    assert_eq!(all.len(), 256);
    assert_eq!(range(u8::MAX, 0).unwrap().len(), 256);
    assert_eq!(range(0u8, u8::MAX).unwrap().last(), Some(&u8::MAX));

    assert_eq!(range_step(0i8, -128, i8::MIN).unwrap(), [0, -128]);
    assert_eq!(range_step(i8::MIN, i8::MAX, i8::MAX).unwrap(), [-128, -1, 126]);
    // The next value would overflow before passing the bound.
    assert_eq!(range_step(100u8, 255, 100).unwrap(), [100, 200]);
}

#[test]
fn ranges_reject_values_that_cannot_be_ordered() {
    let non_finite = Err(Error::InvalidArgument(Invalid::NonFinite));
    assert_eq!(range_step(0.0, 1.0, f64::NAN), non_finite);
    assert_eq!(range_step(f64::NAN, 1.0, 0.5), non_finite);
    assert_eq!(range_step(0.0, f64::NAN, 0.5), non_finite);
    assert_eq!(range_step(0.0, f64::INFINITY, 1.0), non_finite);
    assert_eq!(
        range(0.0f32, f32::NEG_INFINITY),
        Err(Error::InvalidArgument(Invalid::NonFinite))
    );

    let mut dest = vec![1.0];
    assert_eq!(
        range_into(0.0, 1.0, f64::NAN, &mut dest, 0),
        Err(Error::InvalidArgument(Invalid::NonFinite))
    );
    assert_eq!(dest, [1.0]);
}

#[test]
fn float_ranges_keep_an_end_bound_the_step_lands_on() {
    let tenths = range_step(0.0, 0.9, 0.1).unwrap();
    assert_eq!(tenths.len(), 10);
    assert_eq!(tenths.last(), Some(&0.9));
    assert_eq!(range_step(1.0, 0.0, -0.1).unwrap().len(), 11);
    assert_eq!(range_step(0.0, 0.95, 0.1).unwrap().len(), 10);
    assert_eq!(range(0.5, 3.0).unwrap(), [0.5, 1.5, 2.5]);
}

#[test]
fn range_into_fails_before_touching_destination() {
    let mut dest = vec![1, 2];
    assert!(range_into(1, 10, 0, &mut dest, 5).is_err());
    assert_eq!(dest, [1, 2]);
}

#[test]
fn n_ary_maps() {
    let a = [1, 2, 3];
    let b = [10, 20, 30];
    let c = [100, 200, 300];
    assert_eq!(map2(&a, &b, |x, y| x + y).unwrap(), [11, 22, 33]);
    assert_eq!(map3(&a, &b, &c, |x, y, z| x + y + z).unwrap(), [111, 222, 333]);
    assert!(map2(&a, &[1], |x, y| x + y).is_err());

    let mut out = Vec::new();
    map3_ex(
        (
            Seq::new(&a, 1, 2).unwrap(),
            Seq::new(&b, 1, 2).unwrap(),
            Seq::new(&c, 0, 2).unwrap(),
        ),
        |x, y, z| x * y * z,
        &mut out,
        0,
    )
    .unwrap();
    assert_eq!(out, [2 * 20 * 100, 3 * 30 * 200]);

    let mut out = vec![0.0];
    map_ex(Seq::whole(&a), |&x| x as f64 / 2.0, &mut out, 1).unwrap();
    assert_eq!(out, [0.0, 0.5, 1.0, 1.5]);

    assert!(matches!(
        map_many::<i32, i32>(&[], |xs| xs.len() as i32),
        Err(Error::MissingArgument { .. })
    ));
}

#[test]
fn arithmetic() {
    let a = [6.0, 8.0, 10.0];
    let b = [3.0, 2.0, 5.0];
    assert_eq!(sub(&a, &b).unwrap(), [3.0, 6.0, 5.0]);
    assert_eq!(div(&a, &b).unwrap(), [2.0, 4.0, 2.0]);
    assert_eq!(pow(&b, &[2.0, 3.0, 0.0]).unwrap(), [9.0, 8.0, 1.0]);
    assert_eq!(rem(&[7, 8, 9], &[4, 4, 4]).unwrap(), [3, 0, 1]);
    assert_eq!(mul_constant(&a, Operand::Scalar(0.5)).unwrap(), [3.0, 4.0, 5.0]);

    let mut out = vec![0.0; 1];
    add_ex(Seq::new(&a, 1, 2).unwrap(), Seq::new(&b, 0, 2).unwrap(), &mut out, 0).unwrap();
    assert_eq!(out, [11.0, 10.0]);
}

#[test]
fn repeating_operand_is_consumed_cyclically() {
    let flat = [0, 0, 0, 0, 0, 0, 0];
    let pattern = vec![1, 2, 3];
    // Seven is not a multiple of three: the last repetition is partial.
    assert_eq!(
        add_constant(&flat, Operand::Array(&pattern)).unwrap(),
        [1, 2, 3, 1, 2, 3, 1]
    );

    let mut out = Vec::new();
    sub_constant_ex(Seq::new(&flat, 2, 4).unwrap(), Operand::Array(&pattern), &mut out, 0).unwrap();
    assert_eq!(out, [-1, -2, -3, -1]);
}

#[test]
fn comparisons_produce_booleans() {
    let a = [1, 5, 3];
    let b = [2, 5, 1];
    assert_eq!(lt(&a, &b).unwrap(), [true, false, false]);
    assert_eq!(eq(&a, &b).unwrap(), [false, true, false]);
    assert_eq!(ge_constant(&a, Operand::Scalar(3)).unwrap(), [false, true, true]);

    let mut out = vec![true];
    ne_ex(Seq::whole(&a), Seq::whole(&b), &mut out, 1).unwrap();
    assert_eq!(out, [true, true, false, true]);
}

#[test]
fn equality_treats_length_mismatch_as_false() {
    assert!(all_equals(&[1, 2, 3], &[1, 2, 3]));
    assert!(!all_equals(&[1, 2, 3], &[1, 2, 3, 4]));
    assert!(all_equals_ex(
        Seq::new(&[0, 1, 2], 1, 2).unwrap(),
        Seq::new(&[1, 2, 9], 0, 2).unwrap()
    ));
    assert!(all_equals_constant(&[4, 4], &4));
    assert!(!all_almost_equals(&[1.0], &[1.0, 1.0], 1.0));
}

#[test]
fn tolerance_comparison() {
    let a = [1.01, 1.05, 0.95, 1.0, 1.0, 1.001];
    assert!(all_almost_equals_constant(&a, 1.0, 0.1));
    assert!(!all_almost_equals_constant(&a, 1.0, DEFAULT_EPSILON));

    let tail = Seq::new(&a, 3, 3).unwrap();
    assert!(all_almost_equals_constant(&tail, 1.0, 0.01));
    assert!(!all_almost_equals_constant(&a, 1.0, 0.01));

    let ones = [1.0; 3];
    assert!(all_almost_equals_ex(tail, Seq::whole(&ones), 0.01));
    assert!(all_almost_equals(&[0.1 + 0.2], &[0.3], default_epsilon()));
}

#[test]
fn array_primitives() {
    let a: Vec<u16> = new_array(2);
    assert_eq!(a, [0, 0]);
    assert_eq!(zeros::<f32>(2), [0.0, 0.0]);
    assert_eq!(length(&a), 2);

    let src = [1, 2, 3, 4];
    assert_eq!(copy_array(&src, 1, 2).unwrap(), [2, 3]);
    assert!(copy_array(&src, 3, 2).is_err());

    let mut dest = vec![0];
    copy_array_into(&src, 2, 2, &mut dest, 2).unwrap();
    assert_eq!(dest, [0, 0, 3, 4]);
    assert_eq!(src.copy_ext(0, 1).unwrap(), [1]);
}

mod growth {
    use array_kernel::{copy_ex, fill_into, Seq};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn destination_keeps_its_prefix(
            existing in prop::collection::vec(1i32..100, 0..16),
            src in prop::collection::vec(100i32..200, 0..16),
            dest_start in 0usize..24,
        ) {
            let mut dest = existing.clone();
            copy_ex(Seq::whole(&src), &mut dest, dest_start).unwrap();

            prop_assert_eq!(dest.len(), existing.len().max(dest_start + src.len()));
            let untouched = existing.len().min(dest_start);
            prop_assert_eq!(&dest[..untouched], &existing[..untouched]);
            for i in existing.len()..dest_start {
                prop_assert_eq!(dest[i], 0);
            }
            prop_assert_eq!(&dest[dest_start..dest_start + src.len()], &src[..]);
        }

        #[test]
        fn writing_twice_grows_once(count in 0usize..8, dest_start in 0usize..8) {
            let mut once = Vec::new();
            fill_into(7u8, count, &mut once, dest_start).unwrap();
            let mut twice = once.clone();
            fill_into(7u8, count, &mut twice, dest_start).unwrap();
            prop_assert_eq!(once.len(), dest_start + count);
            prop_assert_eq!(once, twice);
        }
    }
}
