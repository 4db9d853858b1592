use array_kernel::{groups, groups_ex, view, zip, zip3, Array, Seq};

#[test]
fn groups_of_xyz_triples() {
    let positions = [0.0, 1.0, 2.0, 10.0, 11.0, 12.0, 20.0, 21.0, 22.0];
    let sums: Vec<f64> = groups::<_, 3>(&positions)
        .map(|[x, y, z]| x + y + z)
        .collect();
    assert_eq!(sums, [3.0, 33.0, 63.0]);
}

#[test]
fn groups_remainder_and_reversal() {
    let a = [1, 2, 3, 4, 5, 6, 7, 8];
    let mut iter = groups::<_, 3>(&a);
    assert_eq!(iter.len(), 2);
    assert_eq!(iter.next_back(), Some([&4, &5, &6]));
    assert_eq!(iter.next(), Some([&1, &2, &3]));
    assert_eq!(iter.next(), None);

    let rest = iter.remainder();
    assert_eq!(rest.len(), 2);
    assert_eq!((rest[0], rest[1]), (7, 8));
}

#[test]
fn groups_over_a_sub_range() {
    let a = [0, 1, 2, 3, 4, 5, 6, 7];
    let pairs: Vec<[i32; 2]> = groups_ex::<_, 2>(Seq::new(&a, 3, 4).unwrap())
        .map(|g| g.map(|x| *x))
        .collect();
    assert_eq!(pairs, [[3, 4], [5, 6]]);
}

#[test]
fn zip_over_views() {
    let a = [1, 2, 3, 4, 5, 6];
    let odds = view::stride(&a, 0, 2, 3).unwrap();
    let evens = view::stride(&a, 1, 2, 3).unwrap();
    let products: Vec<i32> = zip(Seq::whole(&odds), Seq::whole(&evens))
        .map(|(x, y)| x * y)
        .collect();
    assert_eq!(products, [2, 12, 30]);
}

#[test]
fn zip3_over_sub_ranges() {
    let x = [1, 2, 3, 4];
    let y = [10, 20, 30, 40];
    let z = vec![100, 200, 300, 400];
    let iter = zip3(
        Seq::new(&x, 1, 3).unwrap(),
        Seq::new(&y, 2, 2).unwrap(),
        Seq::whole(&z),
    );
    assert_eq!(iter.len(), 2);
    let sums: Vec<i32> = iter.map(|(a, b, c)| a + b + c).collect();
    assert_eq!(sums, [132, 243]);
}
