use linsys::{linalg::assert_approx_eq, Decimal, Hyperplane, LinearSystem, Solution, Vector};
use nalgebra::{Matrix3, Vector3};
use rust_decimal::prelude::ToPrimitive;

fn plane<const N: usize>(coefficients: [&str; N], k: &str) -> Hyperplane {
    Hyperplane::parse(coefficients, k).unwrap()
}

fn system<const N: usize>(planes: [Hyperplane; N]) -> LinearSystem {
    LinearSystem::new(planes).unwrap()
}

fn assert_same_solution(a: &Solution, b: &Solution) {
    match (a, b) {
        (Solution::Unique(x), Solution::Unique(y)) => {
            assert_approx_eq!(*x, *y).abs(Decimal::new(1, 9));
        }
        _ => assert_eq!(a, b),
    }
}

fn random_system(rng: &mut fastrand::Rng, equations: usize, dimension: usize) -> LinearSystem {
    LinearSystem::new((0..equations).map(|_| {
        let normal = Vector::new((0..dimension).map(|_| Decimal::from(rng.i32(-5..=5)))).unwrap();
        Hyperplane::new(normal, Decimal::from(rng.i32(-10..=10))).unwrap()
    }))
    .unwrap()
}

#[test]
fn parallel_planes_have_no_solutions() {
    let s = system([
        plane(["5.862", "1.178", "-10.366"], "-8.15"),
        plane(["-2.931", "-0.589", "5.183"], "-4.075"),
    ]);
    assert_eq!(s.compute_solution().unwrap(), Solution::NoSolutions);

    let s = system([
        plane(["5.862", "1.178"], "-8.15"),
        plane(["-2.931", "-0.589"], "-4.075"),
    ]);
    assert_eq!(s.compute_solution().unwrap(), Solution::NoSolutions);
    assert_eq!(s.compute_solution().unwrap().to_string(), "No solutions");
}

#[test]
fn dependent_planes_have_infinitely_many_solutions() {
    let s = system([
        plane(["8.631", "5.112", "-1.816"], "-5.113"),
        plane(["4.315", "11.132", "-5.27"], "-6.775"),
        plane(["-2.158", "3.01", "-1.727"], "-0.831"),
    ]);
    assert_eq!(s.compute_solution().unwrap(), Solution::InfiniteSolutions);
}

#[test]
fn four_planes_meet_in_one_point() {
    let s = system([
        plane(["5.262", "2.739", "-9.878"], "-3.441"),
        plane(["5.111", "6.358", "7.638"], "-2.152"),
        plane(["2.016", "-9.924", "-1.367"], "-9.278"),
        plane(["2.167", "-13.543", "-18.883"], "-10.567"),
    ]);
    let solution = s.compute_solution().unwrap();
    let point = solution.unique().expect("expected a unique solution");
    assert_approx_eq!(*point, Vector::parse(["-1.177", "0.707", "-0.083"]).unwrap())
        .abs(Decimal::new(1, 3));

    let rref = s.compute_rref().unwrap();
    assert_eq!(
        rref.indices_of_first_nonzero_terms_in_each_row(),
        [Some(0), Some(1), Some(2), None]
    );
    assert_eq!(rref[3], Hyperplane::zero(3));
}

#[test]
fn rendering() {
    assert_eq!(plane(["1", "0", "0"], "0").to_string(), "x_1 = 0");
    assert_eq!(plane(["0", "0", "0"], "5").to_string(), "0 = 5");

    let s = system([
        plane(["5.862", "1.178", "-10.366"], "-8.15"),
        plane(["-2.931", "-0.589", "5.183"], "-4.075"),
    ]);
    assert_eq!(
        s.to_string(),
        "Linear System:\n\
         Equation 1: 5.862x_1 + 1.178x_2 - 10.366x_3 = -8.150\n\
         Equation 2: -2.931x_1 - 0.589x_2 + 5.183x_3 = -4.075"
    );
}

#[test]
fn row_swaps_preserve_the_solution() {
    let mut rng = fastrand::Rng::with_seed(0x11_5e5);
    for _ in 0..50 {
        let equations = rng.usize(1..=4);
        let dimension = rng.usize(1..=3);
        let s = random_system(&mut rng, equations, dimension);
        let expected = s.compute_solution().unwrap();

        let mut swapped = s.clone();
        swapped
            .swap_rows(rng.usize(..equations), rng.usize(..equations))
            .unwrap();
        assert_same_solution(&swapped.compute_solution().unwrap(), &expected);
    }
}

#[test]
fn rref_is_idempotent() {
    let mut rng = fastrand::Rng::with_seed(0x2ef);
    for _ in 0..30 {
        let (equations, dimension) = (rng.usize(1..=4), rng.usize(1..=3));
        let s = random_system(&mut rng, equations, dimension);
        let rref = s.compute_rref().unwrap();
        assert_eq!(rref.compute_rref().unwrap(), rref);
    }
}

#[test]
fn unique_solutions_agree_with_lu_decomposition() {
    let to_f64 = |d: Decimal| d.to_f64().unwrap();

    let mut rng = fastrand::Rng::with_seed(0x1a);
    for _ in 0..100 {
        let s = random_system(&mut rng, 3, 3);
        let a = Matrix3::from_fn(|r, c| to_f64(s[r].normal_vector()[c]));
        let b = Vector3::from_fn(|r, _| to_f64(s[r].constant_term()));

        let solution = s.compute_solution().unwrap();
        // Integer coefficients: the determinant is an exact integer.
        if a.determinant().round() == 0.0 {
            assert!(!solution.is_unique(), "singular system {s} solved as {solution}");
            continue;
        }

        let expected = a.lu().solve(&b).expect("nonsingular");
        let actual = solution.unique().expect("expected a unique solution");
        for i in 0..3 {
            assert_approx_eq!(to_f64(actual[i]), expected[i], "coordinate {i} of {s}")
                .abs(1e-6)
                .rel(1e-6);
        }
    }
}

#[test]
fn large_coefficients() {
    let s = system([
        plane(["1e15", "2e15"], "3e15"),
        plane(["3e15", "-1e15"], "2e15"),
    ]);
    let solution = s.compute_solution().unwrap();
    assert_approx_eq!(*solution.unique().unwrap(), Vector::parse(["1", "1"]).unwrap());

    let s = system([
        plane(["1e15", "1e15", "0"], "1"),
        plane(["2e15", "2e15", "0"], "2"),
    ]);
    assert_eq!(s.compute_solution().unwrap(), Solution::InfiniteSolutions);
    assert!(s[0].is_parallel_to(&s[1]).unwrap());
    assert_eq!(s[0], s[1]);
}
