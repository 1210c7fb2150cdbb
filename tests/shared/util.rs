use rand::{Rng, SeedableRng, XorShiftRng};
use fixmat::{mat, V3, M33, Quaternion};

/// Install a logger, so that `RUST_LOG=trace` shows the kernel's log output.
pub fn init_logger() {
    let _ = env_logger::try_init();
}

pub fn seeded_rng(seed: u32) -> XorShiftRng {
    XorShiftRng::from_seed([seed, 0x9E37_79B9, 0x7F4A_7C15, 0xDEAD_BEEF])
}

pub fn random_v3(rng: &mut XorShiftRng) -> V3 {
    V3::from_fn(|_| rng.gen_range(-1.0, 1.0))
}

/// A random matrix that is invertible thanks to a dominant diagonal.
pub fn random_invertible_m33(rng: &mut XorShiftRng) -> M33 {
    mat::from_fn(|r, c| {
        let x: f64 = rng.gen_range(-1.0, 1.0);
        if r == c { x + 4.0 } else { x }
    })
}

/// Unit quaternions `q` and `-q` represent the same rotation.
pub fn assert_same_rotation(a: &Quaternion, b: &Quaternion, tol: f64) {
    let b = if a.dot(b) < 0.0 { -b } else { *b };
    assert_close!(abs=tol, a.into_array(), b.into_array());
}

macro_rules! zip_eq {
    ($a:expr, $b:expr $(,)*) => {
        crate::shared::util::zip_eq($a, $b)
    };
}

pub fn zip_eq<As, Bs>(a: As, b: Bs) -> std::iter::Zip<As::IntoIter, Bs::IntoIter>
where
    As: IntoIterator, As::IntoIter: ExactSizeIterator,
    Bs: IntoIterator, Bs::IntoIter: ExactSizeIterator,
{
    let (a, b) = (a.into_iter(), b.into_iter());
    assert_eq!(a.len(), b.len());
    a.zip(b)
}
