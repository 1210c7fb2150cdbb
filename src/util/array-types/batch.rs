/* ************************************************************************ **
** This file is part of fixmat, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Applying one matrix to many vectors.
//!
//! Each vector is replaced in place by `&m * v` (column-vector convention).
//! The `flat` variants take packed coordinates, such as `[x0, y0, z0, x1, ...]`,
//! and view them as vectors without copying.

use rayon::prelude::*;
use slice_of_array::prelude::*;
use slice_of_array::IsSliceomorphic;
use std::ops::Mul;

/// Replace each point `v` with `&m * v`.
pub fn transform_points<M, V>(m: &M, points: &mut [V])
where for<'a> &'a M: Mul<&'a V, Output=V>,
{
    for point in points {
        *point = m * &*point;
    }
}

/// Data-parallel `transform_points`, using rayon.
pub fn par_transform_points<M, V>(m: &M, points: &mut [V])
where
    M: Sync,
    V: Send,
    for<'a> &'a M: Mul<&'a V, Output=V>,
{
    points.par_iter_mut().for_each(|point| *point = m * &*point);
}

/// `transform_points` on packed coordinates.
///
/// The vector type usually needs to be named, e.g.
/// `batch::transform_flat::<_, V3<f64>>(&m, &mut coords)`.
///
/// # Panics
///
/// Panics if the length of `coords` is not a multiple of the vector length.
pub fn transform_flat<M, V>(m: &M, coords: &mut [V::Element])
where
    V: IsSliceomorphic,
    for<'a> &'a M: Mul<&'a V, Output=V>,
{ transform_points(m, coords.nest_mut::<V>()) }

/// `par_transform_points` on packed coordinates.
///
/// # Panics
///
/// Panics if the length of `coords` is not a multiple of the vector length.
pub fn par_transform_flat<M, V>(m: &M, coords: &mut [V::Element])
where
    M: Sync,
    V: IsSliceomorphic + Send,
    for<'a> &'a M: Mul<&'a V, Output=V>,
{ par_transform_points(m, coords.nest_mut::<V>()) }

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{mat, V2, V3, V6, M22, M33, M66};

    fn quarter_turn_z() -> M33 {
        mat::from_array([
            [0.0, -1.0, 0.0],
            [1.0,  0.0, 0.0],
            [0.0,  0.0, 1.0],
        ])
    }

    #[test]
    fn points_in_place() {
        let mut points = vec![V3([1.0, 0.0, 0.0]), V3([0.0, 1.0, 0.0]), V3([1.0, 2.0, 3.0])];
        transform_points(&quarter_turn_z(), &mut points);
        assert_eq!(points, vec![V3([0.0, 1.0, 0.0]), V3([-1.0, 0.0, 0.0]), V3([-2.0, 1.0, 3.0])]);
    }

    #[test]
    fn parallel_matches_serial() {
        let m: M66<i64> = M66::from_fn(|r, c| (r as i64) - 2 * (c as i64) + 1);
        let original: Vec<V6<i64>> = (0..1000).map(|i| V6::from_fn(|k| (i * 7 + k as i64) % 11)).collect();

        let mut serial = original.clone();
        transform_points(&m, &mut serial);
        let mut parallel = original.clone();
        par_transform_points(&m, &mut parallel);

        assert_eq!(serial, parallel);
        assert_eq!(&m * &original[17], parallel[17]);
    }

    #[test]
    fn flat() {
        let mut coords = vec![1.0, 0.0, 0.0, 1.0, 2.0, 3.0];
        transform_flat::<_, V3<f64>>(&quarter_turn_z(), &mut coords);
        assert_eq!(coords, vec![0.0, 1.0, 0.0, -2.0, 1.0, 3.0]);

        let mut coords = vec![1, 2, 3, 4];
        par_transform_flat::<_, V2<i32>>(&M22::from_fn(|r, c| (r == c) as i32 * 2), &mut coords);
        assert_eq!(coords, vec![2, 4, 6, 8]);
    }

    #[test]
    #[should_panic]
    fn flat_bad_length() {
        let mut coords = vec![1.0, 0.0, 0.0, 1.0];
        transform_flat::<_, V3<f64>>(&M33::<f64>::eye(), &mut coords);
    }
}
