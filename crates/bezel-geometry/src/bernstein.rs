//! Bernstein basis evaluation for weighted Bézier curves.

use bezel_math::{DVec3, Point3, Vector3};

/// Row `n` of Pascal's triangle: `C(n, 0) ..= C(n, n)`.
fn binomial_row(n: usize) -> Vec<f64> {
    let mut row = vec![1.0; n + 1];
    for i in 1..=n {
        row[i] = row[i - 1] * (n - i + 1) as f64 / i as f64;
    }
    row
}

/// Bernstein basis values `B_{i,n}(t)` for `i = 0..=degree`.
///
/// The polynomial basis extrapolates for `t` outside `[0, 1]`; there is no
/// clamping.
pub fn basis_functions(degree: usize, t: f64) -> Vec<f64> {
    let binom = binomial_row(degree);
    let u = 1.0 - t;
    (0..=degree)
        .map(|i| binom[i] * t.powi(i as i32) * u.powi((degree - i) as i32))
        .collect()
}

/// Bernstein basis values and their first derivatives at `t`.
///
/// Uses `B'_{i,n}(t) = n * (B_{i-1,n-1}(t) - B_{i,n-1}(t))`.
pub fn basis_functions_derivs(degree: usize, t: f64) -> (Vec<f64>, Vec<f64>) {
    let basis = basis_functions(degree, t);
    if degree == 0 {
        return (basis, vec![0.0]);
    }

    let lower = basis_functions(degree - 1, t);
    let n = degree as f64;
    let derivs = (0..=degree)
        .map(|i| {
            let left = if i > 0 { lower[i - 1] } else { 0.0 };
            let right = if i < degree { lower[i] } else { 0.0 };
            n * (left - right)
        })
        .collect();

    (basis, derivs)
}

/// Evaluate a weighted Bézier curve point at parameter `t`.
///
/// With unit weights this is the classical Bernstein-basis curve; general
/// weights give the rational form.
pub fn curve_point(control_points: &[Point3], weights: &[f64], t: f64) -> Point3 {
    let degree = control_points.len() - 1;
    let basis = basis_functions(degree, t);

    let mut point = DVec3::ZERO;
    let mut w = 0.0;

    for (i, basis_i) in basis.iter().enumerate() {
        let bw = basis_i * weights[i];
        point += bw * control_points[i];
        w += bw;
    }

    if w.abs() < 1e-15 {
        point
    } else {
        point / w
    }
}

/// Evaluate the tangent of a weighted Bézier curve at parameter `t`.
pub fn curve_tangent(control_points: &[Point3], weights: &[f64], t: f64) -> Vector3 {
    let degree = control_points.len() - 1;
    let (basis, dbasis) = basis_functions_derivs(degree, t);

    let mut a = DVec3::ZERO;
    let mut da = DVec3::ZERO;
    let mut w = 0.0;
    let mut dw = 0.0;

    for i in 0..=degree {
        let bw = basis[i] * weights[i];
        let dbw = dbasis[i] * weights[i];
        a += bw * control_points[i];
        da += dbw * control_points[i];
        w += bw;
        dw += dbw;
    }

    if w.abs() < 1e-15 {
        da
    } else {
        let c = a / w;
        (da - dw * c) / w
    }
}
