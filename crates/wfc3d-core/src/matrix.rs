//! Tiny integer matrix helpers backing the symmetry groups.
//!
//! Every element of both groups is a signed permutation matrix, so plain
//! `i8` arithmetic is exact.

/// Row-major 3x3 integer matrix.
pub(crate) type Mat3 = [[i8; 3]; 3];

/// Row-major 2x2 integer matrix.
pub(crate) type Mat2 = [[i8; 2]; 2];

pub(crate) const IDENTITY3: Mat3 = [[1, 0, 0], [0, 1, 0], [0, 0, 1]];

pub(crate) fn mul3(a: &Mat3, b: &Mat3) -> Mat3 {
    let mut out = [[0i8; 3]; 3];
    for (i, row) in out.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = (0..3).map(|k| a[i][k] * b[k][j]).sum();
        }
    }
    out
}

pub(crate) fn apply3(m: &Mat3, v: [i8; 3]) -> [i8; 3] {
    let mut out = [0i8; 3];
    for (i, o) in out.iter_mut().enumerate() {
        *o = (0..3).map(|k| m[i][k] * v[k]).sum();
    }
    out
}

pub(crate) fn neg3(m: &Mat3) -> Mat3 {
    let mut out = *m;
    for row in out.iter_mut() {
        for cell in row.iter_mut() {
            *cell = -*cell;
        }
    }
    out
}

pub(crate) fn det3(m: &Mat3) -> i8 {
    m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
        - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
        + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
}

pub(crate) fn mul2(a: &Mat2, b: &Mat2) -> Mat2 {
    let mut out = [[0i8; 2]; 2];
    for (i, row) in out.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = a[i][0] * b[0][j] + a[i][1] * b[1][j];
        }
    }
    out
}

pub(crate) fn apply2(m: &Mat2, v: [i8; 2]) -> [i8; 2] {
    [
        m[0][0] * v[0] + m[0][1] * v[1],
        m[1][0] * v[0] + m[1][1] * v[1],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_neutral() {
        let m: Mat3 = [[0, -1, 0], [1, 0, 0], [0, 0, 1]];
        assert_eq!(mul3(&IDENTITY3, &m), m);
        assert_eq!(mul3(&m, &IDENTITY3), m);
    }

    #[test]
    fn determinant_of_reflection_is_negative() {
        assert_eq!(det3(&IDENTITY3), 1);
        assert_eq!(det3(&neg3(&IDENTITY3)), -1);
    }

    #[test]
    fn apply_matches_columns() {
        let m: Mat3 = [[0, 0, 1], [1, 0, 0], [0, 1, 0]];
        assert_eq!(apply3(&m, [1, 0, 0]), [0, 1, 0]);
        assert_eq!(apply3(&m, [0, 0, 1]), [1, 0, 0]);
    }
}
