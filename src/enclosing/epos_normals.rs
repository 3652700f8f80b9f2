use crate::math::Real;

/// Sampling normals of the EPOS family, ordered so that every variant uses a prefix of this
/// table: the first 3 rows for EPOS-6, 7 for EPOS-14, 13 for EPOS-26 and all 49 for EPOS-98.
///
/// Each normal samples two directions (`n` and `-n`). The normals are not unit-length: only
/// the ordering of the projections along them matters.
pub(crate) const EPOS_NORMALS: [[Real; 3]; 49] = [
    // EPOS-6: the coordinate axes.
    [1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
    // EPOS-14: the cube diagonals.
    [1.0, 1.0, 1.0],
    [1.0, 1.0, -1.0],
    [1.0, -1.0, 1.0],
    [1.0, -1.0, -1.0],
    // EPOS-26: the face diagonals.
    [1.0, 1.0, 0.0],
    [1.0, -1.0, 0.0],
    [1.0, 0.0, 1.0],
    [1.0, 0.0, -1.0],
    [0.0, 1.0, 1.0],
    [0.0, 1.0, -1.0],
    // EPOS-98: permutations of (0, 1, 2), (1, 1, 2) and (1, 2, 2) up to sign.
    [0.0, 1.0, 2.0],
    [0.0, 2.0, 1.0],
    [1.0, 0.0, 2.0],
    [2.0, 0.0, 1.0],
    [1.0, 2.0, 0.0],
    [2.0, 1.0, 0.0],
    [0.0, 1.0, -2.0],
    [0.0, 2.0, -1.0],
    [1.0, 0.0, -2.0],
    [2.0, 0.0, -1.0],
    [1.0, -2.0, 0.0],
    [2.0, -1.0, 0.0],
    [1.0, 1.0, 2.0],
    [2.0, 1.0, 1.0],
    [1.0, 2.0, 1.0],
    [1.0, -1.0, 2.0],
    [1.0, 1.0, -2.0],
    [1.0, -1.0, -2.0],
    [2.0, -1.0, 1.0],
    [2.0, 1.0, -1.0],
    [2.0, -1.0, -1.0],
    [1.0, -2.0, 1.0],
    [1.0, 2.0, -1.0],
    [1.0, -2.0, -1.0],
    [2.0, 2.0, 1.0],
    [1.0, 2.0, 2.0],
    [2.0, 1.0, 2.0],
    [2.0, -2.0, 1.0],
    [2.0, 2.0, -1.0],
    [2.0, -2.0, -1.0],
    [1.0, -2.0, 2.0],
    [1.0, 2.0, -2.0],
    [1.0, -2.0, -2.0],
    [2.0, -1.0, 2.0],
    [2.0, 1.0, -2.0],
    [2.0, -1.0, -2.0],
];
