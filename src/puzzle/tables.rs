//! Permutation tables, one row per move in [`Move::ALL`] order. Each row is
//! laid out in face blocks: front, back, up, down, left, right.

use super::moves::Move;

#[rustfmt::skip]
pub(super) const CUBE2: [[u8; 24]; Move::COUNT] = [
    // FR
    [
        2, 0, 3, 1,
        4, 5, 6, 7,
        8, 9, 17, 19,
        20, 22, 14, 15,
        16, 12, 18, 13,
        10, 21, 11, 23,
    ],
    // LD
    [
        8, 1, 10, 3,
        12, 5, 14, 7,
        4, 9, 6, 11,
        0, 13, 2, 15,
        18, 16, 19, 17,
        20, 21, 22, 23,
    ],
    // RU
    [
        0, 13, 2, 15,
        4, 9, 6, 11,
        8, 1, 10, 3,
        12, 5, 14, 7,
        16, 17, 18, 19,
        22, 20, 23, 21,
    ],
    // UL
    [
        20, 21, 2, 3,
        16, 17, 6, 7,
        10, 8, 11, 9,
        12, 13, 14, 15,
        0, 1, 18, 19,
        4, 5, 22, 23,
    ],
    // DR
    [
        0, 1, 18, 19,
        4, 5, 22, 23,
        8, 9, 10, 11,
        14, 12, 15, 13,
        16, 17, 6, 7,
        20, 21, 2, 3,
    ],
    // FL
    [
        1, 3, 0, 2,
        4, 5, 6, 7,
        8, 9, 20, 22,
        17, 19, 14, 15,
        16, 10, 18, 11,
        12, 21, 13, 23,
    ],
    // LU
    [
        12, 1, 14, 3,
        8, 5, 10, 7,
        0, 9, 2, 11,
        4, 13, 6, 15,
        17, 19, 16, 18,
        20, 21, 22, 23,
    ],
    // RD
    [
        0, 9, 2, 11,
        4, 13, 6, 15,
        8, 5, 10, 7,
        12, 1, 14, 3,
        16, 17, 18, 19,
        21, 23, 20, 22,
    ],
    // UR
    [
        16, 17, 2, 3,
        20, 21, 6, 7,
        9, 11, 8, 10,
        12, 13, 14, 15,
        4, 5, 18, 19,
        0, 1, 22, 23,
    ],
    // DL
    [
        0, 1, 22, 23,
        4, 5, 18, 19,
        8, 9, 10, 11,
        13, 15, 12, 14,
        16, 17, 2, 3,
        20, 21, 6, 7,
    ],
];

#[rustfmt::skip]
pub(super) const CUBE3: [[u8; 54]; Move::COUNT] = [
    // FR
    [
        6, 3, 0, 7, 4, 1, 8, 5, 2,
        9, 10, 11, 12, 13, 14, 15, 16, 17,
        18, 19, 20, 21, 22, 23, 44, 41, 38,
        51, 48, 45, 30, 31, 32, 33, 34, 35,
        36, 37, 27, 39, 40, 28, 42, 43, 29,
        24, 46, 47, 25, 49, 50, 26, 52, 53,
    ],
    // LD
    [
        18, 1, 2, 21, 4, 5, 24, 7, 8,
        9, 10, 33, 12, 13, 30, 15, 16, 27,
        17, 19, 20, 14, 22, 23, 11, 25, 26,
        0, 28, 29, 3, 31, 32, 6, 34, 35,
        42, 39, 36, 43, 40, 37, 44, 41, 38,
        45, 46, 47, 48, 49, 50, 51, 52, 53,
    ],
    // RU
    [
        0, 1, 29, 3, 4, 32, 6, 7, 35,
        26, 10, 11, 23, 13, 14, 20, 16, 17,
        18, 19, 2, 21, 22, 5, 24, 25, 8,
        27, 28, 15, 30, 31, 12, 33, 34, 9,
        36, 37, 38, 39, 40, 41, 42, 43, 44,
        51, 48, 45, 52, 49, 46, 53, 50, 47,
    ],
    // UL
    [
        45, 46, 47, 3, 4, 5, 6, 7, 8,
        36, 37, 38, 12, 13, 14, 15, 16, 17,
        24, 21, 18, 25, 22, 19, 26, 23, 20,
        27, 28, 29, 30, 31, 32, 33, 34, 35,
        0, 1, 2, 39, 40, 41, 42, 43, 44,
        9, 10, 11, 48, 49, 50, 51, 52, 53,
    ],
    // DR
    [
        0, 1, 2, 3, 4, 5, 42, 43, 44,
        9, 10, 11, 12, 13, 14, 51, 52, 53,
        18, 19, 20, 21, 22, 23, 24, 25, 26,
        33, 30, 27, 34, 31, 28, 35, 32, 29,
        36, 37, 38, 39, 40, 41, 15, 16, 17,
        45, 46, 47, 48, 49, 50, 6, 7, 8,
    ],
    // FL
    [
        2, 5, 8, 1, 4, 7, 0, 3, 6,
        9, 10, 11, 12, 13, 14, 15, 16, 17,
        18, 19, 20, 21, 22, 23, 45, 48, 51,
        38, 41, 44, 30, 31, 32, 33, 34, 35,
        36, 37, 26, 39, 40, 25, 42, 43, 24,
        29, 46, 47, 28, 49, 50, 27, 52, 53,
    ],
    // LU
    [
        27, 1, 2, 30, 4, 5, 33, 7, 8,
        9, 10, 24, 12, 13, 21, 15, 16, 18,
        0, 19, 20, 3, 22, 23, 6, 25, 26,
        17, 28, 29, 14, 31, 32, 11, 34, 35,
        38, 41, 44, 37, 40, 43, 36, 39, 42,
        45, 46, 47, 48, 49, 50, 51, 52, 53,
    ],
    // RD
    [
        0, 1, 20, 3, 4, 23, 6, 7, 26,
        35, 10, 11, 32, 13, 14, 29, 16, 17,
        18, 19, 15, 21, 22, 12, 24, 25, 9,
        27, 28, 2, 30, 31, 5, 33, 34, 8,
        36, 37, 38, 39, 40, 41, 42, 43, 44,
        47, 50, 53, 46, 49, 52, 45, 48, 51,
    ],
    // UR
    [
        36, 37, 38, 3, 4, 5, 6, 7, 8,
        45, 46, 47, 12, 13, 14, 15, 16, 17,
        20, 23, 26, 19, 22, 25, 18, 21, 24,
        27, 28, 29, 30, 31, 32, 33, 34, 35,
        9, 10, 11, 39, 40, 41, 42, 43, 44,
        0, 1, 2, 48, 49, 50, 51, 52, 53,
    ],
    // DL
    [
        0, 1, 2, 3, 4, 5, 51, 52, 53,
        9, 10, 11, 12, 13, 14, 42, 43, 44,
        18, 19, 20, 21, 22, 23, 24, 25, 26,
        29, 32, 35, 28, 31, 34, 27, 30, 33,
        36, 37, 38, 39, 40, 41, 6, 7, 8,
        45, 46, 47, 48, 49, 50, 15, 16, 17,
    ],
];
