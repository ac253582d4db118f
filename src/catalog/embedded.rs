//! Built-in levels
//!
//! Compiled into the binary; used when no catalog file is given.

/// Tiles shared by every built-in level
pub const DEFAULT_LETTERS: &[char] = &['I', 'G', 'H', 'N', 'S', 'T', 'W'];

/// Target words per built-in level, three of each length 3, 4 and 5
pub const DEFAULT_LEVELS: &[&[&str]] = &[
    &[
        "WIG", "HIT", "SIT", "TWIG", "THIN", "WING", "NIGHT", "THING", "STING",
    ],
    &[
        "TIN", "WIN", "SIN", "HINT", "WINS", "SIGN", "SWING", "WHIST", "SIGHT",
    ],
];
