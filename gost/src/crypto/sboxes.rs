use core::fmt;
use core::str::FromStr;

use thiserror::Error;

pub const SBOX_ROWS: usize = 8;
pub const SBOX_COLUMNS: usize = 16;

/// Eight 4-bit substitution boxes; row `i` substitutes nibble `i` of the
/// round function input (nibble 0 being the least significant).
///
/// Entries are masked to 4 bits on construction. Rows are expected to be
/// permutations of `0..16` but this is not enforced, see
/// [`SBoxTable::rows_are_permutations`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SBoxTable {
    rows: [[u8; SBOX_COLUMNS]; SBOX_ROWS],
}

impl SBoxTable {
    /// GOST R 34.12-2015 (Magma), `id-tc26-gost-28147-param-Z`.
    pub const TC26_Z: SBoxTable = SBoxTable::new([
        [12, 4, 6, 2, 10, 5, 11, 9, 14, 8, 13, 7, 0, 3, 15, 1],
        [6, 8, 2, 3, 9, 10, 5, 12, 1, 14, 4, 7, 11, 13, 0, 15],
        [11, 3, 5, 8, 2, 15, 10, 13, 14, 1, 7, 4, 12, 9, 6, 0],
        [12, 8, 2, 1, 13, 4, 15, 6, 7, 0, 10, 5, 3, 14, 9, 11],
        [7, 15, 5, 10, 8, 1, 6, 13, 0, 9, 3, 14, 11, 4, 2, 12],
        [5, 13, 15, 6, 9, 2, 12, 10, 11, 7, 8, 1, 4, 3, 14, 0],
        [8, 14, 2, 5, 6, 9, 1, 12, 15, 4, 11, 0, 13, 10, 3, 7],
        [1, 7, 14, 13, 0, 5, 8, 3, 4, 15, 10, 6, 9, 12, 11, 2],
    ]);

    /// Test parameter set of GOST R 34.11-94.
    pub const GOST3411_94_TEST: SBoxTable = SBoxTable::new([
        [4, 10, 9, 2, 13, 8, 0, 14, 6, 11, 1, 12, 7, 15, 5, 3],
        [14, 11, 4, 12, 6, 13, 15, 10, 2, 3, 8, 1, 0, 7, 5, 9],
        [5, 8, 1, 13, 10, 3, 4, 2, 14, 15, 12, 7, 6, 0, 9, 11],
        [7, 13, 10, 1, 0, 8, 9, 15, 14, 4, 6, 12, 11, 2, 5, 3],
        [6, 12, 7, 1, 5, 15, 13, 8, 4, 10, 9, 14, 0, 3, 11, 2],
        [4, 11, 10, 0, 7, 2, 1, 13, 3, 6, 8, 5, 9, 12, 15, 14],
        [13, 11, 4, 1, 3, 15, 5, 9, 0, 10, 14, 7, 6, 8, 2, 12],
        [1, 15, 13, 0, 5, 7, 10, 4, 9, 2, 3, 14, 6, 11, 8, 12],
    ]);

    /// Every row maps a nibble to itself. Useless for secrecy, handy for
    /// reasoning about the rest of the round function.
    pub const IDENTITY: SBoxTable = SBoxTable::new([IDENTITY_ROW; SBOX_ROWS]);

    pub const fn new(rows: [[u8; SBOX_COLUMNS]; SBOX_ROWS]) -> Self {
        let mut rows = rows;
        let mut row = 0;
        while row < SBOX_ROWS {
            let mut column = 0;
            while column < SBOX_COLUMNS {
                rows[row][column] &= 0x0F;
                column += 1;
            }
            row += 1;
        }
        SBoxTable { rows }
    }

    pub fn rows(&self) -> &[[u8; SBOX_COLUMNS]; SBOX_ROWS] {
        &self.rows
    }

    /// Substitutes `nibble` (low 4 bits used) through row `row`.
    #[inline(always)]
    pub fn lookup(&self, row: usize, nibble: u32) -> u32 {
        u32::from(self.rows[row][(nibble & 0x0F) as usize])
    }

    pub fn rows_are_permutations(&self) -> bool {
        self.non_permutation_rows().next().is_none()
    }

    /// Indices of rows that are not a permutation of `0..16`.
    pub fn non_permutation_rows(&self) -> impl Iterator<Item = usize> + '_ {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, row)| !is_permutation(row))
            .map(|(index, _)| index)
    }
}

impl Default for SBoxTable {
    fn default() -> Self {
        SBoxTable::TC26_Z
    }
}

impl From<[[u8; SBOX_COLUMNS]; SBOX_ROWS]> for SBoxTable {
    fn from(rows: [[u8; SBOX_COLUMNS]; SBOX_ROWS]) -> Self {
        SBoxTable::new(rows)
    }
}

const IDENTITY_ROW: [u8; SBOX_COLUMNS] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15];

fn is_permutation(row: &[u8; SBOX_COLUMNS]) -> bool {
    let seen = row.iter().fold(0u16, |seen, &value| seen | 1 << value);
    seen == u16::MAX
}

/// Named S-box parameter sets, selectable from configuration text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParamSet {
    #[default]
    Tc26Z,
    Gost3411Test,
}

impl ParamSet {
    pub const ALL: [ParamSet; 2] = [ParamSet::Tc26Z, ParamSet::Gost3411Test];

    pub fn table(self) -> SBoxTable {
        match self {
            ParamSet::Tc26Z => SBoxTable::TC26_Z,
            ParamSet::Gost3411Test => SBoxTable::GOST3411_94_TEST,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ParamSet::Tc26Z => "tc26-z",
            ParamSet::Gost3411Test => "gost3411-94-test",
        }
    }
}

impl fmt::Display for ParamSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown S-box parameter set: {0:?}")]
pub struct UnknownParamSet(pub String);

impl FromStr for ParamSet {
    type Err = UnknownParamSet;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_ascii_lowercase().as_str() {
            "tc26-z" | "tc26" | "magma" => Ok(ParamSet::Tc26Z),
            "gost3411-94-test" | "test" => Ok(ParamSet::Gost3411Test),
            _ => Err(UnknownParamSet(name.to_owned())),
        }
    }
}
