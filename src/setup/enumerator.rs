//! Enumeration of every distinct back-rank arrangement of the setup multiset.
//!
//! The table is built once per enumerator on first use and reused for the
//! process lifetime. Entries are sorted by FEN letter so a given selection
//! index always resolves to the same arrangement across runs.

use std::sync::OnceLock;

use crate::setup::chess_rules::{RANK_WIDTH, SETUP_PIECES};
use crate::setup::chess_types::{BackRank, PieceKind, ALL_PIECE_KINDS, PIECE_KIND_COUNT};
use crate::setup::setup_errors::SetupError;

/// Lazily built, per-instance table of distinct back-rank arrangements.
///
/// Independent instances own independent tables; a host that wants one
/// process-wide table can keep a single enumerator in a `static`. First use
/// from concurrent threads builds the table exactly once.
#[derive(Debug, Default)]
pub struct SetupEnumerator {
    table: OnceLock<Vec<BackRank>>,
}

impl SetupEnumerator {
    pub const fn new() -> Self {
        Self {
            table: OnceLock::new(),
        }
    }

    /// The full arrangement table, built on first call.
    pub fn table(&self) -> &[BackRank] {
        self.table.get_or_init(|| enumerate_back_ranks(&SETUP_PIECES))
    }

    /// Number of distinct arrangements.
    #[inline]
    pub fn len(&self) -> usize {
        self.table().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.table().is_empty()
    }

    /// One-based lookup into the arrangement table.
    pub fn back_rank(&self, selection: usize) -> Result<BackRank, SetupError> {
        let table = self.table();
        if selection < 1 || selection > table.len() {
            return Err(SetupError::SelectionOutOfRange {
                selection,
                table_len: table.len(),
            });
        }
        Ok(table[selection - 1])
    }

    /// Reverse lookup: the one-based selection that produces `rank`.
    pub fn selection_of(&self, rank: &BackRank) -> Option<usize> {
        self.table()
            .binary_search_by(|entry| rank_letters(entry).cmp(&rank_letters(rank)))
            .ok()
            .map(|slot| slot + 1)
    }
}

/// Generate every distinct rearrangement of `pieces`, sorted by FEN letter.
///
/// Placement walks the rank left to right, drawing from a remaining-count
/// pool per kind; the two identical pawns share one pool entry, so the same
/// arrangement can never be produced twice. Each completed rank is copied
/// into the output, and the final sort fixes the canonical selection order.
fn enumerate_back_ranks(pieces: &[PieceKind; RANK_WIDTH]) -> Vec<BackRank> {
    let mut remaining = [0u8; PIECE_KIND_COUNT];
    for piece in pieces {
        remaining[piece.index()] += 1;
    }

    let mut out = Vec::new();
    let mut rank = [PieceKind::Pawn; RANK_WIDTH];
    place_next_file(0, &mut remaining, &mut rank, &mut out);

    out.sort_by(|a, b| rank_letters(a).cmp(&rank_letters(b)));
    out
}

fn place_next_file(
    file: usize,
    remaining: &mut [u8; PIECE_KIND_COUNT],
    rank: &mut BackRank,
    out: &mut Vec<BackRank>,
) {
    if file == RANK_WIDTH {
        out.push(*rank);
        return;
    }

    for kind in ALL_PIECE_KINDS {
        if remaining[kind.index()] == 0 {
            continue;
        }
        remaining[kind.index()] -= 1;
        rank[file] = kind;
        place_next_file(file + 1, remaining, rank, out);
        remaining[kind.index()] += 1;
    }
}

/// Ordering key: the rank as FEN letters. Case never affects the order
/// because both sides draw from the same kind sequence.
fn rank_letters(rank: &BackRank) -> [u8; RANK_WIDTH] {
    let mut letters = [0u8; RANK_WIDTH];
    for (slot, piece) in letters.iter_mut().zip(rank.iter()) {
        *slot = piece.fen_letter() as u8;
    }
    letters
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{rank_letters, SetupEnumerator};
    use crate::setup::chess_rules::SETUP_PIECES;
    use crate::setup::chess_types::{PieceKind, PIECE_KIND_COUNT};
    use crate::setup::setup_errors::SetupError;

    #[test]
    fn table_has_360_distinct_entries() {
        let enumerator = SetupEnumerator::new();
        assert_eq!(enumerator.len(), 360);

        let unique: HashSet<[u8; 6]> = enumerator.table().iter().map(rank_letters).collect();
        assert_eq!(unique.len(), 360);
    }

    #[test]
    fn every_entry_rearranges_the_setup_multiset() {
        let enumerator = SetupEnumerator::new();

        let mut expected = [0u8; PIECE_KIND_COUNT];
        for piece in &SETUP_PIECES {
            expected[piece.index()] += 1;
        }

        for entry in enumerator.table() {
            let mut found = [0u8; PIECE_KIND_COUNT];
            for piece in entry {
                found[piece.index()] += 1;
            }
            assert_eq!(found, expected);
        }
    }

    #[test]
    fn table_is_sorted_with_known_extremes() {
        let enumerator = SetupEnumerator::new();
        let table = enumerator.table();

        for pair in table.windows(2) {
            assert!(rank_letters(&pair[0]) < rank_letters(&pair[1]));
        }

        assert_eq!(&rank_letters(&table[0]), b"bknppr");
        assert_eq!(&rank_letters(&table[table.len() - 1]), b"rppnkb");
    }

    #[test]
    fn repeated_lookup_is_stable() {
        let enumerator = SetupEnumerator::new();
        let first = enumerator.back_rank(17).expect("selection 17 should resolve");
        let second = enumerator.back_rank(17).expect("selection 17 should resolve");
        assert_eq!(first, second);
    }

    #[test]
    fn independent_enumerators_agree_entry_for_entry() {
        let a = SetupEnumerator::new();
        let b = SetupEnumerator::new();
        assert_eq!(a.table(), b.table());
    }

    #[test]
    fn concurrent_first_use_builds_one_table() {
        let enumerator = SetupEnumerator::new();

        std::thread::scope(|scope| {
            let first = scope.spawn(|| enumerator.table().as_ptr() as usize);
            let second = scope.spawn(|| enumerator.table().as_ptr() as usize);
            assert_eq!(
                first.join().expect("first thread should finish"),
                second.join().expect("second thread should finish")
            );
        });
    }

    #[test]
    fn selection_out_of_range_is_rejected() {
        let enumerator = SetupEnumerator::new();

        assert_eq!(
            enumerator.back_rank(0),
            Err(SetupError::SelectionOutOfRange {
                selection: 0,
                table_len: 360,
            })
        );
        assert_eq!(
            enumerator.back_rank(361),
            Err(SetupError::SelectionOutOfRange {
                selection: 361,
                table_len: 360,
            })
        );

        assert!(enumerator.back_rank(1).is_ok());
        assert!(enumerator.back_rank(360).is_ok());
    }

    #[test]
    fn selection_of_recovers_the_index() {
        let enumerator = SetupEnumerator::new();

        for selection in [1, 17, 200, 360] {
            let rank = enumerator
                .back_rank(selection)
                .expect("selection should resolve");
            assert_eq!(enumerator.selection_of(&rank), Some(selection));
        }

        let absent = [PieceKind::King; 6];
        assert_eq!(enumerator.selection_of(&absent), None);
    }
}
