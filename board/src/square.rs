use chess::{File, Rank, Square};

/// A ray direction as a (file, rank) delta.
pub type Direction = (i8, i8);

pub const ORTHOGONAL: [Direction; 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub const DIAGONAL: [Direction; 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub const ALL_DIRECTIONS: [Direction; 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// The square `steps` ray steps away from `square` along `direction`,
/// or None once the 8x8 board is left.
pub fn offset(square: Square, direction: Direction, steps: i8) -> Option<Square> {
    let (file_delta, rank_delta) = direction;
    let file = square.get_file().to_index() as i8 + file_delta * steps;
    let rank = square.get_rank().to_index() as i8 + rank_delta * steps;

    if !(0..8).contains(&file) || !(0..8).contains(&rank) {
        return None;
    }

    Some(Square::make_square(
        Rank::from_index(rank as usize),
        File::from_index(file as usize),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_within_board() {
        assert_eq!(offset(Square::E4, (1, 1), 1), Some(Square::F5));
        assert_eq!(offset(Square::E4, (0, -1), 2), Some(Square::E2));
        assert_eq!(offset(Square::E4, (-1, 0), 4), Some(Square::A4));
    }

    #[test]
    fn test_offset_leaves_board() {
        assert_eq!(offset(Square::A1, (-1, 0), 1), None);
        assert_eq!(offset(Square::A1, (0, -1), 1), None);
        assert_eq!(offset(Square::H8, (1, 0), 1), None);
        assert_eq!(offset(Square::H8, (0, 1), 1), None);
        assert_eq!(offset(Square::E4, (1, 0), 4), None);
    }

    #[test]
    fn test_direction_tables() {
        assert_eq!(ORTHOGONAL.len(), 4);
        assert_eq!(DIAGONAL.len(), 4);
        assert_eq!(ALL_DIRECTIONS.len(), 8);
        for direction in ALL_DIRECTIONS {
            assert!(ORTHOGONAL.contains(&direction) || DIAGONAL.contains(&direction));
        }
    }
}
