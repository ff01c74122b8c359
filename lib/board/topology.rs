use crate::board::{Coordinate, Label};
use std::{collections::HashMap, num::NonZeroU8};

/// The mapping between [`Label`]s and [`Coordinate`]s of a rectangular board.
///
/// Columns are named by letters from the left, `a`, `b`, ..., `z`, `aa`, `ab`, ..., and rows are
/// numbered from the bottom, so that the top-left square of a 4x4 board is `a4`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Topology {
    rows: NonZeroU8,
    cols: NonZeroU8,
    square_size: u16,
    labels: Vec<Label>,
    coordinates: HashMap<Label, Coordinate>,
}

/// Names a column, counting from zero.
fn column_name(mut col: usize) -> String {
    let mut name = Vec::new();

    loop {
        name.push(b'a' + (col % 26) as u8);
        match col / 26 {
            0 => break,
            n => col = n - 1,
        }
    }

    name.iter().rev().map(|&b| b as char).collect()
}

impl Topology {
    /// Constructs the [`Topology`] of a board with the given dimensions.
    ///
    /// The square size is a rendering hint in pixels and carries no meaning otherwise.
    pub fn new(rows: NonZeroU8, cols: NonZeroU8, square_size: u16) -> Self {
        let (r, c) = (rows.get() as usize, cols.get() as usize);
        let mut labels = Vec::with_capacity(r * c);
        let mut coordinates = HashMap::with_capacity(r * c);

        for row in 0..r {
            for col in 0..c {
                let label = Label::new(format!("{}{}", column_name(col), r - row));
                coordinates.insert(label.clone(), Coordinate::new(row as i16, col as i16));
                labels.push(label);
            }
        }

        Topology {
            rows,
            cols,
            square_size,
            labels,
            coordinates,
        }
    }

    /// The number of rows.
    #[inline(always)]
    pub fn rows(&self) -> u8 {
        self.rows.get()
    }

    /// The number of columns.
    #[inline(always)]
    pub fn cols(&self) -> u8 {
        self.cols.get()
    }

    /// The preferred size of a square in pixels.
    #[inline(always)]
    pub fn square_size(&self) -> u16 {
        self.square_size
    }

    /// The number of squares.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the board has no squares, which is never the case.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// The [`Coordinate`] of a square, if the label names one.
    #[inline(always)]
    pub fn coordinate_of(&self, label: &str) -> Option<Coordinate> {
        self.coordinates.get(label).copied()
    }

    /// The [`Label`] of the square at a [`Coordinate`], if it is on the board.
    #[inline(always)]
    pub fn label_of(&self, c: Coordinate) -> Option<&Label> {
        if self.contains(c) {
            self.labels
                .get(c.row as usize * self.cols() as usize + c.col as usize)
        } else {
            None
        }
    }

    /// Every [`Label`] on the board, row by row from the top-left corner.
    #[inline(always)]
    pub fn labels(&self) -> impl ExactSizeIterator<Item = &Label> + '_ {
        self.labels.iter()
    }

    /// Whether a [`Coordinate`] lies within the board.
    #[inline(always)]
    pub fn contains(&self, c: Coordinate) -> bool {
        (0..self.rows() as i16).contains(&c.row) && (0..self.cols() as i16).contains(&c.col)
    }

    /// Whether a label names a square on this board.
    #[inline(always)]
    pub fn has(&self, label: &str) -> bool {
        self.coordinates.contains_key(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use test_strategy::proptest;

    fn topology(rows: u8, cols: u8) -> Topology {
        Topology::new(
            NonZeroU8::new(rows).unwrap(),
            NonZeroU8::new(cols).unwrap(),
            100,
        )
    }

    #[test]
    fn columns_are_named_like_spreadsheet_columns() {
        assert_eq!(column_name(0), "a");
        assert_eq!(column_name(25), "z");
        assert_eq!(column_name(26), "aa");
        assert_eq!(column_name(27), "ab");
        assert_eq!(column_name(26 * 27), "aaa");
    }

    #[test]
    fn top_left_square_is_named_after_the_number_of_rows() {
        let t = topology(4, 4);
        assert_eq!(t.label_of(Coordinate::new(0, 0)).map(Label::as_str), Some("a4"));
        assert_eq!(t.label_of(Coordinate::new(3, 0)).map(Label::as_str), Some("a1"));
        assert_eq!(t.label_of(Coordinate::new(3, 3)).map(Label::as_str), Some("d1"));
        assert_eq!(t.coordinate_of("b2"), Some(Coordinate::new(2, 1)));
    }

    #[proptest]
    fn labels_and_coordinates_are_in_bijection(
        #[strategy(1u8..=30)] rows: u8,
        #[strategy(1u8..=30)] cols: u8,
    ) {
        let t = topology(rows, cols);
        assert_eq!(t.len(), rows as usize * cols as usize);
        assert_eq!(t.labels().collect::<HashSet<_>>().len(), t.len());

        for l in t.labels() {
            let c = t.coordinate_of(l).unwrap();
            assert!(t.contains(c));
            assert_eq!(t.label_of(c), Some(l));
        }
    }

    #[proptest]
    fn labels_are_ordered_row_by_row(#[strategy(1u8..=12)] rows: u8, #[strategy(1u8..=12)] cols: u8) {
        let t = topology(rows, cols);
        let coordinates: Vec<_> = t.labels().map(|l| t.coordinate_of(l).unwrap()).collect();
        let mut sorted = coordinates.clone();
        sorted.sort();
        assert_eq!(coordinates, sorted);
    }

    #[proptest]
    fn coordinates_outside_the_board_have_no_label(
        #[strategy(1u8..=8)] rows: u8,
        #[strategy(1u8..=8)] cols: u8,
        #[strategy(-16i16..16)] row: i16,
        #[strategy(-16i16..16)] col: i16,
    ) {
        let t = topology(rows, cols);
        let c = Coordinate::new(row, col);
        assert_eq!(t.contains(c), t.label_of(c).is_some());
    }

    #[test]
    fn unknown_labels_have_no_coordinate() {
        let t = topology(4, 4);
        assert_eq!(t.coordinate_of("z9"), None);
        assert_eq!(t.coordinate_of("e1"), None);
        assert_eq!(t.coordinate_of("a5"), None);
        assert!(!t.has(""));
    }
}
