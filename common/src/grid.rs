use std::{
    error,
    fmt::Display,
    ops::{Index, IndexMut},
};

#[derive(Debug)]
pub enum Error {
    EmptyGrid,
    InconsistentRow(usize, usize),
    InvalidChar(char),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::EmptyGrid => write!(f, "Can't build grid from empty text."),
            Error::InconsistentRow(expect_col_n, this_col_n) => write!(
                f,
                "Expect {} column(s) in each row, given {}.",
                expect_col_n, this_col_n
            ),
            Error::InvalidChar(c) => write!(f, "Invalid character({}) for grid.", c),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub r: usize,
    pub c: usize,
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.r, self.c)
    }
}

impl Position {
    pub fn new(r: usize, c: usize) -> Self {
        Self { r, c }
    }

    pub fn neighbor(&self, dir: Direction) -> Option<Self> {
        let (dr, dc) = dir.offset();
        self.offset(dr, dc)
    }

    pub fn offset(&self, dr: isize, dc: isize) -> Option<Self> {
        Some(Self::new(
            self.r.checked_add_signed(dr)?,
            self.c.checked_add_signed(dc)?,
        ))
    }

    pub fn manhattan(&self, other: &Self) -> usize {
        self.r.abs_diff(other.r) + self.c.abs_diff(other.c)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl TryFrom<char> for Direction {
    type Error = Error;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '^' | 'U' | 'N' => Ok(Direction::North),
            '>' | 'R' | 'E' => Ok(Direction::East),
            'v' | 'D' | 'S' => Ok(Direction::South),
            '<' | 'L' | 'W' => Ok(Direction::West),
            other => Err(Error::InvalidChar(other)),
        }
    }
}

impl Direction {
    pub fn all() -> [Direction; 4] {
        [
            Direction::North,
            Direction::East,
            Direction::South,
            Direction::West,
        ]
    }

    pub fn offset(&self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
        }
    }

    pub fn turn_clockwise(&self) -> Self {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    pub fn turn_counterclockwise(&self) -> Self {
        match self {
            Direction::North => Direction::West,
            Direction::East => Direction::North,
            Direction::South => Direction::East,
            Direction::West => Direction::South,
        }
    }

    pub fn reverse(&self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::North | Direction::South)
    }

    pub fn index(&self) -> usize {
        match self {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        }
    }
}

/// Row and column offsets of all eight neighbors, clockwise from north.
pub const EIGHT_OFFSETS: [(isize, isize); 8] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    cells: Vec<T>,
    row_n: usize,
    col_n: usize,
}

impl<T: Clone> Grid<T> {
    pub fn new(row_n: usize, col_n: usize, value: T) -> Self {
        Self {
            cells: vec![value; row_n * col_n],
            row_n,
            col_n,
        }
    }

    pub fn transpose(&self) -> Self {
        let mut cells = Vec::with_capacity(self.cells.len());
        for c in 0..self.col_n {
            for r in 0..self.row_n {
                cells.push(self.cells[r * self.col_n + c].clone());
            }
        }

        Self {
            cells,
            row_n: self.col_n,
            col_n: self.row_n,
        }
    }

    pub fn rotate_clockwise(&self) -> Self {
        let mut cells = Vec::with_capacity(self.cells.len());
        for c in 0..self.col_n {
            for r in (0..self.row_n).rev() {
                cells.push(self.cells[r * self.col_n + c].clone());
            }
        }

        Self {
            cells,
            row_n: self.col_n,
            col_n: self.row_n,
        }
    }
}

impl<T> Grid<T> {
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, Error> {
        let col_n = rows.first().map(|r| r.len()).ok_or(Error::EmptyGrid)?;
        let row_n = rows.len();
        let mut cells = Vec::with_capacity(row_n * col_n);
        for row in rows {
            if row.len() != col_n {
                return Err(Error::InconsistentRow(col_n, row.len()));
            }

            cells.extend(row);
        }

        Ok(Self {
            cells,
            row_n,
            col_n,
        })
    }

    pub fn parse_with<F>(text: &str, mut f: F) -> Result<Self, Error>
    where
        F: FnMut(char) -> Option<T>,
    {
        let rows = text
            .trim_end_matches(['\n', '\r'])
            .lines()
            .map(|l| {
                l.chars()
                    .map(|c| f(c).ok_or(Error::InvalidChar(c)))
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_rows(rows)
    }

    pub fn row_n(&self) -> usize {
        self.row_n
    }

    pub fn col_n(&self) -> usize {
        self.col_n
    }

    pub fn contains(&self, pos: &Position) -> bool {
        pos.r < self.row_n && pos.c < self.col_n
    }

    pub fn get(&self, pos: &Position) -> Option<&T> {
        if self.contains(pos) {
            Some(&self.cells[pos.r * self.col_n + pos.c])
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, pos: &Position) -> Option<&mut T> {
        if self.contains(pos) {
            Some(&mut self.cells[pos.r * self.col_n + pos.c])
        } else {
            None
        }
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let col_n = self.col_n;
        (0..self.row_n).flat_map(move |r| (0..col_n).map(move |c| Position::new(r, c)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Position, &T)> {
        self.positions().zip(self.cells.iter())
    }

    pub fn find<F>(&self, mut pred: F) -> Option<Position>
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().find(|(_, v)| pred(v)).map(|(pos, _)| pos)
    }

    pub fn find_all<F>(&self, mut pred: F) -> Vec<Position>
    where
        F: FnMut(&T) -> bool,
    {
        self.iter()
            .filter(|(_, v)| pred(v))
            .map(|(pos, _)| pos)
            .collect()
    }

    /// Neighbor in given direction, if it's still inside the grid.
    pub fn step(&self, pos: &Position, dir: Direction) -> Option<Position> {
        pos.neighbor(dir).filter(|p| self.contains(p))
    }

    pub fn offset(&self, pos: &Position, dr: isize, dc: isize) -> Option<Position> {
        pos.offset(dr, dc).filter(|p| self.contains(p))
    }

    pub fn neighbors(&self, pos: &Position) -> impl Iterator<Item = Position> + '_ {
        let pos = *pos;
        Direction::all()
            .into_iter()
            .filter_map(move |dir| self.step(&pos, dir))
    }

    pub fn row(&self, r: usize) -> &[T] {
        &self.cells[r * self.col_n..(r + 1) * self.col_n]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks(self.col_n.max(1))
    }

    pub fn column(&self, c: usize) -> impl Iterator<Item = &T> {
        self.cells.iter().skip(c).step_by(self.col_n.max(1))
    }

    pub fn map<U, F>(&self, f: F) -> Grid<U>
    where
        F: FnMut(&T) -> U,
    {
        Grid {
            cells: self.cells.iter().map(f).collect(),
            row_n: self.row_n,
            col_n: self.col_n,
        }
    }

    pub fn try_map<U, E, F>(&self, f: F) -> Result<Grid<U>, E>
    where
        F: FnMut(&T) -> Result<U, E>,
    {
        Ok(Grid {
            cells: self.cells.iter().map(f).collect::<Result<Vec<_>, _>>()?,
            row_n: self.row_n,
            col_n: self.col_n,
        })
    }
}

impl Grid<char> {
    pub fn parse_chars(text: &str) -> Result<Self, Error> {
        Self::parse_with(text, Some)
    }
}

impl<T> Index<Position> for Grid<T> {
    type Output = T;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[pos.r * self.col_n + pos.c]
    }
}

impl<T> IndexMut<Position> for Grid<T> {
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        &mut self.cells[pos.r * self.col_n + pos.c]
    }
}

impl<T: Display> Display for Grid<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            for cell in row {
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
