//! Core data model for the sliding puzzle.
//! The grid owns tile identities and positions; the view only ever reads it.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Up/down/left/right only: no diagonals, no wraparound.
    pub fn is_adjacent(self, other: Coord) -> bool {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y) == 1
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tile {
    /// 1..N²-1, assigned at creation and never changed.
    pub id: u32,
    pub current: Coord,
    /// Where the tile sits in the solved grid.
    pub home: Coord,
}

impl Tile {
    pub fn is_home(&self) -> bool {
        self.current == self.home
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Tile(Tile),
    Empty,
}

impl Cell {
    pub fn tile(&self) -> Option<&Tile> {
        match self {
            Cell::Tile(t) => Some(t),
            Cell::Empty => None,
        }
    }
}

/// Source of uniform integers for shuffling.
pub trait RandomSource {
    /// Uniform in `0..=max`.
    fn below_inclusive(&mut self, max: usize) -> usize;
}

/// Browser RNG backed by `Math.random()`.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsRandom;

impl RandomSource for JsRandom {
    fn below_inclusive(&mut self, max: usize) -> usize {
        let r = js_sys::Math::random();
        ((r * (max + 1) as f64).floor() as usize).min(max)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    length: usize,
    /// Row-major; length = length * length.
    cells: Vec<Cell>,
    /// Mirrors the single `Cell::Empty` for O(1) adjacency checks.
    empty: Coord,
}

impl Grid {
    /// Solved grid: tiles 1..N²-1 in row-major order, empty at the bottom-right.
    /// Lengths below 3 are clamped up.
    pub fn new(length: usize) -> Self {
        let length = length.max(crate::config::MIN_LENGTH);
        let mut cells = Vec::with_capacity(length * length);
        let mut counter = 1;
        for y in 0..length {
            for x in 0..length {
                if x == length - 1 && y == length - 1 {
                    cells.push(Cell::Empty);
                    continue;
                }
                let at = Coord::new(x, y);
                cells.push(Cell::Tile(Tile {
                    id: counter,
                    current: at,
                    home: at,
                }));
                counter += 1;
            }
        }
        Self {
            length,
            cells,
            empty: Coord::new(length - 1, length - 1),
        }
    }

    /// Builds a grid from row-major tile ids, `0` marking the empty cell.
    /// Each tile's home is derived from its id. Returns `None` unless `ids` is a
    /// permutation of `0..N²` for some N >= 3.
    pub fn from_ids(length: usize, ids: &[u32]) -> Option<Self> {
        if length < crate::config::MIN_LENGTH || ids.len() != length * length {
            return None;
        }
        let mut seen = vec![false; ids.len()];
        for &id in ids {
            let slot = seen.get_mut(id as usize)?;
            if *slot {
                return None;
            }
            *slot = true;
        }
        let mut empty = Coord::new(0, 0);
        let cells = ids
            .iter()
            .enumerate()
            .map(|(i, &id)| {
                let current = Coord::new(i % length, i / length);
                if id == 0 {
                    empty = current;
                    Cell::Empty
                } else {
                    let h = (id - 1) as usize;
                    Cell::Tile(Tile {
                        id,
                        current,
                        home: Coord::new(h % length, h / length),
                    })
                }
            })
            .collect();
        Some(Self {
            length,
            cells,
            empty,
        })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn empty(&self) -> Coord {
        self.empty
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn contains(&self, at: Coord) -> bool {
        at.x < self.length && at.y < self.length
    }

    pub fn cell(&self, at: Coord) -> Option<&Cell> {
        if !self.contains(at) {
            return None;
        }
        self.cells.get(self.idx(at))
    }

    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.cells.iter().filter_map(Cell::tile)
    }

    /// Row-major ids with `0` for the empty cell.
    pub fn ids(&self) -> Vec<u32> {
        self.cells
            .iter()
            .map(|c| c.tile().map_or(0, |t| t.id))
            .collect()
    }

    fn idx(&self, at: Coord) -> usize {
        at.y * self.length + at.x
    }

    /// Exchanges two cells, keeping each tile's `current` and the tracked empty
    /// coordinate in step with the cell vector.
    fn swap(&mut self, a: Coord, b: Coord) {
        if a == b || !self.contains(a) || !self.contains(b) {
            return;
        }
        let (ia, ib) = (self.idx(a), self.idx(b));
        self.cells.swap(ia, ib);
        for (at, i) in [(a, ia), (b, ib)] {
            match &mut self.cells[i] {
                Cell::Tile(t) => t.current = at,
                Cell::Empty => self.empty = at,
            }
        }
    }

    /// Slides the tile at `from` into the empty cell if they are neighbours.
    /// Returns whether anything moved; a non-adjacent click is a no-op.
    pub fn slide(&mut self, from: Coord) -> bool {
        if !self.contains(from) || !from.is_adjacent(self.empty) {
            return false;
        }
        self.swap(from, self.empty);
        true
    }

    /// 2D Fisher-Yates-style shuffle followed by the solvability fix-up.
    /// Cells are visited bottom-right to top-left; each swaps with a random cell
    /// in the row-major prefix ending at it. Expects the empty cell at the
    /// bottom-right, after every prefix, so it never moves.
    pub fn shuffle<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        let n = self.length;
        for y in (0..n).rev() {
            for x in (0..n).rev() {
                let at = Coord::new(x, y);
                if at == self.empty {
                    continue;
                }
                let target = self.random_coord(at, rng);
                debug_assert_ne!(target, self.empty);
                self.swap(at, target);
            }
        }
        self.make_solvable();
    }

    fn random_coord<R: RandomSource + ?Sized>(&self, limit: Coord, rng: &mut R) -> Coord {
        let y = rng.below_inclusive(limit.y);
        let x_limit = if y == limit.y { limit.x } else { self.length - 1 };
        let x = rng.below_inclusive(x_limit);
        Coord::new(x, y)
    }

    /// Pairs (i, j), i < j in row-major order, whose tile ids are out of order.
    /// The empty cell is skipped.
    pub fn inversions(&self) -> usize {
        let ids: Vec<u32> = self.tiles().map(|t| t.id).collect();
        let mut count = 0;
        for (i, &a) in ids.iter().enumerate() {
            count += ids[i + 1..].iter().filter(|&&b| a > b).count();
        }
        count
    }

    /// Classical criterion. Odd width: inversions even. Even width: inversions
    /// plus the empty row counted from the bottom (1-based) must be odd.
    pub fn is_solvable(&self) -> bool {
        let inversions = self.inversions();
        if self.length % 2 == 1 {
            inversions % 2 == 0
        } else {
            let row_from_bottom = self.length - self.empty.y;
            (inversions + row_from_bottom) % 2 == 1
        }
    }

    /// Swaps the first two tiles (row-major) when the grid is unsolvable, which
    /// flips inversion parity without moving the empty cell.
    /// Returns whether a swap was needed.
    pub fn make_solvable(&mut self) -> bool {
        if self.is_solvable() {
            return false;
        }
        let firsts: Vec<Coord> = self.tiles().take(2).map(|t| t.current).collect();
        if let [a, b] = firsts[..] {
            self.swap(a, b);
            return true;
        }
        false
    }

    pub fn is_solved(&self) -> bool {
        self.tiles().all(Tile::is_home)
    }
}
