// Grid coordinate -> pixel geometry for the board view.
use crate::model::{Coord, Tile};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardLayout {
    pub board_px: f64,
    pub length: usize,
}

impl BoardLayout {
    pub fn new(board_px: f64, length: usize) -> Self {
        Self {
            board_px,
            length: length.max(1),
        }
    }

    pub fn tile_px(&self) -> f64 {
        self.board_px / self.length as f64
    }

    /// Top-left corner of a cell as (left, top).
    pub fn offset(&self, at: Coord) -> (f64, f64) {
        let t = self.tile_px();
        (at.x as f64 * t, at.y as f64 * t)
    }

    pub fn board_style(&self) -> String {
        format!(
            "position:relative; width:{0}px; height:{0}px; background:#0e1116; border:1px solid #30363d; border-radius:6px; overflow:hidden;",
            self.board_px
        )
    }

    /// Positions the tile at its current cell and slices the shared image at
    /// its home cell.
    pub fn tile_style(&self, tile: &Tile, image_url: &str) -> String {
        let t = self.tile_px();
        let (left, top) = self.offset(tile.current);
        let (bg_x, bg_y) = self.offset(tile.home);
        format!(
            "position:absolute; box-sizing:border-box; width:{t}px; height:{t}px; left:{left}px; top:{top}px; \
             background-image:url('{image_url}'); background-size:{b}px {b}px; background-position:{x}px {y}px; \
             border:1px solid #0e1116; cursor:pointer; transition:left 120ms ease, top 120ms ease;",
            b = self.board_px,
            x = 0.0 - bg_x,
            y = 0.0 - bg_y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_scale_with_tile_size() {
        let layout = BoardLayout::new(450.0, 3);
        assert_eq!(layout.tile_px(), 150.0);
        assert_eq!(layout.offset(Coord::new(0, 0)), (0.0, 0.0));
        assert_eq!(layout.offset(Coord::new(2, 1)), (300.0, 150.0));
    }

    #[test]
    fn tile_style_uses_current_for_position_and_home_for_image() {
        let layout = BoardLayout::new(400.0, 4);
        let tile = Tile {
            id: 6,
            current: Coord::new(3, 0),
            home: Coord::new(1, 1),
        };
        let style = layout.tile_style(&tile, "img.png");
        assert!(style.contains("left:300px; top:0px;"), "{style}");
        assert!(style.contains("background-position:-100px -100px;"), "{style}");
        assert!(style.contains("url('img.png')"));
    }
}
