//! Figures module - the fixed ten-variant figure catalog.
//!
//! There is no rotation: every orientation is its own variant with its own
//! offset table. Shapes are written in doubled-x space, so a "logical" column
//! is two consecutive x offsets and horizontal figure extents are twice their
//! logical width. The four triangle orientations are kept as literal
//! per-branch tables; they are not exact 90-degree rotations of one another.

use crate::core::rng::SimpleRng;
use crate::types::{Coord, Direction, FigureCells, FIGURE_COLOR_COUNT};

/// Figure variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FigureKind {
    SmallLineHorizontal,
    SmallLineVertical,
    LongLineHorizontal,
    LongLineVertical,
    Square,
    Dot,
    TriangleUp,
    TriangleDown,
    TriangleLeft,
    TriangleRight,
}

impl FigureKind {
    pub const ALL: [FigureKind; 10] = [
        FigureKind::SmallLineHorizontal,
        FigureKind::SmallLineVertical,
        FigureKind::LongLineHorizontal,
        FigureKind::LongLineVertical,
        FigureKind::Square,
        FigureKind::Dot,
        FigureKind::TriangleUp,
        FigureKind::TriangleDown,
        FigureKind::TriangleLeft,
        FigureKind::TriangleRight,
    ];

    /// Occupied cells for this variant at the given anchor.
    pub fn cells(self, anchor: Coord) -> FigureCells {
        let (x, y) = anchor;
        let mut out = FigureCells::new();
        match self {
            FigureKind::SmallLineHorizontal => {
                for i in 0..4i16 {
                    out.push((x + i, y));
                }
            }
            FigureKind::SmallLineVertical => {
                for i in 0..2i16 {
                    for j in 0..2i16 {
                        out.push((x + i, y + j));
                    }
                }
            }
            FigureKind::LongLineHorizontal => {
                for i in 0..8i16 {
                    out.push((x + i, y));
                }
            }
            FigureKind::LongLineVertical => {
                for i in 0..2i16 {
                    for j in 0..4i16 {
                        out.push((x + i, y - j));
                    }
                }
            }
            FigureKind::Square => {
                for i in 0..4i16 {
                    for j in 0..2i16 {
                        out.push((x + i, y + j));
                    }
                }
            }
            FigureKind::Dot => {
                out.push((x, y));
                out.push((x + 1, y));
            }
            FigureKind::TriangleUp | FigureKind::TriangleDown => {
                let up = self == FigureKind::TriangleUp;
                for i in 0..6i16 {
                    if i == 2 || i == 3 {
                        out.push((x + i, if up { y - 1 } else { y }));
                    }
                    out.push((x + i, if up { y } else { y - 1 }));
                }
            }
            FigureKind::TriangleLeft | FigureKind::TriangleRight => {
                let left = self == FigureKind::TriangleLeft;
                for i in 0..3i16 {
                    if i == 1 {
                        if left {
                            out.push((x - 1, y - i));
                            out.push((x - 2, y - i));
                        } else {
                            out.push((x + 2, y - i));
                            out.push((x + 3, y - i));
                        }
                    }
                    out.push((x, y - i));
                    out.push((x + 1, y - i));
                }
            }
        }
        out
    }

    /// Half-open range of logical anchor columns that keeps the whole shape
    /// inside the interior. Long lines are four logical columns wide and the
    /// vertical triangles reach up to two physical cells left of their
    /// anchor, hence the narrower bounds.
    fn anchor_columns(self, field_width: u16) -> (i16, i16) {
        let w = field_width as i16;
        match self {
            FigureKind::LongLineHorizontal | FigureKind::LongLineVertical => (1, w - 2),
            FigureKind::TriangleLeft | FigureKind::TriangleRight => (2, w - 1),
            _ => (1, w - 1),
        }
    }
}

/// Pick a random variant, anchor and color; spawn anchored at the top
/// interior row. Up-growing variants overlap the ceiling (`y <= 0`), and the
/// down-extending ones reach at most row 2.
pub fn spawn_figure(rng: &mut SimpleRng, field_width: u16) -> (FigureCells, u8) {
    let kind = FigureKind::ALL[rng.next_range(FigureKind::ALL.len() as u32) as usize];
    let (lo, hi) = kind.anchor_columns(field_width);
    let anchor_x = rng.next_in(lo, hi) * 2;
    let color = rng.next_range(FIGURE_COLOR_COUNT) as u8;
    (kind.cells((anchor_x, 1)), color)
}

/// Translate every cell one step in the given direction.
pub fn shifted(cells: &FigureCells, direction: Direction) -> FigureCells {
    let (dx, dy) = direction.offset();
    cells.iter().map(|&(x, y)| (x + dx, y + dy)).collect()
}
