use std::fmt::{self, Display};

use nalgebra::Vector3;

use crate::error::LayoutError;

pub type Point = Vector3<f64>;

// Physical hub positions of the art piece. These literals must not be touched:
// the pixel layout is only valid for the frame as it was actually built.
pub const HUBS: [Point; 12] = [
    Vector3::new(-102.337, 267.923, -177.254), // 0
    Vector3::new(-102.337, 267.923, 177.254),  // 1
    Vector3::new(204.676, 267.923, 0.00),      // 2
    Vector3::new(165.586, 63.248, -286.803),   // 3
    Vector3::new(-165.586, -63.248, -286.803), // 4
    Vector3::new(-331.171, 63.249, 0.00),      // 5
    Vector3::new(-165.586, -63.248, 286.803),  // 6
    Vector3::new(165.586, 63.248, 286.803),    // 7
    Vector3::new(331.171, -63.249, 0.00),      // 8
    Vector3::new(102.337, -267.923, -177.254), // 9
    Vector3::new(-204.676, -267.923, 0.00),    // 10
    Vector3::new(102.337, -267.923, 177.254),  // 11
];

// Top cap, upper band, lower band, bottom cap
pub const FACES: [(usize, usize, usize); 20] = [
    (0, 1, 2),
    (0, 2, 3),
    (0, 3, 4),
    (0, 4, 5),
    (0, 5, 1),
    (1, 6, 7),
    (1, 2, 7),
    (2, 7, 8),
    (2, 3, 8),
    (3, 8, 9),
    (3, 4, 9),
    (4, 9, 10),
    (4, 5, 10),
    (5, 6, 10),
    (5, 6, 1),
    (6, 7, 11),
    (7, 8, 11),
    (8, 9, 11),
    (9, 10, 11),
    (10, 6, 11),
];

#[rustfmt::skip]
pub const EDGES: [(usize, usize); 30] = [
    ( 0, 1), ( 0, 2), ( 0, 3), ( 0, 4), ( 0, 5),
    ( 1, 2), ( 2, 3), ( 3, 4), ( 4, 5), ( 5, 1),
    ( 1, 6), ( 1, 7), ( 2, 7), ( 2, 8), ( 3, 8), ( 3, 9), ( 4, 9), ( 4,10), ( 5,10), ( 5, 6),
    ( 6, 7), ( 7, 8), ( 8, 9), ( 9,10), (10, 6),
    ( 6,11), ( 7,11), ( 8,11), ( 9,11), (10,11),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StripColor {
    Green,
    Purple,
    Red,
    Orange,
    Yellow,
}

impl StripColor {
    // Emission order of the strips in the exported data
    pub const ALL: [StripColor; 5] = [
        StripColor::Green,
        StripColor::Purple,
        StripColor::Red,
        StripColor::Orange,
        StripColor::Yellow,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            StripColor::Green => "green",
            StripColor::Purple => "purple",
            StripColor::Red => "red",
            StripColor::Orange => "orange",
            StripColor::Yellow => "yellow",
        }
    }
}

impl Display for StripColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One face visited by a strip. Pixels run along `edge` from its first hub to
/// its second; `opposite` closes the triangle and only moves the centroid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripStep {
    pub edge: (usize, usize),
    pub opposite: usize,
}

impl StripStep {
    pub const fn new(a: usize, b: usize, opposite: usize) -> Self {
        StripStep {
            edge: (a, b),
            opposite,
        }
    }

    pub fn triangle(&self) -> (usize, usize, usize) {
        (self.edge.0, self.edge.1, self.opposite)
    }
}

const fn step(a: usize, b: usize, opposite: usize) -> StripStep {
    StripStep::new(a, b, opposite)
}

const GREEN: [StripStep; 12] = [
    step(11, 7, 6),
    step(7, 1, 6),
    step(1, 0, 2),
    step(0, 3, 2),
    step(3, 0, 4),
    step(0, 4, 3),
    step(4, 9, 3),
    step(9, 4, 10),
    step(4, 0, 5),
    step(0, 1, 5),
    step(1, 7, 2),
    step(7, 11, 8),
];

const PURPLE: [StripStep; 12] = [
    step(11, 9, 8),
    step(9, 8, 11),
    step(8, 3, 9),
    step(3, 2, 8),
    step(2, 0, 3),
    step(0, 5, 4),
    step(5, 0, 1),
    step(0, 2, 1),
    step(2, 3, 0),
    step(3, 8, 2),
    step(8, 9, 3),
    step(9, 11, 10),
];

const RED: [StripStep; 12] = [
    step(11, 10, 9),
    step(10, 9, 11),
    step(9, 10, 4),
    step(10, 5, 6),
    step(5, 4, 10),
    step(4, 3, 9),
    step(3, 9, 4),
    step(9, 3, 8),
    step(3, 4, 0),
    step(4, 5, 0),
    step(5, 10, 4),
    step(10, 11, 6),
];

const ORANGE: [StripStep; 12] = [
    step(11, 8, 7),
    step(8, 2, 7),
    step(2, 8, 3),
    step(8, 7, 11),
    step(7, 2, 1),
    step(2, 1, 0),
    step(1, 5, 0),
    step(5, 1, 6),
    step(1, 2, 7),
    step(2, 7, 8),
    step(7, 8, 2),
    step(8, 11, 9),
];

const YELLOW: [StripStep; 12] = [
    step(11, 6, 10),
    step(6, 10, 5),
    step(10, 4, 5),
    step(4, 10, 9),
    step(10, 6, 11),
    step(6, 5, 10),
    step(5, 6, 1),
    step(6, 1, 5),
    step(1, 6, 7),
    step(6, 7, 1),
    step(7, 6, 11),
    step(6, 11, 7),
];

pub const STRIPS: [&[StripStep]; 5] = [&GREEN, &PURPLE, &RED, &ORANGE, &YELLOW];

// Edge groups per color. These are a guess made before the piece was
// available and do not match the strips above; they are kept as-is.
const GREEN_EDGES: [(usize, usize); 6] = [(0, 1), (0, 3), (0, 4), (1, 7), (7, 11), (4, 9)];
const PURPLE_EDGES: [(usize, usize); 6] = [(0, 2), (0, 5), (2, 3), (3, 8), (8, 9), (9, 11)];
const RED_EDGES: [(usize, usize); 6] = [(3, 4), (4, 5), (3, 9), (9, 10), (5, 10), (10, 11)];
const ORANGE_EDGES: [(usize, usize); 6] = [(5, 1), (1, 2), (2, 7), (2, 8), (7, 8), (8, 11)];
const YELLOW_EDGES: [(usize, usize); 6] = [(11, 6), (6, 7), (6, 10), (6, 1), (6, 5), (10, 4)];

pub fn color_edges(color: StripColor) -> &'static [(usize, usize)] {
    match color {
        StripColor::Green => &GREEN_EDGES,
        StripColor::Purple => &PURPLE_EDGES,
        StripColor::Red => &RED_EDGES,
        StripColor::Orange => &ORANGE_EDGES,
        StripColor::Yellow => &YELLOW_EDGES,
    }
}

/*
Read-only view over a set of hub, face, edge and strip tables. The pipeline only
ever sees the tables through this struct, so a corrupted copy can be fed
through the exact same code path as the real one.
*/
#[derive(Debug, Clone, Copy)]
pub struct GeometryTable<'a> {
    pub hubs: &'a [Point],
    pub faces: &'a [(usize, usize, usize)],
    pub edges: &'a [(usize, usize)],
    pub strips: [&'a [StripStep]; 5],
}

impl GeometryTable<'static> {
    pub fn icosahedron() -> Self {
        GeometryTable {
            hubs: &HUBS,
            faces: &FACES,
            edges: &EDGES,
            strips: STRIPS,
        }
    }
}

impl<'a> GeometryTable<'a> {
    pub fn strip(&self, color: StripColor) -> &'a [StripStep] {
        self.strips[color.index()]
    }

    pub fn hub(&self, index: usize) -> Option<Point> {
        self.hubs.get(index).copied()
    }

    pub fn has_edge(&self, a: usize, b: usize) -> bool {
        self.edges
            .iter()
            .any(|&(x, y)| (x, y) == (a, b) || (x, y) == (b, a))
    }

    pub fn has_face(&self, tri: (usize, usize, usize)) -> bool {
        let key = sorted(tri);
        self.faces.iter().any(|&face| sorted(face) == key)
    }

    // Checks that every index points at a hub and that every strip step walks
    // an edge of the solid across one of its faces.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let n = self.hubs.len();
        let check = |index: usize, table: &'static str| {
            if index < n {
                Ok(())
            } else {
                Err(LayoutError::HubOutOfRange {
                    table: table.into(),
                    index,
                    hubs: n,
                })
            }
        };

        for &(a, b, c) in self.faces {
            check(a, "faces")?;
            check(b, "faces")?;
            check(c, "faces")?;
        }
        for &(a, b) in self.edges {
            check(a, "edges")?;
            check(b, "edges")?;
        }

        for color in StripColor::ALL {
            for (i, step) in self.strip(color).iter().enumerate() {
                let (a, b, c) = step.triangle();
                for index in [a, b, c] {
                    if index >= n {
                        return Err(LayoutError::HubOutOfRange {
                            table: format!("{} strip step {}", color, i).into(),
                            index,
                            hubs: n,
                        });
                    }
                }
                if !self.has_edge(a, b) {
                    return Err(LayoutError::UnknownEdge {
                        color,
                        step: i,
                        edge: (a, b),
                    });
                }
                if !self.has_face(step.triangle()) {
                    return Err(LayoutError::UnknownFace {
                        color,
                        step: i,
                        triangle: step.triangle(),
                    });
                }
            }
        }

        Ok(())
    }
}

fn sorted((a, b, c): (usize, usize, usize)) -> [usize; 3] {
    let mut out = [a, b, c];
    out.sort_unstable();
    out
}
