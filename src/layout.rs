use std::ops::Range;

use tracing::{debug, info};

use crate::{
    error::LayoutError,
    helper::{lerp, scale_by, SHRINK_FACTOR},
    icosahedron::{GeometryTable, Point, StripColor, StripStep},
};

// LEDs placed along each shrunk edge. The edge is split into PIXELS_PER_STEP + 1
// equal segments and neither end gets a pixel.
pub const PIXELS_PER_STEP: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    pub shrink_factor: f64,
    pub pixels_per_step: usize,
}

impl Default for LayoutParams {
    fn default() -> Self {
        LayoutParams {
            shrink_factor: SHRINK_FACTOR,
            pixels_per_step: PIXELS_PER_STEP,
        }
    }
}

impl LayoutParams {
    pub fn divisions(&self) -> f64 {
        (self.pixels_per_step + 1) as f64
    }
}

fn lookup_hub(
    table: &GeometryTable,
    color: StripColor,
    step: usize,
    index: usize,
) -> Result<Point, LayoutError> {
    table.hub(index).ok_or_else(|| LayoutError::HubOutOfRange {
        table: format!("{} strip step {}", color, step).into(),
        index,
        hubs: table.hubs.len(),
    })
}

// Appends the pixels for one face to `out`, running from the first hub of the
// step's edge toward the second.
fn push_step_pixels(
    out: &mut Vec<Point>,
    table: &GeometryTable,
    params: &LayoutParams,
    color: StripColor,
    i: usize,
    step: &StripStep,
) -> Result<(), LayoutError> {
    let (a, b, c) = step.triangle();
    let va = lookup_hub(table, color, i, a)?;
    let vb = lookup_hub(table, color, i, b)?;
    let vc = lookup_hub(table, color, i, c)?;

    let (va, vb, _) = scale_by(&va, &vb, &vc, params.shrink_factor);
    let n = params.divisions();
    for k in 1..=params.pixels_per_step {
        out.push(lerp(&va, &vb, k as f64 / n));
    }
    Ok(())
}

pub fn assemble_strip(
    table: &GeometryTable,
    params: &LayoutParams,
    color: StripColor,
) -> Result<Vec<Point>, LayoutError> {
    let steps = table.strip(color);
    let mut out = Vec::with_capacity(steps.len() * params.pixels_per_step);
    for (i, step) in steps.iter().enumerate() {
        push_step_pixels(&mut out, table, params, color, i, step)?;
    }
    debug!(%color, steps = steps.len(), pixels = out.len(), "assembled strip");
    Ok(out)
}

pub fn assemble(table: &GeometryTable, params: &LayoutParams) -> Result<PixelLayout, LayoutError> {
    let mut strips = Vec::with_capacity(StripColor::ALL.len());
    for color in StripColor::ALL {
        strips.push(assemble_strip(table, params, color)?);
    }
    let layout = PixelLayout::new(strips);
    info!(
        num_pixels = layout.num_pixels(),
        num_strips = layout.num_strips(),
        "pixel layout ready"
    );
    Ok(layout)
}

/*
The full set of pixel positions, one ordered run per strip. Pixels also have a
global id: strips are laid end to end in emission order, so the first pixel of
the purple strip comes right after the last green one.
*/
#[derive(Debug, Clone, PartialEq)]
pub struct PixelLayout {
    strips: Vec<Vec<Point>>,
    // Global id of the first pixel of each strip, plus the total at the end
    offsets: Vec<usize>,
}

impl PixelLayout {
    fn new(strips: Vec<Vec<Point>>) -> Self {
        let mut offsets = Vec::with_capacity(strips.len() + 1);
        let mut total = 0;
        offsets.push(total);
        for strip in strips.iter() {
            total += strip.len();
            offsets.push(total);
        }
        PixelLayout { strips, offsets }
    }

    pub fn num_pixels(&self) -> usize {
        self.offsets[self.strips.len()]
    }

    pub fn num_strips(&self) -> usize {
        self.strips.len()
    }

    pub fn strip(&self, color: StripColor) -> &[Point] {
        &self.strips[color.index()]
    }

    pub fn strips(&self) -> &[Vec<Point>] {
        &self.strips
    }

    pub fn strip_range(&self, color: StripColor) -> Range<usize> {
        let i = color.index();
        self.offsets[i]..self.offsets[i + 1]
    }

    pub fn pixel(&self, id: usize) -> Option<(StripColor, Point)> {
        StripColor::ALL.iter().find_map(|&color| {
            let range = self.strip_range(color);
            if range.contains(&id) {
                Some((color, self.strips[color.index()][id - range.start]))
            } else {
                None
            }
        })
    }

    pub fn pixels(&self) -> impl Iterator<Item = (usize, StripColor, Point)> + '_ {
        StripColor::ALL
            .into_iter()
            .flat_map(move |color| self.strip(color).iter().map(move |p| (color, *p)))
            .enumerate()
            .map(|(id, (color, p))| (id, color, p))
    }
}
