use icosahedron_lib::{
    error::LayoutError,
    icosahedron::{GeometryTable, StripColor},
    init_logging,
    layout::{assemble, LayoutParams},
};

fn main() -> Result<(), LayoutError> {
    init_logging();

    let table = GeometryTable::icosahedron();
    table.validate()?;
    let layout = assemble(&table, &LayoutParams::default())?;

    println!("Total pixels: {}", layout.num_pixels());
    for color in StripColor::ALL {
        let strip = layout.strip(color);
        // Length of the path an LED strip would need to follow through its pixels
        let length: f64 = strip.windows(2).map(|w| (w[1] - w[0]).norm()).sum();
        let range = layout.strip_range(color);
        println!(
            "{:<7} steps {:>2}  pixels {:>3}  ids {:>3}..{:<3}  path length {:.1}",
            color.name(),
            table.strip(color).len(),
            strip.len(),
            range.start,
            range.end,
            length
        );
    }
    Ok(())
}
