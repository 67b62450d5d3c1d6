use icosahedron_lib::{
    error::LayoutError, generate, icosahedron::GeometryTable, init_logging, layout::LayoutParams,
};

fn main() -> Result<(), LayoutError> {
    init_logging();

    let line = generate(&GeometryTable::icosahedron(), &LayoutParams::default())?;
    println!("{}", line);
    Ok(())
}
