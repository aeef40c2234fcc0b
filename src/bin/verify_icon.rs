use anyhow::Result;
use placeholder_icons::verify::check_icon;
use placeholder_icons::IconConfig;
use std::path::PathBuf;

fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| IconConfig::default().icon_path(128));

    let config = IconConfig::default();
    let check = check_icon(&path, &config)?;

    println!("Checking icon: {}", path.display());
    println!("Image dimensions: {}x{}", check.width, check.height);
    let p = check.top_pixel;
    println!("Top left pixel RGBA: [{}, {}, {}, {}]", p[0], p[1], p[2], p[3]);

    if check.width != check.height {
        println!("⚠ Icon is not square");
    }
    if check.top_row_matches {
        println!("✓ Gradient starts at the top color");
    } else {
        println!("⚠ Top row does not match the gradient top color");
    }
    if check.glyph_present {
        println!("✓ Glyph outline detected");
    } else {
        println!("⚠ No glyph outline at the margin (expected below 16px)");
    }

    Ok(())
}
