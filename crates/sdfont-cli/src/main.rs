//! sdfont - Command-line SDF font atlas generator
//!
//! `sdfont <font-file> <output-directory>` rasterizes character codes
//! 0..=255 of the font into a 512x512 signed-distance-field atlas and
//! writes `<base>.png` plus a `<base>.dff` JSON descriptor.

use std::env;
use std::error::Error;
use std::fs;
use std::io::BufWriter;
use std::path::Path;

use sdfont_atlas::{AtlasBuilder, AtlasConfig, BuiltAtlas, GlyphSource};
use sdfont_font::FontFace;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("usage: sdfont <font-file> <output-directory>");
        std::process::exit(1);
    }

    run(Path::new(&args[1]), Path::new(&args[2]))
}

fn run(font_path: &Path, out_dir: &Path) -> Result<(), Box<dyn Error>> {
    let config = AtlasConfig::default();
    log::debug!(
        "using font file: {}, size: {}",
        font_path.display(),
        config.font_size
    );

    let data = fs::read(font_path)?;
    let face = FontFace::parse(&data, 0, config.font_size, config.flatness)?;

    let mut builder = AtlasBuilder::new(config, &face)?;
    builder.run()?;

    let base = output_base_name(font_path).ok_or("font file has no usable name")?;
    let png_name = format!("{base}.png");
    let atlas = builder.finish(face.display_name(), vec![png_name.clone()]);
    log::debug!("output {} glyphs", atlas.descriptor.glyphs.len());

    fs::create_dir_all(out_dir)?;
    let png_path = out_dir.join(&png_name);
    let dff_path = out_dir.join(format!("{base}.dff"));
    write_png(&png_path, &atlas)?;
    let descriptor_file = fs::File::create(&dff_path)?;
    serde_json::to_writer_pretty(BufWriter::new(descriptor_file), &atlas.descriptor)?;

    log::info!("wrote {} and {}", png_path.display(), dff_path.display());
    Ok(())
}

/// Output base name: the input file name with whitespace replaced by
/// hyphens and the extension stripped
fn output_base_name(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_str()?;
    let name: String = name
        .chars()
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .collect();
    match name.rsplit_once('.') {
        Some(("", _)) | None => Some(name.clone()),
        Some((stem, _)) => Some(stem.to_string()),
    }
}

fn write_png(path: &Path, atlas: &BuiltAtlas) -> Result<(), Box<dyn Error>> {
    let img = image::RgbaImage::from_raw(atlas.width, atlas.height, atlas.pixels.clone())
        .ok_or("atlas pixel buffer does not match its dimensions")?;
    img.save_with_format(path, image::ImageFormat::Png)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_base_name_strips_extension() {
        assert_eq!(output_base_name(Path::new("/fonts/Arial.ttf")).unwrap(), "Arial");
        assert_eq!(output_base_name(Path::new("a.b.ttf")).unwrap(), "a.b");
    }

    #[test]
    fn test_output_base_name_replaces_whitespace() {
        assert_eq!(
            output_base_name(Path::new("/fonts/DejaVu Sans Mono.ttf")).unwrap(),
            "DejaVu-Sans-Mono"
        );
    }

    #[test]
    fn test_output_base_name_without_extension() {
        assert_eq!(output_base_name(Path::new("fontfile")).unwrap(), "fontfile");
        assert_eq!(output_base_name(Path::new(".hidden")).unwrap(), ".hidden");
    }
}
