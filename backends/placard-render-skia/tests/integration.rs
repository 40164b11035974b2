//! Integration tests for the skia canvas

use image::{Rgba, RgbaImage};
use placard_core::{config::CanvasConfig, traits::Surface, types::Point, Color};
use placard_fontdb::BuiltinFont;
use placard_render_skia::{Canvas, Monogram};

fn close(a: Color, b: Color) -> bool {
    let d = |x: u8, y: u8| (x as i16 - y as i16).abs() <= 2;
    d(a.r, b.r) && d(a.g, b.g) && d(a.b, b.b)
}

#[test]
fn test_default_canvas_matches_card_size() {
    let canvas = Canvas::from_config(&CanvasConfig::default()).unwrap();
    assert_eq!((canvas.width(), canvas.height()), (680, 960));

    let bitmap = canvas.into_bitmap();
    assert_eq!(bitmap.data.len(), 680 * 960 * 3);
    assert!(bitmap.data.iter().all(|&b| b == 255));
}

#[test]
fn test_monogram_file_is_decoded_scaled_and_pasted() {
    let accent = Color::rgb(139, 157, 195);
    let path = std::env::temp_dir().join(format!("placard_monogram_{}.png", std::process::id()));
    RgbaImage::from_pixel(400, 300, Rgba([accent.r, accent.g, accent.b, 255]))
        .save(&path)
        .unwrap();

    let monogram = Monogram::load(&path, 170).expect("monogram decodes");
    std::fs::remove_file(&path).ok();
    assert_eq!((monogram.width(), monogram.height()), (170, 127));

    let mut canvas = Canvas::new(680, 960, Color::white()).unwrap();
    canvas.paste(monogram.bitmap(), 255, 40);

    assert!(close(canvas.pixel(340, 100).unwrap(), accent));
    assert_eq!(canvas.pixel(254, 100), Some(Color::white()));
    assert_eq!(canvas.pixel(340, 39), Some(Color::white()));
    assert_eq!(canvas.pixel(340, 40 + 127), Some(Color::white()));
}

#[test]
fn test_text_and_rule_compose_on_one_canvas() {
    let text = Color::rgb(122, 111, 93);
    let divider = Color::rgb(196, 181, 160);
    let font = BuiltinFont::for_size(15.0);

    let mut canvas = Canvas::new(200, 60, Color::white()).unwrap();
    canvas.draw_text("TRAN TRONG", &font, Point::new(10.0, 5.0), text);
    canvas.draw_hline(0.0, 199.0, 40.0, divider);

    assert_eq!(canvas.pixel(0, 40), Some(divider));
    assert_eq!(canvas.pixel(199, 40), Some(divider));

    let rgba = canvas.to_rgba();
    let inked_rows: Vec<usize> = rgba
        .data
        .chunks_exact(200 * 4)
        .enumerate()
        .filter(|(_, row)| row.chunks_exact(4).any(|px| px[..3] == [text.r, text.g, text.b]))
        .map(|(y, _)| y)
        .collect();
    assert!(!inked_rows.is_empty());
    assert!(inked_rows.iter().all(|&y| (5..5 + 13).contains(&y)));
}
