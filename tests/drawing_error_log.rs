use image::RgbaImage;
use log::{Log, Metadata, Record};
use placeholder_icons::{generate_with, DefaultPainter, DrawError, IconConfig, IconPainter};
use std::sync::Mutex;
use tempfile::TempDir;

static LINES: Mutex<Vec<String>> = Mutex::new(Vec::new());

/// Keeps every record's formatted message.
struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        LINES.lock().unwrap().push(record.args().to_string());
    }

    fn flush(&self) {}
}

/// Refuses to paint one size and draws the rest normally.
struct RefuseSize(u32);

impl IconPainter for RefuseSize {
    fn paint(&self, canvas: &mut RgbaImage, config: &IconConfig) -> Result<(), DrawError> {
        if canvas.width() == self.0 {
            return Err(DrawError::InvalidGeometry {
                x0: 10,
                y0: 10,
                x1: 0,
                y1: 0,
            });
        }
        DefaultPainter.paint(canvas, config)
    }
}

#[test]
fn test_drawing_error_is_reported_on_console() {
    log::set_boxed_logger(Box::new(CaptureLogger)).expect("Failed to install logger");
    log::set_max_level(log::LevelFilter::Info);

    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config = IconConfig::with_output_dir(temp_dir.path());
    generate_with(&config, &RefuseSize(48)).unwrap();

    let lines = LINES.lock().unwrap().clone();
    let expected: Vec<String> = vec![
        format!("Generated {}", config.icon_path(16).display()),
        "Drawing error for size 48: invalid geometry: (10, 10) -> (0, 0)".to_string(),
        format!("Generated {}", config.icon_path(48).display()),
        format!("Generated {}", config.icon_path(128).display()),
    ];
    assert_eq!(lines, expected);
}
