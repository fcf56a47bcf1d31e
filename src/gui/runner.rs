//! GUI runner - launches the termhere window

use anyhow::Result;
use eframe::egui::{self, FontData, FontDefinitions, FontFamily};
use std::path::PathBuf;
use tracing::{info, warn};

use super::app::LauncherApp;
use crate::config::Config;

/// Load the config the window starts with. A broken file is logged and
/// replaced by defaults so the window still opens.
pub fn load_config(config_override: Option<PathBuf>) -> Config {
    let config_path = config_override.unwrap_or_else(Config::global_config_path);

    match Config::load_from(&config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!(
                "[termhere] Failed to parse config ({}): {}. Falling back to defaults.",
                config_path.display(),
                e
            );
            Config::with_defaults()
        }
    }
}

/// Run the main GUI application
pub fn run_gui(config_override: Option<PathBuf>) -> Result<()> {
    let config = load_config(config_override);
    info!("[termhere] Starting GUI");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Open Terminal Here")
            .with_inner_size([640.0, 560.0])
            .with_min_inner_size([520.0, 420.0])
            .with_decorations(true)
            .with_resizable(true),
        centered: true,
        ..Default::default()
    };

    let app = LauncherApp::new(config);

    eframe::run_native(
        "termhere",
        options,
        Box::new(|cc| {
            configure_fonts(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run GUI: {}", e))?;

    Ok(())
}

/// Add system fallbacks so curly quotes and arrows in labels render
fn configure_fonts(ctx: &egui::Context) {
    let mut fonts = FontDefinitions::default();

    #[cfg(target_os = "macos")]
    let font_fallbacks: &[(&str, &str)] = &[
        ("symbols", "/System/Library/Fonts/Apple Symbols.ttf"),
        ("arial_unicode", "/System/Library/Fonts/Supplemental/Arial Unicode.ttf"),
    ];

    #[cfg(not(target_os = "macos"))]
    let font_fallbacks: &[(&str, &str)] = &[
        ("symbols", "/usr/share/fonts/truetype/noto/NotoSansSymbols2-Regular.ttf"),
        ("dejavu", "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf"),
    ];

    for (name, path) in font_fallbacks {
        if let Ok(font_data) = std::fs::read(path) {
            fonts
                .font_data
                .insert((*name).to_owned(), FontData::from_owned(font_data).into());

            for family in [FontFamily::Proportional, FontFamily::Monospace] {
                if let Some(list) = fonts.families.get_mut(&family) {
                    list.push((*name).to_owned());
                }
            }

            info!("[termhere] Loaded fallback font '{}' from: {}", name, path);
        }
    }

    ctx.set_fonts(fonts);
}
