use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::foundation::core::Canvas;
use crate::foundation::error::{InkError, InkResult};
use crate::overlay::badge::BadgeLayout;
use crate::qr::placement::{Caption, QrPlacement};
use crate::raster::buffer::BufferAllocator;

/// Status string that routes the presenter to the setup screen.
pub const CONFIGURATION_STATUS: &str = "Configuration Mode";

/// Layout of the device setup screen.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SetupScreen {
    /// Heading drawn above the code.
    pub title: Caption,
    /// Instruction lines drawn below the code.
    pub captions: Vec<Caption>,
    /// Where the code goes.
    pub qr: QrPlacement,
}

impl Default for SetupScreen {
    fn default() -> Self {
        Self {
            title: Caption::centered("SMART DASHBOARD SETUP", 10, 2),
            captions: vec![
                Caption::centered("1. SCAN QR CODE TO CONNECT TO WIFI", 380, 1),
                Caption::centered("2. OPEN BROWSER TO 192.168.4.1", 410, 1),
                Caption::centered("3. CONFIGURE YOUR SETTINGS", 440, 1),
            ],
            qr: QrPlacement::default(),
        }
    }
}

impl SetupScreen {
    /// Title followed by the instruction captions, in draw order.
    pub fn all_captions(&self) -> impl Iterator<Item = &Caption> {
        std::iter::once(&self.title).chain(self.captions.iter())
    }
}

/// Everything the presenter needs to know about the panel and its screens.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Panel dimensions.
    pub canvas: Canvas,
    /// Battery badge calibration.
    pub badge: BadgeLayout,
    /// Setup screen layout.
    pub setup: SetupScreen,
    /// Glyph scale for centred message screens.
    pub message_scale: i32,
    /// Largest buffer the presenter may allocate, emulating the device heap.
    pub max_buffer_bytes: Option<usize>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas::PANEL_7IN3,
            badge: BadgeLayout::default(),
            setup: SetupScreen::default(),
            message_scale: 2,
            max_buffer_bytes: None,
        }
    }
}

impl RenderConfig {
    /// Parse JSON; missing fields take their defaults. The result is validated.
    pub fn from_json_str(s: &str) -> InkResult<Self> {
        let cfg: Self = serde_json::from_str(s)
            .map_err(|e| InkError::serde(format!("render config JSON parse failed: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse JSON from a reader. The result is validated.
    pub fn from_reader(r: impl Read) -> InkResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| InkError::serde(format!("render config JSON parse failed: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> InkResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            InkError::validation(format!("open render config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check geometry and scales.
    pub fn validate(&self) -> InkResult<()> {
        self.canvas.validate()?;
        self.badge.validate()?;
        if self.message_scale <= 0 {
            return Err(InkError::validation("message_scale must be > 0"));
        }
        if self.setup.qr.scale <= 0 {
            return Err(InkError::validation("setup qr scale must be > 0"));
        }
        if self.setup.qr.quiet_zone < 0 {
            return Err(InkError::validation("setup qr quiet_zone must be >= 0"));
        }
        for c in self.setup.all_captions() {
            if c.scale <= 0 {
                return Err(InkError::validation(format!(
                    "caption '{}' scale must be > 0",
                    c.text
                )));
            }
        }
        if self.max_buffer_bytes == Some(0) {
            return Err(InkError::validation("max_buffer_bytes must be > 0 when set"));
        }
        Ok(())
    }

    /// Allocator honouring `max_buffer_bytes`.
    pub fn allocator(&self) -> BufferAllocator {
        BufferAllocator {
            max_bytes: self.max_buffer_bytes,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/config.rs"]
mod tests;
