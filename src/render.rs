//! Render surface boundary
//!
//! The game draws through [`Surface`] and owns no rendering state of its own.
//! Each rendered frame is `clear`, then draw calls, then `present`.

use glam::Vec2;

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgba(255, 255, 255, 255);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

/// Drawing target supplied by the platform
pub trait Surface {
    fn clear(&mut self);
    /// Filled rectangle
    fn draw_region(&mut self, pos: Vec2, size: Vec2, color: Color);
    fn draw_text(&mut self, text: &str, pos: Vec2, color: Color);
    fn present(&mut self);
    fn window_size(&self) -> (u32, u32);
}

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Region { pos: Vec2, size: Vec2, color: Color },
    Text { text: String, pos: Vec2, color: Color },
}

/// Surface that records the draw calls of the current frame
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    /// Draw calls since the last `clear`
    pub commands: Vec<DrawCommand>,
    /// Draw calls of the last presented frame
    pub last_frame: Vec<DrawCommand>,
    pub frames_presented: u64,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Regions drawn in the last presented frame
    pub fn regions(&self) -> impl Iterator<Item = (Vec2, Vec2, Color)> + '_ {
        self.last_frame.iter().filter_map(|cmd| match cmd {
            DrawCommand::Region { pos, size, color } => Some((*pos, *size, *color)),
            DrawCommand::Text { .. } => None,
        })
    }

    /// Text drawn in the last presented frame
    pub fn texts(&self) -> impl Iterator<Item = (&str, Color)> + '_ {
        self.last_frame.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text { text, color, .. } => Some((text.as_str(), *color)),
            DrawCommand::Region { .. } => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.commands.clear();
    }

    fn draw_region(&mut self, pos: Vec2, size: Vec2, color: Color) {
        self.commands.push(DrawCommand::Region { pos, size, color });
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
            color,
        });
    }

    fn present(&mut self) {
        self.last_frame = std::mem::take(&mut self.commands);
        self.frames_presented += 1;
        log::trace!(
            "Presented frame {} ({} draw calls)",
            self.frames_presented,
            self.last_frame.len()
        );
    }

    fn window_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_moves_commands_to_last_frame() {
        let mut surface = RecordingSurface::new(800, 600);
        surface.clear();
        surface.draw_region(Vec2::ZERO, Vec2::ONE, Color::WHITE);
        surface.draw_text("0", Vec2::new(1.0, 2.0), Color::WHITE.with_alpha(90));
        surface.present();

        assert!(surface.commands.is_empty());
        assert_eq!(surface.frames_presented, 1);
        assert_eq!(surface.regions().count(), 1);
        let texts: Vec<_> = surface.texts().collect();
        assert_eq!(texts, vec![("0", Color::rgba(255, 255, 255, 90))]);
    }

    #[test]
    fn test_clear_drops_unpresented_commands() {
        let mut surface = RecordingSurface::new(800, 600);
        surface.draw_region(Vec2::ZERO, Vec2::ONE, Color::WHITE);
        surface.clear();
        surface.present();
        assert!(surface.last_frame.is_empty());
        assert_eq!(surface.window_size(), (800, 600));
    }
}
