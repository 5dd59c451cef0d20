pub mod entity_renderer;
pub mod light_renderer;
pub mod overlay_renderer;
pub mod panel_renderer;
pub mod road_renderer;

pub use entity_renderer::EntityRenderer;
pub use light_renderer::LightRenderer;
pub use overlay_renderer::OverlayRenderer;
pub use panel_renderer::{PanelRenderer, PanelView};
pub use road_renderer::RoadRenderer;

use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, TextureQuery};
use sdl2::ttf::Font;
use sdl2::video::Window;

/// Draws one line of text with its top-left corner at (x, y). Returns the
/// rendered height so callers can stack lines.
pub fn draw_text(
    canvas: &mut Canvas<Window>,
    font: &Font,
    text: &str,
    x: i32,
    y: i32,
    color: Color,
) -> Result<u32, String> {
    if text.is_empty() {
        return Ok(0);
    }

    let surface = font
        .render(text)
        .blended(color)
        .map_err(|e| e.to_string())?;

    let texture_creator = canvas.texture_creator();
    let texture = texture_creator
        .create_texture_from_surface(&surface)
        .map_err(|e| e.to_string())?;

    let TextureQuery { width, height, .. } = texture.query();
    canvas.copy(&texture, None, Some(Rect::new(x, y, width, height)))?;

    Ok(height)
}
