//! # Tessella Models
//!
//! Pure procedural model builders on top of the tessella kernel. Each
//! builder returns a scene tree ready for [`tessella_stl::render`] or
//! [`tessella_stl::render_binary`]; nothing here touches files.
//!
//! Heightmaps enter as a sampling closure `(x, y) -> height` over the
//! unit square. Callers decode images (or synthesize terrain) however
//! they like and hand in the lookup.
//!
//! ## Usage
//!
//! ```rust
//! use glam::DVec3;
//! use tessella_models::plane_model;
//!
//! let ripple = |x: f64, y: f64| ((x * 8.0).sin() + (y * 8.0).cos()) * 0.1;
//! let terrain = plane_model(64, DVec3::new(50.0, 50.0, 4.0), ripple).unwrap();
//! assert_eq!(terrain.triangle_count(), 64 * 64 * 2);
//! ```

pub mod hex_tile;
pub mod plane;
pub mod prism;

pub use hex_tile::{hex_tile_model, hex_tile_models, hex_tiles};
pub use plane::plane_model;
pub use prism::prism_model;

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;
    use tessella_stl::{render, render_binary};

    #[test]
    fn test_plane_model_renders_to_ascii_stl() {
        let model = plane_model(2, DVec3::ONE, |_, _| 0.0).unwrap();
        let text = render(&model);
        assert!(text.starts_with("solid plane\nfacet normal 0 0 0\n"));
        assert!(text.ends_with("\nendsolid plane"));
        assert_eq!(text.matches("endfacet").count(), 8);
        assert!(!text.contains("\n\n"));
    }

    #[test]
    fn test_prism_model_renders_to_binary_stl() {
        let model = prism_model(1.0, 0.5, 3, 2, |_, _| 0.1).unwrap();
        let bytes = render_binary(&model);
        let facets = model.triangle_count();
        assert_eq!(bytes.len(), 84 + facets * 50);
        let count = u32::from_le_bytes(bytes[80..84].try_into().unwrap());
        assert_eq!(count as usize, facets);
    }

    #[test]
    fn test_hex_tiles_render_as_separate_documents() {
        let tiles = hex_tile_models(4.0, 1, 1, |_, _| 0.5).unwrap();
        for (index, tile) in tiles.iter().enumerate() {
            let text = render(tile);
            assert!(text.starts_with(&format!("solid {index}\n")));
            assert!(text.ends_with(&format!("\nendsolid {index}")));
        }
    }
}
