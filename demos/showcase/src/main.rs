//! A three-variant phone showcase on the hover-reactive viewer.
//!
//! Renders `assets/scene.glb` when present; otherwise falls back to the
//! built-in slab so the demo runs without any staged assets.

use vitrine::app;
use vitrine::assets::ModelSource;
use vitrine::catalog::Catalog;

fn main() -> anyhow::Result<()> {
    let catalog = Catalog::from_hex_table(
        &[
            ("Natural Titanium", "#8F8A81", "#ffe7b9", "#6f6c64"),
            ("Blue Titanium", "#53596E", "#6395ff", "#21242e"),
            ("Black Titanium", "#454749", "#3b3b3b", "#181819"),
        ],
        &[("6.1\"", 15.0), ("6.7\"", 18.0)],
    )?;

    let source = if std::path::Path::new("assets/scene.glb").exists() {
        ModelSource::Path("scene.glb".to_string())
    } else {
        println!("assets/scene.glb not found, showing the built-in product");
        ModelSource::Builtin
    };

    app::run(catalog, source)
}
