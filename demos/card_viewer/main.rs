//! Opens the card viewer on an OBJ asset.
//!
//! ```text
//! RUST_LOG=card_viewer=debug cargo run --example card_viewer -- assets/card.obj gold
//! ```

use card_viewer::prelude::*;

fn parse_tier(arg: Option<String>) -> StatusTier {
    match arg.as_deref().map(str::to_ascii_lowercase).as_deref() {
        Some("silver") => StatusTier::Silver,
        Some("gold") => StatusTier::Gold,
        Some("platinum") => StatusTier::Platinum,
        Some("obsidian") => StatusTier::Obsidian,
        _ => StatusTier::Blue,
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let path = args
        .next()
        .ok_or_else(|| anyhow::anyhow!("usage: card_viewer <model.obj> [tier]"))?;
    let tier = parse_tier(args.next());

    let mut card = CardComposition::default();
    card.load_scene(load_obj(&path)?);
    card.select_status(tier);

    CardViewerApp::new(card, LogSink::default())?
        .with_title("Membership Card")
        .with_hit_region(ScreenRect::centered(1200.0, 800.0, 0.6))
        .on_drag_changed(|dragging| log::debug!("dragging: {dragging}"))
        .run()
}
