//! Portrait compositing - expression portraits and small ruler icons
//!
//! Built-in portraits come from each leader's atlas: a fixed base region,
//! optionally overlaid with a smiling or angry mouth region at the leader's
//! overlay offset. Modification artwork replaces the built-in art wholesale
//! (no expression overlays) once it is rebased onto the game palette.

mod context;
mod error;

use std::sync::Arc;

pub use context::PortraitContext;
pub use error::PortraitError;

use crate::bitmap::Picture;
use crate::models::{ExpressionState, LeaderIdentity, LeaderModification};
use crate::palette::Palette;

/// Result type alias for portrait operations.
pub type Result<T> = std::result::Result<T, PortraitError>;

/// Native size of a large portrait.
pub const LARGE_PORTRAIT_SIZE: (u32, u32) = (139, 133);
/// Where the base portrait sits in a leader atlas.
pub const BASE_REGION_ORIGIN: (u32, u32) = (181, 67);
/// Size of an expression overlay region.
pub const OVERLAY_SIZE: (u32, u32) = (59, 49);
/// Where the smiling overlay sits in a leader atlas.
pub const SMILING_REGION_ORIGIN: (u32, u32) = (1, 51);
/// Where the angry overlay sits in a leader atlas.
pub const ANGRY_REGION_ORIGIN: (u32, u32) = (1, 151);

/// Native size of a small portrait.
pub const SMALL_PORTRAIT_SIZE: (u32, u32) = (27, 33);
/// Columns in the shared ruler icon grid.
pub const ICON_GRID_COLUMNS: u32 = 7;
/// Horizontal pitch between icon cells; cells start one pixel in.
const ICON_COLUMN_PITCH: u32 = 28;
const ICON_ROW_PITCH: u32 = 34;
/// Index painted over the icon background (index 0).
pub const ICON_HIGHLIGHT_INDEX: u8 = 191;

const RULER_ATLAS_PREFIX: &str = "KING";
const RULER_ICON_COUNT: u32 = 14;

/// Palette slots (start, count) modification portraits are rebased into.
const ENHANCED_SLOTS: (u8, u8) = (64, 16);
const CLASSIC_SLOTS: (u8, u8) = (1, 15);

/// Whether `picture` has exactly the `expected` dimensions.
pub fn accept_dimensions(picture: &Picture, expected: (u32, u32)) -> bool {
    picture.dimensions() == expected
}

/// A transparent placeholder on the standard palette.
pub fn blank(size: (u32, u32)) -> Picture {
    Picture::new(size.0, size.1, Palette::standard())
}

/// Grid cell (column, row) of a ruler atlas id in the shared icon atlas.
///
/// Recognizes `KING<n>` with `n` in 0..=13; anything else yields `None`.
///
/// ```
/// use leaderpix::portrait::ruler_icon_cell;
///
/// assert_eq!(ruler_icon_cell("KING5"), Some((5, 0)));
/// assert_eq!(ruler_icon_cell("KING08"), Some((1, 1)));
/// assert_eq!(ruler_icon_cell("KING14"), None);
/// ```
pub fn ruler_icon_cell(atlas_id: &str) -> Option<(u32, u32)> {
    let id: u32 = atlas_id.strip_prefix(RULER_ATLAS_PREFIX)?.parse().ok()?;
    if id >= RULER_ICON_COUNT {
        return None;
    }
    Some((id % ICON_GRID_COLUMNS, id / ICON_GRID_COLUMNS))
}

/// Atlas origin of the overlay region for `state`, if it has one.
pub fn expression_region(state: ExpressionState) -> Option<(u32, u32)> {
    match state {
        ExpressionState::Smiling => Some(SMILING_REGION_ORIGIN),
        ExpressionState::Angry => Some(ANGRY_REGION_ORIGIN),
        ExpressionState::Neutral => None,
    }
}

/// Cut the base portrait out of a leader atlas and apply the expression.
pub fn compose_expression(atlas: &Picture, overlay: (u32, u32), state: ExpressionState) -> Picture {
    let (bx, by) = BASE_REGION_ORIGIN;
    let (w, h) = LARGE_PORTRAIT_SIZE;
    let mut output = atlas.region(bx, by, w, h);

    if let Some((ox, oy)) = expression_region(state) {
        let mouth = atlas.region(ox, oy, OVERLAY_SIZE.0, OVERLAY_SIZE.1);
        output.add_layer(&mouth, overlay.0, overlay.1);
    }

    output
}

/// Rebase modification artwork onto the standard palette for the active
/// graphics mode.
pub fn rebase_portrait(picture: &Picture, enhanced: bool) -> Picture {
    let (start, count) = if enhanced { ENHANCED_SLOTS } else { CLASSIC_SLOTS };
    picture.make_palette(start, count, &Palette::standard())
}

/// Decode the artwork of the last record that carries a decodable image.
///
/// Records whose bytes fail to decode are skipped as if they had no image.
pub fn latest_artwork<'a>(
    records: &'a [Arc<LeaderModification>],
    artwork: impl Fn(&'a LeaderModification) -> Option<&'a [u8]>,
) -> Option<Picture> {
    records
        .iter()
        .rev()
        .filter_map(|record| artwork(record.as_ref()))
        .find_map(|bytes| Picture::decode(bytes).ok())
}

/// The modification large portrait for `identity`, rebased and ready to
/// show, or `None` when no record supplies usable artwork.
pub fn modification_portrait(ctx: &PortraitContext<'_>, identity: LeaderIdentity) -> Option<Picture> {
    let records = ctx.store.modifications_for(identity);
    let artwork = latest_artwork(&records, |m| m.portrait.as_deref())?;
    if !accept_dimensions(&artwork, LARGE_PORTRAIT_SIZE) {
        log::debug!(
            "Ignoring {:?} portrait override: {}x{} is not {}x{}",
            identity,
            artwork.width(),
            artwork.height(),
            LARGE_PORTRAIT_SIZE.0,
            LARGE_PORTRAIT_SIZE.1
        );
        return None;
    }
    Some(rebase_portrait(&artwork, ctx.enhanced_graphics()))
}

/// Resolve the small portrait for `identity`.
///
/// Order: modification artwork of exactly 27x33 remapped onto the icon
/// atlas palette, then the ruler icon grid cell for `KING<n>` atlases, then
/// a blank placeholder.
pub fn small_portrait(ctx: &PortraitContext<'_>, identity: LeaderIdentity) -> Result<Picture> {
    let records = ctx.store.modifications_for(identity);
    if let Some(artwork) = latest_artwork(&records, |m| m.portrait_small.as_deref()) {
        if accept_dimensions(&artwork, SMALL_PORTRAIT_SIZE) {
            let icons = ctx.resources.picture(ctx.icon_atlas())?;
            return Ok(artwork.match_colours(icons.palette(), 1, 255));
        }
        log::debug!("Ignoring {:?} small portrait override: wrong size", identity);
    }

    if let Some((col, row)) = identity.profile().atlas.and_then(ruler_icon_cell) {
        let icons = ctx.resources.picture(ctx.icon_atlas())?;
        return Ok(ruler_icon(&icons, col, row));
    }

    Ok(blank(SMALL_PORTRAIT_SIZE))
}

/// Cut one cell out of the icon grid and paint its background.
pub fn ruler_icon(icons: &Picture, col: u32, row: u32) -> Picture {
    let (w, h) = SMALL_PORTRAIT_SIZE;
    let mut cell = icons.region(ICON_COLUMN_PITCH * col + 1, ICON_ROW_PITCH * row, w, h);
    cell.colour_replace(0, ICON_HIGHLIGHT_INDEX, 0, 0, w, h);
    cell
}
