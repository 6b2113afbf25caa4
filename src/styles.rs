//! Pre-computed static text styles to avoid per-frame object construction.
//!
//! `MonoTextStyle` and `TextStyle` are small, but building them inside every
//! draw call copies font references around for nothing. Everything the dial
//! prints is white-on-black, so the full set of styles is known at compile
//! time and lives in the binary's read-only data.
//!
//! Anchors on the dial are mid-line anchors: a value row is vertically
//! centered on its anchor Y. The two multi-line blocks (connect prompt and
//! the PV/forecast block) instead flow downward from their anchor.

use embedded_graphics::{
    mono_font::{
        MonoTextStyle,
        ascii::{FONT_6X10, FONT_10X20},
    },
    pixelcolor::Rgb565,
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};
use profont::PROFONT_18_POINT;

use crate::colors::WHITE;

// =============================================================================
// Text Alignment Styles (const - zero runtime cost)
// =============================================================================

/// Centered on the anchor in both axes. Captions, battery percentage.
pub const CENTERED_MIDDLE: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

/// Centered horizontally, flowing downward. Multi-line blocks.
pub const CENTERED_TOP: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Top)
    .build();

/// Grows rightward from the anchor. Value half of a caption/value row.
pub const LEFT_MIDDLE: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Middle)
    .build();

/// Ends at the anchor. Caption half of a caption/value row.
pub const RIGHT_MIDDLE: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Right)
    .baseline(Baseline::Middle)
    .build();

// =============================================================================
// Pre-computed Text Styles (const - zero runtime cost)
// =============================================================================

/// Small white text (6x10). Captions, power values, battery row.
pub const LABEL_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, WHITE);

/// Medium white text (10x20). Connect prompt.
pub const PROMPT_STYLE_WHITE: MonoTextStyle<'static, Rgb565> =
    MonoTextStyle::new(&FONT_10X20, WHITE);

/// Large white text (`ProFont` 18pt). The central PV/forecast block.
pub const CENTER_VALUE_STYLE: MonoTextStyle<'static, Rgb565> =
    MonoTextStyle::new(&PROFONT_18_POINT, WHITE);
