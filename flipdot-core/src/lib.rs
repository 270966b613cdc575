//! Flipdot turns geometry and procedural animations into cell states for
//! flip-dot and LED matrix panels.
//!
//! A panel is a [`Grid`] of on/off cells addressed row-major: cell `(x, y)`
//! has index `y * width + x`. Everything in this crate eventually produces
//! either such indices or a [`PixelBuffer`] holding one bit per cell.
//!
//! # Layers
//!
//! 1. **Rasterize**: [`bresenham_line`], [`ellipse`], [`arrow`] and friends map
//!    shapes to cell indices. Each takes a [`Clip`] that decides whether
//!    off-panel cells are dropped or returned as-is.
//! 2. **Encode**: [`encode_bits`] / [`decode_bits`] convert a frame to and from
//!    the `'0'`/`'1'` wire string the panel controllers accept.
//! 3. **Animate**: every [`AnimationRenderer`] owns its state and draws one
//!    frame per call from a [`FrameTiming`].
//! 4. **Play**: a [`Show`] file binds an [`AnimationSpec`] to a grid and frame
//!    clock; [`render_show`] streams its frames into a [`FrameSink`].
//!
//! # Example
//!
//! ```
//! use flipdot::{Cell, Clip, Grid, PixelBuffer, bresenham_line};
//!
//! let grid = Grid::LARGE;
//! let cells = bresenham_line(grid, Cell::new(0, 0), Cell::new(4, 2), Clip::Bounds);
//! assert_eq!(cells, [0, 1, 86, 87, 172]);
//!
//! let mut frame = PixelBuffer::new(grid);
//! frame.apply(&cells, true);
//! assert_eq!(frame.count_on(), 5);
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(missing_docs_in_private_items)]

mod animation;
mod codec;
mod foundation;
mod frame;
mod playback;
mod raster;
mod text;

pub use animation::custom::CustomFrames;
pub use animation::ease::Ease;
pub use animation::logo::Logo;
pub use animation::pong::Pong;
pub use animation::scroll::TextScroll;
pub use animation::spec::{
    AnimationSpec, BitmapSpec, CustomFramesParams, LogoParams, PongParams, StarBounceParams,
    TextScrollParams, TimerParams, WaveParams,
};
pub use animation::star::StarBounce;
pub use animation::timer::Timer;
pub use animation::wave::Wave;
pub use animation::{Animation, AnimationRenderer};
pub use codec::bits::{decode_bits, decode_bits_strict, encode_bits};
pub use foundation::core::{
    Cell, CellIndex, Fps, FrameIndex, FrameRange, FrameTiming, Grid, Vec2,
};
pub use foundation::error::{FlipdotError, FlipdotResult};
pub use frame::buffer::PixelBuffer;
pub use frame::preview::{FrameRGBA, PreviewStyle, encode_png, render_preview, save_png};
pub use playback::player::{Player, RenderOpts, RenderStats, render_frame_at, render_show};
pub use playback::show::Show;
pub use playback::sink::{BitLinesSink, FrameSink, InMemorySink, PngSequenceSink, SinkConfig};
pub use raster::Clip;
pub use raster::arrow::{arrow, arrowhead_barbs};
pub use raster::ellipse::{ellipse, ellipse_cells};
pub use raster::line::{bresenham_line, line_cells, polyline};
pub use raster::shapes::{filled_rectangle, flood_fill, rectangle};
pub use text::font::{GLYPH_ADVANCE, GLYPH_HEIGHT, GLYPH_WIDTH, draw_text, glyph, text_width};
