mod compression;
mod contour;
mod events;
mod segment_tree;
mod sweep;
mod stitch;

#[doc(inline)]
pub use contour::contour;
