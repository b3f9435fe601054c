mod conv_error;
mod conv_support;
mod fuzz_loop;
mod generator;
mod images;
mod invoker;
mod reference;
mod rgbx_convert;
mod suite;
mod verifier;

pub use conv_error::{ConvError, MismatchedSize};
pub use conv_support::{ConversionFlag, PixelLayout};
pub use fuzz_loop::{run_fuzz_loop, FuzzFailure, FuzzOptions, FuzzReport, TestStatistics};
pub use generator::{FrameGenerator, MAX_ROW_PADDING, PADDING_SENTINEL};
pub use images::{BufferStoreMut, FrameImage, FrameImageMut};
pub use invoker::{
    ConversionInvoker, ExecutionMode, FrameKernel, RgbxToRgbKernel, RgbxToRgbaKernel,
};
pub use reference::expected_pixel;
pub use rgbx_convert::{rgbx_to_rgb, rgbx_to_rgba};
pub use suite::{test_all, test_rgbx_to_rgb, test_rgbx_to_rgba};
pub use verifier::{verify_conversion, verify_padding, PixelMismatch};
