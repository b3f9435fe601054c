/*
 * Copyright (c) Radzivon Bartoshyk, 3/2025. All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without modification,
 * are permitted provided that the following conditions are met:
 *
 * 1.  Redistributions of source code must retain the above copyright notice, this
 * list of conditions and the following disclaimer.
 *
 * 2.  Redistributions in binary form must reproduce the above copyright notice,
 * this list of conditions and the following disclaimer in the documentation
 * and/or other materials provided with the distribution.
 *
 * 3.  Neither the name of the copyright holder nor the names of its
 * contributors may be used to endorse or promote products derived from
 * this software without specific prior written permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::conv_support::{ConversionFlag, PixelLayout};
use crate::images::FrameImage;
use crate::reference::expected_pixel;
use std::fmt::{Display, Formatter};

/// First observed divergence between a converted frame and the reference
/// transform, with exact location and channel values.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelMismatch {
    pub x: u32,
    pub y: u32,
    pub channel: usize,
    pub expected: u8,
    pub actual: u8,
}

impl Display for PixelMismatch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "mismatch at pixel ({}, {}) channel {}: expected {}, actual {}",
            self.x, self.y, self.channel, self.expected, self.actual
        ))
    }
}

/// Compares every destination pixel against the reference transform.
///
/// Comparison is integer-exact, respects both strides and never touches
/// padding bytes. Stops at the first diverging channel; `None` means the
/// whole frame matched.
pub fn verify_conversion(
    src: &FrameImage<u8>,
    dst: &FrameImage<u8>,
    dst_layout: PixelLayout,
    flag: ConversionFlag,
    alpha: Option<u8>,
) -> Option<PixelMismatch> {
    let channels = dst_layout.get_channels_count();
    for y in 0..dst.height {
        let row = &dst.data[y as usize * dst.stride as usize..][..dst.width as usize * channels];
        for x in 0..dst.width {
            let expected = expected_pixel(src, x, y, flag, dst_layout, alpha);
            let actual = &row[x as usize * channels..][..channels];
            for (channel, (&actual, &expected)) in
                actual.iter().zip(expected.iter()).enumerate()
            {
                if actual != expected {
                    return Some(PixelMismatch {
                        x,
                        y,
                        channel,
                        expected,
                        actual,
                    });
                }
            }
        }
    }
    None
}

/// Checks that every padding byte of `dst` still carries `sentinel`.
///
/// Returns the row and byte offset of the first overwritten padding byte.
pub fn verify_padding(
    dst: &FrameImage<u8>,
    dst_layout: PixelLayout,
    sentinel: u8,
) -> Option<(u32, usize)> {
    let row_elements = dst.width as usize * dst_layout.get_channels_count();
    for (y, row) in dst.data.chunks_exact(dst.stride as usize).enumerate() {
        if let Some(position) = row[row_elements..].iter().position(|&b| b != sentinel) {
            return Some((y as u32, row_elements + position));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{FrameGenerator, PADDING_SENTINEL};
    use crate::rgbx_convert::rgbx_to_rgb;

    #[test]
    fn reports_exact_mismatch_location() {
        let mut generator = FrameGenerator::from_seed(21);
        let src = generator.random_frame(8, 4, PixelLayout::Rgbx);
        let src = src.to_fixed();
        let mut dst = crate::FrameImageMut::<u8>::alloc(8, 4, PixelLayout::Rgb);
        let dst_stride = dst.stride;
        rgbx_to_rgb(
            src.data,
            src.stride,
            dst.data.as_mut(),
            dst_stride,
            8,
            4,
            ConversionFlag::Normal,
            None,
        )
        .unwrap();

        assert_eq!(
            verify_conversion(&src, &dst.to_fixed(), PixelLayout::Rgb, ConversionFlag::Normal, None),
            None
        );

        // corrupt green of pixel (2, 1)
        let offset = dst_stride as usize + 2 * 3 + 1;
        dst.data.as_mut()[offset] ^= 0xFF;
        let mismatch = verify_conversion(
            &src,
            &dst.to_fixed(),
            PixelLayout::Rgb,
            ConversionFlag::Normal,
            None,
        )
        .expect("corruption must be detected");
        assert_eq!((mismatch.x, mismatch.y, mismatch.channel), (2, 1, 1));
        assert_eq!(mismatch.actual, mismatch.expected ^ 0xFF);
    }

    #[test]
    fn padding_bytes_are_never_compared_as_pixels() {
        let mut generator = FrameGenerator::from_seed(22);
        let src = generator.random_frame(5, 3, PixelLayout::Rgbx);
        let src = src.to_fixed();
        let mut dst = generator.target_frame(5, 3, PixelLayout::Rgb);
        let dst_stride = dst.stride;
        rgbx_to_rgb(
            src.data,
            src.stride,
            dst.data.as_mut(),
            dst_stride,
            5,
            3,
            ConversionFlag::Flipped,
            None,
        )
        .unwrap();
        let fixed = dst.to_fixed();
        assert_eq!(
            verify_conversion(&src, &fixed, PixelLayout::Rgb, ConversionFlag::Flipped, None),
            None
        );
        assert_eq!(verify_padding(&fixed, PixelLayout::Rgb, PADDING_SENTINEL), None);
    }

    #[test]
    fn detects_clobbered_padding() {
        let mut generator = FrameGenerator::from_seed(23);
        let mut dst = generator.target_frame(4, 2, PixelLayout::Rgb);
        // force at least one padding byte
        if dst.stride as usize == 4 * 3 {
            dst.stride += 1;
            let grown = vec![PADDING_SENTINEL; dst.stride as usize * 2];
            dst.data = crate::BufferStoreMut::Owned(grown);
        }
        let row_elements = 4 * 3;
        dst.data.as_mut()[row_elements] = 0;
        let fixed = dst.to_fixed();
        assert_eq!(
            verify_padding(&fixed, PixelLayout::Rgb, PADDING_SENTINEL),
            Some((0, row_elements))
        );
    }
}
